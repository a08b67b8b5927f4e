use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuContext {
    Page,
    Link,
}

/// Context-menu entry registered by the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextMenuItem {
    pub id: &'static str,
    pub title: &'static str,
    pub contexts: &'static [MenuContext],
}

pub const CLIP_MENU_ITEM: ContextMenuItem = ContextMenuItem {
    id: "influss-clip-website",
    title: "Read it later with Influss",
    contexts: &[MenuContext::Page, MenuContext::Link],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_menu_item_serializes_like_the_browser_expects() {
        let value = serde_json::to_value(CLIP_MENU_ITEM).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "influss-clip-website",
                "title": "Read it later with Influss",
                "contexts": ["page", "link"],
            })
        );
    }
}
