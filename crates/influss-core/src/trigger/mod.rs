//! User gestures that initiate a clip, and how each one resolves to a URL.

mod menu;

pub use menu::{ContextMenuItem, MenuContext, CLIP_MENU_ITEM};

/// A context-menu click as reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuClick {
    pub menu_item_id: String,
    pub page_url: Option<String>,
    pub link_url: Option<String>,
}

impl ContextMenuClick {
    /// A click on the clip menu item.
    pub fn clip(page_url: Option<String>, link_url: Option<String>) -> Self {
        Self {
            menu_item_id: CLIP_MENU_ITEM.id.to_string(),
            page_url,
            link_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipTrigger {
    /// Toolbar / page action click on the current tab.
    ToolbarClick { tab_url: String },

    /// Context-menu click on a page or a link.
    ContextMenu(ContextMenuClick),

    /// `{action: "clipWebsite", url}` sent by the popup.
    PopupMessage { url: String },
}

/// What a trigger asks the dispatcher to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerResolution {
    Clip(String),
    /// Not meant for us (e.g. another extension's menu item).
    Ignored,
    /// Meant for us, but carried no usable URL.
    NoUrl,
}

impl ClipTrigger {
    pub fn source(&self) -> &'static str {
        match self {
            ClipTrigger::ToolbarClick { .. } => "toolbar",
            ClipTrigger::ContextMenu(_) => "context_menu",
            ClipTrigger::PopupMessage { .. } => "popup",
        }
    }

    /// Pick the URL to clip. A link target wins over the page URL.
    pub fn resolve(&self) -> TriggerResolution {
        let url = match self {
            ClipTrigger::ToolbarClick { tab_url } => non_empty(Some(tab_url)),
            ClipTrigger::PopupMessage { url } => non_empty(Some(url)),
            ClipTrigger::ContextMenu(click) => {
                if click.menu_item_id != CLIP_MENU_ITEM.id {
                    return TriggerResolution::Ignored;
                }
                non_empty(click.link_url.as_ref()).or_else(|| non_empty(click.page_url.as_ref()))
            }
        };

        match url {
            Some(url) => TriggerResolution::Clip(url),
            None => TriggerResolution::NoUrl,
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_click_clips_tab_url() {
        let trigger = ClipTrigger::ToolbarClick {
            tab_url: "https://example.com/article".into(),
        };

        assert_eq!(
            trigger.resolve(),
            TriggerResolution::Clip("https://example.com/article".into())
        );
    }

    #[test]
    fn context_menu_prefers_link_over_page() {
        let trigger = ClipTrigger::ContextMenu(ContextMenuClick::clip(
            Some("https://example.com/page".into()),
            Some("https://example.com/link".into()),
        ));

        assert_eq!(
            trigger.resolve(),
            TriggerResolution::Clip("https://example.com/link".into())
        );
    }

    #[test]
    fn context_menu_falls_back_to_page_url() {
        let trigger = ClipTrigger::ContextMenu(ContextMenuClick::clip(
            Some("https://example.com/page".into()),
            None,
        ));

        assert_eq!(
            trigger.resolve(),
            TriggerResolution::Clip("https://example.com/page".into())
        );
    }

    #[test]
    fn empty_link_url_does_not_shadow_page_url() {
        let trigger = ClipTrigger::ContextMenu(ContextMenuClick::clip(
            Some("https://example.com/page".into()),
            Some("  ".into()),
        ));

        assert_eq!(
            trigger.resolve(),
            TriggerResolution::Clip("https://example.com/page".into())
        );
    }

    #[test]
    fn foreign_menu_item_is_ignored() {
        let trigger = ClipTrigger::ContextMenu(ContextMenuClick {
            menu_item_id: "someone-else".into(),
            page_url: Some("https://example.com".into()),
            link_url: None,
        });

        assert_eq!(trigger.resolve(), TriggerResolution::Ignored);
    }

    #[test]
    fn missing_urls_resolve_to_no_url() {
        let menu = ClipTrigger::ContextMenu(ContextMenuClick::clip(None, None));
        let popup = ClipTrigger::PopupMessage { url: String::new() };

        assert_eq!(menu.resolve(), TriggerResolution::NoUrl);
        assert_eq!(popup.resolve(), TriggerResolution::NoUrl);
    }

    #[test]
    fn source_names_are_stable() {
        assert_eq!(
            ClipTrigger::PopupMessage { url: "x".into() }.source(),
            "popup"
        );
        assert_eq!(
            ClipTrigger::ContextMenu(ContextMenuClick::clip(None, None)).source(),
            "context_menu"
        );
    }
}
