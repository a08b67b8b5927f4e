//! Business logic use cases
//!
//! [Trigger: toolbar / context menu / popup message]
//         ↓
// HandleTrigger      → resolves the URL, reports feedback
//         ↓
// ClipUrl            → precondition, one authenticated POST, result mapping
//
// GetSettings / UpdateSettings → settings UI (CLI, host messages)

pub mod clip_url;
pub mod get_settings;
pub mod handle_trigger;
pub mod update_settings;

pub use clip_url::ClipUrl;
pub use get_settings::GetSettings;
pub use handle_trigger::HandleTrigger;
pub use update_settings::UpdateSettings;
