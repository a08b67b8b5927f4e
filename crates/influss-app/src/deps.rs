//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;
use influss_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Settings dependencies / 设置依赖
    pub settings: Arc<dyn SettingsPort>,

    // Clip delivery / 剪藏投递
    pub transport: Arc<dyn ClipTransportPort>,

    // User feedback / 用户反馈
    pub feedback: Arc<dyn FeedbackPort>,
}
