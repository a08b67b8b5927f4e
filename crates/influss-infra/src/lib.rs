//! # influss-infra
//!
//! Infrastructure adapters implementing the `influss-core` ports.

pub mod app_dirs;
pub mod feedback;
pub mod http;
pub mod settings;

pub use app_dirs::{DirsAppDirsAdapter, PROFILE_ENV};
pub use feedback::TracingFeedback;
pub use http::HttpClipTransport;
pub use settings::{FileSettingsRepository, ObservableSettings};
