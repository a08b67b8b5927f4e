//! # influss-core
//!
//! Core domain models and business rules for the Influss clipper.
//!
//! This crate contains pure domain logic without any infrastructure dependencies:
//! settings, clip requests/results, trigger resolution, the browser host
//! messages and the port traits the infrastructure layer implements.

// Public module exports
pub mod app_dirs;
pub mod clip;
pub mod config;
pub mod host;
pub mod ports;
pub mod settings;
pub mod trigger;

// Re-export commonly used types at the crate root
pub use clip::{basic_authorization, ClipError, ClipRequest, ClipResult};
pub use config::AppConfig;
pub use settings::{Settings, SettingsChange};
pub use trigger::{ClipTrigger, ContextMenuClick, TriggerResolution};
