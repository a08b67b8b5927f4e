//! Influss Application Orchestration Layer
//!
//! This crate contains the use cases (settings, clip dispatch, trigger
//! handling) and the background clip service the host talks to.

pub mod app_paths;
pub mod clip_service;
pub mod deps;
pub mod settings_cache;
pub mod usecases;

pub use clip_service::{ClipCommand, ClipService, ClipServiceHandle};
pub use deps::AppDeps;
pub use settings_cache::CachedSettings;
