//! # Pure Data Module / 纯数据模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define the application configuration data structure
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic**
//! ❌ **No default value calculation** (empty values are facts; the bootstrap resolves them)

mod app_config;

pub use app_config::AppConfig;
