//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Locate the config file (flag, environment, data dir) / 定位配置文件
//! - ✅ Read TOML into the `AppConfig` DTO / 读取 TOML 到 AppConfig DTO
//! - ✅ Resolve empty facts to runtime defaults / 将空值解析为运行时默认值
//!
//! `load_config` itself accepts whatever is in the file; defaults are applied
//! only in [`ResolvedConfig::resolve`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use influss_app::app_paths::AppPaths;
use influss_core::app_dirs::AppDirs;
use influss_core::config::AppConfig;
use influss_infra::http::DEFAULT_REQUEST_TIMEOUT;

pub const CONFIG_ENV: &str = "INFLUSS_CONFIG";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file means "no config".
pub fn load_config_if_present(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}

/// `--config` wins, then `$INFLUSS_CONFIG`, then the data-dir default.
pub fn resolve_config_path(
    flag: Option<PathBuf>,
    env: Option<OsString>,
    paths: &AppPaths,
) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| paths.config_path.clone())
}

/// Everything bootstrap needs, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub app_data_root: PathBuf,
    pub config_path: PathBuf,
    pub settings_path: PathBuf,
    pub logs_dir: PathBuf,
    pub file_logging: bool,
    pub request_timeout: Duration,
}

impl ResolvedConfig {
    pub fn resolve(config: &AppConfig, dirs: &AppDirs, config_path: PathBuf) -> Self {
        let paths = AppPaths::from_app_dirs(dirs);

        let settings_path = if config.settings_path.as_os_str().is_empty() {
            paths.settings_path
        } else {
            config.settings_path.clone()
        };

        let request_timeout = if config.request_timeout_secs == 0 {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            Duration::from_secs(config.request_timeout_secs)
        };

        Self {
            app_data_root: dirs.app_data_root.clone(),
            config_path,
            settings_path,
            logs_dir: paths.logs_dir,
            file_logging: !config.disable_file_logging,
            request_timeout,
        }
    }
}
