//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (settings file, HTTP client) / 创建 infra 层具体实现
//! - ✅ Hook the settings cache to change notifications / 连接设置缓存与变更通知
//! - ✅ Group everything into `AppDeps` / 将依赖组装为 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Do not decide what an empty endpoint means
//! - 不判断"端点为空时怎样"
//!
//! > **This is the only place allowed to depend on influss-infra and influss-app together.**
//! > **这是唯一允许同时依赖 influss-infra 和 influss-app 的地方。**

use std::sync::Arc;

use influss_app::{AppDeps, CachedSettings};
use influss_core::ports::{ClipTransportPort, FeedbackPort, SettingsObserverPort, SettingsPort};
use influss_infra::{FileSettingsRepository, HttpClipTransport, ObservableSettings, TracingFeedback};
use tracing::info;

use super::config::ResolvedConfig;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("App directory resolution failed: {0}")]
    AppDirs(String),

    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Build the settings stack:
/// file → change broadcast → in-memory cache.
///
/// Must run inside a Tokio runtime: the cache refresh task is spawned here and
/// lives as long as the observable store.
fn create_settings(config: &ResolvedConfig) -> Arc<CachedSettings> {
    let store = Arc::new(ObservableSettings::new(FileSettingsRepository::new(
        config.settings_path.clone(),
    )));
    let cached = Arc::new(CachedSettings::new(store.clone()));
    cached.spawn_refresh(store.subscribe());

    info!(path = %config.settings_path.display(), "Settings store ready");
    cached
}

fn create_transport(config: &ResolvedConfig) -> WiringResult<Arc<dyn ClipTransportPort>> {
    let transport = HttpClipTransport::new(config.request_timeout)
        .map_err(|e| WiringError::HttpClientInit(format!("{e:#}")))?;

    info!(timeout_secs = config.request_timeout.as_secs(), "HTTP clip transport ready");
    Ok(Arc::new(transport))
}

/// Wire all dependencies into `AppDeps`
/// 将所有依赖注入到 AppDeps
pub fn wire_dependencies(config: &ResolvedConfig) -> WiringResult<AppDeps> {
    let settings: Arc<dyn SettingsPort> = create_settings(config);
    let transport = create_transport(config)?;
    let feedback: Arc<dyn FeedbackPort> = Arc::new(TracingFeedback::new());

    Ok(AppDeps {
        settings,
        transport,
        feedback,
    })
}
