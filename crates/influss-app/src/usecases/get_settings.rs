//! Use case for getting the clip endpoint settings
//! 获取设置的用例

use anyhow::Result;
use influss_core::ports::SettingsPort;
use influss_core::settings::Settings;
use tracing::{debug, info_span, Instrument};

/// Use case for retrieving the current settings.
///
/// ## Behavior / 行为
/// - Loads settings from the settings port
/// - Returns all-empty defaults when nothing was saved yet
pub struct GetSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.settings.load().await?;

            debug!(configured = result.is_configured(), "Settings retrieved");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
