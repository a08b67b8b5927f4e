//! Use case for sending one URL to the configured endpoint
//! 发送剪藏请求的用例

use std::sync::Arc;

use influss_core::clip::{basic_authorization, ClipError, ClipRequest, ClipResult};
use influss_core::ports::{ClipTransportPort, SettingsPort};
use influss_core::settings::Settings;
use tracing::{info, info_span, warn, Instrument};

/// Sends a URL to the user's endpoint as an authenticated JSON POST.
///
/// ## Behavior / 行为
/// - Reads the current settings at dispatch time
/// - Empty endpoint: fails with [`ClipError::NotConfigured`], no network attempt
/// - Exactly one POST, no retry
/// - 2xx is success, anything else is reported with its status code
pub struct ClipUrl {
    settings: Arc<dyn SettingsPort>,
    transport: Arc<dyn ClipTransportPort>,
}

impl ClipUrl {
    pub fn new(settings: Arc<dyn SettingsPort>, transport: Arc<dyn ClipTransportPort>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub async fn execute(&self, url: &str) -> ClipResult {
        let span = info_span!("usecase.clip_url.execute", url = %url);

        async {
            let outcome = match self.settings.load().await {
                Ok(settings) => self.dispatch(url, &settings).await,
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "Failed to load settings");
                    Err(ClipError::SettingsUnavailable(format!("{err:#}")))
                }
            };

            match &outcome {
                Ok(()) => info!("Clip delivered"),
                Err(err) => warn!(error = %err, "Clip failed"),
            }

            ClipResult::from_outcome(url, outcome)
        }
        .instrument(span)
        .await
    }

    /// Dispatch with already loaded settings.
    pub async fn dispatch(&self, url: &str, settings: &Settings) -> Result<(), ClipError> {
        if !settings.is_configured() {
            return Err(ClipError::NotConfigured);
        }

        let authorization = basic_authorization(&settings.username, &settings.password);
        let status = self
            .transport
            .post_clip(&settings.endpoint, &authorization, &ClipRequest::new(url))
            .await
            .map_err(|e| ClipError::Transport(e.to_string()))?;

        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ClipError::HttpStatus { status })
        }
    }
}
