use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::settings::{Settings, SettingsChange, SettingsRevision};

#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// Last saved settings, or all-empty defaults when nothing was saved yet.
    async fn load(&self) -> anyhow::Result<Settings>;

    /// Persist `settings` wholesale.
    async fn save(&self, settings: &Settings) -> anyhow::Result<()>;

    /// Revision of what `load` would read right now.
    ///
    /// `None` when nothing is stored yet, or when the store has no way to
    /// tell versions apart.
    async fn revision(&self) -> anyhow::Result<Option<SettingsRevision>> {
        Ok(None)
    }
}

/// Change notifications for settings written anywhere in the process.
pub trait SettingsObserverPort: Send + Sync {
    /// Each receiver gets every non-empty change saved after it subscribed.
    fn subscribe(&self) -> broadcast::Receiver<SettingsChange>;
}
