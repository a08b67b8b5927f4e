//! Change-notifying decorator over any settings store.

use anyhow::Result;
use async_trait::async_trait;
use influss_core::ports::{SettingsObserverPort, SettingsPort};
use influss_core::settings::{Settings, SettingsChange, SettingsRevision};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};

const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Broadcasts a [`SettingsChange`] after every save that modified at least one field.
pub struct ObservableSettings<P> {
    inner: P,
    changes: broadcast::Sender<SettingsChange>,
    // Serializes load-old/save-new so two concurrent saves cannot report stale diffs.
    write_lock: Mutex<()>,
}

impl<P: SettingsPort> ObservableSettings<P> {
    pub fn new(inner: P) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            inner,
            changes,
            write_lock: Mutex::new(()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: SettingsPort> SettingsPort for ObservableSettings<P> {
    async fn load(&self) -> Result<Settings> {
        self.inner.load().await
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let previous = self.inner.load().await?;
        self.inner.save(settings).await?;

        let change = SettingsChange::between(&previous, settings);
        if change.is_empty() {
            debug!("settings saved without changes, nothing to broadcast");
            return Ok(());
        }

        info!(changed_fields = %change.to_log_string(), "settings changed");
        // No subscribers is fine: nobody is caching settings right now.
        let _ = self.changes.send(change);
        Ok(())
    }

    async fn revision(&self) -> Result<Option<SettingsRevision>> {
        self.inner.revision().await
    }
}

impl<P: SettingsPort> SettingsObserverPort for ObservableSettings<P> {
    fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.changes.subscribe()
    }
}
