//! In-memory view of the settings, kept fresh by change notifications.
//! 设置缓存：通过变更通知保持最新

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use influss_core::ports::SettingsPort;
use influss_core::settings::{Settings, SettingsChange, SettingsRevision};
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

struct Entry {
    settings: Settings,
    revision: Option<SettingsRevision>,
}

/// Read-through cache in front of a [`SettingsPort`].
///
/// A load is served from memory while the store still reports the revision
/// the cached copy was read at. Writes from another process (the CLI saving
/// the same file) change the revision and force a reload. Changes broadcast
/// inside the process are applied as they arrive.
pub struct CachedSettings {
    inner: Arc<dyn SettingsPort>,
    cache: RwLock<Option<Entry>>,
}

impl CachedSettings {
    pub fn new(inner: Arc<dyn SettingsPort>) -> Self {
        Self {
            inner,
            cache: RwLock::new(None),
        }
    }

    /// Apply a change notification to the cached copy.
    ///
    /// A cold cache stays cold; the next load reads the store.
    pub async fn apply(&self, change: &SettingsChange) {
        let mut cache = self.cache.write().await;
        if let Some(entry) = cache.as_mut() {
            change.apply(&mut entry.settings);
            debug!(changed_fields = %change.to_log_string(), "settings cache updated");
        }
    }

    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    /// Follow `changes` until the sender is dropped.
    pub fn spawn_refresh(
        self: &Arc<Self>,
        mut changes: broadcast::Receiver<SettingsChange>,
    ) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(change) => this.apply(&change).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "settings change notifications lagged, invalidating cache");
                        this.invalidate().await;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        info!("settings change channel closed, stopping cache refresh");
                        break;
                    }
                }
            }
        })
    }
}

#[async_trait]
impl SettingsPort for CachedSettings {
    async fn load(&self) -> Result<Settings> {
        let revision = self.inner.revision().await?;
        if let Some(entry) = self.cache.read().await.as_ref() {
            if entry.revision == revision {
                return Ok(entry.settings.clone());
            }
        }

        let mut cache = self.cache.write().await;
        // Stat again under the lock; a save may have finished while we waited.
        let revision = self.inner.revision().await?;
        if let Some(entry) = cache.as_ref() {
            if entry.revision == revision {
                return Ok(entry.settings.clone());
            }
            debug!("settings store changed since last load, reloading");
        }

        let settings = self.inner.load().await?;
        *cache = Some(Entry {
            settings: settings.clone(),
            revision,
        });
        Ok(settings)
    }

    /// Saves through to the store and drops the cached copy.
    ///
    /// The cache lock is held across the save, so overlapping saves land in
    /// the store in lock order and no load can cache a value in between.
    async fn save(&self, settings: &Settings) -> Result<()> {
        let mut cache = self.cache.write().await;
        let saved = self.inner.save(settings).await;
        *cache = None;
        saved
    }

    async fn revision(&self) -> Result<Option<SettingsRevision>> {
        self.inner.revision().await
    }
}
