//! Use case for updating the clip endpoint settings
//! 更新设置的用例

use anyhow::Result;
use influss_core::ports::SettingsPort;
use influss_core::settings::{Settings, SettingsChange};
use tracing::{info, info_span, Instrument};

/// Use case for updating the settings.
///
/// ## Behavior / 行为
/// - Loads current settings for comparison
/// - Logs changed fields (password always masked)
/// - Persists the new settings wholesale through the settings port
///
/// No validation: an empty endpoint is a legitimate "not configured" state.
pub struct UpdateSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(SettingsChange)` describing what changed (possibly empty)
    /// - `Err(e)` if loading or saving fails
    pub async fn execute(&self, settings: Settings) -> Result<SettingsChange> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            let old_settings = self.settings.load().await?;

            let changes = SettingsChange::between(&old_settings, &settings);
            if changes.is_empty() {
                info!("Updating settings (no changes detected)");
            } else {
                info!(
                    changed_fields = %changes.to_log_string(),
                    "Updating settings"
                );
            }

            self.settings.save(&settings).await?;

            info!(configured = settings.is_configured(), "Settings updated successfully");
            Ok(changes)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct MockSettingsPort {
        stored: Mutex<Settings>,
        load_count: AtomicUsize,
        save_count: AtomicUsize,
    }

    impl MockSettingsPort {
        fn new(initial: Settings) -> Self {
            Self {
                stored: Mutex::new(initial),
                load_count: AtomicUsize::new(0),
                save_count: AtomicUsize::new(0),
            }
        }

        fn load_count(&self) -> usize {
            self.load_count.load(Ordering::SeqCst)
        }

        fn save_count(&self) -> usize {
            self.save_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SettingsPort for MockSettingsPort {
        async fn load(&self) -> anyhow::Result<Settings> {
            self.load_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
            self.save_count.fetch_add(1, Ordering::SeqCst);
            *self.stored.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_update_settings_loads_before_save() {
        let repo = Arc::new(MockSettingsPort::new(Settings::default()));
        let updated = Settings::new("https://example.com/clips", "alice", "secret");

        let usecase = UpdateSettings::new(repo.clone());
        let change = usecase.execute(updated.clone()).await.unwrap();

        assert_eq!(repo.load_count(), 1);
        assert_eq!(repo.save_count(), 1);
        assert_eq!(*repo.stored.lock().unwrap(), updated);
        assert_eq!(change.changed_fields(), vec!["endpoint", "username", "password"]);
    }

    #[tokio::test]
    async fn test_update_settings_accepts_empty_endpoint() {
        let repo = Arc::new(MockSettingsPort::new(Settings::new("https://a", "u", "p")));

        let usecase = UpdateSettings::new(repo.clone());
        usecase.execute(Settings::default()).await.unwrap();

        assert!(!repo.stored.lock().unwrap().is_configured());
    }

    #[tokio::test]
    async fn test_update_settings_saves_even_without_changes() {
        let settings = Settings::new("https://a", "u", "p");
        let repo = Arc::new(MockSettingsPort::new(settings.clone()));

        let change = UpdateSettings::new(repo.clone())
            .execute(settings)
            .await
            .unwrap();

        assert!(change.is_empty());
        assert_eq!(repo.save_count(), 1);
    }
}
