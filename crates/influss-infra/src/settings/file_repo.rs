use anyhow::{Context, Result};
use async_trait::async_trait;
use influss_core::ports::SettingsPort;
use influss_core::settings::{Settings, SettingsRevision};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Settings stored as a pretty-printed JSON object on disk.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    /// Ensure the repository's parent directory exists, creating it if necessary.
    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Writes `content` to a temporary sibling file, then renames it over the target.
    ///
    /// Readers see either the previous contents or the complete new contents.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp settings failed: {}", tmp_path.display()))?;

        // TODO: rename over an existing file is not atomic on every Windows filesystem.
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp settings to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    /// Loads settings from disk.
    ///
    /// A missing file yields `Settings::default()`; read and parse failures are
    /// reported with the file path as context.
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "settings file missing, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        self.atomic_write(&content).await
    }

    /// Modification time and size of the settings file.
    ///
    /// Every save replaces the file, so another process writing it shows up
    /// as a new revision.
    async fn revision(&self) -> Result<Option<SettingsRevision>> {
        let metadata = match fs::metadata(&self.path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("stat settings failed: {}", self.path.display()))
            }
        };
        let modified = metadata
            .modified()
            .with_context(|| format!("read settings mtime failed: {}", self.path.display()))?;

        Ok(Some(SettingsRevision {
            modified,
            len: metadata.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_returns_defaults_when_file_is_missing() {
        let dir = tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        let settings = repo.load().await.unwrap();

        assert_eq!(settings, Settings::default());
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("settings.json");
        let repo = FileSettingsRepository::new(&path);

        repo.save(&Settings::new("https://example.com/clips", "u", "p"))
            .await
            .unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn saved_file_uses_flat_storage_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let repo = FileSettingsRepository::new(&path);

        repo.save(&Settings::new("https://example.com/clips", "alice", "secret"))
            .await
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["endpoint"], "https://example.com/clips");
        assert_eq!(raw["username"], "alice");
        assert_eq!(raw["password"], "secret");
    }

    #[tokio::test]
    async fn corrupt_file_reports_path_in_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        let repo = FileSettingsRepository::new(&path);

        let err = repo.load().await.unwrap_err();

        assert!(format!("{:#}", err).contains("parse settings failed"));
    }

    #[tokio::test]
    async fn revision_tracks_the_file_on_disk() {
        let dir = tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));
        assert_eq!(repo.revision().await.unwrap(), None);

        repo.save(&Settings::new("https://a.example", "", ""))
            .await
            .unwrap();
        let first = repo.revision().await.unwrap().unwrap();
        assert_eq!(repo.revision().await.unwrap(), Some(first));

        repo.save(&Settings::new("https://longer.example", "", ""))
            .await
            .unwrap();
        assert_ne!(repo.revision().await.unwrap(), Some(first));
    }
}
