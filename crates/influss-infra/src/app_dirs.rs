//! Per-user data root, resolved with the `dirs` crate.

use std::path::PathBuf;

use influss_core::app_dirs::AppDirs;
use influss_core::ports::{AppDirsError, AppDirsPort};

const APP_DIR_NAME: &str = "influss";

/// Selects a separate data root, e.g. `INFLUSS_PROFILE=work` → `influss-work`.
pub const PROFILE_ENV: &str = "INFLUSS_PROFILE";

pub struct DirsAppDirsAdapter {
    profile: Option<String>,
    #[cfg(test)]
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// An empty profile counts as no profile.
    pub fn for_profile(profile: Option<String>) -> Self {
        Self {
            profile: profile.filter(|p| !p.is_empty()),
            #[cfg(test)]
            base_override: None,
        }
    }

    /// Resolve against `base` instead of the system data-local directory.
    #[cfg(test)]
    fn with_base_data_local_dir(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_override = Some(base.into());
        self
    }

    fn app_dir_name(&self) -> String {
        match &self.profile {
            Some(profile) => format!("{APP_DIR_NAME}-{profile}"),
            None => APP_DIR_NAME.to_string(),
        }
    }

    #[cfg(not(test))]
    fn base_data_local_dir(&self) -> Option<PathBuf> {
        dirs::data_local_dir()
    }

    #[cfg(test)]
    fn base_data_local_dir(&self) -> Option<PathBuf> {
        self.base_override.clone().or_else(dirs::data_local_dir)
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base.join(self.app_dir_name()),
        })
    }
}
