use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
///
/// This is not the user's endpoint settings: it describes how the process
/// itself runs (timeouts, file locations, logging).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Outbound request timeout in seconds (0 = not set)
    pub request_timeout_secs: u64,

    /// Settings file location (empty = not set, no existence check)
    pub settings_path: PathBuf,

    /// Turn off the rolling log file
    pub disable_file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from a TOML value
    ///
    /// **Prohibited**: no validation or default value logic here. Missing keys
    /// become empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            request_timeout_secs: toml_value
                .get("network")
                .and_then(|n| n.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            settings_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("settings_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            disable_file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("disable_file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            request_timeout_secs: 0,
            settings_path: PathBuf::new(),
            disable_file_logging: false,
        }
    }
}
