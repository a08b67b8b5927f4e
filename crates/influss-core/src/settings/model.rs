use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown instead of a secret in logs and CLI output.
pub const REDACTED: &str = "***";

/// User settings for the clip endpoint.
///
/// The persisted keys are exactly `endpoint`, `username` and `password`.
/// Every field defaults to an empty string; an empty `endpoint` means
/// "not configured" and is a valid state, not an error.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl Settings {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// `true` once an endpoint has been saved.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// The password as it may appear in logs: empty stays empty, anything else is masked.
    pub fn masked_password(&self) -> &'static str {
        if self.password.is_empty() {
            ""
        } else {
            REDACTED
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &self.masked_password())
            .finish()
    }
}
