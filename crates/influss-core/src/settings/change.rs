//! Field-level settings change notification.
//!
//! Mirrors a key-value storage change event: only the fields whose value
//! actually changed are carried, each with its new value.

use std::fmt;

use super::model::{Settings, REDACTED};

#[derive(Clone, Default, PartialEq, Eq)]
pub struct SettingsChange {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SettingsChange {
    /// Compute the change that turns `old` into `new`.
    pub fn between(old: &Settings, new: &Settings) -> Self {
        Self {
            endpoint: (old.endpoint != new.endpoint).then(|| new.endpoint.clone()),
            username: (old.username != new.username).then(|| new.username.clone()),
            password: (old.password != new.password).then(|| new.password.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.endpoint.is_none() && self.username.is_none() && self.password.is_none()
    }

    /// Apply the changed fields to `settings`, leaving the others untouched.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(username) = &self.username {
            settings.username = username.clone();
        }
        if let Some(password) = &self.password {
            settings.password = password.clone();
        }
    }

    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.endpoint.is_some() {
            fields.push("endpoint");
        }
        if self.username.is_some() {
            fields.push("username");
        }
        if self.password.is_some() {
            fields.push("password");
        }
        fields
    }

    /// Structured log string; the password value is always masked.
    pub fn to_log_string(&self) -> String {
        let mut parts = Vec::new();

        if let Some(endpoint) = &self.endpoint {
            parts.push(format!("endpoint → {:?}", endpoint));
        }
        if let Some(username) = &self.username {
            parts.push(format!("username → {:?}", username));
        }
        if self.password.is_some() {
            parts.push(format!("password → {}", REDACTED));
        }

        if parts.is_empty() {
            "(no changes)".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl fmt::Debug for SettingsChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsChange")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_settings_produce_empty_change() {
        let settings = Settings::new("https://a", "u", "p");
        let change = SettingsChange::between(&settings, &settings);

        assert!(change.is_empty());
        assert_eq!(change.to_log_string(), "(no changes)");
    }

    #[test]
    fn only_modified_fields_are_carried() {
        let old = Settings::new("https://a", "u", "p");
        let new = Settings::new("https://b", "u", "p");

        let change = SettingsChange::between(&old, &new);

        assert_eq!(change.endpoint.as_deref(), Some("https://b"));
        assert_eq!(change.username, None);
        assert_eq!(change.password, None);
        assert_eq!(change.changed_fields(), vec!["endpoint"]);
    }

    #[test]
    fn clearing_a_field_is_a_change_to_empty() {
        let old = Settings::new("https://a", "u", "p");
        let new = Settings::new("https://a", "u", "");

        let change = SettingsChange::between(&old, &new);

        assert_eq!(change.password.as_deref(), Some(""));
    }

    #[test]
    fn apply_leaves_unchanged_fields_alone() {
        let mut cached = Settings::new("https://a", "alice", "secret");
        let change = SettingsChange {
            username: Some("bob".to_string()),
            ..Default::default()
        };

        change.apply(&mut cached);

        assert_eq!(cached, Settings::new("https://a", "bob", "secret"));
    }

    #[test]
    fn log_string_masks_password() {
        let old = Settings::default();
        let new = Settings::new("https://a", "alice", "hunter2");

        let log = SettingsChange::between(&old, &new).to_log_string();

        assert!(log.contains("endpoint → \"https://a\""));
        assert!(log.contains("username → \"alice\""));
        assert!(log.contains("password → ***"));
        assert!(!log.contains("hunter2"));
        assert!(!format!("{:?}", SettingsChange::between(&old, &new)).contains("hunter2"));
    }
}
