//! Clip request/result model and the clip error taxonomy.

mod auth;

pub use auth::basic_authorization;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of the outbound POST: `{"url": "<string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRequest {
    pub url: String,
}

impl ClipRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Why a single clip attempt failed.
///
/// Every variant is terminal for that attempt: there is no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// Endpoint is empty; reported before any network attempt.
    #[error("endpoint not configured")]
    NotConfigured,

    /// The trigger carried no usable URL.
    #[error("no URL to clip")]
    MissingUrl,

    /// Settings could not be read from storage.
    #[error("settings unavailable: {0}")]
    SettingsUnavailable(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// DNS, TLS, connect, timeout or request-building failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Outcome of a clip attempt, handed to whatever surfaces feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipResult {
    pub success: bool,
    pub message: String,
}

impl ClipResult {
    pub fn clipped(url: &str) -> Self {
        Self {
            success: true,
            message: format!("clipped {}", url),
        }
    }

    pub fn failed(error: &ClipError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }

    pub fn from_outcome(url: &str, outcome: Result<(), ClipError>) -> Self {
        match outcome {
            Ok(()) => Self::clipped(url),
            Err(err) => Self::failed(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_as_single_url_field() {
        let body = serde_json::to_string(&ClipRequest::new("https://example.com/a")).unwrap();
        assert_eq!(body, r#"{"url":"https://example.com/a"}"#);
    }

    #[test]
    fn not_configured_message_is_stable() {
        let result = ClipResult::failed(&ClipError::NotConfigured);

        assert!(!result.success);
        assert_eq!(result.message, "endpoint not configured");
    }

    #[test]
    fn http_status_message_contains_code() {
        let result = ClipResult::failed(&ClipError::HttpStatus { status: 503 });

        assert!(!result.success);
        assert!(result.message.contains("503"));
    }

    #[test]
    fn transport_message_carries_underlying_text() {
        let result = ClipResult::failed(&ClipError::Transport(
            "error sending request: connection refused".into(),
        ));

        assert!(result.message.contains("connection refused"));
    }

    #[test]
    fn successful_outcome_maps_to_success() {
        let result = ClipResult::from_outcome("https://example.com", Ok(()));

        assert!(result.success);
        assert!(result.message.contains("https://example.com"));
    }
}
