use async_trait::async_trait;
use thiserror::Error;

use crate::clip::ClipRequest;

/// Transport-level failure: no HTTP status was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

#[async_trait]
pub trait ClipTransportPort: Send + Sync {
    /// POST `request` as JSON to `endpoint` with the given `Authorization`
    /// header value and return the response status code.
    ///
    /// Any status (including 4xx/5xx) is `Ok`; only the absence of a
    /// response is an error. The response body is not read.
    async fn post_clip(
        &self,
        endpoint: &str,
        authorization: &str,
        request: &ClipRequest,
    ) -> Result<u16, TransportError>;
}
