//! reqwest-backed clip delivery.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use influss_core::clip::ClipRequest;
use influss_core::ports::{ClipTransportPort, TransportError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, debug_span, Instrument};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("influss/", env!("CARGO_PKG_VERSION"));

/// Sends clips with one shared `reqwest::Client`, built once at startup.
#[derive(Clone)]
pub struct HttpClipTransport {
    client: reqwest::Client,
}

impl HttpClipTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("build HTTP client failed")?;

        Ok(Self { client })
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    let text = error_chain(&err);
    if err.is_builder() {
        TransportError::InvalidEndpoint(text)
    } else if err.is_timeout() {
        TransportError::Timeout(text)
    } else if err.is_connect() {
        TransportError::Connect(text)
    } else {
        TransportError::Request(text)
    }
}

/// Flatten the source chain; reqwest's top-level message hides the DNS/TLS cause.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[async_trait]
impl ClipTransportPort for HttpClipTransport {
    async fn post_clip(
        &self,
        endpoint: &str,
        authorization: &str,
        request: &ClipRequest,
    ) -> Result<u16, TransportError> {
        let span = debug_span!("infra.http.post_clip", endpoint = %endpoint);

        async {
            let response = self
                .client
                .post(endpoint)
                .header(CONTENT_TYPE, "application/json")
                .header(AUTHORIZATION, authorization)
                .json(request)
                .send()
                .await
                .map_err(classify)?;

            let status = response.status().as_u16();
            debug!(status, "endpoint responded");
            Ok(status)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_the_crate_version() {
        assert!(USER_AGENT.starts_with("influss/"));
    }

    #[tokio::test]
    async fn malformed_endpoint_is_reported_as_invalid() {
        let transport = HttpClipTransport::new(Duration::from_secs(5)).unwrap();

        let err = transport
            .post_clip("not a url", "Basic Og==", &ClipRequest::new("https://x"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::InvalidEndpoint(_)), "{err:?}");
    }
}
