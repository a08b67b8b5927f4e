//! Background dispatcher for clip triggers.
//!
//! Triggers arrive from any number of producers (host session, CLI) through a
//! bounded channel. Each one is handled on its own task, so a slow endpoint
//! never blocks the next gesture.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use influss_core::clip::ClipResult;
use influss_core::trigger::ClipTrigger;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::usecases::HandleTrigger;

pub struct ClipCommand {
    pub trigger: ClipTrigger,
    pub reply: oneshot::Sender<Option<ClipResult>>,
}

/// Cloneable sender side of the [`ClipService`].
#[derive(Clone)]
pub struct ClipServiceHandle {
    tx: mpsc::Sender<ClipCommand>,
}

impl ClipServiceHandle {
    /// Submit a trigger and wait for its result.
    ///
    /// `Ok(None)` means the trigger was ignored.
    pub async fn clip(&self, trigger: ClipTrigger) -> Result<Option<ClipResult>> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(ClipCommand { trigger, reply })
            .await
            .map_err(|_| anyhow!("clip service stopped"))?;

        rx.await
            .map_err(|_| anyhow!("clip service dropped the request"))
    }
}

pub struct ClipService {
    handler: Arc<HandleTrigger>,
    rx: mpsc::Receiver<ClipCommand>,
}

impl ClipService {
    pub fn new(handler: Arc<HandleTrigger>, capacity: usize) -> (Self, ClipServiceHandle) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { handler, rx }, ClipServiceHandle { tx })
    }

    /// Runs until every handle has been dropped.
    pub async fn run(mut self) {
        info!("clip service started");
        while let Some(ClipCommand { trigger, reply }) = self.rx.recv().await {
            let handler = Arc::clone(&self.handler);
            tokio::spawn(async move {
                let result = handler.execute(trigger).await;
                if reply.send(result).is_err() {
                    debug!("clip requester went away before the result");
                }
            });
        }
        info!("clip service stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::ClipUrl;
    use async_trait::async_trait;
    use influss_core::clip::ClipRequest;
    use influss_core::ports::{ClipTransportPort, FeedbackPort, SettingsPort, TransportError};
    use influss_core::settings::Settings;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct GatedTransport {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl ClipTransportPort for GatedTransport {
        async fn post_clip(
            &self,
            _endpoint: &str,
            _authorization: &str,
            request: &ClipRequest,
        ) -> Result<u16, TransportError> {
            if request.url.contains("slow") {
                self.gate.notified().await;
            }
            Ok(200)
        }
    }

    struct StaticSettings;

    #[async_trait]
    impl SettingsPort for StaticSettings {
        async fn load(&self) -> anyhow::Result<Settings> {
            Ok(Settings::new("https://clips.example", "", ""))
        }

        async fn save(&self, _settings: &Settings) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct NoFeedback;

    impl FeedbackPort for NoFeedback {
        fn notify(&self, _source: &str, _result: &ClipResult) {}
    }

    fn service(gate: Arc<Notify>) -> (ClipService, ClipServiceHandle) {
        let handler = HandleTrigger::new(
            ClipUrl::new(Arc::new(StaticSettings), Arc::new(GatedTransport { gate })),
            Arc::new(NoFeedback),
        );
        ClipService::new(Arc::new(handler), 8)
    }

    #[tokio::test]
    async fn slow_clip_does_not_block_the_next_one() {
        let gate = Arc::new(Notify::new());
        let (service, handle) = service(gate.clone());
        tokio::spawn(service.run());

        let slow_handle = handle.clone();
        let slow = tokio::spawn(async move {
            slow_handle
                .clip(ClipTrigger::PopupMessage {
                    url: "https://slow.example".into(),
                })
                .await
        });

        let fast = tokio::time::timeout(
            Duration::from_secs(5),
            handle.clip(ClipTrigger::PopupMessage {
                url: "https://fast.example".into(),
            }),
        )
        .await
        .expect("fast clip must not wait for the slow one")
        .unwrap()
        .unwrap();
        assert!(fast.success);

        gate.notify_one();
        let slow = slow.await.unwrap().unwrap().unwrap();
        assert!(slow.success);
    }

    #[tokio::test]
    async fn handle_fails_once_service_is_gone() {
        let (service, handle) = service(Arc::new(Notify::new()));
        drop(service);

        let err = handle
            .clip(ClipTrigger::ToolbarClick {
                tab_url: "https://a.example".into(),
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("stopped"));
    }
}
