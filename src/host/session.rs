//! One native-messaging session: read frames until the browser closes the
//! pipe, handle each message on its own task, write replies from one task.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use influss_app::ClipServiceHandle;
use influss_core::clip::ClipResult;
use influss_core::host::{HostCommand, HostError, HostReply, HostRequest};
use influss_core::trigger::ClipTrigger;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::framing::{read_frame, write_frame, MAX_HOST_FRAME_BYTES};
use crate::bootstrap::AppRuntime;

const REPLY_QUEUE_CAPACITY: usize = 64;

const ENCODE_FAILED_REPLY: &[u8] = br#"{"type":"error","message":"failed to encode reply"}"#;

#[derive(Clone)]
pub struct HostSession {
    runtime: Arc<AppRuntime>,
    clips: ClipServiceHandle,
}

impl HostSession {
    pub fn new(runtime: Arc<AppRuntime>, clips: ClipServiceHandle) -> Self {
        Self { runtime, clips }
    }

    /// Serve until `reader` reaches a clean EOF.
    ///
    /// Handlers still in flight at EOF are awaited so their replies are sent.
    /// A broken or oversize frame ends the session with an error, and so does
    /// a reply that can no longer be written.
    pub async fn run<R, W>(self, mut reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(REPLY_QUEUE_CAPACITY);
        let mut writer_task = tokio::spawn(write_replies(writer, rx));
        let mut writer_done = None;
        let mut in_flight = JoinSet::new();

        info!("Native messaging session started");
        let read_result = loop {
            let read = tokio::select! {
                read = read_frame(&mut reader) => read,
                written = &mut writer_task => {
                    writer_done = Some(written);
                    break Err(anyhow!("reply writer stopped"));
                }
            };

            match read {
                Ok(Some(frame)) => {
                    let session = self.clone();
                    let tx = tx.clone();
                    in_flight.spawn(async move {
                        let reply = session.handle_frame(&frame).await;
                        if tx.send(reply).await.is_err() {
                            warn!("reply writer gone, dropping reply");
                        }
                    });
                }
                Ok(None) => break Ok(()),
                Err(err) => {
                    error!(error = %format!("{err:#}"), "Failed to read host frame");
                    let reply = HostReply::Error {
                        message: format!("{err:#}"),
                    };
                    let _ = tx.send(encode_reply(&reply, None)).await;
                    break Err(err);
                }
            }
        };

        if writer_done.is_some() {
            // Nobody can receive their replies any more.
            in_flight.shutdown().await;
        }
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Host message handler panicked");
            }
        }
        drop(tx);

        let written = match writer_done {
            Some(written) => written,
            None => writer_task.await,
        };
        written.context("reply writer task failed")??;
        read_result
    }

    async fn handle_frame(&self, frame: &[u8]) -> Vec<u8> {
        let request = match HostRequest::decode(frame) {
            Ok(request) => request,
            Err(rejected) => {
                warn!(error = %rejected.error, "Rejected host message");
                let reply = HostReply::error(&rejected.error);
                return encode_reply(&reply, rejected.request_id.as_ref());
            }
        };

        let request_id = request.request_id;
        let command = request.message.into_command();
        let span = info_span!("host.message", request_id = ?request_id);

        let reply = self.execute(command).instrument(span).await;
        encode_reply(&reply, request_id.as_ref())
    }

    async fn execute(&self, command: HostCommand) -> HostReply {
        match command {
            HostCommand::Clip(trigger) => self.clip(trigger).await,
            HostCommand::GetSettings => {
                match self.runtime.usecases().get_settings().execute().await {
                    Ok(settings) => HostReply::Settings(settings),
                    Err(err) => internal_error(err),
                }
            }
            HostCommand::SaveSettings(settings) => {
                match self.runtime.usecases().update_settings().execute(settings).await {
                    Ok(_) => HostReply::Saved { saved: true },
                    Err(err) => internal_error(err),
                }
            }
        }
    }

    async fn clip(&self, trigger: ClipTrigger) -> HostReply {
        match self.clips.clip(trigger).await {
            Ok(Some(result)) => HostReply::ClipResult(result),
            Ok(None) => HostReply::Ignored,
            Err(err) => HostReply::ClipResult(ClipResult {
                success: false,
                message: format!("{err:#}"),
            }),
        }
    }
}

fn internal_error(err: anyhow::Error) -> HostReply {
    warn!(error = %format!("{err:#}"), "Host request failed");
    HostReply::error(&HostError::Internal(format!("{err:#}")))
}

/// Encode `reply`, swapping in an error reply when it would not fit in a frame.
fn encode_reply(reply: &HostReply, request_id: Option<&Value>) -> Vec<u8> {
    let bytes = match reply.encode(request_id) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(error = %err, "Failed to encode host reply");
            return ENCODE_FAILED_REPLY.to_vec();
        }
    };
    if bytes.len() <= MAX_HOST_FRAME_BYTES {
        return bytes;
    }

    warn!(len = bytes.len(), "Host reply exceeds frame limit");
    let too_large = HostReply::Error {
        message: format!(
            "reply too large: {} > {} bytes",
            bytes.len(),
            MAX_HOST_FRAME_BYTES
        ),
    };
    // An oversized request id cannot be echoed either.
    [request_id, None]
        .into_iter()
        .filter_map(|id| too_large.encode(id).ok())
        .find(|bytes| bytes.len() <= MAX_HOST_FRAME_BYTES)
        .unwrap_or_else(|| ENCODE_FAILED_REPLY.to_vec())
}

async fn write_replies<W>(mut writer: W, mut rx: mpsc::Receiver<Vec<u8>>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(reply) = rx.recv().await {
        write_frame(&mut writer, &reply).await?;
        debug!(len = reply.len(), "Host reply written");
    }
    Ok(())
}
