//! Use case for reacting to a clip gesture
//! 处理用户触发的剪藏动作

use std::sync::Arc;

use influss_core::clip::{ClipError, ClipResult};
use influss_core::ports::FeedbackPort;
use influss_core::trigger::{ClipTrigger, TriggerResolution};
use tracing::{debug, info_span, Instrument};

use super::ClipUrl;

/// Turns a toolbar click, context-menu click or popup message into a clip.
///
/// Returns `None` when the trigger was not meant for us (foreign menu item).
/// Every other trigger produces a result that is also handed to feedback.
pub struct HandleTrigger {
    clip: ClipUrl,
    feedback: Arc<dyn FeedbackPort>,
}

impl HandleTrigger {
    pub fn new(clip: ClipUrl, feedback: Arc<dyn FeedbackPort>) -> Self {
        Self { clip, feedback }
    }

    pub async fn execute(&self, trigger: ClipTrigger) -> Option<ClipResult> {
        let source = trigger.source();
        let span = info_span!("usecase.handle_trigger.execute", source);

        async {
            let result = match trigger.resolve() {
                TriggerResolution::Ignored => {
                    debug!(?trigger, "Trigger not addressed to us, ignoring");
                    return None;
                }
                TriggerResolution::NoUrl => ClipResult::failed(&ClipError::MissingUrl),
                TriggerResolution::Clip(url) => self.clip.execute(&url).await,
            };

            self.feedback.notify(source, &result);
            Some(result)
        }
        .instrument(span)
        .await
    }
}
