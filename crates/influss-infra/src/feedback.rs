//! Log-only feedback: every clip outcome becomes one structured log line.

use influss_core::clip::ClipResult;
use influss_core::ports::FeedbackPort;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFeedback;

impl TracingFeedback {
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackPort for TracingFeedback {
    fn notify(&self, source: &str, result: &ClipResult) {
        if result.success {
            info!(source, message = %result.message, "clip succeeded");
        } else {
            warn!(source, message = %result.message, "clip failed");
        }
    }
}
