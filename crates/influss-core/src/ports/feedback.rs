use crate::clip::ClipResult;

/// Surfaces the outcome of a clip to the user.
///
/// Exactly one implementation is wired per process.
pub trait FeedbackPort: Send + Sync {
    fn notify(&self, source: &str, result: &ClipResult);
}
