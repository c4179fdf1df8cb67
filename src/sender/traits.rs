use crate::error::SubmissionResult;
use crate::models::ContactRequest;
use async_trait::async_trait;

/// Delivers a contact request.
///
/// Called exactly once per submission attempt. The request is borrowed for
/// the duration of the call only; implementations must not keep it.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> SubmissionResult<()>;
}
