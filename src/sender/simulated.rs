//! Stand-in sender used when the page supplies none.

use super::ContactSender;
use crate::error::SubmissionResult;
use crate::models::ContactRequest;
use async_trait::async_trait;
use std::time::Duration;

/// Waits a fixed interval, then reports success and discards the payload.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl ContactSender for SimulatedSender {
    async fn send(&self, request: &ContactRequest) -> SubmissionResult<()> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(
            inquiry_type = %request.inquiry_type(),
            "Simulated delivery of contact request"
        );
        Ok(())
    }
}
