use async_trait::async_trait;
use formlink_contact::error::{SubmissionError, SubmissionResult};
use formlink_contact::{ContactRequest, ContactSender};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock send capability for testing.
///
/// Records every payload it receives and answers with a configured result.
/// A gated sender holds each call until [`MockSender::release`] is called.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSender {
    payloads: Arc<Mutex<Vec<serde_json::Value>>>,
    failure: Arc<Mutex<Option<SubmissionError>>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockSender {
    pub fn new() -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            gate: None,
        }
    }

    pub fn failing(error: SubmissionError) -> Self {
        let sender = Self::new();
        sender.fail_with(Some(error));
        sender
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new()
        }
    }

    pub fn fail_with(&self, error: Option<SubmissionError>) {
        *self.failure.lock().unwrap() = error;
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn payloads(&self) -> Vec<serde_json::Value> {
        self.payloads.lock().unwrap().clone()
    }
}

impl Default for MockSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactSender for MockSender {
    async fn send(&self, request: &ContactRequest) -> SubmissionResult<()> {
        self.payloads
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let failure = self.failure.lock().unwrap().clone();
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
