use formlink_contact::{Analytics, Metadata};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// One recorded analytics call.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsCall {
    FormSubmit { form_name: String, metadata: Metadata },
    Error { error: String, context: Metadata },
    Event { name: String, metadata: Metadata },
}

/// Mock analytics collaborator that records calls and can be told to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAnalytics {
    calls: Arc<Mutex<Vec<AnalyticsCall>>>,
    fail: bool,
}

#[allow(dead_code)]
impl MockAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<AnalyticsCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: AnalyticsCall) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            anyhow::bail!("analytics transport unavailable");
        }
        Ok(())
    }
}

impl Analytics for MockAnalytics {
    fn track_form_submit(&self, form_name: &str, metadata: &Metadata) -> anyhow::Result<()> {
        self.record(AnalyticsCall::FormSubmit {
            form_name: form_name.to_string(),
            metadata: metadata.clone(),
        })
    }

    fn track_error(
        &self,
        error: &(dyn Error + Send + Sync),
        context: &Metadata,
    ) -> anyhow::Result<()> {
        self.record(AnalyticsCall::Error {
            error: error.to_string(),
            context: context.clone(),
        })
    }

    fn track(&self, event: &str, metadata: &Metadata) -> anyhow::Result<()> {
        self.record(AnalyticsCall::Event {
            name: event.to_string(),
            metadata: metadata.clone(),
        })
    }
}
