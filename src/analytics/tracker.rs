//! The analytics trait and its `tracing`-backed implementation.

use super::Metadata;
use std::error::Error;

/// Sink for form analytics.
///
/// Fire-and-forget: errors are reported back so the caller can log them,
/// but they never influence the form.
pub trait Analytics: Send + Sync {
    /// A submission attempt for `form_name` started.
    fn track_form_submit(&self, form_name: &str, metadata: &Metadata) -> anyhow::Result<()>;

    /// A submission attempt failed.
    fn track_error(
        &self,
        error: &(dyn Error + Send + Sync),
        context: &Metadata,
    ) -> anyhow::Result<()>;

    /// A named custom event.
    fn track(&self, event: &str, metadata: &Metadata) -> anyhow::Result<()>;
}

/// Emits analytics as structured `tracing` events under the `analytics` target.
#[derive(Debug, Clone, Default)]
pub struct TracingAnalytics;

impl TracingAnalytics {
    pub fn new() -> Self {
        Self
    }
}

impl Analytics for TracingAnalytics {
    fn track_form_submit(&self, form_name: &str, metadata: &Metadata) -> anyhow::Result<()> {
        tracing::info!(
            target: "analytics",
            form_name = %form_name,
            metadata = %metadata,
            "form_submit"
        );
        Ok(())
    }

    fn track_error(
        &self,
        error: &(dyn Error + Send + Sync),
        context: &Metadata,
    ) -> anyhow::Result<()> {
        tracing::warn!(
            target: "analytics",
            error = %error,
            context = %context,
            "error"
        );
        Ok(())
    }

    fn track(&self, event: &str, metadata: &Metadata) -> anyhow::Result<()> {
        tracing::info!(
            target: "analytics",
            event = %event,
            metadata = %metadata,
            "event"
        );
        Ok(())
    }
}
