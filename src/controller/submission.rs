//! The submission lifecycle of one form instance.

use super::{FormView, SubmissionState};
use crate::analytics::{Analytics, Metadata, TracingAnalytics, CONTACT_FORM_SUCCESS_EVENT};
use crate::config::Config;
use crate::error::SubmissionError;
use crate::metrics::SubmissionMetrics;
use crate::models::{ContactFormFields, ContactRequest, FormField};
use crate::notification::{Notification, Notifier, TracingNotifier};
use crate::sender::{ContactSender, SimulatedSender};
use crate::validation::{self, FieldErrors};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Settings of a form instance.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Name reported with analytics events
    pub form_name: String,

    /// How long the confirmation is shown before the form resets
    pub reset_delay: Duration,

    /// Delay of the stand-in sender used when none is injected
    pub simulated_send_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            form_name: "contact_form".to_string(),
            reset_delay: Duration::from_secs(3),
            simulated_send_delay: Duration::from_secs(2),
        }
    }
}

impl From<&Config> for ControllerConfig {
    fn from(config: &Config) -> Self {
        Self {
            form_name: config.form_name.clone(),
            reset_delay: config.success_reset_delay(),
            simulated_send_delay: config.simulated_send_delay(),
        }
    }
}

/// Result of a submit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The send capability accepted the request.
    Sent,
    /// The send capability rejected the request; the inputs are kept.
    Failed(SubmissionError),
    /// Another attempt was in flight or the confirmation was showing.
    Ignored,
}

#[derive(Debug, Default)]
struct FormData {
    state: SubmissionState,
    fields: ContactFormFields,
    errors: FieldErrors,
}

// Form data is only locked briefly and never across an await.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller for a single contact form instance.
///
/// A submit is accepted only from `Idle` or `Failed`; while an attempt is in
/// flight further submits return [`SubmitOutcome::Ignored`]. Analytics and
/// notifications are emitted after each transition and their failures are
/// only logged.
///
/// Dropping the controller aborts a pending confirmation reset.
pub struct FormSubmissionController {
    form: Arc<Mutex<FormData>>,
    sender: Arc<dyn ContactSender>,
    analytics: Arc<dyn Analytics>,
    notifier: Arc<dyn Notifier>,
    metrics: SubmissionMetrics,
    config: ControllerConfig,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl FormSubmissionController {
    /// Create a controller.
    ///
    /// With `sender` set to `None` a [`SimulatedSender`] waiting
    /// `config.simulated_send_delay` is used.
    pub fn new(
        sender: Option<Arc<dyn ContactSender>>,
        analytics: Arc<dyn Analytics>,
        notifier: Arc<dyn Notifier>,
        config: ControllerConfig,
    ) -> Self {
        let sender = sender.unwrap_or_else(|| {
            Arc::new(SimulatedSender::new(config.simulated_send_delay)) as Arc<dyn ContactSender>
        });

        Self {
            form: Arc::new(Mutex::new(FormData::default())),
            sender,
            analytics,
            notifier,
            metrics: SubmissionMetrics::new(),
            config,
            reset_task: Mutex::new(None),
        }
    }

    /// Create a controller reporting to the log-backed collaborators.
    pub fn from_config(config: &Config, sender: Option<Arc<dyn ContactSender>>) -> Self {
        Self::new(
            sender,
            Arc::new(TracingAnalytics::new()),
            Arc::new(TracingNotifier::new()),
            ControllerConfig::from(config),
        )
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.form).state
    }

    pub fn view(&self) -> FormView {
        FormView::for_state(self.state())
    }

    /// Current raw input values.
    pub fn fields(&self) -> ContactFormFields {
        lock(&self.form).fields.clone()
    }

    /// Inline errors from the last rejected submit.
    pub fn field_errors(&self) -> FieldErrors {
        lock(&self.form).errors.clone()
    }

    pub fn metrics(&self) -> &SubmissionMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Edit one input. Returns `false` when inputs are disabled.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) -> bool {
        let mut form = lock(&self.form);
        if !form.state.accepts_input() {
            tracing::debug!(field = %field, state = %form.state, "Input ignored");
            return false;
        }
        form.fields.set(field, value);
        true
    }

    /// Replace all inputs at once. Returns `false` when inputs are disabled.
    pub fn fill(&self, fields: ContactFormFields) -> bool {
        let mut form = lock(&self.form);
        if !form.state.accepts_input() {
            return false;
        }
        form.fields = fields;
        true
    }

    /// Validate the current inputs and submit them.
    ///
    /// Validation failures are stored for inline display and returned; they
    /// do not change the submission state.
    pub async fn handle_submit(&self) -> Result<SubmitOutcome, FieldErrors> {
        let validated = {
            let mut form = lock(&self.form);
            if !form.state.can_submit() {
                tracing::debug!(state = %form.state, "Submit ignored");
                self.metrics.record_ignored();
                return Ok(SubmitOutcome::Ignored);
            }

            let result = validation::validate(&form.fields);
            match &result {
                Ok(_) => form.errors.clear(),
                Err(errors) => form.errors = errors.clone(),
            }
            result
        };

        match validated {
            Ok(request) => Ok(self.submit(request).await),
            Err(errors) => {
                self.metrics.record_validation_rejection();
                tracing::debug!(errors = %errors, "Contact form failed validation");
                Err(errors)
            }
        }
    }

    /// Submit a validated request.
    ///
    /// The send capability is invoked exactly once and awaited without a
    /// timeout. The request is dropped when the attempt resolves.
    pub async fn submit(&self, request: ContactRequest) -> SubmitOutcome {
        let started = {
            let mut form = lock(&self.form);
            let previous = form.state;
            form.state.begin_submit().map(|next| {
                form.state = next;
                previous
            })
        };
        let Some(previous) = started else {
            tracing::debug!(state = %self.state(), "Submit ignored, attempt already in flight");
            self.metrics.record_ignored();
            return SubmitOutcome::Ignored;
        };
        tracing::debug!(from = %previous, to = %SubmissionState::Submitting, "Submission state changed");

        let metadata = request.analytics_metadata();
        let inquiry_type = request.inquiry_type();
        self.metrics.record_attempt();
        self.report(
            "analytics",
            self.analytics
                .track_form_submit(&self.config.form_name, &metadata),
        );

        let start = Instant::now();
        let result = self.sender.send(&request).await;
        let elapsed = start.elapsed();
        drop(request);

        self.metrics.record_outcome(result.is_ok(), elapsed);
        self.finish_attempt(result.is_ok());

        match result {
            Ok(()) => {
                tracing::info!(
                    form_name = %self.config.form_name,
                    inquiry_type = %inquiry_type,
                    duration_ms = elapsed.as_millis() as u64,
                    "Contact request delivered"
                );
                self.schedule_reset();

                self.report(
                    "notifier",
                    self.notifier.notify(&Notification::submission_succeeded()),
                );
                // Emitted here for every sender, the simulated one included
                let event = Metadata::new()
                    .with("inquiry_type", inquiry_type.as_str())
                    .with("timestamp", Utc::now().to_rfc3339());
                self.report(
                    "analytics",
                    self.analytics.track(CONTACT_FORM_SUCCESS_EVENT, &event),
                );

                SubmitOutcome::Sent
            }
            Err(error) => {
                tracing::error!(
                    form_name = %self.config.form_name,
                    duration_ms = elapsed.as_millis() as u64,
                    "Contact form submission failed: {}",
                    error
                );

                self.report(
                    "notifier",
                    self.notifier.notify(&Notification::submission_failed()),
                );
                self.report("analytics", self.analytics.track_error(&error, &metadata));

                SubmitOutcome::Failed(error)
            }
        }
    }

    fn finish_attempt(&self, delivered: bool) {
        let mut form = lock(&self.form);
        if let Some(next) = form.state.resolve(delivered) {
            tracing::debug!(from = %form.state, to = %next, "Submission state changed");
            form.state = next;
        }
    }

    /// Return to idle with empty inputs once the confirmation delay elapses.
    fn schedule_reset(&self) {
        let form = Arc::clone(&self.form);
        let delay = self.config.reset_delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut form = lock(&form);
            if let Some(next) = form.state.reset() {
                form.state = next;
                form.fields.clear();
                form.errors.clear();
                tracing::debug!("Confirmation elapsed, form reset");
            }
        });

        if let Some(previous) = lock(&self.reset_task).replace(task) {
            previous.abort();
        }
    }

    fn report(&self, collaborator: &str, result: anyhow::Result<()>) {
        if let Err(e) = result {
            tracing::warn!(collaborator = %collaborator, "Collaborator call failed: {:#}", e);
        }
    }
}

impl Drop for FormSubmissionController {
    fn drop(&mut self) {
        let pending = self
            .reset_task
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = pending {
            task.abort();
        }
    }
}
