//! Submission counters for the contact form.
//!
//! Counts attempts, outcomes and send duration. Cheap to clone; clones share
//! the same counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for submission attempts.
#[derive(Debug, Clone)]
pub struct SubmissionMetrics {
    /// Attempts that reached the send capability
    attempts_total: Arc<AtomicU64>,

    /// Attempts the send capability accepted
    successes_total: Arc<AtomicU64>,

    /// Attempts the send capability rejected
    failures_total: Arc<AtomicU64>,

    /// Submits ignored because one was already in flight
    ignored_total: Arc<AtomicU64>,

    /// Submits stopped by field validation
    validation_rejections_total: Arc<AtomicU64>,

    /// Total time spent in the send capability, in milliseconds
    send_duration_total_ms: Arc<AtomicU64>,
}

impl Default for SubmissionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionMetrics {
    pub fn new() -> Self {
        Self {
            attempts_total: Arc::new(AtomicU64::new(0)),
            successes_total: Arc::new(AtomicU64::new(0)),
            failures_total: Arc::new(AtomicU64::new(0)),
            ignored_total: Arc::new(AtomicU64::new(0)),
            validation_rejections_total: Arc::new(AtomicU64::new(0)),
            send_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_attempt(&self) {
        self.attempts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resolved attempt and how long the send took.
    pub fn record_outcome(&self, succeeded: bool, duration: Duration) {
        if succeeded {
            self.successes_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failures_total.fetch_add(1, Ordering::Relaxed);
        }
        self.send_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_ignored(&self) {
        self.ignored_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_rejection(&self) {
        self.validation_rejections_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn attempts_total(&self) -> u64 {
        self.attempts_total.load(Ordering::Relaxed)
    }

    pub fn successes_total(&self) -> u64 {
        self.successes_total.load(Ordering::Relaxed)
    }

    pub fn failures_total(&self) -> u64 {
        self.failures_total.load(Ordering::Relaxed)
    }

    pub fn ignored_total(&self) -> u64 {
        self.ignored_total.load(Ordering::Relaxed)
    }

    pub fn validation_rejections_total(&self) -> u64 {
        self.validation_rejections_total.load(Ordering::Relaxed)
    }

    pub fn send_duration_total_ms(&self) -> u64 {
        self.send_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Average send duration over resolved attempts, in milliseconds.
    pub fn send_duration_avg_ms(&self) -> f64 {
        let total = self.send_duration_total_ms();
        let count = self.successes_total() + self.failures_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            attempts_total: self.attempts_total(),
            successes_total: self.successes_total(),
            failures_total: self.failures_total(),
            ignored_total: self.ignored_total(),
            validation_rejections_total: self.validation_rejections_total(),
            send_duration_avg_ms: self.send_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub attempts_total: u64,
    pub successes_total: u64,
    pub failures_total: u64,
    pub ignored_total: u64,
    pub validation_rejections_total: u64,
    pub send_duration_avg_ms: f64,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "attempts={} succeeded={} failed={} ignored={} invalid={} avg_send_ms={:.1}",
            self.attempts_total,
            self.successes_total,
            self.failures_total,
            self.ignored_total,
            self.validation_rejections_total,
            self.send_duration_avg_ms
        )
    }
}
