//! User-facing notification collaborator (toast-style messages).

use serde::Serialize;
use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Success => f.write_str("success"),
            NotificationLevel::Error => f.write_str("error"),
        }
    }
}

/// A transient message with a title and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Shown once a contact request was delivered.
    pub fn submission_succeeded() -> Self {
        Self::success(
            "Message sent successfully!",
            "We'll get back to you as soon as possible.",
        )
    }

    /// Shown when delivery failed.
    pub fn submission_failed() -> Self {
        Self::error(
            "Failed to send message",
            "Please try again or contact us directly.",
        )
    }
}

/// Displays notifications to the user. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> anyhow::Result<()>;
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        match notification.level {
            NotificationLevel::Success => tracing::info!(
                target: "notification",
                title = %notification.title,
                "{}",
                notification.description
            ),
            NotificationLevel::Error => tracing::error!(
                target: "notification",
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
        Ok(())
    }
}
