//! Webhook delivery of contact requests.
//!
//! [`WebhookClient`] is a synchronous `ureq` client. [`WebhookSender`] exposes it
//! as a [`ContactSender`] by running each delivery on the blocking thread pool
//! via `tokio::task::spawn_blocking`, so the async runtime is never blocked.

use super::ContactSender;
use crate::config::Config;
use crate::error::{SubmissionError, SubmissionResult};
use crate::models::ContactRequest;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client posting contact requests as JSON to a webhook URL.
#[derive(Clone)]
pub struct WebhookClient {
    /// Endpoint receiving submissions
    url: String,

    /// Optional bearer token
    token: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl WebhookClient {
    /// Create a client for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            url: url.into(),
            token,
            agent: Arc::new(agent),
        }
    }

    /// Create a client from configuration, or `None` when no webhook is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.webhook_url.as_ref().map(|url| {
            Self::new(
                url.clone(),
                config.webhook_token.clone(),
                Duration::from_secs(config.request_timeout),
            )
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `body` to the webhook. Any 2xx status counts as delivered.
    pub fn deliver(&self, body: &serde_json::Value) -> SubmissionResult<()> {
        let start = Instant::now();

        let mut request = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let result = request.send_json(body).map_err(Self::map_error);

        match &result {
            Ok(response) => tracing::debug!(
                url = %self.url,
                status = response.status(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Webhook delivery succeeded"
            ),
            Err(e) => tracing::error!(
                url = %self.url,
                duration_ms = start.elapsed().as_millis() as u64,
                "Webhook delivery failed: {}",
                e
            ),
        }

        result.map(|_| ())
    }

    /// Map ureq errors to SubmissionError.
    fn map_error(error: ureq::Error) -> SubmissionError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                SubmissionError::Rejected { status, message }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmissionError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SubmissionError::Timeout
                } else {
                    SubmissionError::HttpError(transport.to_string())
                }
            }
        }
    }
}

/// Async [`ContactSender`] around [`WebhookClient`].
#[derive(Clone)]
pub struct WebhookSender {
    client: Arc<WebhookClient>,
}

impl WebhookSender {
    pub fn new(client: WebhookClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContactSender for WebhookSender {
    async fn send(&self, request: &ContactRequest) -> SubmissionResult<()> {
        let body = serde_json::to_value(request)
            .map_err(|e| SubmissionError::Encoding(e.to_string()))?;
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.deliver(&body))
            .await
            .map_err(|e| SubmissionError::Other(format!("Task join error: {}", e)))?
    }
}
