use std::sync::Arc;

use async_trait::async_trait;
use tracing::Level;
use url::Url;

use crate::error::InvalidArgument;
use crate::payload::{SlackPayload, CONTENT_TYPE_JSON};
use crate::poster::{Poster, ReqwestPoster};
use crate::recorder::{Recorder, TracingRecorder};

/// Something that can deliver a text message to a webhook.
///
/// `Ok(true)` means delivered, `Ok(false)` means the attempt failed for an
/// operational reason (the details are logged). `Err` is reserved for
/// invalid input and is returned before any network I/O.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(
        &self,
        webhook_url: &str,
        message_text: &str,
    ) -> Result<bool, InvalidArgument>;
}

/// A webhook URL and message text that passed validation.
#[derive(Debug, Clone)]
pub struct NotificationRequest<'a> {
    pub webhook_url: Url,
    pub message_text: &'a str,
}

impl<'a> NotificationRequest<'a> {
    /// Checks URL presence, then URL format, then message presence.
    pub fn new(webhook_url: &str, message_text: &'a str) -> Result<Self, InvalidArgument> {
        if webhook_url.trim().is_empty() {
            return Err(InvalidArgument::MissingWebhookUrl);
        }
        // Url::parse rejects relative references, so success means absolute
        let webhook_url = Url::parse(webhook_url.trim())
            .map_err(|reason| InvalidArgument::MalformedWebhookUrl { reason })?;
        if message_text.trim().is_empty() {
            return Err(InvalidArgument::MissingMessageText);
        }
        Ok(Self {
            webhook_url,
            message_text,
        })
    }
}

/// Posts `{"text": …}` to Slack incoming webhooks.
#[derive(Clone)]
pub struct SlackNotifier {
    poster: Arc<dyn Poster>,
    recorder: Arc<dyn Recorder>,
}

impl SlackNotifier {
    pub fn new(poster: Arc<dyn Poster>, recorder: Arc<dyn Recorder>) -> Self {
        Self { poster, recorder }
    }

    /// Notifier over the given client, logging through `tracing`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self::new(Arc::new(ReqwestPoster::new(client)), Arc::new(TracingRecorder))
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn send_message(
        &self,
        webhook_url: &str,
        message_text: &str,
    ) -> Result<bool, InvalidArgument> {
        let request = match NotificationRequest::new(webhook_url, message_text) {
            Ok(request) => request,
            Err(e) => {
                let message = match &e {
                    InvalidArgument::MissingWebhookUrl => "Webhook URL is required.".to_string(),
                    InvalidArgument::MalformedWebhookUrl { reason } => {
                        format!("Webhook URL is not an absolute URL: {reason}")
                    }
                    InvalidArgument::MissingMessageText => "Message text is required.".to_string(),
                };
                self.recorder.record(Level::ERROR, &message, None);
                return Err(e);
            }
        };

        let body = match SlackPayload::new(request.message_text).to_json() {
            Ok(body) => body,
            Err(e) => {
                let cause = anyhow::Error::from(e);
                self.recorder
                    .record(Level::ERROR, "Failed to serialize Slack payload.", Some(&cause));
                return Ok(false);
            }
        };

        match self
            .poster
            .post(&request.webhook_url, body, CONTENT_TYPE_JSON)
            .await
        {
            Ok(resp) if resp.is_success() => {
                self.recorder
                    .record(Level::INFO, "Notification sent successfully.", None);
                Ok(true)
            }
            Ok(resp) => {
                self.recorder.record(
                    Level::ERROR,
                    &format!("Slack webhook returned status {}: {}", resp.status, resp.body),
                    None,
                );
                Ok(false)
            }
            Err(e) => {
                self.recorder
                    .record(Level::ERROR, "Failed to reach Slack webhook.", Some(&e));
                Ok(false)
            }
        }
    }
}
