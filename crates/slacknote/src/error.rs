use thiserror::Error;

/// Caller misuse detected before any network I/O.
#[derive(Debug, Error)]
pub enum InvalidArgument {
    #[error("missing webhook URL")]
    MissingWebhookUrl,

    /// The URL is present but is not an absolute URL.
    #[error("malformed webhook URL: {reason}")]
    MalformedWebhookUrl {
        #[source]
        reason: url::ParseError,
    },

    #[error("missing message text")]
    MissingMessageText,
}
