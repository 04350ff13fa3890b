use tracing::Level;

/// Sink for the notifier's diagnostic records.
pub trait Recorder: Send + Sync {
    fn record(&self, level: Level, message: &str, cause: Option<&anyhow::Error>);
}

/// Forwards records to `tracing` under the `slacknote::notifier` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder;

impl Recorder for TracingRecorder {
    fn record(&self, level: Level, message: &str, cause: Option<&anyhow::Error>) {
        let cause = cause.map(|e| format!("{e:#}"));
        // tracing macros need the level at compile time; an absent cause is skipped
        let error = cause.as_deref();
        match level {
            Level::ERROR => {
                tracing::error!(target: "slacknote::notifier", error, "{message}")
            }
            Level::WARN => {
                tracing::warn!(target: "slacknote::notifier", error, "{message}")
            }
            Level::INFO => {
                tracing::info!(target: "slacknote::notifier", error, "{message}")
            }
            Level::DEBUG => {
                tracing::debug!(target: "slacknote::notifier", error, "{message}")
            }
            _ => tracing::trace!(target: "slacknote::notifier", error, "{message}"),
        }
    }
}
