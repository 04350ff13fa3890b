//! Send a text notification to a Slack incoming webhook and report whether
//! it was delivered.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod payload;
pub mod poster;
pub mod recorder;

pub use error::InvalidArgument;
pub use notifier::{NotificationRequest, Notifier, SlackNotifier};
pub use payload::SlackPayload;
pub use poster::{PostResponse, Poster, ReqwestPoster};
pub use recorder::{Recorder, TracingRecorder};
