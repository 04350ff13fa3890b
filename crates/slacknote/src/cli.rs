use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// slacknote – post a message to a Slack incoming webhook
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a message to a webhook
    Send {
        /// Webhook URL (falls back to SLACK_WEBHOOK_URL, then the config file)
        #[arg(short, long, value_name = "URL")]
        webhook_url: Option<String>,

        /// Message text
        text: String,
    },
    /// Print build information
    Version {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_send_with_flags() {
        let cli = Cli::try_parse_from([
            "slacknote",
            "-vv",
            "send",
            "--webhook-url",
            "https://hooks.slack.com/x",
            "deploy finished",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Send { webhook_url, text } => {
                assert_eq!(webhook_url.as_deref(), Some("https://hooks.slack.com/x"));
                assert_eq!(text, "deploy finished");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn send_requires_text() {
        assert!(Cli::try_parse_from(["slacknote", "send"]).is_err());
    }
}
