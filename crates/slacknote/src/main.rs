use clap::Parser;
use owo_colors::OwoColorize;
use tokio::runtime::Runtime;

use slacknote::cli::{Cli, Commands};
use slacknote::config::{Config, WEBHOOK_URL_ENV};
use slacknote::logging;
use slacknote::{Notifier, ReqwestPoster, SlackNotifier, TracingRecorder};

use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let rt = Runtime::new()?;
    rt.block_on(async {
        match cli.command {
            Commands::Send { webhook_url, text } => {
                let config = Config::load(cli.config.clone())?;
                let url =
                    config.resolve_webhook_url(webhook_url, std::env::var(WEBHOOK_URL_ENV).ok());

                let poster = ReqwestPoster::with_timeout(config.timeout())?;
                let notifier = SlackNotifier::new(Arc::new(poster), Arc::new(TracingRecorder));

                let delivered = notifier.send_message(&url, &text).await?;

                // Exit code: 0 = delivered, 2 = not delivered
                if delivered {
                    println!("{} message delivered", "✅".green());
                } else {
                    println!("{} message not delivered", "🚨".red());
                    std::process::exit(2);
                }
            }
            Commands::Version { json } => {
                if json {
                    let info = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                        "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    println!(
                        "slacknote {} (commit: {}, built: {})",
                        env!("CARGO_PKG_VERSION"),
                        option_env!("GIT_SHA").unwrap_or("unknown"),
                        option_env!("BUILD_DATE").unwrap_or("unknown"),
                    );
                }
            }
        }
        Ok(())
    })
}
