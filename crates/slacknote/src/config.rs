use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_NAME: &str = "slacknote.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub slack: SlackSettings,
}

#[derive(Debug, Deserialize)]
pub struct SlackSettings {
    pub webhook_url: Option<String>,
    /// Transport timeout for the webhook request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Load configuration from an explicit path, or search upward from current dir,
    /// then the user config dir. Falls back to defaults when nothing is found.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self> {
        let path = match path_override {
            Some(p) => p,
            None => match find_upwards(DEFAULT_CONFIG_NAME).or_else(user_config_file) {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        Self::from_file(&path)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Reading config file {}", path.display()))?;
        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Parsing TOML config {}", path.display()))?;
        Ok(cfg)
    }

    /// Pick the webhook URL: command line, then environment, then file.
    /// Returns an empty string when none is set so the notifier reports it.
    pub fn resolve_webhook_url(&self, flag: Option<String>, env: Option<String>) -> String {
        flag.or(env)
            .or_else(|| self.slack.webhook_url.clone())
            .unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.slack.timeout_secs)
    }
}

fn find_upwards(file_name: &str) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(file_name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn user_config_file() -> Option<PathBuf> {
    let candidate = dirs::config_dir()?.join("slacknote").join(DEFAULT_CONFIG_NAME);
    candidate.exists().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(toml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_config_success() {
        let file = write_config(
            r#"[slack]
webhook_url = "https://hooks.slack.com/services/T0/B0/XYZ"
timeout_secs = 3
"#,
        );

        let cfg = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(
            cfg.slack.webhook_url.as_deref(),
            Some("https://hooks.slack.com/services/T0/B0/XYZ")
        );
        assert_eq!(cfg.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let cfg = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert!(cfg.slack.webhook_url.is_none());
        assert_eq!(cfg.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_toml_errors() {
        let file = write_config("[slack\nwebhook_url = ");
        assert!(Config::load(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn webhook_url_precedence() {
        let cfg = Config {
            slack: SlackSettings {
                webhook_url: Some("https://file.example".into()),
                ..SlackSettings::default()
            },
        };
        let flag = || Some("https://flag.example".to_string());
        let env = || Some("https://env.example".to_string());

        assert_eq!(cfg.resolve_webhook_url(flag(), env()), "https://flag.example");
        assert_eq!(cfg.resolve_webhook_url(None, env()), "https://env.example");
        assert_eq!(cfg.resolve_webhook_url(None, None), "https://file.example");
        assert_eq!(Config::default().resolve_webhook_url(None, None), "");
    }
}
