use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// A response that made it back from the remote end, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResponse {
    pub status: u16,
    pub body: String,
}

impl PostResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP capability: one POST, one response.
///
/// An `Err` means no response was received (DNS, refused connection,
/// TLS, timeout). Non-2xx statuses are returned as `Ok`.
#[async_trait]
pub trait Poster: Send + Sync {
    async fn post(&self, url: &Url, body: Vec<u8>, content_type: &str) -> Result<PostResponse>;
}

/// `Poster` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestPoster {
    client: reqwest::Client,
}

impl ReqwestPoster {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a dedicated client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .use_rustls_tls()
            .build()
            .context("Building HTTP client")?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Poster for ReqwestPoster {
    async fn post(&self, url: &Url, body: Vec<u8>, content_type: &str) -> Result<PostResponse> {
        let resp = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .with_context(|| {
                format!("Sending webhook request to {}", url.host_str().unwrap_or("<no host>"))
            })?;

        let status = resp.status().as_u16();
        // body is diagnostic only
        let body = resp.text().await.unwrap_or_default();
        Ok(PostResponse { status, body })
    }
}
