use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::FeedLoader;

/// Per-request timeout. Covers the whole download, not just the connect.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Downloads a feed archive over HTTP(S).
pub struct HttpLoader {
    client: Client,
    url: String,
}

impl HttpLoader {
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(DOWNLOAD_TIMEOUT).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl FeedLoader for HttpLoader {
    async fn load(&self) -> Result<Vec<u8>> {
        debug!(url = %self.url, "downloading feed archive");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.url))?;

        if !response.status().is_success() {
            bail!("HTTP request failed with status: {}", response.status());
        }

        let bytes = response.bytes().await?;
        debug!(url = %self.url, size = bytes.len(), "download complete");
        Ok(bytes.to_vec())
    }
}
