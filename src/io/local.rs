use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::FeedLoader;

/// Reads a feed archive from the local filesystem.
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedLoader for FileLoader {
    async fn load(&self) -> Result<Vec<u8>> {
        let data = fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        debug!(path = %self.path.display(), size = data.len(), "read feed archive");
        Ok(data)
    }
}
