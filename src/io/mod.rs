//! Input retrieval.
//!
//! Feeds arrive either as a file on disk or over HTTP. Both produce the same
//! thing: one complete archive buffer for the parsing pipeline to pick apart.

mod http;
mod local;

pub use http::HttpLoader;
pub use local::FileLoader;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for obtaining a complete feed archive from some source.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    /// Fetch the entire archive into memory.
    async fn load(&self) -> Result<Vec<u8>>;
}
