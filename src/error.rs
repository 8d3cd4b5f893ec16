//! Error types for feed archive extraction.

use thiserror::Error;

/// A Result type alias over FeedError to minimise repetition.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Errors produced while reading a feed archive.
///
/// `MalformedArchive` aborts a whole extraction; the remaining variants are
/// scoped to a single member and degrade that member's table to an empty
/// sequence at the pipeline boundary.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    #[error("truncated data: {0}")]
    TruncatedData(String),

    #[error("unsupported compression method: {0}")]
    UnsupportedCompression(u16),

    #[error("raw and zlib-framed deflate both failed: {source}")]
    DecompressionFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("invalid table: {0}")]
    InvalidTable(&'static str),
}
