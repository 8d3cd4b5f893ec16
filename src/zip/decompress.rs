//! Member payload decompression.
//!
//! GTFS archives in the wild carry stored and deflated members, and a few
//! feed publishers emit zlib-framed streams (a two-byte header plus a
//! trailing Adler-32 checksum) under the deflate method id. Decoding
//! therefore tries raw deflate first and retries with the zlib framing
//! before giving up.

use std::io::Read;

use flate2::read::{DeflateDecoder, ZlibDecoder};
use tracing::debug;

use crate::error::{FeedError, Result};

use super::structures::CompressionMethod;

/// Decompress a member payload according to its compression method.
///
/// Stored payloads are returned as an owned copy.
///
/// # Errors
///
/// Returns [`FeedError::UnsupportedCompression`] for any method other than
/// stored or deflate, and [`FeedError::DecompressionFailed`] when both
/// deflate framings fail. The carried source error is the raw attempt's,
/// since raw deflate is what the format prescribes.
pub fn decompress(payload: &[u8], method: CompressionMethod) -> Result<Vec<u8>> {
    match method {
        CompressionMethod::Stored => Ok(payload.to_vec()),
        CompressionMethod::Deflate => inflate(payload),
        CompressionMethod::Unknown(code) => Err(FeedError::UnsupportedCompression(code)),
    }
}

fn inflate(payload: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match DeflateDecoder::new(payload).read_to_end(&mut out) {
        Ok(_) => Ok(out),
        Err(raw_err) => {
            debug!(error = %raw_err, "raw deflate failed, retrying as zlib-framed");
            out.clear();
            match ZlibDecoder::new(payload).read_to_end(&mut out) {
                Ok(_) => Ok(out),
                Err(_) => Err(FeedError::DecompressionFailed { source: raw_err }),
            }
        }
    }
}
