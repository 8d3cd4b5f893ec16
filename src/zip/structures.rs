use std::fmt;

use super::cursor::{ByteCursor, OutOfBounds};

/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Stored,
            8 => CompressionMethod::Deflate,
            _ => CompressionMethod::Unknown(value),
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionMethod::Stored => f.write_str("stored"),
            CompressionMethod::Deflate => f.write_str("deflate"),
            CompressionMethod::Unknown(v) => write!(f, "method {v}"),
        }
    }
}

/// End of Central Directory (EOCD) - 22 bytes minimum
///
/// Only the two fields the extraction pipeline consumes are retained.
#[derive(Debug)]
pub struct EndOfCentralDirectory {
    pub total_entries: u16,
    pub directory_offset: u32,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: &'static [u8] = b"PK\x05\x06";
    pub const SIZE: usize = 22;

    /// Read the record fields from a located signature at `offset`.
    ///
    /// Entry count sits at +10, central directory offset at +16.
    pub fn read_at(cursor: &ByteCursor<'_>, offset: usize) -> Result<Self, OutOfBounds> {
        Ok(Self {
            total_entries: cursor.u16_at(offset + 10)?,
            directory_offset: cursor.u32_at(offset + 16)?,
        })
    }
}

/// Central Directory File Header (CDFH) - 46 bytes minimum
pub const CDFH_SIGNATURE: &[u8] = b"PK\x01\x02";
pub const CDFH_MIN_SIZE: usize = 46;

/// Local File Header (LFH) - 30 bytes
pub const LFH_SIGNATURE: &[u8] = b"PK\x03\x04";
pub const LFH_SIZE: usize = 30;

/// Parsed central-directory entry: where a member lives and how it is stored.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub method: CompressionMethod,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    /// Back-reference to the member's local file header.
    pub local_offset: u32,
}
