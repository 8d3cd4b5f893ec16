//! Low-level ZIP archive parser.
//!
//! This module handles the binary parsing of ZIP structures over a complete
//! in-memory archive buffer.
//!
//! ## Parsing Strategy
//!
//! ZIP files are designed to be read from the end:
//! 1. Find the End of Central Directory (EOCD) at the buffer's end
//! 2. Read the Central Directory to get metadata for all members
//! 3. For extraction, resolve each member's Local File Header and data
//!
//! The EOCD may be followed by a trailing comment of up to 65535 bytes, so the
//! signature is searched backward byte-by-byte from `len - 22` down to the
//! start of the buffer.
//!
//! The central directory walk is deliberately tolerant: a truncated or
//! non-conformant trailer terminates enumeration early instead of failing the
//! whole read, so members located before the damage stay extractable. Local
//! file headers, by contrast, are validated strictly. A bad signature there
//! means the back-reference landed in garbage and nothing about the member can
//! be trusted.

use tracing::{debug, warn};

use crate::error::{FeedError, Result};

use super::cursor::{ByteCursor, OutOfBounds};
use super::structures::{
    ArchiveEntry, CDFH_MIN_SIZE, CDFH_SIGNATURE, CompressionMethod, EndOfCentralDirectory,
    LFH_SIGNATURE, LFH_SIZE,
};

/// Low-level ZIP parser over a borrowed archive buffer.
///
/// Payload slices returned by [`extract`](Self::extract) borrow from the same
/// buffer, so no member data is copied until decompression.
///
/// ## Example
///
/// ```ignore
/// let parser = ZipParser::new(&archive);
/// for entry in parser.list_entries()? {
///     let payload = parser.extract(&entry)?;
///     // Decompress payload according to entry.method...
/// }
/// ```
pub struct ZipParser<'a> {
    cursor: ByteCursor<'a>,
}

impl<'a> ZipParser<'a> {
    /// Create a parser over a complete archive buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(data),
        }
    }

    /// Find and parse the End of Central Directory record.
    ///
    /// Scans backward from `len - 22` down to offset 0, one byte at a time,
    /// for the `PK\x05\x06` signature.
    ///
    /// # Returns
    ///
    /// The parsed EOCD with the central directory's offset and entry count.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MalformedArchive`] when the buffer is shorter
    /// than a minimal record or the signature never occurs, meaning the
    /// buffer is not a ZIP archive at all.
    pub fn locate_directory(&self) -> Result<EndOfCentralDirectory> {
        let Some(start) = self.cursor.len().checked_sub(EndOfCentralDirectory::SIZE) else {
            return Err(no_directory());
        };

        let signature_len = EndOfCentralDirectory::SIGNATURE.len();
        let mut offset = start;
        loop {
            let found = self
                .cursor
                .bytes_at(offset, signature_len)
                .is_ok_and(|window| window == EndOfCentralDirectory::SIGNATURE);
            if found {
                let eocd =
                    EndOfCentralDirectory::read_at(&self.cursor, offset).map_err(malformed)?;
                debug!(
                    offset,
                    entries = eocd.total_entries,
                    directory_offset = eocd.directory_offset,
                    "located end of central directory"
                );
                return Ok(eocd);
            }
            if offset == 0 {
                return Err(no_directory());
            }
            offset -= 1;
        }
    }

    /// Walk the central directory starting at `directory_offset`.
    ///
    /// Iterates at most `count` times. A signature mismatch or a header that
    /// runs past the end of the buffer ends the walk early; entries parsed up
    /// to that point are returned, never an error.
    pub fn parse_entries(&self, directory_offset: usize, count: usize) -> Vec<ArchiveEntry> {
        let mut entries = Vec::with_capacity(count);
        let mut offset = directory_offset;

        for _ in 0..count {
            let Some((entry, next)) = self.entry_at(offset) else {
                break;
            };
            entries.push(entry);
            offset = next;
        }

        entries
    }

    /// Locate the directory and walk it in one step.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MalformedArchive`] when no EOCD record exists.
    pub fn list_entries(&self) -> Result<Vec<ArchiveEntry>> {
        let eocd = self.locate_directory()?;
        Ok(self.parse_entries(eocd.directory_offset as usize, eocd.total_entries as usize))
    }

    /// Parse one Central Directory File Header at `offset`.
    ///
    /// Returns the entry and the offset of the following header, or `None`
    /// when the walk should stop.
    fn entry_at(&self, offset: usize) -> Option<(ArchiveEntry, usize)> {
        let Ok(header) = self.cursor.bytes_at(offset, CDFH_MIN_SIZE) else {
            warn!(offset, "central directory ends mid-header");
            return None;
        };
        if &header[..CDFH_SIGNATURE.len()] != CDFH_SIGNATURE {
            warn!(offset, "bad central directory signature");
            return None;
        }

        let method = self.cursor.u16_at(offset + 10).ok()?;
        let compressed_size = self.cursor.u32_at(offset + 20).ok()?;
        let uncompressed_size = self.cursor.u32_at(offset + 24).ok()?;
        let name_len = self.cursor.u16_at(offset + 28).ok()? as usize;
        let extra_len = self.cursor.u16_at(offset + 30).ok()? as usize;
        let comment_len = self.cursor.u16_at(offset + 32).ok()? as usize;
        let local_offset = self.cursor.u32_at(offset + 42).ok()?;

        let Ok(name_bytes) = self.cursor.bytes_at(offset + CDFH_MIN_SIZE, name_len) else {
            warn!(offset, name_len, "member name extends beyond the archive");
            return None;
        };
        // Lossy conversion keeps members with non-UTF8 names listable.
        let name = String::from_utf8_lossy(name_bytes).into_owned();

        let entry = ArchiveEntry {
            name,
            method: CompressionMethod::from_u16(method),
            compressed_size,
            uncompressed_size,
            local_offset,
        };
        debug!(
            name = %entry.name,
            method = %entry.method,
            compressed = entry.compressed_size,
            uncompressed = entry.uncompressed_size,
            "found member"
        );

        Some((entry, offset + CDFH_MIN_SIZE + name_len + extra_len + comment_len))
    }

    /// Resolve a member's local file header and return its compressed payload.
    ///
    /// The Local File Header has its own name and extra field lengths that may
    /// differ from the Central Directory's, so the payload position is always
    /// computed from the local record.
    ///
    /// # Returns
    ///
    /// The member's raw payload, borrowed from the archive buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MalformedArchive`] when the local header
    /// signature does not match, [`FeedError::TruncatedData`] when the header
    /// or the declared payload extends past the end of the buffer.
    pub fn extract(&self, entry: &ArchiveEntry) -> Result<&'a [u8]> {
        let local_offset = entry.local_offset as usize;

        let header = self.cursor.bytes_at(local_offset, LFH_SIZE).map_err(|_| {
            FeedError::TruncatedData(format!(
                "local header of '{}' at offset {} is beyond the archive",
                entry.name, local_offset
            ))
        })?;
        if &header[..LFH_SIGNATURE.len()] != LFH_SIGNATURE {
            return Err(FeedError::MalformedArchive(format!(
                "bad local header signature for '{}' at offset {}",
                entry.name, local_offset
            )));
        }

        let name_len = self.cursor.u16_at(local_offset + 26).map_err(truncated)? as usize;
        let extra_len = self.cursor.u16_at(local_offset + 28).map_err(truncated)? as usize;

        let payload_start = local_offset
            .checked_add(LFH_SIZE + name_len + extra_len)
            .ok_or_else(|| {
                FeedError::TruncatedData(format!("local header of '{}' overflows", entry.name))
            })?;
        let compressed_size = entry.compressed_size as usize;

        self.cursor
            .bytes_at(payload_start, compressed_size)
            .map_err(|_| {
                FeedError::TruncatedData(format!(
                    "payload of '{}': {} bytes at offset {} exceed archive of {} bytes",
                    entry.name,
                    compressed_size,
                    payload_start,
                    self.cursor.len()
                ))
            })
    }
}

fn no_directory() -> FeedError {
    FeedError::MalformedArchive("end of central directory record not found".to_string())
}

fn malformed(err: OutOfBounds) -> FeedError {
    FeedError::MalformedArchive(err.to_string())
}

fn truncated(err: OutOfBounds) -> FeedError {
    FeedError::TruncatedData(err.to_string())
}
