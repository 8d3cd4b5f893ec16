//! The feed extraction pipeline.
//!
//! One call takes an archive buffer through directory parsing, member
//! extraction, decompression, table parsing, and record mapping, producing a
//! [`FeedData`] with all six tables.
//!
//! Damage is contained per table. A member that is missing, truncated,
//! compressed with an unsupported method, undecodable, or too short to be a
//! table costs only its own table, which comes back empty. Whole-archive
//! failure is reserved for signs that the buffer is not a ZIP archive at
//! all: no end-of-central-directory record, or a member whose local header
//! back-reference lands in garbage.

use tracing::{debug, info, warn};

use crate::error::{FeedError, Result};
use crate::model::{Calendar, CalendarDate, FeedData, FeedRecord, Route, Stop, StopTime, Trip};
use crate::record;
use crate::table;
use crate::zip::{ArchiveEntry, ZipParser, decompress};

/// The archive members a feed is read from, in extraction order.
pub const FEED_MEMBERS: [&str; 6] = [
    Stop::FILE_NAME,
    StopTime::FILE_NAME,
    Trip::FILE_NAME,
    Route::FILE_NAME,
    Calendar::FILE_NAME,
    CalendarDate::FILE_NAME,
];

/// Read a complete feed out of an archive buffer.
///
/// # Errors
///
/// Returns [`FeedError::MalformedArchive`] when the buffer has no
/// end-of-central-directory record or a wanted member's local header is
/// corrupt. Any other problem is logged and degrades that member's table to
/// empty.
pub fn extract_feed(data: &[u8]) -> Result<FeedData> {
    let parser = ZipParser::new(data);
    let eocd = parser.locate_directory()?;
    let entries = parser.parse_entries(eocd.directory_offset as usize, eocd.total_entries as usize);
    info!(
        size = data.len(),
        members = entries.len(),
        "read archive directory"
    );

    Ok(FeedData {
        stops: read_table(&parser, &entries)?,
        stop_times: read_table(&parser, &entries)?,
        trips: read_table(&parser, &entries)?,
        routes: read_table(&parser, &entries)?,
        calendar: read_table(&parser, &entries)?,
        calendar_dates: read_table(&parser, &entries)?,
    })
}

/// Read one member's table, degrading to empty on member-local problems.
fn read_table<T: FeedRecord>(parser: &ZipParser<'_>, entries: &[ArchiveEntry]) -> Result<Vec<T>> {
    let Some(entry) = entries.iter().find(|e| e.name == T::FILE_NAME) else {
        warn!(member = T::FILE_NAME, "member not present in archive");
        return Ok(Vec::new());
    };

    match read_member(parser, entry) {
        Ok(records) => {
            debug!(
                member = T::FILE_NAME,
                records = records.len(),
                "parsed table"
            );
            Ok(records)
        }
        // A corrupt local header invalidates the archive, not just the member.
        Err(err @ FeedError::MalformedArchive(_)) => Err(err),
        Err(err) => {
            warn!(member = T::FILE_NAME, error = %err, "skipping unreadable member");
            Ok(Vec::new())
        }
    }
}

fn read_member<T: FeedRecord>(parser: &ZipParser<'_>, entry: &ArchiveEntry) -> Result<Vec<T>> {
    let payload = parser.extract(entry)?;
    let bytes = decompress(payload, entry.method)?;
    // Lossy decoding: a stray invalid byte should not cost the whole table.
    let text = String::from_utf8_lossy(&bytes);
    let parsed = table::parse(&text)?;

    Ok(record::map_table(parsed)
        .into_iter()
        .map(T::from_record)
        .collect())
}
