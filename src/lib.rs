//! # feedzip
//!
//! Read GTFS transit feeds straight out of their ZIP archives.
//!
//! A GTFS feed is a ZIP archive of delimited text tables. This library parses
//! the container itself, with no archive crate in between, then decompresses
//! members, parses the tables, and assembles typed records. It tolerates the
//! damage real feeds ship with: trailing archive comments, truncated central
//! directories, zlib-framed deflate streams, byte order marks, and rows with
//! most columns blank.
//!
//! ## Architecture
//!
//! - [`zip`]: container parsing and member decompression
//! - [`table`] / [`record`]: delimited text to sparse named records
//! - [`model`] / [`feed`]: typed records and the extraction pipeline
//! - [`geojson`]: map-ready rendering of stops and routes
//! - [`io`] / [`catalog`]: fetching archives from disk, URLs, or known sources
//!
//! ## Example
//!
//! ```no_run
//! use feedzip::{extract_feed, geojson};
//!
//! fn main() -> anyhow::Result<()> {
//!     let data = std::fs::read("feed.zip")?;
//!     let feed = extract_feed(&data)?;
//!     println!("{} stops, {} routes", feed.stops.len(), feed.routes.len());
//!
//!     let stops = geojson::stops_to_geojson(&feed.stops);
//!     println!("{}", serde_json::to_string_pretty(&stops)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod feed;
pub mod geojson;
pub mod io;
pub mod model;
pub mod record;
pub mod table;
pub mod zip;

pub use catalog::{FeedCatalog, FeedSource};
pub use cli::Cli;
pub use error::{FeedError, Result};
pub use feed::{FEED_MEMBERS, extract_feed};
pub use io::{FeedLoader, FileLoader, HttpLoader};
pub use model::{Calendar, CalendarDate, FeedData, FeedRecord, Route, Stop, StopTime, Trip};
pub use zip::{ArchiveEntry, CompressionMethod, ZipParser};
