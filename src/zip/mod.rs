//! ZIP archive parsing and member decompression.
//!
//! This module reads complete ZIP archives held in memory, which is how GTFS
//! feeds arrive: a download or a file read produces one buffer that is then
//! picked apart.
//!
//! ## Architecture
//!
//! The module is organized into four components:
//!
//! - [`cursor`]: bounds-checked little-endian reads over the raw buffer
//! - [`structures`]: data structures representing ZIP format elements
//! - [`parser`]: locating the directory and slicing out member payloads
//! - [`decompress`]: turning payloads back into member bytes
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each member
//! 2. Central Directory with metadata for all members
//! 3. End of Central Directory (EOCD) record at the end
//!
//! Reading starts from the EOCD at the end of the buffer, then walks the
//! Central Directory, then resolves each member's local header on demand.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) method
//! - DEFLATE compression, raw or zlib-framed
//! - Degraded archives: a damaged central directory trailer hides the
//!   members behind it but not the ones before it
//!
//! ## Limitations
//!
//! - No ZIP64 extensions (GTFS feeds stay far below 4GB)
//! - No encryption support
//! - No multi-disk archive support
//! - No BZIP2, LZMA, or other compression methods

mod cursor;
mod decompress;
mod parser;
mod structures;

pub use decompress::decompress;
pub use parser::ZipParser;
pub use structures::{ArchiveEntry, CompressionMethod, EndOfCentralDirectory};
