//! Shared archive fixtures for the integration tests.
//!
//! Archives are assembled by hand here because several cases can never come
//! out of a conforming ZIP writer: zlib-framed payloads under the deflate
//! method id, bogus method codes, and sizes that overrun the buffer.

use std::io::Read;

use flate2::Compression;
use flate2::read::{DeflateEncoder, ZlibEncoder};

/// How a member's payload is packed into the fixture archive.
pub enum Packing {
    Stored,
    Deflate,
    /// Deflate method id over zlib-framed bytes.
    ZlibFramed,
    /// Arbitrary method code, payload bytes passed through untouched.
    Method(u16),
}

pub struct Member {
    name: String,
    content: Vec<u8>,
    packing: Packing,
    declared_compressed_size: Option<u32>,
}

impl Member {
    pub fn stored(name: &str, content: &str) -> Self {
        Self::new(name, content.as_bytes().to_vec(), Packing::Stored)
    }

    pub fn deflate(name: &str, content: &str) -> Self {
        Self::new(name, content.as_bytes().to_vec(), Packing::Deflate)
    }

    pub fn zlib_framed(name: &str, content: &str) -> Self {
        Self::new(name, content.as_bytes().to_vec(), Packing::ZlibFramed)
    }

    pub fn with_method(name: &str, payload: &[u8], method: u16) -> Self {
        Self::new(name, payload.to_vec(), Packing::Method(method))
    }

    /// Declare a compressed size far past the end of any fixture buffer.
    pub fn overstate_size(mut self) -> Self {
        self.declared_compressed_size = Some(0xFFF0_0000);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn new(name: &str, content: Vec<u8>, packing: Packing) -> Self {
        Self {
            name: name.to_string(),
            content,
            packing,
            declared_compressed_size: None,
        }
    }

    fn method_code(&self) -> u16 {
        match self.packing {
            Packing::Stored => 0,
            Packing::Deflate | Packing::ZlibFramed => 8,
            Packing::Method(code) => code,
        }
    }

    fn payload(&self) -> Vec<u8> {
        match self.packing {
            Packing::Stored | Packing::Method(_) => self.content.clone(),
            Packing::Deflate => {
                let mut out = Vec::new();
                DeflateEncoder::new(self.content.as_slice(), Compression::default())
                    .read_to_end(&mut out)
                    .unwrap();
                out
            }
            Packing::ZlibFramed => {
                let mut out = Vec::new();
                ZlibEncoder::new(self.content.as_slice(), Compression::default())
                    .read_to_end(&mut out)
                    .unwrap();
                out
            }
        }
    }
}

pub fn build_archive(members: &[Member]) -> Vec<u8> {
    build_archive_with_comment(members, b"")
}

pub fn build_archive_with_comment(members: &[Member], comment: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut locals = Vec::with_capacity(members.len());

    for member in members {
        let payload = member.payload();
        let compressed_size = member
            .declared_compressed_size
            .unwrap_or(payload.len() as u32);

        locals.push((out.len() as u32, compressed_size));
        out.extend_from_slice(b"PK\x03\x04");
        out.extend_from_slice(&[0u8; 4]); // version needed + flags
        out.extend_from_slice(&member.method_code().to_le_bytes());
        out.extend_from_slice(&[0u8; 8]); // mod time/date + crc
        out.extend_from_slice(&compressed_size.to_le_bytes());
        out.extend_from_slice(&(member.content.len() as u32).to_le_bytes());
        out.extend_from_slice(&(member.name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // extra len
        out.extend_from_slice(member.name.as_bytes());
        out.extend_from_slice(&payload);
    }

    let directory_offset = out.len() as u32;
    for (member, (local_offset, compressed_size)) in members.iter().zip(&locals) {
        out.extend_from_slice(b"PK\x01\x02");
        out.extend_from_slice(&[0u8; 6]); // versions + flags
        out.extend_from_slice(&member.method_code().to_le_bytes());
        out.extend_from_slice(&[0u8; 8]); // mod time/date + crc
        out.extend_from_slice(&compressed_size.to_le_bytes());
        out.extend_from_slice(&(member.content.len() as u32).to_le_bytes());
        out.extend_from_slice(&(member.name.len() as u16).to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // extra + comment len
        out.extend_from_slice(&[0u8; 8]); // disk + attributes
        out.extend_from_slice(&local_offset.to_le_bytes());
        out.extend_from_slice(member.name.as_bytes());
    }
    let directory_size = out.len() as u32 - directory_offset;

    out.extend_from_slice(b"PK\x05\x06");
    out.extend_from_slice(&[0u8; 4]); // disk numbers
    out.extend_from_slice(&(members.len() as u16).to_le_bytes());
    out.extend_from_slice(&(members.len() as u16).to_le_bytes());
    out.extend_from_slice(&directory_size.to_le_bytes());
    out.extend_from_slice(&directory_offset.to_le_bytes());
    out.extend_from_slice(&(comment.len() as u16).to_le_bytes());
    out.extend_from_slice(comment);
    out
}

// Table contents for a small but irregular feed: quoted commas, blank
// values, CRLF endings, and a byte order mark all appear somewhere.

pub const STOPS: &str = "stop_id,stop_name,stop_lat,stop_lon,location_type\n\
S1,Central,35.6812,139.7671,0\n\
S2,\"Harbor, West\",35.4437,139.6380,\n\
S3,Airport,35.5494,139.7798,1\n";

pub const STOP_TIMES: &str = "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
T1,08:00:00,08:00:30,S1,1\n\
T1,08:10:00,,S2,2\n\
T1,08:25:00,08:26:00,S3,3\n\
T2,09:00:00,09:00:30,S3,1\n";

pub const TRIPS: &str =
    "route_id,service_id,trip_id,trip_headsign\r\nR1,WD,T1,Airport\r\nR1,WD,T2,Central\r\n";

pub const ROUTES: &str = "route_id,route_short_name,route_long_name,route_type,route_color\n\
R1,1,Airport Line,2,FF6600\n";

pub const CALENDAR: &str =
    "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
WD,1,1,1,1,1,0,0,20250101,20251231\n";

pub const CALENDAR_DATES: &str = "\u{feff}service_id,date,exception_type\nWD,20250505,2\n";

/// All six members, spread across stored, deflate, and zlib-framed packing.
pub fn full_feed_members() -> Vec<Member> {
    vec![
        Member::deflate("stops.txt", STOPS),
        Member::deflate("stop_times.txt", STOP_TIMES),
        Member::stored("trips.txt", TRIPS),
        Member::stored("routes.txt", ROUTES),
        Member::zlib_framed("calendar.txt", CALENDAR),
        Member::stored("calendar_dates.txt", CALENDAR_DATES),
    ]
}

pub fn full_feed_archive() -> Vec<u8> {
    build_archive(&full_feed_members())
}
