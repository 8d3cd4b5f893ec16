use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

/// A read that would cross the end of the buffer.
///
/// Stays internal to the archive reader: every call site converts it into the
/// [`FeedError`](crate::FeedError) variant appropriate for the structure being
/// parsed, so it never surfaces through the crate API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{len} bytes at offset {offset} exceed buffer of {buffer_len} bytes")]
pub struct OutOfBounds {
    pub offset: usize,
    pub len: usize,
    pub buffer_len: usize,
}

/// Bounds-checked little-endian reads at absolute offsets over a fixed buffer.
///
/// All binary parsing of the archive goes through this type; nothing else
/// indexes the raw buffer.
pub struct ByteCursor<'a> {
    data: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// A checked window of `len` bytes starting at `offset`.
    pub fn bytes_at(&self, offset: usize, len: usize) -> Result<&'a [u8], OutOfBounds> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(OutOfBounds {
                offset,
                len,
                buffer_len: self.data.len(),
            })
    }

    /// Read an unsigned 16-bit little-endian integer at `offset`.
    pub fn u16_at(&self, offset: usize) -> Result<u16, OutOfBounds> {
        Ok(LittleEndian::read_u16(self.bytes_at(offset, 2)?))
    }

    /// Read an unsigned 32-bit little-endian integer at `offset`.
    pub fn u32_at(&self, offset: usize) -> Result<u32, OutOfBounds> {
        Ok(LittleEndian::read_u32(self.bytes_at(offset, 4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let cursor = ByteCursor::new(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(cursor.u16_at(0).unwrap(), 0x0201);
        assert_eq!(cursor.u16_at(3).unwrap(), 0x0504);
        assert_eq!(cursor.u32_at(0).unwrap(), 0x0403_0201);
        assert_eq!(cursor.u32_at(1).unwrap(), 0x0504_0302);
    }

    #[test]
    fn rejects_reads_past_the_end() {
        let cursor = ByteCursor::new(&[0xAA, 0xBB, 0xCC]);
        assert_eq!(
            cursor.u16_at(2),
            Err(OutOfBounds {
                offset: 2,
                len: 2,
                buffer_len: 3,
            })
        );
        assert!(cursor.u32_at(0).is_err());
        assert!(cursor.u32_at(usize::MAX).is_err());
    }

    #[test]
    fn rejects_any_read_from_an_empty_buffer() {
        let cursor = ByteCursor::new(&[]);
        assert!(cursor.u16_at(0).is_err());
        assert!(cursor.u32_at(0).is_err());
        assert!(cursor.bytes_at(0, 1).is_err());
    }

    #[test]
    fn windows_are_exact() {
        let cursor = ByteCursor::new(b"PK\x05\x06rest");
        assert_eq!(cursor.bytes_at(0, 4).unwrap(), b"PK\x05\x06");
        assert_eq!(cursor.bytes_at(4, 4).unwrap(), b"rest");
        assert_eq!(cursor.bytes_at(8, 0).unwrap(), b"");
        assert!(cursor.bytes_at(5, 4).is_err());
    }
}
