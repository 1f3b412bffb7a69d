//! The parcel byte cursor.
//!
//! A [`Parcel`] is an owned byte buffer with a read position. Writes append at the
//! end; reads bounds-check against the buffer and advance the position. All integer
//! framing is little-endian two's-complement.
//!
//! Wire forms:
//!
//! ```text
//! int32:   4 bytes LE, signed
//! string:  int32 byte length, then that many UTF-8 bytes
//! ```

use crate::error::{ParcelError, ParcelResult};

/// Byte-buffer cursor for reading and writing parcel wire data.
#[derive(Debug, Default, Clone)]
pub struct Parcel {
    buf: Vec<u8>,
    pos: usize,
}

impl Parcel {
    /// Create an empty parcel for writing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap received bytes for reading, cursor at the start.
    pub fn from_bytes(buf: Vec<u8>) -> Self {
        Self { buf, pos: 0 }
    }

    /// Consume the parcel, yielding the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// All bytes held by the parcel, regardless of cursor position.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Append a signed 32-bit integer.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a length-prefixed UTF-8 string.
    ///
    /// # Panics
    ///
    /// Panics if the string is longer than `i32::MAX` bytes. Such a value cannot be
    /// represented in the wire format, and policy strings are capped far below it.
    pub fn write_string(&mut self, value: &str) {
        let len = i32::try_from(value.len()).expect("string exceeds i32::MAX bytes");
        self.write_i32(len);
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Read a signed 32-bit integer.
    pub fn read_i32(&mut self) -> ParcelResult<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a non-negative length or count prefix.
    ///
    /// A negative prefix is a framing error: this component never encodes null
    /// markers or sentinel lengths.
    pub fn read_size(&mut self) -> ParcelResult<usize> {
        let value = self.read_i32()?;
        usize::try_from(value).map_err(|_| ParcelError::NegativeLength { value })
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> ParcelResult<String> {
        let len = self.read_size()?;
        let bytes = self.take(len)?;
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }

    /// Advance the cursor over `n` bytes, returning them.
    fn take(&mut self, n: usize) -> ParcelResult<&[u8]> {
        if self.remaining() < n {
            return Err(ParcelError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_roundtrip() {
        let mut parcel = Parcel::new();
        parcel.write_i32(0);
        parcel.write_i32(-1);
        parcel.write_i32(i32::MAX);
        parcel.write_i32(i32::MIN);

        let mut parcel = Parcel::from_bytes(parcel.into_bytes());
        assert_eq!(parcel.read_i32().unwrap(), 0);
        assert_eq!(parcel.read_i32().unwrap(), -1);
        assert_eq!(parcel.read_i32().unwrap(), i32::MAX);
        assert_eq!(parcel.read_i32().unwrap(), i32::MIN);
        assert_eq!(parcel.remaining(), 0);
    }

    #[test]
    fn test_i32_is_little_endian() {
        let mut parcel = Parcel::new();
        parcel.write_i32(1);
        assert_eq!(parcel.as_bytes(), &[1, 0, 0, 0]);
    }

    #[test]
    fn test_string_roundtrip() {
        let mut parcel = Parcel::new();
        parcel.write_string("policy");
        parcel.write_string("");
        parcel.write_string("naïve");

        let mut parcel = Parcel::from_bytes(parcel.into_bytes());
        assert_eq!(parcel.read_string().unwrap(), "policy");
        assert_eq!(parcel.read_string().unwrap(), "");
        assert_eq!(parcel.read_string().unwrap(), "naïve");
    }

    #[test]
    fn test_string_wire_form() {
        let mut parcel = Parcel::new();
        parcel.write_string("ab");
        assert_eq!(parcel.as_bytes(), &[2, 0, 0, 0, b'a', b'b']);
    }

    #[test]
    fn test_read_i32_truncated() {
        let mut parcel = Parcel::from_bytes(vec![1, 0]);
        let err = parcel.read_i32().unwrap_err();
        assert!(matches!(
            err,
            ParcelError::UnexpectedEof {
                needed: 4,
                remaining: 2
            }
        ));
        assert!(err.is_truncation());
    }

    #[test]
    fn test_read_string_truncated_payload() {
        // Length prefix says 10 bytes, but no payload follows.
        let mut parcel = Parcel::from_bytes(vec![10, 0, 0, 0]);
        assert!(matches!(
            parcel.read_string(),
            Err(ParcelError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_read_size_negative() {
        let mut parcel = Parcel::new();
        parcel.write_i32(-5);
        let mut parcel = Parcel::from_bytes(parcel.into_bytes());
        assert!(matches!(
            parcel.read_size(),
            Err(ParcelError::NegativeLength { value: -5 })
        ));
    }

    #[test]
    fn test_read_string_invalid_utf8() {
        let mut parcel = Parcel::from_bytes(vec![2, 0, 0, 0, 0xff, 0xfe]);
        assert!(matches!(
            parcel.read_string(),
            Err(ParcelError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_cursor_position_tracks_reads() {
        let mut parcel = Parcel::new();
        parcel.write_string("ab");
        parcel.write_i32(7);

        let mut parcel = Parcel::from_bytes(parcel.into_bytes());
        assert_eq!(parcel.position(), 0);
        parcel.read_string().unwrap();
        assert_eq!(parcel.position(), 6);
        parcel.read_i32().unwrap();
        assert_eq!(parcel.remaining(), 0);
    }
}
