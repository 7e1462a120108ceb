//! Fixed-offset layout of the 160-byte program record
//!
//! The record is a packed little-endian structure with no alignment padding.
//! Decoding walks it with an explicit [`Cursor`] that advances by each
//! field's declared width, so the offsets are a consequence of the field
//! order rather than magic numbers scattered through the parser. The named
//! constants below anchor the trailing region: the opportunistic dry/wet
//! and after-touch fields read by fixed offset, and the end marker.

use crate::types::{DecodeError, Result};
use byteorder::{ByteOrder, LittleEndian};

/// Minimum (and canonical) size of a program record in bytes.
pub const PROGRAM_SIZE: usize = 160;

/// Magic marker opening a well-formed record.
pub const HEADER_MAGIC: &[u8; 4] = b"PROG";

/// Magic marker closing a well-formed record.
pub const END_MARKER: &[u8; 4] = b"PRED";

/// Width of the program name field.
pub const NAME_LEN: usize = 12;

// Trailing-region anchors. The cursor walk runs through program transpose;
// the dry/wet and after-touch fields after it decode to `None` when absent,
// and the end marker closes the record.
pub const USER_PARAM56_TYPE_OFFSET: usize = 148;
pub const USER_PARAM1234_TYPE_OFFSET: usize = 149;
pub const PROGRAM_TRANSPOSE_OFFSET: usize = 150;
pub const DELAY_DRY_WET_OFFSET: usize = 151;
pub const REVERB_DRY_WET_OFFSET: usize = 153;
pub const AFTER_TOUCH_ASSIGN_OFFSET: usize = 155;
pub const END_MARKER_OFFSET: usize = 156;

/// Sequential reader over a program record buffer.
///
/// Every read checks the remaining length and fails with
/// [`DecodeError::MalformedLayout`] on overrun, so the parser never indexes
/// out of bounds even on adversarial input.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset into the record.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len).filter(|&e| e <= self.data.len());
        match end {
            Some(end) => {
                let slice = &self.data[self.pos..end];
                self.pos = end;
                Ok(slice)
            }
            None => Err(DecodeError::MalformedLayout(format!(
                "record truncated at offset {} (wanted {} more bytes)",
                self.pos, len
            ))),
        }
    }

    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn bool(&mut self) -> Result<bool> {
        Ok(self.u8()? != 0)
    }

    pub fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Read a fixed-width ASCII string field, right-trimmed of NUL padding.
    pub fn ascii(&mut self, len: usize) -> Result<String> {
        let offset = self.pos;
        let raw = self.take(len)?;
        let trimmed = trim_nul(raw);
        if !trimmed.is_ascii() {
            return Err(DecodeError::MalformedLayout(format!(
                "non-ASCII bytes in string field at offset {}",
                offset
            )));
        }
        Ok(String::from_utf8_lossy(trimmed).into_owned())
    }
}

/// Right-trim NUL padding from a fixed-width string field.
pub fn trim_nul(raw: &[u8]) -> &[u8] {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &raw[..end]
}

/// Tolerant single-byte read at a fixed offset.
pub fn read_u8_at(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

/// Tolerant little-endian u16 read at a fixed offset.
pub fn read_u16_le_at(data: &[u8], offset: usize) -> Option<u16> {
    data.get(offset..offset + 2).map(LittleEndian::read_u16)
}
