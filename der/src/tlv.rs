//! Tag-length-value records.
//!
//! A decoded [`Tlv`] borrows its value bytes straight out of the source
//! buffer; nothing is copied. On success the cursor advances by exactly
//! `1 + length_size(length) + length`, the accounting the structural
//! walker checks.

use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};
use crate::tag;

/// One tag-length-value record, borrowing its value from the source
/// buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tag: u8,
    pub value: &'a [u8],
}

impl Tlv<'_> {
    pub fn length(&self) -> usize {
        self.value.len()
    }

    pub fn is_constructed(&self) -> bool {
        tag::is_constructed(self.tag)
    }

    pub fn is_context_specific(&self) -> bool {
        tag::is_context_specific(self.tag)
    }
}

impl<'a> Reader<'a> {
    /// Reads the tag byte.
    ///
    /// The high-tag-number form (number 31 and above) is not supported; it
    /// is rejected rather than misread as a one-byte tag.
    pub fn decode_tag(&mut self) -> Result<u8> {
        self.atomically(|r| {
            let tag = r.read_u8()?;
            if tag & tag::NUMBER_MASK == tag::NUMBER_MASK {
                return Err(Error::InvalidTag);
            }
            Ok(tag)
        })
    }

    /// Returns the next tag byte without consuming it.
    pub fn peek_tag(&self) -> Result<u8> {
        self.peek_u8()
    }

    /// Decodes one TLV, borrowing the value bytes in place.
    pub fn decode_tlv(&mut self) -> Result<Tlv<'a>> {
        self.atomically(|r| {
            let tag = r.decode_tag()?;
            let length = r.decode_length()?;
            let value = r.read_slice(length)?;
            Ok(Tlv { tag, value })
        })
    }

    /// Decodes and discards one TLV.
    pub fn skip_element(&mut self) -> Result<()> {
        self.decode_tlv().map(|_| ())
    }
}

impl Writer<'_> {
    pub fn encode_tag(&mut self, tag: u8) -> Result<()> {
        self.write_u8(tag)
    }

    /// Writes a tag byte and length field; the caller writes the value.
    pub fn encode_tlv_header(&mut self, tag: u8, length: usize) -> Result<()> {
        self.atomically(|w| {
            w.encode_tag(tag)?;
            w.encode_length(length)
        })
    }
}
