//! Canonical DER length fields.
//!
//! DER allows exactly one encoding per length: values below 128 use the
//! short form (one byte), everything else the long form `0x80|k` followed
//! by the k-byte minimal big-endian value. The decoder rejects every other
//! shape. Lenient length parsing is a known parser-confusion attack
//! surface, so the indefinite marker, leading zero bytes, and long forms
//! that fit the short form all fail with [`Error::InvalidLength`].

use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};

/// Number of bytes the length field for `length` occupies on the wire.
pub fn length_size(length: usize) -> usize {
    if length < 0x80 {
        return 1;
    }

    let mut size = 1;
    let mut rest = length;
    while rest > 0 {
        rest >>= 8;
        size += 1;
    }
    size
}

impl Writer<'_> {
    /// Encodes a definite length in canonical form.
    pub fn encode_length(&mut self, length: usize) -> Result<()> {
        if length < 0x80 {
            return self.write_u8(length as u8);
        }

        let mut len_bytes = 0;
        let mut rest = length;
        while rest > 0 {
            rest >>= 8;
            len_bytes += 1;
        }
        if len_bytes > 127 {
            return Err(Error::InvalidLength);
        }
        if self.remaining() < len_bytes + 1 {
            return Err(Error::BufferTooSmall);
        }

        self.write_u8(0x80 | len_bytes as u8)?;
        for i in (0..len_bytes).rev() {
            self.write_u8((length >> (i * 8)) as u8)?;
        }
        Ok(())
    }
}

impl Reader<'_> {
    /// Decodes a definite length, rejecting non-canonical forms.
    pub fn decode_length(&mut self) -> Result<usize> {
        self.atomically(|r| {
            let first = r.read_u8()?;
            if first & 0x80 == 0 {
                return Ok(first as usize);
            }

            let len_bytes = (first & 0x7F) as usize;
            if len_bytes == 0 {
                // bare 0x80: the indefinite form, invalid in DER
                return Err(Error::InvalidLength);
            }
            if len_bytes > size_of::<usize>() {
                return Err(Error::Overflow);
            }

            let bytes = r.read_slice(len_bytes)?;
            if bytes[0] == 0x00 {
                return Err(Error::InvalidLength);
            }
            if len_bytes == 1 && bytes[0] < 0x80 {
                // fits the short form
                return Err(Error::InvalidLength);
            }

            let mut length = 0usize;
            for &byte in bytes {
                length = (length << 8) | byte as usize;
            }
            Ok(length)
        })
    }
}
