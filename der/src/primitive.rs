//! Typed primitive codecs built on the TLV layer.
//!
//! Encoders write canonical DER; decoders verify the tag they were asked
//! for and fail with [`Error::InvalidTag`] on anything else, leaving the
//! cursor where it was so the caller can try another codec.

use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};
use crate::tag::{
    TAG_BOOLEAN, TAG_INTEGER, TAG_NULL, TAG_OCTET_STRING, TAG_PRINTABLE_STRING, TAG_SEQUENCE,
    TAG_SET, TAG_UTF8_STRING,
};

impl Writer<'_> {
    /// Encodes a BOOLEAN with the canonical content byte (0x00 or 0xFF).
    pub fn encode_boolean(&mut self, value: bool) -> Result<()> {
        self.atomically(|w| {
            w.encode_tlv_header(TAG_BOOLEAN, 1)?;
            w.write_u8(if value { 0xFF } else { 0x00 })
        })
    }

    /// Encodes an INTEGER from an unsigned big-endian magnitude.
    ///
    /// Redundant leading zero bytes are stripped (keeping at least one)
    /// and a single 0x00 pad byte is prepended when the remaining leading
    /// bit is set, keeping the value non-negative in two's complement.
    pub fn encode_integer(&mut self, magnitude: &[u8]) -> Result<()> {
        if magnitude.is_empty() {
            return Err(Error::InvalidData);
        }

        let mut start = 0;
        while start < magnitude.len() - 1 && magnitude[start] == 0x00 {
            start += 1;
        }
        let stripped = &magnitude[start..];
        let pad = stripped[0] & 0x80 != 0;

        self.atomically(|w| {
            w.encode_tlv_header(TAG_INTEGER, stripped.len() + usize::from(pad))?;
            if pad {
                w.write_u8(0x00)?;
            }
            w.write_slice(stripped)
        })
    }

    pub fn encode_octet_string(&mut self, value: &[u8]) -> Result<()> {
        self.encode_bytes(TAG_OCTET_STRING, value)
    }

    /// Encodes a NULL: a tag with zero-length content.
    pub fn encode_null(&mut self) -> Result<()> {
        self.encode_tlv_header(TAG_NULL, 0)
    }

    pub fn encode_utf8_string(&mut self, value: &str) -> Result<()> {
        self.encode_bytes(TAG_UTF8_STRING, value.as_bytes())
    }

    pub fn encode_printable_string(&mut self, value: &str) -> Result<()> {
        self.encode_bytes(TAG_PRINTABLE_STRING, value.as_bytes())
    }

    /// Encodes a SEQUENCE header; the caller writes the content after it.
    pub fn encode_sequence_header(&mut self, content_length: usize) -> Result<()> {
        self.encode_tlv_header(TAG_SEQUENCE, content_length)
    }

    pub fn encode_set_header(&mut self, content_length: usize) -> Result<()> {
        self.encode_tlv_header(TAG_SET, content_length)
    }

    /// Encodes a u32 as a minimal INTEGER (zero becomes a single 0x00
    /// byte).
    pub fn encode_uint32(&mut self, value: u32) -> Result<()> {
        let bytes = value.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(3);
        self.encode_integer(&bytes[start..])
    }

    /// Encodes an i32 from its full 4-byte two's-complement form.
    ///
    /// The generic encoder re-minimizes positive values; negative ones
    /// travel as a 0x00-padded 4-byte magnitude, which [`decode_int32`]
    /// folds back. This asymmetry with [`encode_uint32`] is deliberate.
    ///
    /// [`decode_int32`]: Reader::decode_int32
    /// [`encode_uint32`]: Writer::encode_uint32
    pub fn encode_int32(&mut self, value: i32) -> Result<()> {
        self.encode_integer(&value.to_be_bytes())
    }

    fn encode_bytes(&mut self, tag: u8, value: &[u8]) -> Result<()> {
        self.atomically(|w| {
            w.encode_tlv_header(tag, value.len())?;
            w.write_slice(value)
        })
    }
}

impl<'a> Reader<'a> {
    /// Decodes a BOOLEAN.
    ///
    /// Any non-zero content byte reads as true; the canonical 0xFF is only
    /// enforced on encode.
    pub fn decode_boolean(&mut self) -> Result<bool> {
        self.atomically(|r| {
            let tlv = r.decode_tlv()?;
            if tlv.tag != TAG_BOOLEAN {
                return Err(Error::InvalidTag);
            }
            if tlv.length() != 1 {
                return Err(Error::InvalidLength);
            }
            Ok(tlv.value[0] != 0)
        })
    }

    /// Decodes an INTEGER, returning the raw two's-complement content.
    ///
    /// Content longer than `max_len` fails with
    /// [`Error::BufferTooSmall`]; the fixed-width helpers build their
    /// overflow checks on this cap.
    pub fn decode_integer(&mut self, max_len: usize) -> Result<&'a [u8]> {
        self.atomically(|r| {
            let tlv = r.decode_tlv()?;
            if tlv.tag != TAG_INTEGER {
                return Err(Error::InvalidTag);
            }
            if tlv.value.is_empty() {
                return Err(Error::InvalidLength);
            }
            if tlv.length() > max_len {
                return Err(Error::BufferTooSmall);
            }
            Ok(tlv.value)
        })
    }

    pub fn decode_octet_string(&mut self) -> Result<Vec<u8>> {
        self.atomically(|r| {
            let tlv = r.decode_tlv()?;
            if tlv.tag != TAG_OCTET_STRING {
                return Err(Error::InvalidTag);
            }
            Ok(tlv.value.to_vec())
        })
    }

    /// Decodes a NULL, verifying the zero-length content.
    pub fn decode_null(&mut self) -> Result<()> {
        self.atomically(|r| {
            let tlv = r.decode_tlv()?;
            if tlv.tag != TAG_NULL {
                return Err(Error::InvalidTag);
            }
            if !tlv.value.is_empty() {
                return Err(Error::InvalidLength);
            }
            Ok(())
        })
    }

    pub fn decode_utf8_string(&mut self) -> Result<String> {
        self.decode_string(TAG_UTF8_STRING)
    }

    /// Decodes a PrintableString. Only UTF-8 well-formedness is checked;
    /// the PrintableString character subset is not.
    pub fn decode_printable_string(&mut self) -> Result<String> {
        self.decode_string(TAG_PRINTABLE_STRING)
    }

    /// Decodes a SEQUENCE header, returning the content length. The
    /// content stays in the reader for the caller to walk.
    pub fn decode_sequence_header(&mut self) -> Result<usize> {
        self.decode_header(TAG_SEQUENCE)
    }

    pub fn decode_set_header(&mut self) -> Result<usize> {
        self.decode_header(TAG_SET)
    }

    /// Decodes an INTEGER into a u32.
    ///
    /// Accepts at most four value bytes plus the 0x00 sign pad; anything
    /// wider fails with [`Error::Overflow`].
    pub fn decode_uint32(&mut self) -> Result<u32> {
        self.atomically(|r| {
            let content = r.decode_integer(5)?;
            if content.len() == 5 && content[0] != 0x00 {
                return Err(Error::Overflow);
            }
            let mut value: u32 = 0;
            for &byte in content {
                value = (value << 8) | byte as u32;
            }
            Ok(value)
        })
    }

    /// Decodes an INTEGER into an i32, sign-extending short content.
    ///
    /// Five-byte content is accepted only with a 0x00 pad byte in front;
    /// the remaining four bytes are taken as the two's-complement bit
    /// pattern, reversing [`encode_int32`](Writer::encode_int32).
    pub fn decode_int32(&mut self) -> Result<i32> {
        self.atomically(|r| {
            let content = r.decode_integer(5)?;
            if content.len() == 5 && content[0] != 0x00 {
                return Err(Error::Overflow);
            }
            let mut value: i32 = if content[0] & 0x80 != 0 { -1 } else { 0 };
            for &byte in content {
                value = (value << 8) | byte as i32;
            }
            Ok(value)
        })
    }

    fn decode_string(&mut self, tag: u8) -> Result<String> {
        self.atomically(|r| {
            let tlv = r.decode_tlv()?;
            if tlv.tag != tag {
                return Err(Error::InvalidTag);
            }
            String::from_utf8(tlv.value.to_vec()).map_err(|_| Error::InvalidData)
        })
    }

    fn decode_header(&mut self, expected: u8) -> Result<usize> {
        self.atomically(|r| {
            let tag = r.decode_tag()?;
            if tag != expected {
                return Err(Error::InvalidTag);
            }
            r.decode_length()
        })
    }
}
