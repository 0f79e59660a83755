//! Object identifier codec.
//!
//! The wire form collapses the first two logical components into one
//! subidentifier (`first * 40 + second`) and writes every subidentifier
//! as a base-128 varint: seven bits per byte, most significant group
//! first, continuation bit set on all but the final byte.

use crate::cursor::{Reader, Writer};
use crate::error::{Error, Result};
use crate::tag::TAG_OID;

/// Longest accepted wire form of one subidentifier. Five base-128 groups
/// hold the 32 bits a component may carry.
const MAX_SUBID_BYTES: usize = 5;

fn encode_subid(out: &mut Vec<u8>, subid: u32) {
    if subid < 0x80 {
        out.push(subid as u8);
        return;
    }

    let mut groups = 0;
    let mut rest = subid;
    while rest > 0 {
        rest >>= 7;
        groups += 1;
    }
    for i in (0..groups).rev() {
        let mut byte = ((subid >> (i * 7)) & 0x7F) as u8;
        if i > 0 {
            byte |= 0x80;
        }
        out.push(byte);
    }
}

fn decode_subid(bytes: &[u8], pos: &mut usize) -> Result<u32> {
    let mut subid: u32 = 0;
    let mut read = 0;

    while *pos < bytes.len() {
        let byte = bytes[*pos];
        *pos += 1;
        read += 1;
        if read > MAX_SUBID_BYTES {
            return Err(Error::Overflow);
        }

        subid = (subid << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return Ok(subid);
        }
    }

    // the source ended before a terminal (high-bit-clear) byte
    Err(Error::InvalidData)
}

/// Serializes OID components into their wire form, without tag or length.
///
/// The first component must be 0, 1 or 2; under arcs 0 and 1 the second
/// stays below 40, under arc 2 at most 175, keeping the combined value
/// within 255.
pub fn oid_to_bytes(oid: &[u32]) -> Result<Vec<u8>> {
    if oid.len() < 2 {
        return Err(Error::InvalidData);
    }
    if oid[0] > 2 || (oid[0] < 2 && oid[1] >= 40) || (oid[0] == 2 && oid[1] > 175) {
        return Err(Error::InvalidData);
    }

    let mut bytes = Vec::new();
    encode_subid(&mut bytes, oid[0] * 40 + oid[1]);
    for &component in &oid[2..] {
        encode_subid(&mut bytes, component);
    }
    Ok(bytes)
}

/// Parses OID components from wire-form value bytes, without tag or
/// length.
pub fn oid_from_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.is_empty() {
        return Err(Error::InvalidLength);
    }

    let mut pos = 0;
    let first = decode_subid(bytes, &mut pos)?;
    let mut oid = if first < 40 {
        vec![0, first]
    } else if first < 80 {
        vec![1, first - 40]
    } else {
        vec![2, first - 80]
    };

    while pos < bytes.len() {
        oid.push(decode_subid(bytes, &mut pos)?);
    }
    Ok(oid)
}

impl Writer<'_> {
    /// Encodes an OBJECT IDENTIFIER from its components.
    pub fn encode_oid(&mut self, oid: &[u32]) -> Result<()> {
        let bytes = oid_to_bytes(oid)?;
        self.atomically(|w| {
            w.encode_tlv_header(TAG_OID, bytes.len())?;
            w.write_slice(&bytes)
        })
    }
}

impl Reader<'_> {
    /// Decodes an OBJECT IDENTIFIER into its components.
    pub fn decode_oid(&mut self) -> Result<Vec<u32>> {
        self.atomically(|r| {
            let tlv = r.decode_tlv()?;
            if tlv.tag != TAG_OID {
                return Err(Error::InvalidTag);
            }
            oid_from_bytes(tlv.value)
        })
    }
}
