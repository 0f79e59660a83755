//! Recursive structural traversals.
//!
//! Both walkers use only the TLV codec and tag classification. Nesting is
//! an attacker-controlled quantity, so recursion carries an explicit
//! depth counter and fails with [`Error::DepthExceeded`] instead of
//! riding the call stack into the ground.

use crate::cursor::Reader;
use crate::error::{Error, Result};
use crate::length::length_size;
use crate::oid::oid_from_bytes;
use crate::tag::{
    self, TAG_BOOLEAN, TAG_IA5_STRING, TAG_INTEGER, TAG_NULL, TAG_OID, TAG_PRINTABLE_STRING,
    TAG_UTF8_STRING,
};
use crate::tlv::Tlv;

/// Maximum nesting depth either traversal follows.
///
/// Certificates nest a handful of levels; anything past this is treated
/// as hostile input.
pub const MAX_DEPTH: usize = 32;

/// Checks that every TLV in `data`, at every nesting level, is
/// well-formed and accounts for exactly the bytes its header declares.
///
/// The first error at any depth aborts the whole walk.
pub fn validate_structure(data: &[u8]) -> Result<()> {
    validate_level(data, 0)
}

fn validate_level(data: &[u8], depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded);
    }

    let mut reader = Reader::new(data);
    while !reader.is_empty() {
        let start = reader.position();
        let tlv = reader.decode_tlv()?;

        let expected = start + 1 + length_size(tlv.length()) + tlv.length();
        if reader.position() != expected {
            return Err(Error::InvalidData);
        }

        if tlv.is_constructed() {
            // the value is an independent nested buffer
            validate_level(tlv.value, depth + 1)?;
        }
    }
    Ok(())
}

/// Renders the TLV structure of `data` into `out`, one line per element,
/// nested elements indented.
///
/// On a malformed element the failing kind is appended and the walk
/// stops. Diagnostic only; run [`validate_structure`] to judge input.
pub fn print_structure(data: &[u8], out: &mut String) -> Result<()> {
    print_level(data, 0, out)
}

fn print_level(data: &[u8], depth: usize, out: &mut String) -> Result<()> {
    if depth > MAX_DEPTH {
        out.push_str(&format!("error parsing TLV: {}\n", Error::DepthExceeded));
        return Err(Error::DepthExceeded);
    }

    let mut reader = Reader::new(data);
    while !reader.is_empty() {
        out.push_str(&"  ".repeat(depth));

        let tlv = match reader.decode_tlv() {
            Ok(tlv) => tlv,
            Err(err) => {
                out.push_str(&format!("error parsing TLV: {err}\n"));
                return Err(err);
            }
        };

        out.push_str(&format!(
            "{} (tag 0x{:02X}) [{} bytes]: ",
            tag::tag_name(tlv.tag),
            tlv.tag,
            tlv.length()
        ));

        if tlv.is_constructed() {
            out.push('\n');
            print_level(tlv.value, depth + 1, out)?;
        } else {
            print_primitive(&tlv, out);
        }
    }
    Ok(())
}

fn print_primitive(tlv: &Tlv<'_>, out: &mut String) {
    match tlv.tag {
        TAG_BOOLEAN => {
            if tlv.length() == 1 {
                out.push_str(if tlv.value[0] != 0 { "TRUE" } else { "FALSE" });
            } else {
                out.push_str("invalid BOOLEAN length");
            }
        }
        TAG_INTEGER if tlv.length() <= 4 => {
            let mut value: u32 = 0;
            for &byte in tlv.value {
                value = (value << 8) | byte as u32;
            }
            out.push_str(&format!("{} (0x{})", value, hex(tlv.value)));
        }
        TAG_NULL => out.push_str("NULL"),
        TAG_OID => match oid_from_bytes(tlv.value) {
            Ok(oid) => out.push_str(&dotted(&oid)),
            Err(_) => out.push_str("invalid OID"),
        },
        TAG_UTF8_STRING | TAG_PRINTABLE_STRING | TAG_IA5_STRING => {
            out.push('"');
            for &byte in tlv.value {
                if (32..=126).contains(&byte) {
                    out.push(byte as char);
                } else {
                    out.push_str(&format!("\\x{byte:02X}"));
                }
            }
            out.push('"');
        }
        // INTEGER wider than 4 bytes, OCTET STRING, and anything else
        _ => out.push_str(&format!("0x{}", hex(tlv.value))),
    }
    out.push('\n');
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

fn dotted(oid: &[u32]) -> String {
    oid.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
