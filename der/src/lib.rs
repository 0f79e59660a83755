//! # der
//!
//! Bounds-checked encoding and decoding of DER, the canonical binary
//! subset of ASN.1 used by X.509 certificates and private keys.
//!
//! The input is untrusted by assumption. Every operation goes through a
//! bounded cursor ([`Reader`] for decoding, [`Writer`] for encoding) that
//! checks remaining space before touching memory and restores its
//! position when an operation fails. Length fields must be canonical,
//! recursion is depth-bounded, and fixed-width conversions reject values
//! that do not fit.
//!
//! ## Layers
//!
//! - [`Reader`] / [`Writer`]: bounded cursors over borrowed buffers.
//! - Length and TLV codecs: canonical length fields and zero-copy
//!   [`Tlv`] records.
//! - Primitive codecs: BOOLEAN, INTEGER, OCTET STRING, NULL,
//!   UTF8String/PrintableString, SEQUENCE/SET headers, and u32/i32
//!   convenience wrappers.
//! - [`oid`]: the base-128 subidentifier codec for OBJECT IDENTIFIERs.
//! - [`validate_structure`] / [`print_structure`]: recursive traversals
//!   over a complete buffer.
//!
//! ## Example
//!
//! ```
//! use der::{Reader, Writer};
//!
//! let mut buf = [0u8; 16];
//! let mut writer = Writer::new(&mut buf);
//! writer.encode_sequence_header(6).unwrap();
//! writer.encode_uint32(5).unwrap();
//! writer.encode_boolean(true).unwrap();
//! assert_eq!(&[0x30, 0x06, 0x02, 0x01, 0x05, 0x01, 0x01, 0xFF], writer.written());
//!
//! let mut reader = Reader::new(writer.written());
//! reader.decode_sequence_header().unwrap();
//! assert_eq!(5, reader.decode_uint32().unwrap());
//! assert!(reader.decode_boolean().unwrap());
//! ```

#![forbid(unsafe_code)]

mod cursor;
pub mod error;
mod length;
pub mod oid;
mod primitive;
pub mod tag;
mod tlv;
mod walk;

pub use cursor::{Reader, Writer};
pub use error::{Error, Result};
pub use length::length_size;
pub use tag::{is_constructed, is_context_specific, tag_name};
pub use tlv::Tlv;
pub use walk::{MAX_DEPTH, print_structure, validate_structure};
