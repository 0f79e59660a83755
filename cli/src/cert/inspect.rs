//! Best-effort field walk over an X.509 certificate.
//!
//! This is a plain sequence of calls into the DER codec following the
//! RFC 5280 field order. Fields that fail to parse are skipped rather
//! than aborting the report; the output is diagnostic, not a validation
//! verdict.

use std::str::FromStr;

use clap::Args;
use der::tag::{
    TAG_BIT_STRING, TAG_BOOLEAN, TAG_GENERALIZED_TIME, TAG_OCTET_STRING, TAG_PRINTABLE_STRING,
    TAG_UTC_TIME, TAG_UTF8_STRING,
};
use der::{Reader, is_constructed, is_context_specific};
use pem::Pem;

use crate::cert::oids::{attribute_name, oid_name};
use crate::error::Result;
use crate::utils::{format_hex_dump, format_oid, indent, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the certificate file. If not specified, reads from stdin
    file: Option<String>,

    /// Input is raw DER instead of PEM
    #[arg(long)]
    der: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let der_bytes = if config.der {
        input
    } else {
        let contents = String::from_utf8(input)?;
        Pem::from_str(&contents)?.contents()?
    };

    print!("{}", inspect_certificate(&der_bytes)?);

    Ok(())
}

/// Renders the certificate fields into a report.
///
/// The two outer SEQUENCE headers (Certificate, TBSCertificate) must
/// parse; everything after that is best effort.
pub(crate) fn inspect_certificate(der_bytes: &[u8]) -> Result<String> {
    let mut out = String::new();
    let mut reader = Reader::new(der_bytes);

    out.push_str("X.509 Certificate:\n");
    reader.decode_sequence_header()?;
    reader.decode_sequence_header()?;
    out.push_str("TBSCertificate:\n");

    format_version(&mut reader, &mut out);
    format_serial(&mut reader, &mut out);
    format_algorithm(&mut reader, "Signature Algorithm", &mut out);
    format_name(&mut reader, "Issuer", &mut out);
    format_validity(&mut reader, &mut out);
    format_name(&mut reader, "Subject", &mut out);
    format_public_key_info(&mut reader, &mut out);
    format_extensions(&mut reader, &mut out);

    Ok(out)
}

fn format_version(reader: &mut Reader<'_>, out: &mut String) {
    let Ok(tag) = reader.peek_tag() else { return };
    if !(is_context_specific(tag) && is_constructed(tag)) {
        // the [0] EXPLICIT wrapper is absent for v1 certificates
        out.push_str("  Version: v1 (default)\n");
        return;
    }

    let Ok(tlv) = reader.decode_tlv() else { return };
    let mut inner = Reader::new(tlv.value);
    match inner.decode_uint32() {
        Ok(version) => {
            out.push_str(&format!("  Version: v{} (0x{version:x})\n", version + 1));
        }
        Err(_) => out.push_str("  Version: (invalid)\n"),
    }
}

fn format_serial(reader: &mut Reader<'_>, out: &mut String) {
    if let Ok(serial) = reader.decode_integer(64) {
        let hex: Vec<String> = serial.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&format!("  Serial Number: {}\n", hex.join(":")));
    }
}

fn format_algorithm(reader: &mut Reader<'_>, name: &str, out: &mut String) {
    let Ok(content_len) = reader.decode_sequence_header() else {
        return;
    };
    let end = reader.position() + content_len;
    out.push_str(&format!("  {name}:\n"));

    if let Ok(oid) = reader.decode_oid() {
        out.push_str(&format!("    Algorithm: {}\n", oid_with_name(&oid)));
    }
    // parameters (NULL, a curve OID, ...) are present for some algorithms
    while reader.position() < end {
        if reader.skip_element().is_err() {
            break;
        }
    }
}

fn format_name(reader: &mut Reader<'_>, name_type: &str, out: &mut String) {
    let Ok(content_len) = reader.decode_sequence_header() else {
        return;
    };
    let end = reader.position() + content_len;
    out.push_str(&format!("  {name_type}:\n"));

    while reader.position() < end {
        if reader.decode_set_header().is_err() || reader.decode_sequence_header().is_err() {
            break;
        }
        let Ok(oid) = reader.decode_oid() else { break };

        out.push_str("    ");
        match attribute_name(&oid) {
            Some(short) => out.push_str(&format!("{short}=")),
            None => out.push_str(&format!("OID({})=", format_oid(&oid))),
        }

        match reader.peek_tag() {
            Ok(TAG_UTF8_STRING) => {
                if let Ok(value) = reader.decode_utf8_string() {
                    out.push_str(&value);
                }
            }
            Ok(TAG_PRINTABLE_STRING) => {
                if let Ok(value) = reader.decode_printable_string() {
                    out.push_str(&value);
                }
            }
            _ => {
                let _ = reader.skip_element();
                out.push_str("(unparsed)");
            }
        }
        out.push('\n');
    }
}

fn format_validity(reader: &mut Reader<'_>, out: &mut String) {
    if reader.decode_sequence_header().is_err() {
        return;
    }
    out.push_str("  Validity:\n");
    format_time(reader, "Not Before", out);
    format_time(reader, "Not After", out);
}

fn format_time(reader: &mut Reader<'_>, label: &str, out: &mut String) {
    let Ok(tag) = reader.peek_tag() else { return };
    out.push_str(&format!("    {label}: "));

    if tag == TAG_UTC_TIME || tag == TAG_GENERALIZED_TIME {
        if let Ok(tlv) = reader.decode_tlv() {
            out.push_str(&String::from_utf8_lossy(tlv.value));
        }
    } else {
        let _ = reader.skip_element();
        out.push_str("(unparsed)");
    }
    out.push('\n');
}

fn format_public_key_info(reader: &mut Reader<'_>, out: &mut String) {
    if reader.decode_sequence_header().is_err() {
        return;
    }
    out.push_str("  Public Key Info:\n");
    format_algorithm(reader, "Public Key Algorithm", out);

    if reader.peek_tag() != Ok(TAG_BIT_STRING) {
        return;
    }
    let Ok(tlv) = reader.decode_tlv() else { return };
    if tlv.length() > 0 {
        // the first content byte counts the unused bits
        out.push_str(&format!("    Public Key: ({} bits)\n", (tlv.length() - 1) * 8));
        out.push_str(&indent(&format_hex_dump(&tlv.value[1..]), "      "));
    }
}

fn format_extensions(reader: &mut Reader<'_>, out: &mut String) {
    let Ok(tag) = reader.peek_tag() else { return };
    if !(is_context_specific(tag) && is_constructed(tag)) {
        return;
    }
    let Ok(ext_tlv) = reader.decode_tlv() else { return };
    out.push_str("  Extensions:\n");

    let mut ext_reader = Reader::new(ext_tlv.value);
    let Ok(content_len) = ext_reader.decode_sequence_header() else {
        return;
    };
    let end = ext_reader.position() + content_len;

    while ext_reader.position() < end {
        if ext_reader.decode_sequence_header().is_err() {
            break;
        }
        let Ok(oid) = ext_reader.decode_oid() else { break };
        out.push_str(&format!("    Extension: {}\n", oid_with_name(&oid)));

        if ext_reader.peek_tag() == Ok(TAG_BOOLEAN) {
            if let Ok(critical) = ext_reader.decode_boolean() {
                out.push_str(&format!("      Critical: {critical}\n"));
            }
        }
        if ext_reader.peek_tag() == Ok(TAG_OCTET_STRING) {
            if let Ok(value) = ext_reader.decode_octet_string() {
                out.push_str(&format!("      Value: ({} bytes)\n", value.len()));
            }
        }
    }
}

fn oid_with_name(oid: &[u32]) -> String {
    match oid_name(oid) {
        Some(name) => format!("{} ({name})", format_oid(oid)),
        None => format_oid(oid),
    }
}
