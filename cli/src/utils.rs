use std::fs;
use std::io::{self, Read};
use std::str::FromStr;

use pem::Pem;

use crate::error::Result;

/// Reads input from a file, or from stdin when no path is given.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Reads DER bytes, unwrapping a PEM envelope first when asked to.
pub(crate) fn read_der(file: Option<&str>, unwrap_pem: bool) -> Result<Vec<u8>> {
    let input = read_input(file)?;
    if !unwrap_pem {
        return Ok(input);
    }

    let contents = String::from_utf8(input)?;
    let block = Pem::from_str(&contents)?;
    Ok(block.contents()?)
}

/// Formats binary data as an xxd-style hex dump: offset column, sixteen
/// hex bytes, ASCII rendering on the right.
pub(crate) fn format_hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 16;
    let mut output = String::new();

    for (index, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        output.push_str(&format!("{:08x}  ", index * BYTES_PER_LINE));

        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => output.push_str(&format!("{byte:02x} ")),
                None => output.push_str("   "),
            }
            if i == 7 {
                output.push(' ');
            }
        }

        output.push_str(" |");
        for byte in chunk {
            if byte.is_ascii_graphic() || *byte == b' ' {
                output.push(*byte as char);
            } else {
                output.push('.');
            }
        }
        output.push_str("|\n");
    }

    output
}

/// Prefixes every line of `text` with `prefix`.
pub(crate) fn indent(text: &str, prefix: &str) -> String {
    text.lines().map(|line| format!("{prefix}{line}\n")).collect()
}

/// Dotted-decimal rendering of OID components.
pub(crate) fn format_oid(oid: &[u32]) -> String {
    oid.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
