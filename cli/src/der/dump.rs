use clap::Args;

use crate::error::Result;
use crate::utils::{format_hex_dump, read_der};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the DER file. If not specified, reads from stdin
    file: Option<String>,

    /// Unwrap a PEM envelope before dumping
    #[arg(long)]
    pem: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let der_bytes = read_der(config.file.as_deref(), config.pem)?;

    print!("{}", format_hex_dump(&der_bytes));

    Ok(())
}
