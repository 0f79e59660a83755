use clap::Args;

use crate::error::Result;
use crate::utils::read_der;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the DER file. If not specified, reads from stdin
    file: Option<String>,

    /// Unwrap a PEM envelope before decoding
    #[arg(long)]
    pem: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let der_bytes = read_der(config.file.as_deref(), config.pem)?;

    // partial output plus the failing kind still gets printed on error
    let mut out = String::new();
    let result = der::print_structure(&der_bytes, &mut out);
    print!("{out}");

    result?;
    Ok(())
}
