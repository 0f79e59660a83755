pub(crate) mod dump;
pub(crate) mod print;
pub(crate) mod validate;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum DerCommands {
    /// Check that the input parses as well-formed DER
    Validate {
        #[command(flatten)]
        config: validate::Config,
    },
    /// Print the TLV structure of the input
    Print {
        #[command(flatten)]
        config: print::Config,
    },
    /// Hex dump the input
    Dump {
        #[command(flatten)]
        config: dump::Config,
    },
}
