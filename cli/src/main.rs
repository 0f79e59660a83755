use clap::{Parser, Subcommand};

mod cert;
mod der;
mod error;
mod utils;

use error::Result;

use crate::cert::CertCommands;
use crate::der::DerCommands;

#[derive(Parser)]
#[command(name = "derkit")]
#[command(about = "DER structure and X.509 certificate inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// DER structure operations
    Der {
        #[command(subcommand)]
        command: DerCommands,
    },
    /// Certificate operations
    Cert {
        #[command(subcommand)]
        command: CertCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Der { command } => match command {
            DerCommands::Validate { config } => {
                crate::der::validate::execute(config)?;
            }
            DerCommands::Print { config } => {
                crate::der::print::execute(config)?;
            }
            DerCommands::Dump { config } => {
                crate::der::dump::execute(config)?;
            }
        },
        Commands::Cert { command } => match command {
            CertCommands::Inspect { config } => {
                cert::inspect::execute(config)?;
            }
        },
    }

    Ok(())
}
