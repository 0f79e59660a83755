pub(crate) mod inspect;
pub(crate) mod oids;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum CertCommands {
    /// Walk the fields of an X.509 certificate
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}
