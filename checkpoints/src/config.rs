use structopt::StructOpt;

use common::Network;

/// Checkpoint configuration
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Network whose checkpoints are used (main, test, regtest)
    #[structopt(long, default_value = "main")]
    pub network: Network,

    /// Disables checkpoint enforcement
    #[structopt(long)]
    pub disable_checkpoints: bool,
}
