use std::collections::HashMap;

use log::{error, info};
use structopt::StructOpt;

use checkpoints::Checkpoints;
use common::BlockIndexEntry;

mod config;
use config::{Command, Config, KnownBlock};

fn main() {
    // Command Line Arguments
    let config = Config::from_args();

    // Logging
    if let Err(err) = bin_common::logger::init(&config.bin_common_config, "checkpointctl") {
        eprintln!("Failed to initialise logger: {}", err);
        std::process::exit(1);
    }

    // Main
    let checkpoints = Checkpoints::from_config(&config.checkpoints_config);
    if !run(&checkpoints, config.command) {
        error!("Checkpoint check failed");
        std::process::exit(2);
    }
    info!("Exiting");
}

/// Runs a single command against the checkpoint service
///
/// # Returns
/// `false` if a checked block diverges from the pinned checkpoints
fn run(checkpoints: &Checkpoints, command: Command) -> bool {
    match command {
        Command::Check { height, hash } => {
            let passed = checkpoints.check_block(height, &hash);
            println!("{}", if passed { "ok" } else { "mismatch" });
            passed
        }
        Command::Total => {
            println!("{}", checkpoints.get_total_blocks_estimate());
            true
        }
        Command::Zone { height } => {
            println!("{}", checkpoints.in_checkpoint_zone(height));
            true
        }
        Command::Progress { tx_count, block_time, fast } => {
            let entry = tx_count.map(|cumulative_tx_count| BlockIndexEntry {
                height: 0,
                cumulative_tx_count,
                block_time,
            });
            let progress = checkpoints.guess_verification_progress(entry.as_ref(), fast);
            println!("{:.6}", progress);
            true
        }
        Command::Last { known } => {
            let index = build_index(&known);
            match checkpoints.get_last_checkpoint(&index) {
                Some(entry) => println!("{}", entry.height),
                None => println!("none"),
            }
            true
        }
        Command::List => {
            checkpoints
                .profile()
                .iter()
                .for_each(|checkpoint| println!("{}\t{}", checkpoint.height, checkpoint.hash));
            true
        }
    }
}

fn build_index(known: &[KnownBlock]) -> HashMap<crypto::Hash256, BlockIndexEntry> {
    known
        .iter()
        .map(|block| {
            let entry = BlockIndexEntry {
                height: block.height,
                cumulative_tx_count: 0,
                block_time: 0,
            };
            (block.hash.clone(), entry)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use checkpoints::FixedClock;
    use common::Network;

    fn known(height: u64, hash: &str) -> KnownBlock {
        KnownBlock { height, hash: hash.parse().unwrap() }
    }

    #[test]
    fn check_reports_mismatch() {
        let checkpoints = Checkpoints::new(Network::Main);
        let genesis = checkpoints.profile().get_checkpoint(0).unwrap().clone();
        assert!(run(&checkpoints, Command::Check { height: 0, hash: genesis.clone() }));
        assert!(!run(&checkpoints, Command::Check { height: 6143, hash: genesis }));
    }

    #[test]
    fn index_from_known_blocks() {
        let blocks = vec![
            known(0, "00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64"),
            known(12797, "000000002c29644e179baa188fa6b9b9454721f1f21f2b9f31eebe9acc1a31db"),
        ];
        let index = build_index(&blocks);
        let checkpoints = Checkpoints::with_clock(Network::Main, FixedClock(0));
        assert_eq!(checkpoints.get_last_checkpoint(&index).map(|entry| entry.height), Some(12797));
    }
}
