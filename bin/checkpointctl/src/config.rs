use std::str::FromStr;

use structopt::StructOpt;

use bin_common::Config as BinCommonConfig;
use checkpoints::Config as CheckpointsConfig;
use crypto::Hash256;

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case", name = "checkpointctl")]
pub struct Config {
    #[structopt(flatten)]
    pub bin_common_config: BinCommonConfig,

    #[structopt(flatten)]
    pub checkpoints_config: CheckpointsConfig,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub enum Command {
    /// Checks a block hash against the checkpoint pinned at its height
    Check {
        #[structopt(long)]
        height: u64,
        #[structopt(long)]
        hash: Hash256,
    },

    /// Prints the lower bound estimate of the chain height
    Total,

    /// Checks whether a height is covered by checkpoints
    Zone {
        #[structopt(long)]
        height: u64,
    },

    /// Estimates verification progress for a block
    Progress {
        /// Cumulative transaction count of the block. Without it there is no block to measure
        #[structopt(long)]
        tx_count: Option<u64>,

        /// Block timestamp (unix seconds)
        #[structopt(long, default_value = "0")]
        block_time: u32,

        /// Assume signatures are checked after the last checkpoint
        #[structopt(long)]
        fast: bool,
    },

    /// Finds the most recent checkpoint among locally known blocks
    Last {
        /// A known block as `height:hash`, may be repeated
        #[structopt(long = "known")]
        known: Vec<KnownBlock>,
    },

    /// Lists the checkpoints of the selected network
    List,
}

/// A block passed on the command line as `height:hash`
#[derive(Debug, Clone)]
pub struct KnownBlock {
    pub height: u64,
    pub hash: Hash256,
}

#[derive(thiserror::Error, Debug)]
pub enum ParseKnownBlockError {
    #[error("Expected height:hash, found \"{0}\"")]
    Format(String),

    #[error(transparent)]
    Height(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Hash(#[from] hex::FromHexError),
}

impl FromStr for KnownBlock {
    type Err = ParseKnownBlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split(':').collect::<Vec<_>>();
        if let [height, hash] = fields[..] {
            Ok(KnownBlock {
                height: height.parse()?,
                hash: hash.parse()?,
            })
        } else {
            Err(ParseKnownBlockError::Format(s.to_owned()))
        }
    }
}
