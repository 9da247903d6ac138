use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;

use log::debug;
use serde::{Deserialize, Serialize};

use common::Network;
use crypto::Hash256;

use crate::data::{self, NetworkData};
use crate::error::{Error, Result};

/// A block hash pinned at a given height
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Height of the pinned block
    pub height: u64,
    /// Hash of the pinned block
    pub hash: Hash256,
}

/// The checkpoint data for a single network
///
/// A profile is immutable once built. Heights are kept in ascending order and no hash appears
/// twice
#[derive(Clone, Debug)]
pub struct CheckpointProfile {
    network: Network,
    checkpoints: BTreeMap<u64, Hash256>,
    last_checkpoint_time: i64,
    last_checkpoint_tx_count: u64,
    tx_per_day: f64,
}

impl CheckpointProfile {
    /// Starts building a custom profile for `network`
    pub fn builder(network: Network) -> CheckpointProfileBuilder {
        CheckpointProfileBuilder {
            network,
            checkpoints: BTreeMap::new(),
            heights_by_hash: HashMap::new(),
            last_checkpoint_time: 0,
            last_checkpoint_tx_count: 0,
            tx_per_day: 0.0,
        }
    }

    /// Gets the compiled-in profile for `network`
    pub fn for_network(network: Network) -> CheckpointProfile {
        Self::from_data(network, data::for_network(network))
            .expect("Compiled-in checkpoint tables are valid")
    }

    fn from_data(network: Network, data: &NetworkData) -> Result<CheckpointProfile> {
        let mut builder = Self::builder(network);
        for (height, hash) in data.checkpoints {
            builder.add_checkpoint(*height, Hash256::try_from(*hash)?)?;
        }
        builder
            .last_checkpoint(data.last_checkpoint_time, data.last_checkpoint_tx_count, data.tx_per_day)
            .build()
    }

    /// The network this profile belongs to
    pub fn network(&self) -> Network {
        self.network
    }

    /// Gets the hash pinned at `height`, if any
    pub fn get_checkpoint(&self, height: u64) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Iterates over all checkpoints in ascending height order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Checkpoint> + '_ {
        self.checkpoints.iter().map(|(height, hash)| Checkpoint {
            height: *height,
            hash: hash.clone(),
        })
    }

    /// Number of pinned checkpoints
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// A built profile always holds at least one checkpoint
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Height of the most recent checkpoint
    pub fn highest_height(&self) -> u64 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// Timestamp (unix seconds) of the most recent checkpoint block
    pub fn last_checkpoint_time(&self) -> i64 {
        self.last_checkpoint_time
    }

    /// Transactions between genesis and the most recent checkpoint
    pub fn last_checkpoint_tx_count(&self) -> u64 {
        self.last_checkpoint_tx_count
    }

    /// Estimated number of transactions per day after the most recent checkpoint
    pub fn tx_per_day(&self) -> f64 {
        self.tx_per_day
    }
}

/// Builder for [`CheckpointProfile`]
#[derive(Debug)]
pub struct CheckpointProfileBuilder {
    network: Network,
    checkpoints: BTreeMap<u64, Hash256>,
    heights_by_hash: HashMap<Hash256, u64>,
    last_checkpoint_time: i64,
    last_checkpoint_tx_count: u64,
    tx_per_day: f64,
}

impl CheckpointProfileBuilder {
    /// Pins `hash` at `height`
    ///
    /// Adding a checkpoint that is already present is a no-op
    ///
    /// # Errors
    /// If `height` is already pinned to a different hash, or `hash` is already pinned at a
    /// different height
    pub fn add_checkpoint(&mut self, height: u64, hash: Hash256) -> Result<&mut Self> {
        if let Some(existing) = self.checkpoints.get(&height) {
            if *existing == hash {
                return Ok(self);
            }
            return Err(Error::ConflictingCheckpoint {
                height,
                existing: existing.clone(),
                conflicting: hash,
            });
        }
        if let Some(existing_height) = self.heights_by_hash.get(&hash) {
            return Err(Error::DuplicateHash {
                hash,
                existing_height: *existing_height,
                height,
            });
        }
        self.heights_by_hash.insert(hash.clone(), height);
        self.checkpoints.insert(height, hash);
        Ok(self)
    }

    /// Sets the statistics of the most recent checkpoint used for progress estimation
    pub fn last_checkpoint(&mut self, time: i64, tx_count: u64, tx_per_day: f64) -> &mut Self {
        self.last_checkpoint_time = time;
        self.last_checkpoint_tx_count = tx_count;
        self.tx_per_day = tx_per_day;
        self
    }

    /// Finishes the profile
    ///
    /// # Errors
    /// If no checkpoints were added or the transaction rate is negative or not finite
    pub fn build(&mut self) -> Result<CheckpointProfile> {
        if self.checkpoints.is_empty() {
            return Err(Error::EmptyTable);
        }
        if !self.tx_per_day.is_finite() || self.tx_per_day < 0.0 {
            return Err(Error::InvalidRate(self.tx_per_day));
        }
        debug!("Built {} profile with {} checkpoints", self.network, self.checkpoints.len());
        Ok(CheckpointProfile {
            network: self.network,
            checkpoints: std::mem::take(&mut self.checkpoints),
            last_checkpoint_time: self.last_checkpoint_time,
            last_checkpoint_tx_count: self.last_checkpoint_tx_count,
            tx_per_day: self.tx_per_day,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(byte: u8) -> Hash256 {
        Hash256::from([byte; 32])
    }

    #[test]
    fn compiled_in_tables_build() {
        [Network::Main, Network::Test, Network::Regtest]
            .iter()
            .for_each(|network| {
                let profile = CheckpointProfile::from_data(*network, data::for_network(*network)).unwrap();
                assert_eq!(profile.network(), *network);
                assert!(profile.get_checkpoint(0).is_some());
            });
    }

    #[test]
    fn main_table_contents() {
        let profile = CheckpointProfile::for_network(Network::Main);
        assert_eq!(profile.len(), 10);
        assert_eq!(profile.highest_height(), 1_066_428);
        assert_eq!(profile.last_checkpoint_time(), 1_490_629_503);
        assert_eq!(profile.last_checkpoint_tx_count(), 1_179_921);
        assert_eq!(profile.tx_per_day(), 960.0);
        assert_eq!(
            profile.get_checkpoint(12797).unwrap().to_string(),
            "000000002c29644e179baa188fa6b9b9454721f1f21f2b9f31eebe9acc1a31db"
        );
        assert_eq!(profile.get_checkpoint(12798), None);
    }

    #[test]
    fn iterates_in_ascending_order() {
        let profile = CheckpointProfile::for_network(Network::Main);
        let heights: Vec<u64> = profile.iter().map(|checkpoint| checkpoint.height).collect();
        assert!(heights.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(profile.iter().next_back().unwrap().height, 1_066_428);
    }

    #[test]
    fn re_adding_identical_checkpoint_is_a_no_op() {
        let mut builder = CheckpointProfile::builder(Network::Regtest);
        builder.add_checkpoint(0, hash(1)).unwrap();
        builder.add_checkpoint(0, hash(1)).unwrap();
        assert_eq!(builder.build().unwrap().len(), 1);
    }

    #[test]
    fn rejects_conflicting_checkpoint() {
        let mut builder = CheckpointProfile::builder(Network::Regtest);
        builder.add_checkpoint(100, hash(1)).unwrap();
        match builder.add_checkpoint(100, hash(2)) {
            Err(Error::ConflictingCheckpoint { height, existing, conflicting }) => {
                assert_eq!(height, 100);
                assert_eq!(existing, hash(1));
                assert_eq!(conflicting, hash(2));
            }
            other => panic!("Unexpected result {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn rejects_duplicate_hash() {
        let mut builder = CheckpointProfile::builder(Network::Regtest);
        builder.add_checkpoint(100, hash(1)).unwrap();
        assert!(matches!(
            builder.add_checkpoint(200, hash(1)),
            Err(Error::DuplicateHash { existing_height: 100, height: 200, .. })
        ));
    }

    #[test]
    fn rejects_empty_table_and_bad_rates() {
        assert!(matches!(CheckpointProfile::builder(Network::Main).build(), Err(Error::EmptyTable)));

        [-1.0, std::f64::NAN, std::f64::INFINITY].iter().for_each(|rate| {
            let mut builder = CheckpointProfile::builder(Network::Main);
            builder.add_checkpoint(0, hash(0)).unwrap();
            builder.last_checkpoint(0, 0, *rate);
            assert!(matches!(builder.build(), Err(Error::InvalidRate(_))));
        });
    }
}
