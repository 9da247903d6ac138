use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use common::{BlockIndex, BlockIndexEntry, Network};
use crypto::Hash256;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::profile::CheckpointProfile;

/// How many times slower transactions after the last checkpoint are expected to verify when
/// signatures are checked
///
/// This can't be accurate for every system. Reindexing from a fast disk on a slow CPU can be up to
/// 20 times slower, while syncing over a slow network on a fast multicore CPU barely differs
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The checkpoint service for a single network
///
/// One instance is created per process and shared (usually behind an `Arc`) with the
/// validation and status layers. Enforcement can be toggled at runtime without locking
pub struct Checkpoints<C: Clock = SystemClock> {
    profile: CheckpointProfile,
    enabled: AtomicBool,
    clock: C,
}

impl Checkpoints<SystemClock> {
    /// Creates the checkpoint service for `network` using the compiled-in tables
    pub fn new(network: Network) -> Self {
        Self::with_clock(network, SystemClock)
    }

    /// Creates the checkpoint service described by the given configuration
    pub fn from_config(config: &Config) -> Self {
        let checkpoints = Self::new(config.network);
        if config.disable_checkpoints {
            checkpoints.set_enabled(false);
        }
        checkpoints
    }
}

impl<C: Clock> Checkpoints<C> {
    /// Creates the checkpoint service for `network` with a custom clock
    pub fn with_clock(network: Network, clock: C) -> Self {
        Self::with_profile(CheckpointProfile::for_network(network), clock)
    }

    /// Creates a checkpoint service from an already built profile
    pub fn with_profile(profile: CheckpointProfile, clock: C) -> Self {
        info!(
            "Loaded {} checkpoints for the {} network (last at height {})",
            profile.len(),
            profile.network(),
            profile.highest_height()
        );
        Checkpoints {
            profile,
            enabled: AtomicBool::new(true),
            clock,
        }
    }

    /// The active checkpoint profile
    pub fn profile(&self) -> &CheckpointProfile {
        &self.profile
    }

    /// The network the active profile belongs to
    pub fn network(&self) -> Network {
        self.profile.network()
    }

    /// Whether checkpoints are enforced
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turns checkpoint enforcement on or off
    pub fn set_enabled(&self, enabled: bool) {
        if enabled {
            info!("Checkpoint enforcement enabled");
        } else {
            warn!("Checkpoint enforcement disabled");
        }
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Checks a block against the checkpoint pinned at its height
    ///
    /// # Returns
    /// `false` only if a checkpoint is pinned at `height` with a different hash. Heights without
    /// a checkpoint always pass, as does everything while enforcement is disabled
    pub fn check_block(&self, height: u64, hash: &Hash256) -> bool {
        if !self.is_enabled() {
            return true;
        }
        match self.profile.get_checkpoint(height) {
            None => true,
            Some(expected) if expected == hash => {
                debug!("CHECKPOINT PASSED FOR HEIGHT {} {}", height, hash);
                true
            }
            Some(expected) => {
                warn!(
                    "CHECKPOINT FAILED FOR HEIGHT {}. EXPECTED HASH: {}, FETCHED HASH: {}",
                    height, expected, hash
                );
                false
            }
        }
    }

    /// Whether `height` is at or below the most recent checkpoint
    pub fn in_checkpoint_zone(&self, height: u64) -> bool {
        self.is_enabled() && height <= self.profile.highest_height()
    }

    /// Guesses how far verification has progressed once `entry` has been processed
    ///
    /// Work is counted as 1 per transaction up to the last checkpoint and
    /// [`SIGCHECK_VERIFICATION_FACTOR`] per transaction after it when `fast_mode` (signature
    /// checking) is on. Past the last checkpoint the remaining transactions are projected from the
    /// profile's daily rate
    ///
    /// # Returns
    /// A fraction in `[0, 1]`. `0.0` if there is no entry, `1.0` if neither completed nor
    /// remaining work can be measured (e.g. a zero-rate profile at genesis)
    pub fn guess_verification_progress(&self, entry: Option<&BlockIndexEntry>, fast_mode: bool) -> f64 {
        let entry = match entry {
            Some(entry) => entry,
            None => return 0.0,
        };

        let now = self.clock.now();
        let factor = if fast_mode { SIGCHECK_VERIFICATION_FACTOR } else { 1.0 };
        let checkpoint_tx_count = self.profile.last_checkpoint_tx_count();
        let tx_per_day = self.profile.tx_per_day();

        let (work_before, work_after) = if entry.cumulative_tx_count <= checkpoint_tx_count {
            let cheap_before = entry.cumulative_tx_count as f64;
            let cheap_after = (checkpoint_tx_count - entry.cumulative_tx_count) as f64;
            let expensive_after = days_between(self.profile.last_checkpoint_time(), now) * tx_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = checkpoint_tx_count as f64;
            let expensive_before = (entry.cumulative_tx_count - checkpoint_tx_count) as f64;
            let expensive_after = days_between(i64::from(entry.block_time), now) * tx_per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        (work_before / total).min(1.0)
    }

    /// Gets a lower bound for the height of the chain
    ///
    /// # Returns
    /// The height of the most recent checkpoint, or 0 while enforcement is disabled
    pub fn get_total_blocks_estimate(&self) -> u64 {
        if !self.is_enabled() {
            return 0;
        }
        self.profile.highest_height()
    }

    /// Finds the most recent checkpoint present in the given block index
    ///
    /// Checkpoints are probed from the highest height down, so the result is the latest anchor
    /// the local chain is known to share with the canonical one
    pub fn get_last_checkpoint<I: BlockIndex + ?Sized>(&self, index: &I) -> Option<BlockIndexEntry> {
        if !self.is_enabled() {
            return None;
        }
        self.profile
            .iter()
            .rev()
            .find_map(|checkpoint| index.get_block_index(&checkpoint.hash))
    }
}

/// Days elapsed from `from` to `to`, never negative
fn days_between(from: i64, to: i64) -> f64 {
    (to - from).max(0) as f64 / SECONDS_PER_DAY
}
