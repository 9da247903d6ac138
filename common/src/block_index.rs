use serde::{Deserialize, Serialize};

/// A snapshot of the block index metadata kept for a block on the local chain
///
/// The block index itself is owned by the caller; this is a copy of the fields the checkpoint
/// service reads from it
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlockIndexEntry {
    /// Height of the block
    pub height: u64,
    /// Number of transactions from genesis up to and including this block
    pub cumulative_tx_count: u64,
    /// Block timestamp (unix seconds)
    pub block_time: u32,
}
