use crypto::Hash256;

/// Type alias for checkpoint operations that may result in an error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for building checkpoint profiles
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a height is pinned twice with different hashes
    #[error("Checkpoint at height {height} is already pinned to {existing}, refusing {conflicting}")]
    ConflictingCheckpoint {
        /// Height of the checkpoint
        height: u64,
        /// Hash already pinned at that height
        existing: Hash256,
        /// Hash that was rejected
        conflicting: Hash256,
    },

    /// Returned when the same hash is pinned at two different heights
    #[error("Hash {hash} is already pinned at height {existing_height}, refusing height {height}")]
    DuplicateHash {
        /// The repeated hash
        hash: Hash256,
        /// Height the hash is already pinned at
        existing_height: u64,
        /// Height that was rejected
        height: u64,
    },

    /// Returned when a profile is built without any checkpoints
    #[error("Checkpoint table is empty")]
    EmptyTable,

    /// Returned when the post-checkpoint transaction rate is negative or not finite
    #[error("Invalid transaction rate {0}")]
    InvalidRate(f64),

    /// Returned when a checkpoint hash can't be decoded
    #[error(transparent)]
    InvalidHash(#[from] hex::FromHexError),
}
