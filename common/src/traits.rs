use std::collections::HashMap;

use crypto::Hash256;

use crate::BlockIndexEntry;

/// Read-only lookup into a block index keyed by block hash
///
/// Implementors are expected to be a consistent snapshot for the duration of a call. Any locking
/// needed to get that snapshot is the implementor's (or the caller's) responsibility
pub trait BlockIndex {
    /// Gets the index entry for the block with the given hash
    ///
    /// # Returns
    /// `None` if the block isn't known locally
    fn get_block_index(&self, hash: &Hash256) -> Option<BlockIndexEntry>;
}

impl BlockIndex for HashMap<Hash256, BlockIndexEntry> {
    fn get_block_index(&self, hash: &Hash256) -> Option<BlockIndexEntry> {
        self.get(hash).copied()
    }
}

impl<T: BlockIndex + ?Sized> BlockIndex for &T {
    fn get_block_index(&self, hash: &Hash256) -> Option<BlockIndexEntry> {
        (**self).get_block_index(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_lookup() {
        let entry = BlockIndexEntry { height: 5, cumulative_tx_count: 12, block_time: 1000 };
        let mut index = HashMap::new();
        index.insert(Hash256::from([5; 32]), entry);

        assert_eq!(index.get_block_index(&Hash256::from([5; 32])), Some(entry));
        assert_eq!(index.get_block_index(&Hash256::null_hash()), None);
    }
}
