#![deny(missing_docs)]

//! Types shared between the checkpoint service and the components that consume it

mod block_index;
mod network;
mod traits;

pub use block_index::BlockIndexEntry;
pub use network::{Network, ParseNetworkError};
pub use traits::BlockIndex;
