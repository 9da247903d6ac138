#![deny(missing_docs)]

//! # Checkpoints
//! Compiled-in `(height, hash)` pairs known to be on the canonical chain of each network. They are
//! used to reject chains that diverge from known history, to estimate sync progress and to find a
//! safe anchor in the local block index

mod checkpoints;
mod clock;
mod config;
mod data;
mod error;
mod profile;

pub use crate::checkpoints::{Checkpoints, SIGCHECK_VERIFICATION_FACTOR};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use profile::{Checkpoint, CheckpointProfile, CheckpointProfileBuilder};
