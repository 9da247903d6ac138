//! Digest types shared by the checkpoint crates

pub mod hash;

pub use hash::{Hash256, Hash256Data};
