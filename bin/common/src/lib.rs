#![deny(missing_docs)]

//! Offers common functionality to binary crates (logging and data directory configuration)

mod config;
mod error;
/// Functions for setting up the logging system
pub mod logger;

pub use config::Config;
pub use error::{Error, Result};
