/// Type alias for binary setup operations that may result in an error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for binary setup
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when the configured log level is out of range
    #[error("Invalid log level {0} (expected 0 to 3)")]
    InvalidLogLevel(u8),

    /// Returned when no data directory is configured and the platform has no default
    #[error("Unable to determine a data directory, set one with --data-directory")]
    NoDataDirectory,

    /// Returned when the data directory or log file can't be created
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Returned when a logger has already been installed
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}
