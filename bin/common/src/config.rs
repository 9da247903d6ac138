use std::path::PathBuf;
use structopt::StructOpt;

/// Logging configuration shared by all binaries
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Sets the log level for the logger
    /// The levels correspond to the following:
    ///
    ///   0 - Warn
    ///   1 - Info
    ///   2 - Debug
    ///   3 - Trace
    #[structopt(long, default_value = "1")]
    pub log_level: u8,

    /// Sets the directory the log file is written to
    /// If unset, the platform's default data directory is used
    #[structopt(long)]
    pub data_directory: Option<PathBuf>,

    /// Only log to stdout
    #[structopt(long)]
    pub no_log_file: bool,
}
