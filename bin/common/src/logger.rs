use std::path::PathBuf;

use fern::colors::Color;
use log::{info, LevelFilter};

use crate::{Config, Error, Result};

/// Maps the numeric log level from the command line to a filter
pub fn level_filter(log_level: u8) -> Result<LevelFilter> {
    match log_level {
        0 => Ok(LevelFilter::Warn),
        1 => Ok(LevelFilter::Info),
        2 => Ok(LevelFilter::Debug),
        3 => Ok(LevelFilter::Trace),
        _ => Err(Error::InvalidLogLevel(log_level)),
    }
}

/// Gets the directory for log files, creating it if needed
pub fn data_directory(config: &Config, binary_name: &str) -> Result<PathBuf> {
    let path = match &config.data_directory {
        Some(custom_data_directory) => custom_data_directory.to_path_buf(),
        None => directories::ProjectDirs::from("org", "Checkpoints", binary_name)
            .ok_or(Error::NoDataDirectory)?
            .data_dir()
            .to_path_buf(),
    };
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// Installs the global logger, writing to stdout and (unless disabled) `<binary_name>.log` in the
/// data directory
pub fn init(config: &Config, binary_name: &str) -> Result<()> {
    let colors = fern::colors::ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Cyan)
        .debug(Color::Green)
        .trace(Color::Magenta);

    let log_level = level_filter(config.log_level)?;

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{color_line}[{date}][{target}][{level}{color_line}]\t{message}\x1B[0m",
                color_line = format_args!("\x1B[{}m", colors.get_color(&record.level()).to_fg_str()),
                date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                target = record.target(),
                level = colors.color(record.level()),
                message = message,
            ))
        })
        .level(log_level)
        .chain(std::io::stdout());

    if config.no_log_file {
        dispatch.apply()?;
        return Ok(());
    }

    let mut log_file_path = data_directory(config, binary_name)?;
    log_file_path.push(binary_name);
    log_file_path.set_extension("log");

    dispatch.chain(fern::log_file(&log_file_path)?).apply()?;

    info!("Logging events to {}", log_file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_log_levels() {
        [
            (0, LevelFilter::Warn),
            (1, LevelFilter::Info),
            (2, LevelFilter::Debug),
            (3, LevelFilter::Trace),
        ]
        .iter()
        .for_each(|(level, filter)| {
            assert_eq!(level_filter(*level).unwrap(), *filter);
        });
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(matches!(level_filter(4), Err(Error::InvalidLogLevel(4))));
    }

    #[test]
    fn creates_custom_data_directory() {
        let path = std::env::temp_dir().join(format!("bin_common_logger_test_{}", std::process::id()));
        let config = Config {
            log_level: 1,
            data_directory: Some(path.clone()),
            no_log_file: false,
        };
        assert_eq!(data_directory(&config, "test").unwrap(), path);
        assert!(path.is_dir());
        std::fs::remove_dir_all(&path).unwrap();
    }
}
