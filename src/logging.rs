use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::{self, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

/// Initializes a file logger under `$HOME/.local/share/tempotools/logs`.
///
/// User-facing output stays on stdout/stderr; the log file only records
/// lifecycle events and failures.
pub fn init_logger(binary_name: &str) -> Result<(), Error> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    let log_dir = PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("tempotools")
        .join("logs");
    fs::create_dir_all(&log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("app.log"))?;

    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(|err| Error::new(ErrorKind::Other, err.to_string()))?;

    log::info!("{} starting", binary_name);
    Ok(())
}
