// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Send log output to the configured file so it never mixes with prompts.
pub fn init(config: &Config) -> Result<()> {
    if config.log_level == LevelFilter::Off {
        return Ok(());
    }

    ensure_parent_dir(&config.log_file)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    log::info!("Logging to {} at level {}", config.log_file.display(), config.log_level);
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}
