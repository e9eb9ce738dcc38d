// src/export/mod.rs
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::core::ports::ReportSink;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid report path: {0}")]
    InvalidPath(String),

    #[error("Prompt error: {0}")]
    PromptError(String),
}

/// Write the report text byte for byte, creating missing parent directories.
pub fn write_report(path: &Path, report: &str) -> Result<(), ExportError> {
    if path.as_os_str().is_empty() || path.file_name().is_none() {
        return Err(ExportError::InvalidPath(path.display().to_string()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    file.write_all(report.as_bytes())?;
    file.flush()?;

    info!("Wrote {} bytes of report to {}", report.len(), path.display());
    Ok(())
}

/// Mirror the text-file filter of a save dialog: a bare name gets `.txt`.
pub fn with_text_extension(path: impl Into<PathBuf>) -> PathBuf {
    let mut path = path.into();
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    path
}

/// Saves to a path chosen up front, e.g. from `--output`.
pub struct FixedPathSink {
    path: PathBuf,
}

impl FixedPathSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FixedPathSink {
    fn save(&mut self, report: &str) -> Result<Option<PathBuf>, ExportError> {
        write_report(&self.path, report)?;
        Ok(Some(self.path.clone()))
    }
}

/// Never writes anything, as if the save dialog was always cancelled.
pub struct DiscardSink;

impl ReportSink for DiscardSink {
    fn save(&mut self, _report: &str) -> Result<Option<PathBuf>, ExportError> {
        Ok(None)
    }
}
