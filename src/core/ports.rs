// src/core/ports.rs
use std::path::PathBuf;

use crate::export::ExportError;

/// Yes/no question asked before the retry round.
pub trait Confirmation {
    /// Returns `true` only on an explicit yes. Cancelling counts as no.
    fn confirm(&mut self, message: &str, title: &str) -> bool;
}

/// Where a finished transcript ends up.
pub trait ReportSink {
    /// Persist `report` verbatim.
    ///
    /// `Ok(None)` means the user cancelled and nothing was written.
    fn save(&mut self, report: &str) -> Result<Option<PathBuf>, ExportError>;
}

// A fixed answer, used for `--yes` and for non-interactive runs
impl Confirmation for bool {
    fn confirm(&mut self, _message: &str, _title: &str) -> bool {
        *self
    }
}
