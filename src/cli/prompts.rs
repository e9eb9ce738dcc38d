// src/cli/prompts.rs
use std::path::PathBuf;

use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, InquireError, Text};
use log::warn;
use thiserror::Error;

use crate::core::ports::{Confirmation, ReportSink};
use crate::export::{self, ExportError};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Inquire(#[from] InquireError),
}

/// Ask for the comma-separated list. `None` when the user presses Esc.
pub fn prompt_usernames() -> Result<Option<String>, PromptError> {
    match Text::new("Usernames (comma-separated):")
        .with_help_message("e.g. ab, validUser1, Another_One")
        .prompt()
    {
        Ok(raw) => Ok(Some(raw)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Yes/no prompt in the terminal. The title is shown as the help line.
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&mut self, message: &str, title: &str) -> bool {
        match Confirm::new(message)
            .with_default(false)
            .with_help_message(title)
            .prompt()
        {
            Ok(answer) => answer,
            Err(InquireError::OperationCanceled) => false,
            Err(e) => {
                warn!("Confirmation prompt failed, treating as no: {}", e);
                false
            }
        }
    }
}

/// Terminal stand-in for a save file dialog.
pub struct SaveDialog {
    default_path: PathBuf,
}

impl SaveDialog {
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self { default_path: default_path.into() }
    }
}

impl ReportSink for SaveDialog {
    fn save(&mut self, report: &str) -> Result<Option<PathBuf>, ExportError> {
        let default = self.default_path.display().to_string();
        let answer = Text::new("Save results to:")
            .with_default(&default)
            .with_help_message("Text files (*.txt), Esc to skip saving")
            .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
                if input.trim().is_empty() {
                    Ok(Validation::Invalid("File name cannot be empty".into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt();

        let chosen = match answer {
            Ok(chosen) => chosen,
            Err(InquireError::OperationCanceled) => return Ok(None),
            Err(e) => return Err(ExportError::PromptError(e.to_string())),
        };

        let path = export::with_text_extension(chosen.trim());
        export::write_report(&path, report)?;
        Ok(Some(path))
    }
}
