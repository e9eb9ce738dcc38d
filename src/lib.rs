//! Batch username validation with password generation.
//!
//! [`batch::BatchProcessor`] validates each name, generates and rates a
//! password for the valid ones and renders the report text. Prompts and file
//! output sit behind the traits in [`crate::core::ports`] so a whole run can be driven
//! without a terminal.

pub mod batch;
pub mod cli;
pub mod core;
pub mod export;
pub mod generators;
pub mod logging;
pub mod models;
pub mod validators;
