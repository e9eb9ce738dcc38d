// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod handlers;
pub mod prompts;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Comma-separated usernames to check (prompted for when omitted)
    #[arg(long, short, env = "USERNAMES")]
    pub usernames: Option<String>,

    /// Save the report to this file instead of asking
    #[arg(long, short, conflicts_with = "no_save")]
    pub output: Option<PathBuf>,

    /// Retry invalid usernames without asking
    #[arg(long, short)]
    pub yes: bool,

    /// Do not save the report
    #[arg(long)]
    pub no_save: bool,

    /// Print the reports as JSON
    #[arg(long)]
    pub json: bool,
}
