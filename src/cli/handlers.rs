// src/cli/handlers.rs
use std::path::PathBuf;

use anyhow::Context;
use console::style;
use serde::Serialize;

use crate::cli::prompts::{self, SaveDialog, TerminalConfirmation};
use crate::cli::Args;
use crate::core::config::Config;
use crate::core::ports::ReportSink;
use crate::core::session::Session;
use crate::export::{DiscardSink, FixedPathSink};
use crate::models::BatchReport;

#[derive(Serialize)]
struct JsonOutput<'a> {
    usernames: &'a [String],
    first_pass: Option<&'a BatchReport>,
    retry_pass: Option<&'a BatchReport>,
    saved_to: Option<PathBuf>,
}

/// Validate, offer the retry round, then save the transcript.
pub fn run(args: &Args, config: &Config) -> anyhow::Result<()> {
    let raw = match &args.usernames {
        Some(list) => list.clone(),
        None => match prompts::prompt_usernames()? {
            Some(raw) => raw,
            None => {
                println!("{}", style("⚠️ No usernames entered.").yellow());
                return Ok(());
            }
        },
    };

    let mut session = Session::new();

    let first = session.submit(&raw);
    if !args.json {
        print!("{}", first);
    }

    let retried = if args.yes {
        session.offer_retry(&mut true)
    } else {
        session.offer_retry(&mut TerminalConfirmation)
    };
    if let Some(report) = retried {
        if !args.json {
            print!("{}", report);
        }
    }

    let mut sink: Box<dyn ReportSink> = if args.no_save {
        Box::new(DiscardSink)
    } else if let Some(path) = &args.output {
        Box::new(FixedPathSink::new(path))
    } else {
        Box::new(SaveDialog::new(config.default_report_path()))
    };

    let saved_to = session
        .save(sink.as_mut())
        .context("Failed to save results")?;

    if args.json {
        let output = JsonOutput {
            usernames: session.usernames(),
            first_pass: session.first_pass(),
            retry_pass: session.retry_pass(),
            saved_to,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if let Some(path) = saved_to {
        println!(
            "{} {}",
            style("✅ Results saved successfully.").green(),
            style(path.display()).dim()
        );
    }

    Ok(())
}
