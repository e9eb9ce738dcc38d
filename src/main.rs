use clap::Parser;
use console::style;
use std::path::Path;

use rust_usercheck::cli::{self, Args};
use rust_usercheck::core::config::Config;
use rust_usercheck::logging;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("{} {}", style("⚠️ Logging disabled:").yellow(), e);
    }

    for warning in &config.warnings {
        log::warn!("{}", warning);
        eprintln!("{} {}", style("⚠️ Config:").yellow(), warning);
    }

    log::info!("Starting username check");
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    if let Err(e) = cli::handlers::run(&args, &config) {
        log::error!("Run failed: {:#}", e);
        eprintln!("{} {:#}", style("❌ Error:").red(), e);
        std::process::exit(1);
    }

    log::info!("Username check complete");
}
