// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use self::cli::Cli;
use self::config::resolve_config;
use self::error::LogSink;
use self::formatter::OutputGenerator;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse args (clap exits non-zero on malformed input)
    let args = Cli::parse();

    // 2. Capture the working directory; every relative path in the report
    // is computed against it
    let cwd = env::current_dir().context("Failed to get current directory")?;

    // 3. Normalize into the runtime configuration
    let config = resolve_config(args);

    // 4. Discover files; per-entry failures go to the sink (stderr), never
    // into the report, and never abort the run
    let scanner = Scanner::new(cwd, config);
    let mut sink = LogSink;
    let found = scanner.discover(&mut sink);

    if found.is_empty() {
        log::warn!("No files matched the given criteria.");
    }

    // 5. Print the report to stdout
    print!("{}", OutputGenerator::render_report(&found));

    Ok(())
}
