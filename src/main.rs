//! Liftbrief CLI
//!
//! Entry point for the brand lift study analysis tool.
//!
//! # Usage
//!
//! ```bash
//! # Compute metrics and insight cards
//! liftbrief analyze study.csv
//!
//! # Analyze with overrides, JSON output
//! liftbrief analyze study.csv --alpha 0.1 --format json -o results.json
//!
//! # Check the column contract only
//! liftbrief validate study.csv
//!
//! # Render a markdown brief
//! liftbrief report study.csv --title "Q1 Brand Lift" -o brief.md
//! ```

use clap::Parser;
use liftbrief::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
