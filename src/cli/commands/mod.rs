//! CLI command implementations

mod analyze;
mod report;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Analyze(args) => analyze::run_analyze(&args, log_level),
        Command::Validate(args) => validate::run_validate(&args, log_level),
        Command::Report(args) => report::run_report(&args, log_level),
    }
}
