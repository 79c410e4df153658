//! Validate command implementation

use crate::cli::LogLevel;
use crate::config::ValidateArgs;
use crate::ingest::{read_csv, validate_columns, ValidationReport};

/// Run the validate command: check the column contract without analyzing.
pub fn run_validate(args: &ValidateArgs, level: LogLevel) -> Result<(), String> {
    let table = read_csv(&args.input).map_err(|e| e.to_string())?;
    let report = validate_columns(&table);

    level.log(LogLevel::Normal, &format_report(&report));
    level.log(
        LogLevel::Verbose,
        &format!("Columns as read: {}", report.columns.join(", ")),
    );

    if report.ok {
        Ok(())
    } else {
        Err("Input does not satisfy the column contract".to_string())
    }
}

fn format_report(report: &ValidationReport) -> String {
    let mut lines = Vec::new();

    if report.ok {
        lines.push("Input columns: OK".to_string());
    } else {
        lines.push("Input columns: FAILED".to_string());
        if !report.missing_base.is_empty() {
            lines.push(format!("  Missing: {}", report.missing_base.join(", ")));
        }
        if !report.missing_scores.is_empty() {
            lines.push(format!(
                "  Missing scores: {} (or provide control_prop/exposed_prop)",
                report.missing_scores.join(", ")
            ));
        }
    }

    if !report.extras.is_empty() {
        lines.push(format!("  Ignored extras: {}", report.extras.join(", ")));
    }

    lines.join("\n")
}
