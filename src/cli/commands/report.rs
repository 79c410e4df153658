//! Report command implementation

use crate::cli::LogLevel;
use crate::config::{ClassifierPolicy, ReportArgs, Thresholds};
use crate::ingest::{read_csv, to_study_rows, validate_columns};
use crate::insights::build_insight_cards;
use crate::metrics::compute_metrics;
use crate::report::render_brief;

/// Run the report command: render a markdown brief.
pub fn run_report(args: &ReportArgs, level: LogLevel) -> Result<(), String> {
    let table = read_csv(&args.input).map_err(|e| e.to_string())?;
    validate_columns(&table).into_result().map_err(|e| e.to_string())?;

    let rows = to_study_rows(&table);
    let metrics = compute_metrics(&rows, &Thresholds::default());
    let cards = build_insight_cards(&metrics, &ClassifierPolicy::default(), !args.headline_only);

    let brief = render_brief(&metrics, &cards, &args.title);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &brief).map_err(|e| format!("Failed to write brief: {e}"))?;
            level.log(LogLevel::Normal, &format!("Wrote brief to {}", path.display()));
        }
        None => level.log(LogLevel::Normal, &brief),
    }

    Ok(())
}
