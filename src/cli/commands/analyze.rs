//! Analyze command implementation

use crate::cli::LogLevel;
use crate::config::{AnalyzeArgs, ClassifierPolicy, OutputFormat, Thresholds};
use crate::ingest::{read_csv, to_study_rows, validate_columns};
use crate::insights::{build_insight_cards, InsightCard};
use crate::metrics::{compute_metrics, MetricRow};
use serde_json::json;

/// Run the analyze command: metrics plus insight cards for every row.
pub fn run_analyze(args: &AnalyzeArgs, level: LogLevel) -> Result<(), String> {
    let defaults = Thresholds::default();
    let thresholds = Thresholds {
        alpha: args.alpha.unwrap_or(defaults.alpha),
        min_n_low: args.min_n_low.unwrap_or(defaults.min_n_low),
        min_n_warn: args.min_n_warn.unwrap_or(defaults.min_n_warn),
    };

    let table = read_csv(&args.input).map_err(|e| e.to_string())?;
    let report = validate_columns(&table).into_result().map_err(|e| e.to_string())?;
    for extra in &report.extras {
        level.warn(&format!("Ignoring unexpected column: {extra}"));
    }

    let rows = to_study_rows(&table);
    let metrics = compute_metrics(&rows, &thresholds);
    let cards = build_insight_cards(&metrics, &ClassifierPolicy::default(), !args.headline_only);

    level.log(
        LogLevel::Verbose,
        &format!("Analyzed {} rows at alpha = {}", metrics.len(), thresholds.alpha),
    );

    let rendered = match args.format {
        OutputFormat::Table => render_table(&metrics, &cards),
        OutputFormat::Json => render_json(&metrics, &cards)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| format!("Failed to write output: {e}"))?;
            level.log(
                LogLevel::Normal,
                &format!("Wrote {} rows to {}", metrics.len(), path.display()),
            );
        }
        None => level.log(LogLevel::Normal, &rendered),
    }

    Ok(())
}

fn render_table(metrics: &[MetricRow], cards: &[InsightCard]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<14} {:<18} {:>9} {:>9} {:>8} {:>8} {:>12} {:<16}\n",
        "Brand", "KPI", "Control", "Exposed", "Lift%", "p", "Reliability", "State"
    ));
    out.push_str(&"-".repeat(100));
    out.push('\n');

    for (m, c) in metrics.iter().zip(cards.iter()) {
        out.push_str(&format!(
            "{:<14} {:<18} {:>9} {:>9} {:>8} {:>8} {:>12} {:<16}\n",
            truncate(&m.brand, 14),
            truncate(&m.kpi, 18),
            fmt(m.control_pct, 2),
            fmt(m.exposed_pct, 2),
            fmt(m.lift_pct, 2),
            fmt(m.p_value, 4),
            m.reliability.label(),
            c.state_label,
        ));
    }

    out
}

fn render_json(metrics: &[MetricRow], cards: &[InsightCard]) -> Result<String, String> {
    let payload = json!({
        "rows": metrics,
        "cards": cards,
    });
    serde_json::to_string_pretty(&payload).map_err(|e| format!("Failed to serialize output: {e}"))
}

fn fmt(v: Option<f64>, decimals: usize) -> String {
    v.map_or("N/A".to_string(), |v| format!("{v:.decimals$}"))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}
