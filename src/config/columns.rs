//! Input column vocabulary
//!
//! Source files arrive with headers like "Month Year" or "Control Sample";
//! internally every column is addressed by a canonical snake_case key.

/// Required identifying and sample-size columns.
pub const REQUIRED_BASE_COLS: [&str; 7] = [
    "period",
    "brand",
    "category",
    "market",
    "kpi",
    "control_sample",
    "exposed_sample",
];

/// Score pair, required unless a proportion pair is present.
pub const REQUIRED_SCORE_COLS: [&str; 2] = ["control_score", "exposed_score"];

/// Already-normalized proportion pair; wins over scores when present.
pub const REQUIRED_PROP_COLS: [&str; 2] = ["control_prop", "exposed_prop"];

/// Tolerated extra input columns.
pub const OPTIONAL_COLS: [&str; 2] = ["study_id", "kpi_order"];

/// Map a raw header to its canonical key.
///
/// Trims, lowercases, and joins words with underscores, then resolves the
/// spreadsheet-style aliases the source templates use.
pub fn canonical_column(raw: &str) -> String {
    let key = raw
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    match key.as_str() {
        "month_year" => "period".to_string(),
        _ => key,
    }
}
