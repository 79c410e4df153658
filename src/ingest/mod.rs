//! Study ingest
//!
//! Reads a study CSV, checks the column contract, and coerces records into
//! [`StudyRow`]s. Only structure can fail here (unreadable file, missing
//! required columns); malformed values always degrade to missing fields.

mod csv;
mod error;
mod validate;


pub use csv::{read_csv, Table};
pub use error::{IngestError, Result};
pub use validate::{validate_columns, ValidationReport};

use crate::config::canonical_column;
use crate::study::{RawScore, StudyRow};

/// Convert validated table records into study rows.
///
/// Coercion is defensive: a sample count or score that fails to parse
/// becomes `None` on that row, never an error. Proportion columns are taken
/// verbatim as numbers; score columns keep their raw text for the metrics
/// engine to normalize.
pub fn to_study_rows(table: &Table) -> Vec<StudyRow> {
    let col = |name: &str| {
        table
            .columns
            .iter()
            .position(|c| canonical_column(c) == name)
    };

    let period = col("period");
    let brand = col("brand");
    let category = col("category");
    let market = col("market");
    let kpi = col("kpi");
    let control_sample = col("control_sample");
    let exposed_sample = col("exposed_sample");
    let control_score = col("control_score");
    let exposed_score = col("exposed_score");
    let control_prop = col("control_prop");
    let exposed_prop = col("exposed_prop");

    table
        .records
        .iter()
        .map(|record| {
            let text = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default()
            };
            let numeric = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .and_then(|s| parse_numeric(s))
            };
            let score = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(RawScore::from)
            };

            StudyRow {
                period: text(period),
                brand: text(brand),
                category: text(category),
                market: text(market),
                kpi: text(kpi),
                control_sample: numeric(control_sample),
                exposed_sample: numeric(exposed_sample),
                control_score: score(control_score),
                exposed_score: score(exposed_score),
                control_prop: numeric(control_prop),
                exposed_prop: numeric(exposed_prop),
            }
        })
        .collect()
}

/// Parse a numeric cell, tolerating whitespace and thousands separators.
fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim().replace(',', "");
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
