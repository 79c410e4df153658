//! Column contract validation

use super::csv::Table;
use super::error::{IngestError, Result};
use crate::config::{
    canonical_column, OPTIONAL_COLS, REQUIRED_BASE_COLS, REQUIRED_PROP_COLS, REQUIRED_SCORE_COLS,
};
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of the column check.
#[derive(Clone, Debug, Serialize)]
pub struct ValidationReport {
    /// Whether the table satisfies the input contract
    pub ok: bool,
    /// Required base columns that are absent
    pub missing_base: Vec<String>,
    /// Score columns that are absent (empty when a proportion pair covers them)
    pub missing_scores: Vec<String>,
    /// Columns outside the allowed input surface
    pub extras: Vec<String>,
    /// All columns as they appeared, in order
    pub columns: Vec<String>,
}

impl ValidationReport {
    /// Promote a failed report to the structural error it describes.
    pub fn into_result(self) -> Result<Self> {
        if self.ok {
            Ok(self)
        } else {
            let mut missing = self.missing_base;
            missing.extend(self.missing_scores);
            Err(IngestError::MissingColumns(missing))
        }
    }
}

/// Check the table against the input contract.
///
/// Base columns are always required. The score pair is required unless a
/// full proportion pair is present. Optional columns are tolerated;
/// anything else is reported as an extra (informational, not fatal).
pub fn validate_columns(table: &Table) -> ValidationReport {
    let canonical: Vec<String> = table.columns.iter().map(|c| canonical_column(c)).collect();
    let present: HashSet<&str> = canonical.iter().map(String::as_str).collect();

    let missing_base: Vec<String> = REQUIRED_BASE_COLS
        .iter()
        .filter(|c| !present.contains(**c))
        .map(|c| (*c).to_string())
        .collect();

    let has_prop_pair = REQUIRED_PROP_COLS.iter().all(|c| present.contains(*c));
    let missing_scores: Vec<String> = if has_prop_pair {
        Vec::new()
    } else {
        REQUIRED_SCORE_COLS
            .iter()
            .filter(|c| !present.contains(**c))
            .map(|c| (*c).to_string())
            .collect()
    };

    let allowed: HashSet<&str> = REQUIRED_BASE_COLS
        .iter()
        .chain(REQUIRED_SCORE_COLS.iter())
        .chain(REQUIRED_PROP_COLS.iter())
        .chain(OPTIONAL_COLS.iter())
        .copied()
        .collect();
    let extras: Vec<String> = table
        .columns
        .iter()
        .zip(canonical.iter())
        .filter(|(_, canon)| !allowed.contains(canon.as_str()))
        .map(|(raw, _)| raw.clone())
        .collect();

    ValidationReport {
        ok: missing_base.is_empty() && missing_scores.is_empty(),
        missing_base,
        missing_scores,
        extras,
        columns: table.columns.clone(),
    }
}
