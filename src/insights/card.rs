//! Insight card construction

use super::state::{assign_state, StateKey};
use crate::config::ClassifierPolicy;
use crate::metrics::MetricRow;
use serde::Serialize;

/// Qualitative interpretation of one metric row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InsightCard {
    /// Categorical verdict
    pub state_key: StateKey,
    /// Human-readable verdict
    pub state_label: &'static str,
    /// One-line caveat combining significance and the data flag
    pub note: String,
    /// Plain-language reading of the movement
    pub meaning: String,
    /// Recommended use of the result
    pub decision: String,
}

/// Build one card per metric row, order preserved.
///
/// `include_non_significant` true is the analytical default; false collapses
/// every row to a clear increase/decline by lift sign (see
/// [`super::StateKey`] assignment rules).
pub fn build_insight_cards(
    rows: &[MetricRow],
    policy: &ClassifierPolicy,
    include_non_significant: bool,
) -> Vec<InsightCard> {
    rows.iter()
        .map(|row| {
            let state_key = assign_state(row, policy, include_non_significant);
            InsightCard {
                state_key,
                state_label: state_key.label(),
                note: note(row),
                meaning: meaning_line(row, policy),
                decision: decision_line(row, policy, state_key),
            }
        })
        .collect()
}

fn note(row: &MetricRow) -> String {
    let flag = row.data_flag.label();

    match (row.significant_95, flag.is_empty()) {
        (false, false) => format!("Not definitive; {}.", flag.to_lowercase()),
        (false, true) => "Not definitive; treat as directional.".to_string(),
        (true, false) => format!("Clear result; {}.", flag.to_lowercase()),
        (true, true) => "Clear result.".to_string(),
    }
}

fn meaning_line(row: &MetricRow, policy: &ClassifierPolicy) -> String {
    let kpi = &row.kpi;

    let (Some(lift), Some(diff)) = (row.lift_pct, row.diff_pct_pts) else {
        return format!("{kpi}: data is incomplete, so the result is not readable.");
    };

    if lift >= 0.0 {
        if diff >= policy.meaning_diff_pts {
            format!("{kpi} moved up in the exposed group by {diff:.2} points.")
        } else {
            format!("{kpi} is slightly higher in the exposed group.")
        }
    } else if diff.abs() >= policy.meaning_diff_pts {
        format!(
            "{kpi} dropped in the exposed group by {:.2} points.",
            diff.abs()
        )
    } else {
        format!("{kpi} is slightly lower in the exposed group.")
    }
}

fn decision_line(row: &MetricRow, policy: &ClassifierPolicy, state: StateKey) -> String {
    let Some(lift) = row.lift_pct else {
        return "Do not use this as evidence until the input is fixed.".to_string();
    };

    match state {
        StateKey::ClearUp | StateKey::ClearDown => {
            if row.significant_95 && lift.abs() >= policy.citation_lift_pct {
                "Safe to cite as evidence. Use it to justify the next decision.".to_string()
            } else if row.significant_95 {
                "Usable as evidence, but the size is modest. Pair with context.".to_string()
            } else {
                "Direction is clear, but confidence is weaker than ideal.".to_string()
            }
        }
        StateKey::PossibleUp | StateKey::PossibleDown => {
            "Direction is plausible. Keep it in, but avoid strong claims.".to_string()
        }
        StateKey::NoClear => {
            "No clear change. Keep it for completeness, not as a headline.".to_string()
        }
    }
}
