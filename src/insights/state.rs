//! Categorical verdict per row

use crate::config::ClassifierPolicy;
use crate::metrics::{DataFlag, MetricRow};
use serde::{Deserialize, Serialize};

/// The classifier's verdict on a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKey {
    /// Clear increase
    ClearUp,
    /// Clear decline
    ClearDown,
    /// Possible increase (not significant, but sizable)
    PossibleUp,
    /// Possible decline (not significant, but sizable)
    PossibleDown,
    /// No clear change
    NoClear,
}

impl StateKey {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            StateKey::ClearUp => "Clear increase",
            StateKey::ClearDown => "Clear decline",
            StateKey::PossibleUp => "Possible increase",
            StateKey::PossibleDown => "Possible decline",
            StateKey::NoClear => "No clear change",
        }
    }
}

/// Assign the state for one row. Ordered rules, first match wins.
///
/// With `include_non_significant` false every row collapses to a clear
/// increase or decline purely by the sign of the lift; significance is
/// discarded entirely. That is a deliberate "confident narrative" toggle,
/// not an oversight, and a missing lift lands on the decline side exactly
/// as a failed `lift >= 0` comparison would.
pub fn assign_state(
    row: &MetricRow,
    policy: &ClassifierPolicy,
    include_non_significant: bool,
) -> StateKey {
    let lift_non_negative = row.lift_pct.is_some_and(|l| l >= 0.0);

    // 1. Narrative mode: sign only.
    if !include_non_significant {
        return if lift_non_negative {
            StateKey::ClearUp
        } else {
            StateKey::ClearDown
        };
    }

    // 2. Significant rows are clear either way.
    if row.significant_95 {
        return if lift_non_negative {
            StateKey::ClearUp
        } else {
            StateKey::ClearDown
        };
    }

    // 3. Nothing to read.
    let Some(lift) = row.lift_pct else {
        return StateKey::NoClear;
    };

    // 4. Sizable but unproven, and the sample is not clearly low.
    if lift.abs() >= policy.possible_lift_pct && row.data_flag != DataFlag::LowSample {
        return if lift > 0.0 {
            StateKey::PossibleUp
        } else {
            StateKey::PossibleDown
        };
    }

    // 5. Everything else.
    StateKey::NoClear
}
