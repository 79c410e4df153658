//! Derived metric rows and their categorical labels

use serde::{Deserialize, Serialize};

/// Sample-size caveat, independent of significance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataFlag {
    /// Both groups are comfortably sized
    #[default]
    #[serde(rename = "")]
    None,
    /// Either group is in the limited band (at least the low threshold,
    /// below the warn threshold)
    #[serde(rename = "Limited sample")]
    LimitedSample,
    /// Either group is below the low threshold
    #[serde(rename = "Low sample")]
    LowSample,
}

impl DataFlag {
    /// Display text; empty when there is nothing to flag.
    pub fn label(self) -> &'static str {
        match self {
            DataFlag::None => "",
            DataFlag::LimitedSample => "Limited sample",
            DataFlag::LowSample => "Low sample",
        }
    }

    /// Whether any caveat applies.
    pub fn is_flagged(self) -> bool {
        self != DataFlag::None
    }
}

/// Qualitative band for Cohen's h.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectSize {
    /// |h| < 0.2
    Small,
    /// |h| < 0.5
    Medium,
    /// |h| >= 0.5
    Large,
}

impl EffectSize {
    /// Band for a Cohen's h value.
    pub fn from_h(h: f64) -> Self {
        let h = h.abs();
        if h < 0.2 {
            EffectSize::Small
        } else if h < 0.5 {
            EffectSize::Medium
        } else {
            EffectSize::Large
        }
    }

    /// Display text.
    pub fn label(self) -> &'static str {
        match self {
            EffectSize::Small => "Small",
            EffectSize::Medium => "Medium",
            EffectSize::Large => "Large",
        }
    }
}

/// Composite practical-confidence label combining significance, the data
/// flag, and the effect-size band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reliability {
    /// Significant with no sample-size caveat
    High,
    /// Significant but sample-flagged
    Medium,
    /// Not significant; direction worth watching
    Directional,
    /// Low sample, not significant
    Low,
}

impl Reliability {
    /// Display text.
    pub fn label(self) -> &'static str {
        match self {
            Reliability::High => "High",
            Reliability::Medium => "Medium",
            Reliability::Directional => "Directional",
            Reliability::Low => "Low",
        }
    }
}

/// One study row with every derived statistic.
///
/// Immutable once computed. Numeric fields are `None` when the inputs cannot
/// support them; `None` never collapses to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Time period label
    pub period: String,
    /// Brand under study
    pub brand: String,
    /// Product category
    pub category: String,
    /// Market / geography
    pub market: String,
    /// KPI name
    pub kpi: String,
    /// Control group size
    pub control_sample: Option<f64>,
    /// Exposed group size
    pub exposed_sample: Option<f64>,
    /// Combined group size
    pub total_sample: Option<f64>,
    /// Control proportion in [0, 1]
    pub control_prop: Option<f64>,
    /// Exposed proportion in [0, 1]
    pub exposed_prop: Option<f64>,
    /// Control proportion in percent
    pub control_pct: Option<f64>,
    /// Exposed proportion in percent
    pub exposed_pct: Option<f64>,
    /// exposed_prop - control_prop
    pub diff_prop: Option<f64>,
    /// Difference in percentage points
    pub diff_pct_pts: Option<f64>,
    /// Relative lift (None when control_prop is zero)
    pub lift_rel: Option<f64>,
    /// Relative lift in percent
    pub lift_pct: Option<f64>,
    /// Sample-size-weighted average of the two proportions
    pub pooled_prop: Option<f64>,
    /// Pooled standard error under the null hypothesis
    pub std_error: Option<f64>,
    /// Two-proportion z statistic
    pub z_score: Option<f64>,
    /// Two-sided normal-approximation p-value
    pub p_value: Option<f64>,
    /// p_value < alpha; false when the p-value is missing
    pub significant_95: bool,
    /// Unpooled standard error of the difference
    pub se_diff: Option<f64>,
    /// Confidence interval lower bound, percentage points
    pub ci_low_pct_pts: Option<f64>,
    /// Confidence interval upper bound, percentage points
    pub ci_high_pct_pts: Option<f64>,
    /// Cohen's h
    pub effect_size_h: Option<f64>,
    /// Qualitative effect-size band
    pub effect_size_qual: Option<EffectSize>,
    /// Sample-size caveat
    pub data_flag: DataFlag,
    /// Composite practical-confidence label
    pub reliability: Reliability,
}
