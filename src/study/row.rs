//! Raw study rows as they arrive from ingest

use serde::{Deserialize, Serialize};

/// A raw KPI score before normalization.
///
/// Source files carry scores either as numbers (percent or proportion) or as
/// percent-formatted text like `"47.10%"`. Normalization happens in the
/// metrics engine; this type only preserves what arrived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    /// Numeric score, percent or proportion
    Number(f64),
    /// Textual score, e.g. "47.10%"
    Text(String),
}

impl From<f64> for RawScore {
    fn from(v: f64) -> Self {
        RawScore::Number(v)
    }
}

impl From<&str> for RawScore {
    fn from(s: &str) -> Self {
        RawScore::Text(s.to_string())
    }
}

impl From<String> for RawScore {
    fn from(s: String) -> Self {
        RawScore::Text(s)
    }
}

/// One study cell: a (brand, KPI, period) comparison of control vs. exposed.
///
/// Identifying attributes are free-form strings and are not validated for
/// uniqueness. Numeric fields are `None` when the source value was absent or
/// failed coercion; missing is never represented as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyRow {
    /// Time period label, e.g. "2024-03"
    pub period: String,
    /// Brand under study
    pub brand: String,
    /// Product category
    pub category: String,
    /// Market / geography
    pub market: String,
    /// KPI name, e.g. "Awareness"
    pub kpi: String,
    /// Control group size
    pub control_sample: Option<f64>,
    /// Exposed group size
    pub exposed_sample: Option<f64>,
    /// Control KPI score (percent, proportion, or percent text)
    pub control_score: Option<RawScore>,
    /// Exposed KPI score (percent, proportion, or percent text)
    pub exposed_score: Option<RawScore>,
    /// Pre-normalized control proportion; with `exposed_prop`, wins over scores
    pub control_prop: Option<f64>,
    /// Pre-normalized exposed proportion; with `control_prop`, wins over scores
    pub exposed_prop: Option<f64>,
}

impl StudyRow {
    /// Create a row with identifying attributes only.
    pub fn new(period: &str, brand: &str, category: &str, market: &str, kpi: &str) -> Self {
        Self {
            period: period.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            market: market.to_string(),
            kpi: kpi.to_string(),
            ..Self::default()
        }
    }

    /// Set control and exposed group sizes.
    #[must_use]
    pub fn with_samples(mut self, control: f64, exposed: f64) -> Self {
        self.control_sample = Some(control);
        self.exposed_sample = Some(exposed);
        self
    }

    /// Set control and exposed scores.
    #[must_use]
    pub fn with_scores(mut self, control: impl Into<RawScore>, exposed: impl Into<RawScore>) -> Self {
        self.control_score = Some(control.into());
        self.exposed_score = Some(exposed.into());
        self
    }

    /// Set pre-normalized proportions.
    #[must_use]
    pub fn with_props(mut self, control: f64, exposed: f64) -> Self {
        self.control_prop = Some(control);
        self.exposed_prop = Some(exposed);
        self
    }
}
