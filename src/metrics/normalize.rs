//! Score normalization

use crate::study::RawScore;

/// Values above this are read as percentages and divided by 100; values at
/// or below it are read as proportions. Known blind spot: a true proportion
/// in (1.0, 1.5] is accepted as-is even though no proportion exceeds 1.0.
/// Preserved deliberately so "47.1" and "0.471" both work without a unit flag.
pub const PERCENT_BOUNDARY: f64 = 1.5;

/// Normalize a raw score to a proportion.
///
/// Accepts:
/// - `"47.10%"` -> 0.471
/// - `47.10`    -> 0.471 (assumed percent, above [`PERCENT_BOUNDARY`])
/// - `0.471`    -> 0.471
///
/// Unparseable text and non-finite numbers resolve to `None`.
pub fn normalize_score(score: &RawScore) -> Option<f64> {
    let v = match score {
        RawScore::Number(v) => *v,
        RawScore::Text(s) => {
            let s = s.trim().replace(',', "");
            let s = s.strip_suffix('%').unwrap_or(&s);
            s.parse::<f64>().ok()?
        }
    };

    if !v.is_finite() {
        return None;
    }

    if v > PERCENT_BOUNDARY {
        Some(v / 100.0)
    } else {
        Some(v)
    }
}
