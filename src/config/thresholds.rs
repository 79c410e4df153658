//! Statistical thresholds and classifier policy constants

/// Thresholds for the metrics engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Significance level for the two-proportion z-test
    pub alpha: f64,
    /// Either group below this size is flagged "Low sample"
    pub min_n_low: f64,
    /// Either group below this size (but at least `min_n_low`) is flagged
    /// "Limited sample"
    pub min_n_warn: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            min_n_low: 80.0,
            min_n_warn: 120.0,
        }
    }
}

/// Policy constants for the insight classifier.
///
/// These are product policy, not statistics: they control when a
/// non-significant row is still called a "possible" move, when the meaning
/// line uses strong wording, and when a clear result is safe to cite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierPolicy {
    /// Minimum |relative lift| (in percent) for a non-significant row to be
    /// labeled a possible increase/decline
    pub possible_lift_pct: f64,
    /// Minimum |difference| (in percentage points) for the meaning line to
    /// say "moved up"/"dropped" rather than "slightly higher"/"slightly lower"
    pub meaning_diff_pts: f64,
    /// Minimum |relative lift| (in percent) for a significant clear result to
    /// be called safe to cite
    pub citation_lift_pct: f64,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            possible_lift_pct: 8.0,
            meaning_diff_pts: 0.8,
            citation_lift_pct: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.alpha, 0.05);
        assert_eq!(t.min_n_low, 80.0);
        assert_eq!(t.min_n_warn, 120.0);
    }

    #[test]
    fn test_policy_defaults() {
        let p = ClassifierPolicy::default();
        assert_eq!(p.possible_lift_pct, 8.0);
        assert_eq!(p.meaning_diff_pts, 0.8);
        assert_eq!(p.citation_lift_pct, 10.0);
    }
}
