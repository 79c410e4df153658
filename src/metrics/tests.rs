//! Tests for the metrics engine

use super::{compute_metrics, DataFlag, EffectSize, Reliability};
use crate::config::Thresholds;
use crate::study::StudyRow;
use approx::assert_abs_diff_eq;

fn row() -> StudyRow {
    StudyRow::new("2024-03", "Acme", "CPG", "US", "Awareness")
}

fn single(row: StudyRow) -> super::MetricRow {
    compute_metrics(&[row], &Thresholds::default())
        .pop()
        .unwrap()
}

#[test]
fn test_basic_derivation() {
    let m = single(row().with_samples(1000.0, 1000.0).with_scores(40.0, 44.0));

    assert_abs_diff_eq!(m.control_prop.unwrap(), 0.40, epsilon = 1e-12);
    assert_abs_diff_eq!(m.exposed_prop.unwrap(), 0.44, epsilon = 1e-12);
    assert_abs_diff_eq!(m.diff_pct_pts.unwrap(), 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.lift_pct.unwrap(), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.pooled_prop.unwrap(), 0.42, epsilon = 1e-12);
    assert_eq!(m.total_sample, Some(2000.0));
}

#[test]
fn test_z_test_values() {
    let m = single(row().with_samples(1000.0, 1000.0).with_scores(40.0, 44.0));

    // se = sqrt(0.42 * 0.58 * (1/1000 + 1/1000))
    assert_abs_diff_eq!(m.std_error.unwrap(), 0.022072, epsilon = 1e-5);
    assert_abs_diff_eq!(m.z_score.unwrap(), 1.8122, epsilon = 1e-3);
    assert_abs_diff_eq!(m.p_value.unwrap(), 0.0699, epsilon = 1e-3);
    assert!(!m.significant_95);
}

#[test]
fn test_significant_at_larger_samples() {
    let m = single(row().with_samples(1300.0, 1300.0).with_scores(40.0, 44.0));

    assert_abs_diff_eq!(m.z_score.unwrap(), 2.0663, epsilon = 1e-3);
    assert_abs_diff_eq!(m.p_value.unwrap(), 0.0388, epsilon = 1e-3);
    assert!(m.significant_95);
    assert_eq!(m.reliability, Reliability::High);
}

#[test]
fn test_confidence_interval_brackets_diff() {
    let m = single(row().with_samples(1000.0, 1000.0).with_scores(40.0, 44.0));

    let diff = m.diff_pct_pts.unwrap();
    let low = m.ci_low_pct_pts.unwrap();
    let high = m.ci_high_pct_pts.unwrap();
    assert!(low <= diff && diff <= high);

    // se_diff = sqrt(0.4*0.6/1000 + 0.44*0.56/1000) = 0.022055
    assert_abs_diff_eq!(m.se_diff.unwrap(), 0.022055, epsilon = 1e-5);
    assert_abs_diff_eq!(low, 4.0 - 1.96 * 2.2055, epsilon = 1e-2);
    assert_abs_diff_eq!(high, 4.0 + 1.96 * 2.2055, epsilon = 1e-2);
}

#[test]
fn test_proportion_pair_wins_over_scores() {
    let m = single(
        row()
            .with_samples(500.0, 500.0)
            .with_scores(99.0, 1.0)
            .with_props(0.40, 0.44),
    );

    assert_abs_diff_eq!(m.control_prop.unwrap(), 0.40, epsilon = 1e-12);
    assert_abs_diff_eq!(m.exposed_prop.unwrap(), 0.44, epsilon = 1e-12);
}

#[test]
fn test_half_proportion_pair_falls_back_to_scores() {
    let mut r = row().with_samples(500.0, 500.0).with_scores(40.0, 44.0);
    r.control_prop = Some(0.9);

    let m = single(r);
    assert_abs_diff_eq!(m.control_prop.unwrap(), 0.40, epsilon = 1e-12);
}

#[test]
fn test_zero_control_prop_guards_lift_only() {
    let m = single(row().with_samples(500.0, 500.0).with_props(0.0, 0.1));

    assert_eq!(m.lift_rel, None);
    assert_eq!(m.lift_pct, None);
    assert_abs_diff_eq!(m.diff_pct_pts.unwrap(), 10.0, epsilon = 1e-9);
    assert!(m.p_value.is_some());
}

#[test]
fn test_degenerate_pooled_proportion() {
    // Both proportions at 1.0: pooled variance is zero, the test is
    // undefined, but the point estimates survive.
    let m = single(row().with_samples(500.0, 500.0).with_props(1.0, 1.0));

    assert_eq!(m.std_error, None);
    assert_eq!(m.z_score, None);
    assert_eq!(m.p_value, None);
    assert!(!m.significant_95);
    assert_eq!(m.diff_pct_pts, Some(0.0));
}

#[test]
fn test_zero_sample_is_missing_not_fault() {
    let m = single(row().with_samples(0.0, 500.0).with_scores(40.0, 44.0));

    assert_eq!(m.z_score, None);
    assert_eq!(m.p_value, None);
    assert_eq!(m.se_diff, None);
    // Flag still fires off the raw count.
    assert_eq!(m.data_flag, DataFlag::LowSample);
}

#[test]
fn test_unparseable_score_propagates_as_missing() {
    let m = single(row().with_samples(500.0, 500.0).with_scores("n/a", 44.0));

    assert_eq!(m.control_prop, None);
    assert_eq!(m.diff_prop, None);
    assert_eq!(m.lift_pct, None);
    assert_eq!(m.p_value, None);
    assert_eq!(m.effect_size_h, None);
    assert_eq!(m.effect_size_qual, None);
    // The exposed side is independently computable.
    assert_abs_diff_eq!(m.exposed_prop.unwrap(), 0.44, epsilon = 1e-12);
}

#[test]
fn test_identical_proportions() {
    let m = single(row().with_samples(1000.0, 1000.0).with_scores(40.0, 40.0));

    assert_eq!(m.diff_pct_pts, Some(0.0));
    assert_abs_diff_eq!(m.z_score.unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m.p_value.unwrap(), 1.0, epsilon = 1e-6);
    assert!(!m.significant_95);
}

#[test]
fn test_effect_size_bands() {
    // p1=0.40, p2=0.44 -> h = 2 asin(sqrt(.44)) - 2 asin(sqrt(.40)) ~= 0.0807
    let m = single(row().with_samples(1000.0, 1000.0).with_scores(40.0, 44.0));
    assert_abs_diff_eq!(m.effect_size_h.unwrap(), 0.0811, epsilon = 1e-3);
    assert_eq!(m.effect_size_qual, Some(EffectSize::Small));

    let m = single(row().with_samples(1000.0, 1000.0).with_props(0.30, 0.45));
    assert_eq!(m.effect_size_qual, Some(EffectSize::Medium));

    let m = single(row().with_samples(1000.0, 1000.0).with_props(0.20, 0.60));
    assert_eq!(m.effect_size_qual, Some(EffectSize::Large));
}

#[test]
fn test_effect_size_defined_at_extremes() {
    let m = single(row().with_samples(1000.0, 1000.0).with_props(0.0, 1.0));
    let h = m.effect_size_h.unwrap();
    assert!(h.is_finite());
    assert_abs_diff_eq!(h, std::f64::consts::PI, epsilon = 1e-3);
}

#[test]
fn test_data_flag_bands() {
    let t = Thresholds::default();
    let flag = |n1: f64, n2: f64| {
        compute_metrics(&[row().with_samples(n1, n2).with_scores(40.0, 44.0)], &t)[0].data_flag
    };

    assert_eq!(flag(79.0, 500.0), DataFlag::LowSample);
    assert_eq!(flag(500.0, 50.0), DataFlag::LowSample);
    assert_eq!(flag(80.0, 500.0), DataFlag::LimitedSample);
    assert_eq!(flag(500.0, 119.0), DataFlag::LimitedSample);
    assert_eq!(flag(120.0, 120.0), DataFlag::None);
}

#[test]
fn test_low_sample_flag_independent_of_significance() {
    // Big effect, tiny groups: flagged regardless of what the test says.
    let m = single(row().with_samples(50.0, 50.0).with_scores(40.0, 44.0));
    assert_eq!(m.data_flag, DataFlag::LowSample);
    assert_ne!(m.reliability, Reliability::High);
}

#[test]
fn test_reliability_rules_in_order() {
    // Significant + clean -> High
    let m = single(row().with_samples(1300.0, 1300.0).with_scores(40.0, 44.0));
    assert_eq!(m.reliability, Reliability::High);

    // Significant + flagged -> Medium
    let m = single(row().with_samples(100.0, 1300.0).with_props(0.20, 0.60));
    assert!(m.significant_95);
    assert_eq!(m.reliability, Reliability::Medium);

    // Not significant + clean + medium effect -> Directional
    // z ~= 1.94, p ~= 0.053: just misses at alpha = 0.05
    let m = single(row().with_samples(120.0, 120.0).with_props(0.30, 0.42));
    assert!(!m.significant_95);
    assert_eq!(m.effect_size_qual, Some(EffectSize::Medium));
    assert_eq!(m.reliability, Reliability::Directional);

    // Not significant + low sample + small effect -> Low
    let m = single(row().with_samples(40.0, 40.0).with_scores(40.0, 41.0));
    assert!(!m.significant_95);
    assert_eq!(m.reliability, Reliability::Low);

    // Not significant + limited sample + small effect -> Directional
    let m = single(row().with_samples(100.0, 100.0).with_scores(40.0, 41.0));
    assert_eq!(m.data_flag, DataFlag::LimitedSample);
    assert_eq!(m.reliability, Reliability::Directional);
}

#[test]
fn test_order_and_count_preserved() {
    let rows = vec![
        row().with_samples(1000.0, 1000.0).with_scores(40.0, 44.0),
        StudyRow::new("2024-04", "Acme", "CPG", "UK", "Consideration")
            .with_samples(200.0, 200.0)
            .with_scores(30.0, 28.0),
    ];
    let metrics = compute_metrics(&rows, &Thresholds::default());

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0].market, "US");
    assert_eq!(metrics[1].market, "UK");
    assert!(metrics[1].diff_pct_pts.unwrap() < 0.0);
}

#[test]
fn test_custom_alpha() {
    let t = Thresholds {
        alpha: 0.10,
        ..Thresholds::default()
    };

    let m = compute_metrics(
        &[row().with_samples(1000.0, 1000.0).with_scores(40.0, 44.0)],
        &t,
    )
    .pop()
    .unwrap();

    // p ~= 0.0699: not significant at 0.05, significant at 0.10.
    assert!(m.significant_95);
}
