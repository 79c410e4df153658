//! End-to-end scenarios across ingest, metrics, and insights

use approx::assert_abs_diff_eq;
use liftbrief::{
    build_insight_cards, compute_metrics, read_csv, to_study_rows, validate_columns,
    ClassifierPolicy, DataFlag, Reliability, StateKey, StudyRow, Thresholds,
};
use std::io::Write;

fn row() -> StudyRow {
    StudyRow::new("2024-03", "Acme", "CPG", "US", "Awareness")
}

/// Clean lift with comfortable samples: significant, citable, clear increase.
#[test]
fn scenario_significant_lift() {
    let rows = vec![row().with_samples(1300.0, 1300.0).with_props(0.40, 0.44)];
    let metrics = compute_metrics(&rows, &Thresholds::default());
    let cards = build_insight_cards(&metrics, &ClassifierPolicy::default(), true);

    let m = &metrics[0];
    assert_abs_diff_eq!(m.diff_pct_pts.unwrap(), 4.00, epsilon = 1e-9);
    assert_abs_diff_eq!(m.lift_pct.unwrap(), 10.00, epsilon = 1e-9);
    assert_abs_diff_eq!(m.z_score.unwrap(), 2.066, epsilon = 1e-3);
    assert_abs_diff_eq!(m.p_value.unwrap(), 0.0388, epsilon = 1e-3);
    assert!(m.significant_95);
    assert_eq!(cards[0].state_key, StateKey::ClearUp);
}

/// The same proportions at n = 1000 per group just miss significance and
/// fall back to a possible increase.
#[test]
fn scenario_same_lift_smaller_sample() {
    let rows = vec![row().with_samples(1000.0, 1000.0).with_props(0.40, 0.44)];
    let metrics = compute_metrics(&rows, &Thresholds::default());
    let cards = build_insight_cards(&metrics, &ClassifierPolicy::default(), true);

    let m = &metrics[0];
    assert_abs_diff_eq!(m.z_score.unwrap(), 1.812, epsilon = 1e-3);
    assert_abs_diff_eq!(m.p_value.unwrap(), 0.070, epsilon = 1e-3);
    assert!(!m.significant_95);
    assert_eq!(cards[0].state_key, StateKey::PossibleUp);
}

/// Tiny groups are flagged regardless of what the test says, and the row can
/// never be labeled high reliability.
#[test]
fn scenario_low_sample() {
    let rows = vec![row().with_samples(50.0, 50.0).with_props(0.40, 0.44)];
    let metrics = compute_metrics(&rows, &Thresholds::default());

    let m = &metrics[0];
    assert_eq!(m.data_flag, DataFlag::LowSample);
    assert_ne!(m.reliability, Reliability::High);
}

/// A control proportion of exactly zero only kills the relative lift; the
/// absolute difference is still computed.
#[test]
fn scenario_zero_control() {
    let rows = vec![row().with_samples(500.0, 500.0).with_props(0.0, 0.10)];
    let metrics = compute_metrics(&rows, &Thresholds::default());

    let m = &metrics[0];
    assert_eq!(m.lift_rel, None);
    assert_eq!(m.lift_pct, None);
    assert_abs_diff_eq!(m.diff_pct_pts.unwrap(), 10.0, epsilon = 1e-9);
}

/// Identical proportions: no movement, p-value of one, no clear change.
#[test]
fn scenario_flat() {
    let rows = vec![row().with_samples(1000.0, 1000.0).with_props(0.40, 0.40)];
    let metrics = compute_metrics(&rows, &Thresholds::default());
    let cards = build_insight_cards(&metrics, &ClassifierPolicy::default(), true);

    let m = &metrics[0];
    assert_eq!(m.diff_pct_pts, Some(0.0));
    assert_abs_diff_eq!(m.z_score.unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m.p_value.unwrap(), 1.0, epsilon = 1e-6);
    assert!(!m.significant_95);
    assert_eq!(cards[0].state_key, StateKey::NoClear);
}

/// Full pipeline from a CSV file on disk, scores in mixed formats.
#[test]
fn scenario_csv_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Month Year,Brand,Category,Market,KPI,Control Sample,Exposed Sample,Control Score,Exposed Score\n\
         2024-03,Acme,CPG,US,Awareness,1300,1300,40.00%,44.00%\n\
         2024-03,Acme,CPG,US,Consideration,1000,1000,0.40,0.44\n\
         2024-03,Acme,CPG,US,Intent,900,900,not measured,31.0\n"
    )
    .unwrap();

    let table = read_csv(file.path()).unwrap();
    let report = validate_columns(&table);
    assert!(report.ok);

    let rows = to_study_rows(&table);
    let metrics = compute_metrics(&rows, &Thresholds::default());
    let cards = build_insight_cards(&metrics, &ClassifierPolicy::default(), true);

    assert_eq!(metrics.len(), 3);

    // Percent text and bare proportions land on the same scale.
    assert_abs_diff_eq!(metrics[0].control_prop.unwrap(), 0.40, epsilon = 1e-12);
    assert_abs_diff_eq!(metrics[1].control_prop.unwrap(), 0.40, epsilon = 1e-12);
    assert_eq!(cards[0].state_key, StateKey::ClearUp);
    assert_eq!(cards[1].state_key, StateKey::PossibleUp);

    // The unreadable row degrades, it does not abort the table.
    assert_eq!(metrics[2].control_prop, None);
    assert_eq!(cards[2].state_key, StateKey::NoClear);
    assert!(cards[2].meaning.contains("Intent"));
    assert!(cards[2].meaning.contains("incomplete"));
}
