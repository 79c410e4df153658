//! Metrics computation

use super::normal::{normal_cdf, normal_quantile};
use super::normalize::normalize_score;
use super::row::{DataFlag, EffectSize, MetricRow, Reliability};
use crate::config::Thresholds;
use crate::study::StudyRow;

/// Proportions are clamped into (EPS, 1 - EPS) before the arcsine transform
/// so Cohen's h stays defined at exactly 0 or 1.
const EFFECT_CLAMP_EPS: f64 = 1e-9;

/// Compute every derived statistic for each row.
///
/// Output is 1:1 with the input, order preserved. Per-row data problems
/// never error: any field the row's inputs cannot support is `None` and
/// stays `None` through everything derived from it.
pub fn compute_metrics(rows: &[StudyRow], thresholds: &Thresholds) -> Vec<MetricRow> {
    rows.iter().map(|row| compute_row(row, thresholds)).collect()
}

fn compute_row(row: &StudyRow, thresholds: &Thresholds) -> MetricRow {
    let n1 = positive_count(row.control_sample);
    let n2 = positive_count(row.exposed_sample);
    let (p1, p2) = resolve_proportions(row);

    let diff_prop = sub(p2, p1);
    let lift_rel = match (p1, diff_prop) {
        (Some(c), Some(d)) if c != 0.0 => Some(d / c),
        _ => None,
    };

    let (pooled_prop, std_error, z_score, p_value) = pooled_z_test(p1, p2, n1, n2);
    let significant_95 = p_value.is_some_and(|p| p < thresholds.alpha);

    let se_diff = unpooled_se(p1, p2, n1, n2);
    let z_crit = normal_quantile(1.0 - thresholds.alpha / 2.0);
    let ci_low = match (diff_prop, se_diff) {
        (Some(d), Some(se)) => Some(d - z_crit * se),
        _ => None,
    };
    let ci_high = match (diff_prop, se_diff) {
        (Some(d), Some(se)) => Some(d + z_crit * se),
        _ => None,
    };

    let effect_size_h = cohens_h(p1, p2);
    let effect_size_qual = effect_size_h.map(EffectSize::from_h);

    let data_flag = data_flag(row.control_sample, row.exposed_sample, thresholds);
    let reliability = reliability(significant_95, data_flag, effect_size_qual);

    MetricRow {
        period: row.period.clone(),
        brand: row.brand.clone(),
        category: row.category.clone(),
        market: row.market.clone(),
        kpi: row.kpi.clone(),
        control_sample: row.control_sample,
        exposed_sample: row.exposed_sample,
        total_sample: add(row.control_sample, row.exposed_sample),
        control_prop: p1,
        exposed_prop: p2,
        control_pct: p1.map(|v| v * 100.0),
        exposed_pct: p2.map(|v| v * 100.0),
        diff_prop,
        diff_pct_pts: diff_prop.map(|v| v * 100.0),
        lift_rel,
        lift_pct: lift_rel.map(|v| v * 100.0),
        pooled_prop,
        std_error,
        z_score,
        p_value,
        significant_95,
        se_diff,
        ci_low_pct_pts: ci_low.map(|v| v * 100.0),
        ci_high_pct_pts: ci_high.map(|v| v * 100.0),
        effect_size_h,
        effect_size_qual,
        data_flag,
        reliability,
    }
}

/// Resolve the row's proportions.
///
/// A proportion pair, when both halves are present, wins verbatim over any
/// score columns; otherwise both proportions derive from the scores.
fn resolve_proportions(row: &StudyRow) -> (Option<f64>, Option<f64>) {
    if let (Some(c), Some(e)) = (row.control_prop, row.exposed_prop) {
        return (finite(c), finite(e));
    }

    let c = row.control_score.as_ref().and_then(normalize_score);
    let e = row.exposed_score.as_ref().and_then(normalize_score);
    (c, e)
}

/// Two-proportion z-test with pooled standard error.
///
/// Returns (pooled, std_error, z, p). Zero group sizes and a degenerate
/// pooled proportion (exactly 0 or 1, standard error zero) drop the
/// downstream fields to `None` without touching the rest of the row.
fn pooled_z_test(
    p1: Option<f64>,
    p2: Option<f64>,
    n1: Option<f64>,
    n2: Option<f64>,
) -> (Option<f64>, Option<f64>, Option<f64>, Option<f64>) {
    let (Some(p1), Some(p2), Some(n1), Some(n2)) = (p1, p2, n1, n2) else {
        return (None, None, None, None);
    };

    let pooled = (p1 * n1 + p2 * n2) / (n1 + n2);
    let variance = pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2);
    if variance <= 0.0 {
        return (Some(pooled), None, None, None);
    }

    let se = variance.sqrt();
    let z = (p2 - p1) / se;
    let p = (2.0 * (1.0 - normal_cdf(z.abs()))).clamp(0.0, 1.0);

    (Some(pooled), Some(se), Some(z), Some(p))
}

/// Unpooled standard error of the difference p2 - p1.
fn unpooled_se(p1: Option<f64>, p2: Option<f64>, n1: Option<f64>, n2: Option<f64>) -> Option<f64> {
    let (p1, p2, n1, n2) = (p1?, p2?, n1?, n2?);
    let variance = p1 * (1.0 - p1) / n1 + p2 * (1.0 - p2) / n2;
    if variance < 0.0 {
        // Out-of-range proportion slipped through ingest; no defensible SE.
        return None;
    }
    Some(variance.sqrt())
}

/// Cohen's h: 2·asin(√p2) − 2·asin(√p1), proportions clamped away from the
/// arcsine domain edges.
fn cohens_h(p1: Option<f64>, p2: Option<f64>) -> Option<f64> {
    let clamp = |p: f64| p.clamp(EFFECT_CLAMP_EPS, 1.0 - EFFECT_CLAMP_EPS);
    let phi = |p: f64| 2.0 * clamp(p).sqrt().asin();
    Some(phi(p2?) - phi(p1?))
}

/// Sample-size caveat. Each present group size is checked on its own, so a
/// row with one missing count can still be flagged by the other.
fn data_flag(n1: Option<f64>, n2: Option<f64>, thresholds: &Thresholds) -> DataFlag {
    let below_low =
        |n: Option<f64>| n.is_some_and(|v| v < thresholds.min_n_low);
    let in_warn_band = |n: Option<f64>| {
        n.is_some_and(|v| v >= thresholds.min_n_low && v < thresholds.min_n_warn)
    };

    if below_low(n1) || below_low(n2) {
        DataFlag::LowSample
    } else if in_warn_band(n1) || in_warn_band(n2) {
        DataFlag::LimitedSample
    } else {
        DataFlag::None
    }
}

/// Composite reliability label. Ordered rules, first match wins.
fn reliability(significant: bool, flag: DataFlag, effect: Option<EffectSize>) -> Reliability {
    // 1. Significant with a clean sample
    if significant && !flag.is_flagged() {
        return Reliability::High;
    }
    // 2. Significant but sample-flagged
    if significant {
        return Reliability::Medium;
    }
    // 3. Not significant, clean sample, but a non-trivial effect
    if !flag.is_flagged()
        && matches!(effect, Some(EffectSize::Medium) | Some(EffectSize::Large))
    {
        return Reliability::Directional;
    }
    // 4. Low sample
    if flag == DataFlag::LowSample {
        return Reliability::Low;
    }
    // 5. Everything else
    Reliability::Directional
}

fn positive_count(n: Option<f64>) -> Option<f64> {
    n.filter(|v| v.is_finite() && *v > 0.0)
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

fn add(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? + b?)
}

fn sub(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? - b?)
}
