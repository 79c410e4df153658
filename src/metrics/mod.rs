//! Metrics engine
//!
//! Pure row-wise transformation from raw study rows to fully derived metric
//! rows:
//!
//! - Score normalization ("47.10%", 47.10, and 0.471 all resolve to 0.471)
//! - Two-proportion z-test with pooled standard error
//! - Confidence interval for the difference with unpooled standard error
//! - Cohen's h effect size with qualitative bands
//! - Sample-size data flags and a composite reliability label
//!
//! Every derived field is `Option<f64>`: a value the row's inputs cannot
//! support (parse failure, zero group size, degenerate pooled proportion) is
//! `None` for that field only, and nothing aborts the table.

mod engine;
mod normal;
mod normalize;
mod row;

#[cfg(test)]
mod tests;

pub use engine::compute_metrics;
pub use normal::{normal_cdf, normal_quantile};
pub use normalize::normalize_score;
pub use row::{DataFlag, EffectSize, MetricRow, Reliability};
