//! Brand lift study analysis
//!
//! Takes a tabular brand lift study (control vs. exposed group sizes and
//! observed KPI scores per brand/market/category/period) and derives, per
//! row, a complete set of inferential statistics plus a plain-language
//! interpretation:
//!
//! - `metrics`: proportions, absolute and relative lift, two-proportion
//!   z-test, confidence intervals, Cohen's h, sample-size flags, and a
//!   composite reliability label
//! - `insights`: a qualitative card per row (state, note, meaning, decision)
//! - `ingest`: CSV reading, column validation, defensive value coercion
//! - `report`: markdown brief export
//!
//! Both core stages are pure and row-independent: each output row depends
//! only on the matching input row and the shared configuration.
//!
//! # Example
//!
//! ```ignore
//! use liftbrief::{build_insight_cards, compute_metrics, ClassifierPolicy, StudyRow, Thresholds};
//!
//! let rows = vec![StudyRow::new("2024-03", "Acme", "CPG", "US", "Awareness")
//!     .with_samples(1300.0, 1300.0)
//!     .with_scores(40.0, 44.0)];
//!
//! let metrics = compute_metrics(&rows, &Thresholds::default());
//! let cards = build_insight_cards(&metrics, &ClassifierPolicy::default(), true);
//! assert_eq!(cards.len(), metrics.len());
//! ```

pub mod cli;
pub mod config;
pub mod ingest;
pub mod insights;
pub mod metrics;
pub mod report;
pub mod study;

pub use config::{ClassifierPolicy, Thresholds};
pub use ingest::{read_csv, to_study_rows, validate_columns, IngestError, ValidationReport};
pub use insights::{build_insight_cards, InsightCard, StateKey};
pub use metrics::{compute_metrics, DataFlag, EffectSize, MetricRow, Reliability};
pub use report::render_brief;
pub use study::{RawScore, StudyRow};
