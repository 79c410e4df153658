//! Configuration for liftbrief
//!
//! Holds the statistical thresholds, the classifier policy constants, the
//! input column vocabulary, and the CLI argument types.

mod cli;
mod columns;
mod thresholds;

pub use cli::{AnalyzeArgs, Cli, Command, OutputFormat, ReportArgs, ValidateArgs};
pub use columns::{
    canonical_column, OPTIONAL_COLS, REQUIRED_BASE_COLS, REQUIRED_PROP_COLS, REQUIRED_SCORE_COLS,
};
pub use thresholds::{ClassifierPolicy, Thresholds};
