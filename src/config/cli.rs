//! CLI types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Liftbrief: brand lift study analysis
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "liftbrief")]
#[command(version)]
#[command(about = "Computes two-proportion lift statistics and plain-language insight cards")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Compute metrics and insight cards from a study CSV
    Analyze(AnalyzeArgs),

    /// Check a study CSV for the required columns without analyzing it
    Validate(ValidateArgs),

    /// Render a markdown brief from a study CSV
    Report(ReportArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Path to the study CSV
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Override the significance level
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Override the "Low sample" group-size threshold
    #[arg(long)]
    pub min_n_low: Option<f64>,

    /// Override the "Limited sample" group-size threshold
    #[arg(long)]
    pub min_n_warn: Option<f64>,

    /// Collapse every row to a clear increase/decline by lift sign,
    /// ignoring significance
    #[arg(long)]
    pub headline_only: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the study CSV
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Path to the study CSV
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report title
    #[arg(long, default_value = "Brand Lift Brief")]
    pub title: String,

    /// Collapse every row to a clear increase/decline by lift sign,
    /// ignoring significance
    #[arg(long)]
    pub headline_only: bool,

    /// Write the brief to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Output format for the analyze command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: table, json")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
