use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chaside")]
#[command(about = "CHASIDE vocational-interest scoring and diagnosis", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a cohort dataset and emit per-respondent diagnoses
    Score {
        /// Delimited dataset file (comma or semicolon separated)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./chaside.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Weight given to interest sums, in [0, 1]; overrides config
        #[arg(long)]
        weight_interest: Option<f64>,

        /// Straight-line-responding ratio that flags a respondent
        /// unreliable, in [0, 1]; overrides config
        #[arg(long)]
        reliability_threshold: Option<f64>,

        /// Append the cohort summary to table output
        #[arg(long)]
        summary: bool,

        /// Number of worker threads (defaults to available cores)
        #[arg(long)]
        jobs: Option<usize>,
    },
}
