//! CLI argument parsing for wayfarer
//!
//! Uses clap with global flags: --format, --quiet, --verbose,
//! --log-level, --log-json.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

use wayfarer_core::error::WayfarerError;
use wayfarer_core::graph::Algorithm;
use wayfarer_core::space::DistanceMetric;

/// Wayfarer - graph search over nodes embedded in a metric space
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "WAYFARER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search over a scenario file
    Solve {
        /// Scenario JSON file, or `-` for stdin
        scenario: PathBuf,

        /// Override the scenario's algorithm
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,

        /// Override the scenario's distance metric
        #[arg(long, short, value_parser = parse_metric)]
        metric: Option<DistanceMetric>,

        /// Point dimension of node values (1-3); inferred from the
        /// scenario's value rows when omitted
        #[arg(long)]
        dims: Option<usize>,
    },

    /// Print the nodes and adjacency of a scenario
    Inspect {
        /// Scenario JSON file, or `-` for stdin
        scenario: PathBuf,

        /// Point dimension of node values (1-3); inferred from the
        /// scenario's value rows when omitted
        #[arg(long)]
        dims: Option<usize>,
    },
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: WayfarerError| e.to_string())
}

fn parse_metric(s: &str) -> Result<DistanceMetric, String> {
    s.parse().map_err(|e: WayfarerError| e.to_string())
}

/// Output format for wayfarer commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = WayfarerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(WayfarerError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
