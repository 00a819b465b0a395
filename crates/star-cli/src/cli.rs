//! CLI argument definitions for the star schema builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "star-schema",
    version,
    about = "Build a star schema from a denormalized sales CSV",
    long_about = "Convert a flat sales feed into customer, product and date dimensions\n\
                  plus a sales fact table, written as one CSV file per table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Show customer and product values in logs and issue examples.
    ///
    /// By default row values are replaced with a redaction marker.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the dimension and fact tables from a sales CSV.
    Build(BuildArgs),

    /// List the produced tables and their columns.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the raw sales CSV (header row required).
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output directory for the table files (default: the input's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of partitions to build facts on in parallel.
    ///
    /// With more than one partition, surrogate keys encode the partition
    /// index and are no longer contiguous.
    #[arg(
        long = "partitions",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..=1024)
    )]
    pub partitions: u16,

    /// Fold records with unparseable dates into one null date row.
    ///
    /// By default such records get no date row and a null date_id.
    #[arg(long = "null-date-row")]
    pub null_date_row: bool,

    /// Build and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the run summary as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Show only this table (e.g. dim_customer).
    #[arg(value_name = "TABLE")]
    pub table: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
