//! Command line arguments of the `taxid` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use taxid_clean::mapper::DEFAULT_CHUNK_SIZE;
use taxid_model::{ErrorPolicy, RucFormat, VatFormat};

#[derive(Parser)]
#[command(
    name = "taxid",
    version,
    about = "Clean and validate tax identifier columns in CSV files",
    long_about = "Clean and validate tax identifier columns in CSV files.\n\n\
                  Supports Peruvian RUC numbers and European VAT numbers.\n\
                  Cleaned CSV goes to --output or stdout; the run summary goes to stderr."
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

    /// Log output format.
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

    /// Allow raw identifier values in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a column of Peruvian RUC numbers.
    Ruc(RucArgs),

    /// Clean a column of VAT identification numbers.
    Vat(VatArgs),

    /// Flag which cells hold valid identifiers.
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct RucArgs {
    #[command(flatten)]
    pub common: CleanArgs,

    /// Output format: compact, standard or dni.
    #[arg(long = "output-format", default_value = "standard")]
    pub output_format: RucFormat,
}

#[derive(Args)]
pub struct VatArgs {
    #[command(flatten)]
    pub common: CleanArgs,

    /// Output format: compact or standard.
    #[arg(long = "output-format", default_value = "standard")]
    pub output_format: VatFormat,

    /// Add country_code and identifier columns.
    #[arg(long = "split")]
    pub split: bool,
}

/// Flags shared by the cleaning commands.
#[derive(Args)]
pub struct CleanArgs {
    /// Input CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding the identifiers.
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: String,

    /// What to do with invalid values: coerce, ignore or raise.
    #[arg(long = "errors", default_value = "coerce")]
    pub errors: ErrorPolicy,

    /// Replace the column instead of adding <column>_clean.
    #[arg(long = "inplace")]
    pub inplace: bool,

    /// Output CSV file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Map rows on the current thread only.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Rows per parallel work unit.
    #[arg(long = "chunk-size", value_name = "N", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Summary format printed after the run.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Input CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Identifier kind to check.
    #[arg(long = "kind", value_enum)]
    pub kind: KindArg,

    /// Validate only this column (default: every column).
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: Option<String>,

    /// Output CSV file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Summary format printed after the run.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Ruc,
    Vat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
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
