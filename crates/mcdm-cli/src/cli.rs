//! CLI argument definitions for the ranking tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mcdm_model::{DEFAULT_PARETO_SCALE, RankDirection};

#[derive(Parser)]
#[command(
    name = "mcdm",
    version,
    about = "Rank alternatives by lexicographic preference over weighted criteria",
    long_about = "Rank alternatives described in a CSV sheet.\n\n\
                  The first row names the columns, the last row gives each criterion's\n\
                  significance rank, every other row is one alternative. Alternatives\n\
                  scoring at or below the mean Pareto score are dropped before ranking."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank the alternatives of a sheet and write the result table.
    Rank(RankArgs),

    /// Show significance order and Pareto scores without ranking.
    Scores(ScoresArgs),
}

/// Options shared by every command that reads a sheet.
#[derive(Parser)]
pub struct SheetArgs {
    /// CSV sheet with alternatives and a trailing significance row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding alternative names (default: first column).
    #[arg(long = "name-column", value_name = "NAME")]
    pub name_column: Option<String>,

    /// Which end of the significance scale is most important.
    #[arg(long = "rank-direction", value_enum, default_value = "lowest-first")]
    pub rank_direction: RankDirectionArg,

    /// Divisor applied to Pareto weight sums in reports.
    #[arg(long = "pareto-scale", value_name = "F", default_value_t = DEFAULT_PARETO_SCALE)]
    pub pareto_scale: f64,
}

#[derive(Parser)]
pub struct RankArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Result CSV path (default: <INPUT stem>_result.csv beside the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Rank every alternative, skipping the Pareto reduction.
    #[arg(long = "no-pareto")]
    pub no_pareto: bool,

    /// Also write a JSON report with scores, tiers and options.
    #[arg(long = "json-report", value_name = "PATH")]
    pub json_report: Option<PathBuf>,

    /// Compute and print the ranking without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ScoresArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,
}

/// CLI significance direction choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum RankDirectionArg {
    /// Rank 1 is the most significant criterion.
    LowestFirst,
    /// The highest rank is the most significant criterion.
    HighestFirst,
}

impl From<RankDirectionArg> for RankDirection {
    fn from(arg: RankDirectionArg) -> Self {
        match arg {
            RankDirectionArg::LowestFirst => Self::LowestFirst,
            RankDirectionArg::HighestFirst => Self::HighestFirst,
        }
    }
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
