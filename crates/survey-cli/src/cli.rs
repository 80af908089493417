//! CLI argument definitions for `surveyforge`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "surveyforge",
    version,
    about = "Inspect statistical survey descriptions",
    long_about = "Load a JSON survey description (studies, questionnaires, variables, \n\
                  object types, data elements and registers) and inspect the \n\
                  resulting object model."
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

    /// Allow row values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize studies, variable families and object variables.
    Inspect(SurveyArgs),

    /// Print the rows of the survey's registers.
    Rows(RowsArgs),

    /// Report object variables missing a global variable and inconsistent links.
    Check(SurveyArgs),
}

#[derive(Parser)]
pub struct SurveyArgs {
    /// Path to the JSON survey description.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Require every object variable to reference a global variable, and
    /// treat warnings as failures.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct RowsArgs {
    #[command(flatten)]
    pub survey: SurveyArgs,

    /// Only print this register.
    #[arg(long = "register", value_name = "ID")]
    pub register: Option<String>,
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
