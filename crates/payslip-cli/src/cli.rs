//! CLI argument definitions for the payslip generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "payslip-generator",
    version,
    about = "Generate payslip PDFs from a salary register",
    long_about = "Convert a salary register (Excel or CSV, header on row 3) into one\n\
                  fixed-layout payslip PDF per employee, packed into a single ZIP\n\
                  archive written beside the register.\n\n\
                  When invoked without any run arguments, the five values are asked\n\
                  for interactively."
)]
pub struct Cli {
    /// Path to the salary register (.xlsx, .xlsm, .xls or .csv).
    #[arg(long, value_name = "PATH")]
    pub register: Option<PathBuf>,

    /// Company name printed at the top of every payslip.
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,

    /// Company address (may be empty; wrapped and centered on the page).
    #[arg(long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Payslip month label, e.g. "August 2025". Also names the archive.
    #[arg(long, value_name = "MONTH")]
    pub month: Option<String>,

    /// Work location printed in the identity box.
    #[arg(long, value_name = "LOCATION")]
    pub location: Option<String>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Append logs to this file in addition to the console.
    #[arg(
        long = "log-file",
        value_name = "PATH",
        default_value = "payslip_generator.log"
    )]
    pub log_file: PathBuf,

    /// Log to the console only, without a log file.
    #[arg(long = "no-log-file")]
    pub no_log_file: bool,
}

impl Cli {
    /// True when none of the five run arguments were given; the front end
    /// then falls back to interactive prompts.
    pub fn wants_prompts(&self) -> bool {
        self.register.is_none()
            && self.company.is_none()
            && self.address.is_none()
            && self.month.is_none()
            && self.location.is_none()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_run_arguments_triggers_prompt_mode() {
        let cli = Cli::parse_from(["payslip-generator"]);
        assert!(cli.wants_prompts());
    }

    #[test]
    fn any_run_argument_disables_prompt_mode() {
        let cli = Cli::parse_from(["payslip-generator", "--company", "Acme"]);
        assert!(!cli.wants_prompts());
    }

    #[test]
    fn log_file_defaults_to_the_generator_log() {
        let cli = Cli::parse_from(["payslip-generator"]);
        assert_eq!(cli.log_file, PathBuf::from("payslip_generator.log"));
        assert!(!cli.no_log_file);
    }
}
