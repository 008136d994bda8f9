//! Divide command implementation

use crate::arith::{divide_by, DEFAULT_STRATEGY};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{create_formatter, OutputFormat, Report};
use anyhow::Context;
use clap::Args;
use faultline::{catch_fault, FailureStrategy, PolicyKind, Raise, Return};
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Arguments for the divide command
#[derive(Debug, Args)]
pub struct DivideArgs {
    /// Dividend
    #[arg(allow_negative_numbers = true)]
    pub numerator: i32,

    /// Divisor
    #[arg(allow_negative_numbers = true)]
    pub denominator: i32,

    /// Failure-signaling policy (default: build-time default policy)
    #[arg(short, long, env = "FAULTLINE_POLICY", value_name = "POLICY")]
    pub policy: Option<PolicyKind>,

    /// Failure strategy used to build the error (default: highest precedence)
    #[arg(short, long, env = "FAULTLINE_STRATEGY", value_name = "STRATEGY")]
    pub strategy: Option<FailureStrategy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags, config file and build defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Policy to run under
    pub policy: PolicyKind,
    /// Strategy to build failures with
    pub strategy: FailureStrategy,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Settings {
    /// Flags win over the config file, which wins over build-time defaults
    pub fn resolve(args: &DivideArgs, config: &CliConfig) -> Self {
        Self {
            policy: args
                .policy
                .or(config.defaults.policy)
                .unwrap_or(PolicyKind::DEFAULT),
            strategy: args
                .strategy
                .or(config.defaults.strategy)
                .unwrap_or(DEFAULT_STRATEGY),
            format: args.format.unwrap_or(config.output.format),
            pretty_json: config.output.pretty_json,
        }
    }
}

/// Run one division, observing whichever channel the policy uses
pub fn evaluate(
    policy: PolicyKind,
    strategy: FailureStrategy,
    numerator: i32,
    denominator: i32,
) -> Report {
    let operands = (numerator, denominator);
    match policy {
        PolicyKind::Raise => {
            match catch_fault(|| divide_by::<Raise>(strategy, numerator, denominator)) {
                Ok(value) => Report::value(operands, policy, strategy, value),
                Err(raised) => Report::failed(operands, policy, strategy, raised.description()),
            }
        }
        PolicyKind::Return => match divide_by::<Return>(strategy, numerator, denominator) {
            Ok(value) => Report::value(operands, policy, strategy, value),
            Err(error) => Report::failed(operands, policy, strategy, error.describe()),
        },
    }
}

impl DivideArgs {
    /// Execute the divide command
    pub fn execute(&self) -> CliResult<()> {
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = Settings::resolve(self, &config);
        log::info!(
            "Dividing with {} policy and {} strategy",
            settings.policy,
            settings.strategy
        );

        let report = evaluate(
            settings.policy,
            settings.strategy,
            self.numerator,
            self.denominator,
        );

        let mut formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|e| CliError::OutputError(format!("{}: {e}", path.display())))?;
                create_formatter(settings.format, settings.pretty_json, file)
            }
            None => create_formatter(settings.format, settings.pretty_json, io::stdout()),
        };
        formatter
            .write_report(&report)
            .context("failed to write report")?;
        formatter.finish()
    }
}
