//! Demo command implementation

use super::divide::evaluate;
use crate::arith::{divide, DivideByError, DEFAULT_STRATEGY};
use crate::error::CliResult;
use crate::output::{create_formatter, OutputFormat, Report};
use clap::Args;
use faultline::{catch_fault, DefaultPolicy, Policy, PolicyKind};
use std::io;

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Divide under the build-time default policy
fn default_outcome(numerator: i32, denominator: i32) -> Report {
    let operands = (numerator, denominator);
    let policy = PolicyKind::DEFAULT;
    let strategy = DEFAULT_STRATEGY;

    let outcome = catch_fault(|| {
        DefaultPolicy::into_result::<f64, DivideByError>(divide(numerator, denominator))
    });
    match outcome {
        Ok(Ok(value)) => Report::value(operands, policy, strategy, value),
        Ok(Err(error)) => Report::failed(operands, policy, strategy, error.describe()),
        Err(raised) => Report::failed(operands, policy, strategy, raised.description()),
    }
}

/// The four calls of the walkthrough, in order
///
/// Default policy success, default policy failure, then the same failure
/// with `Return` and `Raise` named explicitly at the call site.
pub fn walkthrough() -> Vec<Report> {
    let strategy = DEFAULT_STRATEGY;
    vec![
        default_outcome(1, 2),
        default_outcome(1, 0),
        evaluate(PolicyKind::Return, strategy, 1, 0),
        evaluate(PolicyKind::Raise, strategy, 1, 0),
    ]
}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self) -> CliResult<()> {
        log::info!("Running walkthrough with default policy {}", PolicyKind::DEFAULT);

        let mut formatter = create_formatter(self.format, false, io::stdout());
        for report in walkthrough() {
            formatter.write_report(&report)?;
        }
        formatter.finish()
    }
}
