//! Output formatting module

use crate::error::CliResult;
use faultline::{FailureStrategy, PolicyKind};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single division report
    fn write_report(&mut self, report: &Report) -> CliResult<()>;

    /// Finalize output (e.g., flush the writer)
    fn finish(&mut self) -> CliResult<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per report, mirroring what a caller would print
    #[default]
    Text,
    /// One JSON object per report
    Json,
}

/// How the outcome of an operation reached its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Normal return with a value
    Value,
    /// A fault unwound to the handler
    Raised,
    /// A normal return carrying the error case
    Returned,
}

/// Outcome of one division
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Dividend
    pub numerator: i32,
    /// Divisor
    pub denominator: i32,
    /// Policy the operation ran under
    pub policy: PolicyKind,
    /// Strategy used to build a failure
    pub strategy: FailureStrategy,
    /// Channel the outcome arrived through
    pub channel: Channel,
    /// Quotient, when the division succeeded
    pub value: Option<f64>,
    /// Error description, when it failed
    pub message: Option<String>,
}

impl Report {
    /// Report a successful division
    pub fn value(
        (numerator, denominator): (i32, i32),
        policy: PolicyKind,
        strategy: FailureStrategy,
        value: f64,
    ) -> Self {
        Self {
            numerator,
            denominator,
            policy,
            strategy,
            channel: Channel::Value,
            value: Some(value),
            message: None,
        }
    }

    /// Report a failed division and the channel it used
    pub fn failed(
        (numerator, denominator): (i32, i32),
        policy: PolicyKind,
        strategy: FailureStrategy,
        message: impl Into<String>,
    ) -> Self {
        let channel = match policy {
            PolicyKind::Raise => Channel::Raised,
            PolicyKind::Return => Channel::Returned,
        };
        Self {
            numerator,
            denominator,
            policy,
            strategy,
            channel,
            value: None,
            message: Some(message.into()),
        }
    }
}

/// Create a formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_report_channel_follows_policy() {
        let raised = Report::failed((1, 0), PolicyKind::Raise, FailureStrategy::InPlace, "x");
        let returned = Report::failed((1, 0), PolicyKind::Return, FailureStrategy::InPlace, "x");

        assert_eq!(raised.channel, Channel::Raised);
        assert_eq!(returned.channel, Channel::Returned);
        assert_eq!(raised.value, None);
    }

    #[test]
    fn test_value_report() {
        let report = Report::value((1, 2), PolicyKind::Return, FailureStrategy::Functor, 0.5);
        assert_eq!(report.channel, Channel::Value);
        assert_eq!(report.value, Some(0.5));
        assert_eq!(report.message, None);
    }
}
