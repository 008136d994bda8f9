//! Plain text output formatter

use super::{Channel, OutputFormatter, Report};
use crate::error::CliResult;
use std::io::Write;

/// Plain text formatter - outputs one line per report
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render a report the way a caller of the operation would print it
pub fn render(report: &Report) -> String {
    let message = report.message.as_deref().unwrap_or_default();
    match report.channel {
        Channel::Value => report.value.unwrap_or(f64::NAN).to_string(),
        Channel::Raised => format!("Caught: {message}"),
        Channel::Returned => format!("Unexpected: {message}"),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &Report) -> CliResult<()> {
        writeln!(self.writer, "{}", render(report))?;
        Ok(())
    }

    fn finish(&mut self) -> CliResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
