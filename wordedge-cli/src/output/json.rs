//! JSON output formatter

use super::OutputFormatter;
use crate::report::Report;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all reports as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<Report>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
