//! Markdown output formatter

use super::{list, OutputFormatter};
use crate::report::Report;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per report
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_count: 0,
        }
    }
}

/// Inline code span that survives backticks and pipes in the text
fn code(text: &str) -> String {
    let longest_run = text
        .split(|ch: char| ch != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat((longest_run + 1).max(2));
    format!("{fence} {} {fence}", text.replace('|', "\\|"))
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.report_count += 1;
        match report {
            Report::Scan(scan) => {
                writeln!(self.writer, "## {} ({})", scan.source, scan.direction)?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| # | Distance | Text |")?;
                writeln!(self.writer, "|---|----------|------|")?;
                for (index, (distance, word)) in scan.table.iter().zip(&scan.words).enumerate() {
                    writeln!(self.writer, "| {} | {} | {} |", index + 1, distance, code(word))?;
                }
            }
            Report::Consume(consume) => {
                writeln!(self.writer, "## {} ({})", consume.source, consume.direction)?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| Step | Removed | Remaining | Table |")?;
                writeln!(self.writer, "|------|---------|-----------|-------|")?;
                for (index, step) in consume.steps.iter().enumerate() {
                    let removed = if step.terminal {
                        format!("{} (terminal)", step.removed)
                    } else {
                        step.removed.to_string()
                    };
                    writeln!(
                        self.writer,
                        "| {} | {} | {} | {} |",
                        index + 1,
                        removed,
                        code(&step.text),
                        list(&step.table)
                    )?;
                }
            }
            Report::Context(context) => {
                writeln!(
                    self.writer,
                    "## {} [{}..{}]",
                    context.source, context.start, context.end
                )?;
                writeln!(self.writer)?;
                writeln!(self.writer, "- Prefix: {}", code(&context.prefix))?;
                writeln!(self.writer, "- Target: {}", code(&context.target))?;
                writeln!(self.writer, "- Suffix: {}", code(&context.suffix))?;
                writeln!(self.writer, "- Unique: {}", context.unique)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total reports: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
