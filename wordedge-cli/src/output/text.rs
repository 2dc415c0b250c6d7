//! Plain text output formatter

use super::{list, OutputFormatter};
use crate::report::Report;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one block per report
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        match report {
            Report::Scan(scan) => {
                writeln!(
                    self.writer,
                    "== {} ({}, {} chars)",
                    scan.source, scan.direction, scan.length
                )?;
                writeln!(self.writer, "table: {}", list(&scan.table))?;
                for (distance, word) in scan.table.iter().zip(&scan.words) {
                    writeln!(self.writer, "{distance:>6}  {word:?}")?;
                }
            }
            Report::Consume(consume) => {
                writeln!(self.writer, "== {} ({})", consume.source, consume.direction)?;
                for (index, step) in consume.steps.iter().enumerate() {
                    let label = if step.terminal { "terminal" } else { "removed" };
                    writeln!(
                        self.writer,
                        "{:>3}. {label} {:<3} {:?} {}",
                        index + 1,
                        step.removed,
                        step.text,
                        list(&step.table)
                    )?;
                }
            }
            Report::Context(context) => {
                writeln!(
                    self.writer,
                    "== {} [{}..{}]",
                    context.source, context.start, context.end
                )?;
                writeln!(self.writer, "prefix: {:?}", context.prefix)?;
                writeln!(self.writer, "target: {:?}", context.target)?;
                writeln!(self.writer, "suffix: {:?}", context.suffix)?;
                writeln!(
                    self.writer,
                    "unique: {}",
                    if context.unique { "yes" } else { "no" }
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
