//! Output formatting module

use crate::report::Report;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Text,
    /// JSON array of reports
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Writer shared by all formatters
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Open `path` for writing, or stdout
pub fn open_writer(path: Option<&Path>) -> Result<BoxedWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(format: OutputFormat, writer: BoxedWriter) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Render a list of report values as `[a, b, c]`
pub(crate) fn list<T: std::fmt::Debug>(values: &[T]) -> String {
    format!("{values:?}")
}
