//! Context command implementation

use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::{create_formatter, open_writer, OutputFormat};
use crate::report::{ContextReport, Report};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordedge_engine::{ContextTrimmer, EngineConfig};

/// Arguments for the context command
#[derive(Debug, Args)]
pub struct ContextArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target start, in characters
    #[arg(short, long)]
    pub start: usize,

    /// Target end (exclusive), in characters
    #[arg(short, long)]
    pub end: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ContextArgs {
    /// Execute the context command
    pub fn execute(&self, config: &EngineConfig) -> Result<()> {
        let trimmer = ContextTrimmer::new(config.clone());
        let mut formatter = create_formatter(self.format, open_writer(self.output.as_deref())?);

        for source in self.input.load()? {
            log::info!("Trimming context in {}", source.name);
            let context = trimmer
                .minimize(&source.text, self.start..self.end)
                .map_err(|e| CliError::ProcessingError(format!("{}: {e}", source.name)))?;
            if !context.unique {
                log::warn!(
                    "{}: target is not unique within {} characters of context",
                    source.name,
                    config.context.max_context_chars
                );
            }
            let report = ContextReport::new(&source.name, self.start, self.end, context);
            formatter.format_report(&Report::Context(report))?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, start: usize, end: usize, output: PathBuf) -> ContextArgs {
        ContextArgs {
            input: InputArgs {
                input: Vec::new(),
                text: Some(text.to_string()),
            },
            start,
            end,
            format: OutputFormat::Json,
            output: Some(output),
        }
    }

    #[test]
    fn test_context_report_written() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("context.json");

        args("red apple, green apple", 17, 22, path.clone())
            .execute(&EngineConfig::default())
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["kind"], "context");
        assert_eq!(value[0]["prefix"], "green ");
        assert_eq!(value[0]["target"], "apple");
        assert_eq!(value[0]["unique"], true);
    }

    #[test]
    fn test_invalid_range_is_processing_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = args("short", 2, 40, temp_dir.path().join("out.json"))
            .execute(&EngineConfig::default())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ProcessingError(msg)) if msg.contains("invalid range 2..40")
        ));
    }
}
