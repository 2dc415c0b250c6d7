//! Consume command implementation

use crate::input::InputArgs;
use crate::output::{create_formatter, open_writer, OutputFormat};
use crate::report::{ConsumeReport, ConsumeStep, Report};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordedge_engine::{EngineConfig, ScanDirection, WordWindow};

use super::Direction;

/// Arguments for the consume command
#[derive(Debug, Args)]
pub struct ConsumeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Edge words are consumed from
    #[arg(short, long, value_enum, default_value = "forward")]
    pub direction: Direction,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ConsumeArgs {
    /// Execute the consume command
    pub fn execute(&self, config: &EngineConfig) -> Result<()> {
        let direction = ScanDirection::from(self.direction);
        let mut formatter = create_formatter(self.format, open_writer(self.output.as_deref())?);

        for source in self.input.load()? {
            log::info!("Consuming {} ({direction})", source.name);
            let window = WordWindow::with_classifier(source.text, direction, config.classifier());
            let report = ConsumeReport {
                source: source.name,
                direction,
                steps: consume_all(window)?,
            };
            formatter.format_report(&Report::Consume(report))?;
        }
        formatter.finish()
    }
}

/// Shrink `window` until it is exhausted, recording every step
pub fn consume_all(mut window: WordWindow) -> Result<Vec<ConsumeStep>> {
    let mut steps = Vec::with_capacity(window.remaining_words());
    while !window.is_exhausted() {
        let step = window.shrink()?;
        steps.push(ConsumeStep::new(step, window.text(), window.table()));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(steps: &[ConsumeStep]) -> Vec<(usize, bool, &str)> {
        steps
            .iter()
            .map(|step| (step.removed, step.terminal, step.text.as_str()))
            .collect()
    }

    #[test]
    fn test_consume_all_forward() {
        let window = WordWindow::new("Hello, world! This is a test.", ScanDirection::Forward);
        let steps = consume_all(window).unwrap();
        assert_eq!(
            summary(&steps),
            vec![
                (7, false, "world! This is a test."),
                (7, false, "This is a test."),
                (5, false, "is a test."),
                (3, false, "a test."),
                (2, false, "test."),
                (5, true, "test."),
            ]
        );
        assert_eq!(steps[0].table, vec![5, 11, 14, 16, 21, 22]);
        assert!(steps[5].table.is_empty());
    }

    #[test]
    fn test_consume_all_padding_tail() {
        let window = WordWindow::new("foo ...", ScanDirection::Forward);
        let steps = consume_all(window).unwrap();
        assert_eq!(summary(&steps), vec![(7, true, "foo ...")]);
    }

    #[test]
    fn test_consume_all_backward_empty_text() {
        let window = WordWindow::new("", ScanDirection::Backward);
        let steps = consume_all(window).unwrap();
        assert_eq!(summary(&steps), vec![(0, true, "")]);
    }
}
