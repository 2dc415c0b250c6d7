//! Scan command implementation

use crate::input::InputArgs;
use crate::output::{create_formatter, open_writer, OutputFormat};
use crate::report::{Report, ScanReport};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordedge_engine::{EngineConfig, ScanDirection, WordWindow};

use super::Direction;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Edge the scan starts from
    #[arg(short, long, value_enum, default_value = "forward")]
    pub direction: Direction,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self, config: &EngineConfig) -> Result<()> {
        log::info!("Scanning {:?}", self.direction);
        let direction = ScanDirection::from(self.direction);
        let reports = self.reports(config, direction)?;

        let mut formatter = create_formatter(self.format, open_writer(self.output.as_deref())?);
        for report in &reports {
            formatter.format_report(report)?;
        }
        formatter.finish()
    }

    fn reports(&self, config: &EngineConfig, direction: ScanDirection) -> Result<Vec<Report>> {
        let sources = self.input.load()?;
        Ok(sources
            .iter()
            .map(|source| {
                let window = WordWindow::with_classifier(
                    source.text.as_str(),
                    direction,
                    config.classifier(),
                );
                log::debug!("{}: {} entries", source.name, window.remaining_words());
                Report::Scan(ScanReport::new(
                    &source.name,
                    window.text(),
                    direction,
                    window.table(),
                ))
            })
            .collect())
    }
}
