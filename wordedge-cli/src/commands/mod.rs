//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use wordedge_engine::{EngineConfig, ScanDirection};

pub mod consume;
pub mod context;
pub mod generate_config;
pub mod scan;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the boundary table of each input
    Scan(scan::ScanArgs),

    /// Consume each input word by word until it is exhausted
    Consume(consume::ConsumeArgs),

    /// Find the minimal unique context around a character range
    Context(context::ContextArgs),

    /// Write the default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, config: &EngineConfig) -> Result<()> {
        match self {
            Commands::Scan(args) => args.execute(config),
            Commands::Consume(args) => args.execute(config),
            Commands::Context(args) => args.execute(config),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Scan direction as a command-line value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    /// Walk from the start of the text
    #[default]
    Forward,
    /// Walk from the end of the text
    Backward,
}

impl From<Direction> for ScanDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Forward => ScanDirection::Forward,
            Direction::Backward => ScanDirection::Backward,
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
