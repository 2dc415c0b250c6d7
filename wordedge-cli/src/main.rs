//! wordedge command-line entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wordedge_cli::commands::{init_logging, Commands};

/// Word-boundary scanning and minimal context trimming
#[derive(Debug, Parser)]
#[command(name = "wordedge", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "WORDEDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);

    let config = wordedge_cli::config::load(cli.config.as_deref())?;
    cli.command.execute(&config)
}
