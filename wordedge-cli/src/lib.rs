//! wordedge CLI library
//!
//! This library provides the command-line interface for the wordedge
//! word-boundary scanner: scanning, word-by-word consumption and minimal
//! unique context trimming.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod report;

pub use error::{CliError, CliResult};
