//! Text window management on top of `wordedge-core`
//!
//! This crate is the caller side of the word-boundary primitives: it owns the
//! buffers, chooses scan directions, drives the word-by-word loop and decides
//! when to stop.
//!
//! - [`WordWindow`]: a buffer plus its boundary table, shrinking one word at
//!   a time
//! - [`ContextTrimmer`]: the minimal prefix/suffix that makes a target unique
//! - [`EngineConfig`]: TOML-backed settings
//! - [`Input`]: text, file, bytes or reader sources
//!
//! # Example
//!
//! ```rust
//! use wordedge_engine::{ContextTrimmer, ScanDirection, Shrink, WordWindow};
//!
//! let mut window = WordWindow::new("(Hello) world", ScanDirection::Forward);
//! assert_eq!(window.shrink().unwrap(), Shrink::Consumed(8));
//! assert_eq!(window.text(), "world");
//!
//! let text = "red apple, green apple";
//! let context = ContextTrimmer::default().minimize(text, 17..22).unwrap();
//! assert_eq!(context.matched_text(), "green apple");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod window;

// Re-export key types
pub use config::{ClassifierConfig, ContextConfig, EngineConfig, EngineConfigBuilder, TrimOrder};
pub use context::{count_occurrences, ContextTrimmer, MinimalContext};
pub use error::{EngineError, Result};
pub use input::Input;
pub use window::{Shrink, WordWindow};

// Re-export from core for convenience
pub use wordedge_core::{BoundaryTable, CoreError, ScanDirection, WordClassifier};
