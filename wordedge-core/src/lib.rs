//! Bidirectional word-boundary scanning and incremental word consumption
//!
//! This crate grows or shrinks a textual match window one word at a time.
//! A [`scan`] of a buffer produces a [`BoundaryTable`]: cumulative character
//! distances from the scan-origin edge to the end of each word run, plus an
//! optional padding entry for trailing non-word content. The
//! [`consume_first_word`] operation then removes one word at a time from that
//! same edge while keeping the table consistent with the shrunk buffer.
//!
//! # Architecture
//!
//! - [`classify`]: the single word/non-word policy everything derives from
//! - [`direction`]: which edge is the scan origin
//! - [`scanner`]: buffer to boundary table
//! - [`consumer`]: in-place removal of the first word
//!
//! # Example
//!
//! ```rust
//! use wordedge_core::{consume_first_word, scan, ScanDirection};
//!
//! let mut text = String::from("Hello, world! This is a test.");
//! let mut table = scan(&text, ScanDirection::Backward);
//!
//! let removed = consume_first_word(&mut text, &mut table, ScanDirection::Backward).unwrap();
//! assert_eq!(removed, 6);
//! assert_eq!(text, "Hello, world! This is a");
//! assert_eq!(table, [1, 4, 9, 16, 23]);
//! ```

#![warn(missing_docs)]

pub mod boundary;
pub mod classify;
pub mod consumer;
pub mod direction;
pub mod error;
pub mod scanner;

pub use boundary::BoundaryTable;
pub use classify::{
    is_word_char, AlphanumericClassifier, CharacterClass, ExtendedClassifier, WordClassifier,
};
pub use consumer::{consume_first_word, consume_first_word_with};
pub use direction::{ParseDirectionError, ScanDirection, Units};
pub use error::{CoreError, Result};
pub use scanner::{scan, scan_with};
