//! Boundary scanner
//!
//! Walks a buffer from its scan-origin edge and records the running
//! character count each time a word run ends. Non-word characters never emit
//! an entry on their own: leading punctuation is folded into the next run,
//! trailing punctuation is deferred to the next run or to the final padding
//! entry. Both directions share this one rule.

use crate::boundary::BoundaryTable;
use crate::classify::{AlphanumericClassifier, WordClassifier};
use crate::direction::ScanDirection;
use smallvec::SmallVec;

/// Scan `text` with the default alphanumeric policy
///
/// # Example
///
/// ```rust
/// use wordedge_core::{scan, ScanDirection};
///
/// let table = scan("Hello, world! This is a test.", ScanDirection::Forward);
/// assert_eq!(table, [5, 12, 18, 21, 23, 28, 29]);
///
/// let table = scan("Hello, world! This is a test.", ScanDirection::Backward);
/// assert_eq!(table, [5, 7, 10, 15, 22, 29]);
/// ```
pub fn scan(text: &str, direction: ScanDirection) -> BoundaryTable {
    scan_with(text, direction, &AlphanumericClassifier)
}

/// Scan `text` using a custom word classifier
///
/// The returned table is never empty. A buffer without word characters,
/// including the empty buffer, yields a single entry equal to its length.
pub fn scan_with<C>(text: &str, direction: ScanDirection, classifier: &C) -> BoundaryTable
where
    C: WordClassifier + ?Sized,
{
    let mut distances = SmallVec::new();
    let mut count = 0usize;
    let mut in_word = false;

    for ch in direction.units(text) {
        let is_word = classifier.is_word_char(ch);
        if in_word && !is_word {
            distances.push(count);
        }
        in_word = is_word;
        count += 1;
    }

    // Run touching the far edge
    if in_word {
        distances.push(count);
    }

    // Padding entry: trailing non-word content, or no words at all
    if distances.last() != Some(&count) {
        distances.push(count);
    }

    BoundaryTable::from_smallvec(distances)
}
