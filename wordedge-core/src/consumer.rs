//! Word consumer
//!
//! Removes the first word (plus the separator run that follows it) from the
//! scan-origin edge of a buffer and keeps its boundary table in sync, so a
//! caller can shrink a text window one word at a time without rescanning.

use crate::boundary::BoundaryTable;
use crate::classify::{AlphanumericClassifier, WordClassifier};
use crate::direction::ScanDirection;
use crate::error::{CoreError, Result};

/// Consume the first word using the default alphanumeric policy
///
/// Returns the number of characters the first word accounts for. The table
/// loses at least one entry per call; the terminal step clears it. When only
/// one word remains the buffer is left untouched, the table is cleared and the
/// remaining length is returned: callers must check the table for emptiness to
/// detect exhaustion.
///
/// # Errors
///
/// [`CoreError::InvalidState`] if `table` is already empty.
///
/// # Example
///
/// ```rust
/// use wordedge_core::{consume_first_word, scan, ScanDirection};
///
/// let mut text = String::from("...foo!!! bar?");
/// let mut table = scan(&text, ScanDirection::Forward);
///
/// let removed = consume_first_word(&mut text, &mut table, ScanDirection::Forward).unwrap();
/// assert_eq!(removed, 10);
/// assert_eq!(text, "bar?");
/// assert_eq!(table, [3, 4]);
/// ```
pub fn consume_first_word(
    text: &mut String,
    table: &mut BoundaryTable,
    direction: ScanDirection,
) -> Result<usize> {
    consume_first_word_with(text, table, direction, &AlphanumericClassifier)
}

/// Consume the first word using a custom classifier
///
/// `classifier` must be the one the table was scanned with.
pub fn consume_first_word_with<C>(
    text: &mut String,
    table: &mut BoundaryTable,
    direction: ScanDirection,
    classifier: &C,
) -> Result<usize>
where
    C: WordClassifier + ?Sized,
{
    let first = *table.first().ok_or(CoreError::InvalidState)?;

    match table.len() {
        // Sole entry is the terminal word.
        1 => {
            table.clear();
            return Ok(first);
        }
        // Second entry is padding: only one real word is left.
        2 if !direction
            .units(text)
            .skip(first)
            .any(|ch| classifier.is_word_char(ch)) =>
        {
            let total = table[1];
            table.clear();
            return Ok(total);
        }
        _ => {}
    }

    let gap = direction
        .units(text)
        .skip(first)
        .take_while(|&ch| !classifier.is_word_char(ch))
        .count();
    let removed = first + gap;

    direction.strip_origin(text, removed);
    table.drop_first_and_rebase(removed);

    Ok(removed)
}
