//! Word-by-word text window
//!
//! A [`WordWindow`] owns a buffer together with its boundary table and keeps
//! the two consistent while the buffer shrinks one word at a time from its
//! scan-origin edge.

use crate::error::Result;
use std::fmt;
use wordedge_core::{
    consume_first_word_with, scan_with, AlphanumericClassifier, BoundaryTable, ScanDirection,
    WordClassifier,
};

/// Outcome of a single shrink step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shrink {
    /// The buffer lost this many characters at its origin edge
    Consumed(usize),
    /// Only one word was left: the buffer is unchanged and the window is now
    /// exhausted. Carries the length that word accounts for.
    Terminal(usize),
}

impl Shrink {
    /// Reported length, whether or not the buffer changed
    pub fn reported_len(self) -> usize {
        match self {
            Shrink::Consumed(len) | Shrink::Terminal(len) => len,
        }
    }

    /// Whether this step exhausted the window
    pub fn is_terminal(self) -> bool {
        matches!(self, Shrink::Terminal(_))
    }
}

/// A text buffer that shrinks word by word from one edge
pub struct WordWindow {
    text: String,
    table: BoundaryTable,
    direction: ScanDirection,
    classifier: Box<dyn WordClassifier>,
}

impl fmt::Debug for WordWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordWindow")
            .field("text", &self.text)
            .field("table", &self.table.as_slice())
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl WordWindow {
    /// Create a window using the default alphanumeric policy
    pub fn new<S: Into<String>>(text: S, direction: ScanDirection) -> Self {
        Self::with_classifier(text, direction, Box::new(AlphanumericClassifier))
    }

    /// Create a window using a custom word classifier
    pub fn with_classifier<S: Into<String>>(
        text: S,
        direction: ScanDirection,
        classifier: Box<dyn WordClassifier>,
    ) -> Self {
        let text = text.into();
        let table = scan_with(&text, direction, classifier.as_ref());
        log::trace!(
            "seeded {direction} window of {} chars with {} entries",
            text.chars().count(),
            table.len()
        );
        Self {
            text,
            table,
            direction,
            classifier,
        }
    }

    /// Current buffer contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current scan direction
    pub fn direction(&self) -> ScanDirection {
        self.direction
    }

    /// Current boundary table
    pub fn table(&self) -> &BoundaryTable {
        &self.table
    }

    /// Number of words (table entries) left to consume
    pub fn remaining_words(&self) -> usize {
        self.table.len()
    }

    /// Whether the last word has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.table.is_empty()
    }

    /// Remove the first word from the origin edge
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError::InvalidState`](wordedge_core::CoreError) when
    /// the window is already exhausted.
    pub fn shrink(&mut self) -> Result<Shrink> {
        let removed = consume_first_word_with(
            &mut self.text,
            &mut self.table,
            self.direction,
            self.classifier.as_ref(),
        )?;

        let step = if self.table.is_empty() {
            Shrink::Terminal(removed)
        } else {
            Shrink::Consumed(removed)
        };
        log::trace!(
            "{} shrink {step:?}, {} entries left",
            self.direction,
            self.table.len()
        );
        Ok(step)
    }

    /// Shrink by one word if `accept` approves the text the step would leave
    ///
    /// The candidate is computed on a copy; the window only changes when the
    /// step is accepted. A terminal step (the last word) is never taken.
    pub fn try_shrink<F>(&mut self, accept: F) -> Result<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        if self.is_exhausted() {
            return Ok(false);
        }

        let mut text = self.text.clone();
        let mut table = self.table.clone();
        consume_first_word_with(
            &mut text,
            &mut table,
            self.direction,
            self.classifier.as_ref(),
        )?;
        if table.is_empty() || !accept(&text) {
            return Ok(false);
        }

        self.text = text;
        self.table = table;
        Ok(true)
    }

    /// Shrink while `accept` approves the text the next step would leave
    ///
    /// Stops at the first rejection or before the terminal step and returns
    /// the number of accepted steps.
    pub fn shrink_while<F>(&mut self, mut accept: F) -> Result<usize>
    where
        F: FnMut(&str) -> bool,
    {
        let mut accepted = 0;
        while self.try_shrink(&mut accept)? {
            accepted += 1;
        }
        Ok(accepted)
    }

    /// Change direction, re-scanning the current buffer
    pub fn set_direction(&mut self, direction: ScanDirection) {
        if direction != self.direction {
            self.direction = direction;
            self.table = scan_with(&self.text, direction, self.classifier.as_ref());
        }
    }

    /// Take the buffer out of the window
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use wordedge_core::{CoreError, ExtendedClassifier};

    #[test]
    fn test_shrink_forward_until_exhausted() {
        let mut window = WordWindow::new("Hello, world! This is a test.", ScanDirection::Forward);
        assert_eq!(window.remaining_words(), 7);

        assert_eq!(window.shrink().unwrap(), Shrink::Consumed(7));
        assert_eq!(window.text(), "world! This is a test.");
        assert_eq!(window.table(), &BoundaryTable::from([5, 11, 14, 16, 21, 22]));

        // The padding entry goes together with the last word.
        let mut steps = 1;
        while !window.is_exhausted() {
            window.shrink().unwrap();
            steps += 1;
        }
        assert_eq!(steps, 6);
        assert_eq!(window.text(), "test.");
    }

    #[test]
    fn test_terminal_step() {
        let mut window = WordWindow::new("foo ...", ScanDirection::Forward);
        let step = window.shrink().unwrap();
        assert_eq!(step, Shrink::Terminal(7));
        assert!(step.is_terminal());
        assert_eq!(step.reported_len(), 7);
        assert_eq!(window.text(), "foo ...");
        assert!(window.is_exhausted());
    }

    #[test]
    fn test_shrink_exhausted_window_errors() {
        let mut window = WordWindow::new("one", ScanDirection::Backward);
        assert_eq!(window.shrink().unwrap(), Shrink::Terminal(3));

        let err = window.shrink().unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::InvalidState)));
    }

    #[test]
    fn test_set_direction_rescans() {
        let mut window = WordWindow::new("Hello, world! This is a test.", ScanDirection::Forward);
        window.shrink().unwrap();

        window.set_direction(ScanDirection::Backward);
        assert_eq!(window.direction(), ScanDirection::Backward);
        assert_eq!(window.table(), &BoundaryTable::from([5, 7, 10, 15, 22]));

        assert_eq!(window.shrink().unwrap(), Shrink::Consumed(6));
        assert_eq!(window.into_text(), "world! This is a");
    }

    #[test]
    fn test_set_direction_revives_exhausted_window() {
        let mut window = WordWindow::new("foo ...", ScanDirection::Forward);
        window.shrink().unwrap();
        assert!(window.is_exhausted());

        window.set_direction(ScanDirection::Backward);
        assert_eq!(window.remaining_words(), 1);
    }

    #[test]
    fn test_shrink_while() {
        let mut window = WordWindow::new("one two three four", ScanDirection::Backward);
        let accepted = window.shrink_while(|text| text.len() >= 7).unwrap();
        assert_eq!(accepted, 2);
        assert_eq!(window.text(), "one two");
        assert_eq!(window.remaining_words(), 2);
    }

    #[test]
    fn test_shrink_while_stops_before_terminal_step() {
        let mut window = WordWindow::new("one two", ScanDirection::Forward);
        let accepted = window.shrink_while(|_| true).unwrap();
        assert_eq!(accepted, 1);
        assert_eq!(window.text(), "two");
        assert!(!window.is_exhausted());
    }

    #[test]
    fn test_try_shrink_rejected_leaves_window_untouched() {
        let mut window = WordWindow::new("alpha beta gamma", ScanDirection::Forward);
        let before = window.table().clone();

        assert!(!window.try_shrink(|_| false).unwrap());
        assert_eq!(window.text(), "alpha beta gamma");
        assert_eq!(window.table(), &before);

        assert!(window.try_shrink(|candidate| candidate == "beta gamma").unwrap());
        assert_eq!(window.text(), "beta gamma");
    }

    #[test]
    fn test_custom_classifier_window() {
        let classifier = Box::new(ExtendedClassifier::new(['\'']));
        let mut window =
            WordWindow::with_classifier("can't stop won't stop", ScanDirection::Forward, classifier);
        assert_eq!(window.remaining_words(), 4);
        assert_eq!(window.shrink().unwrap(), Shrink::Consumed(6));
        assert_eq!(window.text(), "stop won't stop");
    }

    #[test]
    fn test_debug_output() {
        let window = WordWindow::new("a b", ScanDirection::Forward);
        let debug = format!("{window:?}");
        assert!(debug.contains("WordWindow"));
        assert!(debug.contains("[1, 3]"));
    }
}
