//! Serializable command results
//!
//! Commands build reports, formatters render them.

use serde::Serialize;
use wordedge_engine::{BoundaryTable, MinimalContext, ScanDirection, Shrink};

/// One command result for one input source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Boundary table of a whole buffer
    Scan(ScanReport),
    /// Word-by-word consumption of a buffer
    Consume(ConsumeReport),
    /// Minimal unique context around a target
    Context(ContextReport),
}

/// Result of the `scan` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Input name
    pub source: String,
    /// Scan direction
    pub direction: ScanDirection,
    /// Buffer length in characters
    pub length: usize,
    /// Boundary distances
    pub table: Vec<usize>,
    /// Text covered by each entry, read from the scan origin
    pub words: Vec<String>,
}

impl ScanReport {
    /// Build a report for `text` and its boundary table
    ///
    /// Entries beyond the text length are clamped, so a table that does not
    /// belong to `text` yields empty or truncated words.
    pub fn new(source: &str, text: &str, direction: ScanDirection, table: &BoundaryTable) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let length = chars.len();

        let mut words = Vec::with_capacity(table.len());
        let mut start = 0;
        for &distance in table.iter() {
            let end = distance.min(length);
            let from = start.min(end);
            let slice = match direction {
                ScanDirection::Forward => &chars[from..end],
                ScanDirection::Backward => &chars[length - end..length - from],
            };
            words.push(slice.iter().collect());
            start = end;
        }

        Self {
            source: source.to_string(),
            direction,
            length,
            table: table.to_vec(),
            words,
        }
    }
}

/// One step of the `consume` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumeStep {
    /// Reported length of the consumed word
    pub removed: usize,
    /// Whether this step exhausted the buffer without changing it
    pub terminal: bool,
    /// Buffer after the step
    pub text: String,
    /// Boundary table after the step
    pub table: Vec<usize>,
}

impl ConsumeStep {
    /// Record a shrink step and the window state it left behind
    pub fn new(step: Shrink, text: &str, table: &BoundaryTable) -> Self {
        Self {
            removed: step.reported_len(),
            terminal: step.is_terminal(),
            text: text.to_string(),
            table: table.to_vec(),
        }
    }
}

/// Result of the `consume` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumeReport {
    /// Input name
    pub source: String,
    /// Consumption direction
    pub direction: ScanDirection,
    /// Every step until exhaustion
    pub steps: Vec<ConsumeStep>,
}

/// Result of the `context` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextReport {
    /// Input name
    pub source: String,
    /// Target start, in characters
    pub start: usize,
    /// Target end (exclusive), in characters
    pub end: usize,
    /// Context before the target
    pub prefix: String,
    /// The target text
    pub target: String,
    /// Context after the target
    pub suffix: String,
    /// Whether the match is unique in the source
    pub unique: bool,
}

impl ContextReport {
    /// Wrap a trimming result
    pub fn new(source: &str, start: usize, end: usize, context: MinimalContext) -> Self {
        Self {
            source: source.to_string(),
            start,
            end,
            prefix: context.prefix,
            target: context.target,
            suffix: context.suffix,
            unique: context.unique,
        }
    }
}
