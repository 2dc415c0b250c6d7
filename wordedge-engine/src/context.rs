//! Minimal unique context
//!
//! Given a target range inside a text, find the shortest surrounding context
//! that makes `prefix + target + suffix` occur exactly once. The prefix loses
//! words from its start (a forward window), the suffix loses words from its
//! end (a backward window), so the words nearest to the target survive.

use crate::config::{EngineConfig, TrimOrder};
use crate::error::{EngineError, Result};
use crate::window::WordWindow;
use std::ops::Range;
use wordedge_core::ScanDirection;

/// Result of context trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalContext {
    /// Context kept before the target
    pub prefix: String,
    /// The target text itself
    pub target: String,
    /// Context kept after the target
    pub suffix: String,
    /// Whether `prefix + target + suffix` occurs exactly once
    pub unique: bool,
}

impl MinimalContext {
    /// The full matched text, prefix through suffix
    pub fn matched_text(&self) -> String {
        let mut text =
            String::with_capacity(self.prefix.len() + self.target.len() + self.suffix.len());
        text.push_str(&self.prefix);
        text.push_str(&self.target);
        text.push_str(&self.suffix);
        text
    }
}

/// Count occurrences of `needle` in `haystack`, overlapping ones included
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return haystack.chars().count() + 1;
    }

    let step = needle.chars().next().map_or(1, char::len_utf8);
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        start += pos + step;
    }
    count
}

/// Trims surrounding context down to the minimum that stays unique
#[derive(Debug, Clone, Default)]
pub struct ContextTrimmer {
    config: EngineConfig,
}

impl ContextTrimmer {
    /// Create a trimmer from an engine configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Find the minimal unique context around `range` (character offsets)
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidRange`] unless `range.start < range.end <= len`.
    pub fn minimize(&self, haystack: &str, range: Range<usize>) -> Result<MinimalContext> {
        let chars: Vec<char> = haystack.chars().collect();
        if range.start >= range.end || range.end > chars.len() {
            return Err(EngineError::InvalidRange {
                start: range.start,
                end: range.end,
                len: chars.len(),
            });
        }

        let target: String = chars[range.clone()].iter().collect();
        if count_occurrences(haystack, &target) == 1 {
            log::debug!("target {target:?} is unique without context");
            return Ok(MinimalContext {
                prefix: String::new(),
                target,
                suffix: String::new(),
                unique: true,
            });
        }

        let max = self.config.context.max_context_chars;
        let prefix: String = chars[range.start.saturating_sub(max)..range.start]
            .iter()
            .collect();
        let suffix_end = range.end.saturating_add(max).min(chars.len());
        let suffix: String = chars[range.end..suffix_end].iter().collect();

        if !is_unique(haystack, &prefix, &target, &suffix) {
            log::debug!("target {target:?} is ambiguous even with {max} chars of context");
            return Ok(MinimalContext {
                prefix,
                target,
                suffix,
                unique: false,
            });
        }

        let mut trim = Trim {
            haystack,
            target: &target,
            prefix: SideState::new(WordWindow::with_classifier(
                prefix,
                ScanDirection::Forward,
                self.config.classifier(),
            )),
            suffix: SideState::new(WordWindow::with_classifier(
                suffix,
                ScanDirection::Backward,
                self.config.classifier(),
            )),
        };

        match self.config.context.trim_order {
            TrimOrder::Alternate => {
                while trim.prefix.active || trim.suffix.active {
                    trim.step_prefix()?;
                    trim.step_suffix()?;
                }
            }
            TrimOrder::PrefixFirst => {
                while trim.prefix.active {
                    trim.step_prefix()?;
                }
                while trim.suffix.active {
                    trim.step_suffix()?;
                }
            }
            TrimOrder::SuffixFirst => {
                while trim.suffix.active {
                    trim.step_suffix()?;
                }
                while trim.prefix.active {
                    trim.step_prefix()?;
                }
            }
        }

        let prefix = trim.prefix.text().to_string();
        let suffix = trim.suffix.text().to_string();
        log::debug!("minimal context {prefix:?} [{target}] {suffix:?}");
        Ok(MinimalContext {
            prefix,
            target,
            suffix,
            unique: true,
        })
    }
}

fn is_unique(haystack: &str, prefix: &str, target: &str, suffix: &str) -> bool {
    let pattern = format!("{prefix}{target}{suffix}");
    count_occurrences(haystack, &pattern) == 1
}

/// One context side while trimming
struct SideState {
    window: WordWindow,
    active: bool,
    dropped: bool,
}

impl SideState {
    fn new(window: WordWindow) -> Self {
        Self {
            window,
            active: true,
            dropped: false,
        }
    }

    fn text(&self) -> &str {
        if self.dropped {
            ""
        } else {
            self.window.text()
        }
    }
}

struct Trim<'a> {
    haystack: &'a str,
    target: &'a str,
    prefix: SideState,
    suffix: SideState,
}

impl Trim<'_> {
    fn step_prefix(&mut self) -> Result<()> {
        if !self.prefix.active {
            return Ok(());
        }
        let (haystack, target, suffix) = (self.haystack, self.target, self.suffix.text());
        let shrunk = self
            .prefix
            .window
            .try_shrink(|candidate| is_unique(haystack, candidate, target, suffix))?;
        if !shrunk {
            self.prefix.active = false;
            self.prefix.dropped = is_unique(haystack, "", target, suffix);
            log::trace!("prefix settled, dropped: {}", self.prefix.dropped);
        }
        Ok(())
    }

    fn step_suffix(&mut self) -> Result<()> {
        if !self.suffix.active {
            return Ok(());
        }
        let (haystack, target, prefix) = (self.haystack, self.target, self.prefix.text());
        let shrunk = self
            .suffix
            .window
            .try_shrink(|candidate| is_unique(haystack, prefix, target, candidate))?;
        if !shrunk {
            self.suffix.active = false;
            self.suffix.dropped = is_unique(haystack, prefix, target, "");
            log::trace!("suffix settled, dropped: {}", self.suffix.dropped);
        }
        Ok(())
    }
}
