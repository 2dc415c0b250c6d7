//! Scan direction
//!
//! A direction picks the scan-origin edge of a buffer: the start for
//! [`ScanDirection::Forward`], the end for [`ScanDirection::Backward`].
//! Distances are counted from that edge and the word consumer removes text
//! from that same edge.

use core::fmt;
use core::iter::Rev;
use core::str::{Chars, FromStr};

/// Which buffer edge scanning starts from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScanDirection {
    /// Scan from the start of the buffer towards its end
    #[default]
    Forward,
    /// Scan from the end of the buffer towards its start
    Backward,
}

impl ScanDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            ScanDirection::Forward => ScanDirection::Backward,
            ScanDirection::Backward => ScanDirection::Forward,
        }
    }

    /// Characters of `text` in scan order, starting at the origin edge
    pub fn units(self, text: &str) -> Units<'_> {
        match self {
            ScanDirection::Forward => Units::Forward(text.chars()),
            ScanDirection::Backward => Units::Backward(text.chars().rev()),
        }
    }

    /// Remove `count` characters from the origin edge of `text`
    ///
    /// Removing more characters than the buffer holds empties it.
    pub fn strip_origin(self, text: &mut String, count: usize) {
        if count == 0 {
            return;
        }
        match self {
            ScanDirection::Forward => {
                let cut = text
                    .char_indices()
                    .nth(count)
                    .map_or(text.len(), |(idx, _)| idx);
                text.replace_range(..cut, "");
            }
            ScanDirection::Backward => {
                let cut = text
                    .char_indices()
                    .rev()
                    .nth(count - 1)
                    .map_or(0, |(idx, _)| idx);
                text.truncate(cut);
            }
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            ScanDirection::Forward => "forward",
            ScanDirection::Backward => "backward",
        }
    }
}

impl fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown scan direction, expected 'forward' or 'backward'")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDirectionError {}

impl FromStr for ScanDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "fwd" | "ltr" | "right" => Ok(ScanDirection::Forward),
            "backward" | "bwd" | "rtl" | "left" => Ok(ScanDirection::Backward),
            _ => Err(ParseDirectionError),
        }
    }
}

/// Iterator over a buffer's characters in scan order
#[derive(Clone, Debug)]
pub enum Units<'a> {
    /// Start-to-end order
    Forward(Chars<'a>),
    /// End-to-start order
    Backward(Rev<Chars<'a>>),
}

impl Iterator for Units<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match self {
            Units::Forward(chars) => chars.next(),
            Units::Backward(chars) => chars.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Units::Forward(chars) => chars.size_hint(),
            Units::Backward(chars) => chars.size_hint(),
        }
    }
}
