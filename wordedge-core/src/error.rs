//! Core error types (deterministic only)

use core::fmt;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// The word consumer was handed an empty boundary table.
    ///
    /// This is a caller contract violation: an empty table is the exhaustion
    /// signal and the shrink loop must stop on it.
    InvalidState,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidState => {
                write!(f, "invalid state: boundary table is empty, no word left to consume")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_display() {
        let message = CoreError::InvalidState.to_string();
        assert!(message.starts_with("invalid state"));
        assert!(message.contains("empty"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_trait_implementation() {
        let error = CoreError::InvalidState;
        let _: &dyn std::error::Error = &error;
    }
}
