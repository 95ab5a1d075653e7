//! Error types for the path crate.
//!
//! Parsing never fails (malformed numbers degrade to NaN), so every variant
//! here describes an editing call whose point reference no longer matches the
//! command sequence it is applied to.

use thiserror::Error;

/// Errors that can occur while editing a command sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The referenced command does not exist.
    #[error("Command index out of range: {index} (commands: {len})")]
    CommandOutOfRange { index: usize, len: usize },

    /// The referenced parameter group does not fit in the command.
    #[error("Parameter offset {offset} out of range for '{code}' with {len} parameters")]
    ParamOutOfRange {
        code: char,
        offset: usize,
        len: usize,
    },

    /// The command has no addressable point (closepath).
    #[error("Command '{0}' has no addressable point")]
    NoAddressablePoint(char),
}

/// Result type alias for path editing operations.
pub type PathResult<T> = Result<T, PathError>;
