//! Error types for callkey

use std::fmt;

use thiserror::Error;

/// Result type alias for key construction
pub type Result<T> = std::result::Result<T, KeyError>;

/// Where an argument sits in a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgPosition {
    /// Zero-based positional index
    Positional(usize),

    /// Keyword name
    Named(String),
}

impl fmt::Display for ArgPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgPosition::Positional(idx) => write!(f, "positional argument {}", idx),
            ArgPosition::Named(name) => write!(f, "named argument '{}'", name),
        }
    }
}

/// Failure to build a call key from a set of arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Argument holds a mutable value (list or map) that cannot be hashed
    #[error("Unhashable {kind} in {position}")]
    Unhashable {
        /// Offending argument
        position: ArgPosition,
        /// Kind of the first unhashable value found
        kind: &'static str,
    },
}

impl KeyError {
    /// Position of the argument that could not be keyed
    pub fn position(&self) -> &ArgPosition {
        match self {
            KeyError::Unhashable { position, .. } => position,
        }
    }
}
