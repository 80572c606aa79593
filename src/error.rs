//! Crate-level error types.

use std::fmt;

/// Errors produced by the flickstick crate.
#[derive(Debug)]
pub enum FlickstickError {
    /// Rejected engine configuration (non-positive range or threshold).
    InvalidOptions(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FlickstickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FlickstickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlickstickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
