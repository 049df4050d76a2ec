//! Error types for instant handling and calendar arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from instant parsing or calendar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp text could not be parsed.
    Parse(String),
    /// Instant (Unix milliseconds) lies outside the calendar range.
    OutOfRange(i64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "timestamp parse error: {msg}"),
            Self::OutOfRange(ms) => write!(f, "instant {ms} ms is outside the calendar range"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
