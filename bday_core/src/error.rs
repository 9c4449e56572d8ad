//! Error types for the bday_core library.

use crate::period::Period;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bday_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("configuration error: {0}")]
    Config(String),

    /// Date text that is unparseable or not a real calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Period with a non-positive length used where recurrence math is needed
    #[error("invalid period: {0}")]
    InvalidPeriod(Period),

    /// Year-less date used where a concrete year is required
    #[error("date has no year")]
    NoYear,

    /// Birthday file line without a name and a date field
    #[error("line {line} malformatted")]
    MalformedLine { line: usize },

    /// Birthday file line whose date field does not parse
    #[error("line {line} contains invalid birthday")]
    InvalidBirthday { line: usize },
}
