use std::io;

/// Unrecoverable parsing errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Coordinate components must be finite numbers (lat: {lat}, lng: {lng})")]
    NonFiniteCoordinate { lat: f64, lng: f64 },

    #[error("Malformed coordinate string: {0:?}")]
    MalformedCoordinate(String),

    #[error("Invalid coordinate on line {line}: {text:?}")]
    InvalidCoordinate { line: usize, text: String },
}

/// Non-fatal issues encountered during lenient parsing
///
/// Every variant carries the 1-based line number of the offending line.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Line did not match the command grammar and was ignored
    UnrecognizedLine { line: usize, text: String },

    /// Coordinate string failed the DMS grammar, command skipped
    InvalidCoordinate { line: usize, text: String },

    /// Altitude in an unrecognized shape, field left unset
    InvalidAltitude { line: usize, text: String },

    /// Numeric or structural argument could not be parsed, command skipped
    InvalidArgument { line: usize, text: String },

    /// Circle or arc command issued before any center was assigned
    MissingCenter { line: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
