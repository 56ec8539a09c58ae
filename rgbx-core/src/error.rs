//! Error types for the color explorer.

use thiserror::Error;

/// Error codes for explorer failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Empty channel input (-1)
    EmptyInput = -1,
    /// Channel input is not a number in any accepted form (-2)
    MalformedInput = -2,
    /// Channel input parsed but lies outside 0-255 (-3)
    OutOfRange = -3,
    /// No preset with the given name (E100)
    UnknownPreset = 100,
    /// Sweep speed outside 1-10 (E101)
    InvalidSpeed = 101,
    /// Channel name not one of red/green/blue (E102)
    UnknownChannel = 102,
}

/// Rejected channel text entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty channel value")]
    Empty,

    #[error("'{input}' is not a decimal or hexadecimal channel value")]
    Malformed { input: String },

    #[error("'{input}' is outside the channel range 0-255")]
    OutOfRange { input: String },
}

impl ParseError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Empty => ErrorCode::EmptyInput,
            ParseError::Malformed { .. } => ErrorCode::MalformedInput,
            ParseError::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Main error type for the explorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error("Invalid channel value: {0}")]
    Parse(#[from] ParseError),

    #[error("Unknown preset color: {name}")]
    UnknownPreset { name: String },

    #[error("Invalid speed {speed}: expected a value between {min} and {max}")]
    InvalidSpeed { speed: u8, min: u8, max: u8 },

    #[error("Unknown channel '{name}': expected red, green or blue")]
    UnknownChannel { name: String },
}

impl ExplorerError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExplorerError::Parse(e) => e.code(),
            ExplorerError::UnknownPreset { .. } => ErrorCode::UnknownPreset,
            ExplorerError::InvalidSpeed { .. } => ErrorCode::InvalidSpeed,
            ExplorerError::UnknownChannel { .. } => ErrorCode::UnknownChannel,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
