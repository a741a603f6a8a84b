//! Error types for PGM decoding.

use thiserror::Error;

/// Error types for plain-text PGM decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Fewer lines than the four header lines.
    #[error("Missing header: expected at least 4 lines, found {found}")]
    MissingHeader { found: usize },

    /// The dimensions line is not two integers.
    #[error("Invalid dimensions line: {0:?}")]
    InvalidDimensions(String),

    /// The max gray line is not a single integer.
    #[error("Invalid max gray value: {0:?}")]
    InvalidMaxGray(String),

    /// A pixel token is not an integer.
    #[error("Invalid pixel value {token:?} on line {line}")]
    InvalidPixel { line: usize, token: String },

    /// The input bytes are not valid UTF-8.
    #[error("Input is not valid UTF-8 text")]
    InvalidEncoding,
}
