/*!
 * Error types for the ass2vtt library.
 *
 * `ConversionError` covers everything that can halt a single ASS → WebVTT
 * conversion. `AppError` wraps it together with the file and configuration
 * failures of the application layer, using the thiserror crate for
 * ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that abort the conversion of one document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A styles section was reached before any `PlayResY` metadata
    #[error("Missing PlayResY in [Script Info]: font sizes cannot be made relative without a reference frame height")]
    MissingReferenceHeight,

    /// `PlayResY` is present but is not a positive number
    #[error("Invalid PlayResY value: '{0}'")]
    InvalidReferenceHeight(String),

    /// A Start/End field does not match `H:MM:SS.CC`
    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    /// A colour field is neither `&H`-prefixed hex nor a 32-bit decimal
    #[error("Invalid colour value: '{0}'")]
    InvalidColor(String),

    /// A numeric style field could not be parsed
    #[error("Invalid number in field {field}: '{value}'")]
    InvalidNumber {
        /// ASS field name
        field: String,
        /// Offending value
        value: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the conversion pipeline
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
