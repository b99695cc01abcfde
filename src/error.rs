//! Error types for color parsing and validation.

use thiserror::Error;

/// Errors that can occur when constructing or parsing colors.
///
/// Degenerate conversions (achromatic grays, pure black/white) are handled as
/// defined branches inside the conversion functions and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex string is not six hexadecimal digits after an optional `#`
    #[error("invalid hex color: {message}")]
    InvalidFormat {
        /// Description of the malformed input
        message: String,
    },

    /// Hue, saturation, or value/lightness argument outside its documented domain
    #[error("{what} out of range: {value} (maximum {max})")]
    OutOfRange {
        /// Name of the offending component
        what: &'static str,
        /// The value that was passed
        value: u16,
        /// Largest accepted value
        max: u16,
    },
}

impl ColorError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an out of range error for a named component.
    pub fn out_of_range(what: &'static str, value: u16, max: u16) -> Self {
        Self::OutOfRange { what, value, max }
    }
}
