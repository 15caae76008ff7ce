//! Error handling for TileKit
//!
//! Provides the error types shared by every layer of the visualizer:
//! - Design errors (invalid dimensions, patterns, colors, grout widths)
//! - A crate-level `Error` wrapper for callers that mix error sources
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design model error type
///
/// Raised when a control value or a persisted record would violate one of the
/// design invariants (positive dimensions, known pattern, quantized grout).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A physical dimension is zero, negative, or not finite
    #[error("Invalid {field}: {value} (must be a positive number)")]
    InvalidDimension {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A price is negative or not finite
    #[error("Invalid tile price: {0}")]
    InvalidPrice(f64),

    /// The pattern name is not one of the six supported layouts
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// The grout width is not one of the supported sixteenth-inch steps
    #[error("Unsupported grout width: {0} in")]
    UnsupportedGroutWidth(f64),

    /// The color is neither `#RRGGBB` nor a known swatch name
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A numeric control value could not be parsed
    #[error("Invalid number '{input}': {reason}")]
    InvalidNumber {
        /// The raw input text.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
}

/// Main error type for TileKit
#[derive(Error, Debug)]
pub enum Error {
    /// Design model error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for design model operations.
pub type DesignResult<T> = std::result::Result<T, DesignError>;

/// Result type alias using TileKit's Error type.
pub type Result<T> = std::result::Result<T, Error>;
