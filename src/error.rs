//! Error handling for the line code visualizer
//!
//! This module defines the crate error type and a Result alias used by the
//! encoder, the waveform builder and the configuration layer.

use thiserror::Error;

/// Main error type for line code operations
#[derive(Error, Debug)]
pub enum LineCodeError {
    /// A sequence element is not `'0'` or `'1'`
    #[error("Invalid bit {bit:?} at position {index}")]
    InvalidBit { index: usize, bit: char },

    /// A scheme name or index outside the supported line codes
    #[error("Unknown line code: {0}")]
    UnknownScheme(String),

    /// The bit sequence has no digits
    #[error("Empty bit sequence")]
    EmptySequence,

    /// The bit sequence exceeds the supported length
    #[error("Bit sequence too long: {len} digits (maximum {max})")]
    OversizeSequence { len: usize, max: usize },

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LineCodeError>,
    },
}

impl LineCodeError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LineCodeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Shift the position reported by an `InvalidBit` error.
    ///
    /// Used when a sub-slice was validated and the caller wants positions
    /// relative to the full input.
    pub fn offset_index(self, offset: usize) -> Self {
        match self {
            LineCodeError::InvalidBit { index, bit } => LineCodeError::InvalidBit {
                index: index + offset,
                bit,
            },
            other => other,
        }
    }
}

/// Result type alias for line code operations
pub type Result<T> = std::result::Result<T, LineCodeError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
