//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error while building a fixture
    #[error("core error: {0}")]
    Core(#[from] bytewrite_core::Error),

    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// A fixture was requested for a character it cannot draw
    #[error("no synthetic glyph for {0:?}")]
    UnknownLetter(char),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
