//! I/O error types
//!
//! Decoder and encoder failures from the `image` crate are folded into
//! [`IoError`] together with the offending path, so callers only need to
//! handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The file is missing, unreadable, or not a decodable image
    #[error("failed to load image '{path}': {message}")]
    ImageLoadFailed { path: String, message: String },

    /// The image could not be encoded or written
    #[error("failed to write image '{path}': {message}")]
    ImageWriteFailed { path: String, message: String },

    /// An error from the core library (e.g. a zero-sized image)
    #[error("core error: {0}")]
    Core(#[from] bytewrite_core::Error),

    /// Downsampling after decode failed
    #[error("transform error: {0}")]
    Transform(#[from] bytewrite_transform::TransformError),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
