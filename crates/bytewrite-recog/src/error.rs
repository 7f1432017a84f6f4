//! Error types for bytewrite-recog

use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bytewrite_core::Error),

    /// Transform library error
    #[error("transform error: {0}")]
    Transform(#[from] bytewrite_transform::TransformError),

    /// Color processing error
    #[error("color error: {0}")]
    Color(#[from] bytewrite_color::ColorError),

    /// Image I/O error, including [`bytewrite_io::IoError::ImageLoadFailed`]
    #[error("image I/O error: {0}")]
    Io(#[from] bytewrite_io::IoError),

    /// A sample directory could not be listed
    #[error("sample directory error: {0}")]
    SampleDir(#[from] std::io::Error),

    /// The image holds no ink after binarization
    #[error("no ink detected in image")]
    NoInkDetected,

    /// Every letter class has an empty sample list
    #[error("no reference samples available")]
    NoReferenceData,

    /// Sample labels must be lowercase ASCII letters
    #[error("invalid sample label {0:?}: expected 'a'..='z'")]
    InvalidLabel(char),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A background task ended without producing a result
    #[error("background task failed: {0}")]
    TaskFailed(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
