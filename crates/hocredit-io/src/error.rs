//! I/O error types
//!
//! Decoding failures from the `image` crate and structural problems with
//! the decoded samples are folded into one [`IoError`] so callers only need
//! to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format could not be determined or is not enabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The decoder rejected the data
    #[error("decode error: {0}")]
    Image(#[from] image::ImageError),

    /// An error from the core library (e.g. zero-sized image)
    #[error("core error: {0}")]
    Core(#[from] hocredit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
