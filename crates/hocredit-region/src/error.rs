//! Error types for hocredit-region

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] hocredit_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Empty image
    #[error("empty image: {width}x{height} has no pixels to process")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
