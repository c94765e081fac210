//! Error types for rasterkit-morph

use rasterkit_core::PixelMode;
use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Structuring element origin outside the element's bounds
    #[error("invalid origin ({cx}, {cy}) for {width}x{height} structuring element")]
    InvalidOrigin {
        cx: u32,
        cy: u32,
        width: u32,
        height: u32,
    },

    /// Malformed structuring element
    #[error("invalid structuring element: {0}")]
    InvalidElement(String),

    /// Operation defined for binary rasters only
    #[error("operation requires a binary raster, got {0} mode")]
    BinaryRequired(PixelMode),

    /// Invalid sequence format
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
