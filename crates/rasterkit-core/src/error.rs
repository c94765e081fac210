//! Error types for rasterkit-core
//!
//! Every failure is detected synchronously and carries enough context for
//! diagnostics. Constructors validate up front; there is no recovery or
//! retry logic since all operations are pure and deterministic.

use crate::raster::PixelMode;
use thiserror::Error;

/// rasterkit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Rows of unequal length in a literal raster
    #[error("shape mismatch: row {row} has {actual} samples, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Sample value outside the declared mode's valid range
    #[error("unsupported value for {mode} mode: {value}")]
    UnsupportedMode { mode: PixelMode, value: u8 },

    /// Coordinates outside the raster
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw buffer length does not match the declared dimensions
    #[error("invalid data length: {len}, expected {expected}")]
    InvalidDataLength { len: usize, expected: usize },

    /// Two rasters with different dimensions
    #[error("incompatible raster sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Two rasters with different pixel modes, or the wrong mode for an operation
    #[error("pixel mode mismatch: expected {expected}, got {actual}")]
    ModeMismatch {
        expected: PixelMode,
        actual: PixelMode,
    },
}

/// Result type alias for rasterkit-core operations
pub type Result<T> = std::result::Result<T, Error>;
