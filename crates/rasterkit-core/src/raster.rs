//! Raster - the image buffer
//!
//! A [`Raster`] is a row-major 2-D grid of `u8` samples with explicit
//! width, height, and a [`PixelMode`] tag that declares the valid sample
//! range. Binary rasters hold {0, 1}; grayscale rasters hold [0, 255].
//!
//! # Invariants
//!
//! - The buffer is rectangular: `data.len() == width * height`, enforced
//!   at construction ([`Error::ShapeMismatch`] for ragged literal rows).
//! - Every sample is within the declared mode's range, enforced at
//!   construction and on every mutation ([`Error::UnsupportedMode`]);
//!   out-of-range values fail fast rather than being clamped.
//!
//! Rasters are plain values: cloning copies the buffer, and operations
//! that transform a raster always allocate a fresh output.

use crate::error::{Error, Result};
use std::fmt;

/// Numeric policy tag for a raster.
///
/// The mode declares the valid sample range and drives the interpretation
/// of morphological operations (logical OR/AND on binary rasters coincide
/// with max/min on their {0, 1} samples).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelMode {
    /// Samples constrained to {0, 1}
    Binary,
    /// Samples constrained to [0, 255]
    Gray,
}

impl PixelMode {
    /// The largest valid sample value for this mode.
    pub fn max_value(self) -> u8 {
        match self {
            PixelMode::Binary => 1,
            PixelMode::Gray => 255,
        }
    }

    /// Validate a sample value against this mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMode`] if `value` exceeds
    /// [`max_value`](Self::max_value).
    pub fn check_value(self, value: u8) -> Result<()> {
        if value > self.max_value() {
            return Err(Error::UnsupportedMode { mode: self, value });
        }
        Ok(())
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelMode::Binary => write!(f, "binary"),
            PixelMode::Gray => write!(f, "gray"),
        }
    }
}

/// Row-major 2-D grid of pixel samples.
///
/// # Examples
///
/// ```
/// use rasterkit_core::{PixelMode, Raster};
///
/// let mut raster = Raster::new(PixelMode::Binary, 5, 5).unwrap();
/// raster.set(2, 2, 1).unwrap();
/// assert_eq!(raster.get(2, 2), Some(1));
/// assert_eq!(raster.count_foreground(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    mode: PixelMode,
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster filled with background (0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(mode: PixelMode, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Raster {
            width,
            height,
            mode,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Create a raster from literal rows.
    ///
    /// All rows must have the same length and every sample must be valid
    /// for `mode`. Validation runs before any pixel is stored.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if `rows` is empty or the first row is
    ///   empty
    /// - [`Error::ShapeMismatch`] if any row differs in length from the
    ///   first
    /// - [`Error::UnsupportedMode`] if any sample is out of range for `mode`
    pub fn from_rows(mode: PixelMode, rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width as u32,
                height: height as u32,
            });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::ShapeMismatch {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            for &value in row {
                mode.check_value(value)?;
            }
        }

        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Raster {
            width: width as u32,
            height: height as u32,
            mode,
            data,
        })
    }

    /// Create a raster from a raw row-major buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if either dimension is zero
    /// - [`Error::InvalidDataLength`] if `data.len() != width * height`
    /// - [`Error::UnsupportedMode`] if any sample is out of range for `mode`
    pub fn from_raw(mode: PixelMode, width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidDataLength {
                len: data.len(),
                expected,
            });
        }
        for &value in &data {
            mode.check_value(value)?;
        }
        Ok(Raster {
            width,
            height,
            mode,
            data,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel mode.
    #[inline]
    pub fn mode(&self) -> PixelMode {
        self.mode
    }

    /// Get the raw row-major sample buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a sample at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a sample without bounds checking in the return type.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[self.index(x, y)]
    }

    /// Set a sample at (x, y).
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfBounds`] if the coordinates are outside the raster
    /// - [`Error::UnsupportedMode`] if `value` is out of range for the mode
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.mode.check_value(value)?;
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Set a sample without result plumbing.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds or `value` is out of
    /// range for the mode.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: u8) {
        assert!(x < self.width && y < self.height);
        assert!(value <= self.mode.max_value());
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Get row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Fill the whole raster with a single value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMode`] if `value` is out of range.
    pub fn fill(&mut self, value: u8) -> Result<()> {
        self.mode.check_value(value)?;
        self.data.fill(value);
        Ok(())
    }

    /// Count the samples that are not background.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Mode-aware complement (`max_value - v` per sample).
    ///
    /// Applying the complement twice returns the original raster.
    pub fn complement(&self) -> Raster {
        let max = self.mode.max_value();
        Raster {
            width: self.width,
            height: self.height,
            mode: self.mode,
            data: self.data.iter().map(|&v| max - v).collect(),
        }
    }

    /// Pad the raster with a background border on each side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the padded size overflows.
    pub fn add_border(&self, left: u32, right: u32, top: u32, bottom: u32) -> Result<Raster> {
        let width = self
            .width
            .checked_add(left)
            .and_then(|w| w.checked_add(right))
            .ok_or(Error::InvalidDimension {
                width: u32::MAX,
                height: self.height,
            })?;
        let height = self
            .height
            .checked_add(top)
            .and_then(|h| h.checked_add(bottom))
            .ok_or(Error::InvalidDimension {
                width,
                height: u32::MAX,
            })?;

        let mut out = Raster::new(self.mode, width, height)?;
        for y in 0..self.height {
            let src = self.row(y);
            let start = (y + top) as usize * width as usize + left as usize;
            out.data[start..start + self.width as usize].copy_from_slice(src);
        }
        Ok(out)
    }

    /// Strip a border from each side, returning the central region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the borders consume the whole
    /// raster.
    pub fn remove_border(&self, left: u32, right: u32, top: u32, bottom: u32) -> Result<Raster> {
        if left.saturating_add(right) >= self.width || top.saturating_add(bottom) >= self.height {
            return Err(Error::InvalidDimension {
                width: self.width.saturating_sub(left).saturating_sub(right),
                height: self.height.saturating_sub(top).saturating_sub(bottom),
            });
        }
        let width = self.width - left - right;
        let height = self.height - top - bottom;

        let mut out = Raster::new(self.mode, width, height)?;
        for y in 0..height {
            let start = (y + top) as usize * self.width as usize + left as usize;
            let dst = y as usize * width as usize;
            out.data[dst..dst + width as usize]
                .copy_from_slice(&self.data[start..start + width as usize]);
        }
        Ok(out)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
