//! rasterkit - Structuring-element image morphology for Rust
//!
//! # Overview
//!
//! rasterkit implements the classic morphological operations over simple
//! row-major raster buffers:
//!
//! - Binary and grayscale rasters with validated sample ranges
//! - Structuring elements (rectangle, ellipse, cross, literal kernels)
//!   with relocatable origins
//! - Dilation, erosion, opening, closing, and the derived residue
//!   transforms (gradient, top-hat, bottom-hat)
//! - String-driven operation sequences
//!
//! # Example
//!
//! ```
//! use rasterkit::{PixelMode, Raster};
//! use rasterkit::morph::{self, StructuringElement};
//!
//! // A 5x5 binary raster with an isolated foreground dot
//! let mut raster = Raster::new(PixelMode::Binary, 5, 5).unwrap();
//! raster.set(2, 2, 1).unwrap();
//!
//! // Eroding with a 3x3 rectangle removes it
//! let se = StructuringElement::rect(3, 3).unwrap();
//! let eroded = morph::erode(&raster, &se).unwrap();
//! assert_eq!(eroded.count_foreground(), 0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export the morphology engine as a module
pub use rasterkit_morph as morph;
