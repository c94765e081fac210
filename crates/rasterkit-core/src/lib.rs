//! rasterkit-core - Basic data structures for raster morphology
//!
//! This crate provides the fundamental types used throughout rasterkit:
//!
//! - [`Raster`] - A row-major 2-D grid of pixel samples with explicit
//!   width, height, and pixel mode
//! - [`PixelMode`] - The numeric policy tag (binary or grayscale)
//! - Pixel-wise combinators ([`subtract`], [`xor`]) used to build
//!   residue transforms
//!
//! All invariants (rectangular shape, sample range) are enforced when a
//! raster is constructed or mutated, so operations that consume rasters
//! never have to re-validate pixel data.

pub mod arith;
pub mod error;
pub mod raster;

pub use arith::{subtract, xor};
pub use error::{Error, Result};
pub use raster::{PixelMode, Raster};
