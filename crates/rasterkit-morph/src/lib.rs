//! rasterkit-morph - Structuring-element morphology engine
//!
//! This crate provides morphological operations over [`rasterkit_core`]
//! rasters:
//!
//! - Structuring elements with shape generators (rectangle, ellipse,
//!   cross), literal kernels, and relocatable origins
//! - Dilation, erosion, opening, and closing for binary and grayscale
//!   rasters through one shared neighborhood engine
//! - Border-artifact-free closing
//! - Morphological gradient, top-hat, and bottom-hat transforms
//! - Boundary extraction for binary rasters
//! - Sequence operations for chaining transformations from a string
//!
//! Every operation is a pure function: it consumes read-only inputs and
//! returns a freshly allocated raster of identical dimensions.

mod error;
pub mod ops;
pub mod sel;
pub mod sequence;

pub use error::{MorphError, MorphResult};
pub use sel::{Shape, StructuringElement};

// Re-export the operation entry points
pub use ops::{
    BACKGROUND, BoundaryType, bottom_hat, close, close_safe, dilate, erode, extract_boundary,
    gradient, open, top_hat,
};

// Re-export sequence functions
pub use sequence::{MorphOp, MorphSequence, run_sequence};
