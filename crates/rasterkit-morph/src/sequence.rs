//! Morphological sequence operations
//!
//! Executes sequences of morphological operations specified as strings,
//! allowing flexible composition of transformations.
//!
//! # Sequence String Format
//!
//! Operations are separated by `+` and whitespace is ignored.
//! Each operation begins with a case-insensitive tag:
//!
//! - `d<w>.<h>` - Dilation with a w x h rectangular element
//! - `e<w>.<h>` - Erosion with a w x h rectangular element
//! - `o<w>.<h>` - Opening with a w x h rectangular element
//! - `c<w>.<h>` - Closing with a w x h rectangular element
//! - `tw<w>.<h>` - Top-hat (original - opening)
//! - `tb<w>.<h>` - Bottom-hat (closing - original)
//!
//! Every operation is valid in both pixel modes; the sequence runs in the
//! mode of the raster it is applied to.
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::{PixelMode, Raster};
//! use rasterkit_morph::sequence::{MorphSequence, run_sequence};
//!
//! let seq = MorphSequence::parse("o5.5 + e3.3").unwrap();
//! assert_eq!(seq.ops().len(), 2);
//!
//! let raster = Raster::new(PixelMode::Binary, 100, 100).unwrap();
//! let result = run_sequence(&raster, "d3.3 + e3.3").unwrap();
//! assert_eq!(result.width(), 100);
//! ```

use crate::error::{MorphError, MorphResult};
use crate::ops;
use crate::sel::StructuringElement;
use rasterkit_core::Raster;

/// A parsed morphological operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphOp {
    /// Dilation with a rectangular element
    Dilate { width: u32, height: u32 },
    /// Erosion with a rectangular element
    Erode { width: u32, height: u32 },
    /// Opening (erosion followed by dilation)
    Open { width: u32, height: u32 },
    /// Closing (dilation followed by erosion)
    Close { width: u32, height: u32 },
    /// Top-hat or bottom-hat residue
    Hat {
        /// true for top-hat (original - opening), false for bottom-hat
        /// (closing - original)
        white: bool,
        width: u32,
        height: u32,
    },
}

impl MorphOp {
    /// Get the width and height of the operation's structuring element
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            MorphOp::Dilate { width, height }
            | MorphOp::Erode { width, height }
            | MorphOp::Open { width, height }
            | MorphOp::Close { width, height }
            | MorphOp::Hat { width, height, .. } => (*width, *height),
        }
    }
}

/// A parsed morphological sequence
#[derive(Debug, Clone)]
pub struct MorphSequence {
    ops: Vec<MorphOp>,
}

impl MorphSequence {
    /// Parse a sequence string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_morph::sequence::MorphSequence;
    ///
    /// let seq = MorphSequence::parse("d3.3 + e5.5").unwrap();
    /// assert_eq!(seq.ops().len(), 2);
    /// ```
    pub fn parse(sequence: &str) -> MorphResult<Self> {
        if sequence.trim().is_empty() {
            return Err(MorphError::InvalidSequence("empty sequence".to_string()));
        }

        let parts: Vec<&str> = sequence.split('+').collect();
        let mut ops = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let op_str = part.trim();
            if op_str.is_empty() {
                return Err(MorphError::InvalidSequence(format!(
                    "empty operation at position {}",
                    i + 1
                )));
            }
            ops.push(Self::parse_operation(op_str)?);
        }

        Ok(MorphSequence { ops })
    }

    /// Parse a single operation string
    fn parse_operation(op_str: &str) -> MorphResult<MorphOp> {
        let op_str: String = op_str.chars().filter(|c| !c.is_whitespace()).collect();
        if op_str.is_empty() {
            return Err(MorphError::InvalidSequence("empty operation".to_string()));
        }

        let first_char = op_str.chars().next().unwrap().to_ascii_lowercase();

        match first_char {
            'd' | 'e' | 'o' | 'c' => {
                let (width, height) = Self::parse_dimensions(&op_str[1..])?;
                let op = match first_char {
                    'd' => MorphOp::Dilate { width, height },
                    'e' => MorphOp::Erode { width, height },
                    'o' => MorphOp::Open { width, height },
                    'c' => MorphOp::Close { width, height },
                    _ => unreachable!(),
                };
                Ok(op)
            }
            't' => {
                // Hat residues: tw<w>.<h> or tb<w>.<h>
                if op_str.len() < 2 {
                    return Err(MorphError::InvalidSequence(format!(
                        "invalid hat operation: {op_str}"
                    )));
                }
                let hat_type = op_str.chars().nth(1).unwrap().to_ascii_lowercase();
                let white = match hat_type {
                    'w' => true,
                    'b' => false,
                    _ => {
                        return Err(MorphError::InvalidSequence(format!(
                            "invalid hat type '{hat_type}' in '{op_str}', expected 'w' or 'b'"
                        )));
                    }
                };
                let (width, height) = Self::parse_dimensions(&op_str[2..])?;
                Ok(MorphOp::Hat {
                    white,
                    width,
                    height,
                })
            }
            _ => Err(MorphError::InvalidSequence(format!(
                "unknown operation '{first_char}' in '{op_str}'"
            ))),
        }
    }

    /// Parse dimensions from a string like "3.5" -> (3, 5)
    fn parse_dimensions(dim_str: &str) -> MorphResult<(u32, u32)> {
        let parts: Vec<&str> = dim_str.split('.').collect();
        if parts.len() != 2 {
            return Err(MorphError::InvalidSequence(format!(
                "invalid dimensions format '{dim_str}', expected 'width.height'"
            )));
        }

        let width: u32 = parts[0].parse().map_err(|_| {
            MorphError::InvalidSequence(format!("invalid width '{}' in '{dim_str}'", parts[0]))
        })?;
        let height: u32 = parts[1].parse().map_err(|_| {
            MorphError::InvalidSequence(format!("invalid height '{}' in '{dim_str}'", parts[1]))
        })?;

        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSequence(format!(
                "dimensions must be > 0, got {width}x{height}"
            )));
        }

        Ok((width, height))
    }

    /// Get the operations in this sequence
    pub fn ops(&self) -> &[MorphOp] {
        &self.ops
    }

    /// Get the number of operations in the sequence
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Execute a morphological sequence on a raster.
///
/// Operations run left to right in the raster's own pixel mode.
///
/// # Examples
///
/// ```
/// use rasterkit_core::{PixelMode, Raster};
/// use rasterkit_morph::sequence::run_sequence;
///
/// let raster = Raster::new(PixelMode::Gray, 64, 64).unwrap();
/// let result = run_sequence(&raster, "o5.5 + c3.3").unwrap();
/// assert_eq!(result.height(), 64);
/// ```
pub fn run_sequence(raster: &Raster, sequence: &str) -> MorphResult<Raster> {
    let seq = MorphSequence::parse(sequence)?;

    let mut result = raster.clone();
    for op in seq.ops() {
        result = execute_op(&result, op)?;
    }
    Ok(result)
}

/// Execute a single operation
fn execute_op(raster: &Raster, op: &MorphOp) -> MorphResult<Raster> {
    let (width, height) = op.dimensions();
    let se = StructuringElement::rect(width, height)?;
    match op {
        MorphOp::Dilate { .. } => ops::dilate(raster, &se),
        MorphOp::Erode { .. } => ops::erode(raster, &se),
        MorphOp::Open { .. } => ops::open(raster, &se),
        MorphOp::Close { .. } => ops::close(raster, &se),
        MorphOp::Hat { white: true, .. } => ops::top_hat(raster, &se),
        MorphOp::Hat { white: false, .. } => ops::bottom_hat(raster, &se),
    }
}
