//! Structuring elements
//!
//! A structuring element is a small boolean mask with a designated origin.
//! It defines the neighborhood shape and reference point used by the
//! morphological operations: applying an operation at pixel p visits the
//! positions obtained by translating the element's active offsets so the
//! origin aligns with p.
//!
//! The origin defaults to the geometric center and can be relocated
//! anywhere inside the element's bounding box; an origin outside the
//! bounds is rejected at construction time, never at apply time.

use crate::error::{MorphError, MorphResult};

/// Shape descriptor for the built-in element generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Full rectangle: every cell active
    Rect,
    /// Inscribed ellipse
    Ellipse,
    /// Center row and center column
    Cross,
}

/// Structuring element: a boolean mask plus an origin.
///
/// # Examples
///
/// ```
/// use rasterkit_morph::StructuringElement;
///
/// let se = StructuringElement::rect(3, 3).unwrap();
/// assert_eq!(se.origin(), (1, 1));
/// assert_eq!(se.active_count(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    mask: Vec<bool>,
}

impl StructuringElement {
    /// Create an element from a shape descriptor.
    ///
    /// The origin is placed at the geometric center
    /// `(width / 2, height / 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidElement`] if either dimension is zero.
    pub fn from_shape(shape: Shape, width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidElement(format!(
                "empty element: {width}x{height}"
            )));
        }
        let mask = match shape {
            Shape::Rect => vec![true; width as usize * height as usize],
            Shape::Cross => cross_mask(width, height),
            Shape::Ellipse => ellipse_mask(width, height),
        };
        Ok(StructuringElement {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            mask,
        })
    }

    /// Full rectangle of the given dimensions.
    pub fn rect(width: u32, height: u32) -> MorphResult<Self> {
        Self::from_shape(Shape::Rect, width, height)
    }

    /// Full square of the given size.
    pub fn square(size: u32) -> MorphResult<Self> {
        Self::from_shape(Shape::Rect, size, size)
    }

    /// Horizontal line of the given length.
    pub fn hline(length: u32) -> MorphResult<Self> {
        Self::from_shape(Shape::Rect, length, 1)
    }

    /// Vertical line of the given length.
    pub fn vline(length: u32) -> MorphResult<Self> {
        Self::from_shape(Shape::Rect, 1, length)
    }

    /// Inscribed ellipse of the given dimensions.
    ///
    /// A cell is active when its normalized distance from the center is at
    /// most 1. The 3x3 ellipse degenerates to the cross.
    pub fn ellipse(width: u32, height: u32) -> MorphResult<Self> {
        Self::from_shape(Shape::Ellipse, width, height)
    }

    /// Cross: the center row plus the center column.
    pub fn cross(width: u32, height: u32) -> MorphResult<Self> {
        Self::from_shape(Shape::Cross, width, height)
    }

    /// Create an element from literal boolean rows with an explicit origin.
    ///
    /// # Errors
    ///
    /// - [`MorphError::InvalidElement`] if the rows are empty, ragged, or
    ///   contain no active cell
    /// - [`MorphError::InvalidOrigin`] if `(cx, cy)` lies outside the rows
    pub fn from_rows(rows: &[Vec<bool>], cx: u32, cy: u32) -> MorphResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidElement("empty element".to_string()));
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MorphError::InvalidElement(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
        }
        let width = width as u32;
        let height = height as u32;
        if cx >= width || cy >= height {
            return Err(MorphError::InvalidOrigin {
                cx,
                cy,
                width,
                height,
            });
        }
        let mask: Vec<bool> = rows.iter().flatten().copied().collect();
        if !mask.iter().any(|&b| b) {
            return Err(MorphError::InvalidElement(
                "element has no active cell".to_string(),
            ));
        }
        Ok(StructuringElement {
            width,
            height,
            cx,
            cy,
            mask,
        })
    }

    /// Create an element from a text pattern with an explicit origin.
    ///
    /// One text row per element row; `'x'` marks an active cell, `'.'` an
    /// inactive one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_morph::StructuringElement;
    ///
    /// let se = StructuringElement::from_pattern(
    ///     ".x.\n\
    ///      xxx\n\
    ///      .x.",
    ///     1,
    ///     1,
    /// )
    /// .unwrap();
    /// assert_eq!(se.active_count(), 5);
    /// ```
    pub fn from_pattern(pattern: &str, cx: u32, cy: u32) -> MorphResult<Self> {
        let mut rows = Vec::new();
        for line in pattern.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for c in line.chars() {
                match c {
                    'x' | 'X' => row.push(true),
                    '.' => row.push(false),
                    _ => {
                        return Err(MorphError::InvalidElement(format!(
                            "unexpected character '{c}' in pattern"
                        )));
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(&rows, cx, cy)
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin as (cx, cy).
    #[inline]
    pub fn origin(&self) -> (u32, u32) {
        (self.cx, self.cy)
    }

    /// Relocate the origin.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidOrigin`] if `(cx, cy)` lies outside the
    /// element's bounding box.
    pub fn set_origin(&mut self, cx: u32, cy: u32) -> MorphResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(MorphError::InvalidOrigin {
                cx,
                cy,
                width: self.width,
                height: self.height,
            });
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get the cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.mask[(y * self.width + x) as usize])
    }

    /// Count the active cells.
    pub fn active_count(&self) -> usize {
        self.mask.iter().filter(|&&b| b).count()
    }

    /// Iterate over active positions relative to the origin.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.mask
            .iter()
            .enumerate()
            .filter_map(move |(idx, &active)| {
                if active {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }

    /// Largest absolute offset reach as (|dx|, |dy|) maxima.
    ///
    /// Used to size the padding border for artifact-free closing.
    pub fn max_reach(&self) -> (u32, u32) {
        let mut rx = 0;
        let mut ry = 0;
        for (dx, dy) in self.offsets() {
            rx = rx.max(dx.unsigned_abs());
            ry = ry.max(dy.unsigned_abs());
        }
        (rx, ry)
    }

    /// The 180-degree rotation, with the origin remapped accordingly.
    ///
    /// For an element symmetric about its center the reflection has the
    /// same offsets; for asymmetric kernels it is the adjoint element that
    /// makes erode-then-dilate a true (idempotent) opening.
    pub fn reflect(&self) -> Self {
        let mut mask = self.mask.clone();
        mask.reverse();
        StructuringElement {
            width: self.width,
            height: self.height,
            cx: self.width - 1 - self.cx,
            cy: self.height - 1 - self.cy,
            mask,
        }
    }
}

/// Mask for the cross shape: center row plus center column.
fn cross_mask(width: u32, height: u32) -> Vec<bool> {
    let cx = width / 2;
    let cy = height / 2;
    let mut mask = vec![false; width as usize * height as usize];
    for y in 0..height {
        for x in 0..width {
            if x == cx || y == cy {
                mask[(y * width + x) as usize] = true;
            }
        }
    }
    mask
}

/// Mask for the inscribed ellipse.
///
/// Semi-axes run to the bounding box edges; a degenerate axis (dimension 1)
/// collapses the ellipse to a line.
fn ellipse_mask(width: u32, height: u32) -> Vec<bool> {
    let a = (width - 1) as f64 / 2.0;
    let b = (height - 1) as f64 / 2.0;
    let cx = a;
    let cy = b;

    let term = |d: f64, r: f64| {
        if r == 0.0 {
            if d == 0.0 { 0.0 } else { f64::INFINITY }
        } else {
            (d / r) * (d / r)
        }
    };

    let mut mask = vec![false; width as usize * height as usize];
    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if term(dx, a) + term(dy, b) <= 1.0 {
                mask[(y * width + x) as usize] = true;
            }
        }
    }
    mask
}
