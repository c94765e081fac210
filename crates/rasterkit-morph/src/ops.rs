//! Morphological operations
//!
//! One neighborhood engine serves both pixel modes: dilation takes the
//! maximum over the translated neighborhood and erosion the minimum, which
//! on binary {0, 1} samples coincide with logical OR and AND. Opening and
//! closing are plain two-step compositions of the primitives, so they
//! compose correctly regardless of mode.
//!
//! # Boundary policy
//!
//! Neighborhood positions outside the raster are treated as [`BACKGROUND`]:
//!
//! - Dilation never lets an out-of-bounds position suppress the result
//!   (max with background is the identity).
//! - Erosion includes out-of-bounds positions as background, so foreground
//!   touching the border erodes away.
//!
//! This asymmetric convention produces closing artifacts near the border;
//! [`close_safe`] pads the raster by the element's reach first to avoid
//! them.

use crate::error::{MorphError, MorphResult};
use crate::sel::StructuringElement;
use rasterkit_core::{PixelMode, Raster, subtract, xor};

/// Sample value assumed for every position outside the raster.
pub const BACKGROUND: u8 = 0;

#[derive(Clone, Copy)]
enum Primitive {
    Dilate,
    Erode,
}

/// Apply one primitive at every pixel position.
///
/// The output is always a freshly allocated raster of identical
/// dimensions; the input is never read through the buffer being written.
fn apply(src: &Raster, se: &StructuringElement, prim: Primitive) -> MorphResult<Raster> {
    let w = src.width();
    let h = src.height();
    let offsets: Vec<(i32, i32)> = se.offsets().collect();

    let mut out = Raster::new(src.mode(), w, h)?;
    for y in 0..h {
        for x in 0..w {
            let mut acc = match prim {
                Primitive::Dilate => BACKGROUND,
                Primitive::Erode => src.mode().max_value(),
            };
            for &(dx, dy) in &offsets {
                let sx = x as i32 + dx;
                let sy = y as i32 + dy;
                let in_bounds = sx >= 0 && sx < w as i32 && sy >= 0 && sy < h as i32;
                match prim {
                    Primitive::Dilate => {
                        if in_bounds {
                            acc = acc.max(src.get_unchecked(sx as u32, sy as u32));
                        }
                    }
                    Primitive::Erode => {
                        let v = if in_bounds {
                            src.get_unchecked(sx as u32, sy as u32)
                        } else {
                            BACKGROUND
                        };
                        acc = acc.min(v);
                    }
                }
                if matches!(prim, Primitive::Erode) && acc == BACKGROUND {
                    break;
                }
            }
            out.set_unchecked(x, y, acc);
        }
    }
    Ok(out)
}

/// Dilate a raster.
///
/// Each output pixel is the maximum (logical OR on binary rasters) over
/// the element's neighborhood. Expands foreground regions and fills small
/// gaps.
pub fn dilate(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    apply(src, se, Primitive::Dilate)
}

/// Erode a raster.
///
/// Each output pixel is the minimum (logical AND on binary rasters) over
/// the element's neighborhood, with out-of-bounds positions contributing
/// [`BACKGROUND`]. Shrinks foreground regions and removes objects smaller
/// than the element.
pub fn erode(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    apply(src, se, Primitive::Erode)
}

/// Open a raster: erosion followed by dilation.
///
/// Removes small protrusions and isolated noise while approximately
/// preserving the size of larger objects.
pub fn open(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    let eroded = erode(src, se)?;
    dilate(&eroded, se)
}

/// Close a raster: dilation followed by erosion.
///
/// Fills small holes and smooths concavities while approximately
/// preserving the overall silhouette.
pub fn close(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    let dilated = dilate(src, se)?;
    erode(&dilated, se)
}

/// Close a raster without boundary artifacts.
///
/// Plain [`close`] can erode pixels near the border that were only dilated
/// into the frame edge. This pads the raster by the element's maximum
/// reach on every side, closes, and strips the border again.
pub fn close_safe(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    let (rx, ry) = se.max_reach();
    if rx == 0 && ry == 0 {
        return close(src, se);
    }
    let padded = src.add_border(rx, rx, ry, ry)?;
    let closed = close(&padded, se)?;
    Ok(closed.remove_border(rx, rx, ry, ry)?)
}

/// Morphological gradient: dilation minus erosion.
///
/// Highlights edges and object boundaries.
pub fn gradient(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    let dilated = dilate(src, se)?;
    let eroded = erode(src, se)?;
    Ok(subtract(&dilated, &eroded)?)
}

/// Top-hat transform: original minus opening.
///
/// Extracts bright features smaller than the element.
pub fn top_hat(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    let opened = open(src, se)?;
    Ok(subtract(src, &opened)?)
}

/// Bottom-hat transform: closing minus original.
///
/// Extracts dark features smaller than the element.
pub fn bottom_hat(src: &Raster, se: &StructuringElement) -> MorphResult<Raster> {
    let closed = close(src, se)?;
    Ok(subtract(&closed, src)?)
}

/// Boundary type for [`extract_boundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    /// Background pixels just outside the foreground: (dilate 3x3) XOR original
    Outer,
    /// Foreground pixels on the inner edge: (erode 3x3) XOR original
    Inner,
}

/// Extract the boundary pixels of a binary raster's foreground components.
///
/// # Errors
///
/// Returns [`MorphError::BinaryRequired`] for a grayscale raster.
pub fn extract_boundary(src: &Raster, boundary_type: BoundaryType) -> MorphResult<Raster> {
    check_binary(src)?;
    let se = StructuringElement::rect(3, 3)?;
    let morphed = match boundary_type {
        BoundaryType::Outer => dilate(src, &se)?,
        BoundaryType::Inner => erode(src, &se)?,
    };
    Ok(xor(src, &morphed)?)
}

/// Check that the raster is binary.
fn check_binary(src: &Raster) -> MorphResult<()> {
    if src.mode() != PixelMode::Binary {
        return Err(MorphError::BinaryRequired(src.mode()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::PixelMode;

    fn center_square() -> Raster {
        // 5x5 with a 3x3 foreground square in the center
        let mut raster = Raster::new(PixelMode::Binary, 5, 5).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                raster.set_unchecked(x, y, 1);
            }
        }
        raster
    }

    #[test]
    fn test_dilate() {
        let raster = center_square();
        let se = StructuringElement::rect(3, 3).unwrap();

        let dilated = dilate(&raster, &se).unwrap();

        // The 3x3 square expands to fill the 5x5 frame
        assert_eq!(dilated.get_unchecked(0, 0), 1);
        assert_eq!(dilated.get_unchecked(4, 4), 1);
        assert_eq!(dilated.count_foreground(), 25);
    }

    #[test]
    fn test_erode() {
        let raster = center_square();
        let se = StructuringElement::rect(3, 3).unwrap();

        let eroded = erode(&raster, &se).unwrap();

        // The 3x3 square shrinks to its center pixel
        assert_eq!(eroded.get_unchecked(2, 2), 1);
        assert_eq!(eroded.count_foreground(), 1);
    }

    #[test]
    fn test_isolated_dot_erodes_away() {
        let mut raster = Raster::new(PixelMode::Binary, 5, 5).unwrap();
        raster.set_unchecked(2, 2, 1);
        let se = StructuringElement::rect(3, 3).unwrap();

        let eroded = erode(&raster, &se).unwrap();
        assert_eq!(eroded.count_foreground(), 0);
    }

    #[test]
    fn test_close_fills_one_pixel_hole() {
        // 3x3 foreground block with its center missing
        let mut raster = Raster::new(PixelMode::Binary, 5, 5).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                raster.set_unchecked(x, y, 1);
            }
        }
        raster.set_unchecked(2, 2, 0);
        let se = StructuringElement::rect(3, 3).unwrap();

        let closed = close(&raster, &se).unwrap();
        assert_eq!(closed, center_square());
    }

    #[test]
    fn test_identity_1x1() {
        let raster = center_square();
        let se = StructuringElement::rect(1, 1).unwrap();
        assert_eq!(dilate(&raster, &se).unwrap(), raster);
        assert_eq!(erode(&raster, &se).unwrap(), raster);
    }

    #[test]
    fn test_erosion_forces_border_removal() {
        // Foreground touching the border is removed even though every
        // in-bounds neighbor is foreground
        let mut raster = Raster::new(PixelMode::Binary, 4, 4).unwrap();
        raster.fill(1).unwrap();
        let se = StructuringElement::rect(3, 3).unwrap();

        let eroded = erode(&raster, &se).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let expected = u8::from(x >= 1 && x <= 2 && y >= 1 && y <= 2);
                assert_eq!(eroded.get_unchecked(x, y), expected);
            }
        }
    }

    #[test]
    fn test_off_center_origin_translates() {
        let mut raster = Raster::new(PixelMode::Binary, 7, 3).unwrap();
        raster.set_unchecked(3, 1, 1);

        let fg = |r: &Raster| -> Vec<(u32, u32)> {
            let mut v = Vec::new();
            for y in 0..r.height() {
                for x in 0..r.width() {
                    if r.get_unchecked(x, y) != 0 {
                        v.push((x, y));
                    }
                }
            }
            v
        };

        let mut se = StructuringElement::hline(3).unwrap();
        assert_eq!(fg(&dilate(&raster, &se).unwrap()), vec![(2, 1), (3, 1), (4, 1)]);

        se.set_origin(0, 0).unwrap();
        assert_eq!(fg(&dilate(&raster, &se).unwrap()), vec![(1, 1), (2, 1), (3, 1)]);

        se.set_origin(2, 0).unwrap();
        assert_eq!(fg(&dilate(&raster, &se).unwrap()), vec![(3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_open_removes_protrusion() {
        // A 3x3 block with a single-pixel protrusion on its right edge
        let mut raster = Raster::new(PixelMode::Binary, 7, 5).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                raster.set_unchecked(x, y, 1);
            }
        }
        raster.set_unchecked(4, 2, 1);
        let se = StructuringElement::rect(3, 3).unwrap();

        let opened = open(&raster, &se).unwrap();
        assert_eq!(opened.get_unchecked(4, 2), 0);
        // The block itself survives
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(opened.get_unchecked(x, y), 1);
            }
        }
    }

    #[test]
    fn test_close_safe_preserves_border_foreground() {
        // A full column at x=0: plain close erodes it at the corners,
        // safe close keeps it intact
        let mut raster = Raster::new(PixelMode::Binary, 6, 6).unwrap();
        for y in 0..6 {
            raster.set_unchecked(0, y, 1);
            raster.set_unchecked(1, y, 1);
        }
        let se = StructuringElement::rect(3, 3).unwrap();

        let safe = close_safe(&raster, &se).unwrap();
        assert_eq!(safe, raster);
        assert_eq!(safe.width(), raster.width());
        assert_eq!(safe.height(), raster.height());

        let plain = close(&raster, &se).unwrap();
        assert!(plain.count_foreground() <= safe.count_foreground());
    }

    #[test]
    fn test_gradient_marks_boundary() {
        let raster = center_square();
        let se = StructuringElement::rect(3, 3).unwrap();

        let grad = gradient(&raster, &se).unwrap();
        // Dilation fills the frame, erosion keeps only the center:
        // the gradient is everything but the center pixel
        assert_eq!(grad.get_unchecked(2, 2), 0);
        assert_eq!(grad.count_foreground(), 24);
    }

    #[test]
    fn test_top_hat_extracts_small_feature() {
        let mut raster = Raster::new(PixelMode::Binary, 9, 5).unwrap();
        // Large block that survives opening
        for y in 0..5 {
            for x in 0..5 {
                raster.set_unchecked(x, y, 1);
            }
        }
        // Isolated dot that does not
        raster.set_unchecked(7, 2, 1);
        let se = StructuringElement::rect(3, 3).unwrap();

        let hat = top_hat(&raster, &se).unwrap();
        assert_eq!(hat.get_unchecked(7, 2), 1);
        assert_eq!(hat.get_unchecked(2, 2), 0);
    }

    #[test]
    fn test_bottom_hat_extracts_hole() {
        let mut raster = center_square();
        raster.set_unchecked(2, 2, 0);
        let se = StructuringElement::rect(3, 3).unwrap();

        let hat = bottom_hat(&raster, &se).unwrap();
        assert_eq!(hat.get_unchecked(2, 2), 1);
        assert_eq!(hat.count_foreground(), 1);
    }

    #[test]
    fn test_extract_boundary() {
        let raster = center_square();

        let inner = extract_boundary(&raster, BoundaryType::Inner).unwrap();
        // Everything but the block's center is inner boundary
        assert_eq!(inner.count_foreground(), 8);
        assert_eq!(inner.get_unchecked(2, 2), 0);
        assert_eq!(inner.get_unchecked(1, 1), 1);

        let outer = extract_boundary(&raster, BoundaryType::Outer).unwrap();
        // The ring of background around the block
        assert_eq!(outer.count_foreground(), 16);
        assert_eq!(outer.get_unchecked(0, 0), 1);
        assert_eq!(outer.get_unchecked(1, 1), 0);
    }

    #[test]
    fn test_extract_boundary_requires_binary() {
        let raster = Raster::new(PixelMode::Gray, 5, 5).unwrap();
        let result = extract_boundary(&raster, BoundaryType::Inner);
        assert!(matches!(result, Err(MorphError::BinaryRequired(_))));
    }

    #[test]
    fn test_gray_dilate_erode() {
        let raster = Raster::from_rows(
            PixelMode::Gray,
            &[vec![10, 20, 30], vec![40, 50, 60], vec![70, 80, 90]],
        )
        .unwrap();
        let se = StructuringElement::rect(3, 3).unwrap();

        let dilated = dilate(&raster, &se).unwrap();
        assert_eq!(dilated.get_unchecked(0, 0), 50);
        assert_eq!(dilated.get_unchecked(1, 1), 90);
        assert_eq!(dilated.get_unchecked(2, 2), 90);

        let eroded = erode(&raster, &se).unwrap();
        // Border pixels see out-of-bounds background
        assert_eq!(eroded.get_unchecked(0, 0), 0);
        assert_eq!(eroded.get_unchecked(2, 2), 0);
        // The center sees the full in-bounds neighborhood
        assert_eq!(eroded.get_unchecked(1, 1), 10);
    }

    #[test]
    fn test_binary_matches_gray_on_01_samples() {
        // The shared engine gives identical results when the same {0,1}
        // samples are declared binary or grayscale
        let rows = vec![
            vec![0, 1, 0, 0, 1],
            vec![1, 1, 0, 1, 0],
            vec![0, 0, 1, 1, 0],
            vec![0, 1, 1, 0, 0],
        ];
        let binary = Raster::from_rows(PixelMode::Binary, &rows).unwrap();
        let gray = Raster::from_rows(PixelMode::Gray, &rows).unwrap();
        let se = StructuringElement::cross(3, 3).unwrap();

        assert_eq!(
            dilate(&binary, &se).unwrap().data(),
            dilate(&gray, &se).unwrap().data()
        );
        assert_eq!(
            erode(&binary, &se).unwrap().data(),
            erode(&gray, &se).unwrap().data()
        );
    }
}
