//! Pixel-wise combinators
//!
//! Small building blocks used by the residue transforms (gradient,
//! top-hat, bottom-hat) and boundary extraction. Both operands are
//! validated before any pixel work begins.

use crate::error::{Error, Result};
use crate::raster::{PixelMode, Raster};

fn check_compatible(a: &Raster, b: &Raster) -> Result<()> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(Error::IncompatibleSizes(
            a.width(),
            a.height(),
            b.width(),
            b.height(),
        ));
    }
    if a.mode() != b.mode() {
        return Err(Error::ModeMismatch {
            expected: a.mode(),
            actual: b.mode(),
        });
    }
    Ok(())
}

/// Saturating per-sample difference `a - b`.
///
/// On binary rasters this is the set difference (a AND NOT b).
pub fn subtract(a: &Raster, b: &Raster) -> Result<Raster> {
    check_compatible(a, b)?;
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&va, &vb)| va.saturating_sub(vb))
        .collect();
    Raster::from_raw(a.mode(), a.width(), a.height(), data)
}

/// Per-sample symmetric difference of two binary rasters.
///
/// # Errors
///
/// Returns [`Error::ModeMismatch`] unless both rasters are binary.
pub fn xor(a: &Raster, b: &Raster) -> Result<Raster> {
    check_compatible(a, b)?;
    if a.mode() != PixelMode::Binary {
        return Err(Error::ModeMismatch {
            expected: PixelMode::Binary,
            actual: a.mode(),
        });
    }
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&va, &vb)| va ^ vb)
        .collect();
    Raster::from_raw(a.mode(), a.width(), a.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract_binary_is_and_not() {
        let a = Raster::from_rows(PixelMode::Binary, &[vec![1, 1, 0, 0]]).unwrap();
        let b = Raster::from_rows(PixelMode::Binary, &[vec![1, 0, 1, 0]]).unwrap();
        let diff = subtract(&a, &b).unwrap();
        assert_eq!(diff.row(0), &[0, 1, 0, 0]);
    }

    #[test]
    fn test_subtract_gray_saturates() {
        let a = Raster::from_rows(PixelMode::Gray, &[vec![10, 200]]).unwrap();
        let b = Raster::from_rows(PixelMode::Gray, &[vec![20, 50]]).unwrap();
        let diff = subtract(&a, &b).unwrap();
        assert_eq!(diff.row(0), &[0, 150]);
    }

    #[test]
    fn test_subtract_size_mismatch() {
        let a = Raster::new(PixelMode::Binary, 3, 3).unwrap();
        let b = Raster::new(PixelMode::Binary, 3, 4).unwrap();
        assert!(matches!(
            subtract(&a, &b),
            Err(Error::IncompatibleSizes(3, 3, 3, 4))
        ));
    }

    #[test]
    fn test_subtract_mode_mismatch() {
        let a = Raster::new(PixelMode::Binary, 3, 3).unwrap();
        let b = Raster::new(PixelMode::Gray, 3, 3).unwrap();
        assert!(matches!(subtract(&a, &b), Err(Error::ModeMismatch { .. })));
    }

    #[test]
    fn test_xor() {
        let a = Raster::from_rows(PixelMode::Binary, &[vec![1, 1, 0, 0]]).unwrap();
        let b = Raster::from_rows(PixelMode::Binary, &[vec![1, 0, 1, 0]]).unwrap();
        let x = xor(&a, &b).unwrap();
        assert_eq!(x.row(0), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_xor_requires_binary() {
        let a = Raster::new(PixelMode::Gray, 2, 2).unwrap();
        let b = Raster::new(PixelMode::Gray, 2, 2).unwrap();
        assert!(matches!(xor(&a, &b), Err(Error::ModeMismatch { .. })));
    }
}
