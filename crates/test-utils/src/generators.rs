//! Test data generators for creating synthetic DN rasters.
//!
//! These generators create predictable, verifiable DN patterns that can be
//! used across the test suite.

use ndarray::{Array, Array2, Array3, IxDyn};

/// Creates a DN raster with predictable values.
///
/// Each cell value is calculated as: `col * 100 + row`
///
/// # Example
///
/// ```
/// use test_utils::create_test_dn_grid;
///
/// let grid = create_test_dn_grid(10, 5);
/// assert_eq!(grid.dim(), (5, 10));
/// assert_eq!(grid[[0, 1]], 100);
/// assert_eq!(grid[[1, 0]], 1);
/// ```
pub fn create_test_dn_grid(width: usize, height: usize) -> Array2<u16> {
    Array2::from_shape_fn((height, width), |(row, col)| (col * 100 + row) as u16)
}

/// Creates a DN raster ramping linearly from `start` to `end` along the columns.
///
/// Every row is identical. Useful for exercising mask thresholds where the
/// crossing column is known in advance.
pub fn create_dn_ramp(width: usize, height: usize, start: u16, end: u16) -> Array2<u16> {
    let span = f64::from(end) - f64::from(start);
    let steps = width.saturating_sub(1).max(1) as f64;
    Array2::from_shape_fn((height, width), |(_, col)| {
        (f64::from(start) + span * col as f64 / steps).round() as u16
    })
}

/// Creates a DN raster filled with a single value.
pub fn create_constant_dn_grid(width: usize, height: usize, value: u16) -> Array2<u16> {
    Array2::from_elem((height, width), value)
}

/// Creates a stack of `bands` constant rasters, band `b` filled with `base + b`.
pub fn create_dn_stack(bands: usize, width: usize, height: usize, base: u16) -> Array3<u16> {
    Array3::from_shape_fn((bands, height, width), |(b, _, _)| base + b as u16)
}

/// Creates a dynamic-dimension raster from a flat vector.
///
/// # Panics
///
/// Panics if `values.len()` does not match the product of `shape`.
pub fn create_dyn_raster(shape: &[usize], values: Vec<u16>) -> Array<u16, IxDyn> {
    Array::from_shape_vec(IxDyn(shape), values).expect("shape does not match value count")
}

/// Creates a raster where `fill` marks scene-edge no-data cells.
///
/// The outer `border` rows and columns hold `fill` (0 for Landsat Level-1),
/// the interior holds `value`.
pub fn create_dn_grid_with_border(
    width: usize,
    height: usize,
    border: usize,
    value: u16,
    fill: u16,
) -> Array2<u16> {
    Array2::from_shape_fn((height, width), |(row, col)| {
        let edge = row < border || col < border || row + border >= height || col + border >= width;
        if edge {
            fill
        } else {
            value
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_dn_grid() {
        let grid = create_test_dn_grid(3, 2);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[[1, 2]], 201);
    }

    #[test]
    fn test_create_dn_ramp() {
        let ramp = create_dn_ramp(5, 2, 0, 40_000);
        assert_eq!(ramp[[0, 0]], 0);
        assert_eq!(ramp[[1, 4]], 40_000);
        assert_eq!(ramp[[0, 2]], 20_000);
    }

    #[test]
    fn test_create_dn_stack() {
        let stack = create_dn_stack(3, 4, 2, 10);
        assert_eq!(stack.dim(), (3, 2, 4));
        assert_eq!(stack[[2, 1, 3]], 12);
    }

    #[test]
    fn test_border_grid() {
        let grid = create_dn_grid_with_border(5, 5, 1, 9000, 0);
        assert_eq!(grid[[0, 0]], 0);
        assert_eq!(grid[[4, 2]], 0);
        assert_eq!(grid[[2, 2]], 9000);
        assert_eq!(grid.iter().filter(|&&v| v == 9000).count(), 9);
    }

    #[test]
    fn test_create_dyn_raster() {
        let raster = create_dyn_raster(&[2, 2], vec![1, 2, 3, 4]);
        assert_eq!(raster.ndim(), 2);
        assert_eq!(raster[[1usize, 0].as_slice()], 3);
    }
}
