//! Masked raster output type.

use landsat_common::{CalibrationError, CalibrationResult};
use ndarray::{Array, Dimension, IxDyn, NdIndex, Zip};
use serde::{Deserialize, Serialize};

/// A floating-point raster with a per-element validity mask.
///
/// Masked elements keep the value that was computed for them, but every
/// accessor and statistic below skips them. Consumers writing the raster out
/// should use [`MaskedRaster::filled`] or the mask itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedRaster<D: Dimension> {
    values: Array<f64, D>,
    valid: Array<bool, D>,
}

/// Summary statistics over the valid elements of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of valid elements.
    pub valid: usize,
    /// Number of masked elements.
    pub masked: usize,
}

impl<D: Dimension> MaskedRaster<D> {
    /// Pair a value array with a validity mask of the same shape.
    pub fn new(values: Array<f64, D>, valid: Array<bool, D>) -> CalibrationResult<Self> {
        if values.shape() != valid.shape() {
            return Err(CalibrationError::ShapeMismatch {
                values: values.shape().to_vec(),
                mask: valid.shape().to_vec(),
            });
        }
        Ok(Self { values, valid })
    }

    /// Mask every element for which `is_valid` returns false.
    pub fn from_predicate<F>(values: Array<f64, D>, is_valid: F) -> Self
    where
        F: Fn(f64) -> bool,
    {
        let valid = values.mapv(is_valid);
        Self { values, valid }
    }

    /// A raster with every element valid.
    pub fn all_valid(values: Array<f64, D>) -> Self {
        let valid = Array::from_elem(values.raw_dim(), true);
        Self { values, valid }
    }

    /// Raw values, including those under the mask.
    pub fn values(&self) -> &Array<f64, D> {
        &self.values
    }

    /// Validity mask: `true` where the value is usable.
    pub fn valid_mask(&self) -> &Array<bool, D> {
        &self.valid
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` if it is masked or out of bounds.
    pub fn get<I>(&self, index: I) -> Option<f64>
    where
        I: NdIndex<D> + Copy,
    {
        match self.valid.get(index) {
            Some(true) => self.values.get(index).copied(),
            _ => None,
        }
    }

    /// Whether the element at `index` exists and is valid.
    pub fn is_valid<I>(&self, index: I) -> bool
    where
        I: NdIndex<D>,
    {
        self.valid.get(index).copied().unwrap_or(false)
    }

    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    pub fn masked_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Iterate over valid values in logical order.
    pub fn iter_valid(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .zip(self.valid.iter())
            .filter_map(|(&value, &ok)| ok.then_some(value))
    }

    pub fn min(&self) -> Option<f64> {
        self.iter_valid().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.iter_valid().reduce(f64::max)
    }

    /// Statistics over valid elements; `None` when everything is masked.
    pub fn stats(&self) -> Option<RasterStats> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut valid = 0usize;

        for value in self.iter_valid() {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            valid += 1;
        }

        if valid == 0 {
            return None;
        }

        Some(RasterStats {
            min,
            max,
            mean: sum / valid as f64,
            valid,
            masked: self.len() - valid,
        })
    }

    /// Copy of the values with masked elements replaced by `fill`.
    pub fn filled(&self, fill: f64) -> Array<f64, D> {
        Zip::from(&self.values)
            .and(&self.valid)
            .map_collect(|&value, &ok| if ok { value } else { fill })
    }

    /// Split into the value array and the validity mask.
    pub fn into_parts(self) -> (Array<f64, D>, Array<bool, D>) {
        (self.values, self.valid)
    }

    /// Erase the static dimensionality.
    pub fn into_dyn(self) -> MaskedRaster<IxDyn> {
        MaskedRaster {
            values: self.values.into_dyn(),
            valid: self.valid.into_dyn(),
        }
    }
}
