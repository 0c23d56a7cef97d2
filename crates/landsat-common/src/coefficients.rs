//! Coefficient lookup structures produced by the extractor and consumed by the converter.

use crate::band::Band;
use crate::error::{CalibrationError, CalibrationResult};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};

/// Calibration coefficients keyed by their metadata key name.
///
/// Built fresh per extraction. Lookups through [`CoefficientTable::require`]
/// fail with [`CalibrationError::Lookup`] rather than defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoefficientTable {
    values: HashMap<String, f64>,
}

impl CoefficientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a coefficient, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    /// Get a coefficient if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get a coefficient that must be present.
    pub fn require(&self, key: &str) -> CalibrationResult<f64> {
        self.get(key).ok_or_else(|| CalibrationError::lookup(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Move every entry of `other` into this table.
    pub fn merge(&mut self, other: CoefficientTable) {
        self.values.extend(other.values);
    }
}

impl FromIterator<(String, f64)> for CoefficientTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CoefficientTable {
    type Item = (String, f64);
    type IntoIter = hash_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// K1/K2 thermal conversion constants for one TIRS band.
///
/// Each constant is extracted independently; either may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermalConstants {
    pub k1: Option<f64>,
    pub k2: Option<f64>,
}

impl ThermalConstants {
    pub fn new(k1: Option<f64>, k2: Option<f64>) -> Self {
        Self { k1, k2 }
    }

    /// Check that both constants were found.
    pub fn is_complete(&self) -> bool {
        self.k1.is_some() && self.k2.is_some()
    }

    /// Return `(k1, k2)` or a Lookup error naming the first absent key.
    pub fn require(&self, band: Band) -> CalibrationResult<(f64, f64)> {
        let (k1_key, k2_key) = band.thermal_keys();
        let k1 = self.k1.ok_or_else(|| CalibrationError::lookup(k1_key))?;
        let k2 = self.k2.ok_or_else(|| CalibrationError::lookup(k2_key))?;
        Ok((k1, k2))
    }
}
