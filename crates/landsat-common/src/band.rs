//! Landsat 8/9 OLI/TIRS band numbers and the metadata key names derived from them.

use crate::error::{CalibrationError, CalibrationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata section and key names used by Level-1 MTL documents.
pub mod keys {
    /// Section holding per-band rescaling gains and offsets.
    pub const RADIOMETRIC_RESCALING: &str = "LEVEL1_RADIOMETRIC_RESCALING";
    /// Section holding scene-wide acquisition attributes.
    pub const IMAGE_ATTRIBUTES: &str = "IMAGE_ATTRIBUTES";
    /// Section holding K1/K2 constants for the TIRS bands.
    pub const THERMAL_CONSTANTS: &str = "LEVEL1_THERMAL_CONSTANTS";

    /// Sun elevation angle in degrees.
    pub const SUN_ELEVATION: &str = "SUN_ELEVATION";
    /// Earth-Sun distance in astronomical units.
    pub const EARTH_SUN_DISTANCE: &str = "EARTH_SUN_DISTANCE";

    pub fn reflectance_mult(band: u8) -> String {
        format!("REFLECTANCE_MULT_BAND_{}", band)
    }

    pub fn reflectance_add(band: u8) -> String {
        format!("REFLECTANCE_ADD_BAND_{}", band)
    }

    pub fn radiance_mult(band: u8) -> String {
        format!("RADIANCE_MULT_BAND_{}", band)
    }

    pub fn radiance_add(band: u8) -> String {
        format!("RADIANCE_ADD_BAND_{}", band)
    }

    pub fn k1_constant(band: u8) -> String {
        format!("K1_CONSTANT_BAND_{}", band)
    }

    pub fn k2_constant(band: u8) -> String {
        format!("K2_CONSTANT_BAND_{}", band)
    }
}

/// A validated spectral band number (1-11).
///
/// Bands 1-9 are reflective (OLI) and carry reflectance rescaling factors;
/// bands 10 and 11 are thermal (TIRS) and carry radiance factors plus K1/K2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Band(u8);

impl Band {
    /// Lowest supported band number.
    pub const MIN: u8 = 1;
    /// Highest supported band number.
    pub const MAX: u8 = 11;
    /// First thermal band.
    pub const FIRST_THERMAL: u8 = 10;

    /// Create a band, rejecting numbers outside 1-11.
    pub fn new(number: u8) -> CalibrationResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CalibrationError::InvalidBand(number))
        }
    }

    /// All supported bands in ascending order.
    pub fn all() -> impl Iterator<Item = Band> {
        (Self::MIN..=Self::MAX).map(Band)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Check if this is a TIRS (thermal infrared) band.
    pub fn is_thermal(&self) -> bool {
        self.0 >= Self::FIRST_THERMAL
    }

    /// Check if this is an OLI (reflective) band.
    pub fn is_reflective(&self) -> bool {
        !self.is_thermal()
    }

    /// Multiplicative and additive rescaling key names for this band.
    ///
    /// Reflective bands use the reflectance factors, thermal bands the
    /// radiance factors.
    pub fn rescaling_keys(&self) -> (String, String) {
        if self.is_thermal() {
            (keys::radiance_mult(self.0), keys::radiance_add(self.0))
        } else {
            (keys::reflectance_mult(self.0), keys::reflectance_add(self.0))
        }
    }

    /// K1 and K2 thermal constant key names for this band.
    pub fn thermal_keys(&self) -> (String, String) {
        (keys::k1_constant(self.0), keys::k2_constant(self.0))
    }
}

impl TryFrom<u8> for Band {
    type Error = CalibrationError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Band::new(number)
    }
}

impl From<Band> for u8 {
    fn from(band: Band) -> Self {
        band.0
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.0)
    }
}
