//! Configuration for radiometric conversion.

use landsat_common::{CalibrationError, CalibrationResult};
use serde::{Deserialize, Serialize};

/// Configuration for the radiometric converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Brightness temperatures (°C) strictly below this are masked.
    pub bt_floor_celsius: f64,

    /// Reflectances strictly below this are masked.
    pub reflectance_floor: f64,

    /// How non-positive radiance in a thermal band is handled.
    pub radiance_policy: RadiancePolicy,

    /// Evaluate elementwise maps on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            bt_floor_celsius: -100.0,
            reflectance_floor: 0.0,
            radiance_policy: RadiancePolicy::Mask,
            parallel: true,
        }
    }
}

impl ConversionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RADIOMETRY_BT_FLOOR_C") {
            if let Ok(floor) = val.parse() {
                config.bt_floor_celsius = floor;
            }
        }

        if let Ok(val) = std::env::var("RADIOMETRY_REFLECTANCE_FLOOR") {
            if let Ok(floor) = val.parse() {
                config.reflectance_floor = floor;
            }
        }

        if let Ok(val) = std::env::var("RADIOMETRY_RADIANCE_POLICY") {
            config.radiance_policy = RadiancePolicy::from_str(&val);
        }

        if let Ok(val) = std::env::var("RADIOMETRY_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> CalibrationResult<()> {
        if !self.bt_floor_celsius.is_finite() {
            return Err(CalibrationError::Config(
                "bt_floor_celsius must be finite".to_string(),
            ));
        }

        if self.bt_floor_celsius < -273.15 {
            return Err(CalibrationError::Config(
                "bt_floor_celsius must not be below absolute zero".to_string(),
            ));
        }

        if !self.reflectance_floor.is_finite() {
            return Err(CalibrationError::Config(
                "reflectance_floor must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// Handling of thermal pixels whose radiance is zero or negative.
///
/// The Planck inverse is undefined there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiancePolicy {
    /// Mark the pixel invalid and continue.
    #[default]
    Mask,
    /// Fail the whole conversion with a numeric error.
    Fail,
}

impl RadiancePolicy {
    /// Parse from string (case-insensitive), defaulting to `Mask`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fail" | "error" | "strict" => Self::Fail,
            _ => Self::Mask,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mask => "mask",
            Self::Fail => "fail",
        }
    }
}

impl std::fmt::Display for RadiancePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
