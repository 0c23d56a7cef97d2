//! Common test fixtures for calibration tests.
//!
//! Reference coefficient values as published in Landsat 8 OLI/TIRS Level-1
//! metadata, and the values recorded in the committed sample scene.

/// Landsat 8 reference calibration values.
pub mod landsat8 {
    /// Reflectance gain shared by all OLI bands.
    pub const REFLECTANCE_MULT: f64 = 2.0e-5;
    /// Reflectance offset shared by all OLI bands.
    pub const REFLECTANCE_ADD: f64 = -0.1;

    /// TIRS radiance gain (bands 10 and 11).
    pub const RADIANCE_MULT_TIRS: f64 = 3.342e-4;
    /// TIRS radiance offset (bands 10 and 11).
    pub const RADIANCE_ADD_TIRS: f64 = 0.1;

    /// Band 10 thermal constants, rounded as in older MTL files.
    pub const K1_BAND_10: f64 = 774.89;
    pub const K2_BAND_10: f64 = 1321.08;

    /// Band 11 thermal constants.
    pub const K1_BAND_11: f64 = 480.8883;
    pub const K2_BAND_11: f64 = 1201.1442;

    /// Kelvin offset used for Celsius output.
    pub const KELVIN_OFFSET: f64 = 273.15;
}

/// Values recorded in `testdata/LC08_L1TP_sample_MTL.txt`.
pub mod sample_scene {
    /// Fixture file name.
    pub const MTL_FILE: &str = "LC08_L1TP_sample_MTL.txt";

    pub const SUN_ELEVATION: f64 = 65.06745530;
    pub const EARTH_SUN_DISTANCE: f64 = 1.0164606;
    pub const K1_BAND_10: f64 = 774.8853;
    pub const K2_BAND_10: f64 = 1321.0789;
    pub const RADIANCE_MULT_BAND_4: f64 = 9.7978e-3;
}

/// Closed-form brightness temperature in Celsius.
pub fn expected_brightness_temperature(dn: f64, mult: f64, add: f64, k1: f64, k2: f64) -> f64 {
    let radiance = dn * mult + add;
    k2 / (k1 / radiance + 1.0).ln() - landsat8::KELVIN_OFFSET
}

/// Closed-form sun-elevation corrected TOA reflectance.
pub fn expected_toa_reflectance(dn: f64, mult: f64, add: f64, sun_elevation_deg: f64) -> f64 {
    (dn * mult + add) / sun_elevation_deg.to_radians().sin()
}
