//! Calibration coefficient and thermal constant extraction.

use crate::section::scan_section;
use landsat_common::{
    keys, Band, CalibrationError, CalibrationResult, CoefficientTable, ThermalConstants,
};
use tracing::debug;

/// Extract the rescaling factors for a band plus the scene-wide solar geometry.
///
/// Reflective bands (1-9) yield `REFLECTANCE_MULT_BAND_n` / `REFLECTANCE_ADD_BAND_n`,
/// thermal bands (10-11) yield `RADIANCE_MULT_BAND_n` / `RADIANCE_ADD_BAND_n`,
/// both from `LEVEL1_RADIOMETRIC_RESCALING`. `SUN_ELEVATION` and
/// `EARTH_SUN_DISTANCE` come from `IMAGE_ATTRIBUTES`.
///
/// Keys missing from the document are left out of the table; the converter
/// reports them when it needs them.
///
/// # Errors
///
/// - `InvalidBand` for band numbers outside 1-11
/// - `SectionNotFound` if either section is missing or unterminated
/// - `Format` if a matching line is not `KEY = number`
pub fn extract_calibration_coefficients(
    band_number: u8,
    metadata_text: &str,
) -> CalibrationResult<CoefficientTable> {
    let band = Band::new(band_number)?;
    let (mult_key, add_key) = band.rescaling_keys();

    let mut table = scan_section(
        metadata_text,
        keys::RADIOMETRIC_RESCALING,
        &[mult_key.as_str(), add_key.as_str()],
    )?;

    let attributes = scan_section(
        metadata_text,
        keys::IMAGE_ATTRIBUTES,
        &[keys::SUN_ELEVATION, keys::EARTH_SUN_DISTANCE],
    )?;
    table.merge(attributes);

    debug!(
        band = band_number,
        thermal = band.is_thermal(),
        keys = table.len(),
        "Extracted calibration coefficients"
    );

    Ok(table)
}

/// Extract the K1/K2 constants for a thermal band from `LEVEL1_THERMAL_CONSTANTS`.
///
/// Each constant is independently optional; no error is raised when one or
/// both are absent. Callers resolve them with [`ThermalConstants::require`].
/// Reflective bands have no constants, so for them a missing thermal section
/// yields an empty result.
///
/// # Errors
///
/// - `InvalidBand` for band numbers outside 1-11
/// - `SectionNotFound` if the thermal section is missing or unterminated (bands 10-11)
/// - `Format` if a matching line is not `KEY = number`
pub fn extract_thermal_constraints(
    band_number: u8,
    metadata_text: &str,
) -> CalibrationResult<ThermalConstants> {
    let band = Band::new(band_number)?;
    let (k1_key, k2_key) = band.thermal_keys();

    let table = match scan_section(
        metadata_text,
        keys::THERMAL_CONSTANTS,
        &[k1_key.as_str(), k2_key.as_str()],
    ) {
        Err(CalibrationError::SectionNotFound { .. }) if band.is_reflective() => {
            debug!(band = band_number, "No thermal section; reflective band has no constants");
            return Ok(ThermalConstants::default());
        }
        other => other?,
    };

    let constants = ThermalConstants::new(table.get(&k1_key), table.get(&k2_key));

    debug!(
        band = band_number,
        k1_found = constants.k1.is_some(),
        k2_found = constants.k2.is_some(),
        "Extracted thermal constants"
    );

    Ok(constants)
}
