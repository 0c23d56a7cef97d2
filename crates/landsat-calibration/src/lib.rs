//! Landsat 8/9 Level-1 radiometric calibration.
//!
//! Ties the MTL metadata extractor to the radiometric converter:
//!
//! ```text
//! MTL text ──► mtl-parser ──► CoefficientTable ─┐
//!                         └─► ThermalConstants ─┤
//! DN raster ─────────────────────────────────────┴─► radiometry ──► MaskedRaster
//! ```
//!
//! Bands 1-9 are converted to TOA reflectance, bands 10-11 to brightness
//! temperature in °C.
//!
//! # Example
//!
//! ```ignore
//! use landsat_calibration::convert_band;
//!
//! let mtl = std::fs::read_to_string("LC08_..._MTL.txt")?;
//! let bt = convert_band(10, &mtl, &band10_dn)?;
//! println!("{:?}", bt.stats());
//! ```

use ndarray::{ArrayBase, Data, Dimension};
use num_traits::AsPrimitive;
use tracing::debug;

pub use landsat_common::{
    keys, Band, CalibrationError, CalibrationResult, CoefficientTable, ThermalConstants,
};
pub use mtl_parser::{
    extract_calibration_coefficients, extract_thermal_constraints, scan_section, MtlDocument,
};
pub use radiometry::{
    calculate_rad_bt, calculate_toa_reflectance, ConversionConfig, MaskedRaster, RadiancePolicy,
    RadiometricConverter, RasterStats, KELVIN_TO_CELSIUS,
};

/// Extract a band's coefficients from `metadata_text` and convert `dn`,
/// using the default [`ConversionConfig`].
pub fn convert_band<A, S, D>(
    band_number: u8,
    metadata_text: &str,
    dn: &ArrayBase<S, D>,
) -> CalibrationResult<MaskedRaster<D>>
where
    A: AsPrimitive<f64> + Send + Sync,
    S: Data<Elem = A>,
    D: Dimension,
{
    convert_band_with(&RadiometricConverter::default(), band_number, metadata_text, dn)
}

/// Like [`convert_band`], with an explicit converter.
///
/// Thermal bands additionally need both K1 and K2 in
/// `LEVEL1_THERMAL_CONSTANTS`; a missing constant is a `Lookup` error.
pub fn convert_band_with<A, S, D>(
    converter: &RadiometricConverter,
    band_number: u8,
    metadata_text: &str,
    dn: &ArrayBase<S, D>,
) -> CalibrationResult<MaskedRaster<D>>
where
    A: AsPrimitive<f64> + Send + Sync,
    S: Data<Elem = A>,
    D: Dimension,
{
    let band = Band::new(band_number)?;
    let coefficients = extract_calibration_coefficients(band_number, metadata_text)?;

    let result = if band.is_thermal() {
        let (k1, k2) = extract_thermal_constraints(band_number, metadata_text)?.require(band)?;
        converter.brightness_temperature(band_number, dn, &coefficients, k1, k2)?
    } else {
        converter.toa_reflectance(band_number, dn, &coefficients)?
    };

    debug!(
        band = %band,
        thermal = band.is_thermal(),
        valid = result.valid_count(),
        masked = result.masked_count(),
        "Converted band"
    );

    Ok(result)
}
