//! DN to brightness temperature and TOA reflectance conversion.
//!
//! Both conversions apply the linear rescaling `value = dn * mult + add` from
//! the band's MTL coefficients, then a band-type specific correction:
//!
//! - Thermal bands: Planck inverse with the K1/K2 constants, reported in °C
//! - Reflective bands: division by the sine of the sun elevation angle
//!
//! Physically implausible results are masked, not removed, so the output
//! always has the same shape as the input.

use crate::config::{ConversionConfig, RadiancePolicy};
use crate::raster::MaskedRaster;
use landsat_common::{keys, CalibrationError, CalibrationResult, CoefficientTable};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use num_traits::AsPrimitive;
use tracing::debug;

/// Offset between Kelvin and Celsius.
pub const KELVIN_TO_CELSIUS: f64 = 273.15;

/// Converts DN rasters using an explicit [`ConversionConfig`].
#[derive(Debug, Clone, Default)]
pub struct RadiometricConverter {
    config: ConversionConfig,
}

impl RadiometricConverter {
    /// Create a converter, rejecting an invalid configuration.
    pub fn new(config: ConversionConfig) -> CalibrationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a thermal band to brightness temperature in °C.
    ///
    /// Requires `RADIANCE_MULT_BAND_n` and `RADIANCE_ADD_BAND_n` in
    /// `coefficients`. Elements colder than the configured floor, with
    /// non-positive radiance, or with a non-finite result are masked. Under
    /// [`RadiancePolicy::Fail`] non-positive radiance aborts the call instead.
    pub fn brightness_temperature<A, S, D>(
        &self,
        band_number: u8,
        dn: &ArrayBase<S, D>,
        coefficients: &CoefficientTable,
        k1: f64,
        k2: f64,
    ) -> CalibrationResult<MaskedRaster<D>>
    where
        A: AsPrimitive<f64> + Send + Sync,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mult = coefficients.require(&keys::radiance_mult(band_number))?;
        let add = coefficients.require(&keys::radiance_add(band_number))?;

        let radiance = map_elements(dn, self.config.parallel, |value| value * mult + add);

        let non_positive = radiance.iter().filter(|&&r| r <= 0.0).count();
        if non_positive > 0 {
            if self.config.radiance_policy == RadiancePolicy::Fail {
                return Err(CalibrationError::numeric(format!(
                    "band {}: {} element(s) with non-positive radiance",
                    band_number, non_positive
                )));
            }
            debug!(
                band = band_number,
                count = non_positive,
                "Masking elements with non-positive radiance"
            );
        }

        let temperature = map_elements(&radiance, self.config.parallel, |r| {
            k2 / (k1 / r + 1.0).ln() - KELVIN_TO_CELSIUS
        });

        let floor = self.config.bt_floor_celsius;
        let valid = Zip::from(&radiance)
            .and(&temperature)
            .map_collect(|&r, &t| r > 0.0 && t.is_finite() && t >= floor);

        let (raw_min, raw_max) = finite_range(temperature.iter().copied());
        let masked = MaskedRaster::new(temperature, valid)?;
        debug!(
            band = band_number,
            raw_min = ?raw_min,
            raw_max = ?raw_max,
            min = ?masked.min(),
            max = ?masked.max(),
            masked = masked.masked_count(),
            "Computed brightness temperature"
        );

        Ok(masked)
    }

    /// Convert a reflective band to sun-elevation corrected TOA reflectance.
    ///
    /// Requires `REFLECTANCE_MULT_BAND_n`, `REFLECTANCE_ADD_BAND_n`,
    /// `SUN_ELEVATION` and `EARTH_SUN_DISTANCE`. The Earth-Sun distance is
    /// looked up but not applied. Elements below the configured floor or with
    /// a non-finite result are masked.
    ///
    /// # Errors
    ///
    /// `Numeric` if the sun elevation has a zero or non-finite sine, since
    /// every element would be undefined.
    pub fn toa_reflectance<A, S, D>(
        &self,
        band_number: u8,
        dn: &ArrayBase<S, D>,
        coefficients: &CoefficientTable,
    ) -> CalibrationResult<MaskedRaster<D>>
    where
        A: AsPrimitive<f64> + Send + Sync,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mult = coefficients.require(&keys::reflectance_mult(band_number))?;
        let add = coefficients.require(&keys::reflectance_add(band_number))?;
        let sun_elevation = coefficients.require(keys::SUN_ELEVATION)?;
        // Looked up, not applied.
        let earth_sun_distance = coefficients.require(keys::EARTH_SUN_DISTANCE)?;

        let sin_elevation = sun_elevation.to_radians().sin();
        if sin_elevation == 0.0 || !sin_elevation.is_finite() {
            return Err(CalibrationError::numeric(format!(
                "band {}: sun elevation {}° gives a zero divisor",
                band_number, sun_elevation
            )));
        }

        let reflectance = map_elements(dn, self.config.parallel, |value| {
            (value * mult + add) / sin_elevation
        });

        let floor = self.config.reflectance_floor;
        let masked = MaskedRaster::from_predicate(reflectance, |r| r.is_finite() && r >= floor);
        debug!(
            band = band_number,
            sun_elevation,
            earth_sun_distance,
            min = ?masked.min(),
            max = ?masked.max(),
            masked = masked.masked_count(),
            "Computed TOA reflectance"
        );

        Ok(masked)
    }
}

/// Brightness temperature (°C) with the default configuration.
///
/// See [`RadiometricConverter::brightness_temperature`].
pub fn calculate_rad_bt<A, S, D>(
    band_number: u8,
    dn: &ArrayBase<S, D>,
    coefficients: &CoefficientTable,
    k1: f64,
    k2: f64,
) -> CalibrationResult<MaskedRaster<D>>
where
    A: AsPrimitive<f64> + Send + Sync,
    S: Data<Elem = A>,
    D: Dimension,
{
    RadiometricConverter::default().brightness_temperature(band_number, dn, coefficients, k1, k2)
}

/// TOA reflectance with the default configuration.
///
/// See [`RadiometricConverter::toa_reflectance`].
pub fn calculate_toa_reflectance<A, S, D>(
    band_number: u8,
    dn: &ArrayBase<S, D>,
    coefficients: &CoefficientTable,
) -> CalibrationResult<MaskedRaster<D>>
where
    A: AsPrimitive<f64> + Send + Sync,
    S: Data<Elem = A>,
    D: Dimension,
{
    RadiometricConverter::default().toa_reflectance(band_number, dn, coefficients)
}

/// Apply `f` to every element as `f64`, optionally on the rayon pool.
fn map_elements<A, S, D, F>(input: &ArrayBase<S, D>, parallel: bool, f: F) -> Array<f64, D>
where
    A: AsPrimitive<f64> + Send + Sync,
    S: Data<Elem = A>,
    D: Dimension,
    F: Fn(f64) -> f64 + Send + Sync,
{
    if parallel {
        Zip::from(input).par_map_collect(|&value| f(value.as_()))
    } else {
        input.mapv(|value| f(value.as_()))
    }
}

/// Min/max over finite values, for diagnostics.
fn finite_range(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values
        .filter(|v| v.is_finite())
        .fold((None, None), |(min, max), v| {
            (
                Some(min.map_or(v, |m: f64| m.min(v))),
                Some(max.map_or(v, |m: f64| m.max(v))),
            )
        })
}
