//! Radiometric conversion of Landsat Level-1 digital numbers.
//!
//! This crate turns a band's DN raster into a geophysical quantity using the
//! coefficients extracted from the scene's MTL metadata:
//!
//! - **Reflective bands (1-9)**: top-of-atmosphere reflectance, corrected for
//!   sun elevation
//! - **Thermal bands (10-11)**: at-sensor brightness temperature in °C
//!
//! Every result is a [`MaskedRaster`] with the same shape as the input; values
//! that are physically implausible are masked rather than dropped.
//!
//! # Architecture
//!
//! ```text
//! DN raster (any ndarray shape, any numeric DN type)
//!      │
//!      ├─► rescale: dn * mult + add          (CoefficientTable lookup)
//!      │
//!      ├─► thermal:    k2 / ln(k1 / L + 1) - 273.15
//!      │   reflective: rho / sin(sun elevation)
//!      │
//!      └─► mask: BT < -100 °C, rho < 0, non-finite
//!               │
//!               ▼
//!          MaskedRaster
//! ```
//!
//! # Example
//!
//! ```ignore
//! use radiometry::calculate_toa_reflectance;
//!
//! let coefficients = mtl_parser::extract_calibration_coefficients(4, &mtl_text)?;
//! let reflectance = calculate_toa_reflectance(4, &dn, &coefficients)?;
//! println!("valid pixels: {}", reflectance.valid_count());
//! ```

pub mod config;
pub mod convert;
pub mod raster;

// Re-export commonly used types at crate root
pub use config::{ConversionConfig, RadiancePolicy};
pub use convert::{
    calculate_rad_bt, calculate_toa_reflectance, RadiometricConverter, KELVIN_TO_CELSIUS,
};
pub use landsat_common::{CalibrationError, CalibrationResult, CoefficientTable};
pub use raster::{MaskedRaster, RasterStats};
