//! Parser for Landsat Level-1 MTL scene metadata.
//!
//! This crate extracts the radiometric calibration parameters a converter
//! needs from the plain-text `GROUP = ...` / `END_GROUP = ...` metadata that
//! ships with every Landsat 8/9 scene.
//!
//! # MTL Structure
//!
//! ```text
//! GROUP = LEVEL1_RADIOMETRIC_RESCALING
//!   RADIANCE_MULT_BAND_10 = 3.3420E-04
//!   RADIANCE_ADD_BAND_10 = 0.10000
//!   REFLECTANCE_MULT_BAND_4 = 2.0000E-05
//!   REFLECTANCE_ADD_BAND_4 = -0.100000
//! END_GROUP = LEVEL1_RADIOMETRIC_RESCALING
//! ```
//!
//! Only this section/key grammar is understood. The document is never fully
//! parsed; each extraction scans the one section it needs.
//!
//! # Example
//!
//! ```ignore
//! use mtl_parser::{extract_calibration_coefficients, extract_thermal_constraints};
//!
//! let coefficients = extract_calibration_coefficients(10, &mtl_text)?;
//! let thermal = extract_thermal_constraints(10, &mtl_text)?;
//! ```

pub mod extract;
pub mod section;

pub use extract::{extract_calibration_coefficients, extract_thermal_constraints};
pub use landsat_common::{CalibrationError, CalibrationResult, CoefficientTable, ThermalConstants};
pub use section::{parse_numeric_line, scan_section, section_text, MtlDocument, Section};
