//! Common types shared by the metadata extractor and the radiometric converter.

pub mod band;
pub mod coefficients;
pub mod error;

pub use band::{keys, Band};
pub use coefficients::{CoefficientTable, ThermalConstants};
pub use error::{CalibrationError, CalibrationResult};
