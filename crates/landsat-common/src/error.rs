//! Error types for Landsat calibration.

use thiserror::Error;

/// Result type alias using CalibrationError.
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Primary error type for metadata extraction and radiometric conversion.
#[derive(Debug, Error)]
pub enum CalibrationError {
    // === Metadata Errors ===
    #[error("Section not found in metadata: {section}")]
    SectionNotFound { section: String },

    #[error("Malformed metadata line '{line}': {reason}")]
    Format { line: String, reason: String },

    // === Conversion Errors ===
    #[error("Missing calibration key: {0}")]
    Lookup(String),

    #[error("Numeric error: {0}")]
    Numeric(String),

    #[error("Shape mismatch: values {values:?}, mask {mask:?}")]
    ShapeMismatch { values: Vec<usize>, mask: Vec<usize> },

    // === Input Errors ===
    #[error("Unsupported band number: {0} (expected 1-11)")]
    InvalidBand(u8),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CalibrationError {
    /// Create a SectionNotFound error.
    pub fn section_not_found(section: impl Into<String>) -> Self {
        Self::SectionNotFound {
            section: section.into(),
        }
    }

    /// Create a Format error for a metadata line.
    pub fn format(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a Lookup error for a missing key.
    pub fn lookup(key: impl Into<String>) -> Self {
        Self::Lookup(key.into())
    }

    /// Create a Numeric error.
    pub fn numeric(msg: impl Into<String>) -> Self {
        Self::Numeric(msg.into())
    }

    /// Stable short tag for this error, suitable for log fields and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            CalibrationError::SectionNotFound { .. } => "section_not_found",
            CalibrationError::Format { .. } => "format",
            CalibrationError::Lookup(_) => "lookup",
            CalibrationError::Numeric(_) => "numeric",
            CalibrationError::ShapeMismatch { .. } => "shape_mismatch",
            CalibrationError::InvalidBand(_) => "invalid_band",
            CalibrationError::Config(_) => "config",
        }
    }

    /// Whether the failure comes from a coefficient missing at conversion time.
    pub fn is_lookup(&self) -> bool {
        matches!(self, CalibrationError::Lookup(_))
    }
}
