//! Synthetic MTL metadata generation.
//!
//! Builds documents in the same `GROUP = ...` / `END_GROUP = ...` layout as
//! real Level-1 metadata so extraction can be tested against known values.

use landsat_common::{keys, CoefficientTable};

const SECTION_ORDER: [&str; 3] = [
    keys::IMAGE_ATTRIBUTES,
    keys::RADIOMETRIC_RESCALING,
    keys::THERMAL_CONSTANTS,
];

/// Builder for synthetic MTL documents.
///
/// # Example
///
/// ```
/// use test_utils::MtlBuilder;
///
/// let mtl = MtlBuilder::new()
///     .sun_elevation(45.0)
///     .reflectance(4, 2.0e-5, -0.1)
///     .build();
/// assert!(mtl.contains("REFLECTANCE_MULT_BAND_4 = 0.00002"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MtlBuilder {
    sections: Vec<(String, Vec<(String, String)>)>,
    omitted: Vec<String>,
    unterminated: Vec<String>,
}

impl MtlBuilder {
    /// Create a builder with the three calibration sections present but empty.
    pub fn new() -> Self {
        Self {
            sections: SECTION_ORDER
                .iter()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
            omitted: Vec::new(),
            unterminated: Vec::new(),
        }
    }

    /// Build a document holding every entry of a coefficient table.
    ///
    /// Keys are routed to their section by name: `K1_`/`K2_` constants to the
    /// thermal section, `*_BAND_n` rescaling factors to the rescaling section,
    /// everything else to the image attributes.
    pub fn from_table(table: &CoefficientTable) -> Self {
        let mut builder = Self::new();
        for (key, value) in table.iter() {
            let section = if key.starts_with("K1_CONSTANT") || key.starts_with("K2_CONSTANT") {
                keys::THERMAL_CONSTANTS
            } else if key.starts_with("RADIANCE_") || key.starts_with("REFLECTANCE_") {
                keys::RADIOMETRIC_RESCALING
            } else {
                keys::IMAGE_ATTRIBUTES
            };
            builder = builder.entry(section, key, value);
        }
        builder
    }

    pub fn sun_elevation(self, degrees: f64) -> Self {
        self.entry(keys::IMAGE_ATTRIBUTES, keys::SUN_ELEVATION, degrees)
    }

    pub fn earth_sun_distance(self, au: f64) -> Self {
        self.entry(keys::IMAGE_ATTRIBUTES, keys::EARTH_SUN_DISTANCE, au)
    }

    /// Add reflectance rescaling factors for a band.
    pub fn reflectance(self, band: u8, mult: f64, add: f64) -> Self {
        self.entry(keys::RADIOMETRIC_RESCALING, &keys::reflectance_mult(band), mult)
            .entry(keys::RADIOMETRIC_RESCALING, &keys::reflectance_add(band), add)
    }

    /// Add radiance rescaling factors for a band.
    pub fn radiance(self, band: u8, mult: f64, add: f64) -> Self {
        self.entry(keys::RADIOMETRIC_RESCALING, &keys::radiance_mult(band), mult)
            .entry(keys::RADIOMETRIC_RESCALING, &keys::radiance_add(band), add)
    }

    /// Add K1/K2 constants for a thermal band.
    pub fn thermal_constants(self, band: u8, k1: f64, k2: f64) -> Self {
        self.entry(keys::THERMAL_CONSTANTS, &keys::k1_constant(band), k1)
            .entry(keys::THERMAL_CONSTANTS, &keys::k2_constant(band), k2)
    }

    /// Add a numeric entry to a section, creating the section if needed.
    pub fn entry(self, section: &str, key: &str, value: f64) -> Self {
        self.raw(section, key, &value.to_string())
    }

    /// Add an entry with a verbatim value (quoted strings, malformed numbers).
    pub fn raw(mut self, section: &str, key: &str, value: &str) -> Self {
        let entry = (key.to_string(), value.to_string());
        match self.sections.iter_mut().find(|(name, _)| name == section) {
            Some((_, entries)) => entries.push(entry),
            None => self.sections.push((section.to_string(), vec![entry])),
        }
        self
    }

    /// Leave a section out of the document entirely.
    pub fn without_section(mut self, section: &str) -> Self {
        self.omitted.push(section.to_string());
        self
    }

    /// Emit a section's start marker but not its end marker.
    pub fn unterminated_section(mut self, section: &str) -> Self {
        self.unterminated.push(section.to_string());
        self
    }

    /// Render the document.
    pub fn build(&self) -> String {
        let mut out = String::from("GROUP = LANDSAT_METADATA_FILE\n");
        for (name, entries) in &self.sections {
            if self.omitted.contains(name) {
                continue;
            }
            out.push_str(&format!("  GROUP = {}\n", name));
            for (key, value) in entries {
                out.push_str(&format!("    {} = {}\n", key, value));
            }
            if !self.unterminated.contains(name) {
                out.push_str(&format!("  END_GROUP = {}\n", name));
            }
        }
        out.push_str("END_GROUP = LANDSAT_METADATA_FILE\nEND\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_layout() {
        let mtl = MtlBuilder::new()
            .sun_elevation(45.0)
            .thermal_constants(10, 774.89, 1321.08)
            .build();

        assert!(mtl.starts_with("GROUP = LANDSAT_METADATA_FILE"));
        assert!(mtl.contains("  GROUP = IMAGE_ATTRIBUTES\n    SUN_ELEVATION = 45\n"));
        assert!(mtl.contains("K2_CONSTANT_BAND_10 = 1321.08"));
        assert!(mtl.contains("END_GROUP = LEVEL1_THERMAL_CONSTANTS"));
    }

    #[test]
    fn test_without_section() {
        let mtl = MtlBuilder::new()
            .without_section(keys::IMAGE_ATTRIBUTES)
            .build();
        assert!(!mtl.contains("IMAGE_ATTRIBUTES"));
        assert!(mtl.contains("LEVEL1_RADIOMETRIC_RESCALING"));
    }

    #[test]
    fn test_unterminated_section() {
        let mtl = MtlBuilder::new()
            .unterminated_section(keys::THERMAL_CONSTANTS)
            .build();
        assert!(mtl.contains("GROUP = LEVEL1_THERMAL_CONSTANTS"));
        assert!(!mtl.contains("END_GROUP = LEVEL1_THERMAL_CONSTANTS"));
    }

    #[test]
    fn test_from_table_routes_keys() {
        let mut table = CoefficientTable::new();
        table.insert("K1_CONSTANT_BAND_11", 480.8883);
        table.insert("RADIANCE_ADD_BAND_11", 0.1);
        table.insert("EARTH_SUN_DISTANCE", 1.0164606);

        let mtl = MtlBuilder::from_table(&table).build();
        let thermal_start = mtl.find("GROUP = LEVEL1_THERMAL_CONSTANTS").unwrap();
        let k1 = mtl.find("K1_CONSTANT_BAND_11").unwrap();
        assert!(k1 > thermal_start);

        let attrs_end = mtl.find("END_GROUP = IMAGE_ATTRIBUTES").unwrap();
        assert!(mtl.find("EARTH_SUN_DISTANCE").unwrap() < attrs_end);
    }
}
