//! Extraction tests against the sample scene and synthetic MTL documents.

use landsat_common::{keys, Band, CalibrationError, CoefficientTable};
use mtl_parser::{
    extract_calibration_coefficients, extract_thermal_constraints, section_text, MtlDocument,
};
use test_utils::{
    init_test_tracing, landsat8, require_test_file, sample_scene, MtlBuilder,
};

macro_rules! sample_mtl {
    () => {{
        let path = require_test_file!(sample_scene::MTL_FILE);
        std::fs::read_to_string(path).expect("sample MTL should be readable")
    }};
}

// ============================================================================
// Sample scene
// ============================================================================

#[test]
fn test_sample_reflective_bands() {
    init_test_tracing();
    let mtl = sample_mtl!();

    for band in 1..=9u8 {
        let table = extract_calibration_coefficients(band, &mtl).unwrap();
        assert_eq!(table.len(), 4, "band {} should yield exactly four keys", band);
        assert_eq!(table.get(&keys::reflectance_mult(band)), Some(2.0e-5));
        assert_eq!(table.get(&keys::reflectance_add(band)), Some(-0.1));
        assert_eq!(table.get(keys::SUN_ELEVATION), Some(sample_scene::SUN_ELEVATION));
        assert_eq!(
            table.get(keys::EARTH_SUN_DISTANCE),
            Some(sample_scene::EARTH_SUN_DISTANCE)
        );
    }
}

#[test]
fn test_sample_thermal_bands() {
    let mtl = sample_mtl!();

    for band in [10u8, 11] {
        let table = extract_calibration_coefficients(band, &mtl).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(&keys::radiance_mult(band)), Some(3.342e-4));
        assert_eq!(table.get(&keys::radiance_add(band)), Some(0.1));
        assert!(!table.contains_key(&keys::reflectance_mult(band)));
    }
}

#[test]
fn test_sample_thermal_constants() {
    let mtl = sample_mtl!();

    let band10 = extract_thermal_constraints(10, &mtl).unwrap();
    assert_eq!(band10.k1, Some(sample_scene::K1_BAND_10));
    assert_eq!(band10.k2, Some(sample_scene::K2_BAND_10));

    let band11 = extract_thermal_constraints(11, &mtl).unwrap();
    assert_eq!(band11.k1, Some(landsat8::K1_BAND_11));
    assert_eq!(band11.k2, Some(landsat8::K2_BAND_11));
}

#[test]
fn test_sample_band1_does_not_pick_up_band10_constants() {
    let mtl = sample_mtl!();

    let constants = extract_thermal_constraints(1, &mtl).unwrap();
    assert_eq!(constants.k1, None);
    assert_eq!(constants.k2, None);
}

#[test]
fn test_sample_sections_are_bounded() {
    let mtl = sample_mtl!();

    // RADIANCE_MAXIMUM_BAND_4 lives in LEVEL1_MIN_MAX_RADIANCE, not the rescaling section
    let rescaling = section_text(&mtl, keys::RADIOMETRIC_RESCALING).unwrap();
    assert!(rescaling.contains("RADIANCE_MULT_BAND_4"));
    assert!(!rescaling.contains("RADIANCE_MAXIMUM_BAND_4"));

    let doc = MtlDocument::new(&mtl);
    let section = doc.section(keys::RADIOMETRIC_RESCALING).unwrap();
    let table = section.scan(&["RADIANCE_MULT_BAND_4"]).unwrap();
    assert_eq!(table.get("RADIANCE_MULT_BAND_4"), Some(sample_scene::RADIANCE_MULT_BAND_4));
}

#[test]
fn test_sample_extraction_is_idempotent() {
    let mtl = sample_mtl!();

    for band in Band::all() {
        let first = extract_calibration_coefficients(band.number(), &mtl).unwrap();
        let second = extract_calibration_coefficients(band.number(), &mtl).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Synthetic documents
// ============================================================================

#[test]
fn test_thermal_constants_from_builder() {
    let mtl = MtlBuilder::new()
        .thermal_constants(10, landsat8::K1_BAND_10, landsat8::K2_BAND_10)
        .build();

    let constants = extract_thermal_constraints(10, &mtl).unwrap();
    assert_eq!(constants.k1, Some(774.89));
    assert_eq!(constants.k2, Some(1321.08));
    assert_eq!(
        constants.require(Band::new(10).unwrap()).unwrap(),
        (774.89, 1321.08)
    );
}

#[test]
fn test_missing_thermal_constant_is_not_an_error() {
    let mtl = MtlBuilder::new()
        .entry(keys::THERMAL_CONSTANTS, "K1_CONSTANT_BAND_10", 774.89)
        .build();

    let constants = extract_thermal_constraints(10, &mtl).unwrap();
    assert_eq!(constants.k1, Some(774.89));
    assert_eq!(constants.k2, None);

    let err = constants.require(Band::new(10).unwrap()).unwrap_err();
    assert!(matches!(err, CalibrationError::Lookup(ref k) if k == "K2_CONSTANT_BAND_10"));
}

#[test]
fn test_reflective_band_tolerates_missing_thermal_section() {
    let mtl = MtlBuilder::new()
        .sun_elevation(45.0)
        .without_section(keys::THERMAL_CONSTANTS)
        .build();

    let constants = extract_thermal_constraints(4, &mtl).unwrap();
    assert_eq!(constants.k1, None);
    assert_eq!(constants.k2, None);

    let err = extract_thermal_constraints(10, &mtl).unwrap_err();
    assert!(matches!(
        err,
        CalibrationError::SectionNotFound { ref section } if section == keys::THERMAL_CONSTANTS
    ));
}

#[test]
fn test_round_trip_from_table() {
    let mut table = CoefficientTable::new();
    table.insert("REFLECTANCE_MULT_BAND_7", 2.0e-5);
    table.insert("REFLECTANCE_ADD_BAND_7", -0.1);
    table.insert("SUN_ELEVATION", 38.25);
    table.insert("EARTH_SUN_DISTANCE", 0.9834);

    let mtl = MtlBuilder::from_table(&table).build();
    let extracted = extract_calibration_coefficients(7, &mtl).unwrap();
    assert_eq!(extracted, table);
}

#[test]
fn test_missing_keys_are_absent() {
    let mtl = MtlBuilder::new()
        .reflectance(3, 2.0e-5, -0.1)
        .earth_sun_distance(1.0)
        .build();

    let table = extract_calibration_coefficients(3, &mtl).unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.require(keys::SUN_ELEVATION).unwrap_err().is_lookup());
}

#[test]
fn test_keys_outside_section_are_ignored() {
    let mtl = MtlBuilder::new()
        .reflectance(2, 2.0e-5, -0.1)
        .entry("LEVEL1_MIN_MAX_REFLECTANCE", "SUN_ELEVATION", 10.0)
        .sun_elevation(45.0)
        .build();

    let table = extract_calibration_coefficients(2, &mtl).unwrap();
    assert_eq!(table.get(keys::SUN_ELEVATION), Some(45.0));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_rescaling_section() {
    let mtl = MtlBuilder::new()
        .sun_elevation(45.0)
        .without_section(keys::RADIOMETRIC_RESCALING)
        .build();

    let err = extract_calibration_coefficients(4, &mtl).unwrap_err();
    assert!(matches!(
        err,
        CalibrationError::SectionNotFound { ref section } if section == keys::RADIOMETRIC_RESCALING
    ));
}

#[test]
fn test_missing_image_attributes() {
    let mtl = MtlBuilder::new()
        .reflectance(4, 2.0e-5, -0.1)
        .without_section(keys::IMAGE_ATTRIBUTES)
        .build();

    let err = extract_calibration_coefficients(4, &mtl).unwrap_err();
    assert_eq!(err.kind(), "section_not_found");
}

#[test]
fn test_unterminated_thermal_section() {
    let mtl = MtlBuilder::new()
        .thermal_constants(11, landsat8::K1_BAND_11, landsat8::K2_BAND_11)
        .unterminated_section(keys::THERMAL_CONSTANTS)
        .build();

    let err = extract_thermal_constraints(11, &mtl).unwrap_err();
    assert!(matches!(err, CalibrationError::SectionNotFound { .. }));
}

#[test]
fn test_non_numeric_value() {
    let mtl = MtlBuilder::new()
        .raw(keys::RADIOMETRIC_RESCALING, "RADIANCE_MULT_BAND_10", "\"N/A\"")
        .build();

    let err = extract_calibration_coefficients(10, &mtl).unwrap_err();
    assert!(matches!(err, CalibrationError::Format { .. }));
    assert!(err.to_string().contains("RADIANCE_MULT_BAND_10"));
}

#[test]
fn test_empty_document() {
    let err = extract_calibration_coefficients(4, "").unwrap_err();
    assert_eq!(err.kind(), "section_not_found");
}
