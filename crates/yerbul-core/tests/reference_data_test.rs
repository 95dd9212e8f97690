//! Tests for loading the bundled region/district reference document.

use std::io::Write;
use tempfile::NamedTempFile;
use yerbul_core::regions::GeographicIndex;
use yerbul_core::YerbulError;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Eskişehir", "districts": ["Odunpazarı", "Tepebaşı"]}},
            {{"name": "Trabzon", "districts": ["Ortahisar", "Akçaabat"]}}
        ]"#
    )
    .unwrap();

    let index = GeographicIndex::from_path(file.path()).unwrap();
    assert_eq!(index.region_names(), ["Eskişehir", "Trabzon"]);
    assert_eq!(
        index.sub_regions("Trabzon").unwrap(),
        ["Ortahisar", "Akçaabat"]
    );
}

#[test]
fn test_missing_file_is_a_reference_data_error() {
    let err = GeographicIndex::from_path("/nonexistent/iller.json").unwrap_err();
    assert!(matches!(err, YerbulError::ReferenceData { .. }));
}

#[test]
fn test_malformed_file_is_a_reference_data_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"il\": \"Ankara\"}}").unwrap();

    let err = GeographicIndex::from_path(file.path()).unwrap_err();
    assert!(matches!(err, YerbulError::ReferenceData { .. }));
}

#[test]
fn test_bundled_document_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/iller.json");
    let index = GeographicIndex::from_path(path).unwrap();

    assert!(index.contains_region("Ankara"));
    assert!(index.is_sub_region_of("Ankara", "Çankaya"));
    assert!(!index.region_names().is_empty());
}
