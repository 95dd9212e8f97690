//! Geographic reference index: region -> ordered district list.
//!
//! Built once at startup from a bundled JSON document and immutable for the
//! process lifetime. A malformed or missing document is a startup error,
//! never a runtime one.

use crate::error::{Result, YerbulError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// One region entry as it appears in the reference document.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRecord {
    pub name: String,
    pub districts: Vec<String>,
}

/// Immutable lookup structure over the reference data. Region order and
/// district order follow the source document.
#[derive(Debug, Clone)]
pub struct GeographicIndex {
    entries: Vec<RegionRecord>,
    names: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl GeographicIndex {
    /// Build the index from parsed records, keeping source order.
    pub fn from_records(entries: Vec<RegionRecord>) -> Self {
        let names = entries.iter().map(|e| e.name.clone()).collect();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self { entries, names, by_name }
    }

    /// Parse the reference document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let entries: Vec<RegionRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(entries))
    }

    /// Load the reference document from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| YerbulError::ReferenceData {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_reader(content.as_slice()).map_err(|e| YerbulError::ReferenceData {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// All region names in source order.
    pub fn region_names(&self) -> &[String] {
        &self.names
    }

    /// Districts of `region` in source order.
    pub fn sub_regions(&self, region: &str) -> Result<&[String]> {
        self.by_name
            .get(region)
            .map(|&i| self.entries[i].districts.as_slice())
            .ok_or_else(|| YerbulError::UnknownRegion {
                name: region.to_string(),
            })
    }

    pub fn contains_region(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Whether `name` is a district of `region`. False when the region
    /// itself is unknown.
    pub fn is_sub_region_of(&self, region: &str, name: &str) -> bool {
        self.sub_regions(region)
            .map(|subs| subs.iter().any(|s| s == name))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeographicIndex {
        GeographicIndex::from_reader(
            r#"[
                {"name": "Ankara", "districts": ["Çankaya", "Keçiören", "Mamak"]},
                {"name": "Konya", "districts": ["Selçuklu", "Meram"]}
            ]"#
            .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_region_names_keep_source_order() {
        let index = sample();
        assert_eq!(index.region_names(), ["Ankara", "Konya"]);
    }

    #[test]
    fn test_sub_regions_keep_source_order() {
        let index = sample();
        let subs = index.sub_regions("Ankara").unwrap();
        assert_eq!(subs, ["Çankaya", "Keçiören", "Mamak"]);
    }

    #[test]
    fn test_unknown_region_is_an_error() {
        let index = sample();
        let err = index.sub_regions("Atlantis").unwrap_err();
        assert!(matches!(err, YerbulError::UnknownRegion { name } if name == "Atlantis"));
    }

    #[test]
    fn test_is_sub_region_of() {
        let index = sample();
        assert!(index.is_sub_region_of("Ankara", "Çankaya"));
        assert!(!index.is_sub_region_of("Konya", "Çankaya"));
        assert!(!index.is_sub_region_of("Atlantis", "Çankaya"));
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(GeographicIndex::from_reader("{\"not\": \"a list\"}".as_bytes()).is_err());
    }
}
