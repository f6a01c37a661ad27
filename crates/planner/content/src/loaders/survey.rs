//! Survey data loader.
//!
//! Reads the scanner collaborator's output: a JSON array of site records
//! with per-resource abundance. Abundance range (0-100) is enforced later
//! by the core builder; this loader only rejects values the unsigned model
//! cannot represent.

use std::path::Path;

use anyhow::{Context, bail};
use planner_core::Site;

use crate::formats::SiteRecord;
use crate::loaders::{LoadResult, read_file};

/// Loader for scanned site data from JSON files.
pub struct SurveyLoader;

impl SurveyLoader {
    /// Load site records from a survey JSON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Site>> {
        let content = read_file(path)?;
        let records: Vec<SiteRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse survey JSON {}", path.display()))?;
        Self::convert(records)
    }

    fn convert(records: Vec<SiteRecord>) -> LoadResult<Vec<Site>> {
        let mut sites = Vec::with_capacity(records.len());
        for record in records {
            let mut site = Site::new(record.id.as_str());
            for (resource, abundance) in record.resources {
                let Ok(value) = u32::try_from(abundance) else {
                    bail!(
                        "site {} lists abundance {} for {} outside the supported range",
                        record.id,
                        abundance,
                        resource
                    );
                };
                site = site.offer(resource.as_str(), value);
            }
            sites.push(site);
        }
        Ok(sites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SURVEY: &str = r#"[
        {
            "id": "J105433 I (Barren)",
            "resources": {
                "Aqueous Liquids": 36,
                "Base Metals": 71,
                "Carbon Compounds": 73
            }
        },
        {
            "id": "J105433 II (Storm)",
            "resources": {
                "Aqueous Liquids": 62,
                "Base Metals": 85
            }
        }
    ]"#;

    #[test]
    fn loads_site_records() {
        let records: Vec<SiteRecord> = serde_json::from_str(SURVEY).unwrap();
        let sites = SurveyLoader::convert(records).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].abundance(&"Base Metals".into()), 71);
        assert_eq!(sites[1].abundance(&"Carbon Compounds".into()), 0);
    }

    #[test]
    fn rejects_negative_abundance() {
        let records: Vec<SiteRecord> =
            serde_json::from_str(r#"[{"id": "S1", "resources": {"Ore": -4}}]"#).unwrap();
        let err = SurveyLoader::convert(records).unwrap_err();
        assert!(err.to_string().contains("abundance -4 for Ore outside the supported range"));
    }

    #[test]
    fn rejects_abundance_wider_than_u32() {
        // 2^32 + 99: would wrap to 99 under a plain cast and sail through the
        // 0-100 scale check downstream.
        let records: Vec<SiteRecord> =
            serde_json::from_str(r#"[{"id": "S1", "resources": {"Ore": 4294967395}}]"#).unwrap();
        let err = SurveyLoader::convert(records).unwrap_err();
        assert!(err.to_string().contains("outside the supported range"));
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SURVEY.as_bytes()).unwrap();

        let sites = SurveyLoader::load(file.path()).unwrap();
        assert_eq!(sites[1].id, "J105433 II (Storm)".into());
    }
}
