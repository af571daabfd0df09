use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, TimeZone};

use super::compatibility::{build_tint_compatibility, TINTABLE_TREATMENTS};
use super::model::{Catalog, CatalogIndexes, CatalogMetadata};
use super::sample::{
    sample_add_power_rules, sample_availability, sample_designs, sample_frames,
    sample_instruction_codes, sample_materials, sample_tints, sample_treatments,
};
use crate::error::CatalogError;

pub const SAMPLE_VERSION: &str = "2.0-sample";
pub const MINIMAL_VERSION: &str = "2.0-minimal";
pub const SAMPLE_SOURCE_FILE: &str = "Sample_Data_Generated";
/// Number of tabs in the source workbook the catalog mirrors.
pub const CATALOG_TAB_COUNT: u32 = 10;

pub const SAMPLE_CATALOG_FILE: &str = "sample_catalog.json";
pub const MINIMAL_CATALOG_FILE: &str = "minimal_catalog.json";

/// Per-collection prefix lengths kept in the minimal catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimalLimits {
    pub materials: usize,
    pub treatments: usize,
    pub designs: usize,
    pub frames: usize,
    pub add_power_rules: usize,
    pub availability: usize,
    pub tints: usize,
    pub instruction_codes: usize,
    pub tint_compatibility: usize,
}

pub const MINIMAL_LIMITS: MinimalLimits = MinimalLimits {
    materials: 2,
    treatments: 2,
    designs: 2,
    frames: 1,
    add_power_rules: 1,
    availability: 2,
    tints: 2,
    instruction_codes: 2,
    tint_compatibility: 4,
};

fn prefix<T: Clone>(items: &[T], len: usize) -> Vec<T> {
    items.iter().take(len).cloned().collect()
}

/// Assemble the full sample catalog stamped with `now`.
pub fn build_sample_catalog<Tz>(now: &DateTime<Tz>) -> Catalog
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let materials = sample_materials();
    let designs = sample_designs();
    let tints = sample_tints();

    let design_ids: Vec<&str> = designs.iter().map(|design| design.id.as_str()).collect();
    let material_ids: Vec<&str> = materials.iter().map(|material| material.id.as_str()).collect();
    let tint_ids: Vec<&str> = tints.iter().map(|tint| tint.id.as_str()).collect();
    let tint_compatibility =
        build_tint_compatibility(&design_ids, &material_ids, &TINTABLE_TREATMENTS, &tint_ids);

    let mut catalog = Catalog {
        metadata: CatalogMetadata {
            version: SAMPLE_VERSION.to_string(),
            last_updated: now.to_rfc3339_opts(SecondsFormat::Micros, false),
            source_file: SAMPLE_SOURCE_FILE.to_string(),
            validation_status: "valid".to_string(),
            build_id: format!("sample-{}", now.format("%Y%m%d-%H%M%S")),
            tab_count: CATALOG_TAB_COUNT,
            total_records: 0,
        },
        materials,
        treatments: sample_treatments(),
        designs,
        frames: sample_frames(),
        add_power_rules: sample_add_power_rules(),
        availability: sample_availability(),
        tints,
        instruction_codes: sample_instruction_codes(),
        tint_compatibility,
        indexes: CatalogIndexes::default(),
    };
    catalog.metadata.total_records = catalog.total_records();
    catalog
}

impl Catalog {
    /// Positional prefix of every collection, with its own version tag and
    /// recomputed record count. Other metadata is shared with `self`.
    pub fn truncated(&self, limits: &MinimalLimits, version: &str) -> Catalog {
        let mut catalog = Catalog {
            metadata: CatalogMetadata {
                version: version.to_string(),
                ..self.metadata.clone()
            },
            materials: prefix(&self.materials, limits.materials),
            treatments: prefix(&self.treatments, limits.treatments),
            designs: prefix(&self.designs, limits.designs),
            frames: prefix(&self.frames, limits.frames),
            add_power_rules: prefix(&self.add_power_rules, limits.add_power_rules),
            availability: prefix(&self.availability, limits.availability),
            tints: prefix(&self.tints, limits.tints),
            instruction_codes: prefix(&self.instruction_codes, limits.instruction_codes),
            tint_compatibility: prefix(&self.tint_compatibility, limits.tint_compatibility),
            indexes: CatalogIndexes::default(),
        };
        catalog.metadata.total_records = catalog.total_records();
        catalog
    }

    pub fn minimal(&self) -> Catalog {
        self.truncated(&MINIMAL_LIMITS, MINIMAL_VERSION)
    }

    /// Two-space indented JSON, trailing newline included.
    pub fn to_pretty_json(&self) -> Result<String, CatalogError> {
        let mut payload = serde_json::to_string_pretty(self).map_err(CatalogError::Serialize)?;
        payload.push('\n');
        Ok(payload)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCatalogs {
    pub sample_path: PathBuf,
    pub minimal_path: PathBuf,
    pub minimal_records: usize,
}

fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let payload = catalog.to_pretty_json()?;
    fs::write(path, payload).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        version = %catalog.metadata.version,
        records = catalog.metadata.total_records,
        "catalog written"
    );
    Ok(())
}

/// Write the full catalog and its minimal counterpart into `output_dir`,
/// creating the directory if needed.
pub fn write_catalogs(
    output_dir: &Path,
    catalog: &Catalog,
) -> Result<GeneratedCatalogs, CatalogError> {
    fs::create_dir_all(output_dir).map_err(|source| CatalogError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let sample_path = output_dir.join(SAMPLE_CATALOG_FILE);
    write_catalog(&sample_path, catalog)?;

    let minimal = catalog.minimal();
    let minimal_path = output_dir.join(MINIMAL_CATALOG_FILE);
    write_catalog(&minimal_path, &minimal)?;

    Ok(GeneratedCatalogs {
        sample_path,
        minimal_path,
        minimal_records: minimal.metadata.total_records,
    })
}

pub fn render_catalog_summary(catalog: &Catalog) -> String {
    let labels = [
        "Materials",
        "Treatments",
        "Designs",
        "Frames",
        "ADD Power Rules",
        "Availability Rules",
        "Tints",
        "Instruction Codes",
        "Tint Compatibility",
    ];
    let mut lines = vec!["Data Summary:".to_string()];
    for (label, (_, len)) in labels.iter().zip(catalog.collection_sizes()) {
        lines.push(format!("   {label}: {len}"));
    }
    lines.push(format!("   Total Records: {}", catalog.metadata.total_records));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn fixed_catalog() -> Catalog {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 17, 9, 5, 3)
            .single()
            .expect("valid timestamp");
        build_sample_catalog(&now)
    }

    #[test]
    fn metadata_is_stamped_from_clock() {
        let catalog = fixed_catalog();
        assert_eq!(catalog.metadata.build_id, "sample-20261017-090503");
        assert!(catalog.metadata.last_updated.starts_with("2026-10-17T09:05:03"));
        assert_eq!(catalog.metadata.version, SAMPLE_VERSION);
        assert_eq!(catalog.metadata.tab_count, 10);
    }

    #[test]
    fn total_records_counts_all_collections() {
        let catalog = fixed_catalog();
        assert_eq!(catalog.tint_compatibility.len(), 27);
        assert_eq!(catalog.metadata.total_records, 50);
        assert_eq!(catalog.metadata.total_records, catalog.total_records());
    }

    #[test]
    fn minimal_keeps_shared_metadata() {
        let catalog = fixed_catalog();
        let minimal = catalog.minimal();
        assert_eq!(minimal.metadata.version, MINIMAL_VERSION);
        assert_eq!(minimal.metadata.build_id, catalog.metadata.build_id);
        assert_eq!(minimal.metadata.last_updated, catalog.metadata.last_updated);
        assert_eq!(minimal.metadata.total_records, 18);
    }

    #[test]
    fn truncation_never_pads_short_collections() {
        let catalog = fixed_catalog();
        let limits = MinimalLimits {
            frames: 10,
            ..MINIMAL_LIMITS
        };
        let truncated = catalog.truncated(&limits, "custom");
        assert_eq!(truncated.frames.len(), catalog.frames.len());
        assert_eq!(truncated.metadata.version, "custom");
    }

    #[test]
    fn write_catalogs_reports_paths_and_minimal_count() {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("lenscat-write-{stamp}"));

        let generated = write_catalogs(&dir, &fixed_catalog()).expect("catalogs written");
        assert_eq!(generated.sample_path, dir.join(SAMPLE_CATALOG_FILE));
        assert_eq!(generated.minimal_path, dir.join(MINIMAL_CATALOG_FILE));
        assert_eq!(generated.minimal_records, 18);
        assert!(generated.sample_path.exists());
        assert!(generated.minimal_path.exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn summary_lists_every_collection() {
        let summary = render_catalog_summary(&fixed_catalog());
        assert!(summary.contains("Tint Compatibility: 27"));
        assert!(summary.contains("ADD Power Rules: 2"));
        assert!(summary.ends_with("Total Records: 50"));
    }
}
