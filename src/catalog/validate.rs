//! Structural consistency of a catalog document: every foreign key resolves,
//! ids are unique within their collection, and `metadata.totalRecords`
//! matches the collections actually present.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use super::model::Catalog;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// One finding against a catalog record. `context` locates the record as
/// `collection[index]`, optionally followed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.with_severity(ValidationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.with_severity(ValidationSeverity::Warning)
    }

    fn with_severity(
        &self,
        severity: ValidationSeverity,
    ) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diag| diag.severity == severity)
    }
}

/// Ids of one collection, reporting duplicates as they are collected.
fn collect_ids<'a>(
    report: &mut ValidationReport,
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            report.push(
                ValidationSeverity::Error,
                format!("{collection}[{index}].id"),
                "missing non-empty id",
            );
        } else if !seen.insert(id) {
            report.push(
                ValidationSeverity::Error,
                format!("{collection}[{index}].id"),
                format!("duplicate id '{id}'"),
            );
        }
    }
    seen
}

struct KnownIds<'a> {
    designs: HashSet<&'a str>,
    materials: HashSet<&'a str>,
    treatments: HashSet<&'a str>,
}

impl KnownIds<'_> {
    fn check_triple(
        &self,
        report: &mut ValidationReport,
        context: &str,
        design_id: &str,
        material_id: &str,
        treatment_id: &str,
    ) {
        check_reference(report, context, "designId", design_id, &self.designs);
        check_reference(report, context, "materialId", material_id, &self.materials);
        check_reference(report, context, "treatmentId", treatment_id, &self.treatments);
    }
}

fn check_reference(
    report: &mut ValidationReport,
    context: &str,
    field: &str,
    value: &str,
    known: &HashSet<&str>,
) {
    if !known.contains(value) {
        report.push(
            ValidationSeverity::Error,
            format!("{context}.{field}"),
            format!("unknown reference '{value}'"),
        );
    }
}

pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();

    let known = KnownIds {
        designs: collect_ids(&mut report, "designs", catalog.designs.iter().map(|d| d.id.as_str())),
        materials: collect_ids(
            &mut report,
            "materials",
            catalog.materials.iter().map(|m| m.id.as_str()),
        ),
        treatments: collect_ids(
            &mut report,
            "treatments",
            catalog.treatments.iter().map(|t| t.id.as_str()),
        ),
    };
    let tints = collect_ids(&mut report, "tints", catalog.tints.iter().map(|t| t.id.as_str()));
    collect_ids(
        &mut report,
        "addPowerRules",
        catalog.add_power_rules.iter().map(|rule| rule.id.as_str()),
    );
    collect_ids(
        &mut report,
        "availability",
        catalog.availability.iter().map(|rule| rule.id.as_str()),
    );
    collect_ids(
        &mut report,
        "instructionCodes",
        catalog.instruction_codes.iter().map(|code| code.code.as_str()),
    );

    let mut frame_ids = HashSet::new();
    for (index, frame) in catalog.frames.iter().enumerate() {
        if !frame_ids.insert(frame.id) {
            report.push(
                ValidationSeverity::Error,
                format!("frames[{index}].id"),
                format!("duplicate id '{}'", frame.id),
            );
        }
        if frame.id != frame.sku {
            report.push(
                ValidationSeverity::Warning,
                format!("frames[{index}]"),
                format!("id {} differs from sku {}", frame.id, frame.sku),
            );
        }
    }

    for (index, rule) in catalog.add_power_rules.iter().enumerate() {
        let context = format!("addPowerRules[{index}] id='{}'", rule.id);
        known.check_triple(
            &mut report,
            &context,
            &rule.design_id,
            &rule.material_id,
            &rule.treatment_id,
        );
        if rule.add_min > rule.add_max {
            report.push(
                ValidationSeverity::Warning,
                context,
                format!("addMin {} exceeds addMax {}", rule.add_min, rule.add_max),
            );
        }
    }

    for (index, rule) in catalog.availability.iter().enumerate() {
        let context = format!("availability[{index}] id='{}'", rule.id);
        known.check_triple(
            &mut report,
            &context,
            &rule.design_id,
            &rule.material_id,
            &rule.treatment_id,
        );
    }

    for (index, row) in catalog.tint_compatibility.iter().enumerate() {
        let context = format!("tintCompatibility[{index}]");
        known.check_triple(
            &mut report,
            &context,
            &row.design_id,
            &row.material_id,
            &row.treatment_id,
        );
        check_reference(&mut report, &context, "tintId", &row.tint_id, &tints);
    }

    let actual = catalog.total_records();
    if catalog.metadata.total_records != actual {
        report.push(
            ValidationSeverity::Error,
            "metadata.totalRecords",
            format!(
                "declared {} but collections hold {actual}",
                catalog.metadata.total_records
            ),
        );
    }

    report
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(CatalogError::Parse)
}

pub fn validate_catalog_file(path: impl AsRef<Path>) -> Result<ValidationReport, CatalogError> {
    let catalog = load_catalog(path)?;
    Ok(validate_catalog(&catalog))
}
