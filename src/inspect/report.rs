use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::column::{profile_columns, ColumnProfile};
use super::source::SheetRange;
use crate::error::InspectError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub path: String,
    pub total_sheets: usize,
    pub sheet_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetProfile {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub data_types: IndexMap<String, String>,
    pub sample_data: IndexMap<String, Vec<Value>>,
    pub null_counts: IndexMap<String, usize>,
    pub unique_counts: IndexMap<String, usize>,
}

impl SheetProfile {
    pub fn from_range(name: &str, range: &SheetRange) -> Self {
        let (rows, columns) = profile_columns(range);
        Self::from_columns(name, rows, columns)
    }

    fn from_columns(name: &str, rows: usize, columns: Vec<ColumnProfile>) -> Self {
        let mut profile = Self {
            name: name.to_string(),
            rows,
            columns: columns.len(),
            column_names: Vec::with_capacity(columns.len()),
            data_types: IndexMap::new(),
            sample_data: IndexMap::new(),
            null_counts: IndexMap::new(),
            unique_counts: IndexMap::new(),
        };
        for column in columns {
            profile.column_names.push(column.name.clone());
            profile.data_types.insert(column.name.clone(), column.dtype);
            profile.null_counts.insert(column.name.clone(), column.null_count);
            profile.unique_counts.insert(column.name.clone(), column.unique_count);
            profile.sample_data.insert(column.name, column.samples);
        }
        profile
    }
}

/// A sheet either profiles cleanly or records why it could not be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SheetEntry {
    Profile(SheetProfile),
    Failed { error: String },
}

impl SheetEntry {
    pub fn profile(&self) -> Option<&SheetProfile> {
        match self {
            Self::Profile(profile) => Some(profile),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Profile(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_sheets: usize,
    pub total_rows: usize,
    pub average_columns_per_sheet: f64,
}

impl ReportSummary {
    /// Rows and columns come from readable sheets only, but the column
    /// average is taken over every sheet entry.
    pub fn from_sheets(total_sheets: usize, sheets: &IndexMap<String, SheetEntry>) -> Self {
        let (total_rows, total_columns) = sheets
            .values()
            .filter_map(SheetEntry::profile)
            .fold((0, 0), |(rows, columns), profile| {
                (rows + profile.rows, columns + profile.columns)
            });
        let average_columns_per_sheet = if sheets.is_empty() {
            0.0
        } else {
            total_columns as f64 / sheets.len() as f64
        };
        Self {
            total_sheets,
            total_rows,
            average_columns_per_sheet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabValidation {
    pub expected: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub all_expected_found: bool,
}

impl TabValidation {
    pub fn check(expected: &[String], found: &[String]) -> Self {
        let expected_set: HashSet<&str> = expected.iter().map(String::as_str).collect();
        let found_set: HashSet<&str> = found.iter().map(String::as_str).collect();

        let missing: Vec<String> = expected
            .iter()
            .filter(|tab| !found_set.contains(tab.as_str()))
            .cloned()
            .collect();
        let extra: Vec<String> = found
            .iter()
            .filter(|tab| !expected_set.contains(tab.as_str()))
            .cloned()
            .collect();

        Self {
            expected: expected.to_vec(),
            all_expected_found: missing.is_empty(),
            missing,
            extra,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbookReport {
    pub file_info: FileInfo,
    /// Keyed by sheet name, in workbook order.
    pub sheets: IndexMap<String, SheetEntry>,
    pub summary: ReportSummary,
    pub tab_validation: TabValidation,
}

impl WorkbookReport {
    pub fn to_pretty_json(&self) -> Result<String, InspectError> {
        let mut payload = serde_json::to_string_pretty(self)?;
        payload.push('\n');
        Ok(payload)
    }
}

/// Serialize first so a serialization failure never leaves a partial file.
pub fn write_report(report: &WorkbookReport, path: &Path) -> Result<(), InspectError> {
    let payload = report.to_pretty_json()?;
    let write_err = |source| InspectError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, payload).map_err(write_err)?;
    tracing::info!(path = %path.display(), "analysis saved");
    Ok(())
}

fn render_samples(samples: &[Value]) -> String {
    let rendered: Vec<String> = samples.iter().map(Value::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

pub fn render_sheet_details(name: &str, entry: &SheetEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sheet '{name}'");
    match entry {
        SheetEntry::Failed { error } => {
            let _ = writeln!(out, "   Error reading sheet: {error}");
        }
        SheetEntry::Profile(profile) => {
            let _ = writeln!(out, "   Rows: {}", profile.rows);
            let _ = writeln!(out, "   Columns: {}", profile.columns);
            let _ = writeln!(out, "   Column Names: {:?}", profile.column_names);
            let _ = writeln!(out, "   Column Details:");
            for column in &profile.column_names {
                let dtype = profile.data_types.get(column).map_or("?", String::as_str);
                let nulls = profile.null_counts.get(column).copied().unwrap_or_default();
                let unique = profile.unique_counts.get(column).copied().unwrap_or_default();
                let samples = profile
                    .sample_data
                    .get(column)
                    .map(|samples| render_samples(samples))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "     {column}: {dtype} | {unique} unique | {nulls} nulls | samples: {samples}"
                );
            }
        }
    }
    out
}

pub fn render_summary(report: &WorkbookReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ANALYSIS SUMMARY");
    let _ = writeln!(out, "Total Sheets: {}", report.summary.total_sheets);
    for (name, entry) in report.sheets.iter() {
        if let Some(profile) = entry.profile() {
            let _ = writeln!(out, "  {name}: {} rows, {} columns", profile.rows, profile.columns);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Data Rows: {}", report.summary.total_rows);
    let _ = writeln!(
        out,
        "Average Columns per Sheet: {:.1}",
        report.summary.average_columns_per_sheet
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "TAB VALIDATION");
    let validation = &report.tab_validation;
    if validation.all_expected_found {
        let _ = writeln!(out, "All expected tabs found");
    } else {
        let _ = writeln!(out, "Missing Expected Tabs: {:?}", validation.missing);
    }
    if !validation.extra.is_empty() {
        let _ = writeln!(out, "Additional Tabs: {:?}", validation.extra);
    }
    out
}
