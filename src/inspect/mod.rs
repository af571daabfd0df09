//! Workbook structure inspector.
//!
//! Opens a workbook, profiles every sheet and builds a JSON-serializable
//! report. Only a missing or unopenable workbook is fatal; a sheet that
//! fails to load is recorded as `{ "error": ... }` and the walk continues.

mod column;
mod report;
mod source;

use std::path::Path;

use indexmap::IndexMap;

pub use column::{column_names, profile_column, ColumnProfile, SAMPLE_LIMIT};
pub use report::{
    render_sheet_details, render_summary, write_report, FileInfo, ReportSummary, SheetEntry,
    SheetProfile, TabValidation, WorkbookReport,
};
pub use source::{CalamineWorkbook, SheetRange, WorkbookSource};

use crate::error::InspectError;

/// Profile every sheet `source` exposes, in workbook order.
pub fn inspect_source<W: WorkbookSource>(
    source: &mut W,
    path_label: &str,
    expected_tabs: &[String],
) -> WorkbookReport {
    let sheet_names = source.sheet_names();
    tracing::info!(file = path_label, sheets = sheet_names.len(), "analyzing workbook");

    let mut sheets = IndexMap::new();
    for name in &sheet_names {
        tracing::debug!(sheet = %name, "analyzing sheet");
        let entry = match source.load_sheet(name) {
            Ok(range) => SheetEntry::Profile(SheetProfile::from_range(name, &range)),
            Err(error) => {
                tracing::warn!(sheet = %name, %error, "error reading sheet");
                SheetEntry::Failed { error }
            }
        };
        sheets.insert(name.clone(), entry);
    }

    WorkbookReport {
        file_info: FileInfo {
            path: path_label.to_string(),
            total_sheets: sheet_names.len(),
            sheet_names: sheet_names.clone(),
        },
        summary: ReportSummary::from_sheets(sheet_names.len(), &sheets),
        tab_validation: TabValidation::check(expected_tabs, &sheet_names),
        sheets,
    }
}

pub fn inspect_workbook(
    path: &Path,
    expected_tabs: &[String],
) -> Result<WorkbookReport, InspectError> {
    let mut workbook = CalamineWorkbook::open(path)?;
    Ok(inspect_source(
        &mut workbook,
        &path.display().to_string(),
        expected_tabs,
    ))
}

#[cfg(test)]
mod tests {
    use calamine::Data;

    use super::*;

    struct FakeWorkbook {
        sheets: Vec<(String, Result<SheetRange, String>)>,
    }

    impl WorkbookSource for FakeWorkbook {
        fn sheet_names(&self) -> Vec<String> {
            self.sheets.iter().map(|(name, _)| name.clone()).collect()
        }

        fn load_sheet(&mut self, name: &str) -> Result<SheetRange, String> {
            self.sheets
                .iter()
                .find(|(candidate, _)| candidate == name)
                .map(|(_, sheet)| sheet.clone())
                .unwrap_or_else(|| Err(format!("no sheet named '{name}'")))
        }
    }

    fn materials_range() -> SheetRange {
        let mut range = SheetRange::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String("MATERIAL_ID".to_string()));
        range.set_value((0, 1), Data::String("INDEX".to_string()));
        range.set_value((0, 2), Data::String("AVAILABLE".to_string()));
        range.set_value((1, 0), Data::String("CR39".to_string()));
        range.set_value((1, 1), Data::Float(1.5));
        range.set_value((1, 2), Data::String("Y".to_string()));
        range.set_value((2, 0), Data::String("TRIVEX".to_string()));
        range.set_value((2, 1), Data::Float(1.53));
        range
    }

    #[test]
    fn failing_sheet_is_isolated() {
        let mut workbook = FakeWorkbook {
            sheets: vec![
                ("A".to_string(), Ok(materials_range())),
                ("B".to_string(), Err("corrupt sheet xml".to_string())),
            ],
        };
        let report = inspect_source(&mut workbook, "fixture.xlsx", &[]);

        let a = report
            .sheets
            .get("A")
            .and_then(SheetEntry::profile)
            .expect("sheet A profiled");
        assert_eq!(a.rows, 2);
        assert_eq!(a.columns, 3);
        assert_eq!(a.null_counts.get("AVAILABLE"), Some(&1));
        assert_eq!(
            report.sheets.get("B").and_then(SheetEntry::error),
            Some("corrupt sheet xml")
        );

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["sheets"]["B"], serde_json::json!({ "error": "corrupt sheet xml" }));
        assert_eq!(json["sheets"]["A"]["data_types"]["INDEX"], "float64");
        assert_eq!(json["file_info"]["total_sheets"], 2);
        assert_eq!(json["summary"]["total_rows"], 2);
    }

    #[test]
    fn report_follows_workbook_order_and_checks_tabs() {
        let mut workbook = FakeWorkbook {
            sheets: vec![
                ("Materials".to_string(), Ok(materials_range())),
                ("Designs".to_string(), Ok(SheetRange::empty())),
            ],
        };
        let expected = vec!["README".to_string(), "Materials".to_string()];
        let report = inspect_source(&mut workbook, "fixture.xlsx", &expected);

        let order: Vec<&str> = report.sheets.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["Materials", "Designs"]);
        assert_eq!(report.tab_validation.missing, vec!["README"]);
        assert_eq!(report.tab_validation.extra, vec!["Designs"]);
        assert_eq!(report.summary.average_columns_per_sheet, 1.5);
    }

    #[test]
    fn missing_workbook_is_fatal() {
        let path = std::env::temp_dir().join("lenscat-definitely-missing.xlsx");
        let err = inspect_workbook(&path, &[]).expect_err("missing file");
        assert!(matches!(err, InspectError::NotFound(_)));
    }
}
