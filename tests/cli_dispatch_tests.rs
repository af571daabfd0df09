use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::Workbook;
use serde_json::Value;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_lenscat")
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("lenscat-{name}-{stamp}"))
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env_remove("LENSCAT_CONFIG")
        .output()
        .expect("lenscat should run")
}

fn read_json(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("output should be readable");
    serde_json::from_str(&raw).expect("output should be JSON")
}

#[test]
fn unknown_command_prints_usage() {
    let output = run(&["serve"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: lenscat"));
}

#[test]
fn generate_writes_full_and_minimal_catalogs() {
    let dir = unique_temp_path("generate");
    let output = run(&["generate", dir.to_string_lossy().as_ref()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Records: 50"));
    assert!(stdout.contains("Total Records: 18"));

    let full = read_json(&dir.join("sample_catalog.json"));
    let minimal = read_json(&dir.join("minimal_catalog.json"));
    assert_eq!(full["metadata"]["version"], "2.0-sample");
    assert_eq!(minimal["metadata"]["version"], "2.0-minimal");
    assert_eq!(full["metadata"]["tabCount"], 10);
    assert_eq!(full["indexes"], serde_json::json!({}));
    assert_eq!(minimal["indexes"], serde_json::json!({}));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn generate_reads_output_dir_from_config_file() {
    let dir = unique_temp_path("configured");
    fs::create_dir_all(&dir).expect("temp dir");
    let config_path = dir.join("lenscat.yaml");
    let output_dir = dir.join("fixtures");
    fs::write(
        &config_path,
        format!("output_dir: {}\n", output_dir.to_string_lossy()),
    )
    .expect("config written");

    let output = Command::new(bin())
        .arg("generate")
        .env("LENSCAT_CONFIG", &config_path)
        .output()
        .expect("generate should run");

    assert_eq!(output.status.code(), Some(0));
    assert!(output_dir.join("sample_catalog.json").exists());
    assert!(output_dir.join("minimal_catalog.json").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unreadable_config_file_fails() {
    let missing = unique_temp_path("no-config").join("lenscat.yaml");
    let output = Command::new(bin())
        .arg("generate")
        .env("LENSCAT_CONFIG", &missing)
        .output()
        .expect("generate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config error"));
}

#[test]
fn generate_fails_when_output_dir_is_a_file() {
    let blocker = unique_temp_path("blocker");
    fs::write(&blocker, "not a directory").expect("fixture should be written");

    let output = run(&["generate", blocker.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("generate failed"));

    let _ = fs::remove_file(blocker);
}

/// Two sheets: `Materials` anchored at A1, and `Frames` whose only column is B.
fn write_fixture_workbook(path: &Path) {
    let mut workbook = Workbook::new();

    let materials = workbook.add_worksheet();
    materials.set_name("Materials").expect("sheet name");
    for (column, header) in ["MATERIAL_ID", "INDEX", "QTY"].into_iter().enumerate() {
        materials
            .write_string(0, column as u16, header)
            .expect("header cell");
    }
    for (row, (id, index, qty)) in [("CR39", 1.5, 10.0), ("TRIVEX", 1.53, 4.0)]
        .into_iter()
        .enumerate()
    {
        let row = row as u32 + 1;
        materials.write_string(row, 0, id).expect("id cell");
        materials.write_number(row, 1, index).expect("index cell");
        materials.write_number(row, 2, qty).expect("qty cell");
    }

    let frames = workbook.add_worksheet();
    frames.set_name("Frames").expect("sheet name");
    frames.write_string(0, 1, "SKU").expect("header cell");
    frames.write_number(1, 1, 882_020_000_976.0).expect("sku cell");
    frames.write_number(2, 1, 882_020_000_977.0).expect("sku cell");

    workbook.save(path).expect("workbook should be saved");
}

#[test]
fn inspect_writes_report_for_real_workbook() {
    let dir = unique_temp_path("inspect-ok");
    fs::create_dir_all(&dir).expect("temp dir");
    let workbook = dir.join("catalog.xlsx");
    write_fixture_workbook(&workbook);
    let report_path = dir.join("out").join("workbook_analysis.json");

    let output = run(&[
        "inspect",
        workbook.to_string_lossy().as_ref(),
        report_path.to_string_lossy().as_ref(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Analysis complete!"));
    assert!(report_path.exists());

    let raw = fs::read_to_string(&report_path).expect("report should be readable");
    let materials_at = raw.find("\"Materials\": {").expect("Materials entry");
    let frames_at = raw.find("\"Frames\": {").expect("Frames entry");
    assert!(materials_at < frames_at, "sheets should follow workbook order");

    let report = read_json(&report_path);
    assert_eq!(
        report["file_info"]["sheet_names"],
        serde_json::json!(["Materials", "Frames"])
    );

    let materials = &report["sheets"]["Materials"];
    assert_eq!(materials["rows"], 2);
    assert_eq!(materials["columns"], 3);
    assert_eq!(materials["data_types"]["MATERIAL_ID"], "object");
    assert_eq!(materials["data_types"]["INDEX"], "float64");
    assert_eq!(materials["data_types"]["QTY"], "int64");
    assert_eq!(materials["sample_data"]["MATERIAL_ID"], serde_json::json!(["CR39", "TRIVEX"]));

    let frames = &report["sheets"]["Frames"];
    assert_eq!(frames["column_names"], serde_json::json!(["Unnamed: 0", "SKU"]));
    assert_eq!(frames["null_counts"]["Unnamed: 0"], 2);
    assert_eq!(frames["data_types"]["SKU"], "int64");

    assert_eq!(report["summary"]["total_rows"], 4);
    assert_eq!(report["summary"]["average_columns_per_sheet"], 2.5);
    let missing = report["tab_validation"]["missing"]
        .as_array()
        .expect("missing tabs");
    assert!(missing.contains(&Value::from("README")));
    assert!(!missing.contains(&Value::from("Materials")));
    assert_eq!(report["tab_validation"]["all_expected_found"], false);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn inspect_missing_workbook_exits_non_zero_without_report() {
    let dir = unique_temp_path("inspect-missing");
    let workbook = dir.join("missing.xlsx");
    let report = dir.join("workbook_analysis.json");

    let output = run(&[
        "inspect",
        workbook.to_string_lossy().as_ref(),
        report.to_string_lossy().as_ref(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("workbook not found"));
    assert!(!report.exists());
}

#[test]
fn inspect_unopenable_workbook_exits_non_zero_without_report() {
    let dir = unique_temp_path("inspect-corrupt");
    fs::create_dir_all(&dir).expect("temp dir");
    let workbook = dir.join("corrupt.xlsx");
    fs::write(&workbook, b"this is not a zip archive").expect("fixture should be written");
    let report = dir.join("workbook_analysis.json");

    let output = run(&[
        "inspect",
        workbook.to_string_lossy().as_ref(),
        report.to_string_lossy().as_ref(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open workbook"));
    assert!(!report.exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn validate_accepts_generated_sample_catalog() {
    let dir = unique_temp_path("validate-sample");
    assert_eq!(run(&["generate", dir.to_string_lossy().as_ref()]).status.code(), Some(0));

    let sample = dir.join("sample_catalog.json");
    let output = run(&["validate", sample.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn validate_flags_dangling_references_in_minimal_catalog() {
    let dir = unique_temp_path("validate-minimal");
    assert_eq!(run(&["generate", dir.to_string_lossy().as_ref()]).status.code(), Some(0));

    let minimal = dir.join("minimal_catalog.json");
    let output = run(&["validate", minimal.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));
    assert!(stderr.contains("unknown reference 'PAL'"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn validate_rejects_non_catalog_json() {
    let path = unique_temp_path("not-a-catalog");
    fs::write(&path, "[1, 2, 3]").expect("fixture should be written");

    let output = run(&["validate", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse catalog JSON"));

    let _ = fs::remove_file(path);
}
