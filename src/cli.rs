use std::path::{Path, PathBuf};

use crate::catalog::{
    build_sample_catalog, render_catalog_summary, validate_catalog_file, write_catalogs,
    SAMPLE_CATALOG_FILE,
};
use crate::config::{resolve_config, Config};
use crate::inspect::{inspect_workbook, render_sheet_details, render_summary, write_report};

pub const USAGE: &str = "usage: lenscat <inspect|generate|validate>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Inspect,
    Generate,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("inspect") => Some(Command::Inspect),
        Some("generate") => Some(Command::Generate),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

/// Dispatch `args` (program name first) and return the process exit code.
pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };

    let config = match resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 1;
        }
    };

    let rest = args.get(2..).unwrap_or_default();
    match command {
        Command::Inspect => handle_inspect(&config, rest),
        Command::Generate => handle_generate(&config, rest),
        Command::Validate => handle_validate(&config, rest),
    }
}

fn path_arg(raw: Option<&String>, default: &Path) -> PathBuf {
    raw.map(PathBuf::from).unwrap_or_else(|| default.to_path_buf())
}

/// `inspect [workbook] [report]`
pub fn handle_inspect(config: &Config, args: &[String]) -> i32 {
    let workbook_path = path_arg(args.first(), &config.workbook_path);
    let report_path = path_arg(args.get(1), &config.report_path);

    let report = match inspect_workbook(&workbook_path, &config.expected_tabs) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("inspect failed: {err}");
            return 1;
        }
    };

    println!("File: {}", report.file_info.path);
    println!("Total Sheets: {}", report.file_info.total_sheets);
    println!();
    for (name, entry) in report.sheets.iter() {
        println!("{}", render_sheet_details(name, entry));
    }

    if let Err(err) = write_report(&report, &report_path) {
        eprintln!("inspect failed: {err}");
        return 1;
    }

    println!("{}", render_summary(&report));
    println!("Analysis complete! Results saved to {}", report_path.display());
    0
}

/// `generate [output-dir]`
pub fn handle_generate(config: &Config, args: &[String]) -> i32 {
    let output_dir = path_arg(args.first(), &config.output_dir);

    tracing::info!("generating sample catalog data");
    let catalog = build_sample_catalog(&chrono::Local::now());

    match write_catalogs(&output_dir, &catalog) {
        Ok(generated) => {
            println!("Sample catalog generated: {}", generated.sample_path.display());
            println!("{}", render_catalog_summary(&catalog));
            println!("Minimal catalog generated: {}", generated.minimal_path.display());
            println!("   Total Records: {}", generated.minimal_records);
            0
        }
        Err(err) => {
            eprintln!("generate failed: {err}");
            1
        }
    }
}

/// `validate [catalog.json]`
pub fn handle_validate(config: &Config, args: &[String]) -> i32 {
    let default_path = config.output_dir.join(SAMPLE_CATALOG_FILE);
    let path = path_arg(args.first(), &default_path);

    match validate_catalog_file(&path) {
        Ok(report) if !report.has_errors() => {
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            println!(
                "validation passed: {} ({} warning(s))",
                path.display(),
                report.warnings().count()
            );
            0
        }
        Ok(report) => {
            eprintln!("validation failed: {} issue(s)", report.errors().count());
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            1
        }
        Err(err) => {
            eprintln!("validate failed: {err}");
            1
        }
    }
}
