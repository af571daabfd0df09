//! Inspect the catalog workbook and write its structure report.
//! Run: cargo run --bin analyze_workbook [-- path/to/workbook.xlsx [report.json]]

use std::process::ExitCode;

use lenscat::{cli, logging};

fn main() -> ExitCode {
    logging::init();
    let mut args = vec!["lenscat".to_string(), "inspect".to_string()];
    args.extend(std::env::args().skip(1));
    ExitCode::from(u8::try_from(cli::run_with_args(&args)).unwrap_or(1))
}
