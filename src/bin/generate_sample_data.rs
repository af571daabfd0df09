//! Write sample_catalog.json and minimal_catalog.json for development.
//! Run: cargo run --bin generate_sample_data [-- output/dir]

use std::process::ExitCode;

use lenscat::{cli, logging};

fn main() -> ExitCode {
    logging::init();
    let mut args = vec!["lenscat".to_string(), "generate".to_string()];
    args.extend(std::env::args().skip(1));
    ExitCode::from(u8::try_from(cli::run_with_args(&args)).unwrap_or(1))
}
