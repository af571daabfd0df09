//! Tooling for the optical lens catalog pipeline: a workbook structure
//! inspector and a sample catalog generator for downstream fixtures.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod logging;
