//! Sample catalog: typed record shapes, literal fixture data, the tint
//! compatibility matrix and the full/minimal JSON snapshots.

pub mod compatibility;
pub mod document;
pub mod model;
pub mod sample;
pub mod validate;

pub use document::{
    build_sample_catalog, render_catalog_summary, write_catalogs, GeneratedCatalogs,
    MinimalLimits, MINIMAL_CATALOG_FILE, MINIMAL_LIMITS, SAMPLE_CATALOG_FILE,
};
pub use model::Catalog;
pub use validate::{load_catalog, validate_catalog, validate_catalog_file, ValidationReport};
