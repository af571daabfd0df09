//! Tool configuration: paths and the expected workbook tab list.
//! Read from an optional YAML file; every key falls back to a default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "lenscat.yaml";
pub const CONFIG_ENV_VAR: &str = "LENSCAT_CONFIG";
pub const DEFAULT_WORKBOOK_PATH: &str = "data/Optical_Normalized_Catalog_FULL_v2.xlsx";
pub const DEFAULT_REPORT_PATH: &str = "data/workbook_analysis.json";
pub const DEFAULT_OUTPUT_DIR: &str = "data";

pub const DEFAULT_EXPECTED_TABS: [&str; 10] = [
    "README",
    "Materials",
    "Treatments",
    "Designs",
    "AddPowerRules",
    "Availability",
    "Tints",
    "InstructionCodes",
    "TintCompatibility",
    "Frames",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workbook_path: PathBuf,
    pub report_path: PathBuf,
    pub output_dir: PathBuf,
    /// Sheet names the inspector expects to find. Only drives the tab
    /// validation block and console warnings.
    pub expected_tabs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            expected_tabs: DEFAULT_EXPECTED_TABS
                .iter()
                .map(|tab| tab.to_string())
                .collect(),
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading configuration");
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(raw: &str) -> Result<Config, serde_yaml::Error> {
    // An empty file deserializes as null rather than an empty mapping.
    if raw.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(raw)
}

/// Resolve the active configuration. An explicit `$LENSCAT_CONFIG` must load;
/// the default `lenscat.yaml` is used only when present.
pub fn resolve_config() -> Result<Config, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config(path);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return load_config(default_path);
    }
    Ok(Config::default())
}
