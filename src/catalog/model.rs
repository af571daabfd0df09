//! Catalog record shapes. Optional fields are written as explicit `null`,
//! never omitted, so downstream consumers can tell "no value" from a
//! missing column.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub display_name: String,
    pub refractive_index: f64,
    pub available: bool,
    pub rimless_allowed: bool,
    pub notes: Option<String>,
    pub lab_output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub colors_allowed: Option<String>,
    pub rimless_allowed: bool,
    pub notes: Option<String>,
    pub lab_output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub category: String,
    pub segment_type: Option<String>,
    pub segment_size: Option<f64>,
    pub min_segment_height: u32,
    pub discontinued: bool,
    pub notes: Option<String>,
    pub lab_output: String,
    pub segment_output: Option<f64>,
}

/// Frame measurements in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDimensions {
    pub a: u32,
    pub b: u32,
    pub dbl: u32,
    pub ed: Option<u32>,
    pub temple: u32,
    pub frame_pd: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameFlags {
    pub safety: bool,
    pub sport: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Numeric SKU; frames are keyed by their barcode.
    pub id: u64,
    pub brand_model: String,
    pub sku: u64,
    pub color: String,
    pub material: String,
    pub dimensions: FrameDimensions,
    pub collection: Option<String>,
    pub flags: FrameFlags,
    pub side_shield_sku: Option<u64>,
    pub hero_image: String,
    pub discontinued: bool,
    pub backordered: bool,
    pub notes: Option<String>,
}

/// Valid ADD power range for one (design, material, treatment) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPowerRule {
    pub id: String,
    pub design_id: String,
    pub material_id: String,
    pub treatment_id: String,
    pub add_min: f64,
    pub add_max: f64,
    pub increment_rule: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRule {
    pub id: String,
    pub design_id: String,
    pub material_id: String,
    pub treatment_id: String,
    pub available: bool,
    pub rimless_allowed: bool,
    pub color_limits: Option<String>,
    pub min_segment_height: u32,
    pub substitution: Option<String>,
    pub lead_time_weeks: Option<f64>,
    pub notes: Option<String>,
}

/// A tint is either percentage-ranged (`percentage_min`/`percentage_max`) or
/// fixed (`fixed_percentage`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tint {
    pub id: String,
    pub category: String,
    pub color_name: String,
    pub style: Option<String>,
    pub percentage_min: Option<f64>,
    pub percentage_max: Option<f64>,
    pub fixed_percentage: Option<f64>,
    pub available_in: Vec<String>,
    pub notes: Option<String>,
    pub lab_output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstructionValueType {
    Enum,
    NumberPct,
    NumberRaw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionCode {
    pub code: String,
    pub label: String,
    pub value_type: InstructionValueType,
    pub allowed_values: String,
    pub output_template: String,
}

/// One cell of the (design, material, treatment, tint) feasibility table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TintCompatibility {
    pub design_id: String,
    pub material_id: String,
    pub treatment_id: String,
    pub tint_id: String,
    pub allowed: bool,
    pub style_required: Option<String>,
    pub percentage_min: Option<f64>,
    pub percentage_max: Option<f64>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub version: String,
    pub last_updated: String,
    pub source_file: String,
    pub validation_status: String,
    pub build_id: String,
    pub tab_count: u32,
    pub total_records: usize,
}

/// Placeholder filled by the downstream catalog build step; always `{}` here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIndexes {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub metadata: CatalogMetadata,
    pub materials: Vec<Material>,
    pub treatments: Vec<Treatment>,
    pub designs: Vec<Design>,
    pub frames: Vec<Frame>,
    pub add_power_rules: Vec<AddPowerRule>,
    pub availability: Vec<AvailabilityRule>,
    pub tints: Vec<Tint>,
    pub instruction_codes: Vec<InstructionCode>,
    pub tint_compatibility: Vec<TintCompatibility>,
    #[serde(default)]
    pub indexes: CatalogIndexes,
}

impl Catalog {
    /// Sum of the nine record collections. `metadata` and `indexes` are not
    /// records.
    pub fn total_records(&self) -> usize {
        self.collection_sizes().iter().map(|(_, len)| len).sum()
    }

    /// Collection sizes in document order, keyed by their JSON names.
    pub fn collection_sizes(&self) -> [(&'static str, usize); 9] {
        [
            ("materials", self.materials.len()),
            ("treatments", self.treatments.len()),
            ("designs", self.designs.len()),
            ("frames", self.frames.len()),
            ("addPowerRules", self.add_power_rules.len()),
            ("availability", self.availability.len()),
            ("tints", self.tints.len()),
            ("instructionCodes", self.instruction_codes.len()),
            ("tintCompatibility", self.tint_compatibility.len()),
        ]
    }
}
