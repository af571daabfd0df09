//! Tint compatibility matrix: the full design x material x treatment x tint
//! cross-product with a single exclusion rule for the glass-only mirror tint.

use super::model::TintCompatibility;
use super::sample::{GLASS_MATERIAL_ID, MIRROR_TINT_ID, TINT_TREATMENT_ID};

pub const BASE_PERCENTAGE_MIN: f64 = 10.0;
pub const BASE_PERCENTAGE_MAX: f64 = 75.0;
pub const COMPATIBILITY_NOTE: &str = "Base tint 10–75% (G-15 fixed 75%)";

/// Treatments that accept tints. Combinations outside this list are never
/// enumerated.
pub const TINTABLE_TREATMENTS: [&str; 1] = [TINT_TREATMENT_ID];

pub fn is_tint_allowed(material_id: &str, tint_id: &str) -> bool {
    !(tint_id == MIRROR_TINT_ID && material_id != GLASS_MATERIAL_ID)
}

pub fn compatibility_cell(
    design_id: &str,
    material_id: &str,
    treatment_id: &str,
    tint_id: &str,
) -> TintCompatibility {
    let allowed = is_tint_allowed(material_id, tint_id);
    let ranged = allowed && tint_id != MIRROR_TINT_ID;

    TintCompatibility {
        design_id: design_id.to_string(),
        material_id: material_id.to_string(),
        treatment_id: treatment_id.to_string(),
        tint_id: tint_id.to_string(),
        allowed,
        style_required: allowed.then(|| "match".to_string()),
        percentage_min: ranged.then_some(BASE_PERCENTAGE_MIN),
        percentage_max: ranged.then_some(BASE_PERCENTAGE_MAX),
        notes: COMPATIBILITY_NOTE.to_string(),
    }
}

/// Enumerate every combination, designs outermost and tints innermost.
pub fn build_tint_compatibility<S: AsRef<str>>(
    design_ids: &[S],
    material_ids: &[S],
    treatment_ids: &[S],
    tint_ids: &[S],
) -> Vec<TintCompatibility> {
    let capacity = design_ids.len() * material_ids.len() * treatment_ids.len() * tint_ids.len();
    let mut rows = Vec::with_capacity(capacity);

    for design in design_ids {
        for material in material_ids {
            for treatment in treatment_ids {
                for tint in tint_ids {
                    rows.push(compatibility_cell(
                        design.as_ref(),
                        material.as_ref(),
                        treatment.as_ref(),
                        tint.as_ref(),
                    ));
                }
            }
        }
    }

    rows
}
