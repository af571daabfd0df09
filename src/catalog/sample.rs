//! Hand-written sample collections used as development fixtures.

use super::model::{
    AddPowerRule, AvailabilityRule, Design, Frame, FrameDimensions, FrameFlags, InstructionCode,
    InstructionValueType, Material, Tint, Treatment,
};

/// Treatment that tint options are offered under.
pub const TINT_TREATMENT_ID: &str = "TINT";

pub const MIRROR_TINT_ID: &str = "MIRROR_G15_FIXED";

/// Material family the mirror tint is restricted to.
pub const GLASS_MATERIAL_ID: &str = "GLASS";

const STANDARD_TINT_FAMILIES: [&str; 5] = ["Plastic", "Trivex", "Poly", "1.60", "1.67"];

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn sample_materials() -> Vec<Material> {
    vec![
        Material {
            id: "CR39".to_string(),
            display_name: "CR-39".to_string(),
            refractive_index: 1.5,
            available: true,
            rimless_allowed: true,
            notes: text("Standard plastic lens material"),
            lab_output: "CR39 CLEAR".to_string(),
        },
        Material {
            id: "TRIVEX".to_string(),
            display_name: "Trivex".to_string(),
            refractive_index: 1.53,
            available: true,
            rimless_allowed: true,
            notes: text("Impact-resistant material"),
            lab_output: "TRIVEX CLEAR".to_string(),
        },
        Material {
            id: "HI160".to_string(),
            display_name: "High Index 1.60".to_string(),
            refractive_index: 1.6,
            available: true,
            rimless_allowed: true,
            notes: text("Thinner lens option"),
            lab_output: "1.60 CLEAR".to_string(),
        },
    ]
}

pub fn sample_treatments() -> Vec<Treatment> {
    vec![
        Treatment {
            id: "CLEAR".to_string(),
            kind: "Clear".to_string(),
            colors_allowed: None,
            rimless_allowed: true,
            notes: text("No treatment applied"),
            lab_output: "CLEAR".to_string(),
        },
        Treatment {
            id: "TRANS".to_string(),
            kind: "Transition".to_string(),
            colors_allowed: text("GRAY;BROWN (varies by design/material)"),
            rimless_allowed: true,
            notes: text("Photochromic lenses"),
            lab_output: "TRANSITION".to_string(),
        },
        Treatment {
            id: "POLAR".to_string(),
            kind: "Polarized".to_string(),
            colors_allowed: text("GRAY 3;BROWN 3;G-15 3 (varies)"),
            rimless_allowed: false,
            notes: text("No rimless frames with polarized"),
            lab_output: "POLARIZED".to_string(),
        },
        Treatment {
            id: TINT_TREATMENT_ID.to_string(),
            kind: "Tint".to_string(),
            colors_allowed: text("GREY;BROWN;G-15"),
            rimless_allowed: true,
            notes: text("Only treatment that accepts tint options"),
            lab_output: "TINT".to_string(),
        },
    ]
}

pub fn sample_designs() -> Vec<Design> {
    vec![
        Design {
            id: "SV".to_string(),
            category: "Single Vision".to_string(),
            segment_type: None,
            segment_size: None,
            min_segment_height: 0,
            discontinued: false,
            notes: None,
            lab_output: "SV".to_string(),
            segment_output: None,
        },
        Design {
            id: "FT28".to_string(),
            category: "Bifocal".to_string(),
            segment_type: text("FT"),
            segment_size: Some(28.0),
            min_segment_height: 0,
            discontinued: false,
            notes: text("Availability varies by material"),
            lab_output: "FT-28".to_string(),
            segment_output: Some(28.0),
        },
        Design {
            id: "PAL".to_string(),
            category: "Progressive".to_string(),
            segment_type: None,
            segment_size: None,
            min_segment_height: 18,
            discontinued: false,
            notes: text("Minimum segment height 18mm"),
            lab_output: "PROGRESSIVE".to_string(),
            segment_output: None,
        },
    ]
}

pub fn sample_frames() -> Vec<Frame> {
    vec![
        Frame {
            id: 882_020_000_976,
            brand_model: "7012 R".to_string(),
            sku: 882_020_000_976,
            color: "GREY".to_string(),
            material: "Safety".to_string(),
            dimensions: FrameDimensions {
                a: 55,
                b: 34,
                dbl: 17,
                ed: None,
                temple: 140,
                frame_pd: 72,
            },
            collection: text("Aeropostale"),
            flags: FrameFlags {
                safety: true,
                sport: false,
            },
            side_shield_sku: Some(882_020_001_614),
            hero_image: "7012_R_55_GREY_Hero.jpg".to_string(),
            discontinued: false,
            backordered: false,
            notes: None,
        },
        Frame {
            id: 9_398_995_400,
            brand_model: "7730".to_string(),
            sku: 9_398_995_400,
            color: "GUNMETAL".to_string(),
            material: "Metal".to_string(),
            dimensions: FrameDimensions {
                a: 53,
                b: 37,
                dbl: 19,
                ed: None,
                temple: 145,
                frame_pd: 72,
            },
            collection: None,
            flags: FrameFlags {
                safety: false,
                sport: false,
            },
            side_shield_sku: None,
            hero_image: "7730_53_GUNMETAL_Hero.jpg".to_string(),
            discontinued: false,
            backordered: false,
            notes: None,
        },
    ]
}

pub fn sample_add_power_rules() -> Vec<AddPowerRule> {
    vec![
        AddPowerRule {
            id: "CR39_FT28_CLEAR".to_string(),
            design_id: "FT28".to_string(),
            material_id: "CR39".to_string(),
            treatment_id: "CLEAR".to_string(),
            add_min: 0.75,
            add_max: 6.0,
            increment_rule: None,
            notes: None,
        },
        AddPowerRule {
            id: "CR39_PAL_CLEAR".to_string(),
            design_id: "PAL".to_string(),
            material_id: "CR39".to_string(),
            treatment_id: "CLEAR".to_string(),
            add_min: 0.75,
            add_max: 4.0,
            increment_rule: text(">+4.00 in 0.50 steps"),
            notes: text("Min seg 18; else FREEFORM"),
        },
    ]
}

pub fn sample_availability() -> Vec<AvailabilityRule> {
    vec![
        AvailabilityRule {
            id: "CR39_SV_CLEAR".to_string(),
            design_id: "SV".to_string(),
            material_id: "CR39".to_string(),
            treatment_id: "CLEAR".to_string(),
            available: true,
            rimless_allowed: true,
            color_limits: None,
            min_segment_height: 0,
            substitution: None,
            lead_time_weeks: None,
            notes: None,
        },
        AvailabilityRule {
            id: "CR39_PAL_CLEAR".to_string(),
            design_id: "PAL".to_string(),
            material_id: "CR39".to_string(),
            treatment_id: "CLEAR".to_string(),
            available: true,
            rimless_allowed: true,
            color_limits: None,
            min_segment_height: 18,
            substitution: text("If <18, use FREEFORM"),
            lead_time_weeks: Some(4.0),
            notes: text("Add depends on total Rx"),
        },
        AvailabilityRule {
            id: "TRIVEX_SV_POLAR".to_string(),
            design_id: "SV".to_string(),
            material_id: "TRIVEX".to_string(),
            treatment_id: "POLAR".to_string(),
            available: true,
            rimless_allowed: false,
            color_limits: text("BROWN may vary"),
            min_segment_height: 0,
            substitution: None,
            lead_time_weeks: None,
            notes: None,
        },
    ]
}

fn solid_base_tint(id: &str, color: &str) -> Tint {
    Tint {
        id: id.to_string(),
        category: "Base".to_string(),
        color_name: color.to_string(),
        style: text("SOLID"),
        percentage_min: Some(10.0),
        percentage_max: Some(75.0),
        fixed_percentage: None,
        available_in: STANDARD_TINT_FAMILIES
            .iter()
            .map(|family| family.to_string())
            .collect(),
        notes: text("Solid only"),
        lab_output: format!("{color} SOLID {{PCT}}%"),
    }
}

pub fn sample_tints() -> Vec<Tint> {
    vec![
        solid_base_tint("BASE_GREY_SOLID", "GREY"),
        solid_base_tint("BASE_BROWN_SOLID", "BROWN"),
        Tint {
            id: MIRROR_TINT_ID.to_string(),
            category: "Mirror".to_string(),
            color_name: "G-15".to_string(),
            style: None,
            percentage_min: None,
            percentage_max: None,
            fixed_percentage: Some(75.0),
            available_in: vec!["Glass".to_string()],
            notes: text("Glass only; fixed 75%"),
            lab_output: "G-15 MIRROR 75%".to_string(),
        },
    ]
}

pub fn sample_instruction_codes() -> Vec<InstructionCode> {
    vec![
        InstructionCode {
            code: r"\SI:ARC".to_string(),
            label: "Anti-Reflective Coating".to_string(),
            value_type: InstructionValueType::Enum,
            allowed_values: "ARC".to_string(),
            output_template: r"\SI:ARC".to_string(),
        },
        InstructionCode {
            code: r"\TI11".to_string(),
            label: "SOLID TINT".to_string(),
            value_type: InstructionValueType::NumberPct,
            allowed_values: "10-75".to_string(),
            output_template: r"\TI11:SOLID TINT".to_string(),
        },
        InstructionCode {
            code: r"\SI1".to_string(),
            label: "Tint Percent (x10)".to_string(),
            value_type: InstructionValueType::NumberRaw,
            allowed_values: "100-750".to_string(),
            output_template: r"\SI1:{PCT}0".to_string(),
        },
    ]
}
