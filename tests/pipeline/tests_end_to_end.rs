//! Full conversions through `convert_contents` and friends.

use crate::helpers::source_fixtures::*;
use modelupdate::emit::EmitOptions;
use modelupdate::{
    ConvertOptions, MissingPolicy, PartPose, Vector3, convert_batch, convert_contents,
    convert_contents_with, convert_layer, output_type_name,
};

// =============================================================================
// SINGLE PART
// =============================================================================

#[test]
fn test_right_arm_converts_to_one_root() {
    let options = ConvertOptions::default().with_base_parts(Vec::<&str>::new());
    let layer = convert_layer(RIGHT_ARM_ONLY, &options).unwrap();

    let names: Vec<_> = layer.root_names().collect();
    assert_eq!(names, vec!["right_arm"]);

    let arm = layer.get("right_arm").unwrap();
    assert_eq!(arm.pose(), PartPose::ZERO);
    assert_eq!(arm.boxes().len(), 1);
    assert_eq!(arm.boxes()[0].offset, Vector3::new(-2.0, -2.0, 0.0));
    assert_eq!(arm.boxes()[0].size, Vector3::new(4.0, 12.0, 4.0));
}

#[test]
fn test_right_arm_renders_integer_literals() {
    let java = convert_contents(RIGHT_ARM_ONLY, "ArmModel", MissingPolicy::Strict).unwrap();

    assert!(java.contains(".addBox(-2, -2, 0, 4, 12, 4)"));
    assert!(!java.contains("F,") && !java.contains("F)"));
    assert!(!java.contains(".mirror()"));
}

#[test]
fn test_unqualified_calls_and_loose_spacing() {
    let options = ConvertOptions::default().with_base_parts(Vec::<&str>::new());
    let layer = convert_layer(UNQUALIFIED_CALLS, &options).unwrap();

    let head = layer.get("head").unwrap();
    assert_eq!(
        head.pose(),
        PartPose::OffsetAndRotation {
            offset: Vector3::new(0.0, -1.0, 0.0),
            rotation: Vector3::ZERO,
        }
    );
    assert_eq!(head.boxes()[0].size, Vector3::new(8.0, 8.0, 8.0));
}

// =============================================================================
// COMPLETE FILE
// =============================================================================

#[test]
fn test_ninja_model_document() {
    let type_name = output_type_name("ModelNinja");
    let java = convert_contents(NINJA_MODEL, &type_name, MissingPolicy::Strict).unwrap();

    assert!(java.contains("public class NinjaModel<T extends LivingEntity> extends HumanoidModel<T>"));
    assert!(java.contains("return LayerDefinition.create(definition, 64, 32);"));

    assert!(java.contains(".addBox(-4, -8, -4, 8, 8, 8)\n"));
    assert!(java.contains(".addBox(-4, -8, -4, 8, 8, 8, new CubeDeformation(0.5F))"));
    assert!(java.contains(", PartPose.offsetAndRotation(-5, 2, 0, 0, 0, 0));"));
    assert!(java.contains(", PartPose.offsetAndRotation(-1.9F, 12, 0, 0, 0, 0));"));
    assert!(java.contains(".addBox(-4.5F, -0.5F, -2.5F, 9, 2, 5)"));
    assert!(java.contains(", PartPose.offsetAndRotation(0, 0, 0, 0.2617993877991494F, 0, 0));"));
    assert!(java.contains("PartDefinition scarf = body.addOrReplaceChild(\"scarf\","));
}

#[test]
fn test_ninja_model_part_order() {
    let java = convert_contents(NINJA_MODEL, "NinjaModel", MissingPolicy::Strict).unwrap();

    let order = [
        "PartDefinition head =",
        "PartDefinition hat =",
        "PartDefinition body =",
        "PartDefinition scarf =",
        "PartDefinition right_arm =",
        "PartDefinition left_arm =",
        "PartDefinition right_leg =",
        "PartDefinition left_leg =",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| java.find(needle).unwrap_or_else(|| panic!("{} missing", needle)))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    for needle in order {
        assert_eq!(java.matches(needle).count(), 1, "{} repeated", needle);
    }
}

#[test]
fn test_mirrored_limbs() {
    let java = convert_contents(NINJA_MODEL, "NinjaModel", MissingPolicy::Strict).unwrap();
    assert_eq!(java.matches(".mirror()").count(), 2);

    let left_arm = java.find("PartDefinition left_arm =").unwrap();
    let mirror = left_arm + java[left_arm..].find(".mirror()").unwrap();
    let offset = left_arm + java[left_arm..].find(".texOffs(40, 16)").unwrap();
    assert!(mirror < offset);
}

// =============================================================================
// REMAPPING AND BASE PARTS
// =============================================================================

#[test]
fn test_split_limbs_fill_base_slots() {
    let layer = convert_layer(SPLIT_LIMBS, &ConvertOptions::default()).unwrap();

    let names: Vec<_> = layer.root_names().collect();
    assert_eq!(names, vec![
        "head",
        "hat",
        "body",
        "right_arm",
        "left_arm",
        "right_leg",
        "left_leg",
        "tail",
    ]);

    let arm = layer.get("right_arm").unwrap();
    assert!(!arm.is_placeholder());
    assert!(arm.child("lower_right_arm").is_some());
    assert!(layer.get("left_arm").unwrap().is_placeholder());
    assert!(layer.get("upper_right_arm").is_none());
}

#[test]
fn test_placeholders_render_bare_builder() {
    let java = convert_contents(SPLIT_LIMBS, "SplitModel", MissingPolicy::Strict).unwrap();
    assert!(java.contains(
        "PartDefinition head = root.addOrReplaceChild(\"head\",\n                CubeListBuilder.create()\n                , PartPose.ZERO);"
    ));
    assert!(java.contains("PartDefinition tail = root.addOrReplaceChild(\"tail\","));
}

#[test]
fn test_tab_indented_output() {
    let options = ConvertOptions::default().with_emit(EmitOptions {
        tab_size: 4,
        insert_spaces: false,
    });
    let java = convert_contents_with(RIGHT_ARM_ONLY, "ArmModel", &options).unwrap();
    assert!(java.contains("\n\t\tPartDefinition right_arm = root.addOrReplaceChild("));
}

// =============================================================================
// EACH PART DECLARED ONCE
// =============================================================================

#[test]
fn test_nested_base_part_declared_once() {
    let java = convert_contents(ARM_UNDER_BODY, "BodyModel", MissingPolicy::Strict).unwrap();

    assert_eq!(java.matches("PartDefinition right_arm =").count(), 1);
    assert!(java.contains("PartDefinition right_arm = body.addOrReplaceChild(\"right_arm\","));
    assert!(!java.contains("PartDefinition right_arm = root."));
}

#[test]
fn test_shared_child_declared_under_first_parent() {
    let java = convert_contents(SHARED_CHILD, "CartModel", MissingPolicy::Strict).unwrap();

    assert_eq!(java.matches("PartDefinition strap =").count(), 1);
    assert!(java.contains("PartDefinition strap = saddle.addOrReplaceChild(\"strap\","));
    assert!(java.contains("PartDefinition cart = root.addOrReplaceChild(\"cart\","));
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let inputs = vec![
        (output_type_name("ModelNinja"), NINJA_MODEL),
        (output_type_name("ModelBroken"), MALFORMED_NUMBER),
        (output_type_name("ModelSplit"), SPLIT_LIMBS),
    ];
    let results = convert_batch(&inputs, &ConvertOptions::default());

    assert_eq!(results.len(), 3);
    assert!(results[0].as_ref().unwrap().contains("class NinjaModel<"));
    assert!(results[1].is_err());
    assert!(results[2].as_ref().unwrap().contains("class SplitModel<"));
}
