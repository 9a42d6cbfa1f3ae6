use fcase_boundary::*;
use fcase_domain::abl::AblConditions;
use fcase_domain::patch::PatchKind;
use fcase_domain::slots::FieldSlot;
use fcase_fields::{Field, FieldValue};
use serde_json::json;

fn specs() -> Vec<PatchSpec> {
    vec![
        PatchSpec::new("inlet", Archetype::FixedInlet).with_field("U", "(5 0 0)").with_refinement_levels(2, 3),
        PatchSpec::new("outlet", Archetype::FixedOutlet),
        PatchSpec::new("walls", Archetype::IndoorWall).with_field("k", 0.2),
    ]
}

#[test]
fn builds_patches_in_order() {
    let registry = BoundaryRegistry::from_specs(&specs(), &AblConditions::default()).unwrap();
    assert_eq!(registry.len(), 3);
    let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["inlet", "outlet", "walls"]);

    let inlet = registry.get("inlet").unwrap();
    assert_eq!(inlet.velocity(), &Field::fixed_value(FieldValue::uniform("(5 0 0)")));
    assert_eq!(inlet.refinement_levels(), RefinementLevels::new(2, 3));
    assert_eq!(
        registry.get("walls").unwrap().turbulent_kinetic_energy(),
        &Field::fixed_value(FieldValue::uniform("0.2"))
    );
    assert!(registry.get("ground").is_none());
}

#[test]
fn rejects_duplicate_names() {
    let mut specs = specs();
    specs.push(PatchSpec::new("outlet", Archetype::WindTunnelOutlet));
    let err = BoundaryRegistry::from_specs(&specs, &AblConditions::default()).unwrap_err();
    assert!(matches!(err, BoundaryError::DuplicatePatch { ref name, .. } if name == "outlet"));
}

#[test]
fn rejects_unknown_names() {
    let abl = AblConditions::default();

    let spec = PatchSpec { archetype: "jet-engine".into(), ..PatchSpec::new("x", Archetype::Custom) };
    let err = BoundaryRegistry::from_specs(&[spec], &abl).unwrap_err();
    assert!(matches!(err, BoundaryError::UnknownArchetype { .. }));
    assert!(err.to_string().contains("(patch `x`)"));

    let spec = PatchSpec::new("x", Archetype::Custom).with_field("rho", "zeroGradient");
    let err = BoundaryRegistry::from_specs(&[spec], &abl).unwrap_err();
    assert!(matches!(err, BoundaryError::UnknownSlot { ref name, .. } if name == "rho"));
}

#[test]
fn slot_names_fall_back_to_case_insensitive_match() {
    let spec = PatchSpec::new("x", Archetype::Custom).with_field("u", "slip").with_field("P_RGH", "slip");
    let record = spec.build(&AblConditions::default()).unwrap();
    assert_eq!(record.velocity(), &Field::Slip);
    assert_eq!(record.dynamic_pressure(), &Field::Slip);
}

#[test]
fn slot_names_differing_only_in_case_collide() {
    let spec = PatchSpec::new("x", Archetype::Custom).with_field("U", "slip").with_field("u", "zeroGradient");
    let err = BoundaryRegistry::from_specs(&[spec], &AblConditions::default()).unwrap_err();
    assert!(matches!(err, BoundaryError::DuplicateSlot { ref patch, slot: FieldSlot::Velocity, .. } if patch == "x"));
    assert!(err.to_string().contains("(patch `x`)"));
}

#[test]
fn null_fields_take_the_archetype_default() {
    let spec: PatchSpec = serde_json::from_value(json!({
        "name": "w",
        "archetype": "indoor-wall",
        "fields": {"U": null, "p": null}
    }))
    .unwrap();
    let registry = BoundaryRegistry::from_specs(&[spec], &AblConditions::default()).unwrap();
    let wall = registry.get("w").unwrap();
    assert_eq!(wall.velocity(), &Field::fixed_value(FieldValue::uniform("(0 0 0)")));
    assert_eq!(wall.pressure(), &Field::ZeroGradient);
}

#[test]
fn deserializes_from_json() {
    let spec: PatchSpec = serde_json::from_value(json!({
        "name": "floor",
        "kind": "wall",
        "refLevels": ["1", 2],
        "fields": {
            "U": "(0 0 0)",
            "p": {"type": "fixedFluxPressure", "value": 0, "rho": "rhok"},
            "T": 293.15
        }
    }))
    .unwrap();
    assert_eq!(spec.archetype, "custom");

    let record = spec.build(&AblConditions::default()).unwrap();
    assert_eq!(record.kind(), PatchKind::Wall);
    assert_eq!(record.refinement_levels(), RefinementLevels::new(1, 2));
    assert_eq!(record.pressure(), &Field::fixed_flux_pressure(0.0, "rhok"));
    assert_eq!(record.temperature(), &Field::fixed_value(FieldValue::uniform("293.15")));
}

#[test]
fn manual_insert_and_serialization() {
    let mut registry = BoundaryRegistry::new();
    assert!(registry.is_empty());
    registry.insert("sides", BoundaryCondition::wind_tunnel_top_and_sides().build().unwrap()).unwrap();
    assert!(registry.insert("sides", BoundaryCondition::custom().build().unwrap()).is_err());

    let value = serde_json::to_value(&registry).unwrap();
    assert_eq!(value["sides"]["U"], json!({"type": "slip"}));
    assert_eq!((&registry).into_iter().count(), 1);
}
