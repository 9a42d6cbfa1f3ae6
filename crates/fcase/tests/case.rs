use fcase::prelude::*;
use std::fs;

const CASE: &str = r#"
[abl]
u_ref = 15.0
z0 = 0.05

[logging]
level = "debug"

[[patches]]
name = "inlet"
archetype = "wind-tunnel-inlet"
refinement_levels = [2, 3]

[[patches]]
name = "ground"
archetype = "wind-tunnel-ground"

[[patches]]
name = "outlet"
archetype = "wind-tunnel-outlet"
fields = { p = "{ type fixedValue; value uniform 0; }" }
"#;

#[test]
fn loads_case_and_builds_patches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("case.toml");
    fs::write(&path, CASE).unwrap();

    let case = CaseFile::load(&path).unwrap();
    assert!((case.config.abl.u_ref - 15.0).abs() < f64::EPSILON);
    assert_eq!(case.config.logging.level, "debug");
    assert_eq!(case.patches.len(), 3);

    let registry = case.registry().unwrap();
    let inlet = registry.get("inlet").unwrap();
    assert_eq!(inlet.refinement_levels(), RefinementLevels::new(2, 3));
    assert_eq!(inlet.velocity().boundary_layer().map(|abl| abl.u_ref), Some(15.0));
    assert_eq!(
        registry.get("ground").unwrap().turbulent_viscosity(),
        &Field::nutk_atm_rough_wall_function(&case.config.abl, 0.0)
    );
    assert_eq!(registry.get("outlet").unwrap().pressure(), &Field::fixed_value(FieldValue::uniform("0")));
}

#[test]
fn boundary_errors_are_wrapped() {
    let case: CaseFile = serde_json::from_value(serde_json::json!({
        "patches": [{"name": "a", "archetype": "nozzle"}]
    }))
    .unwrap();
    let err = case.registry().unwrap_err();
    assert!(matches!(err, CaseError::Boundary { source: BoundaryError::UnknownArchetype { .. }, .. }));
}

#[test]
fn missing_case_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CaseFile::load(dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.variant_name(), "Config");
}
