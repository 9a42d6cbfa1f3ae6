use fcase_domain::constants::{PATCH, VELOCITY, WALL};
use fcase_domain::patch::PatchKind;
use fcase_domain::slots::FieldSlot;

#[test]
fn constants_match_openfoam_spelling() {
    assert_eq!(VELOCITY, "U");
    assert_eq!(FieldSlot::DynamicPressure.name(), "p_rgh");
    assert_eq!(FieldSlot::ThermalDiffusivity.name(), "alphat");
    assert_eq!(PATCH, "patch");
    assert_eq!(WALL, "wall");
}

#[test]
fn patch_kind_parses_and_prints() {
    assert_eq!("wall".parse::<PatchKind>(), Ok(PatchKind::Wall));
    assert_eq!(PatchKind::default().to_string(), "patch");
    assert!("symmetryPlane".parse::<PatchKind>().is_err());
}
