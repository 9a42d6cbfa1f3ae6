use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn inspect() -> Command {
    Command::cargo_bin("fcase-inspect").unwrap()
}

#[test]
fn lists_every_archetype() {
    inspect()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("indoor-wall"))
        .stdout(predicate::str::contains("wind-tunnel-top-and-sides"));
}

#[test]
fn shows_archetype_defaults() {
    inspect()
        .args(["show", "indoor-wall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IndoorWall: wall; refLevels (1, 1)"))
        .stdout(predicate::str::contains("{ type kqRWallFunction; value uniform 0.1; }"));
}

#[test]
fn shows_json_with_reference_velocity() {
    inspect()
        .args(["show", "wind-tunnel-inlet", "--abl-uref", "12.5", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"atmBoundaryLayerInletVelocity\""))
        .stdout(predicate::str::contains("\"Uref\": 12.5"));
}

#[test]
fn rejects_unknown_archetype() {
    inspect().args(["show", "jet-engine"]).assert().failure();
}

#[test]
fn prints_case_patches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("case.toml");
    fs::write(
        &path,
        r#"
[abl]
u_ref = 8.0

[[patches]]
name = "inlet"
archetype = "fixed-inlet"
fields = { U = "(3 0 0)" }

[[patches]]
name = "sides"
archetype = "wind-tunnel-top-and-sides"
"#,
    )
    .unwrap();

    inspect()
        .arg("case")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[inlet]"))
        .stdout(predicate::str::contains("velocity { type fixedValue; value uniform (3 0 0); }"))
        .stdout(predicate::str::contains("WindTunnelTopAndSides: patch\nrefLevels (1, 1)"));
}

#[test]
fn reports_invalid_patches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("case.json");
    fs::write(&path, r#"{"patches": [{"name": "a", "fields": {"U": "fast"}}]}"#).unwrap();

    inspect()
        .arg("case")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for field `U`"));
}
