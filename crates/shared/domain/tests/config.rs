use fcase_domain::abl::AblConditions;
use fcase_domain::config::{CaseConfig, LoggingConfig};
use fcase_domain::vector::Vector3;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let abl = AblConditions::default();
    assert!((abl.u_ref - 10.0).abs() < f64::EPSILON);
    assert!((abl.z_ref - 10.0).abs() < f64::EPSILON);
    assert_eq!(abl.flow_dir, Vector3::X);
    assert_eq!(abl.z_dir, Vector3::Z);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.dir.is_none());
    assert!(!logging.json);
}

#[test]
fn case_config_deserializes() {
    let raw = json!({
        "abl": { "u_ref": 4.5, "z0": 0.03, "flow_dir": "(0 1 0)" },
        "logging": { "level": "debug", "dir": "/tmp/fcase" }
    });

    let cfg: CaseConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!((cfg.abl.u_ref - 4.5).abs() < f64::EPSILON);
    assert!((cfg.abl.z0 - 0.03).abs() < f64::EPSILON);
    assert!((cfg.abl.z_ref - 10.0).abs() < f64::EPSILON, "unset keys keep defaults");
    assert_eq!(cfg.abl.flow_dir, Vector3([0.0, 1.0, 0.0]));
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
fn abl_accepts_openfoam_key_names() {
    let raw = json!({ "Uref": 7.0, "Zref": 20.0, "zDir": [0.0, 0.0, 1.0], "flowDir": "(1 0 0)" });
    let abl: AblConditions = serde_json::from_value(raw).expect("abl deserialize");
    assert!((abl.u_ref - 7.0).abs() < f64::EPSILON);
    assert!((abl.z_ref - 20.0).abs() < f64::EPSILON);
}

#[test]
fn cloned_config_is_copy_on_write() {
    let original = CaseConfig::default();
    let mut changed = original.clone();
    changed.abl.u_ref = 25.0;

    assert!((original.abl.u_ref - 10.0).abs() < f64::EPSILON);
    assert!((changed.abl.u_ref - 25.0).abs() < f64::EPSILON);
}
