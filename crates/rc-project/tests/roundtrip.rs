use rc_project::schema::*;
use rc_perf::PerfError;
use rc_project::{
    ProjectError, ValidationError, load_json, load_yaml, save_json, save_yaml, validate_case,
};

fn two_stage_case() -> CaseFile {
    CaseFile {
        version: 1,
        name: "Two stage booster".to_string(),
        units: UnitsDef {
            pressure: "kgf/cm²g".to_string(),
            temperature: "°F".to_string(),
            length: "in".to_string(),
            flow: "MMSCFD".to_string(),
        },
        equipment: EquipmentDef {
            motor_type: "Natural Gas".to_string(),
            rpm: 1200.0,
            derate_pct: 7.5,
            stroke: 5.5,
            num_cylinders: 2,
            cylinders: vec![
                CylinderDef {
                    stage: 1,
                    clearance_pct: 12.0,
                    sace_mode: "SACE".to_string(),
                    vvcp_pct: 0.0,
                },
                CylinderDef {
                    stage: 2,
                    clearance_pct: 9.5,
                    sace_mode: "SACE/Cylinder".to_string(),
                    vvcp_pct: 40.0,
                },
            ],
        },
        process: ProcessDef {
            suction_pressure: 7.0,
            discharge_pressure: 35.0,
        },
        multirun: MultirunDef {
            suction_min: 5.0,
            suction_max: 10.0,
            discharge_min: 30.0,
            discharge_max: 40.0,
            suction_points: 6,
            discharge_points: 3,
        },
    }
}

#[test]
fn roundtrip_yaml_default_case() {
    let case = CaseFile::default();
    validate_case(&case).unwrap();

    let path = std::env::temp_dir().join("rc_project_roundtrip_default.yaml");
    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn roundtrip_json_two_stage_case() {
    let case = two_stage_case();

    let path = std::env::temp_dir().join("rc_project_roundtrip_two_stage.json");
    save_json(&path, &case).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn minimal_yaml_fills_defaults() {
    let yaml = r#"
version: 1
name: Minimal
equipment:
  motor_type: Electric
  rpm: 900
  stroke: 120
  num_cylinders: 1
process:
  suction_pressure: 80
  discharge_pressure: 300
"#;
    let case: CaseFile = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(case.units, UnitsDef::default());
    assert_eq!(case.equipment.derate_pct, 0.0);
    assert!(case.equipment.cylinders.is_empty());
    assert_eq!(case.multirun.suction_points, 10);

    let validated = validate_case(&case).unwrap();
    assert_eq!(validated.equipment.rpm(), 900.0);
    assert!(!validated.equipment.is_finalized());
}

#[test]
fn save_rejects_invalid_case() {
    let mut case = two_stage_case();
    case.equipment.rpm = 0.0;

    let path = std::env::temp_dir().join("rc_project_invalid.yaml");
    let err = save_yaml(&path, &case).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn oversized_sweep_grid_is_rejected() {
    let mut case = CaseFile::default();
    case.multirun.suction_points = usize::MAX;
    case.multirun.discharge_points = 2;

    assert!(matches!(
        validate_case(&case),
        Err(ValidationError::Multirun(PerfError::InvalidArg { .. }))
    ));
}
