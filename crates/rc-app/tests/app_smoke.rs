//! Smoke test for the rc-app service layer.

use rc_app::{
    default_case, load_case, open_case, render_report, run_performance, run_sweep, save_case,
    summarize, sweep_to_csv, validate_case, with_operating_point, with_resolution, AppError,
};
use rc_perf::ExecutionMode;

#[test]
fn default_case_runs_end_to_end() {
    let file = default_case("smoke");
    let case = validate_case(&file).expect("default case should validate");

    let run = run_performance(&case);
    assert!((run.result.power_bhp() - 720.0).abs() < 1e-9);
    assert_eq!(run.process.last_power_bhp(), Some(run.result.power_bhp()));
    assert!(run.report.contains("Required Power: 720.00 BHP"));

    let sweep = run_sweep(&case, ExecutionMode::Parallel);
    assert_eq!(sweep.result.curve_count(), 5);
    assert_eq!(sweep.result.point_count(), 50);
    assert!(sweep.elapsed_s >= 0.0);

    let csv = sweep_to_csv(&sweep.result);
    assert_eq!(csv.lines().count(), 51);
}

#[test]
fn save_and_open_yaml_and_json() {
    let file = default_case("persisted");
    let dir = std::env::temp_dir();

    for name in ["rc_app_case.yaml", "rc_app_case.json"] {
        let path = dir.join(name);
        save_case(&path, &file).unwrap();
        assert_eq!(load_case(&path).unwrap(), file);

        let case = open_case(&path).unwrap();
        let summary = summarize(&case);
        assert_eq!(summary.name, "persisted");
        assert_eq!(summary.num_cylinders, 2);
        assert!(!summary.cylinders_configured);
        assert_eq!(summary.grid_points, 50);
    }
}

#[test]
fn missing_file_is_reported() {
    let path = std::env::temp_dir().join("rc_app_does_not_exist.yaml");
    assert!(matches!(
        load_case(&path),
        Err(AppError::CaseFileRead { .. })
    ));
}

#[test]
fn overrides_are_validated() {
    let case = validate_case(&default_case("overrides")).unwrap();

    let moved = with_operating_point(&case, None, Some(650.0)).unwrap();
    assert_eq!(moved.process.suction(), 100.0);
    assert_eq!(moved.process.discharge(), 650.0);
    assert!(with_operating_point(&case, Some(-1.0), None).is_err());

    let coarse = with_resolution(&case, Some(1), Some(1)).unwrap();
    let sweep = run_sweep(&coarse, ExecutionMode::Serial);
    assert_eq!(sweep.result.curve_count(), 1);
    assert!((sweep.result.curves[0].power_bhp[0] - 450.0).abs() < 1e-9);
    assert!(matches!(
        with_resolution(&case, Some(0), None),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn report_without_evaluation() {
    let case = validate_case(&default_case("blank")).unwrap();
    let text = render_report(&case, None);
    assert!(text.contains("Required Power: \n"));
}

#[test]
fn invalid_case_is_not_saved() {
    let mut file = default_case("bad");
    file.equipment.rpm = 0.0;
    let path = std::env::temp_dir().join("rc_app_invalid_case.yaml");
    let _ = std::fs::remove_file(&path);

    assert!(matches!(
        save_case(&path, &file),
        Err(AppError::Validation(_))
    ));
    assert!(!path.exists());
}

#[test]
fn invalid_case_file_fails_to_load() {
    let path = std::env::temp_dir().join("rc_app_invalid_load.yaml");
    let yaml = "\
version: 1
name: broken
equipment:
  motor_type: Electric
  rpm: -5.0
  stroke: 150.0
  num_cylinders: 2
";
    std::fs::write(&path, yaml).unwrap();

    assert!(matches!(load_case(&path), Err(AppError::Validation(_))));
}
