//! Reference operating points and sweeps.

use rc_equipment::{EquipmentConfig, MotorType, ProcessState};
use rc_perf::{
    BaselineModel, ExecutionMode, PerformanceModel, SweepDefinition, SweepRange, evaluate,
    evaluate_with, execute_sweep,
};

fn equipment_at(rpm: f64) -> EquipmentConfig {
    EquipmentConfig::new(MotorType::Electric, rpm, 0.0, 150.0, 2).unwrap()
}

#[test]
fn single_point_reference() {
    let eq = equipment_at(1800.0);
    let process = ProcessState::new(100.0, 500.0).unwrap();
    let result = evaluate(&eq, &process);
    assert!((result.power_bhp() - 720.0).abs() < 1e-9);
}

#[test]
fn reference_sweep() {
    let eq = equipment_at(1800.0);
    let range = SweepRange::new(50.0, 200.0, 300.0, 600.0).unwrap();
    let def = SweepDefinition::new(range, 10, 5).unwrap();
    let result = execute_sweep(&BaselineModel::default(), &eq, &def, ExecutionMode::Serial);

    assert_eq!(result.curve_count(), 5);
    assert_eq!(result.discharge, vec![300.0, 375.0, 450.0, 525.0, 600.0]);
    for curve in &result.curves {
        assert_eq!(curve.flow.len(), 10);
        assert_eq!(curve.power_bhp.len(), 10);
    }

    let first = &result.curves[0];
    assert_eq!(first.discharge, 300.0);
    assert_eq!(result.suction[0], 50.0);
    assert!((first.power_bhp[0] - 450.0).abs() < 1e-9);
    assert!((first.flow[0] - 138.89).abs() < 0.01);

    // Last point: discharge 600, suction 200
    let last = &result.curves[4];
    assert!((last.power_bhp[9] - 720.0).abs() < 1e-9);
}

#[test]
fn one_by_one_sweep_matches_evaluate() {
    let eq = equipment_at(1800.0);
    let range = SweepRange::new(75.0, 200.0, 420.0, 600.0).unwrap();
    let def = SweepDefinition::new(range, 1, 1).unwrap();
    let result = execute_sweep(&BaselineModel::default(), &eq, &def, ExecutionMode::Serial);

    assert_eq!(result.curve_count(), 1);
    assert_eq!(result.curves[0].len(), 1);

    let point = ProcessState::new(75.0, 420.0).unwrap();
    assert_eq!(result.curves[0].power_bhp[0], evaluate(&eq, &point).power_bhp());
}

/// Stand-in for a richer model behind the same contract.
struct ConstantEfficiency {
    efficiency: f64,
}

impl PerformanceModel for ConstantEfficiency {
    fn name(&self) -> &str {
        "constant-efficiency"
    }

    fn power_bhp(&self, equipment: &EquipmentConfig, suction: f64, discharge: f64) -> f64 {
        BaselineModel::default().power_bhp(equipment, suction, discharge) / self.efficiency
    }

    fn flow(&self, equipment: &EquipmentConfig, suction: f64, discharge: f64) -> f64 {
        BaselineModel::default().flow(equipment, suction, discharge)
    }
}

#[test]
fn substitute_model_behind_same_contract() {
    let eq = equipment_at(1800.0);
    let model = ConstantEfficiency { efficiency: 0.8 };
    let process = ProcessState::new(100.0, 500.0).unwrap();
    let result = evaluate_with(&model, &eq, &process);
    assert!((result.power_bhp() - 900.0).abs() < 1e-9);

    let dyn_model: &dyn PerformanceModel = &model;
    let sweep = execute_sweep(dyn_model, &eq, &SweepDefinition::default(), ExecutionMode::Parallel);
    assert_eq!(sweep.model, "constant-efficiency");
    assert_eq!(sweep.curve_count(), 5);
}
