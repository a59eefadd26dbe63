//! Evaluation and sweep runs over a validated case.

use std::time::Instant;

use rc_equipment::ProcessState;
use rc_perf::{
    evaluate_and_record, execute_sweep, render, BaselineModel, ExecutionMode, PerformanceModel,
    PowerResult, SweepDefinition, SweepResult,
};
use rc_project::Case;
use tracing::{info, warn};

use crate::error::AppResult;

/// Single-point run output.
#[derive(Debug, Clone)]
pub struct PerformanceRun {
    pub result: PowerResult,
    /// Process state with the computed power recorded
    pub process: ProcessState,
    pub report: String,
}

/// Sweep run output.
#[derive(Debug, Clone)]
pub struct SweepRun {
    pub result: SweepResult,
    pub mode: ExecutionMode,
    pub elapsed_s: f64,
}

/// Evaluate the case's operating point with the baseline model.
pub fn run_performance(case: &Case) -> PerformanceRun {
    run_performance_with(&BaselineModel::default(), case)
}

pub fn run_performance_with<M: PerformanceModel + ?Sized>(model: &M, case: &Case) -> PerformanceRun {
    let mut process = case.process;
    let result = evaluate_and_record(model, &case.equipment, &mut process);

    if result.is_physical() {
        info!(
            model = model.name(),
            power_bhp = result.power_bhp(),
            "performance evaluated"
        );
    } else {
        warn!(
            suction = result.suction(),
            discharge = result.discharge(),
            power_bhp = result.power_bhp(),
            "non-physical operating point: discharge below suction"
        );
    }

    let report = render(Some(&result), &case.equipment, &process, &case.units);
    PerformanceRun {
        result,
        process,
        report,
    }
}

/// Run the case's sweep with the baseline model.
pub fn run_sweep(case: &Case, mode: ExecutionMode) -> SweepRun {
    run_sweep_with(&BaselineModel::default(), case, mode)
}

pub fn run_sweep_with<M: PerformanceModel + ?Sized>(
    model: &M,
    case: &Case,
    mode: ExecutionMode,
) -> SweepRun {
    let start = Instant::now();
    let result = execute_sweep(model, &case.equipment, &case.sweep, mode);
    let elapsed_s = start.elapsed().as_secs_f64();

    let non_physical = result.non_physical_count();
    if non_physical > 0 {
        warn!(
            non_physical,
            total = result.point_count(),
            "sweep contains non-physical operating points"
        );
    }
    info!(
        curves = result.curve_count(),
        points = result.point_count(),
        %mode,
        elapsed_s,
        "sweep completed"
    );

    SweepRun {
        result,
        mode,
        elapsed_s,
    }
}

/// Report text for the case, with or without a computed result.
pub fn render_report(case: &Case, result: Option<&PowerResult>) -> String {
    render(result, &case.equipment, &case.process, &case.units)
}

/// Copy of `case` at another operating point. Unset values keep the case's own.
pub fn with_operating_point(
    case: &Case,
    suction: Option<f64>,
    discharge: Option<f64>,
) -> AppResult<Case> {
    let mut updated = case.clone();
    updated.process.set_pressures(
        suction.unwrap_or(case.process.suction()),
        discharge.unwrap_or(case.process.discharge()),
    )?;
    Ok(updated)
}

/// Copy of `case` with another sweep resolution. Unset values keep the case's own.
pub fn with_resolution(
    case: &Case,
    suction_points: Option<usize>,
    discharge_points: Option<usize>,
) -> AppResult<Case> {
    let mut updated = case.clone();
    updated.sweep = SweepDefinition::new(
        *case.sweep.range(),
        suction_points.unwrap_or(case.sweep.suction_points()),
        discharge_points.unwrap_or(case.sweep.discharge_points()),
    )?;
    Ok(updated)
}
