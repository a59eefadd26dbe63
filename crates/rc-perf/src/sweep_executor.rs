//! Sweep execution over the suction × discharge grid.
//!
//! Connects a [`SweepDefinition`] with a [`PerformanceModel`] and groups the
//! grid into one flow curve and one power curve per discharge sample.

use crate::model::PerformanceModel;
use crate::sweeps::SweepDefinition;
use rayon::prelude::*;
use rc_core::{Tolerances, nearly_equal};
use rc_equipment::EquipmentConfig;
use std::fmt;
use tracing::debug;

/// How grid points are evaluated. Results are identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Serial,
    /// One rayon task per discharge curve.
    Parallel,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Flow and power against the suction samples at one discharge pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct DischargeCurve {
    pub discharge: f64,
    /// One value per suction sample
    pub flow: Vec<f64>,
    /// One value per suction sample, BHP
    pub power_bhp: Vec<f64>,
}

impl DischargeCurve {
    /// Plot legend entry, e.g. `"Discharge: 300"`.
    pub fn legend_label(&self) -> String {
        format!("Discharge: {:.0}", self.discharge)
    }

    pub fn len(&self) -> usize {
        self.power_bhp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power_bhp.is_empty()
    }
}

/// Result of a sweep. Fresh per run.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Model used for the run
    pub model: String,
    /// Ascending suction samples (shared x-axis of every curve)
    pub suction: Vec<f64>,
    /// Ascending discharge samples, one per curve
    pub discharge: Vec<f64>,
    /// Curves in discharge order
    pub curves: Vec<DischargeCurve>,
}

impl SweepResult {
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Curve for a discharge sample, matched within floating tolerance.
    pub fn curve_for(&self, discharge: f64) -> Option<&DischargeCurve> {
        let tol = Tolerances::default();
        self.curves
            .iter()
            .find(|c| nearly_equal(c.discharge, discharge, tol))
    }

    /// Total number of evaluated grid points.
    pub fn point_count(&self) -> usize {
        self.curves.iter().map(DischargeCurve::len).sum()
    }

    /// Grid points whose power came out negative.
    pub fn non_physical_count(&self) -> usize {
        self.curves
            .iter()
            .flat_map(|c| c.power_bhp.iter())
            .filter(|p| **p < 0.0)
            .count()
    }

    /// (min, max) power over the grid, or `None` for an empty result.
    pub fn power_bounds(&self) -> Option<(f64, f64)> {
        self.curves
            .iter()
            .flat_map(|c| c.power_bhp.iter().copied())
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
}

/// Evaluate `model` over every (discharge, suction) pair of `definition`.
///
/// The sample grids are built once. Curve order follows the ascending
/// discharge samples regardless of `mode`.
pub fn execute_sweep<M: PerformanceModel + ?Sized>(
    model: &M,
    equipment: &EquipmentConfig,
    definition: &SweepDefinition,
    mode: ExecutionMode,
) -> SweepResult {
    let suction = definition.suction_samples();
    let discharge = definition.discharge_samples();
    debug!(
        model = model.name(),
        suction_points = suction.len(),
        discharge_points = discharge.len(),
        %mode,
        "executing sweep"
    );

    let curves: Vec<DischargeCurve> = match mode {
        ExecutionMode::Serial => discharge
            .iter()
            .map(|&p_discharge| build_curve(model, equipment, &suction, p_discharge))
            .collect(),
        ExecutionMode::Parallel => discharge
            .par_iter()
            .map(|&p_discharge| build_curve(model, equipment, &suction, p_discharge))
            .collect(),
    };

    SweepResult {
        model: model.name().to_string(),
        suction,
        discharge,
        curves,
    }
}

fn build_curve<M: PerformanceModel + ?Sized>(
    model: &M,
    equipment: &EquipmentConfig,
    suction: &[f64],
    discharge: f64,
) -> DischargeCurve {
    let mut flow = Vec::with_capacity(suction.len());
    let mut power_bhp = Vec::with_capacity(suction.len());

    for &p_suction in suction {
        flow.push(model.flow(equipment, p_suction, discharge));
        power_bhp.push(model.power_bhp(equipment, p_suction, discharge));
    }

    DischargeCurve {
        discharge,
        flow,
        power_bhp,
    }
}
