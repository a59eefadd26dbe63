//! Single-point performance evaluation.

use crate::model::{BaselineModel, PerformanceModel};
use rc_core::units::{Power, bhp};
use rc_equipment::{EquipmentConfig, ProcessState};

/// Result of one evaluation. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerResult {
    power_bhp: f64,
    suction: f64,
    discharge: f64,
    rpm: f64,
}

impl PowerResult {
    pub fn power_bhp(&self) -> f64 {
        self.power_bhp
    }

    /// Power as a canonical quantity.
    pub fn power(&self) -> Power {
        bhp(self.power_bhp)
    }

    pub fn suction(&self) -> f64 {
        self.suction
    }

    pub fn discharge(&self) -> f64 {
        self.discharge
    }

    /// RPM the result was computed with.
    pub fn rpm(&self) -> f64 {
        self.rpm
    }

    /// False when the operating point gives negative power.
    pub fn is_physical(&self) -> bool {
        self.power_bhp >= 0.0
    }
}

/// Evaluate the operating point with the baseline model.
pub fn evaluate(equipment: &EquipmentConfig, process: &ProcessState) -> PowerResult {
    evaluate_with(&BaselineModel::default(), equipment, process)
}

/// Evaluate the operating point with any model.
pub fn evaluate_with<M: PerformanceModel + ?Sized>(
    model: &M,
    equipment: &EquipmentConfig,
    process: &ProcessState,
) -> PowerResult {
    let suction = process.suction();
    let discharge = process.discharge();
    PowerResult {
        power_bhp: model.power_bhp(equipment, suction, discharge),
        suction,
        discharge,
        rpm: equipment.rpm(),
    }
}

/// Evaluate and store the power on the process state.
pub fn evaluate_and_record<M: PerformanceModel + ?Sized>(
    model: &M,
    equipment: &EquipmentConfig,
    process: &mut ProcessState,
) -> PowerResult {
    let result = evaluate_with(model, equipment, process);
    process.record_power(result.power_bhp);
    result
}
