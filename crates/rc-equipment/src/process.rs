//! Process operating point.

use crate::common::check_non_negative;
use crate::error::EquipmentResult;

/// Suction/discharge pressures (session pressure unit) and the last computed power.
///
/// Discharge below suction is accepted; it yields a non-physical (negative)
/// power downstream rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessState {
    suction: f64,
    discharge: f64,
    last_power_bhp: Option<f64>,
}

impl ProcessState {
    pub fn new(suction: f64, discharge: f64) -> EquipmentResult<Self> {
        check_non_negative(suction, "suction pressure")?;
        check_non_negative(discharge, "discharge pressure")?;
        Ok(Self {
            suction,
            discharge,
            last_power_bhp: None,
        })
    }

    pub fn suction(&self) -> f64 {
        self.suction
    }

    pub fn discharge(&self) -> f64 {
        self.discharge
    }

    /// Change the operating point. Clears the last computed power.
    pub fn set_pressures(&mut self, suction: f64, discharge: f64) -> EquipmentResult<()> {
        *self = Self::new(suction, discharge)?;
        Ok(())
    }

    pub fn last_power_bhp(&self) -> Option<f64> {
        self.last_power_bhp
    }

    pub fn record_power(&mut self, power_bhp: f64) {
        self.last_power_bhp = Some(power_bhp);
    }

    /// Pressure rise across the machine.
    pub fn pressure_rise(&self) -> f64 {
        self.discharge - self.suction
    }
}

impl Default for ProcessState {
    fn default() -> Self {
        Self {
            suction: 100.0,
            discharge: 500.0,
            last_power_bhp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EquipmentError;

    #[test]
    fn accepts_discharge_below_suction() {
        let p = ProcessState::new(500.0, 100.0).unwrap();
        assert_eq!(p.pressure_rise(), -400.0);
    }

    #[test]
    fn rejects_negative_pressure() {
        assert!(matches!(
            ProcessState::new(-1.0, 100.0),
            Err(EquipmentError::Validation {
                field: "suction pressure",
                ..
            })
        ));
        assert!(ProcessState::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn set_pressures_clears_power() {
        let mut p = ProcessState::default();
        p.record_power(720.0);
        assert_eq!(p.last_power_bhp(), Some(720.0));
        p.set_pressures(120.0, 480.0).unwrap();
        assert_eq!(p.last_power_bhp(), None);
        assert_eq!(p.suction(), 120.0);
    }

    #[test]
    fn failed_update_keeps_state() {
        let mut p = ProcessState::default();
        p.record_power(720.0);
        assert!(p.set_pressures(-5.0, 480.0).is_err());
        assert_eq!(p.suction(), 100.0);
        assert_eq!(p.last_power_bhp(), Some(720.0));
    }
}
