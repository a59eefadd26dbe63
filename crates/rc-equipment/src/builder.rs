//! Incremental cylinder configuration.

use crate::common::check_drive;
use crate::cylinder::CylinderConfig;
use crate::equipment::{EquipmentConfig, MotorType};
use crate::error::{EquipmentError, EquipmentResult};

/// Accumulates validated cylinders for an equipment frame.
///
/// The finalized [`EquipmentConfig`] is only produced by [`EquipmentBuilder::build`]
/// once exactly `num_cylinders` cylinders have been added.
#[derive(Debug, Clone)]
pub struct EquipmentBuilder {
    motor_type: MotorType,
    rpm: f64,
    derate_pct: f64,
    stroke: f64,
    num_cylinders: usize,
    cylinders: Vec<CylinderConfig>,
}

impl EquipmentBuilder {
    pub fn new(
        motor_type: MotorType,
        rpm: f64,
        derate_pct: f64,
        stroke: f64,
        num_cylinders: usize,
    ) -> EquipmentResult<Self> {
        check_drive(rpm, derate_pct, stroke, num_cylinders)?;
        Ok(Self {
            motor_type,
            rpm,
            derate_pct,
            stroke,
            num_cylinders,
            cylinders: Vec::with_capacity(num_cylinders),
        })
    }

    /// Start from an existing configuration's frame, with an empty cylinder list.
    pub fn from_config(config: &EquipmentConfig) -> Self {
        Self {
            motor_type: config.motor_type(),
            rpm: config.rpm(),
            derate_pct: config.derate_pct(),
            stroke: config.stroke(),
            num_cylinders: config.num_cylinders(),
            cylinders: Vec::with_capacity(config.num_cylinders()),
        }
    }

    /// Append the next cylinder.
    pub fn add_cylinder(&mut self, cylinder: CylinderConfig) -> EquipmentResult<&mut Self> {
        if self.cylinders.len() == self.num_cylinders {
            return Err(EquipmentError::CylinderOverflow {
                capacity: self.num_cylinders,
            });
        }
        cylinder.validate(self.cylinders.len())?;
        self.cylinders.push(cylinder);
        Ok(self)
    }

    /// Cylinders still needed before [`EquipmentBuilder::build`] succeeds.
    pub fn remaining(&self) -> usize {
        self.num_cylinders - self.cylinders.len()
    }

    pub fn build(self) -> EquipmentResult<EquipmentConfig> {
        if self.cylinders.len() != self.num_cylinders {
            return Err(EquipmentError::CylinderCountMismatch {
                expected: self.num_cylinders,
                actual: self.cylinders.len(),
            });
        }
        Ok(EquipmentConfig::from_parts(
            self.motor_type,
            self.rpm,
            self.derate_pct,
            self.stroke,
            self.cylinders,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cylinder::SaceMode;

    #[test]
    fn build_after_all_cylinders() {
        let mut builder = EquipmentBuilder::new(MotorType::NaturalGas, 1200.0, 5.0, 127.0, 2).unwrap();
        builder
            .add_cylinder(CylinderConfig::default())
            .unwrap()
            .add_cylinder(CylinderConfig::new(2, 8.0, SaceMode::SacePerCylinder, 30.0))
            .unwrap();
        assert_eq!(builder.remaining(), 0);

        let eq = builder.build().unwrap();
        assert!(eq.is_finalized());
        assert_eq!(eq.motor_type(), MotorType::NaturalGas);
        assert_eq!(eq.cylinders()[1].vvcp_pct, 30.0);
    }

    #[test]
    fn partial_list_is_rejected() {
        let mut builder = EquipmentBuilder::new(MotorType::Electric, 1800.0, 0.0, 150.0, 3).unwrap();
        builder.add_cylinder(CylinderConfig::default()).unwrap();
        builder.add_cylinder(CylinderConfig::default()).unwrap();
        assert_eq!(builder.remaining(), 1);
        assert_eq!(
            builder.build().unwrap_err(),
            EquipmentError::CylinderCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn overflow_is_rejected() {
        let mut builder = EquipmentBuilder::new(MotorType::Electric, 1800.0, 0.0, 150.0, 1).unwrap();
        builder.add_cylinder(CylinderConfig::default()).unwrap();
        assert!(matches!(
            builder.add_cylinder(CylinderConfig::default()),
            Err(EquipmentError::CylinderOverflow { capacity: 1 })
        ));
    }

    #[test]
    fn invalid_cylinder_is_not_added() {
        let mut builder = EquipmentBuilder::new(MotorType::Electric, 1800.0, 0.0, 150.0, 2).unwrap();
        let bad = CylinderConfig::new(1, -3.0, SaceMode::Sace, 0.0);
        assert!(builder.add_cylinder(bad).is_err());
        assert_eq!(builder.remaining(), 2);
    }

    #[test]
    fn from_config_keeps_frame() {
        let base = EquipmentConfig::new(MotorType::NaturalGas, 900.0, 10.0, 200.0, 4).unwrap();
        let builder = EquipmentBuilder::from_config(&base);
        assert_eq!(builder.remaining(), 4);
    }
}
