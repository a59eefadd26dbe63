//! Driver and frame configuration.

use crate::common::check_drive;
use crate::cylinder::CylinderConfig;
use crate::error::{EquipmentError, EquipmentResult};
use rc_core::unit_system::{TemperatureUnit, UnitKind, UnitSystem};
use rc_core::units::{Length, Temperature, k};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Compressor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotorType {
    #[default]
    Electric,
    NaturalGas,
}

impl fmt::Display for MotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electric => write!(f, "Electric"),
            Self::NaturalGas => write!(f, "Natural Gas"),
        }
    }
}

impl FromStr for MotorType {
    type Err = EquipmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electric" | "elétrico" | "eletrico" => Ok(Self::Electric),
            "natural gas" | "natural_gas" | "gás natural" | "gas natural" => Ok(Self::NaturalGas),
            _ => Err(EquipmentError::UnknownOption {
                what: "motor type",
                value: s.to_string(),
            }),
        }
    }
}

/// Interstage air cooler. Fixed per-stage design values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirCooler {
    /// Pressure drop across the cooler, percent of stage discharge pressure
    pub pressure_drop_pct: f64,
    /// Gas outlet temperature, °F
    pub outlet_temperature_f: f64,
}

impl AirCooler {
    pub const STANDARD: AirCooler = AirCooler {
        pressure_drop_pct: 1.0,
        outlet_temperature_f: 120.0,
    };

    pub fn outlet_temperature(&self) -> Temperature {
        k(TemperatureUnit::Fahrenheit.to_canonical(self.outlet_temperature_f))
    }
}

impl Default for AirCooler {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Normalized equipment state.
///
/// `rpm`, `derate_pct`, `stroke` and `num_cylinders` are always valid.
/// The cylinder list may be shorter than `num_cylinders` while it is being
/// edited; see [`EquipmentConfig::is_finalized`].
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentConfig {
    motor_type: MotorType,
    rpm: f64,
    derate_pct: f64,
    /// Stroke length in the session's length unit
    stroke: f64,
    num_cylinders: usize,
    cylinders: Vec<CylinderConfig>,
    air_cooler: AirCooler,
}

impl EquipmentConfig {
    /// Create a configuration with an empty cylinder list.
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
            cylinders: Vec::new(),
            air_cooler: AirCooler::STANDARD,
        })
    }

    /// Replace the driver and frame parameters.
    ///
    /// Nothing changes on error. A new cylinder count drops the cylinder list.
    pub fn configure(
        &mut self,
        motor_type: MotorType,
        rpm: f64,
        derate_pct: f64,
        stroke: f64,
        num_cylinders: usize,
    ) -> EquipmentResult<()> {
        check_drive(rpm, derate_pct, stroke, num_cylinders)?;
        if num_cylinders != self.num_cylinders {
            self.cylinders.clear();
        }
        self.motor_type = motor_type;
        self.rpm = rpm;
        self.derate_pct = derate_pct;
        self.stroke = stroke;
        self.num_cylinders = num_cylinders;
        Ok(())
    }

    /// Replace the cylinder list.
    ///
    /// The list must hold exactly `num_cylinders` valid entries.
    pub fn set_cylinders(&mut self, cylinders: Vec<CylinderConfig>) -> EquipmentResult<()> {
        if cylinders.len() != self.num_cylinders {
            return Err(EquipmentError::CylinderCountMismatch {
                expected: self.num_cylinders,
                actual: cylinders.len(),
            });
        }
        for (index, cylinder) in cylinders.iter().enumerate() {
            cylinder.validate(index)?;
        }
        self.cylinders = cylinders;
        Ok(())
    }

    pub fn motor_type(&self) -> MotorType {
        self.motor_type
    }

    pub fn rpm(&self) -> f64 {
        self.rpm
    }

    pub fn derate_pct(&self) -> f64 {
        self.derate_pct
    }

    pub fn stroke(&self) -> f64 {
        self.stroke
    }

    /// Stroke in canonical length, interpreting the stored value in `units`.
    pub fn stroke_length(&self, units: &UnitSystem) -> Length {
        units.length_to_canonical(self.stroke)
    }

    pub fn num_cylinders(&self) -> usize {
        self.num_cylinders
    }

    pub fn cylinders(&self) -> &[CylinderConfig] {
        &self.cylinders
    }

    pub fn air_cooler(&self) -> &AirCooler {
        &self.air_cooler
    }

    /// True once the cylinder list matches the cylinder count.
    pub fn is_finalized(&self) -> bool {
        self.cylinders.len() == self.num_cylinders
    }

    /// Number of distinct compression stages in the cylinder list.
    pub fn stage_count(&self) -> usize {
        self.cylinders
            .iter()
            .map(|c| c.stage)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub(crate) fn from_parts(
        motor_type: MotorType,
        rpm: f64,
        derate_pct: f64,
        stroke: f64,
        cylinders: Vec<CylinderConfig>,
    ) -> Self {
        Self {
            motor_type,
            rpm,
            derate_pct,
            stroke,
            num_cylinders: cylinders.len(),
            cylinders,
            air_cooler: AirCooler::STANDARD,
        }
    }
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            motor_type: MotorType::Electric,
            rpm: 1800.0,
            derate_pct: 0.0,
            stroke: 150.0,
            num_cylinders: 2,
            cylinders: Vec::new(),
            air_cooler: AirCooler::STANDARD,
        }
    }
}
