//! Case file schema definitions.

use rc_core::UnitSystem;
use rc_core::unit_system::UnitQuantity;
use rc_equipment::{CylinderConfig, EquipmentConfig, ProcessState};
use rc_perf::{SweepDefinition, SweepRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub units: UnitsDef,
    #[serde(default)]
    pub equipment: EquipmentDef,
    #[serde(default)]
    pub process: ProcessDef,
    #[serde(default)]
    pub multirun: MultirunDef,
}

impl Default for CaseFile {
    fn default() -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "Untitled case".to_string(),
            units: UnitsDef::default(),
            equipment: EquipmentDef::default(),
            process: ProcessDef::default(),
            multirun: MultirunDef::default(),
        }
    }
}

/// Unit labels, e.g. `psig`, `°C`, `mm`, `E3·m³/d`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitsDef {
    pub pressure: String,
    pub temperature: String,
    pub length: String,
    pub flow: String,
}

impl From<&UnitSystem> for UnitsDef {
    fn from(units: &UnitSystem) -> Self {
        Self {
            pressure: units.label(UnitQuantity::Pressure).to_string(),
            temperature: units.label(UnitQuantity::Temperature).to_string(),
            length: units.label(UnitQuantity::Length).to_string(),
            flow: units.label(UnitQuantity::Flow).to_string(),
        }
    }
}

impl Default for UnitsDef {
    fn default() -> Self {
        Self::from(&UnitSystem::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentDef {
    pub motor_type: String,
    pub rpm: f64,
    #[serde(default)]
    pub derate_pct: f64,
    /// Stroke in the case's length unit
    pub stroke: f64,
    pub num_cylinders: usize,
    /// Empty while cylinders are still unconfigured
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cylinders: Vec<CylinderDef>,
}

impl From<&EquipmentConfig> for EquipmentDef {
    fn from(eq: &EquipmentConfig) -> Self {
        Self {
            motor_type: eq.motor_type().to_string(),
            rpm: eq.rpm(),
            derate_pct: eq.derate_pct(),
            stroke: eq.stroke(),
            num_cylinders: eq.num_cylinders(),
            cylinders: eq.cylinders().iter().map(CylinderDef::from).collect(),
        }
    }
}

impl Default for EquipmentDef {
    fn default() -> Self {
        Self::from(&EquipmentConfig::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CylinderDef {
    pub stage: u32,
    pub clearance_pct: f64,
    pub sace_mode: String,
    #[serde(default)]
    pub vvcp_pct: f64,
}

impl From<&CylinderConfig> for CylinderDef {
    fn from(c: &CylinderConfig) -> Self {
        Self {
            stage: c.stage,
            clearance_pct: c.clearance_pct,
            sace_mode: c.sace_mode.to_string(),
            vvcp_pct: c.vvcp_pct,
        }
    }
}

impl Default for CylinderDef {
    fn default() -> Self {
        Self::from(&CylinderConfig::default())
    }
}

/// Operating point in the case's pressure unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessDef {
    pub suction_pressure: f64,
    pub discharge_pressure: f64,
}

impl From<&ProcessState> for ProcessDef {
    fn from(p: &ProcessState) -> Self {
        Self {
            suction_pressure: p.suction(),
            discharge_pressure: p.discharge(),
        }
    }
}

impl Default for ProcessDef {
    fn default() -> Self {
        Self::from(&ProcessState::default())
    }
}

/// Sweep settings in the case's pressure unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultirunDef {
    pub suction_min: f64,
    pub suction_max: f64,
    pub discharge_min: f64,
    pub discharge_max: f64,
    #[serde(default = "default_suction_points")]
    pub suction_points: usize,
    #[serde(default = "default_discharge_points")]
    pub discharge_points: usize,
}

fn default_suction_points() -> usize {
    SweepDefinition::DEFAULT_SUCTION_POINTS
}

fn default_discharge_points() -> usize {
    SweepDefinition::DEFAULT_DISCHARGE_POINTS
}

impl From<&SweepDefinition> for MultirunDef {
    fn from(def: &SweepDefinition) -> Self {
        let range: &SweepRange = def.range();
        Self {
            suction_min: range.suction_min(),
            suction_max: range.suction_max(),
            discharge_min: range.discharge_min(),
            discharge_max: range.discharge_max(),
            suction_points: def.suction_points(),
            discharge_points: def.discharge_points(),
        }
    }
}

impl Default for MultirunDef {
    fn default() -> Self {
        Self::from(&SweepDefinition::default())
    }
}
