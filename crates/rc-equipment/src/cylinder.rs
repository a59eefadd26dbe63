//! Per-cylinder configuration.

use crate::common::check_percent;
use crate::error::{EquipmentError, EquipmentResult};
use std::fmt;
use std::str::FromStr;

/// Cylinder unloading / clearance-control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SaceMode {
    /// One control shared by the whole stage.
    #[default]
    Sace,
    /// Independent control on each cylinder.
    SacePerCylinder,
}

impl fmt::Display for SaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sace => write!(f, "SACE"),
            Self::SacePerCylinder => write!(f, "SACE/Cylinder"),
        }
    }
}

impl FromStr for SaceMode {
    type Err = EquipmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sace" => Ok(Self::Sace),
            "sace/cylinder" | "sace/cilindro" | "sace_per_cylinder" => Ok(Self::SacePerCylinder),
            _ => Err(EquipmentError::UnknownOption {
                what: "SACE mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration of one compressor cylinder.
///
/// Plain data: values are checked by [`CylinderConfig::validate`] when the
/// cylinder is attached to an equipment configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderConfig {
    /// Compression stage this cylinder belongs to (1-based)
    pub stage: u32,
    /// Fixed clearance volume, percent of swept volume
    pub clearance_pct: f64,
    pub sace_mode: SaceMode,
    /// Variable-volume clearance pocket opening, percent
    pub vvcp_pct: f64,
}

impl CylinderConfig {
    pub fn new(stage: u32, clearance_pct: f64, sace_mode: SaceMode, vvcp_pct: f64) -> Self {
        Self {
            stage,
            clearance_pct,
            sace_mode,
            vvcp_pct,
        }
    }

    /// Check the cylinder's fields. `index` is its 0-based position in the list.
    pub fn validate(&self, index: usize) -> EquipmentResult<()> {
        if self.stage == 0 {
            return Err(EquipmentError::InvalidCylinder {
                index,
                field: "stage",
                value: 0.0,
                reason: "stages are numbered from 1",
            });
        }
        check_percent(self.clearance_pct, "clearance").map_err(|_| {
            EquipmentError::InvalidCylinder {
                index,
                field: "clearance",
                value: self.clearance_pct,
                reason: "must be within [0, 100] %",
            }
        })?;
        check_percent(self.vvcp_pct, "vvcp").map_err(|_| EquipmentError::InvalidCylinder {
            index,
            field: "vvcp",
            value: self.vvcp_pct,
            reason: "must be within [0, 100] %",
        })?;
        Ok(())
    }
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            stage: 1,
            clearance_pct: 10.0,
            sace_mode: SaceMode::Sace,
            vvcp_pct: 0.0,
        }
    }
}
