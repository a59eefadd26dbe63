//! Case validation: converts a case file into typed, validated domain values.

use crate::schema::{CaseFile, CylinderDef, EquipmentDef, MultirunDef, UnitsDef};
use rc_core::{UnitError, UnitQuantity, UnitSystem};
use rc_equipment::{CylinderConfig, EquipmentConfig, EquipmentError, ProcessState};
use rc_perf::{PerfError, SweepDefinition, SweepRange};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("units: {0}")]
    Units(#[from] UnitError),

    #[error("equipment: {0}")]
    Equipment(#[from] EquipmentError),

    #[error("process: {0}")]
    Process(EquipmentError),

    #[error("multirun: {0}")]
    Multirun(#[from] PerfError),
}

/// Validated snapshot of a case, ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub name: String,
    pub units: UnitSystem,
    pub equipment: EquipmentConfig,
    pub process: ProcessState,
    pub sweep: SweepDefinition,
}

impl Case {
    /// Back to the serializable form.
    pub fn to_file(&self) -> CaseFile {
        CaseFile {
            version: LATEST_VERSION,
            name: self.name.clone(),
            units: (&self.units).into(),
            equipment: (&self.equipment).into(),
            process: (&self.process).into(),
            multirun: (&self.sweep).into(),
        }
    }
}

pub fn validate_case(file: &CaseFile) -> Result<Case, ValidationError> {
    if file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let units = build_units(&file.units)?;
    let equipment = build_equipment(&file.equipment)?;
    let process = ProcessState::new(
        file.process.suction_pressure,
        file.process.discharge_pressure,
    )
    .map_err(ValidationError::Process)?;
    let sweep = build_sweep(&file.multirun)?;

    Ok(Case {
        name: file.name.clone(),
        units,
        equipment,
        process,
        sweep,
    })
}

fn build_units(def: &UnitsDef) -> Result<UnitSystem, UnitError> {
    let mut units = UnitSystem::default();
    units.set_unit(UnitQuantity::Pressure, &def.pressure)?;
    units.set_unit(UnitQuantity::Temperature, &def.temperature)?;
    units.set_unit(UnitQuantity::Length, &def.length)?;
    units.set_unit(UnitQuantity::Flow, &def.flow)?;
    Ok(units)
}

fn build_equipment(def: &EquipmentDef) -> Result<EquipmentConfig, EquipmentError> {
    let mut equipment = EquipmentConfig::new(
        def.motor_type.parse()?,
        def.rpm,
        def.derate_pct,
        def.stroke,
        def.num_cylinders,
    )?;

    // An empty list is an unconfigured frame, not an error.
    if !def.cylinders.is_empty() {
        let cylinders = def
            .cylinders
            .iter()
            .map(build_cylinder)
            .collect::<Result<Vec<_>, _>>()?;
        equipment.set_cylinders(cylinders)?;
    }

    Ok(equipment)
}

fn build_cylinder(def: &CylinderDef) -> Result<CylinderConfig, EquipmentError> {
    Ok(CylinderConfig::new(
        def.stage,
        def.clearance_pct,
        def.sace_mode.parse()?,
        def.vvcp_pct,
    ))
}

fn build_sweep(def: &MultirunDef) -> Result<SweepDefinition, PerfError> {
    let range = SweepRange::new(
        def.suction_min,
        def.suction_max,
        def.discharge_min,
        def.discharge_max,
    )?;
    SweepDefinition::new(range, def.suction_points, def.discharge_points)
}
