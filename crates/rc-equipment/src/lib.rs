//! rc-equipment: validated equipment and process state for a reciprocating compressor.
//!
//! Provides:
//! - `EquipmentConfig`: driver (motor type, RPM, derate) and frame (stroke, cylinders)
//! - `CylinderConfig`: per-cylinder stage, clearance, SACE mode and VVCP
//! - `EquipmentBuilder`: accumulates cylinders and only yields a finalized config
//!   once the cylinder count matches
//! - `ProcessState`: suction/discharge operating point and last computed power
//!
//! All validation happens here, at the point of mutation. The evaluator and the
//! sweep engine downstream assume the values they receive are already valid.
//!
//! # Example
//!
//! ```
//! use rc_equipment::{CylinderConfig, EquipmentBuilder, MotorType, SaceMode};
//!
//! let mut builder = EquipmentBuilder::new(MotorType::Electric, 1800.0, 0.0, 150.0, 2).unwrap();
//! builder.add_cylinder(CylinderConfig::new(1, 10.0, SaceMode::Sace, 0.0)).unwrap();
//! builder.add_cylinder(CylinderConfig::new(2, 12.5, SaceMode::SacePerCylinder, 5.0)).unwrap();
//!
//! let equipment = builder.build().unwrap();
//! assert!(equipment.is_finalized());
//! assert_eq!(equipment.stage_count(), 2);
//! ```

pub mod builder;
pub mod common;
pub mod cylinder;
pub mod equipment;
pub mod error;
pub mod process;

// Re-exports
pub use builder::EquipmentBuilder;
pub use cylinder::{CylinderConfig, SaceMode};
pub use equipment::{AirCooler, EquipmentConfig, MotorType};
pub use error::{EquipmentError, EquipmentResult};
pub use process::ProcessState;
