//! rc-perf: performance evaluation and parametric sweeps.
//!
//! Provides:
//! - `PerformanceModel` trait, the seam where a thermodynamic model plugs in
//! - `BaselineModel`, the linear placeholder relations
//! - Single-point evaluation (`evaluate`) producing a `PowerResult`
//! - Suction × discharge sweeps grouped into per-discharge curves
//! - Plain-text report rendering
//!
//! Evaluation and sweeps are pure numeric functions. They never validate
//! their inputs; `rc-equipment` and `SweepDefinition` do that up front.
//!
//! # Example
//!
//! ```
//! use rc_equipment::{EquipmentConfig, ProcessState};
//! use rc_perf::{BaselineModel, ExecutionMode, SweepDefinition, SweepRange, evaluate, execute_sweep};
//!
//! let equipment = EquipmentConfig::default(); // 1800 rpm
//! let process = ProcessState::new(100.0, 500.0).unwrap();
//! let result = evaluate(&equipment, &process);
//! assert!((result.power_bhp() - 720.0).abs() < 1e-9);
//!
//! let range = SweepRange::new(50.0, 200.0, 300.0, 600.0).unwrap();
//! let def = SweepDefinition::new(range, 10, 5).unwrap();
//! let sweep = execute_sweep(&BaselineModel::default(), &equipment, &def, ExecutionMode::Serial);
//! assert_eq!(sweep.curve_count(), 5);
//! ```

pub mod error;
pub mod evaluate;
pub mod model;
pub mod report;
pub mod sweep_executor;
pub mod sweeps;

// Re-exports for ergonomics
pub use error::{PerfError, PerfResult};
pub use evaluate::{PowerResult, evaluate, evaluate_and_record, evaluate_with};
pub use model::{BaselineModel, PerformanceModel};
pub use report::render;
pub use sweep_executor::{DischargeCurve, ExecutionMode, SweepResult, execute_sweep};
pub use sweeps::{SweepAxis, SweepDefinition, SweepRange, linspace};
