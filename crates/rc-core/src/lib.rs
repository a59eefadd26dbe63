//! rc-core: stable foundation for the compressor performance workspace.
//!
//! Contains:
//! - units (uom SI types + constructors + conversion factors)
//! - unit_system (user-selected display units and conversion to canonical units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod unit_system;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RcError, RcResult};
pub use numeric::*;
pub use unit_system::{
    FlowUnit, LengthUnit, PressureUnit, TemperatureUnit, UnitError, UnitKind, UnitQuantity,
    UnitSystem, convert, convert_typed,
};
pub use units::*;
