//! Sweep configuration errors.

use crate::sweeps::SweepAxis;
use thiserror::Error;

pub type PerfResult<T> = Result<T, PerfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerfError {
    /// Range with min > max.
    #[error("Degenerate {axis} range: min {min} > max {max}")]
    DegenerateRange { axis: SweepAxis, min: f64, max: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
