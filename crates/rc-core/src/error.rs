use thiserror::Error;

pub type RcResult<T> = Result<T, RcError>;

#[derive(Error, Debug)]
pub enum RcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid unit: {0}")]
    Unit(#[from] crate::unit_system::UnitError),

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
