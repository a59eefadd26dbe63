//! Error types for equipment and process configuration.

use thiserror::Error;

/// Errors raised when configuration inputs are rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquipmentError {
    #[error("Invalid {field}: {value} ({reason})")]
    Validation {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid cylinder {index}: {field} = {value} ({reason})")]
    InvalidCylinder {
        index: usize,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Cylinder count mismatch: expected {expected}, got {actual}")]
    CylinderCountMismatch { expected: usize, actual: usize },

    #[error("Cylinder list is full ({capacity} cylinders configured)")]
    CylinderOverflow { capacity: usize },

    #[error("Unknown {what}: '{value}'")]
    UnknownOption { what: &'static str, value: String },
}

pub type EquipmentResult<T> = Result<T, EquipmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EquipmentError::CylinderCountMismatch {
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("got 2"));
    }
}
