//! Shared field checks for configuration inputs.

use crate::error::{EquipmentError, EquipmentResult};

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, field: &'static str) -> EquipmentResult<f64> {
    if !value.is_finite() {
        return Err(EquipmentError::Validation {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(EquipmentError::Validation {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Ensure a value is finite and not negative.
pub fn check_non_negative(value: f64, field: &'static str) -> EquipmentResult<f64> {
    if !value.is_finite() {
        return Err(EquipmentError::Validation {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(EquipmentError::Validation {
            field,
            value,
            reason: "cannot be negative",
        });
    }
    Ok(value)
}

/// Ensure a percentage lies in [0, 100].
pub fn check_percent(value: f64, field: &'static str) -> EquipmentResult<f64> {
    rc_core::ensure_percent(value, field).map_err(|_| EquipmentError::Validation {
        field,
        value,
        reason: "must be within [0, 100] %",
    })
}

/// Validate the driver and frame parameters shared by config and builder.
pub fn check_drive(
    rpm: f64,
    derate_pct: f64,
    stroke: f64,
    num_cylinders: usize,
) -> EquipmentResult<()> {
    check_positive(rpm, "rpm")?;
    check_percent(derate_pct, "derate")?;
    check_positive(stroke, "stroke")?;
    if num_cylinders == 0 {
        return Err(EquipmentError::Validation {
            field: "num_cylinders",
            value: 0.0,
            reason: "at least one cylinder is required",
        });
    }
    Ok(())
}
