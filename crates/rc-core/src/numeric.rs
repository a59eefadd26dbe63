use crate::RcError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RcError::NonFinite { what, value: v })
    }
}

/// Check that `v` is finite and lies in the closed percentage range [0, 100].
pub fn ensure_percent(v: Real, what: &'static str) -> Result<Real, RcError> {
    let v = ensure_finite(v, what)?;
    if (0.0..=100.0).contains(&v) {
        Ok(v)
    } else {
        Err(RcError::InvalidArg { what })
    }
}
