//! Sweep grid definition.
//!
//! A sweep covers a rectangular suction × discharge grid. Both axes are
//! evenly spaced and include their endpoints; a single-point axis sits at
//! its minimum.

use crate::error::{PerfError, PerfResult};
use std::fmt;

/// Grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    Suction,
    Discharge,
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suction => write!(f, "suction"),
            Self::Discharge => write!(f, "discharge"),
        }
    }
}

/// Pressure bounds of a sweep, in the session pressure unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    suction_min: f64,
    suction_max: f64,
    discharge_min: f64,
    discharge_max: f64,
}

impl SweepRange {
    /// Create a range. Bounds must be finite and non-negative with min <= max.
    pub fn new(
        suction_min: f64,
        suction_max: f64,
        discharge_min: f64,
        discharge_max: f64,
    ) -> PerfResult<Self> {
        check_axis(SweepAxis::Suction, suction_min, suction_max)?;
        check_axis(SweepAxis::Discharge, discharge_min, discharge_max)?;
        Ok(Self {
            suction_min,
            suction_max,
            discharge_min,
            discharge_max,
        })
    }

    pub fn suction_min(&self) -> f64 {
        self.suction_min
    }

    pub fn suction_max(&self) -> f64 {
        self.suction_max
    }

    pub fn discharge_min(&self) -> f64 {
        self.discharge_min
    }

    pub fn discharge_max(&self) -> f64 {
        self.discharge_max
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            suction_min: 50.0,
            suction_max: 200.0,
            discharge_min: 300.0,
            discharge_max: 600.0,
        }
    }
}

fn check_axis(axis: SweepAxis, min: f64, max: f64) -> PerfResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(PerfError::InvalidArg {
            what: "sweep bounds must be finite",
        });
    }
    if min < 0.0 {
        return Err(PerfError::InvalidArg {
            what: "sweep bounds cannot be negative",
        });
    }
    if min > max {
        return Err(PerfError::DegenerateRange { axis, min, max });
    }
    Ok(())
}

/// Range plus grid resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepDefinition {
    range: SweepRange,
    suction_points: usize,
    discharge_points: usize,
}

impl SweepDefinition {
    pub const DEFAULT_SUCTION_POINTS: usize = 10;
    pub const DEFAULT_DISCHARGE_POINTS: usize = 5;
    /// Upper bound on suction × discharge grid points.
    pub const MAX_GRID_POINTS: usize = 1_000_000;

    pub fn new(
        range: SweepRange,
        suction_points: usize,
        discharge_points: usize,
    ) -> PerfResult<Self> {
        if suction_points == 0 {
            return Err(PerfError::InvalidArg {
                what: "suction_points must be at least 1",
            });
        }
        if discharge_points == 0 {
            return Err(PerfError::InvalidArg {
                what: "discharge_points must be at least 1",
            });
        }
        match suction_points.checked_mul(discharge_points) {
            Some(total) if total <= Self::MAX_GRID_POINTS => {}
            _ => {
                return Err(PerfError::InvalidArg {
                    what: "sweep grid exceeds MAX_GRID_POINTS",
                });
            }
        }
        Ok(Self {
            range,
            suction_points,
            discharge_points,
        })
    }

    /// Default resolution: 10 suction points, 5 discharge points.
    pub fn with_default_points(range: SweepRange) -> Self {
        Self {
            range,
            suction_points: Self::DEFAULT_SUCTION_POINTS,
            discharge_points: Self::DEFAULT_DISCHARGE_POINTS,
        }
    }

    pub fn range(&self) -> &SweepRange {
        &self.range
    }

    pub fn suction_points(&self) -> usize {
        self.suction_points
    }

    pub fn discharge_points(&self) -> usize {
        self.discharge_points
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.suction_points * self.discharge_points
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ascending suction samples.
    pub fn suction_samples(&self) -> Vec<f64> {
        linspace(
            self.range.suction_min,
            self.range.suction_max,
            self.suction_points,
        )
    }

    /// Ascending discharge samples.
    pub fn discharge_samples(&self) -> Vec<f64> {
        linspace(
            self.range.discharge_min,
            self.range.discharge_max,
            self.discharge_points,
        )
    }
}

impl Default for SweepDefinition {
    fn default() -> Self {
        Self::with_default_points(SweepRange::default())
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep suction {}..{} ({} points) x discharge {}..{} ({} points)",
            self.range.suction_min,
            self.range.suction_max,
            self.suction_points,
            self.range.discharge_min,
            self.range.discharge_max,
            self.discharge_points
        )
    }
}

/// `n` evenly spaced values over `[start, end]`, both ends included.
///
/// `n == 1` yields `[start]`; `n == 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let mut points = Vec::with_capacity(n);
            let delta = (end - start) / (n - 1) as f64;

            for i in 0..n {
                points.push(start + i as f64 * delta);
            }

            // Ensure exact endpoint
            points[n - 1] = end;
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_spacing() {
        let points = linspace(300.0, 600.0, 5);
        assert_eq!(points, vec![300.0, 375.0, 450.0, 525.0, 600.0]);
    }

    #[test]
    fn endpoints_are_exact() {
        let points = linspace(50.0, 200.0, 10);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], 50.0);
        assert_eq!(points[9], 200.0);
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_point_uses_min() {
        assert_eq!(linspace(50.0, 200.0, 1), vec![50.0]);
        assert!(linspace(50.0, 200.0, 0).is_empty());
    }

    #[test]
    fn reject_oversized_grid() {
        let range = SweepRange::default();
        assert!(matches!(
            SweepDefinition::new(range, usize::MAX, 2),
            Err(PerfError::InvalidArg { .. })
        ));
        assert!(matches!(
            SweepDefinition::new(range, SweepDefinition::MAX_GRID_POINTS + 1, 1),
            Err(PerfError::InvalidArg { .. })
        ));

        let largest = SweepDefinition::new(range, 1000, 1000).unwrap();
        assert_eq!(largest.len(), SweepDefinition::MAX_GRID_POINTS);
    }

    #[test]
    fn zero_width_range() {
        let points = linspace(100.0, 100.0, 3);
        assert_eq!(points, vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn reject_min_above_max() {
        assert_eq!(
            SweepRange::new(200.0, 50.0, 300.0, 600.0).unwrap_err(),
            PerfError::DegenerateRange {
                axis: SweepAxis::Suction,
                min: 200.0,
                max: 50.0
            }
        );
        assert!(matches!(
            SweepRange::new(50.0, 200.0, 600.0, 300.0),
            Err(PerfError::DegenerateRange {
                axis: SweepAxis::Discharge,
                ..
            })
        ));
    }

    #[test]
    fn reject_negative_or_nan_bounds() {
        assert!(SweepRange::new(-1.0, 200.0, 300.0, 600.0).is_err());
        assert!(SweepRange::new(50.0, f64::NAN, 300.0, 600.0).is_err());
    }

    #[test]
    fn reject_zero_points() {
        let range = SweepRange::default();
        assert!(SweepDefinition::new(range, 0, 5).is_err());
        assert!(SweepDefinition::new(range, 10, 0).is_err());
    }

    #[test]
    fn default_definition() {
        let def = SweepDefinition::default();
        assert_eq!(def.suction_points(), 10);
        assert_eq!(def.discharge_points(), 5);
        assert_eq!(def.len(), 50);
        assert_eq!(def.discharge_samples()[0], 300.0);
    }

    #[test]
    fn display() {
        let text = SweepDefinition::default().to_string();
        assert!(text.contains("50..200"));
        assert!(text.contains("(5 points)"));
    }
}
