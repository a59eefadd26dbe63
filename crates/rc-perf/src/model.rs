//! Performance model seam.

use rc_equipment::EquipmentConfig;

/// Maps an equipment configuration and an operating point to driver power and flow.
///
/// Pressures are plain magnitudes in one consistent unit chosen by the caller.
/// Implementations must be pure: the sweep engine calls them from several
/// threads at once and relies on identical inputs giving identical outputs.
pub trait PerformanceModel: Send + Sync {
    /// Model name for logs and reports.
    fn name(&self) -> &str;

    /// Required driver power, BHP.
    fn power_bhp(&self, equipment: &EquipmentConfig, suction: f64, discharge: f64) -> f64;

    /// Volumetric flow at the operating point.
    fn flow(&self, equipment: &EquipmentConfig, suction: f64, discharge: f64) -> f64;
}

/// Linear placeholder relations.
///
/// ```text
/// power = k * (discharge - suction) * rpm
/// flow  = flow_coefficient * (discharge - suction) / rpm
/// ```
///
/// The two relations share no derivation. Discharge below suction gives
/// negative values, which callers treat as a non-physical operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineModel {
    pub k: f64,
    pub flow_coefficient: f64,
}

impl BaselineModel {
    pub const ENGINE_CONSTANT: f64 = 0.001;
    pub const FLOW_COEFFICIENT: f64 = 1000.0;
}

impl Default for BaselineModel {
    fn default() -> Self {
        Self {
            k: Self::ENGINE_CONSTANT,
            flow_coefficient: Self::FLOW_COEFFICIENT,
        }
    }
}

impl PerformanceModel for BaselineModel {
    fn name(&self) -> &str {
        "baseline-linear"
    }

    #[inline]
    fn power_bhp(&self, equipment: &EquipmentConfig, suction: f64, discharge: f64) -> f64 {
        self.k * (discharge - suction) * equipment.rpm()
    }

    #[inline]
    fn flow(&self, equipment: &EquipmentConfig, suction: f64, discharge: f64) -> f64 {
        self.flow_coefficient * (discharge - suction) / equipment.rpm()
    }
}
