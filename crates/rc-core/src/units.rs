// rc-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Power as UomPower, Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

/// Brake horsepower expressed as canonical power.
#[inline]
pub fn bhp(v: f64) -> Power {
    watts(v * constants::W_PER_HP)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Mechanical horsepower.
    pub const W_PER_HP: f64 = 745.699_871_582_270_2;

    pub const PA_PER_PSI: f64 = 6_894.757_293_168;
    pub const PA_PER_KGF_CM2: f64 = 98_066.5;

    pub const M_PER_MM: f64 = 1.0e-3;
    pub const M_PER_IN: f64 = 0.0254;

    pub const K_AT_0C: f64 = 273.15;

    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    pub const M3_PER_SCF: f64 = 0.028_316_846_592;
    /// 1 E3·m³/d in m³/s.
    pub const M3PS_PER_E3M3D: f64 = 1.0e3 / SECONDS_PER_DAY;
    /// 1 MMSCFD in m³/s (standard conditions not corrected).
    pub const M3PS_PER_MMSCFD: f64 = 1.0e6 * M3_PER_SCF / SECONDS_PER_DAY;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(689_475.7);
        let _t = k(300.0);
        let _l = m(0.15);
        let _q = m3ps(1.2);
        let _w = watts(1.0e3);
        let _r = unitless(0.5);
    }

    #[test]
    fn bhp_is_mechanical_horsepower() {
        let p = bhp(1.0);
        assert!((p.value - 745.699_871_582_270_2).abs() < 1e-9);
    }

    #[test]
    fn mmscfd_in_e3m3d() {
        let ratio = constants::M3PS_PER_MMSCFD / constants::M3PS_PER_E3M3D;
        assert!((ratio - 28.316_846_592).abs() < 1e-9);
    }
}
