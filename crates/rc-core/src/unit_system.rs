//! Session unit selection and conversion to canonical units.
//!
//! Every measured quantity shown to the user has exactly two selectable units.
//! Values entering the evaluator are plain magnitudes in the selected unit;
//! [`convert`] and the `*_to_canonical` helpers are the boundary where a
//! front end normalizes them.
//!
//! Canonical units are SI: Pa (gauge) for pressure, K for temperature,
//! m for length and m³/s for volumetric flow.

use crate::units::{self, Length, Pressure, Temperature, VolumeRate, constants};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Measured quantity that carries a user-selected unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitQuantity {
    Pressure,
    Temperature,
    Length,
    Flow,
}

impl UnitQuantity {
    pub const ALL: [UnitQuantity; 4] = [
        UnitQuantity::Pressure,
        UnitQuantity::Temperature,
        UnitQuantity::Length,
        UnitQuantity::Flow,
    ];

    /// Display labels of the units allowed for this quantity.
    pub fn allowed_labels(self) -> [&'static str; 2] {
        match self {
            Self::Pressure => PressureUnit::ALL.map(UnitKind::label),
            Self::Temperature => TemperatureUnit::ALL.map(UnitKind::label),
            Self::Length => LengthUnit::ALL.map(UnitKind::label),
            Self::Flow => FlowUnit::ALL.map(UnitKind::label),
        }
    }
}

impl fmt::Display for UnitQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => write!(f, "pressure"),
            Self::Temperature => write!(f, "temperature"),
            Self::Length => write!(f, "length"),
            Self::Flow => write!(f, "flow"),
        }
    }
}

impl FromStr for UnitQuantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pressure" => Ok(Self::Pressure),
            "temperature" => Ok(Self::Temperature),
            "length" => Ok(Self::Length),
            "flow" => Ok(Self::Flow),
            other => Err(UnitError::UnknownQuantity(other.to_string())),
        }
    }
}

/// Error in unit selection or conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unsupported {quantity} unit '{unit}'")]
    InvalidUnit { quantity: UnitQuantity, unit: String },

    #[error("Unknown quantity '{0}'")]
    UnknownQuantity(String),
}

/// A unit of one measured quantity, convertible to and from the canonical unit.
pub trait UnitKind: Copy + Eq + fmt::Debug + 'static {
    const QUANTITY: UnitQuantity;
    const ALL: [Self; 2];

    /// Display label, e.g. `"psig"`.
    fn label(self) -> &'static str;

    /// Extra spellings accepted on input.
    fn aliases(self) -> &'static [&'static str];

    fn to_canonical(self, value: f64) -> f64;

    fn from_canonical(self, value: f64) -> f64;

    fn parse_label(text: &str) -> Result<Self, UnitError> {
        let wanted = text.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| {
                unit.label().to_lowercase() == wanted
                    || unit.aliases().iter().any(|a| a.to_lowercase() == wanted)
            })
            .ok_or_else(|| UnitError::InvalidUnit {
                quantity: Self::QUANTITY,
                unit: text.to_string(),
            })
    }
}

/// Convert between two units of the same quantity.
pub fn convert_typed<U: UnitKind>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    to.from_canonical(from.to_canonical(value))
}

/// Convert `value` of `quantity` between two unit labels.
///
/// Both labels must belong to `quantity`; anything else is an
/// [`UnitError::InvalidUnit`].
pub fn convert(value: f64, quantity: UnitQuantity, from: &str, to: &str) -> Result<f64, UnitError> {
    fn go<U: UnitKind>(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        Ok(convert_typed(value, U::parse_label(from)?, U::parse_label(to)?))
    }

    match quantity {
        UnitQuantity::Pressure => go::<PressureUnit>(value, from, to),
        UnitQuantity::Temperature => go::<TemperatureUnit>(value, from, to),
        UnitQuantity::Length => go::<LengthUnit>(value, from, to),
        UnitQuantity::Flow => go::<FlowUnit>(value, from, to),
    }
}

/// Gauge pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressureUnit {
    #[default]
    Psig,
    KgfPerCm2g,
}

impl UnitKind for PressureUnit {
    const QUANTITY: UnitQuantity = UnitQuantity::Pressure;
    const ALL: [Self; 2] = [Self::Psig, Self::KgfPerCm2g];

    fn label(self) -> &'static str {
        match self {
            Self::Psig => "psig",
            Self::KgfPerCm2g => "kgf/cm²g",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Psig => &[],
            Self::KgfPerCm2g => &["kgf/cm2g", "kgf/cm^2g"],
        }
    }

    fn to_canonical(self, value: f64) -> f64 {
        match self {
            Self::Psig => value * constants::PA_PER_PSI,
            Self::KgfPerCm2g => value * constants::PA_PER_KGF_CM2,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            Self::Psig => value / constants::PA_PER_PSI,
            Self::KgfPerCm2g => value / constants::PA_PER_KGF_CM2,
        }
    }
}

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl UnitKind for TemperatureUnit {
    const QUANTITY: UnitQuantity = UnitQuantity::Temperature;
    const ALL: [Self; 2] = [Self::Celsius, Self::Fahrenheit];

    fn label(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Celsius => &["C", "degC", "celsius"],
            Self::Fahrenheit => &["F", "degF", "fahrenheit"],
        }
    }

    fn to_canonical(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value + constants::K_AT_0C,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + constants::K_AT_0C,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value - constants::K_AT_0C,
            Self::Fahrenheit => (value - constants::K_AT_0C) * 9.0 / 5.0 + 32.0,
        }
    }
}

/// Length unit (stroke, cylinder dimensions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Millimeter,
    Inch,
}

impl UnitKind for LengthUnit {
    const QUANTITY: UnitQuantity = UnitQuantity::Length;
    const ALL: [Self; 2] = [Self::Millimeter, Self::Inch];

    fn label(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Inch => "in",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Millimeter => &["millimeter"],
            Self::Inch => &["inch", "inches", "polegadas"],
        }
    }

    fn to_canonical(self, value: f64) -> f64 {
        match self {
            Self::Millimeter => value * constants::M_PER_MM,
            Self::Inch => value * constants::M_PER_IN,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            Self::Millimeter => value / constants::M_PER_MM,
            Self::Inch => value / constants::M_PER_IN,
        }
    }
}

/// Volumetric gas flow unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowUnit {
    #[default]
    ThousandCubicMetersPerDay,
    Mmscfd,
}

impl UnitKind for FlowUnit {
    const QUANTITY: UnitQuantity = UnitQuantity::Flow;
    const ALL: [Self; 2] = [Self::ThousandCubicMetersPerDay, Self::Mmscfd];

    fn label(self) -> &'static str {
        match self {
            Self::ThousandCubicMetersPerDay => "E3·m³/d",
            Self::Mmscfd => "MMSCFD",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ThousandCubicMetersPerDay => &["E3*m3/d", "E3*m³/d", "E3m3/d"],
            Self::Mmscfd => &[],
        }
    }

    fn to_canonical(self, value: f64) -> f64 {
        match self {
            Self::ThousandCubicMetersPerDay => value * constants::M3PS_PER_E3M3D,
            Self::Mmscfd => value * constants::M3PS_PER_MMSCFD,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            Self::ThousandCubicMetersPerDay => value / constants::M3PS_PER_E3M3D,
            Self::Mmscfd => value / constants::M3PS_PER_MMSCFD,
        }
    }
}

macro_rules! impl_label_traits {
    ($($unit:ty),*) => {
        $(
            impl fmt::Display for $unit {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $unit {
                type Err = UnitError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$unit as UnitKind>::parse_label(s)
                }
            }
        )*
    };
}

impl_label_traits!(PressureUnit, TemperatureUnit, LengthUnit, FlowUnit);

/// Currently selected unit for each measured quantity.
///
/// Exactly one unit is selected per quantity at all times. A failed
/// [`UnitSystem::set_unit`] leaves the selection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitSystem {
    pressure: PressureUnit,
    temperature: TemperatureUnit,
    length: LengthUnit,
    flow: FlowUnit,
}

impl UnitSystem {
    pub fn new(
        pressure: PressureUnit,
        temperature: TemperatureUnit,
        length: LengthUnit,
        flow: FlowUnit,
    ) -> Self {
        Self {
            pressure,
            temperature,
            length,
            flow,
        }
    }

    /// Select a unit for `quantity` by its label.
    pub fn set_unit(&mut self, quantity: UnitQuantity, label: &str) -> Result<(), UnitError> {
        match quantity {
            UnitQuantity::Pressure => self.pressure = label.parse()?,
            UnitQuantity::Temperature => self.temperature = label.parse()?,
            UnitQuantity::Length => self.length = label.parse()?,
            UnitQuantity::Flow => self.flow = label.parse()?,
        }
        Ok(())
    }

    pub fn label(&self, quantity: UnitQuantity) -> &'static str {
        match quantity {
            UnitQuantity::Pressure => self.pressure.label(),
            UnitQuantity::Temperature => self.temperature.label(),
            UnitQuantity::Length => self.length.label(),
            UnitQuantity::Flow => self.flow.label(),
        }
    }

    pub fn pressure(&self) -> PressureUnit {
        self.pressure
    }

    pub fn temperature(&self) -> TemperatureUnit {
        self.temperature
    }

    pub fn length(&self) -> LengthUnit {
        self.length
    }

    pub fn flow(&self) -> FlowUnit {
        self.flow
    }

    pub fn set_pressure(&mut self, unit: PressureUnit) {
        self.pressure = unit;
    }

    pub fn set_temperature(&mut self, unit: TemperatureUnit) {
        self.temperature = unit;
    }

    pub fn set_length(&mut self, unit: LengthUnit) {
        self.length = unit;
    }

    pub fn set_flow(&mut self, unit: FlowUnit) {
        self.flow = unit;
    }

    pub fn pressure_to_canonical(&self, value: f64) -> Pressure {
        units::pa(self.pressure.to_canonical(value))
    }

    pub fn temperature_to_canonical(&self, value: f64) -> Temperature {
        units::k(self.temperature.to_canonical(value))
    }

    pub fn length_to_canonical(&self, value: f64) -> Length {
        units::m(self.length.to_canonical(value))
    }

    pub fn flow_to_canonical(&self, value: f64) -> VolumeRate {
        units::m3ps(self.flow.to_canonical(value))
    }

    /// Express a canonical pressure in the selected pressure unit.
    pub fn pressure_from_canonical(&self, value: Pressure) -> f64 {
        self.pressure.from_canonical(value.value)
    }

    pub fn temperature_from_canonical(&self, value: Temperature) -> f64 {
        self.temperature.from_canonical(value.value)
    }

    pub fn length_from_canonical(&self, value: Length) -> f64 {
        self.length.from_canonical(value.value)
    }

    pub fn flow_from_canonical(&self, value: VolumeRate) -> f64 {
        self.flow.from_canonical(value.value)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pressure ({}), Temperature ({}), Length ({}), Flow ({})",
            self.pressure, self.temperature, self.length, self.flow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection() {
        let units = UnitSystem::default();
        assert_eq!(units.pressure(), PressureUnit::Psig);
        assert_eq!(units.temperature(), TemperatureUnit::Celsius);
        assert_eq!(units.length(), LengthUnit::Millimeter);
        assert_eq!(units.flow(), FlowUnit::ThousandCubicMetersPerDay);
    }

    #[test]
    fn set_unit_by_label() {
        let mut units = UnitSystem::default();
        units.set_unit(UnitQuantity::Pressure, "kgf/cm²g").unwrap();
        units.set_unit(UnitQuantity::Temperature, "°F").unwrap();
        units.set_unit(UnitQuantity::Length, "polegadas").unwrap();
        units.set_unit(UnitQuantity::Flow, "mmscfd").unwrap();
        assert_eq!(units.pressure(), PressureUnit::KgfPerCm2g);
        assert_eq!(units.temperature(), TemperatureUnit::Fahrenheit);
        assert_eq!(units.length(), LengthUnit::Inch);
        assert_eq!(units.flow(), FlowUnit::Mmscfd);
    }

    #[test]
    fn reject_bar_leaves_system_unchanged() {
        let mut units = UnitSystem::default();
        let before = units;
        let err = units.set_unit(UnitQuantity::Pressure, "bar").unwrap_err();
        assert_eq!(
            err,
            UnitError::InvalidUnit {
                quantity: UnitQuantity::Pressure,
                unit: "bar".to_string()
            }
        );
        assert_eq!(units, before);
    }

    #[test]
    fn reject_unit_of_other_quantity() {
        let mut units = UnitSystem::default();
        assert!(units.set_unit(UnitQuantity::Length, "psig").is_err());
        assert!(convert(1.0, UnitQuantity::Pressure, "psig", "mm").is_err());
    }

    #[test]
    fn same_unit_conversion_is_identity() {
        let v = convert(123.456, UnitQuantity::Pressure, "psig", "psig").unwrap();
        assert_eq!(v, 123.456);
    }

    #[test]
    fn pressure_conversion() {
        let v = convert(1.0, UnitQuantity::Pressure, "kgf/cm2g", "psig").unwrap();
        assert!((v - 14.223_343_3).abs() < 1e-6);
    }

    #[test]
    fn temperature_conversion() {
        let v = convert(100.0, UnitQuantity::Temperature, "C", "F").unwrap();
        assert!((v - 212.0).abs() < 1e-9);
        let v = convert(120.0, UnitQuantity::Temperature, "°F", "°C").unwrap();
        assert!((v - 48.888_888_9).abs() < 1e-6);
    }

    #[test]
    fn length_conversion() {
        let v = convert(150.0, UnitQuantity::Length, "mm", "in").unwrap();
        assert!((v - 5.905_511_8).abs() < 1e-6);
    }

    #[test]
    fn flow_conversion() {
        let v = convert(1.0, UnitQuantity::Flow, "MMSCFD", "E3*m3/d").unwrap();
        assert!((v - 28.316_846_592).abs() < 1e-9);
    }

    #[test]
    fn canonical_round_trip_through_system() {
        let units = UnitSystem::default();
        let p = units.pressure_to_canonical(100.0);
        assert!((units.pressure_from_canonical(p) - 100.0).abs() < 1e-9);
        let l = units.length_to_canonical(150.0);
        assert!((l.value - 0.15).abs() < 1e-12);
    }

    #[test]
    fn quantity_from_str() {
        assert_eq!("Flow".parse::<UnitQuantity>().unwrap(), UnitQuantity::Flow);
        assert!(matches!(
            "viscosity".parse::<UnitQuantity>(),
            Err(UnitError::UnknownQuantity(_))
        ));
    }

    #[test]
    fn allowed_labels_listed() {
        assert_eq!(
            UnitQuantity::Pressure.allowed_labels(),
            ["psig", "kgf/cm²g"]
        );
    }
}
