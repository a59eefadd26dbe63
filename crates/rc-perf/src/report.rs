//! Plain-text performance report.

use crate::evaluate::PowerResult;
use rc_core::unit_system::{UnitKind, UnitQuantity, UnitSystem};
use rc_equipment::{EquipmentConfig, ProcessState};

/// Render the report block.
///
/// With no result the power field is left empty. Pressures and RPM come from
/// the result snapshot when one is given, otherwise from the current state.
pub fn render(
    power_result: Option<&PowerResult>,
    equipment: &EquipmentConfig,
    process: &ProcessState,
    units: &UnitSystem,
) -> String {
    let pressure_unit = units.label(UnitQuantity::Pressure);
    let length_unit = units.label(UnitQuantity::Length);

    let (suction, discharge, rpm) = match power_result {
        Some(r) => (r.suction(), r.discharge(), r.rpm()),
        None => (process.suction(), process.discharge(), equipment.rpm()),
    };
    let power = match power_result {
        Some(r) if r.is_physical() => format!("{:.2} BHP", r.power_bhp()),
        Some(r) => format!("{:.2} BHP (non-physical operating point)", r.power_bhp()),
        None => String::new(),
    };

    let cooler = equipment.air_cooler();
    let cooler_outlet = units
        .temperature()
        .from_canonical(cooler.outlet_temperature().value);

    let mut out = String::new();
    out.push_str("PERFORMANCE REPORT\n");
    out.push_str("-------------------------\n");
    out.push_str(&format!("Suction Pressure: {suction} {pressure_unit}\n"));
    out.push_str(&format!("Discharge Pressure: {discharge} {pressure_unit}\n"));
    out.push_str(&format!("RPM: {rpm}\n"));
    out.push_str(&format!("Required Power: {power}\n"));
    out.push('\n');
    out.push_str("Equipment Configuration:\n");
    out.push_str(&format!("- Motor: {}\n", equipment.motor_type()));
    out.push_str(&format!("- Derate: {}%\n", equipment.derate_pct()));
    out.push_str(&format!("- Stroke: {} {length_unit}\n", equipment.stroke()));
    out.push_str(&format!(
        "- Air Cooler: {}% pressure drop, {:.1} {} outlet (per stage)\n",
        cooler.pressure_drop_pct,
        cooler_outlet,
        units.temperature()
    ));

    if equipment.is_finalized() {
        out.push_str(&format!(
            "- Cylinders: {} ({} stages)\n",
            equipment.num_cylinders(),
            equipment.stage_count()
        ));
        for (i, cyl) in equipment.cylinders().iter().enumerate() {
            out.push_str(&format!(
                "  - Cylinder {}: stage {}, clearance {}%, {}, VVCP {}%\n",
                i + 1,
                cyl.stage,
                cyl.clearance_pct,
                cyl.sace_mode,
                cyl.vvcp_pct
            ));
        }
    } else {
        out.push_str(&format!(
            "- Cylinders: {} (not configured)\n",
            equipment.num_cylinders()
        ));
    }

    out
}
