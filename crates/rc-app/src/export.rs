//! Sweep data export.

use rc_perf::SweepResult;

/// Flatten a sweep into CSV, one row per grid point, grouped by discharge.
pub fn sweep_to_csv(result: &SweepResult) -> String {
    let mut csv = String::from("discharge,suction,flow,power_bhp\n");
    for curve in &result.curves {
        for ((suction, flow), power) in result
            .suction
            .iter()
            .zip(&curve.flow)
            .zip(&curve.power_bhp)
        {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                curve.discharge, suction, flow, power
            ));
        }
    }
    csv
}
