//! Building-level views over scored units.
//!
//! The investment-weighted view answers how good the building is on balance; the
//! worst-case view surfaces a single deficient unit that the average would hide.

use super::domain::{Axis, TrafficLights, UnitAssessment};
use super::rent::{capped, non_negative};

/// Investment-weighted mean per axis over units with positive investment.
///
/// Returns the lights and the weight total. A zero total yields all-zero lights.
/// Weights are taken relative to the largest investment so that products stay finite.
pub fn weighted_by_investment(units: &[UnitAssessment]) -> (TrafficLights, f64) {
    let weighted: Vec<(&UnitAssessment, f64)> = units
        .iter()
        .filter(|unit| unit.total_investment > 0.0)
        .map(|unit| (unit, capped(unit.total_investment)))
        .collect();
    let total = capped(weighted.iter().map(|(_, investment)| investment).sum());
    let largest = weighted
        .iter()
        .map(|(_, investment)| *investment)
        .fold(0.0, f64::max);

    if largest == 0.0 {
        return (TrafficLights::from_fn(|_| 0.0), total);
    }

    let share_total: f64 = weighted
        .iter()
        .map(|(_, investment)| investment / largest)
        .sum();
    let lights = TrafficLights::from_fn(|axis| {
        weighted
            .iter()
            .map(|(unit, investment)| unit.lights.value(axis) * (investment / largest))
            .sum::<f64>()
            / share_total
    });

    (lights, total)
}

/// Lowest score per axis across all units, regardless of investment.
pub fn worst_case(units: &[UnitAssessment]) -> TrafficLights {
    TrafficLights::from_fn(|axis| min_score(units, axis))
}

fn min_score(units: &[UnitAssessment], axis: Axis) -> f64 {
    units
        .iter()
        .map(|unit| unit.lights.value(axis))
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Gross yield in percent across the whole building.
///
/// Units without rent still add their investment to the denominator.
pub fn aggregate_yield(units: &[UnitAssessment], building_renovation_budget: f64) -> f64 {
    let annual_rent = capped(
        units
            .iter()
            .map(|unit| non_negative(unit.monthly_rent.unwrap_or(0.0)) * 12.0)
            .sum(),
    );
    let investment = capped(
        units
            .iter()
            .map(|unit| non_negative(unit.total_investment))
            .sum::<f64>()
            + non_negative(building_renovation_budget),
    );

    if investment > 0.0 {
        capped(annual_rent / investment * 100.0)
    } else {
        0.0
    }
}
