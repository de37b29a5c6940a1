use super::domain::{EnergyClass, HeatingType, UnitPhysicalAttributes};
use super::profile::{ScoringProfile, ScoringVariant};

pub fn energy_class_score(class: EnergyClass) -> f64 {
    match class {
        EnergyClass::APlus => 10.0,
        EnergyClass::A => 9.0,
        EnergyClass::B => 8.0,
        EnergyClass::C => 6.0,
        EnergyClass::D => 4.0,
        EnergyClass::E => 2.0,
        EnergyClass::F => 1.0,
        EnergyClass::G | EnergyClass::H => 0.0,
    }
}

/// Scores building age. An unknown year and an age of zero both read as "no data".
pub fn age_score(construction_year: Option<i32>, current_year: i32) -> f64 {
    let age = construction_year.map_or(0, |year| current_year.saturating_sub(year));
    match age {
        0 => 5.0,
        age if age <= 5 => 10.0,
        age if age <= 15 => 8.0,
        age if age <= 30 => 6.0,
        age if age <= 50 => 4.0,
        _ => 2.0,
    }
}

/// Scores final energy demand in kWh/m²/year. Missing readings score zero.
pub fn consumption_score(kwh_per_sqm: Option<f64>) -> f64 {
    match kwh_per_sqm {
        Some(kwh) if kwh <= 50.0 => 10.0,
        Some(kwh) if kwh <= 75.0 => 8.0,
        Some(kwh) if kwh <= 100.0 => 6.0,
        Some(kwh) if kwh <= 150.0 => 4.0,
        Some(kwh) if kwh <= 200.0 => 2.0,
        _ => 0.0,
    }
}

pub fn heating_score(heating: Option<&str>) -> f64 {
    match heating.and_then(HeatingType::from_label) {
        Some(HeatingType::HeatPump | HeatingType::Solar) => 10.0,
        Some(HeatingType::DistrictHeating) => 9.0,
        Some(HeatingType::Gas) => 6.0,
        Some(HeatingType::Electric) => 4.0,
        Some(HeatingType::Oil) => 3.0,
        None => 5.0,
    }
}

pub fn energy_score(
    attributes: &UnitPhysicalAttributes,
    profile: ScoringProfile,
    current_year: i32,
) -> f64 {
    let class = attributes
        .energy_class
        .map_or(profile.missing_energy_class_score(), energy_class_score);
    let age = age_score(attributes.construction_year, current_year);

    match profile.variant() {
        ScoringVariant::Simplified => class * 0.6 + age * 0.4,
        ScoringVariant::Full => {
            let consumption = consumption_score(attributes.energy_consumption_kwh);
            let heating = heating_score(attributes.heating_type.as_deref());
            class * 0.3 + consumption * 0.3 + heating * 0.2 + age * 0.2
        }
    }
}
