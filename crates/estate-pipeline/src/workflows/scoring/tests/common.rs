use crate::workflows::scoring::{
    EnergyClass, RentalConfiguration, RentalStrategy, Room, TrafficLightEngine, TrafficLights,
    UnitAssessment, UnitFinancials, UnitPhysicalAttributes, UnitProfile, VacancyStatus,
    ScoringProfile,
};

pub(super) const YEAR: i32 = 2025;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn engine(profile: ScoringProfile) -> TrafficLightEngine {
    TrafficLightEngine::new(profile, YEAR)
}

/// 80 m² Munich flat bought for 200k with 20k renovation, planned at 1000/month.
pub(super) fn munich_unit() -> UnitProfile {
    UnitProfile {
        id: "WE-01".to_string(),
        financials: UnitFinancials {
            living_area_sqm: 80.0,
            purchase_price: 200_000.0,
            renovation_budget: 20_000.0,
            furnishing_budget: 0.0,
            hoa_fees_landlord: 150.0,
            hoa_fees_reserve: 50.0,
        },
        attributes: UnitPhysicalAttributes {
            energy_class: Some(EnergyClass::APlus),
            construction_year: Some(YEAR - 3),
            city: "Munich".to_string(),
            heating_type: None,
            energy_consumption_kwh: None,
        },
        rental: RentalConfiguration {
            vacancy_status: VacancyStatus::Vacant,
            current_rent: None,
            planned_rent: Some(1000.0),
            strategy: RentalStrategy::Standard,
            rooms: Vec::new(),
        },
    }
}

pub(super) fn shared_rooms(rents: &[f64], planned_rent: Option<f64>) -> RentalConfiguration {
    RentalConfiguration {
        vacancy_status: VacancyStatus::Vacant,
        current_rent: None,
        planned_rent,
        strategy: RentalStrategy::SharedRooms,
        rooms: rents
            .iter()
            .enumerate()
            .map(|(index, rent)| Room {
                name: format!("Room {}", index + 1),
                size_sqm: 12.0,
                rent: *rent,
            })
            .collect(),
    }
}

/// Pre-scored unit carrying only an energy score of interest.
pub(super) fn assessed(id: &str, investment: f64, energy: f64) -> UnitAssessment {
    UnitAssessment {
        unit_id: id.to_string(),
        lights: TrafficLights::new(energy, 5.0, 5.0, 5.0),
        total_investment: investment,
        monthly_rent: None,
        gross_yield: 0.0,
    }
}
