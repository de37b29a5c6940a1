use super::common::*;
use crate::workflows::scoring::{
    Axis, BuildingProfile, LocationFactors, LocationScoreProvider, ScoringProfile,
    TrafficLightEngine, TrafficLightStatus,
};

#[test]
fn scores_reference_unit_with_pre_check_profile() {
    let engine = engine(ScoringProfile::PreCheck);

    let assessment = engine.score_unit(&munich_unit());

    assert_eq!(assessment.unit_id, "WE-01");
    assert_close(assessment.lights.value(Axis::Energy), 10.0);
    assert_close(assessment.lights.value(Axis::Yield), 9.0);
    assert_close(assessment.lights.value(Axis::Hoa), 7.0);
    assert_close(assessment.lights.value(Axis::Location), 8.5);
    assert!(assessment
        .lights
        .iter()
        .all(|score| score.status == TrafficLightStatus::Green));
    assert_close(assessment.total_investment, 220_000.0);
    assert_eq!(assessment.monthly_rent, Some(1000.0));
}

#[test]
fn profile_override_switches_to_full_formulas() {
    let engine = engine(ScoringProfile::PreCheck);

    let assessment = engine.score_unit_with_profile(&munich_unit(), ScoringProfile::Full);

    assert_close(assessment.lights.value(Axis::Energy), 6.0);
    assert_close(assessment.lights.value(Axis::Yield), 8.6);
    assert_close(assessment.lights.value(Axis::Hoa), 8.1);
    assert_close(assessment.lights.value(Axis::Location), 8.1);
}

#[test]
fn repeated_scoring_is_bit_identical_and_leaves_input_untouched() {
    let engine = engine(ScoringProfile::Full);
    let unit = munich_unit();
    let snapshot = unit.clone();

    let first = engine.score_unit(&unit);
    let second = engine.score_unit(&unit);

    for axis in Axis::ordered() {
        assert_eq!(
            first.lights.value(axis).to_bits(),
            second.lights.value(axis).to_bits()
        );
    }
    assert_eq!(unit, snapshot);
}

#[test]
fn incomplete_units_still_score() {
    let engine = engine(ScoringProfile::Full);
    let unit = crate::workflows::scoring::UnitProfile {
        id: "blank".to_string(),
        ..Default::default()
    };

    let assessment = engine.score_unit(&unit);

    assert!(assessment.lights.iter().all(|score| score.value.is_finite()));
    assert_close(assessment.gross_yield, 0.0);
    assert_eq!(assessment.monthly_rent, None);
}

#[test]
fn building_city_fills_blank_unit_cities() {
    let engine = engine(ScoringProfile::PreCheck);
    let mut unit = munich_unit();
    unit.attributes.city = String::new();
    let building = BuildingProfile {
        id: "HS-7".to_string(),
        city: Some("Hamburg".to_string()),
        renovation_budget: 0.0,
        units: vec![unit],
    };

    let assessment = engine.assess_building(&building);

    assert_close(assessment.units[0].lights.value(Axis::Location), 7.5);
}

#[test]
fn building_assessment_combines_both_views() {
    let engine = engine(ScoringProfile::PreCheck);
    let good = munich_unit();
    let mut poor = munich_unit();
    poor.id = "WE-02".to_string();
    poor.attributes.energy_class = Some(crate::workflows::scoring::EnergyClass::H);
    poor.attributes.construction_year = Some(YEAR - 80);
    let building = BuildingProfile {
        id: "HS-1".to_string(),
        city: None,
        renovation_budget: 40_000.0,
        units: vec![good, poor],
    };

    let assessment = engine.assess_building(&building);

    // good 10.0, poor 0 * 0.6 + 2 * 0.4 = 0.8, equal investment
    assert_close(assessment.weighted_by_investment.value(Axis::Energy), 5.4);
    assert_close(assessment.worst_case.value(Axis::Energy), 0.8);
    assert_close(assessment.weighted_investment, 440_000.0);
    assert_close(assessment.aggregate_yield, 24_000.0 / 480_000.0 * 100.0);
    assert!(assessment.has_weighted_data());

    let summary = assessment.summary(ScoringProfile::PreCheck);
    let energy = &summary.axes[0];
    assert_eq!(energy.axis, Axis::Energy);
    assert!(energy.diverges);
    assert_eq!(energy.red_units, vec!["WE-02".to_string()]);
    assert_eq!(summary.unit_count, 2);
}

#[test]
fn summary_hides_weighted_view_without_investment() {
    let engine = engine(ScoringProfile::PreCheck);
    let mut unit = munich_unit();
    unit.financials = Default::default();
    let building = BuildingProfile {
        id: "HS-0".to_string(),
        units: vec![unit],
        ..Default::default()
    };

    let summary = engine
        .assess_building(&building)
        .summary(ScoringProfile::PreCheck);

    assert!(summary.axes.iter().all(|entry| entry.weighted.is_none()));
    assert!(summary.axes.iter().all(|entry| !entry.diverges));
}

struct CountryLocations;

impl LocationScoreProvider for CountryLocations {
    fn location_factors(&self, _city: &str) -> LocationFactors {
        LocationFactors {
            public_transport: 2.0,
            amenities: 3.0,
            market_trend: 5.0,
            demographics: 4.0,
        }
    }

    fn market_comparison(&self, _city: &str) -> f64 {
        0.0
    }
}

#[test]
fn injected_provider_feeds_full_location_and_market_scores() {
    let engine = TrafficLightEngine::with_provider(ScoringProfile::Full, YEAR, CountryLocations);

    let assessment = engine.score_unit(&munich_unit());

    assert_close(
        assessment.lights.value(Axis::Location),
        2.0 * 0.3 + 3.0 * 0.3 + 5.0 * 0.2 + 4.0 * 0.2,
    );
    assert_close(assessment.lights.value(Axis::Yield), 8.0 * 0.4 + 10.0 * 0.2 + 10.0 * 0.2);
    assert_eq!(
        assessment.lights.status(Axis::Location),
        TrafficLightStatus::Red
    );
}

#[test]
fn overflowing_amounts_keep_building_views_finite() {
    let engine = engine(ScoringProfile::PreCheck);
    let mut first = munich_unit();
    first.financials.purchase_price = 1e308;
    first.financials.renovation_budget = 1e308;
    let mut second = first.clone();
    second.id = "WE-02".to_string();
    let building = BuildingProfile {
        id: "HS-MAX".to_string(),
        renovation_budget: 1e308,
        units: vec![first, second],
        ..Default::default()
    };

    let assessment = engine.assess_building(&building);

    assert_eq!(assessment.units[0].total_investment, f64::MAX);
    assert_eq!(assessment.weighted_investment, f64::MAX);
    assert!(assessment.aggregate_yield.is_finite());
    for axis in Axis::ordered() {
        let weighted = assessment.weighted_by_investment.value(axis);
        assert!(weighted.is_finite(), "{axis:?} weighted score {weighted}");
        assert_close(weighted, assessment.units[0].lights.value(axis));
    }

    let summary = assessment.summary(ScoringProfile::PreCheck);
    let json = serde_json::to_value(&summary).expect("summary serializes");
    assert!(json["total_investment"].is_f64());
    for entry in json["axes"].as_array().expect("axes array") {
        assert!(entry["weighted"]["value"].is_f64());
    }
}
