use super::common::*;
use crate::workflows::scoring::returns::{
    gross_yield_score, price_score, renovation_score, yield_score,
};
use crate::workflows::scoring::{
    gross_yield, total_investment, CityTier, ScoringProfile, TrafficLightStatus, UnitFinancials,
    YieldBands,
};

#[test]
fn pre_check_yield_matches_reference_example() {
    let unit = munich_unit();

    let investment = total_investment(&unit.financials);
    let gross = gross_yield(Some(1000.0), investment);
    let score = yield_score(
        &unit.financials,
        Some(1000.0),
        CityTier::Munich,
        ScoringProfile::PreCheck,
        7.0,
    );

    assert_close(investment, 220_000.0);
    assert!((gross - 5.4545).abs() < 1e-3);
    assert_close(score, 9.0);
    assert_eq!(TrafficLightStatus::classify(score), TrafficLightStatus::Green);
}

#[test]
fn full_yield_blends_market_comparison() {
    let unit = munich_unit();

    let score = yield_score(
        &unit.financials,
        Some(1000.0),
        CityTier::Munich,
        ScoringProfile::Full,
        7.0,
    );

    assert_close(score, 8.0 * 0.4 + 7.0 * 0.2 + 10.0 * 0.2 + 10.0 * 0.2);
}

#[test]
fn live_preview_uses_coarse_yield_bands() {
    let unit = munich_unit();

    let score = yield_score(
        &unit.financials,
        Some(1000.0),
        CityTier::Munich,
        ScoringProfile::LivePreview,
        7.0,
    );

    assert_close(score, 6.0 * 0.5 + 10.0 * 0.25 + 10.0 * 0.25);
}

#[test]
fn missing_rent_or_investment_zeroes_gross_yield() {
    assert_close(gross_yield(None, 220_000.0), 0.0);
    assert_close(gross_yield(Some(1000.0), 0.0), 0.0);

    let financials = UnitFinancials::default();
    let score = yield_score(&financials, None, CityTier::Other, ScoringProfile::PreCheck, 7.0);
    // gross 0, price and renovation neutral
    assert_close(score, 0.0 * 0.5 + 5.0 * 0.25 + 5.0 * 0.25);
    assert!(score.is_finite());
}

#[test]
fn yield_bands_differ_between_tables() {
    assert_close(gross_yield_score(6.0, YieldBands::Standard), 10.0);
    assert_close(gross_yield_score(5.0, YieldBands::Standard), 8.0);
    assert_close(gross_yield_score(4.0, YieldBands::Standard), 6.0);
    assert_close(gross_yield_score(3.0, YieldBands::Standard), 4.0);
    assert_close(gross_yield_score(2.0, YieldBands::Standard), 2.0);
    assert_close(gross_yield_score(1.9, YieldBands::Standard), 0.0);

    assert_close(gross_yield_score(6.0, YieldBands::Coarse), 10.0);
    assert_close(gross_yield_score(5.0, YieldBands::Coarse), 6.0);
    assert_close(gross_yield_score(3.0, YieldBands::Coarse), 3.0);
    assert_close(gross_yield_score(1.9, YieldBands::Coarse), 0.0);
}

#[test]
fn price_levels_depend_on_city_tier() {
    let financials = |price: f64| UnitFinancials {
        living_area_sqm: 100.0,
        purchase_price: price,
        ..UnitFinancials::default()
    };

    assert_close(price_score(&financials(600_000.0), CityTier::Munich), 10.0);
    assert_close(price_score(&financials(700_000.0), CityTier::Munich), 6.0);
    assert_close(price_score(&financials(900_000.0), CityTier::Munich), 2.0);
    assert_close(price_score(&financials(350_000.0), CityTier::Berlin), 10.0);
    assert_close(price_score(&financials(400_000.0), CityTier::Berlin), 6.0);
    assert_close(price_score(&financials(550_000.0), CityTier::Other), 2.0);
}

#[test]
fn price_without_living_area_is_neutral() {
    let financials = UnitFinancials {
        purchase_price: 300_000.0,
        ..UnitFinancials::default()
    };

    assert_close(price_score(&financials, CityTier::Munich), 5.0);
}

#[test]
fn renovation_ratio_buckets() {
    let financials = |renovation: f64| UnitFinancials {
        purchase_price: 100_000.0,
        renovation_budget: renovation,
        ..UnitFinancials::default()
    };

    assert_close(renovation_score(&financials(10_000.0)), 10.0);
    assert_close(renovation_score(&financials(20_000.0)), 7.0);
    assert_close(renovation_score(&financials(25_000.0)), 4.0);
    assert_close(renovation_score(&financials(40_000.0)), 0.0);
    assert_close(renovation_score(&UnitFinancials::default()), 5.0);
}
