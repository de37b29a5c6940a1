use super::domain::UnitFinancials;
use super::profile::{ScoringProfile, ScoringVariant};
use super::rent::non_negative;

const NEUTRAL_SCORE: f64 = 5.0;
const MANAGEMENT_SCORE: f64 = 8.0;
const BUILDING_CONDITION_SCORE: f64 = 7.0;

/// Monthly HOA fees (landlord and reserve share) per square metre of living area.
pub fn hoa_per_sqm(financials: &UnitFinancials) -> Option<f64> {
    let area = non_negative(financials.living_area_sqm);
    if area == 0.0 {
        return None;
    }

    let fees =
        non_negative(financials.hoa_fees_landlord) + non_negative(financials.hoa_fees_reserve);
    Some(fees / area)
}

pub fn monthly_fees_score(per_sqm: Option<f64>) -> f64 {
    match per_sqm {
        None => NEUTRAL_SCORE,
        Some(fee) if fee == 0.0 => NEUTRAL_SCORE,
        Some(fee) if fee <= 2.0 => 10.0,
        Some(fee) if fee <= 4.0 => 7.0,
        Some(fee) if fee <= 6.0 => 4.0,
        Some(_) => 0.0,
    }
}

pub fn reserve_score(hoa_fees_reserve: f64) -> f64 {
    match non_negative(hoa_fees_reserve) {
        reserve if reserve >= 1.0 => 10.0,
        reserve if reserve >= 0.5 => 6.0,
        _ => 2.0,
    }
}

pub fn hoa_score(financials: &UnitFinancials, profile: ScoringProfile) -> f64 {
    let fees = monthly_fees_score(hoa_per_sqm(financials));

    match profile.variant() {
        ScoringVariant::Simplified => fees,
        ScoringVariant::Full => {
            fees * 0.4
                + reserve_score(financials.hoa_fees_reserve) * 0.3
                + MANAGEMENT_SCORE * 0.2
                + BUILDING_CONDITION_SCORE * 0.1
        }
    }
}
