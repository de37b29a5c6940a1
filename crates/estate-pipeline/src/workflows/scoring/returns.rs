//! Yield axis: rental return, purchase price level and renovation burden.

use super::domain::{CityTier, UnitFinancials};
use super::profile::{ScoringProfile, ScoringVariant, YieldBands};
use super::rent::{gross_yield, non_negative, total_investment};

const NEUTRAL_SCORE: f64 = 5.0;

pub fn gross_yield_score(gross_yield_pct: f64, bands: YieldBands) -> f64 {
    match bands {
        YieldBands::Standard => match gross_yield_pct {
            y if y >= 6.0 => 10.0,
            y if y >= 5.0 => 8.0,
            y if y >= 4.0 => 6.0,
            y if y >= 3.0 => 4.0,
            y if y >= 2.0 => 2.0,
            _ => 0.0,
        },
        YieldBands::Coarse => match gross_yield_pct {
            y if y >= 6.0 => 10.0,
            y if y >= 4.0 => 6.0,
            y if y >= 2.0 => 3.0,
            _ => 0.0,
        },
    }
}

/// Scores the purchase price per square metre against the city's price level.
pub fn price_score(financials: &UnitFinancials, tier: CityTier) -> f64 {
    let area = non_negative(financials.living_area_sqm);
    if area == 0.0 {
        return NEUTRAL_SCORE;
    }

    let price_per_sqm = non_negative(financials.purchase_price) / area;
    let (cheap, fair) = match tier {
        CityTier::Munich => (6000.0, 8000.0),
        _ => (3500.0, 5000.0),
    };

    if price_per_sqm <= cheap {
        10.0
    } else if price_per_sqm <= fair {
        6.0
    } else {
        2.0
    }
}

/// Scores the renovation budget as a share of the purchase price.
pub fn renovation_score(financials: &UnitFinancials) -> f64 {
    let price = non_negative(financials.purchase_price);
    if price == 0.0 {
        return NEUTRAL_SCORE;
    }

    match non_negative(financials.renovation_budget) / price {
        ratio if ratio <= 0.1 => 10.0,
        ratio if ratio <= 0.2 => 7.0,
        ratio if ratio <= 0.3 => 4.0,
        _ => 0.0,
    }
}

/// Yield axis score. `market_comparison` is only read by the full blend.
pub fn yield_score(
    financials: &UnitFinancials,
    monthly_rent: Option<f64>,
    tier: CityTier,
    profile: ScoringProfile,
    market_comparison: f64,
) -> f64 {
    let gross = gross_yield(monthly_rent, total_investment(financials));
    let gross_score = gross_yield_score(gross, profile.yield_bands());
    let price = price_score(financials, tier);
    let renovation = renovation_score(financials);

    match profile.variant() {
        ScoringVariant::Simplified => gross_score * 0.5 + price * 0.25 + renovation * 0.25,
        ScoringVariant::Full => {
            gross_score * 0.4 + market_comparison * 0.2 + price * 0.2 + renovation * 0.2
        }
    }
}
