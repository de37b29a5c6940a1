use serde::{Deserialize, Serialize};

use super::domain::CityTier;
use super::profile::{ScoringProfile, ScoringVariant};

/// Neighbourhood sub-scores feeding the full location blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFactors {
    pub public_transport: f64,
    pub amenities: f64,
    pub market_trend: f64,
    pub demographics: f64,
}

/// Source of address-dependent market data.
///
/// Swapping the provider (geocoding, amenity lookups) leaves the blend weights untouched.
pub trait LocationScoreProvider: Send + Sync {
    fn location_factors(&self, city: &str) -> LocationFactors;

    /// Rent level of the unit compared to its market, on the 0–10 scale.
    fn market_comparison(&self, city: &str) -> f64;
}

/// Fixed sub-scores, identical for every address.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocationScores;

impl LocationScoreProvider for StaticLocationScores {
    fn location_factors(&self, _city: &str) -> LocationFactors {
        LocationFactors {
            public_transport: 8.0,
            amenities: 9.0,
            market_trend: 8.0,
            demographics: 7.0,
        }
    }

    fn market_comparison(&self, _city: &str) -> f64 {
        7.0
    }
}

pub fn city_tier_score(tier: CityTier) -> f64 {
    match tier {
        CityTier::Munich => 8.5,
        CityTier::Berlin | CityTier::Hamburg => 7.5,
        CityTier::Frankfurt | CityTier::Stuttgart => 7.0,
        CityTier::Cologne => 6.5,
        CityTier::Other => 6.0,
    }
}

pub fn blend_location_factors(factors: &LocationFactors) -> f64 {
    factors.public_transport * 0.3
        + factors.amenities * 0.3
        + factors.market_trend * 0.2
        + factors.demographics * 0.2
}

pub fn location_score<L: LocationScoreProvider + ?Sized>(
    city: &str,
    profile: ScoringProfile,
    provider: &L,
) -> f64 {
    match profile.variant() {
        ScoringVariant::Simplified => city_tier_score(CityTier::from_city(city)),
        ScoringVariant::Full => blend_location_factors(&provider.location_factors(city)),
    }
}
