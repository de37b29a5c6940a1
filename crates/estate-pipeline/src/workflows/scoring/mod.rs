//! Traffic-light scoring for units and buildings in the development pipeline.
//!
//! Every unit is graded on four axes (energy, yield, HOA, location) on a 0–10 scale and
//! each score is classified green/yellow/red. Buildings get an investment-weighted and a
//! worst-case view over their units. All scoring is pure; the engine only fixes the
//! formula profile, the reference year and the location data source.

pub mod aggregate;
pub mod domain;
pub mod energy;
pub mod hoa;
pub mod location;
pub mod profile;
pub mod rent;
pub mod returns;
pub mod router;
pub mod status;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Axis, AxisScore, BuildingAssessment, BuildingProfile, CityTier, EnergyClass, HeatingType,
    RentalConfiguration, RentalStrategy, Room, TrafficLights, UnitAssessment,
    UnitFinancials, UnitPhysicalAttributes, UnitProfile, VacancyStatus,
};
pub use location::{LocationFactors, LocationScoreProvider, StaticLocationScores};
pub use profile::{ScoringProfile, ScoringVariant, UnknownScoringProfile, YieldBands};
pub use rent::{effective_monthly_rent, gross_yield, total_investment};
pub use router::assessment_router;
pub use status::TrafficLightStatus;
pub use views::{AxisComparisonEntry, BuildingSummary, UnitScoreView};

use crate::config::ScoringConfig;
use chrono::{Datelike, Local};
use tracing::{debug, info};

/// Scores units and buildings with one formula profile and one reference year.
pub struct TrafficLightEngine<L = StaticLocationScores> {
    profile: ScoringProfile,
    current_year: i32,
    locations: L,
}

impl TrafficLightEngine<StaticLocationScores> {
    pub fn new(profile: ScoringProfile, current_year: i32) -> Self {
        Self::with_provider(profile, current_year, StaticLocationScores)
    }

    /// Builds an engine from configuration, defaulting the reference year to today.
    pub fn from_config(config: &ScoringConfig) -> Self {
        let current_year = config
            .reference_year
            .unwrap_or_else(|| Local::now().year());
        Self::new(config.profile, current_year)
    }
}

impl<L: LocationScoreProvider> TrafficLightEngine<L> {
    pub fn with_provider(profile: ScoringProfile, current_year: i32, locations: L) -> Self {
        Self {
            profile,
            current_year,
            locations,
        }
    }

    pub fn profile(&self) -> ScoringProfile {
        self.profile
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn score_unit(&self, unit: &UnitProfile) -> UnitAssessment {
        self.score_unit_with_profile(unit, self.profile)
    }

    pub fn score_unit_with_profile(
        &self,
        unit: &UnitProfile,
        profile: ScoringProfile,
    ) -> UnitAssessment {
        self.score_unit_in(unit, None, profile)
    }

    pub fn assess_building(&self, building: &BuildingProfile) -> BuildingAssessment {
        self.assess_building_with_profile(building, self.profile)
    }

    pub fn assess_building_with_profile(
        &self,
        building: &BuildingProfile,
        profile: ScoringProfile,
    ) -> BuildingAssessment {
        let fallback_city = building.city.as_deref();
        let units: Vec<UnitAssessment> = building
            .units
            .iter()
            .map(|unit| self.score_unit_in(unit, fallback_city, profile))
            .collect();

        let (weighted_by_investment, weighted_investment) =
            aggregate::weighted_by_investment(&units);
        let worst_case = aggregate::worst_case(&units);
        let aggregate_yield = aggregate::aggregate_yield(&units, building.renovation_budget);

        info!(
            building = %building.id,
            units = units.len(),
            %profile,
            aggregate_yield,
            "assessed building"
        );

        BuildingAssessment {
            building_id: building.id.clone(),
            weighted_by_investment,
            worst_case,
            aggregate_yield,
            weighted_investment,
            units,
        }
    }

    fn score_unit_in(
        &self,
        unit: &UnitProfile,
        fallback_city: Option<&str>,
        profile: ScoringProfile,
    ) -> UnitAssessment {
        let city = match unit.attributes.city.trim() {
            "" => fallback_city.unwrap_or_default(),
            city => city,
        };
        let tier = CityTier::from_city(city);
        let monthly_rent = effective_monthly_rent(&unit.rental);
        let investment = total_investment(&unit.financials);

        let lights = TrafficLights::new(
            energy::energy_score(&unit.attributes, profile, self.current_year),
            returns::yield_score(
                &unit.financials,
                monthly_rent,
                tier,
                profile,
                self.locations.market_comparison(city),
            ),
            hoa::hoa_score(&unit.financials, profile),
            location::location_score(city, profile, &self.locations),
        );

        debug!(unit = %unit.id, %profile, ?monthly_rent, investment, "scored unit");

        UnitAssessment {
            unit_id: unit.id.clone(),
            lights,
            total_investment: investment,
            monthly_rent,
            gross_yield: gross_yield(monthly_rent, investment),
        }
    }
}
