use serde::{Deserialize, Serialize};

use super::status::TrafficLightStatus;

/// The four axes every unit is graded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Energy,
    Yield,
    Hoa,
    Location,
}

impl Axis {
    pub const fn ordered() -> [Self; 4] {
        [Self::Energy, Self::Yield, Self::Hoa, Self::Location]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Yield => "Yield",
            Self::Hoa => "HOA",
            Self::Location => "Location",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Energy => 0,
            Self::Yield => 1,
            Self::Hoa => 2,
            Self::Location => 3,
        }
    }
}

/// EU energy performance certificate class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyClass {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl EnergyClass {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A+" | "A PLUS" => Some(Self::APlus),
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "E" => Some(Self::E),
            "F" => Some(Self::F),
            "G" => Some(Self::G),
            "H" => Some(Self::H),
            _ => None,
        }
    }
}

/// Heating systems with a known efficiency rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingType {
    HeatPump,
    Solar,
    DistrictHeating,
    Gas,
    Oil,
    Electric,
}

impl HeatingType {
    /// Recognises free-text heating labels such as `Heat Pump` or `district_heating`.
    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .chars()
            .filter(|ch| ch.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "heatpump" => Some(Self::HeatPump),
            "solar" => Some(Self::Solar),
            "districtheating" => Some(Self::DistrictHeating),
            "gas" => Some(Self::Gas),
            "oil" => Some(Self::Oil),
            "electric" => Some(Self::Electric),
            _ => None,
        }
    }
}

/// City tiers driving the price and location lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CityTier {
    Munich,
    Berlin,
    Hamburg,
    Frankfurt,
    Stuttgart,
    Cologne,
    Other,
}

impl CityTier {
    pub fn from_city(city: &str) -> Self {
        match city.trim().to_lowercase().as_str() {
            "munich" | "münchen" | "muenchen" => Self::Munich,
            "berlin" => Self::Berlin,
            "hamburg" => Self::Hamburg,
            "frankfurt" | "frankfurt am main" => Self::Frankfurt,
            "stuttgart" => Self::Stuttgart,
            "cologne" | "köln" | "koeln" => Self::Cologne,
            _ => Self::Other,
        }
    }
}

/// Purchase and running-cost figures for a single unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitFinancials {
    pub living_area_sqm: f64,
    pub purchase_price: f64,
    pub renovation_budget: f64,
    pub furnishing_budget: f64,
    pub hoa_fees_landlord: f64,
    pub hoa_fees_reserve: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPhysicalAttributes {
    pub energy_class: Option<EnergyClass>,
    pub construction_year: Option<i32>,
    pub city: String,
    pub heating_type: Option<String>,
    /// Final energy demand in kWh per square metre and year.
    pub energy_consumption_kwh: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacancyStatus {
    Rented,
    #[default]
    Vacant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStrategy {
    #[default]
    Standard,
    SharedRooms,
}

/// A room let individually under the shared-room strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Room {
    pub name: String,
    pub size_sqm: f64,
    pub rent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalConfiguration {
    pub vacancy_status: VacancyStatus,
    pub current_rent: Option<f64>,
    pub planned_rent: Option<f64>,
    pub strategy: RentalStrategy,
    pub rooms: Vec<Room>,
}

/// Everything the engine needs to score one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitProfile {
    pub id: String,
    #[serde(default)]
    pub financials: UnitFinancials,
    #[serde(default)]
    pub attributes: UnitPhysicalAttributes,
    #[serde(default)]
    pub rental: RentalConfiguration,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingProfile {
    pub id: String,
    /// Used for units whose own city is blank.
    #[serde(default)]
    pub city: Option<String>,
    /// Renovation budget for common areas, on top of the unit budgets.
    #[serde(default)]
    pub renovation_budget: f64,
    #[serde(default)]
    pub units: Vec<UnitProfile>,
}

/// Graded score on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisScore {
    pub axis: Axis,
    pub value: f64,
    pub status: TrafficLightStatus,
}

impl AxisScore {
    pub fn new(axis: Axis, value: f64) -> Self {
        Self {
            axis,
            value,
            status: TrafficLightStatus::classify(value),
        }
    }
}

/// The four axis scores of a unit or building view, in `Axis::ordered()` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrafficLights([AxisScore; 4]);

impl TrafficLights {
    pub fn new(energy: f64, yield_score: f64, hoa: f64, location: f64) -> Self {
        Self([
            AxisScore::new(Axis::Energy, energy),
            AxisScore::new(Axis::Yield, yield_score),
            AxisScore::new(Axis::Hoa, hoa),
            AxisScore::new(Axis::Location, location),
        ])
    }

    pub(crate) fn from_fn(value_for: impl FnMut(Axis) -> f64) -> Self {
        let [energy, yield_score, hoa, location] = Axis::ordered().map(value_for);
        Self::new(energy, yield_score, hoa, location)
    }

    pub fn get(&self, axis: Axis) -> AxisScore {
        self.0[axis.index()]
    }

    pub fn value(&self, axis: Axis) -> f64 {
        self.get(axis).value
    }

    pub fn status(&self, axis: Axis) -> TrafficLightStatus {
        self.get(axis).status
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisScore> {
        self.0.iter()
    }
}

/// Scored unit together with the money figures the aggregator needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitAssessment {
    pub unit_id: String,
    pub lights: TrafficLights,
    pub total_investment: f64,
    pub monthly_rent: Option<f64>,
    pub gross_yield: f64,
}

/// Building-level views over its scored units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingAssessment {
    pub building_id: String,
    pub weighted_by_investment: TrafficLights,
    pub worst_case: TrafficLights,
    /// Gross yield in percent across all units and the building-wide budget.
    pub aggregate_yield: f64,
    /// Denominator of the weighted view; zero means the weighted view carries no data.
    pub weighted_investment: f64,
    pub units: Vec<UnitAssessment>,
}

impl BuildingAssessment {
    pub fn has_weighted_data(&self) -> bool {
        self.weighted_investment > 0.0
    }
}
