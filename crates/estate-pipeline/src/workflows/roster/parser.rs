use super::RosterImportError;
use crate::workflows::scoring::{
    EnergyClass, RentalConfiguration, RentalStrategy, Room, UnitFinancials,
    UnitPhysicalAttributes, UnitProfile, VacancyStatus,
};
use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

pub(crate) fn parse_units<R: Read>(reader: R) -> Result<Vec<UnitProfile>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut units = Vec::new();

    for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = record?;
        // Header is line 1.
        units.push(row.into_unit(index + 2)?);
    }

    Ok(units)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Living Area", default, deserialize_with = "optional_number")]
    living_area: Option<f64>,
    #[serde(rename = "Purchase Price", default, deserialize_with = "optional_number")]
    purchase_price: Option<f64>,
    #[serde(rename = "Renovation Budget", default, deserialize_with = "optional_number")]
    renovation_budget: Option<f64>,
    #[serde(rename = "Furnishing Budget", default, deserialize_with = "optional_number")]
    furnishing_budget: Option<f64>,
    #[serde(rename = "HOA Landlord", default, deserialize_with = "optional_number")]
    hoa_landlord: Option<f64>,
    #[serde(rename = "HOA Reserve", default, deserialize_with = "optional_number")]
    hoa_reserve: Option<f64>,
    #[serde(rename = "Energy Class", default, deserialize_with = "empty_string_as_none")]
    energy_class: Option<String>,
    #[serde(rename = "Construction Year", default, deserialize_with = "optional_number")]
    construction_year: Option<i32>,
    #[serde(rename = "City", default)]
    city: String,
    #[serde(rename = "Heating", default, deserialize_with = "empty_string_as_none")]
    heating: Option<String>,
    #[serde(rename = "Energy Consumption", default, deserialize_with = "optional_number")]
    energy_consumption: Option<f64>,
    #[serde(rename = "Vacancy", default, deserialize_with = "empty_string_as_none")]
    vacancy: Option<String>,
    #[serde(rename = "Current Rent", default, deserialize_with = "optional_number")]
    current_rent: Option<f64>,
    #[serde(rename = "Planned Rent", default, deserialize_with = "optional_number")]
    planned_rent: Option<f64>,
    #[serde(rename = "Strategy", default, deserialize_with = "empty_string_as_none")]
    strategy: Option<String>,
    #[serde(rename = "Rooms", default, deserialize_with = "empty_string_as_none")]
    rooms: Option<String>,
}

impl RosterRow {
    fn into_unit(self, line: usize) -> Result<UnitProfile, RosterImportError> {
        let invalid = |field: &'static str, value: &str| RosterImportError::InvalidField {
            line,
            field,
            value: value.to_string(),
        };

        let energy_class = self
            .energy_class
            .as_deref()
            .map(|raw| EnergyClass::parse(raw).ok_or_else(|| invalid("Energy Class", raw)))
            .transpose()?;

        let vacancy_status = match self.vacancy.as_deref().map(str::to_ascii_lowercase) {
            None => VacancyStatus::Vacant,
            Some(raw) => match raw.as_str() {
                "rented" | "let" => VacancyStatus::Rented,
                "vacant" | "empty" => VacancyStatus::Vacant,
                _ => return Err(invalid("Vacancy", &raw)),
            },
        };

        let strategy = match self.strategy.as_deref().map(str::to_ascii_lowercase) {
            None => RentalStrategy::Standard,
            Some(raw) => match raw.replace(['-', ' '], "_").as_str() {
                "standard" => RentalStrategy::Standard,
                "shared_rooms" | "wg" => RentalStrategy::SharedRooms,
                _ => return Err(invalid("Strategy", &raw)),
            },
        };

        let rooms = match self.rooms.as_deref() {
            None => Vec::new(),
            Some(raw) => parse_rooms(raw).ok_or_else(|| invalid("Rooms", raw))?,
        };

        Ok(UnitProfile {
            id: self.unit,
            financials: UnitFinancials {
                living_area_sqm: self.living_area.unwrap_or_default(),
                purchase_price: self.purchase_price.unwrap_or_default(),
                renovation_budget: self.renovation_budget.unwrap_or_default(),
                furnishing_budget: self.furnishing_budget.unwrap_or_default(),
                hoa_fees_landlord: self.hoa_landlord.unwrap_or_default(),
                hoa_fees_reserve: self.hoa_reserve.unwrap_or_default(),
            },
            attributes: UnitPhysicalAttributes {
                energy_class,
                construction_year: self.construction_year,
                city: self.city,
                heating_type: self.heating,
                energy_consumption_kwh: self.energy_consumption,
            },
            rental: RentalConfiguration {
                vacancy_status,
                current_rent: self.current_rent,
                planned_rent: self.planned_rent,
                strategy,
                rooms,
            },
        })
    }
}

/// Parses `name:size:rent` entries separated by `;`.
fn parse_rooms(raw: &str) -> Option<Vec<Room>> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let mut parts = entry.split(':').map(str::trim);
            let name = parts.next()?.to_string();
            let size_sqm = parts.next()?.parse().ok()?;
            let rent = parts.next()?.parse().ok()?;
            if parts.next().is_some() {
                return None;
            }
            Some(Room {
                name,
                size_sqm,
                rent,
            })
        })
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match empty_string_as_none(deserializer)? {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|err| de::Error::custom(format!("invalid number '{raw}': {err}"))),
    }
}
