//! Unit roster import from spreadsheet exports.

mod parser;

use crate::workflows::scoring::{BuildingProfile, UnitProfile};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read unit roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid unit roster CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("unit roster contains no units")]
    Empty,
}

/// Reads unit rosters exported as CSV, one unit per row.
pub struct UnitRosterImporter;

impl UnitRosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<UnitProfile>, RosterImportError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<UnitProfile>, RosterImportError> {
        let units = parser::parse_units(reader)?;
        if units.is_empty() {
            return Err(RosterImportError::Empty);
        }

        debug!(units = units.len(), "imported unit roster");
        Ok(units)
    }

    /// Imports a roster file as one building. Without an explicit id the file stem is used.
    pub fn building_from_path<P: AsRef<Path>>(
        path: P,
        building_id: Option<String>,
        city: Option<String>,
        renovation_budget: f64,
    ) -> Result<BuildingProfile, RosterImportError> {
        let path = path.as_ref();
        let building_id = building_id.unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "roster".to_string())
        });
        let file = File::open(path)?;
        Self::building_from_reader(file, building_id, city, renovation_budget)
    }

    /// Wraps imported units into a building with an optional city and shared budget.
    pub fn building_from_reader<R: Read>(
        reader: R,
        building_id: impl Into<String>,
        city: Option<String>,
        renovation_budget: f64,
    ) -> Result<BuildingProfile, RosterImportError> {
        Ok(BuildingProfile {
            id: building_id.into(),
            city,
            renovation_budget,
            units: Self::from_reader(reader)?,
        })
    }
}
