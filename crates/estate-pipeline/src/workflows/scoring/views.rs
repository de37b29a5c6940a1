use super::domain::{Axis, AxisScore, BuildingAssessment, UnitAssessment};
use super::profile::ScoringProfile;
use super::rent::capped;
use super::status::TrafficLightStatus;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AxisScoreView {
    pub axis: Axis,
    pub axis_label: &'static str,
    pub value: f64,
    pub status: TrafficLightStatus,
    pub status_label: &'static str,
}

impl From<AxisScore> for AxisScoreView {
    fn from(score: AxisScore) -> Self {
        Self {
            axis: score.axis,
            axis_label: score.axis.label(),
            value: score.value,
            status: score.status,
            status_label: score.status.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitScoreView {
    pub unit_id: String,
    pub profile: ScoringProfile,
    pub scores: Vec<AxisScoreView>,
    pub total_investment: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<f64>,
    pub gross_yield: f64,
}

impl UnitAssessment {
    pub fn view(&self, profile: ScoringProfile) -> UnitScoreView {
        UnitScoreView {
            unit_id: self.unit_id.clone(),
            profile,
            scores: self.lights.iter().copied().map(AxisScoreView::from).collect(),
            total_investment: self.total_investment,
            monthly_rent: self.monthly_rent,
            gross_yield: self.gross_yield,
        }
    }
}

/// Weighted and worst-case scores of one axis side by side.
#[derive(Debug, Clone, Serialize)]
pub struct AxisComparisonEntry {
    pub axis: Axis,
    pub axis_label: &'static str,
    /// `None` when no unit carries investment.
    pub weighted: Option<AxisScoreView>,
    pub worst_case: AxisScoreView,
    /// Units rated red on this axis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub red_units: Vec<String>,
    pub diverges: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildingSummary {
    pub building_id: String,
    pub profile: ScoringProfile,
    pub unit_count: usize,
    pub total_investment: f64,
    pub aggregate_yield: f64,
    pub axes: Vec<AxisComparisonEntry>,
    pub units: Vec<UnitScoreView>,
}

impl BuildingAssessment {
    pub fn summary(&self, profile: ScoringProfile) -> BuildingSummary {
        let has_weighted = self.has_weighted_data();

        let axes = Axis::ordered()
            .into_iter()
            .map(|axis| {
                let weighted = self.weighted_by_investment.get(axis);
                let worst = self.worst_case.get(axis);
                let red_units = self
                    .units
                    .iter()
                    .filter(|unit| unit.lights.status(axis) == TrafficLightStatus::Red)
                    .map(|unit| unit.unit_id.clone())
                    .collect();

                AxisComparisonEntry {
                    axis,
                    axis_label: axis.label(),
                    weighted: has_weighted.then(|| weighted.into()),
                    worst_case: worst.into(),
                    red_units,
                    diverges: has_weighted && weighted.status != worst.status,
                }
            })
            .collect();

        BuildingSummary {
            building_id: self.building_id.clone(),
            profile,
            unit_count: self.units.len(),
            total_investment: capped(self.units.iter().map(|unit| unit.total_investment).sum()),
            aggregate_yield: self.aggregate_yield,
            axes,
            units: self.units.iter().map(|unit| unit.view(profile)).collect(),
        }
    }
}
