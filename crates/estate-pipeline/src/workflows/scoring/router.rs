use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use super::domain::{BuildingProfile, UnitProfile};
use super::location::LocationScoreProvider;
use super::profile::ScoringProfile;
use super::TrafficLightEngine;
use crate::workflows::pipeline::PipelinePhase;

/// Building payload with an optional pipeline phase or explicit profile.
#[derive(Debug, Deserialize)]
pub struct BuildingAssessmentRequest {
    #[serde(flatten)]
    pub building: BuildingProfile,
    #[serde(default)]
    pub phase: Option<PipelinePhase>,
    #[serde(default)]
    pub profile: Option<ScoringProfile>,
}

#[derive(Debug, Deserialize)]
pub struct UnitAssessmentRequest {
    #[serde(flatten)]
    pub unit: UnitProfile,
    #[serde(default)]
    pub profile: Option<ScoringProfile>,
}

/// Router exposing unit and building assessments.
pub fn assessment_router<L>(engine: Arc<TrafficLightEngine<L>>) -> Router
where
    L: LocationScoreProvider + 'static,
{
    Router::new()
        .route("/api/v1/assessments/unit", post(unit_handler::<L>))
        .route("/api/v1/assessments/building", post(building_handler::<L>))
        .with_state(engine)
}

pub(crate) async fn unit_handler<L>(
    State(engine): State<Arc<TrafficLightEngine<L>>>,
    Json(request): Json<UnitAssessmentRequest>,
) -> Response
where
    L: LocationScoreProvider + 'static,
{
    let profile = request.profile.unwrap_or(engine.profile());
    let assessment = engine.score_unit_with_profile(&request.unit, profile);
    (StatusCode::OK, Json(assessment.view(profile))).into_response()
}

pub(crate) async fn building_handler<L>(
    State(engine): State<Arc<TrafficLightEngine<L>>>,
    Json(request): Json<BuildingAssessmentRequest>,
) -> Response
where
    L: LocationScoreProvider + 'static,
{
    let profile = request
        .profile
        .or_else(|| request.phase.map(PipelinePhase::scoring_profile))
        .unwrap_or(engine.profile());
    let assessment = engine.assess_building_with_profile(&request.building, profile);
    (StatusCode::OK, Json(assessment.summary(profile))).into_response()
}
