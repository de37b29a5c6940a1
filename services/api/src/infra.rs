use estate_pipeline::workflows::pipeline::PipelinePhase;
use estate_pipeline::workflows::scoring::ScoringProfile;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_profile(raw: &str) -> Result<ScoringProfile, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

/// Accepts `notary`, `Purchase Decision`, `pre-check` and similar spellings.
pub(crate) fn parse_phase(raw: &str) -> Result<PipelinePhase, String> {
    let wanted = normalize(raw);
    PipelinePhase::ordered()
        .into_iter()
        .find(|phase| normalize(phase.label()) == wanted)
        .ok_or_else(|| format!("unknown pipeline phase '{raw}'"))
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', ' '], "_")
}
