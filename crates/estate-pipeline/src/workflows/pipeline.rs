use serde::{Deserialize, Serialize};

use super::scoring::ScoringProfile;

/// Phases a property passes through from first look to handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    PreCheck,
    PurchaseDecision,
    Documentation,
    Marketing,
    Notary,
    Handover,
}

impl PipelinePhase {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PreCheck,
            Self::PurchaseDecision,
            Self::Documentation,
            Self::Marketing,
            Self::Notary,
            Self::Handover,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PreCheck => "Pre-Check",
            Self::PurchaseDecision => "Purchase Decision",
            Self::Documentation => "Documentation",
            Self::Marketing => "Marketing",
            Self::Notary => "Notary",
            Self::Handover => "Handover",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PreCheck => Some(Self::PurchaseDecision),
            Self::PurchaseDecision => Some(Self::Documentation),
            Self::Documentation => Some(Self::Marketing),
            Self::Marketing => Some(Self::Notary),
            Self::Notary => Some(Self::Handover),
            Self::Handover => None,
        }
    }

    /// Pre-check works from a handful of fields; later phases have full documentation.
    pub const fn scoring_profile(self) -> ScoringProfile {
        match self {
            Self::PreCheck => ScoringProfile::PreCheck,
            _ => ScoringProfile::Full,
        }
    }
}
