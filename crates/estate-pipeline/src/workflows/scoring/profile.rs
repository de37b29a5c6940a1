use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which blend of sub-scores an axis uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringVariant {
    /// Few inputs, used while a unit is still being entered.
    Simplified,
    /// All sub-scores, used once a unit is fully documented.
    Full,
}

/// Bucket table applied to the gross rental yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldBands {
    Standard,
    Coarse,
}

/// Named formula presets. Each screen of the pipeline picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringProfile {
    PreCheck,
    LivePreview,
    Full,
}

impl ScoringProfile {
    pub const fn variant(self) -> ScoringVariant {
        match self {
            Self::PreCheck | Self::LivePreview => ScoringVariant::Simplified,
            Self::Full => ScoringVariant::Full,
        }
    }

    pub const fn yield_bands(self) -> YieldBands {
        match self {
            Self::LivePreview => YieldBands::Coarse,
            Self::PreCheck | Self::Full => YieldBands::Standard,
        }
    }

    /// Class score used when no energy certificate is on file.
    pub const fn missing_energy_class_score(self) -> f64 {
        match self.variant() {
            ScoringVariant::Simplified => 5.0,
            ScoringVariant::Full => 0.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreCheck => "pre_check",
            Self::LivePreview => "live_preview",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for ScoringProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scoring profile '{0}' (expected pre_check, live_preview or full)")]
pub struct UnknownScoringProfile(pub String);

impl FromStr for ScoringProfile {
    type Err = UnknownScoringProfile;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pre_check" | "precheck" => Ok(Self::PreCheck),
            "live_preview" | "live" => Ok(Self::LivePreview),
            "full" => Ok(Self::Full),
            _ => Err(UnknownScoringProfile(value.to_string())),
        }
    }
}
