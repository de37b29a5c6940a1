use serde::{Deserialize, Serialize};

const GREEN_THRESHOLD: f64 = 7.0;
const YELLOW_THRESHOLD: f64 = 4.0;

/// Three-colour rating shown next to every axis score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLightStatus {
    Red,
    Yellow,
    Green,
}

impl TrafficLightStatus {
    /// Maps a 0–10 score onto a status. Applies to every axis alike.
    pub fn classify(score: f64) -> Self {
        if score >= GREEN_THRESHOLD {
            Self::Green
        } else if score >= YELLOW_THRESHOLD {
            Self::Yellow
        } else {
            // NaN lands here too.
            Self::Red
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
        }
    }
}
