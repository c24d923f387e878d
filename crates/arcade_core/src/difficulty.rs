//! Difficulty tiers shared by every computer opponent.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which strategy the computer opponent plays with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random play.
    Easy,
    /// A blend of random and heuristic play.
    #[default]
    Medium,
    /// Heuristic play.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this tier.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}
