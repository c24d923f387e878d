//! Throws and who beats whom.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the three throws.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Choice {
    /// Blunt. Beats scissors.
    Rock,
    /// Wraps rock.
    Paper,
    /// Cuts paper.
    Scissors,
}

/// A round's result from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// The player's throw beat the opponent's.
    Win,
    /// The opponent's throw beat the player's.
    Loss,
    /// Both threw the same.
    Draw,
}

/// Text that names no throw.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Not a choice: {input:?} (expected rock, paper or scissors)")]
pub struct ParseChoiceError {
    /// The rejected input.
    pub input: String,
}

impl Choice {
    /// All throws, in tie-break order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The throw that defeats this one.
    pub fn counter(self) -> Self {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }

    /// True when this throw defeats `other`.
    pub fn beats(self, other: Choice) -> bool {
        other.counter() == self
    }

    /// Scores this throw against the opponent's.
    #[instrument]
    pub fn against(self, opponent: Choice) -> Outcome {
        if self == opponent {
            Outcome::Draw
        } else if self.beats(opponent) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// Hand sign for this throw.
    pub fn icon(self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌️",
        }
    }
}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    /// Accepts the full name or its first letter, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "s" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError {
                input: s.to_string(),
            }),
        }
    }
}
