//! A running best-of-forever match against the computer.

use super::opponent::select_choice;
use super::{Choice, ChoiceHistory, Outcome};
use arcade_core::Difficulty;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// One round's throws and result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The player's throw.
    pub player: Choice,
    /// The computer's throw.
    pub opponent: Choice,
    /// Result from the player's side.
    pub outcome: Outcome,
}

impl RoundResult {
    /// Scores a pair of throws.
    pub fn new(player: Choice, opponent: Choice) -> Self {
        Self {
            player,
            opponent,
            outcome: player.against(opponent),
        }
    }

    /// Announcement for this round.
    pub fn message(&self) -> String {
        match self.outcome {
            Outcome::Win => format!("You Won! {} beats {}", self.player, self.opponent),
            Outcome::Loss => format!("You Lost! {} beats {}", self.opponent, self.player),
            Outcome::Draw => "Draw!".to_string(),
        }
    }
}

/// Rounds won by each side. Draws score nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Rounds the player won.
    pub player: u32,
    /// Rounds the computer won.
    pub opponent: u32,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You {} - {} Computer", self.player, self.opponent)
    }
}

/// Everything a match carries from one round to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    history: ChoiceHistory,
    score: Score,
    difficulty: Difficulty,
}

impl MatchState {
    /// Starts an empty match.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            history: ChoiceHistory::new(),
            score: Score::default(),
            difficulty,
        }
    }

    /// The player's remembered throws.
    pub fn history(&self) -> &ChoiceHistory {
        &self.history
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The computer's tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Plays one round.
    ///
    /// The computer commits to its throw from the history alone; the
    /// player's throw is recorded afterwards.
    #[instrument(skip(self, rng), fields(difficulty = %self.difficulty))]
    pub fn play_round<R: Rng + ?Sized>(mut self, player: Choice, rng: &mut R) -> (Self, RoundResult) {
        let opponent = select_choice(&self.history, self.difficulty, rng);
        let round = RoundResult::new(player, opponent);
        match round.outcome {
            Outcome::Win => self.score.player += 1,
            Outcome::Loss => self.score.opponent += 1,
            Outcome::Draw => {}
        }
        self.history.push(player);
        info!(%player, %opponent, outcome = %round.outcome, score = %self.score, "Round played");
        (self, round)
    }

    /// Changes tier and starts the match over.
    #[instrument(skip(self))]
    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self::new(difficulty)
    }

    /// Starts the match over at the same tier.
    #[instrument(skip(self))]
    pub fn reset(self) -> Self {
        Self::new(self.difficulty)
    }
}
