//! Rock-paper-scissors against a computer that studies your habits.
//!
//! The opponent remembers the player's last ten throws. On easy it
//! ignores them; on medium it sometimes counters the player's favourite
//! throw; on hard it also spots repeats and A-B-A alternations.
//!
//! # Example
//!
//! ```
//! use arcade_core::{Difficulty, seeded_rng};
//! use arcade_rps::{Choice, MatchState};
//!
//! let mut rng = seeded_rng(Some(1));
//! let state = MatchState::new(Difficulty::Hard);
//! let (state, round) = state.play_round(Choice::Rock, &mut rng);
//! assert_eq!(round.player, Choice::Rock);
//! assert_eq!(state.history().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod choice;
mod history;
mod match_state;
mod opponent;

pub use choice::{Choice, Outcome, ParseChoiceError};
pub use history::{ChoiceHistory, HISTORY_LIMIT};
pub use match_state::{MatchState, RoundResult, Score};
pub use opponent::{random_choice, select_choice};
