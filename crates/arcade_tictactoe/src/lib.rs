//! Tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: board, marks and game status
//! - **Rules**: pure outcome evaluation over the eight winning lines
//! - **Contracts**: pre/postconditions checked around every move
//! - **Opponent**: difficulty-tiered move selection for the computer
//! - **Game**: the single-owner [`GameState`] threaded through each handler
//!
//! # Example
//!
//! ```
//! use arcade_core::{Difficulty, seeded_rng};
//! use arcade_tictactoe::{GameMode, GameState, Position};
//!
//! let mut rng = seeded_rng(Some(7));
//! let game = GameState::new(GameMode::PvC, Difficulty::Hard);
//! let game = game.click(Position::TopLeft, &mut rng).unwrap();
//! // The computer answered with the center square.
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.history()[1].position(), Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod opponent;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{
    BoardConsistent, Contract, GameIsActive, HistoryConsistent, Invariant, LegalMove,
    MonotonicBoard, MoveContract, PlayersTurn, SquareIsEmpty,
};
pub use game::{COMPUTER, FIRST_PLAYER, GameState};
pub use opponent::{random_move, select_move, strategic_move};
pub use position::{ParsePositionError, Position};
pub use rules::{LINES, check_winner, evaluate, is_full, winning_move};
pub use types::{Board, GameMode, GameStatus, Player, Square};
