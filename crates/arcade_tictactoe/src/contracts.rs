//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} apply {Q(before, after)}.

use super::action::{Move, MoveError};
use super::game::GameState;
use super::{Board, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Traits
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameIsActive;

impl GameIsActive {
    /// Rejects moves on a finished game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.turn() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is active, the square is empty and
/// it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameIsActive::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: mark counts never differ by more than one.
pub struct BoardConsistent;

impl Invariant<Board> for BoardConsistent {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

/// Invariant: every filled square was put there by a recorded move.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(game: &GameState) -> bool {
        let filled = game.board().filled();
        let history_len = game.history().len();
        let replayed = game
            .history()
            .iter()
            .all(|m| game.board().get(m.position).player() == Some(m.player));

        let valid = filled == history_len && replayed;
        if !valid {
            warn!(filled, history_len, replayed, "History consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}

/// Invariant across a transition: marks are never removed or changed and
/// exactly one is added.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Checks that `after` extends `before` by a single mark.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Board, after: &Board) -> bool {
        let preserved = before
            .squares()
            .iter()
            .zip(after.squares())
            .all(|(b, a)| b.player().is_none() || b == a);
        let valid = preserved && after.filled() == before.filled() + 1;
        if !valid {
            warn!(preserved, "Board monotonicity violated");
        }
        valid
    }

    /// Human-readable description of the invariant.
    pub fn description() -> &'static str {
        "Each move adds exactly one mark and never overwrites"
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Board grows by exactly one mark
/// - Mark counts stay balanced
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut violations = Vec::new();
        if !MonotonicBoard::holds(before.board(), after.board()) {
            violations.push(MonotonicBoard::description());
        }
        if !BoardConsistent::holds(after.board()) {
            violations.push(BoardConsistent::description());
        }
        if !HistoryConsistent::holds(after) {
            violations.push(HistoryConsistent::description());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                violations.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Position, Square};
    use arcade_core::Difficulty;

    fn fresh() -> GameState {
        GameState::new(GameMode::PvP, Difficulty::Easy)
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = fresh();
        let action = Move::new(Player::O, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = fresh().place(Position::Center).unwrap();
        let action = Move::new(Player::X, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = fresh();
        let action = Move::new(Player::X, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = fresh();
        let after = before.clone().place(Position::Center).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = fresh();
        let mut after = before.clone().place(Position::Center).unwrap();
        after.board_mut().set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_monotonic_rejects_overwrite() {
        let mut before = Board::new();
        before.set(Position::Center, Square::Occupied(Player::O));
        let mut after = before.clone();
        after.set(Position::Center, Square::Occupied(Player::X));
        after.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!MonotonicBoard::holds(&before, &after));
    }

    #[test]
    fn test_board_consistent_rejects_double_moves() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BoardConsistent::holds(&board));
    }
}
