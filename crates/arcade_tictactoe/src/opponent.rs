//! Computer opponent move selection.
//!
//! Easy plays a uniformly random empty square. Hard follows a fixed
//! priority list: win, block, center, first free corner, anything.
//! Medium flips a fair coin between the two on every move.

use crate::rules::winning_move;
use crate::{Board, Player, Position};
use arcade_core::Difficulty;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks the computer's next square, or `None` when the board is full.
///
/// `mark` is the symbol the computer plays; the opposing mark is the one
/// it blocks.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    mark: Player,
    rng: &mut R,
) -> Option<Position> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool(0.5) {
                strategic_move(board, mark, rng)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => strategic_move(board, mark, rng),
    };
    debug!(?choice, "Opponent selected move");
    choice
}

/// Uniformly random empty square.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    Position::valid_moves(board).choose(rng).copied()
}

/// The fixed-priority heuristic used on hard difficulty.
#[instrument(skip(board, rng))]
pub fn strategic_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Player,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = winning_move(board, mark) {
        debug!(position = %pos, "Taking the win");
        return Some(pos);
    }
    if let Some(pos) = winning_move(board, mark.opponent()) {
        debug!(position = %pos, "Blocking");
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }
    if let Some(corner) = Position::CORNERS
        .iter()
        .copied()
        .find(|pos| board.is_empty(*pos))
    {
        return Some(corner);
    }
    random_move(board, rng)
}
