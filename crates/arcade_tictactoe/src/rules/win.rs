//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::{instrument, trace};

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line holding three identical
/// marks, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

/// Finds the square that would complete a line for `player`.
///
/// A line qualifies when exactly two of its squares hold `player` and the
/// third is empty. Lines are scanned in [`LINES`] order and the first hit
/// wins.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    for line in LINES {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(player))
            .count();
        if owned != 2 {
            continue;
        }
        if let Some(gap) = line.iter().copied().find(|pos| board.is_empty(*pos)) {
            trace!(?player, position = %gap, "Line can be completed");
            return Some(gap);
        }
    }

    None
}
