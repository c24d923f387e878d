//! Outcome evaluation: combines win and draw detection.

use super::{check_winner, is_full};
use crate::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// A completed line takes precedence over a full board, so the last
/// move of a game can win rather than draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn parse(rows: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(rows.chars()) {
            match c {
                'X' => board.set(pos, Square::Occupied(Player::X)),
                'O' => board.set(pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert_eq!(evaluate(&parse("XOXOXXOXO")), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        // X X X / O O X / X O O
        assert_eq!(evaluate(&parse("XXXOOXXOO")), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_partial_board_without_line() {
        assert_eq!(evaluate(&parse("XO..X...O")), GameStatus::InProgress);
    }

    #[test]
    fn test_every_line_wins_for_either_mark() {
        for line in crate::LINES {
            for player in [Player::O, Player::X] {
                let mut board = Board::new();
                for pos in line {
                    board.set(pos, Square::Occupied(player));
                }
                assert_eq!(evaluate(&board), GameStatus::Won(player));
            }
        }
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let board = parse("XO.OX....");
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
