//! Board positions and their grid notation.
//!
//! Rows are lettered A-C from the top and columns numbered 1-3 from the
//! left, so `A1` is the top-left square and `B2` the center.

use super::types::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0, A1)
    TopLeft,
    /// Top-center (position 1, A2)
    TopCenter,
    /// Top-right (position 2, A3)
    TopRight,
    /// Middle-left (position 3, B1)
    MiddleLeft,
    /// Center (position 4, B2)
    Center,
    /// Middle-right (position 5, B3)
    MiddleRight,
    /// Bottom-left (position 6, C1)
    BottomLeft,
    /// Bottom-center (position 7, C2)
    BottomCenter,
    /// Bottom-right (position 8, C3)
    BottomRight,
}

/// Text that names no square on the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Not a board position: {input:?}")]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Corner squares in the order the opponent prefers them.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Grid notation for this position, e.g. `B2` for the center.
    pub fn notation(self) -> String {
        let index = self.to_index();
        let row = ['A', 'B', 'C'][index / 3];
        format!("{}{}", row, index % 3 + 1)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses grid notation (`A1`..`C3`, case-insensitive).
    #[instrument]
    pub fn from_notation(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let row = match chars.next()?.to_ascii_uppercase() {
            'A' => 0,
            'B' => 1,
            'C' => 2,
            _ => return None,
        };
        let col = chars.next()?.to_digit(10)? as usize;
        if chars.next().is_some() || !(1..=3).contains(&col) {
            return None;
        }
        Self::from_index(row * 3 + col - 1)
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts grid notation, a board index (0-8) or a label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(pos) = Self::from_notation(trimmed) {
            return Ok(pos);
        }
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| ParsePositionError {
                input: s.to_string(),
            });
        }
        Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePositionError {
                input: s.to_string(),
            })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}
