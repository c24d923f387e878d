//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the opponent and the contracts can share them.

mod draw;
mod evaluate;
mod win;

pub use draw::is_full;
pub use evaluate::evaluate;
pub use win::{LINES, check_winner, winning_move};
