//! The single-owner game state threaded through every handler.
//!
//! Each operation consumes the current [`GameState`] and returns the next
//! one, so a front end holds exactly one value per open board.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::opponent::select_move;
use super::rules::evaluate;
use super::{Board, GameMode, GameStatus, Player, Position, Square};
use arcade_core::Difficulty;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The mark that opens every game.
pub const FIRST_PLAYER: Player = Player::O;

/// The mark the computer plays in player-vs-computer games.
pub const COMPUTER: Player = Player::X;

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    mode: GameMode,
    difficulty: Difficulty,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game with O to move.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            turn: FIRST_PLAYER,
            mode,
            difficulty,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer's difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when the computer is the player on turn.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::PvC && self.turn == COMPUTER && !self.status.is_over()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Applies a move, consuming self and returning the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply(self, action: Move) -> Result<Self, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board
            .set(action.position, Square::Occupied(action.player));
        game.history.push(action);
        game.status = evaluate(&game.board);
        if !game.status.is_over() {
            game.turn = game.turn.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        debug!(%action, status = ?game.status, "Move applied");
        if game.status.is_over() {
            info!(status = ?game.status, "Game finished");
        }
        Ok(game)
    }

    /// Places the mark of the player on turn at `position`.
    #[instrument(skip(self))]
    pub fn place(self, position: Position) -> Result<Self, MoveError> {
        let action = Move::new(self.turn, position);
        self.apply(action)
    }

    /// Lets the computer take its turn.
    ///
    /// Returns the new state together with the move the computer made.
    #[instrument(skip(self, rng), fields(difficulty = %self.difficulty))]
    pub fn computer_move<R: Rng + ?Sized>(self, rng: &mut R) -> Result<(Self, Move), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(MoveError::NotComputerTurn);
        }
        let position =
            select_move(&self.board, self.difficulty, COMPUTER, rng).ok_or(MoveError::NoLegalMove)?;
        let action = Move::new(COMPUTER, position);
        let game = self.apply(action)?;
        Ok((game, action))
    }

    /// Handles a click on a square.
    ///
    /// The player on turn marks `position`; in player-vs-computer games the
    /// computer answers straight away unless the click ended the game.
    #[instrument(skip(self, rng))]
    pub fn click<R: Rng + ?Sized>(self, position: Position, rng: &mut R) -> Result<Self, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::WrongPlayer(self.turn.opponent()));
        }
        let game = self.place(position)?;
        if game.is_computer_turn() {
            let (game, reply) = game.computer_move(rng)?;
            debug!(%reply, "Computer replied");
            return Ok(game);
        }
        Ok(game)
    }

    /// Starts over on an empty board, keeping mode and difficulty.
    #[instrument(skip(self))]
    pub fn reset(self) -> Self {
        Self::new(self.mode, self.difficulty)
    }

    /// Switches mode; the board is reset.
    #[instrument(skip(self))]
    pub fn with_mode(self, mode: GameMode) -> Self {
        Self::new(mode, self.difficulty)
    }

    /// Changes the computer's tier without touching the board.
    #[instrument(skip(self))]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Whose turn it is, phrased for the player.
    pub fn turn_message(&self) -> String {
        if self.is_computer_turn() {
            "Computer's turn".to_string()
        } else {
            format!("{} turn", self.turn)
        }
    }

    /// The end-of-game announcement, once the game is over.
    pub fn result_message(&self) -> Option<String> {
        match (self.status, self.mode) {
            (GameStatus::InProgress, _) => None,
            (GameStatus::Draw, _) => Some("Game is Draw".to_string()),
            (GameStatus::Won(winner), GameMode::PvC) if winner == COMPUTER => {
                Some("Computer Wins!".to_string())
            }
            (GameStatus::Won(_), GameMode::PvC) => Some("You Win! Congratulations!".to_string()),
            (GameStatus::Won(winner), GameMode::PvP) => {
                Some(format!("Congratulations, Winner is \"{}\"", winner))
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::seeded_rng;

    #[test]
    fn test_o_moves_first() {
        let game = GameState::default();
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.turn_message(), "O turn");
    }

    #[test]
    fn test_turns_alternate() {
        let game = GameState::default().place(Position::Center).unwrap();
        assert_eq!(game.turn(), Player::X);
        let game = game.place(Position::TopLeft).unwrap();
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = GameState::default().place(Position::Center).unwrap();
        assert_eq!(
            game.place(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = GameState::default();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game = game.place(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::O));
        assert_eq!(game.turn(), Player::O);
        assert_eq!(
            game.result_message().as_deref(),
            Some("Congratulations, Winner is \"O\"")
        );
        assert_eq!(game.place(Position::BottomLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_replies_after_click() {
        let mut rng = seeded_rng(Some(3));
        let game = GameState::new(GameMode::PvC, Difficulty::Hard)
            .click(Position::TopLeft, &mut rng)
            .unwrap();
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1], Move::new(COMPUTER, Position::Center));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_computer_move_outside_turn() {
        let mut rng = seeded_rng(Some(3));
        let game = GameState::new(GameMode::PvC, Difficulty::Hard);
        assert_eq!(
            game.computer_move(&mut rng).map(|(_, m)| m),
            Err(MoveError::NotComputerTurn)
        );
        let pvp = GameState::new(GameMode::PvP, Difficulty::Hard)
            .place(Position::Center)
            .unwrap();
        assert_eq!(
            pvp.computer_move(&mut rng).map(|(_, m)| m),
            Err(MoveError::NotComputerTurn)
        );
    }

    #[test]
    fn test_mode_switch_resets_but_difficulty_does_not() {
        let game = GameState::default().place(Position::Center).unwrap();
        let same = game.clone().with_difficulty(Difficulty::Hard);
        assert_eq!(same.history().len(), 1);
        assert_eq!(same.difficulty(), Difficulty::Hard);

        let switched = same.with_mode(GameMode::PvC);
        assert!(switched.history().is_empty());
        assert_eq!(switched.difficulty(), Difficulty::Hard);
        assert_eq!(switched.mode(), GameMode::PvC);
    }
}
