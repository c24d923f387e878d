//! Tic-tac-toe terminal.

use super::{Reply, Session};
use crate::commands::TicTacToeCommand;
use crate::config::ArcadeConfig;
use arcade_core::{ArcadeRng, seeded_rng};
use arcade_tictactoe::{COMPUTER, GameMode, GameState, Move, Position};
use derive_new::new;
use tracing::{debug, instrument, warn};

const HELP: &[&str] = &[
    "Commands:",
    "  A1..C3      mark a square (row letter, column number)",
    "  reset       clear the board",
    "  new         start a new game once this one is over",
    "  mode M      pvp or pvc (resets the board)",
    "  difficulty  easy, medium or hard",
    "  whoami      print your name",
    "  pwd         print the working directory",
    "  help        show this list",
    "  quit        leave",
];

/// Tic-tac-toe played one typed command at a time.
#[derive(Debug, new)]
pub struct TicTacToeSession {
    game: GameState,
    username: String,
    rng: ArcadeRng,
}

impl TicTacToeSession {
    /// Builds a session from the arcade settings.
    #[instrument(skip(config))]
    pub fn from_config(config: &ArcadeConfig) -> Self {
        Self::new(
            GameState::new(*config.mode(), *config.difficulty()),
            config.username().clone(),
            seeded_rng(*config.seed()),
        )
    }

    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    fn describe(&self, action: &Move) -> String {
        if self.game.mode() == GameMode::PvC && action.player == COMPUTER {
            format!("Computer ({}) moves to {}", action.player, action.position)
        } else {
            action.to_string()
        }
    }

    fn board_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.game.board().display().lines().map(String::from).collect();
        lines.push(
            self.game
                .result_message()
                .unwrap_or_else(|| self.game.turn_message()),
        );
        lines
    }

    #[instrument(skip(self))]
    fn click(&mut self, position: Position) -> Reply {
        let before = self.game.history().len();
        match self.game.clone().click(position, &mut self.rng) {
            Ok(next) => {
                self.game = next;
                let mut lines: Vec<String> = self.game.history()[before..]
                    .iter()
                    .map(|action| self.describe(action))
                    .collect();
                lines.extend(self.board_lines());
                Reply::new(lines)
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                Reply::line(e.to_string())
            }
        }
    }

    fn restart(&mut self, message: &str) -> Reply {
        self.game = std::mem::take(&mut self.game).reset();
        let mut lines = vec![message.to_string()];
        lines.extend(self.board_lines());
        Reply::new(lines)
    }
}

impl Session for TicTacToeSession {
    fn widget(&self) -> &'static str {
        "tic-tac-toe"
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn banner(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Tic-tac-toe ({}, {}). Type help for commands.",
            self.game.mode(),
            self.game.difficulty().label()
        )];
        lines.extend(self.board_lines());
        lines
    }

    #[instrument(skip(self))]
    fn handle(&mut self, line: &str) -> Reply {
        let command = TicTacToeCommand::parse(line);
        debug!(?command, "Parsed command");
        match command {
            TicTacToeCommand::Place(position) => self.click(position),
            TicTacToeCommand::Reset => self.restart("Game reset"),
            TicTacToeCommand::New if self.game.status().is_over() => {
                self.restart("New game started")
            }
            TicTacToeCommand::New => Reply::line("New game not available"),
            TicTacToeCommand::Help => Reply::new(HELP.iter().map(|s| s.to_string()).collect()),
            TicTacToeCommand::Whoami => Reply::line(self.username.clone()),
            TicTacToeCommand::Pwd => Reply::line(format!("/home/{}/tic-tac-toe", self.username)),
            TicTacToeCommand::Mode(mode) => {
                self.game = std::mem::take(&mut self.game).with_mode(mode);
                let mut lines = vec![format!("Mode set to {}", mode)];
                lines.extend(self.board_lines());
                Reply::new(lines)
            }
            TicTacToeCommand::Difficulty(difficulty) => {
                self.game = std::mem::take(&mut self.game).with_difficulty(difficulty);
                Reply::line(format!("Difficulty set to {}", difficulty))
            }
            TicTacToeCommand::Quit => Reply::closing("Bye"),
            TicTacToeCommand::Invalid(input) => Reply::line(format!(
                "Invalid move: {}. Try positions like A1, B2, C3",
                input
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::Difficulty;
    use arcade_tictactoe::GameStatus;

    fn session(mode: GameMode) -> TicTacToeSession {
        TicTacToeSession::new(
            GameState::new(mode, Difficulty::Hard),
            "ada".to_string(),
            seeded_rng(Some(4)),
        )
    }

    #[test]
    fn test_computer_reply_is_described() {
        let mut session = session(GameMode::PvC);
        let reply = session.handle("A1");
        assert_eq!(reply.lines()[0], "O moves to A1");
        assert_eq!(reply.lines()[1], "Computer (X) moves to B2");
        assert_eq!(reply.lines().last().map(String::as_str), Some("O turn"));
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut session = session(GameMode::PvP);
        session.handle("B2");
        let reply = session.handle("b2");
        assert_eq!(reply.lines(), &vec!["Position B2 is already taken".to_string()]);
        assert_eq!(session.game().history().len(), 1);
    }

    #[test]
    fn test_new_only_after_game_over() {
        let mut session = session(GameMode::PvP);
        assert_eq!(session.handle("new").lines()[0], "New game not available");
        for square in ["A1", "B1", "A2", "B2", "A3"] {
            session.handle(square);
        }
        assert_eq!(session.game().status(), GameStatus::Won(arcade_tictactoe::Player::O));
        assert_eq!(session.handle("new").lines()[0], "New game started");
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn test_shell_commands() {
        let mut session = session(GameMode::PvP);
        assert_eq!(session.handle("whoami").lines()[0], "ada");
        assert_eq!(session.handle("pwd").lines()[0], "/home/ada/tic-tac-toe");
        assert_eq!(
            session.handle("D9").lines()[0],
            "Invalid move: D9. Try positions like A1, B2, C3"
        );
        assert!(*session.handle("quit").done());
    }
}
