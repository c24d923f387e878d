//! Terminal command parsing for each game.
//!
//! Parsing never fails: unrecognised input becomes an `Invalid` command
//! carrying the raw text so the session can echo it back.

use arcade_core::Difficulty;
use arcade_rps::Choice;
use arcade_tictactoe::{GameMode, Position};
use tracing::instrument;

/// A line typed into the tic-tac-toe terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeCommand {
    /// Mark a square.
    Place(Position),
    /// Clear the board.
    Reset,
    /// Start another game once the current one has ended.
    New,
    /// Show the command list.
    Help,
    /// Print the player's name.
    Whoami,
    /// Print the working directory.
    Pwd,
    /// Switch between player-vs-player and player-vs-computer.
    Mode(GameMode),
    /// Change the computer's tier.
    Difficulty(Difficulty),
    /// Leave the game.
    Quit,
    /// Anything else.
    Invalid(String),
}

impl TicTacToeCommand {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, arg) = split_command(line);
        match (word.to_ascii_lowercase().as_str(), arg) {
            ("reset", None) => Self::Reset,
            ("new", None) => Self::New,
            ("help", None) => Self::Help,
            ("whoami", None) => Self::Whoami,
            ("pwd", None) => Self::Pwd,
            ("quit" | "exit", None) => Self::Quit,
            ("mode", Some(arg)) => arg
                .parse()
                .map(Self::Mode)
                .unwrap_or_else(|_| Self::Invalid(line.to_string())),
            ("difficulty", Some(arg)) => arg
                .parse()
                .map(Self::Difficulty)
                .unwrap_or_else(|_| Self::Invalid(line.to_string())),
            _ => line
                .parse()
                .map(Self::Place)
                .unwrap_or_else(|_| Self::Invalid(line.to_string())),
        }
    }
}

/// A line typed into the rock-paper-scissors terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpsCommand {
    /// Play a round.
    Throw(Choice),
    /// Show the running score.
    Score,
    /// Change tier and start a new match.
    Difficulty(Difficulty),
    /// Start a new match.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else.
    Invalid(String),
}

impl RpsCommand {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, arg) = split_command(line);
        match (word.to_ascii_lowercase().as_str(), arg) {
            ("score", None) => Self::Score,
            ("reset", None) => Self::Reset,
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("difficulty", Some(arg)) => arg
                .parse()
                .map(Self::Difficulty)
                .unwrap_or_else(|_| Self::Invalid(line.to_string())),
            (_, None) => line
                .parse()
                .map(Self::Throw)
                .unwrap_or_else(|_| Self::Invalid(line.to_string())),
            _ => Self::Invalid(line.to_string()),
        }
    }
}

/// A line typed into the circles terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum CirclesCommand {
    /// Click at a point.
    Place {
        /// Horizontal coordinate.
        x: f64,
        /// Vertical coordinate.
        y: f64,
    },
    /// Clear the pad.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the pad.
    Quit,
    /// Anything else.
    Invalid(String),
}

impl CirclesCommand {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, arg) = split_command(line);
        match (word.to_ascii_lowercase().as_str(), arg) {
            ("reset", None) => Self::Reset,
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("place", Some(arg)) => parse_point(arg).unwrap_or_else(|| Self::Invalid(line.to_string())),
            _ => parse_point(line).unwrap_or_else(|| Self::Invalid(line.to_string())),
        }
    }
}

fn parse_point(text: &str) -> Option<CirclesCommand> {
    let mut parts = text.split_whitespace();
    let x: f64 = parts.next()?.parse().ok()?;
    let y: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(CirclesCommand::Place { x, y })
}

/// Splits `line` into its first word and the trimmed remainder, if any.
fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    }
}
