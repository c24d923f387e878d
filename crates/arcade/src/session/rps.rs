//! Rock-paper-scissors terminal.

use super::{Reply, Session};
use crate::commands::RpsCommand;
use crate::config::ArcadeConfig;
use arcade_core::{ArcadeRng, seeded_rng};
use arcade_rps::{Choice, MatchState};
use derive_new::new;
use tracing::{debug, instrument};

const HELP: &[&str] = &[
    "Commands:",
    "  rock | paper | scissors   throw (r, p, s also work)",
    "  score                     show the score",
    "  difficulty D              easy, medium or hard (starts a new match)",
    "  reset                     start a new match",
    "  help                      show this list",
    "  quit                      leave",
];

/// A rock-paper-scissors match played from the terminal.
#[derive(Debug, new)]
pub struct RpsSession {
    state: MatchState,
    username: String,
    rng: ArcadeRng,
}

impl RpsSession {
    /// Builds a session from the arcade settings.
    #[instrument(skip(config))]
    pub fn from_config(config: &ArcadeConfig) -> Self {
        Self::new(
            MatchState::new(*config.difficulty()),
            config.username().clone(),
            seeded_rng(*config.seed()),
        )
    }

    /// The current match.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    fn throw(&mut self, choice: Choice) -> Reply {
        let (state, round) = std::mem::take(&mut self.state).play_round(choice, &mut self.rng);
        self.state = state;
        Reply::new(vec![
            format!(
                "You {} {}  vs  {} {} Computer",
                round.player.icon(),
                round.player,
                round.opponent,
                round.opponent.icon()
            ),
            round.message(),
            self.state.score().to_string(),
        ])
    }
}

impl Session for RpsSession {
    fn widget(&self) -> &'static str {
        "rps"
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn banner(&self) -> Vec<String> {
        vec![format!(
            "Rock, paper, scissors ({}). Type help for commands.",
            self.state.difficulty().label()
        )]
    }

    #[instrument(skip(self))]
    fn handle(&mut self, line: &str) -> Reply {
        let command = RpsCommand::parse(line);
        debug!(?command, "Parsed command");
        match command {
            RpsCommand::Throw(choice) => self.throw(choice),
            RpsCommand::Score => Reply::line(self.state.score().to_string()),
            RpsCommand::Difficulty(difficulty) => {
                self.state = std::mem::take(&mut self.state).with_difficulty(difficulty);
                Reply::line(format!("Difficulty set to {}. New match started", difficulty))
            }
            RpsCommand::Reset => {
                self.state = std::mem::take(&mut self.state).reset();
                Reply::line("Match reset")
            }
            RpsCommand::Help => Reply::new(HELP.iter().map(|s| s.to_string()).collect()),
            RpsCommand::Quit => Reply::closing(format!("Final score: {}", self.state.score())),
            RpsCommand::Invalid(input) => Reply::line(format!(
                "Unknown command: {}. Try rock, paper or scissors",
                input
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::Difficulty;
    use arcade_rps::Score;

    #[test]
    fn test_hard_counters_alternation() {
        let mut session = RpsSession::new(
            MatchState::new(Difficulty::Hard),
            "ada".to_string(),
            seeded_rng(Some(8)),
        );
        for throw in ["r", "p", "r"] {
            session.handle(throw);
        }
        let reply = session.handle("rock");
        assert_eq!(reply.lines()[0], "You ✊ rock  vs  paper ✋ Computer");
        assert_eq!(reply.lines()[1], "You Lost! paper beats rock");
    }

    #[test]
    fn test_difficulty_starts_new_match() {
        let mut session = RpsSession::new(
            MatchState::new(Difficulty::Easy),
            "ada".to_string(),
            seeded_rng(Some(8)),
        );
        session.handle("p");
        session.handle("difficulty hard");
        assert_eq!(session.state().difficulty(), Difficulty::Hard);
        assert!(session.state().history().is_empty());
        assert_eq!(session.state().score(), Score::default());
        assert_eq!(session.handle("score").lines()[0], "You 0 - 0 Computer");
    }
}
