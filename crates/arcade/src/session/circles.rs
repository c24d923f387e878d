//! Circle-overlap terminal.

use super::{Reply, Session};
use crate::commands::CirclesCommand;
use crate::config::ArcadeConfig;
use arcade_circles::{Circle, CirclePad, PadEvent};
use arcade_core::{ArcadeRng, seeded_rng};
use derive_new::new;
use tracing::{debug, instrument};

const HELP: &[&str] = &[
    "Commands:",
    "  place X Y   click at (X, Y); plain \"X Y\" works too",
    "  reset       clear the pad",
    "  help        show this list",
    "  quit        leave",
];

/// The circle pad driven by typed coordinates.
#[derive(Debug, new)]
pub struct CirclesSession {
    pad: CirclePad,
    username: String,
    rng: ArcadeRng,
}

impl CirclesSession {
    /// Builds a session from the arcade settings.
    #[instrument(skip(config))]
    pub fn from_config(config: &ArcadeConfig) -> Self {
        Self::new(
            CirclePad::new(),
            config.username().clone(),
            seeded_rng(*config.seed()),
        )
    }

    /// The current pad.
    pub fn pad(&self) -> &CirclePad {
        &self.pad
    }
}

fn describe(index: usize, circle: &Circle) -> String {
    format!(
        "Circle {} at ({:.1}, {:.1}) with radius {:.1}",
        index, circle.x, circle.y, circle.radius
    )
}

impl Session for CirclesSession {
    fn widget(&self) -> &'static str {
        "circles"
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn banner(&self) -> Vec<String> {
        vec![
            "Circles. Type help for commands.".to_string(),
            "Click anywhere to place Circle 1".to_string(),
        ]
    }

    #[instrument(skip(self))]
    fn handle(&mut self, line: &str) -> Reply {
        let command = CirclesCommand::parse(line);
        debug!(?command, "Parsed command");
        match command {
            CirclesCommand::Place { x, y } => {
                let (pad, event) = std::mem::take(&mut self.pad).click(x, y, &mut self.rng);
                self.pad = pad;
                let lines = match event {
                    PadEvent::First(circle) => vec![
                        describe(1, &circle),
                        "Click anywhere to place Circle 2".to_string(),
                    ],
                    PadEvent::Second(circle, verdict) => vec![
                        describe(2, &circle),
                        verdict.message().to_string(),
                        "Click again to start over".to_string(),
                    ],
                    PadEvent::Cleared => vec![
                        "Pad cleared".to_string(),
                        "Click anywhere to place Circle 1".to_string(),
                    ],
                };
                Reply::new(lines)
            }
            CirclesCommand::Reset => {
                self.pad = std::mem::take(&mut self.pad).reset();
                Reply::new(vec![
                    "Pad cleared".to_string(),
                    "Click anywhere to place Circle 1".to_string(),
                ])
            }
            CirclesCommand::Help => Reply::new(HELP.iter().map(|s| s.to_string()).collect()),
            CirclesCommand::Quit => Reply::closing("Bye"),
            CirclesCommand::Invalid(input) => {
                Reply::line(format!("Invalid point: {}. Try place 120 80", input))
            }
        }
    }
}
