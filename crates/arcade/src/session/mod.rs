//! Line-driven game sessions.
//!
//! A session owns one game's state and RNG and turns each typed line into
//! a [`Reply`]. [`run_session`] drives any session over a reader/writer
//! pair, which is stdin/stdout for the binary and in-memory buffers in
//! tests.

mod circles;
mod rps;
mod tictactoe;

pub use circles::CirclesSession;
pub use rps::RpsSession;
pub use tictactoe::TicTacToeSession;

use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Output for one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, new)]
pub struct Reply {
    /// Lines to print, in order.
    lines: Vec<String>,
    /// Set when the session should end after printing.
    #[new(default)]
    done: bool,
}

impl Reply {
    /// A single-line reply.
    pub fn line(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }

    /// A reply that ends the session.
    pub fn closing(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            done: true,
        }
    }
}

/// A game that can be played one typed line at a time.
pub trait Session {
    /// Short name shown in the prompt.
    fn widget(&self) -> &'static str;

    /// The player's name.
    fn username(&self) -> &str;

    /// Lines printed before the first prompt.
    fn banner(&self) -> Vec<String>;

    /// Handles one non-empty input line.
    fn handle(&mut self, line: &str) -> Reply;

    /// The prompt printed before each line is read.
    fn prompt(&self) -> String {
        format!("{}@{}:~$ ", self.username(), self.widget())
    }
}

/// Runs `session` until it asks to stop or `input` runs dry.
#[instrument(skip_all, fields(widget = session.widget()))]
pub fn run_session<S, R, W>(session: &mut S, mut input: R, mut output: W) -> Result<()>
where
    S: Session + ?Sized,
    R: BufRead,
    W: Write,
{
    info!("Session started");
    for line in session.banner() {
        writeln!(output, "{}", line).context("Failed to write banner")?;
    }

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", session.prompt()).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("Input closed");
            writeln!(output).context("Failed to write output")?;
            break;
        }

        // Undecodable bytes become U+FFFD and fall through as an unknown command.
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        let reply = session.handle(line);
        for text in reply.lines() {
            writeln!(output, "{}", text).context("Failed to write reply")?;
        }
        if *reply.done() {
            break;
        }
    }

    info!("Session ended");
    Ok(())
}
