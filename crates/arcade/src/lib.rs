//! Arcade front end - terminal sessions for the arcade games.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with environment and CLI overrides
//! - **Commands**: typed parsing of each game's terminal input
//! - **Session**: one game's state and RNG, driven a line at a time
//!
//! # Example
//!
//! ```
//! use arcade::{ArcadeConfig, TicTacToeSession, run_session};
//! use std::io::Cursor;
//!
//! let config = ArcadeConfig::default().with_seed(Some(1));
//! let mut session = TicTacToeSession::from_config(&config);
//! let mut out = Vec::new();
//! run_session(&mut session, Cursor::new("B2\nquit\n"), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("O moves to B2"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod commands;
mod config;
mod session;

// Crate-level exports
pub use commands::{CirclesCommand, RpsCommand, TicTacToeCommand};
pub use config::{ArcadeConfig, ConfigError, SEED_ENV};
pub use session::{CirclesSession, Reply, RpsSession, Session, TicTacToeSession, run_session};
