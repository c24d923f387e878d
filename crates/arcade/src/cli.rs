//! Command-line interface for the arcade.

use arcade_core::Difficulty;
use arcade_tictactoe::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arcade - small games in the terminal
#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Tic-tac-toe, rock-paper-scissors and circles in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "arcade.toml")]
    pub config: PathBuf,

    /// Seed for the computer opponents (overrides ARCADE_SEED and the config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe
    #[command(alias = "ttt")]
    Tictactoe {
        /// pvp or pvc
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Computer difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Play rock-paper-scissors against the computer
    Rps {
        /// Computer difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Place two circles and check whether they overlap
    Circles,
}
