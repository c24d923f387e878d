//! Shared building blocks for the arcade games.
//!
//! Every opponent in the arcade is parameterised by a [`Difficulty`] tier
//! and draws its randomness from an injected [`ArcadeRng`], so that a
//! seeded run replays identically.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod rng;

pub use difficulty::Difficulty;
pub use rng::{ArcadeRng, seeded_rng};
