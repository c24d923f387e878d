//! Seedable randomness for opponent selection.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, instrument};

/// The random source every selector draws from.
pub type ArcadeRng = SmallRng;

/// Builds the arcade RNG, deterministic when a seed is given.
#[instrument]
pub fn seeded_rng(seed: Option<u64>) -> ArcadeRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded RNG");
            SmallRng::seed_from_u64(seed)
        }
        None => {
            debug!("Using OS-seeded RNG");
            SmallRng::from_os_rng()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        let xs: Vec<u32> = (0..8).map(|_| a.random_range(0..100)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random_range(0..100)).collect();
        assert_eq!(xs, ys);
    }
}
