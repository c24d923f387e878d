//! Computer opponent throw selection.

use super::{Choice, ChoiceHistory};
use arcade_core::Difficulty;
use rand::Rng;
use tracing::{debug, instrument};

/// Chance that medium ignores the history and throws at random.
const MEDIUM_RANDOM_RATE: f64 = 0.7;

/// Chance that hard counters the favourite when no pattern shows.
const HARD_FAVOURITE_RATE: f64 = 0.6;

/// Uniformly random throw.
pub fn random_choice<R: Rng + ?Sized>(rng: &mut R) -> Choice {
    Choice::ALL[rng.random_range(0..Choice::ALL.len())]
}

/// Picks the computer's throw before it sees the player's.
///
/// `history` holds the player's earlier throws, oldest first.
#[instrument(skip(history, rng), fields(history_len = history.len()))]
pub fn select_choice<R: Rng + ?Sized>(
    history: &ChoiceHistory,
    difficulty: Difficulty,
    rng: &mut R,
) -> Choice {
    let choice = match difficulty {
        Difficulty::Easy => random_choice(rng),
        Difficulty::Medium => medium(history, rng),
        Difficulty::Hard => hard(history, rng),
    };
    debug!(%choice, "Opponent selected throw");
    choice
}

fn medium<R: Rng + ?Sized>(history: &ChoiceHistory, rng: &mut R) -> Choice {
    if rng.random_bool(MEDIUM_RANDOM_RATE) || history.len() < 3 {
        return random_choice(rng);
    }
    counter_favourite(history, rng)
}

fn hard<R: Rng + ?Sized>(history: &ChoiceHistory, rng: &mut R) -> Choice {
    if history.len() < 2 {
        return random_choice(rng);
    }
    if let Some([a, b, c]) = history.last_three() {
        if a == b && b == c {
            debug!(repeated = %a, "Player is repeating");
            return a.counter();
        }
        if a == c && a != b {
            debug!(expected = %a, "Player is alternating");
            return a.counter();
        }
    }
    if rng.random_bool(HARD_FAVOURITE_RATE) {
        counter_favourite(history, rng)
    } else {
        random_choice(rng)
    }
}

fn counter_favourite<R: Rng + ?Sized>(history: &ChoiceHistory, rng: &mut R) -> Choice {
    match history.most_frequent() {
        Some(favourite) => favourite.counter(),
        None => random_choice(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;
    use arcade_core::seeded_rng;

    fn history(choices: &[Choice]) -> ChoiceHistory {
        choices.iter().copied().collect()
    }

    fn tally(history: &ChoiceHistory, difficulty: Difficulty, seed: u64, rounds: usize) -> [usize; 3] {
        let mut rng = seeded_rng(Some(seed));
        let mut counts = [0; 3];
        for _ in 0..rounds {
            counts[select_choice(history, difficulty, &mut rng) as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_hard_counters_repeats() {
        let mut rng = seeded_rng(Some(2));
        let h = history(&[Paper, Scissors, Scissors, Scissors]);
        for _ in 0..50 {
            assert_eq!(select_choice(&h, Difficulty::Hard, &mut rng), Rock);
        }
    }

    #[test]
    fn test_hard_counters_alternation() {
        let mut rng = seeded_rng(Some(2));
        let h = history(&[Rock, Paper, Rock]);
        for _ in 0..50 {
            assert_eq!(select_choice(&h, Difficulty::Hard, &mut rng), Paper);
        }
    }

    #[test]
    fn test_hard_leans_on_favourite() {
        // Paper is the favourite and the tail shows no pattern.
        let h = history(&[Paper, Paper, Rock, Paper, Scissors]);
        let counts = tally(&h, Difficulty::Hard, 8, 2000);
        // Expected scissors share: 0.6 + 0.4 / 3 ≈ 73%.
        assert!(counts[Scissors as usize] > 1300, "{counts:?}");
    }

    #[test]
    fn test_hard_random_with_short_history() {
        let counts = tally(&history(&[Rock]), Difficulty::Hard, 4, 900);
        assert!(counts.iter().all(|c| *c > 200), "{counts:?}");
    }

    #[test]
    fn test_medium_short_history_is_random() {
        let counts = tally(&history(&[Rock, Rock]), Difficulty::Medium, 6, 900);
        assert!(counts.iter().all(|c| *c > 200), "{counts:?}");
    }

    #[test]
    fn test_medium_sometimes_counters_favourite() {
        let h = history(&[Rock, Rock, Paper, Rock]);
        let counts = tally(&h, Difficulty::Medium, 10, 3000);
        // Expected paper share: 0.3 + 0.7 / 3 ≈ 53%.
        assert!(counts[Paper as usize] > 1400, "{counts:?}");
        assert!(counts[Paper as usize] < 1800, "{counts:?}");
    }

    #[test]
    fn test_easy_ignores_history() {
        let h = history(&[Rock, Rock, Rock]);
        let counts = tally(&h, Difficulty::Easy, 12, 900);
        assert!(counts.iter().all(|c| *c > 200), "{counts:?}");
    }
}
