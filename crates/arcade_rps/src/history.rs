//! The player's recent throws.

use super::Choice;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{instrument, trace};

/// How many throws the opponent remembers.
pub const HISTORY_LIMIT: usize = 10;

/// The player's last [`HISTORY_LIMIT`] throws, oldest first.
///
/// Serialized as a plain list; deserializing replays it through
/// [`ChoiceHistory::push`] so the limit holds for loaded histories too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Choice>", into = "Vec<Choice>")]
pub struct ChoiceHistory {
    entries: VecDeque<Choice>,
}

impl ChoiceHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a throw, dropping the oldest once the limit is reached.
    #[instrument(skip(self))]
    pub fn push(&mut self, choice: Choice) {
        if self.entries.len() == HISTORY_LIMIT {
            let evicted = self.entries.pop_front();
            trace!(?evicted, "History full, evicting oldest throw");
        }
        self.entries.push_back(choice);
    }

    /// Number of remembered throws.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first throw.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Choice> + '_ {
        self.entries.iter().copied()
    }

    /// The last three throws, oldest first, if there are that many.
    pub fn last_three(&self) -> Option<[Choice; 3]> {
        let n = self.entries.len();
        if n < 3 {
            return None;
        }
        Some([self.entries[n - 3], self.entries[n - 2], self.entries[n - 1]])
    }

    /// How often each throw appears, indexed like [`Choice::ALL`].
    pub fn counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for choice in &self.entries {
            counts[*choice as usize] += 1;
        }
        counts
    }

    /// The player's favourite throw.
    ///
    /// Ties go to the earlier throw in Rock, Paper, Scissors order.
    pub fn most_frequent(&self) -> Option<Choice> {
        if self.is_empty() {
            return None;
        }
        let counts = self.counts();
        let mut best = 0;
        for i in 1..counts.len() {
            if counts[i] > counts[best] {
                best = i;
            }
        }
        Some(Choice::ALL[best])
    }
}

impl FromIterator<Choice> for ChoiceHistory {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        let mut history = Self::new();
        for choice in iter {
            history.push(choice);
        }
        history
    }
}

impl From<Vec<Choice>> for ChoiceHistory {
    fn from(choices: Vec<Choice>) -> Self {
        choices.into_iter().collect()
    }
}

impl From<ChoiceHistory> for Vec<Choice> {
    fn from(history: ChoiceHistory) -> Self {
        history.entries.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;

    #[test]
    fn test_never_exceeds_limit() {
        let mut history = ChoiceHistory::new();
        for i in 0..25 {
            history.push(Choice::ALL[i % 3]);
            assert!(history.len() <= HISTORY_LIMIT);
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_deserialize_keeps_only_newest() {
        let json = format!(
            "[{}\"paper\",\"scissors\"]",
            "\"rock\",".repeat(HISTORY_LIMIT)
        );
        let history: ChoiceHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.counts(), [HISTORY_LIMIT - 2, 1, 1]);
        assert_eq!(
            serde_json::to_string(&history).unwrap(),
            format!("[{}\"paper\",\"scissors\"]", "\"rock\",".repeat(HISTORY_LIMIT - 2))
        );
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut history: ChoiceHistory = std::iter::repeat_n(Rock, HISTORY_LIMIT).collect();
        history.push(Paper);
        assert_eq!(history.counts(), [HISTORY_LIMIT - 1, 1, 0]);
        assert_eq!(history.iter().last(), Some(Paper));
    }

    #[test]
    fn test_last_three() {
        let history: ChoiceHistory = [Rock, Paper].into_iter().collect();
        assert_eq!(history.last_three(), None);
        let history: ChoiceHistory = [Scissors, Rock, Paper, Rock].into_iter().collect();
        assert_eq!(history.last_three(), Some([Rock, Paper, Rock]));
    }

    #[test]
    fn test_most_frequent_tie_break() {
        assert_eq!(ChoiceHistory::new().most_frequent(), None);
        let history: ChoiceHistory = [Scissors, Paper].into_iter().collect();
        assert_eq!(history.most_frequent(), Some(Paper));
        let history: ChoiceHistory = [Scissors, Paper, Rock].into_iter().collect();
        assert_eq!(history.most_frequent(), Some(Rock));
        let history: ChoiceHistory = [Scissors, Scissors, Paper, Rock].into_iter().collect();
        assert_eq!(history.most_frequent(), Some(Scissors));
    }
}
