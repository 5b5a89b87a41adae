use std::collections::HashMap;

use crate::tournament::{ids::PlayerId, labels::NodeLabel, paths::PathView};

/// Per-player win counts for one complete outcome sequence.
/// Slot `i` belongs to player `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreTally(Vec<u32>);

impl ScoreTally {
    /// A tally with no wins for `player_count` players.
    pub fn zeros(player_count: usize) -> Self {
        ScoreTally(vec![0; player_count])
    }

    pub fn wins(&self) -> &[u32] {
        &self.0
    }

    pub fn wins_of(&self, player: PlayerId) -> Option<u32> {
        self.0.get(player.slot()?).copied()
    }

    /// Total games credited across all players.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn player_count(&self) -> usize {
        self.0.len()
    }

    fn credit(&mut self, player: PlayerId) {
        if let Some(wins) = player.slot().and_then(|slot| self.0.get_mut(slot)) {
            *wins += 1;
        }
    }
}

impl From<Vec<u32>> for ScoreTally {
    fn from(value: Vec<u32>) -> Self {
        ScoreTally(value)
    }
}

/// Product of the per-step probabilities. An empty path has probability 1.
pub fn cumulative_probability(probabilities: &[f64]) -> f64 {
    probabilities.iter().product()
}

/// Count the wins credited by every non-root label of a path.
/// Winners outside `1..=player_count` (the bye) are not counted.
pub fn score_tally(labels: &[NodeLabel], player_count: usize) -> ScoreTally {
    let mut tally = ScoreTally::zeros(player_count);
    for winner in labels.iter().filter_map(NodeLabel::winner) {
        tally.credit(winner);
    }
    tally
}

#[derive(Debug, Clone, PartialEq)]
/// A distinct tally and the summed probability of every path that produced it.
pub struct DistributionEntry {
    pub tally: ScoreTally,
    pub probability: f64,
}

/// Merges paths with identical tallies by summing their probabilities.
/// Distinct tallies keep the order in which they were first seen.
#[derive(Debug, Clone)]
pub struct Aggregator {
    player_count: usize,
    entries: Vec<DistributionEntry>,
    tally_to_entry: HashMap<ScoreTally, usize>,
    raw_path_count: usize,
}

impl Aggregator {
    pub fn new(player_count: usize) -> Self {
        Aggregator {
            player_count,
            entries: Vec::new(),
            tally_to_entry: HashMap::new(),
            raw_path_count: 0,
        }
    }

    /// Fold one enumerated path into the distribution.
    pub fn record(&mut self, path: PathView<'_>) {
        let probability = cumulative_probability(path.probabilities);
        let tally = score_tally(path.labels, self.player_count);
        self.add(tally, probability);
    }

    /// Add `probability` to the running sum for `tally`, inserting it if unseen.
    pub fn add(&mut self, tally: ScoreTally, probability: f64) {
        self.raw_path_count += 1;

        if let Some(idx) = self.tally_to_entry.get(&tally) {
            self.entries[*idx].probability += probability;
            return;
        }

        self.tally_to_entry.insert(tally.clone(), self.entries.len());
        self.entries.push(DistributionEntry { tally, probability });
    }

    pub fn raw_path_count(&self) -> usize {
        self.raw_path_count
    }

    pub fn finish(self) -> OutcomeDistribution {
        OutcomeDistribution {
            player_count: self.player_count,
            entries: self.entries,
            tally_to_entry: self.tally_to_entry,
            raw_path_count: self.raw_path_count,
        }
    }
}

/// Probability of every distinct final tally of the tournament.
#[derive(Debug, Clone)]
pub struct OutcomeDistribution {
    player_count: usize,
    entries: Vec<DistributionEntry>,
    tally_to_entry: HashMap<ScoreTally, usize>,
    raw_path_count: usize,
}

impl OutcomeDistribution {
    /// Distinct tallies in first-seen order.
    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// How many enumerated paths were folded in.
    pub fn raw_path_count(&self) -> usize {
        self.raw_path_count
    }

    /// Summed probability of all tallies. Should be 1 up to rounding.
    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|entry| entry.probability).sum()
    }

    pub fn probability_of(&self, tally: &ScoreTally) -> Option<f64> {
        self.tally_to_entry
            .get(tally)
            .map(|idx| self.entries[*idx].probability)
    }

    /// Entries ordered from most to least likely.
    pub fn sorted_by_probability(&self) -> Vec<&DistributionEntry> {
        let mut sorted: Vec<&DistributionEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        sorted
    }

    /// Expected number of wins per player slot.
    pub fn expected_wins(&self) -> Vec<f64> {
        let mut expected = vec![0.0; self.player_count];
        for entry in &self.entries {
            for (slot_total, wins) in expected.iter_mut().zip(entry.tally.wins()) {
                *slot_total += entry.probability * f64::from(*wins);
            }
        }
        expected
    }
}
