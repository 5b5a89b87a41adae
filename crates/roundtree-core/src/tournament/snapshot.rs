use serde::Serialize;

use crate::tournament::{aggregate::OutcomeDistribution, simulation::SimulationReport};

#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    pub schema_version: u32,
    pub player_count: usize,
    pub rounds: Vec<Vec<String>>,
    pub node_count: usize,
    pub leaf_count: usize,
    pub distribution: DistributionSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionSnapshot {
    pub raw_path_count: usize,
    pub distinct_tallies: usize,
    pub total_probability: f64,
    pub expected_wins: Vec<f64>,
    pub tallies: Vec<TallySnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TallySnapshot {
    pub wins: Vec<u32>,
    pub probability: f64,
}

impl ReportSnapshot {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl OutcomeDistribution {
    /// Serializable view with tallies ordered from most to least likely.
    pub fn snapshot(&self) -> DistributionSnapshot {
        DistributionSnapshot {
            raw_path_count: self.raw_path_count(),
            distinct_tallies: self.len(),
            total_probability: self.total_probability(),
            expected_wins: self.expected_wins(),
            tallies: self
                .sorted_by_probability()
                .into_iter()
                .map(|entry| TallySnapshot {
                    wins: entry.tally.wins().to_vec(),
                    probability: entry.probability,
                })
                .collect(),
        }
    }
}

impl SimulationReport {
    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot {
            schema_version: 1,
            player_count: self.schedule.player_count(),
            rounds: self
                .schedule
                .rounds()
                .iter()
                .map(|round| round.iter().map(ToString::to_string).collect())
                .collect(),
            node_count: self.node_count,
            leaf_count: self.leaf_count,
            distribution: self.distribution.snapshot(),
        }
    }
}
