use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tournament::{
    aggregate::{Aggregator, OutcomeDistribution},
    error::{SimulationError, TreeError},
    outcome_tree::{OutcomeTree, round_robin_node_count},
    paths::for_each_path,
    player::Player,
    probability::EloModel,
    schedule::Schedule,
};

const DEFAULT_SIMULATION_CONFIG_YAML: &str = include_str!("../../config/simulation.default.yaml");

/// Resource and tolerance settings for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Largest outcome tree the run may allocate.
    pub max_nodes: usize,
    /// Allowed distance of the total distribution probability from 1.
    pub probability_tolerance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            max_nodes: 1 << 22,
            probability_tolerance: 1e-9,
        }
    }
}

impl SimulationConfig {
    /// Parse a simulation config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SimulationConfigError> {
        let config: SimulationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a simulation config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SimulationConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SIMULATION_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SimulationConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    fn validate(&self) -> Result<(), SimulationConfigError> {
        if self.max_nodes == 0 {
            return Err(SimulationConfigError::Invalid(
                "max_nodes must be greater than 0".to_string(),
            ));
        }
        if !self.probability_tolerance.is_finite() || self.probability_tolerance <= 0.0 {
            return Err(SimulationConfigError::Invalid(
                "probability_tolerance must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for loading and validating `SimulationConfig`.
#[derive(Debug, Error)]
pub enum SimulationConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid simulation config: {0}")]
    Invalid(String),
}

/// Progress emitted after each pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationEvent {
    ScheduleGenerated {
        rounds: usize,
        matches: usize,
        playable_matches: usize,
    },
    TreeBuilt {
        nodes: usize,
        leaves: usize,
    },
    Aggregated {
        paths: usize,
        distinct_tallies: usize,
        total_probability: f64,
    },
}

/// Everything a reporting layer needs from one run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub schedule: Schedule,
    pub node_count: usize,
    pub leaf_count: usize,
    pub distribution: OutcomeDistribution,
}

impl SimulationReport {
    /// Number of enumerated root-to-leaf paths.
    pub fn raw_path_count(&self) -> usize {
        self.distribution.raw_path_count()
    }

    pub fn distinct_tally_count(&self) -> usize {
        self.distribution.len()
    }
}

/// Run the whole pipeline for `players` in a tournament of `size`.
pub fn simulate(
    players: &[Player],
    size: usize,
    config: &SimulationConfig,
) -> Result<SimulationReport, SimulationError> {
    simulate_with_hook(players, size, config, |_| {})
}

/// Run the pipeline and invoke a callback after each stage.
pub fn simulate_with_hook<FHook>(
    players: &[Player],
    size: usize,
    config: &SimulationConfig,
    mut on_event: FHook,
) -> Result<SimulationReport, SimulationError>
where
    FHook: FnMut(&SimulationEvent),
{
    if players.len() != size {
        return Err(SimulationError::PlayerCountMismatch {
            expected: size,
            actual: players.len(),
        });
    }
    if let Some((idx, player)) = players
        .iter()
        .enumerate()
        .find(|(_, player)| !player.rating.is_finite())
    {
        return Err(SimulationError::InvalidRating {
            player: idx + 1,
            name: player.name.clone(),
            rating: player.rating,
        });
    }

    // Reject oversized fields before the quadratic schedule is allocated
    if round_robin_node_count(size).is_none_or(|nodes| nodes > config.max_nodes) {
        return Err(TreeError::TooLarge {
            matches: size.saturating_mul(size.saturating_sub(1)) / 2,
            max_nodes: config.max_nodes,
        }
        .into());
    }

    log::info!("simulating round-robin for {size} players");

    let schedule = Schedule::round_robin(size)?;
    let playable = schedule.playable();
    on_event(&SimulationEvent::ScheduleGenerated {
        rounds: schedule.round_count(),
        matches: schedule.rounds().iter().map(Vec::len).sum(),
        playable_matches: playable.len(),
    });

    let tree = OutcomeTree::build(&playable, config.max_nodes)?;
    on_event(&SimulationEvent::TreeBuilt {
        nodes: tree.node_count(),
        leaves: tree.leaf_count(),
    });

    let model = EloModel::from_players(players);
    let mut aggregator = Aggregator::new(size);
    let paths = for_each_path(&tree, &model, |path| aggregator.record(path))?;
    let distribution = aggregator.finish();

    let total_probability = distribution.total_probability();
    on_event(&SimulationEvent::Aggregated {
        paths,
        distinct_tallies: distribution.len(),
        total_probability,
    });

    if (total_probability - 1.0).abs() > config.probability_tolerance {
        log::warn!(
            "distribution mass {total_probability} drifted beyond tolerance {}",
            config.probability_tolerance
        );
    }
    log::info!(
        "enumerated {paths} paths into {} distinct tallies",
        distribution.len()
    );

    Ok(SimulationReport {
        schedule,
        node_count: tree.node_count(),
        leaf_count: tree.leaf_count(),
        distribution,
    })
}

/// A tournament of fixed size that players are registered into before simulating.
#[derive(Debug, Clone)]
pub struct Tournament {
    size: usize,
    players: Vec<Player>,
}

impl Tournament {
    pub fn new(size: usize) -> Self {
        Tournament {
            size,
            players: Vec::with_capacity(size),
        }
    }

    pub fn add_player(&mut self, player: Player) -> &mut Self {
        self.players.push(player);
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn simulate(&self, config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
        simulate(&self.players, self.size, config)
    }
}
