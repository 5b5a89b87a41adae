use thiserror::Error;

use crate::tournament::ids::NodeId;

/// Error type for parsing textual match and node labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label '{label}' has no 'v' between the two players")]
    MissingSeparator { label: String },

    #[error("label '{label}' has no '_W' winner suffix")]
    MissingWinner { label: String },

    #[error("label '{label}' contains invalid player identifier '{value}'")]
    InvalidPlayer { label: String, value: String },
}

/// Error type for round-robin schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("a round-robin needs at least 2 players, got {player_count}")]
    TooFewPlayers { player_count: usize },
}

/// Error type for outcome tree construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Attempted to access a node id that does not exist in the arena.
    #[error("missing node with id {}", .node_id.index())]
    MissingNode { node_id: NodeId },

    /// The node array for this many matches would exceed the configured ceiling.
    #[error("tournament too large: {matches} matches need more than {max_nodes} tree nodes")]
    TooLarge { matches: usize, max_nodes: usize },
}

/// Error type for a complete simulation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("wrong number of players: tournament size is {expected}, players added: {actual}")]
    PlayerCountMismatch { expected: usize, actual: usize },

    #[error("player {player} ('{name}') has non-finite rating {rating}")]
    InvalidRating {
        player: usize,
        name: String,
        rating: f64,
    },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}
