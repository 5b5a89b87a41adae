mod tournament;

pub use tournament::aggregate::{
    Aggregator, DistributionEntry, OutcomeDistribution, ScoreTally, cumulative_probability,
    score_tally,
};
pub use tournament::error::{LabelError, ScheduleError, SimulationError, TreeError};
pub use tournament::ids::{NodeId, PlayerId};
pub use tournament::labels::{MatchLabel, NodeLabel};
pub use tournament::node::Node;
pub use tournament::outcome_tree::{OutcomeTree, planned_node_count, round_robin_node_count};
pub use tournament::paths::{
    OutcomePath, PathView, collect_paths, for_each_path, try_for_each_path,
};
pub use tournament::player::{DEFAULT_RATING, Player};
pub use tournament::probability::{ELO_SCALE, EloModel, WinModel, right_win_probability};
pub use tournament::schedule::Schedule;
pub use tournament::simulation::{
    SimulationConfig, SimulationConfigError, SimulationEvent, SimulationReport, Tournament,
    simulate, simulate_with_hook,
};
pub use tournament::snapshot::{DistributionSnapshot, ReportSnapshot, TallySnapshot};
