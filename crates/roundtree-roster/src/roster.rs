use std::collections::HashMap;

use roundtree_core::{
    Player, PlayerId, SimulationConfig, SimulationError, SimulationReport, simulate,
};

use crate::{RosterError, RosterSpec};

#[derive(Debug, Clone)]
/// Validated player registry with name lookups, ready to simulate.
pub struct Roster {
    size: usize,
    players: Vec<Player>,
    name_to_id: HashMap<String, PlayerId>,
}

impl Roster {
    /// Validate a spec and resolve player ids.
    pub(crate) fn from_spec(spec: &RosterSpec) -> Result<Self, RosterError> {
        spec.validate()?;

        let players: Vec<Player> = spec
            .players
            .iter()
            .map(|p| Player::new(p.name.clone(), p.rating))
            .collect();
        let name_to_id = players
            .iter()
            .enumerate()
            .map(|(slot, p)| (p.name.clone(), PlayerId::from_slot(slot)))
            .collect();

        log::debug!(
            "compiled roster: {} players for a tournament of {}",
            players.len(),
            spec.size()
        );

        Ok(Self {
            size: spec.size(),
            players,
            name_to_id,
        })
    }

    /// Configured tournament size.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by the id used in match labels.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.slot()?)
    }

    /// Convert a player id back to its name.
    pub fn name_of(&self, id: PlayerId) -> Option<&str> {
        self.player(id).map(|p| p.name.as_str())
    }

    /// Convert a player name into the id used in match labels.
    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.name_to_id.get(name).copied()
    }

    /// Run the full outcome enumeration for this roster.
    pub fn simulate(&self, config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
        simulate(&self.players, self.size, config)
    }
}
