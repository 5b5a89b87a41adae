use std::collections::HashSet;

use roundtree_core::DEFAULT_RATING;
use serde::{Deserialize, Serialize};

use crate::{Roster, RosterError};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable roster schema used for YAML IO and validation.
pub struct RosterSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Configured tournament size. Defaults to the number of listed players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Players in seating order; the first entry plays as `1`.
    pub players: Vec<PlayerSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A single player declaration in the roster schema.
pub struct PlayerSpec {
    pub name: String,
    /// Elo rating (defaults to 1500 if omitted).
    #[serde(default = "default_rating")]
    pub rating: f64,
}

fn default_rating() -> f64 {
    DEFAULT_RATING
}

impl RosterSpec {
    /// Tournament size the roster asks for.
    pub fn size(&self) -> usize {
        self.size.unwrap_or(self.players.len())
    }

    /// Validate names, ratings, and the configured size.
    ///
    /// A size that differs from the player count is not an error here, the
    /// simulation reports that mismatch itself.
    pub fn validate(&self) -> Result<(), RosterError> {
        let size = self.size();
        if size < 2 {
            return Err(RosterError::InvalidSize { size });
        }

        let mut names = HashSet::with_capacity(self.players.len());
        for (index, player) in self.players.iter().enumerate() {
            if player.name.trim().is_empty() {
                return Err(RosterError::EmptyName { index: index + 1 });
            }

            if !names.insert(player.name.as_str()) {
                return Err(RosterError::DuplicateName {
                    name: player.name.clone(),
                });
            }

            if !player.rating.is_finite() {
                return Err(RosterError::InvalidRating {
                    name: player.name.clone(),
                    value: player.rating,
                });
            }
        }

        Ok(())
    }

    /// Compile this spec into the runtime representation.
    pub fn compile(&self) -> Result<Roster, RosterError> {
        Roster::from_spec(self)
    }
}
