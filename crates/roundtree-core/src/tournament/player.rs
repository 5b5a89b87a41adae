use serde::{Deserialize, Serialize};

/// Default starting rating for players without history
pub const DEFAULT_RATING: f64 = 1500.0;

/// A registered participant. Players are addressed by position: the first player is `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rating: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Player {
            name: name.into(),
            rating,
        }
    }
}
