use crate::{PlayerSpec, Roster, RosterError, RosterSpec};

#[derive(Debug, Clone, Default)]
/// Struct to build rosters in code
pub struct RosterBuilder {
    size: Option<usize>,
    players: Vec<PlayerSpec>,
}

impl RosterBuilder {
    /// Create a new RosterBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the tournament size instead of deriving it from the players added
    pub fn set_size(&mut self, size: usize) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Add a new player in the next seat
    pub fn add_player(&mut self, name: impl Into<String>, rating: f64) -> &mut Self {
        self.players.push(PlayerSpec {
            name: name.into(),
            rating,
        });
        self
    }

    pub fn build_spec(self) -> Result<RosterSpec, RosterError> {
        let spec = RosterSpec {
            version: Some(1),
            size: self.size,
            players: self.players,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn compile(self) -> Result<Roster, RosterError> {
        let spec = self.build_spec()?;
        spec.compile()
    }
}
