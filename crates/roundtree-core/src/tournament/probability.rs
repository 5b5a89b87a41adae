//! Elo win probabilities attached to outcome tree nodes.
//!
//! Probabilities are path independent: a node's value depends only on the two players in
//! its own label, never on which branches led to it.

use crate::tournament::{ids::PlayerId, labels::NodeLabel, player::Player};

/// Rating difference at which the stronger player is ten times as likely to win
pub const ELO_SCALE: f64 = 400.0;

/// Probability that the right-hand player of a game wins.
pub fn right_win_probability(left_rating: f64, right_rating: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((left_rating - right_rating) / ELO_SCALE))
}

/// Assigns every tree node the probability of its declared outcome.
pub trait WinModel {
    /// Probability of reaching `label` from its parent.
    fn probability(&self, label: &NodeLabel) -> f64;
}

/// Logistic rating model over player ratings addressed by `PlayerId`.
#[derive(Debug, Clone)]
pub struct EloModel {
    ratings: Vec<f64>,
}

impl EloModel {
    pub fn new(ratings: Vec<f64>) -> Self {
        EloModel { ratings }
    }

    pub fn from_players(players: &[Player]) -> Self {
        Self::new(players.iter().map(|p| p.rating).collect())
    }

    /// Rating of a player, `None` for the bye or an unknown id.
    pub fn rating(&self, player: PlayerId) -> Option<f64> {
        self.ratings.get(player.slot()?).copied()
    }
}

impl WinModel for EloModel {
    fn probability(&self, label: &NodeLabel) -> f64 {
        let NodeLabel::Outcome { game, winner } = label else {
            return 1.0;
        };

        let (Some(left), Some(right)) = (self.rating(game.first()), self.rating(game.second()))
        else {
            return 0.0;
        };

        let right_wins = right_win_probability(left, right);
        if *winner == game.first() {
            1.0 - right_wins
        } else if *winner == game.second() {
            right_wins
        } else {
            // Label credits someone outside the game
            0.0
        }
    }
}
