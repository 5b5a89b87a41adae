use crate::tournament::{error::ScheduleError, ids::PlayerId, labels::MatchLabel};

/// Round-robin pairings produced by the circle method.
/// Rounds are kept in production order; flattening them gives the canonical match order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    player_count: usize,
    rounds: Vec<Vec<MatchLabel>>,
}

impl Schedule {
    /// Generate the schedule for `player_count` players.
    ///
    /// Odd fields get an extra bye seat (identifier 0). Row A holds the first half of the
    /// seats, row B the second half reversed. After every round B's head moves into A's
    /// second seat and A's tail moves to the end of B, so A's first seat never moves.
    pub fn round_robin(player_count: usize) -> Result<Self, ScheduleError> {
        if player_count < 2 {
            return Err(ScheduleError::TooFewPlayers { player_count });
        }

        let mut seats: Vec<PlayerId> = (0..player_count).map(PlayerId::from_slot).collect();
        if seats.len() % 2 == 1 {
            seats.push(PlayerId::BYE);
        }

        let games = seats.len() / 2;
        let round_count = seats.len() - 1;

        let mut row_b = seats.split_off(games);
        row_b.reverse();
        let mut row_a = seats;

        let mut rounds = Vec::with_capacity(round_count);
        for _ in 0..round_count {
            let round = row_a
                .iter()
                .zip(row_b.iter())
                .map(|(first, second)| MatchLabel::new(*first, *second))
                .collect();
            rounds.push(round);

            // Circle method rotation
            row_a.insert(1, row_b.remove(0));
            if let Some(last) = row_a.pop() {
                row_b.push(last);
            }
        }

        Ok(Schedule {
            player_count,
            rounds,
        })
    }

    /// Number of real players, not counting the bye seat.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Whether a bye seat was added to even out the field.
    pub fn has_bye(&self) -> bool {
        self.player_count % 2 == 1
    }

    pub fn rounds(&self) -> &[Vec<MatchLabel>] {
        &self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn games_per_round(&self) -> usize {
        self.rounds.first().map(Vec::len).unwrap_or(0)
    }

    /// All games in canonical order: round-major, then game index within the round.
    pub fn flattened(&self) -> Vec<MatchLabel> {
        self.rounds.iter().flatten().copied().collect()
    }

    /// Canonical order with bye games removed. These are the games that get decided.
    pub fn playable(&self) -> Vec<MatchLabel> {
        self.rounds
            .iter()
            .flatten()
            .filter(|game| !game.involves_bye())
            .copied()
            .collect()
    }
}
