use std::{fmt, str::FromStr};

use crate::tournament::{error::LabelError, ids::PlayerId};

const MATCH_SEPARATOR: char = 'v';
const WINNER_SEPARATOR: &str = "_W";
const ROOT_LABEL: &str = "start";

/// One scheduled game between two seats, rendered as `"3v5"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MatchLabel {
    first: PlayerId,
    second: PlayerId,
}

impl MatchLabel {
    pub fn new(first: PlayerId, second: PlayerId) -> Self {
        MatchLabel { first, second }
    }

    /// The player seated on the left of the label.
    pub fn first(&self) -> PlayerId {
        self.first
    }

    /// The player seated on the right of the label.
    pub fn second(&self) -> PlayerId {
        self.second
    }

    /// Whether this game pairs a real player with the synthetic bye.
    pub fn involves_bye(&self) -> bool {
        self.first.is_bye() || self.second.is_bye()
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.first == player || self.second == player
    }

    /// Seat-order independent key for the pairing.
    pub fn pairing(&self) -> (PlayerId, PlayerId) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    /// Label crediting `winner` with this game.
    pub fn won_by(self, winner: PlayerId) -> NodeLabel {
        NodeLabel::Outcome {
            game: self,
            winner,
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, MATCH_SEPARATOR, self.second)
    }
}

impl FromStr for MatchLabel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .split_once(MATCH_SEPARATOR)
            .ok_or_else(|| LabelError::MissingSeparator {
                label: s.to_string(),
            })?;
        Ok(MatchLabel {
            first: parse_player(s, first)?,
            second: parse_player(s, second)?,
        })
    }
}

/// Label of a single outcome-tree node.
/// Either the root sentinel or a game annotated with its declared winner (`"3v5_W3"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    Start,
    Outcome { game: MatchLabel, winner: PlayerId },
}

impl NodeLabel {
    /// The player credited on this branch, `None` for the root.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            NodeLabel::Start => None,
            NodeLabel::Outcome { winner, .. } => Some(*winner),
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Start => f.write_str(ROOT_LABEL),
            NodeLabel::Outcome { game, winner } => {
                write!(f, "{game}{WINNER_SEPARATOR}{winner}")
            }
        }
    }
}

impl FromStr for NodeLabel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ROOT_LABEL {
            return Ok(NodeLabel::Start);
        }

        let (game, winner) = s
            .split_once(WINNER_SEPARATOR)
            .ok_or_else(|| LabelError::MissingWinner {
                label: s.to_string(),
            })?;

        Ok(NodeLabel::Outcome {
            game: game.parse()?,
            winner: parse_player(s, winner)?,
        })
    }
}

fn parse_player(label: &str, raw: &str) -> Result<PlayerId, LabelError> {
    raw.parse::<u32>()
        .map(PlayerId::from)
        .map_err(|_| LabelError::InvalidPlayer {
            label: label.to_string(),
            value: raw.to_string(),
        })
}
