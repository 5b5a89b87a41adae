use std::fmt;

/// A wraper for an integer index used to index nodes in the outcome tree arena
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the value of the actual node without having to access and risk overiding the internal value
    pub fn index(&self) -> usize {
        self.0
    }

    /// Left child in level-order array layout.
    pub fn left(&self) -> NodeId {
        NodeId(2 * self.0 + 1)
    }

    /// Right child in level-order array layout.
    pub fn right(&self) -> NodeId {
        NodeId(2 * self.0 + 2)
    }
}

impl From<usize> for NodeId {
    /// Allow for explicit conversion from usize to NodeId
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

/// 1-based player identifier as it appears in match labels.
/// Identifier 0 is reserved for the synthetic bye seat.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    /// The synthetic participant added to odd-sized tournaments.
    pub const BYE: PlayerId = PlayerId(0);

    /// Return the raw identifier.
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_bye(&self) -> bool {
        *self == Self::BYE
    }

    /// Zero-based slot into player-indexed storage, `None` for the bye.
    pub fn slot(&self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// Identifier for the player stored at a zero-based slot.
    pub fn from_slot(slot: usize) -> PlayerId {
        PlayerId(slot as u32 + 1)
    }
}

impl From<u32> for PlayerId {
    fn from(value: u32) -> Self {
        PlayerId(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
