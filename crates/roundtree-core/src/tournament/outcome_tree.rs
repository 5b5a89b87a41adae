use std::collections::HashMap;

use crate::tournament::{
    arena::Arena,
    error::TreeError,
    ids::NodeId,
    labels::{MatchLabel, NodeLabel},
    node::Node,
};

/// Number of nodes the builder allocates for `matches`, `None` on `usize` overflow.
///
/// Every game contributes `2 * 2^p` nodes where `p` is the position of the game's
/// first occurrence in the list, plus one node for the root.
pub fn planned_node_count(matches: &[MatchLabel]) -> Option<usize> {
    position_indices(matches)
        .into_iter()
        .try_fold(1usize, |total, position| {
            let exponent = u32::try_from(position).ok()?.checked_add(1)?;
            total.checked_add(2usize.checked_pow(exponent)?)
        })
}

/// Node count of the outcome tree for a full round-robin between `player_count` players,
/// `None` on `usize` overflow. Needs no schedule: every pairing plays once.
pub fn round_robin_node_count(player_count: usize) -> Option<usize> {
    let games = player_count.checked_mul(player_count.saturating_sub(1))? / 2;
    let exponent = u32::try_from(games).ok()?.checked_add(1)?;
    2usize.checked_pow(exponent)?.checked_sub(1)
}

/// Position of each game's first occurrence. Repeated labels share that index.
fn position_indices(matches: &[MatchLabel]) -> Vec<usize> {
    let mut first_seen: HashMap<MatchLabel, usize> = HashMap::with_capacity(matches.len());
    matches
        .iter()
        .enumerate()
        .map(|(position, game)| *first_seen.entry(*game).or_insert(position))
        .collect()
}

/// Level-order depth of the node stored at `index`.
fn depth_at(index: usize) -> u32 {
    usize::BITS - 1 - (index + 1).leading_zeros()
}

#[derive(Debug, Clone)]
/// owns the arena (root is always at index 0)
/// node `i` has children at `2i+1` and `2i+2` whenever those fall inside the arena
pub struct OutcomeTree {
    arena: Arena<Node>,
    match_count: usize,
}

impl OutcomeTree {
    /// Expand a match list into the complete binary tree of declared winners.
    ///
    /// Fails with `TreeError::TooLarge` before allocating anything when the node array
    /// would exceed `max_nodes`.
    pub fn build(matches: &[MatchLabel], max_nodes: usize) -> Result<Self, TreeError> {
        let too_large = TreeError::TooLarge {
            matches: matches.len(),
            max_nodes,
        };
        let node_count = planned_node_count(matches).ok_or_else(|| too_large.clone())?;
        if node_count > max_nodes {
            return Err(too_large);
        }

        let mut arena = Arena::with_capacity(node_count);
        arena.allocate(Node::new(NodeLabel::Start, 0));

        for (game, position) in matches.iter().zip(position_indices(matches)) {
            for _ in 0..(1usize << position) {
                for winner in [game.first(), game.second()] {
                    let depth = depth_at(arena.len());
                    arena.allocate(Node::new(game.won_by(winner), depth));
                }
            }
        }

        log::debug!(
            "built outcome tree: {} matches, {} nodes",
            matches.len(),
            arena.len()
        );

        Ok(OutcomeTree {
            arena,
            match_count: matches.len(),
        })
    }

    /// Return the root node id.
    pub fn root_id(&self) -> NodeId {
        NodeId::from(0)
    }

    /// Return how many nodes exist in the tree arena.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Return how many games were expanded into the tree.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        let n = self.arena.len();
        n - n / 2
    }

    /// Return an immutable node handle.
    pub fn node(&self, node_id: NodeId) -> Result<&Node, TreeError> {
        self.arena
            .get(node_id)
            .ok_or(TreeError::MissingNode { node_id })
    }

    pub fn label(&self, node_id: NodeId) -> Result<&NodeLabel, TreeError> {
        self.node(node_id).map(Node::label)
    }

    pub fn depth_of(&self, node_id: NodeId) -> Result<u32, TreeError> {
        self.node(node_id).map(Node::depth)
    }

    /// Children of a node that exist in the arena, left first.
    pub fn children(&self, node_id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let left = node_id.left();
        let right = node_id.right();
        (
            self.arena.contains(left).then_some(left),
            self.arena.contains(right).then_some(right),
        )
    }

    pub fn is_leaf(&self, node_id: NodeId) -> bool {
        !self.arena.contains(node_id.left())
    }

    /// Labels in arena order, root first.
    pub fn labels(&self) -> impl Iterator<Item = &NodeLabel> {
        self.arena.iter().map(Node::label)
    }
}
