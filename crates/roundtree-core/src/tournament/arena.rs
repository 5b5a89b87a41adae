use std::slice::Iter;

use crate::tournament::ids::NodeId;

/// Holds all tree nodes in level order. Allows for fast allocation and is cache friendly.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    storage: Vec<T>,
}

impl<T> Arena<T> {
    /// Create a new empty storage with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a new item to the storage and return the associated NodeId
    pub fn allocate(&mut self, item: T) -> NodeId {
        let id = NodeId::from(self.storage.len());
        self.storage.push(item);
        id
    }

    /// Retrieve an associated item from the Arena
    pub fn get(&self, node_id: NodeId) -> Option<&T> {
        self.storage.get(node_id.index())
    }

    /// Check whether an id is inside the arena bounds
    pub fn contains(&self, node_id: NodeId) -> bool {
        node_id.index() < self.storage.len()
    }

    /// Check the length of the Arena
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Iteration helper for the Arena
    pub fn iter(&self) -> Iter<'_, T> {
        self.storage.iter()
    }
}
