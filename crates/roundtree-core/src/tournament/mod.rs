pub mod aggregate;
mod arena;
pub mod error;
pub mod ids;
pub mod labels;
pub mod node;
pub mod outcome_tree;
pub mod paths;
pub mod player;
pub mod probability;
pub mod schedule;
pub mod simulation;
pub mod snapshot;

#[cfg(test)]
mod tests;
