use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for roster loading, validation, compilation, and builder operations.
pub enum RosterError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("player {index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate player name '{name}'")]
    DuplicateName { name: String },

    #[error("invalid rating for player '{name}': {value}")]
    InvalidRating { name: String, value: f64 },

    #[error("tournament size must be at least 2, got {size}")]
    InvalidSize { size: usize },
}
