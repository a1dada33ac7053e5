use thiserror::Error;

use crate::core::types::Species;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Species not in food web: {0}")]
    InvalidTarget(Species),

    #[error("Removal factor must be in (0, 1], got {0}")]
    InvalidRemovalFactor(f64),

    #[error("Change percent must be in [-100, 100], got {0}")]
    InvalidPercent(i32),

    #[error("Not a shock: '{0}' (use 'remove' or a percent)")]
    InvalidShock(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Species already added: {0}")]
    DuplicateSpecies(Species),

    #[error("At least two species are needed to draw an arrow")]
    TooFewSpecies,

    #[error("A species cannot eat itself: {0}")]
    SelfLoop(Species),

    #[error("Link already exists: {prey} -> {predator}")]
    DuplicateEdge { prey: Species, predator: Species },

    #[error("Edge references a species outside the web: {prey} -> {predator}")]
    DanglingEdge { prey: Species, predator: Species },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Preset parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LabError>;
