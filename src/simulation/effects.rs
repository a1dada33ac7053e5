//! Effect log entries produced by a shock

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{Population, Species};

/// One step of a simulation, in the order it was applied
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// The target had nothing left to lose
    AlreadyExtinct { species: Species },

    // Direct shock
    Removed { species: Species, before: Population },
    Increased { species: Species, before: Population, after: Population },
    Decreased { species: Species, before: Population, after: Population },

    // Propagation
    PredatorScarcity { prey: Species, predator: Species, amount: Population },
    PreyRelease { predator: Species, prey: Species, amount: Population },
}

impl Effect {
    /// The species whose population this entry changed
    pub fn affected(&self) -> &Species {
        match self {
            Effect::AlreadyExtinct { species }
            | Effect::Removed { species, .. }
            | Effect::Increased { species, .. }
            | Effect::Decreased { species, .. } => species,
            Effect::PredatorScarcity { predator, .. } => predator,
            Effect::PreyRelease { prey, .. } => prey,
        }
    }

    pub fn is_propagated(&self) -> bool {
        matches!(self, Effect::PredatorScarcity { .. } | Effect::PreyRelease { .. })
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::AlreadyExtinct { species } => {
                write!(f, "{} is already extinct, no effect", species)
            }
            Effect::Removed { species, before } => {
                write!(f, "{} removed! (population: {} -> 0)", species, before)
            }
            Effect::Increased { species, before, after } => {
                write!(f, "{} increased! ({} -> {})", species, before, after)
            }
            Effect::Decreased { species, before, after } => {
                write!(f, "{} decreased! ({} -> {})", species, before, after)
            }
            Effect::PredatorScarcity { prey, predator, amount } => {
                write!(f, "{} scarcity reduced {} by {}", prey, predator, amount)
            }
            Effect::PreyRelease { predator, prey, amount } => {
                write!(f, "{} predator loss increased {} by {}", predator, prey, amount)
            }
        }
    }
}
