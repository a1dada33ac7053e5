//! Food Web Lab - build a food web, shock a species, watch one hop of fallout

pub mod assessment;
pub mod catalog;
pub mod core;
pub mod ecosystem;
pub mod render;
pub mod session;
pub mod simulation;
pub mod web;

pub use crate::core::error::{LabError, Result};
pub use crate::core::types::Species;
pub use crate::simulation::{simulate, ShockPropagator, ShockSpec, SimulationResult};
pub use crate::web::{FoodWebGraph, PopulationMap};
