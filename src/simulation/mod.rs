//! Shock simulation
//!
//! Single-shot, single-hop: one species is perturbed and the change reaches
//! its direct predators and direct prey only.

pub mod effects;
pub mod propagate;
pub mod shock;

pub use effects::Effect;
pub use propagate::{simulate, ShockPropagator, SimulationResult, DEFAULT_REMOVAL_FACTOR};
pub use shock::ShockSpec;
