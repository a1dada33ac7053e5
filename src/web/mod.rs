//! Food web data model
//!
//! The graph of who eats whom and the population counts that the shock
//! simulation reads and produces.

pub mod graph;
pub mod population;

pub use graph::FoodWebGraph;
pub use population::{PopulationMap, Trend};
