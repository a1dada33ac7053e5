//! Rendering sinks
//!
//! The simulation never draws anything itself. Front ends hand a graph,
//! the populations to show and a baseline to compare against to a
//! `RenderSink`, which decides how to present the trend of each node.

pub mod metrics;
pub mod text;

pub use metrics::{species_metrics, trend_colour, SpeciesMetric};
pub use text::TextRenderer;

use crate::core::error::Result;
use crate::simulation::Effect;
use crate::web::{FoodWebGraph, PopulationMap};

/// Destination for food web pictures, effect logs and metric rows
pub trait RenderSink {
    /// Draw `graph` showing `population`, colouring nodes by their change from `baseline`
    fn draw(
        &mut self,
        title: &str,
        graph: &FoodWebGraph,
        population: &PopulationMap,
        baseline: &PopulationMap,
    ) -> Result<()>;

    /// Show the effect log as a bulleted list
    fn log(&mut self, effects: &[Effect]) -> Result<()>;

    /// Show one delta row per species
    fn metrics(&mut self, metrics: &[SpeciesMetric]) -> Result<()>;
}
