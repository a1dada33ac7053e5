//! Per-species before/after metrics

use serde::Serialize;

use crate::core::types::{Population, Species};
use crate::web::{FoodWebGraph, PopulationMap, Trend};

/// Before/after numbers for one species
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesMetric {
    pub species: Species,
    pub initial: Population,
    pub current: Population,
    pub delta: i64,
    pub trend: Trend,
}

impl SpeciesMetric {
    /// Signed delta text: `+75`, `-50` or `0`
    pub fn delta_label(&self) -> String {
        if self.delta > 0 {
            format!("+{}", self.delta)
        } else {
            self.delta.to_string()
        }
    }
}

/// One metric per graph node, in node order
pub fn species_metrics(
    graph: &FoodWebGraph,
    baseline: &PopulationMap,
    current: &PopulationMap,
) -> Vec<SpeciesMetric> {
    graph
        .nodes()
        .iter()
        .map(|species| {
            let delta = current.delta_from(baseline, species);
            SpeciesMetric {
                species: species.clone(),
                initial: baseline.get(species),
                current: current.get(species),
                delta,
                trend: Trend::from_delta(delta),
            }
        })
        .collect()
}

/// Node colour used by the plotting front end
pub fn trend_colour(trend: Trend) -> &'static str {
    match trend {
        Trend::Increased => "lightgreen",
        Trend::Decreased => "red",
        Trend::Unchanged => "skyblue",
    }
}
