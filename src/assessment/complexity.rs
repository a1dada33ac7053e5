//! Edge-to-node complexity score

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::LabConfig;
use crate::web::FoodWebGraph;

/// How tangled a student's model is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityRating {
    /// Few links, close to a single chain
    SimpleChain,
    Moderate,
    /// Many links per species
    ComplexWeb,
}

impl fmt::Display for ComplexityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ComplexityRating::SimpleChain => "close to a simple food chain",
            ComplexityRating::Moderate => "moderately complex",
            ComplexityRating::ComplexWeb => "a complex food web",
        };
        f.write_str(text)
    }
}

/// Score plus rating for one graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub species: usize,
    pub links: usize,
    pub score: f64,
    pub rating: ComplexityRating,
}

impl ComplexityReport {
    pub fn assess(graph: &FoodWebGraph, config: &LabConfig) -> Self {
        let score = complexity_score(graph);
        Self {
            species: graph.node_count(),
            links: graph.edge_count(),
            score,
            rating: rate(score, config),
        }
    }

    /// One-line verdict, e.g. `a complex food web (score 1.75)`
    pub fn verdict(&self) -> String {
        format!("{} (score {:.2})", self.rating, self.score)
    }
}

/// Links per species; zero for an empty graph
pub fn complexity_score(graph: &FoodWebGraph) -> f64 {
    if graph.node_count() == 0 {
        return 0.0;
    }
    graph.edge_count() as f64 / graph.node_count() as f64
}

pub fn rate(score: f64, config: &LabConfig) -> ComplexityRating {
    if score > config.complex_threshold {
        ComplexityRating::ComplexWeb
    } else if score < config.simple_threshold {
        ComplexityRating::SimpleChain
    } else {
        ComplexityRating::Moderate
    }
}
