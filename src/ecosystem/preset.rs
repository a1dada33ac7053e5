//! Named ecosystems: a food web, its starting populations and removal factor

use serde::{Deserialize, Serialize};

use crate::core::config::PropagationFactors;
use crate::core::error::{LabError, Result};
use crate::core::types::Species;
use crate::simulation::{ShockPropagator, ShockSpec, SimulationResult, DEFAULT_REMOVAL_FACTOR};
use crate::web::{FoodWebGraph, PopulationMap};

/// A ready-to-run ecosystem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcosystemPreset {
    pub name: String,
    pub graph: FoodWebGraph,
    pub initial_population: PopulationMap,
    pub removal_factor: f64,
}

/// On-disk preset layout
#[derive(Debug, Clone, Deserialize)]
pub struct PresetDef {
    pub name: String,
    #[serde(default = "default_removal_factor")]
    pub removal_factor: f64,
    pub nodes: Vec<Species>,
    #[serde(default)]
    pub edges: Vec<(Species, Species)>,
    #[serde(default)]
    pub initial_population: PopulationMap,
}

fn default_removal_factor() -> f64 {
    DEFAULT_REMOVAL_FACTOR
}

impl TryFrom<PresetDef> for EcosystemPreset {
    type Error = LabError;

    fn try_from(def: PresetDef) -> Result<Self> {
        // Validate the factor up front so a bad file fails at load time
        ShockPropagator::new(def.removal_factor)?;
        let graph = FoodWebGraph::try_new(def.nodes, def.edges)?;
        Ok(Self {
            name: def.name,
            graph,
            initial_population: def.initial_population,
            removal_factor: def.removal_factor,
        })
    }
}

impl EcosystemPreset {
    /// Two-species chain shown before a student has drawn anything
    pub fn simple_chain() -> Self {
        let rabbit = Species::from("rabbit");
        let snake = Species::from("snake");

        let graph = FoodWebGraph::from_trusted(
            vec![rabbit.clone(), snake.clone()],
            vec![(rabbit.clone(), snake.clone())],
        );

        Self {
            name: "Simple food chain".to_string(),
            graph,
            initial_population: [(rabbit, 50), (snake, 20)].into_iter().collect(),
            removal_factor: 0.5,
        }
    }

    /// Shock `target` with the given neighbour factors
    pub fn run(
        &self,
        target: &Species,
        shock: ShockSpec,
        factors: PropagationFactors,
    ) -> Result<SimulationResult> {
        ShockPropagator::new(self.removal_factor)?
            .with_factors(factors)?
            .apply(&self.graph, &self.initial_population, target, shock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_chain_contents() {
        let eco = EcosystemPreset::simple_chain();
        assert_eq!(eco.graph.node_count(), 2);
        assert_eq!(eco.graph.edge_count(), 1);
        assert_eq!(eco.initial_population.get(&Species::from("rabbit")), 50);
        assert_eq!(eco.initial_population.get(&Species::from("snake")), 20);
        assert_eq!(eco.removal_factor, 0.5);
    }

    #[test]
    fn test_simple_chain_removal() {
        let eco = EcosystemPreset::simple_chain();
        let result = eco
            .run(&Species::from("rabbit"), ShockSpec::Remove, PropagationFactors::default())
            .unwrap();
        assert_eq!(result.population.get(&Species::from("snake")), 10);
        assert_eq!(result.effects.len(), 2);
    }

    #[test]
    fn test_preset_def_rejects_bad_factor() {
        let def = PresetDef {
            name: "broken".into(),
            removal_factor: 2.0,
            nodes: vec!["rabbit".into()],
            edges: vec![],
            initial_population: PopulationMap::new(),
        };
        assert!(matches!(
            EcosystemPreset::try_from(def),
            Err(LabError::InvalidRemovalFactor(_))
        ));
    }
}
