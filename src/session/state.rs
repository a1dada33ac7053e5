//! Classroom session state
//!
//! Everything the three lab stages share lives in one `ClassroomState`
//! owned by the front end: the student's model, the cards still on offer and
//! the most recent experiment.

use serde::Serialize;

use crate::assessment::ComplexityReport;
use crate::catalog::{self, CatalogEntry, CATALOG};
use crate::core::config::LabConfig;
use crate::core::error::{LabError, Result};
use crate::core::types::Species;
use crate::ecosystem::EcosystemPreset;
use crate::render::{species_metrics, SpeciesMetric};
use crate::simulation::{ShockSpec, SimulationResult};
use crate::web::{FoodWebGraph, PopulationMap};

/// Name given to the ecosystem a student draws
pub const USER_MODEL_NAME: &str = "My food web";

/// The ecosystem an experiment will run against
#[derive(Debug, Clone)]
pub struct ActiveEcosystem {
    pub preset: EcosystemPreset,
    /// True when the student has not drawn a link yet and the built-in
    /// simple chain stands in
    pub is_fallback: bool,
}

/// One finished experiment with the snapshot it started from
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRecord {
    pub ecosystem: EcosystemPreset,
    pub target: Species,
    pub shock: ShockSpec,
    pub baseline: PopulationMap,
    pub result: SimulationResult,
}

impl ExperimentRecord {
    pub fn metrics(&self) -> Vec<SpeciesMetric> {
        species_metrics(&self.ecosystem.graph, &self.baseline, &self.result.population)
    }
}

/// State shared by the builder, experiment and assessment stages
#[derive(Debug, Clone)]
pub struct ClassroomState {
    config: LabConfig,
    model: FoodWebGraph,
    model_population: PopulationMap,
    available: Vec<&'static CatalogEntry>,
    last_experiment: Option<ExperimentRecord>,
}

impl ClassroomState {
    pub fn new(config: LabConfig) -> Self {
        Self {
            config,
            model: FoodWebGraph::new(),
            model_population: PopulationMap::new(),
            available: CATALOG.iter().collect(),
            last_experiment: None,
        }
    }

    /// Back to an empty model with every card available
    pub fn reset(&mut self) {
        let config = self.config.clone();
        *self = Self::new(config);
        tracing::info!("Classroom state reset");
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn model(&self) -> &FoodWebGraph {
        &self.model
    }

    pub fn model_population(&self) -> &PopulationMap {
        &self.model_population
    }

    /// Cards not yet placed in the model
    pub fn available_species(&self) -> &[&'static CatalogEntry] {
        &self.available
    }

    pub fn last_experiment(&self) -> Option<&ExperimentRecord> {
        self.last_experiment.as_ref()
    }

    // === BUILDER ===

    /// Place a catalogue card in the model with the configured starting population
    pub fn add_species(&mut self, name: &str) -> Result<Species> {
        let entry =
            catalog::lookup(name).ok_or_else(|| LabError::UnknownSpecies(name.to_string()))?;
        let placed = resolve(&self.model, entry.name);
        if self.model.contains(&placed) {
            return Err(LabError::DuplicateSpecies(placed));
        }
        let species = entry.species();

        self.model.add_species(species.clone())?;
        self.model_population
            .set(species.clone(), self.config.initial_population);
        self.available.retain(|e| e.name != entry.name);

        tracing::debug!(%species, "Added species to model");
        Ok(species)
    }

    /// Draw a prey -> predator arrow between two placed species
    pub fn connect(&mut self, prey: &str, predator: &str) -> Result<()> {
        let prey = resolve(&self.model, prey);
        let predator = resolve(&self.model, predator);
        self.model.connect(prey.clone(), predator.clone())?;
        tracing::debug!(%prey, %predator, "Linked species");
        Ok(())
    }

    /// Replace the model with a preset's web and populations
    pub fn load_model(&mut self, preset: &EcosystemPreset) {
        self.model = preset.graph.clone();
        self.model_population = preset.initial_population.clone();
        self.available = CATALOG
            .iter()
            .filter(|e| !self.model.contains(&resolve(&self.model, e.name)))
            .collect();
        tracing::info!("Loaded '{}' as the working model", preset.name);
    }

    // === EXPERIMENT ===

    /// The student's model once it has a link, otherwise the simple chain
    pub fn active_ecosystem(&self) -> ActiveEcosystem {
        if self.model.edge_count() == 0 {
            return ActiveEcosystem {
                preset: EcosystemPreset::simple_chain(),
                is_fallback: true,
            };
        }

        ActiveEcosystem {
            preset: EcosystemPreset {
                name: USER_MODEL_NAME.to_string(),
                graph: self.model.clone(),
                initial_population: self.model_population.clone(),
                removal_factor: self.config.user_removal_factor,
            },
            is_fallback: false,
        }
    }

    /// Shock one species of the active ecosystem and keep the outcome
    pub fn run_experiment(&mut self, target: &str, shock: ShockSpec) -> Result<&ExperimentRecord> {
        let active = self.active_ecosystem();
        let target = resolve(&active.preset.graph, target);
        let result = active.preset.run(&target, shock, self.config.factors)?;

        tracing::info!(
            ecosystem = %active.preset.name,
            %target,
            %shock,
            effects = result.effects.len(),
            "Experiment finished"
        );

        let record = ExperimentRecord {
            baseline: active.preset.initial_population.clone(),
            ecosystem: active.preset,
            target,
            shock,
            result,
        };
        Ok(self.last_experiment.insert(record))
    }

    // === ASSESSMENT ===

    /// Score of the student's model; `None` until it has a link
    pub fn complexity(&self) -> Option<ComplexityReport> {
        if self.model.edge_count() == 0 {
            return None;
        }
        Some(ComplexityReport::assess(&self.model, &self.config))
    }
}

impl Default for ClassroomState {
    fn default() -> Self {
        Self::new(crate::core::config::config().clone())
    }
}

/// The node of `graph` that `name` refers to, ignoring case and surrounding
/// whitespace; the trimmed input when no node matches
fn resolve(graph: &FoodWebGraph, name: &str) -> Species {
    let name = name.trim();
    let exact = Species::from(name);
    if graph.contains(&exact) {
        return exact;
    }
    graph
        .nodes()
        .iter()
        .find(|node| node.as_str().eq_ignore_ascii_case(name))
        .cloned()
        .unwrap_or(exact)
}
