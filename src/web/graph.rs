//! Directed "is eaten by" graph over species
//!
//! Edges run from prey to predator. Nodes and edges keep insertion order so
//! that propagation and rendering are deterministic.

use serde::Serialize;

use crate::core::error::{LabError, Result};
use crate::core::types::Species;

/// A food web: species plus ordered prey -> predator links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FoodWebGraph {
    nodes: Vec<Species>,
    edges: Vec<(Species, Species)>,
}

impl FoodWebGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a node list and an edge list, rejecting duplicate
    /// species, self-loops, repeated links and links to unknown species.
    pub fn try_new(
        nodes: impl IntoIterator<Item = Species>,
        edges: impl IntoIterator<Item = (Species, Species)>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for species in nodes {
            graph.add_species(species)?;
        }
        for (prey, predator) in edges {
            if !graph.contains(&prey) || !graph.contains(&predator) {
                return Err(LabError::DanglingEdge { prey, predator });
            }
            graph.connect(prey, predator)?;
        }
        Ok(graph)
    }

    /// Build from parts already known to be valid (built-in presets)
    pub(crate) fn from_trusted(nodes: Vec<Species>, edges: Vec<(Species, Species)>) -> Self {
        debug_assert!(edges
            .iter()
            .all(|(a, b)| a != b && nodes.contains(a) && nodes.contains(b)));
        Self { nodes, edges }
    }

    /// Add a species with no links
    pub fn add_species(&mut self, species: Species) -> Result<()> {
        if self.contains(&species) {
            return Err(LabError::DuplicateSpecies(species));
        }
        self.nodes.push(species);
        Ok(())
    }

    /// Draw an arrow from `prey` to `predator`
    ///
    /// Checks run in the order the classroom reports them: too few species,
    /// self-loop, repeated link, then unknown endpoint.
    pub fn connect(&mut self, prey: Species, predator: Species) -> Result<()> {
        if self.nodes.len() < 2 {
            return Err(LabError::TooFewSpecies);
        }
        if prey == predator {
            return Err(LabError::SelfLoop(prey));
        }
        if self.has_edge(&prey, &predator) {
            return Err(LabError::DuplicateEdge { prey, predator });
        }
        for endpoint in [&prey, &predator] {
            if !self.contains(endpoint) {
                return Err(LabError::UnknownSpecies(endpoint.to_string()));
            }
        }
        self.edges.push((prey, predator));
        Ok(())
    }

    pub fn contains(&self, species: &Species) -> bool {
        self.nodes.contains(species)
    }

    pub fn has_edge(&self, prey: &Species, predator: &Species) -> bool {
        self.edges.iter().any(|(a, b)| a == prey && b == predator)
    }

    pub fn nodes(&self) -> &[Species] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(Species, Species)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Species that eat `species` (targets of its outgoing edges), in edge order
    pub fn predators_of<'a>(
        &'a self,
        species: &'a Species,
    ) -> impl Iterator<Item = &'a Species> + 'a {
        self.edges
            .iter()
            .filter(move |(prey, _)| prey == species)
            .map(|(_, predator)| predator)
    }

    /// Species eaten by `species` (sources of its incoming edges), in edge order
    pub fn prey_of<'a>(
        &'a self,
        species: &'a Species,
    ) -> impl Iterator<Item = &'a Species> + 'a {
        self.edges
            .iter()
            .filter(move |(_, predator)| predator == species)
            .map(|(prey, _)| prey)
    }
}
