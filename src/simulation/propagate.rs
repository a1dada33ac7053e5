//! One-hop shock propagation
//!
//! A shock is applied to a single target, then transmitted exactly once to
//! the target's direct predators and direct prey. Predators and prey both
//! read the target's post-shock population; neither sees the other's update.

use serde::{Deserialize, Serialize};

use crate::core::config::PropagationFactors;
use crate::core::error::{LabError, Result};
use crate::core::types::{Population, Species};
use crate::simulation::effects::Effect;
use crate::simulation::shock::ShockSpec;
use crate::web::{FoodWebGraph, PopulationMap};

/// Removal factor used when an ecosystem does not specify one
pub const DEFAULT_REMOVAL_FACTOR: f64 = 0.4;

/// Populations after one propagation pass plus the ordered effect log
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub population: PopulationMap,
    pub effects: Vec<Effect>,
}

impl SimulationResult {
    /// Human-readable log lines in application order
    pub fn log_lines(&self) -> Vec<String> {
        self.effects.iter().map(|e| e.to_string()).collect()
    }
}

/// Applies a shock to one species of a food web
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockPropagator {
    removal_factor: f64,
    factors: PropagationFactors,
}

impl ShockPropagator {
    /// Propagator with the given removal factor, which must lie in (0, 1]
    pub fn new(removal_factor: f64) -> Result<Self> {
        if !(removal_factor > 0.0 && removal_factor <= 1.0) {
            return Err(LabError::InvalidRemovalFactor(removal_factor));
        }
        Ok(Self {
            removal_factor,
            factors: PropagationFactors::default(),
        })
    }

    /// Replace the neighbour factors; rejects NaN, infinite or negative values
    pub fn with_factors(mut self, factors: PropagationFactors) -> Result<Self> {
        factors.validate()?;
        self.factors = factors;
        Ok(self)
    }

    pub fn removal_factor(&self) -> f64 {
        self.removal_factor
    }

    /// Run one shock. The inputs are left untouched.
    pub fn apply(
        &self,
        graph: &FoodWebGraph,
        population: &PopulationMap,
        target: &Species,
        shock: ShockSpec,
    ) -> Result<SimulationResult> {
        if !graph.contains(target) {
            return Err(LabError::InvalidTarget(target.clone()));
        }

        let original = population.get(target);
        if original == 0 {
            tracing::debug!(%target, "shock on extinct species ignored");
            return Ok(SimulationResult {
                population: population.clone(),
                effects: vec![Effect::AlreadyExtinct { species: target.clone() }],
            });
        }

        let mut next = population.clone();
        let mut effects = Vec::new();

        // 1. Direct shock
        let (after, shock_effect) = apply_direct(target, original, shock);
        next.set(target.clone(), after);
        effects.push(shock_effect);

        let delta = after as i64 - original as i64;
        if delta < 0 {
            let extinct = after == 0;

            // 2. Predators lose food
            let scarcity = if extinct {
                self.removal_factor
            } else {
                self.factors.partial_scarcity
            };
            for predator in graph.predators_of(target) {
                let current = next.get(predator);
                let amount = fraction_of(current, scarcity).min(current);
                next.set(predator.clone(), current - amount);
                effects.push(Effect::PredatorScarcity {
                    prey: target.clone(),
                    predator: predator.clone(),
                    amount,
                });
            }

            // 3. Prey lose a predator
            let release = if extinct {
                self.removal_factor * self.factors.release_multiplier
            } else {
                self.factors.partial_release
            };
            for prey in graph.prey_of(target) {
                let current = next.get(prey);
                let amount = fraction_of(current, release);
                next.set(prey.clone(), current.saturating_add(amount));
                effects.push(Effect::PreyRelease {
                    predator: target.clone(),
                    prey: prey.clone(),
                    amount,
                });
            }
        }

        for effect in &effects {
            tracing::debug!("{}", effect);
        }

        Ok(SimulationResult { population: next, effects })
    }
}

impl Default for ShockPropagator {
    fn default() -> Self {
        Self {
            removal_factor: DEFAULT_REMOVAL_FACTOR,
            factors: PropagationFactors::default(),
        }
    }
}

/// Run one shock with the default propagation factors
pub fn simulate(
    graph: &FoodWebGraph,
    population: &PopulationMap,
    target: &Species,
    shock: ShockSpec,
    removal_factor: f64,
) -> Result<SimulationResult> {
    ShockPropagator::new(removal_factor)?.apply(graph, population, target, shock)
}

fn apply_direct(
    target: &Species,
    original: Population,
    shock: ShockSpec,
) -> (Population, Effect) {
    match shock {
        ShockSpec::Remove => (
            0,
            Effect::Removed {
                species: target.clone(),
                before: original,
            },
        ),
        ShockSpec::AdjustByPercent(percent) => {
            let percent = percent.clamp(-100, 100) as i64;
            // Integer division truncates toward zero
            let change = original as i64 * percent / 100;
            let after = (original as i64 + change).clamp(0, Population::MAX as i64) as Population;

            let effect = if after > original {
                Effect::Increased { species: target.clone(), before: original, after }
            } else {
                Effect::Decreased { species: target.clone(), before: original, after }
            };
            (after, effect)
        }
    }
}

/// floor(count * factor), saturating at the population ceiling
fn fraction_of(count: Population, factor: f64) -> Population {
    let value = (count as f64 * factor).floor();
    if value <= 0.0 {
        0
    } else if value >= Population::MAX as f64 {
        Population::MAX
    } else {
        value as Population
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> Species {
        Species::from(name)
    }

    fn chain() -> (FoodWebGraph, PopulationMap) {
        let graph = FoodWebGraph::try_new(
            [s("grass"), s("rabbit"), s("snake")],
            [(s("grass"), s("rabbit")), (s("rabbit"), s("snake"))],
        )
        .unwrap();
        let pop = [("grass", 100), ("rabbit", 50), ("snake", 20)].into_iter().collect();
        (graph, pop)
    }

    #[test]
    fn test_removal_example() {
        let (graph, pop) = chain();
        let result = simulate(&graph, &pop, &s("rabbit"), ShockSpec::Remove, 0.5).unwrap();

        assert_eq!(result.population.get(&s("rabbit")), 0);
        assert_eq!(result.population.get(&s("snake")), 10);
        assert_eq!(result.population.get(&s("grass")), 175);
        assert_eq!(
            result.log_lines(),
            vec![
                "rabbit removed! (population: 50 -> 0)",
                "rabbit scarcity reduced snake by 10",
                "rabbit predator loss increased grass by 75",
            ]
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let (graph, pop) = chain();
        let before = pop.clone();
        let _ = simulate(&graph, &pop, &s("rabbit"), ShockSpec::Remove, 0.5).unwrap();
        assert_eq!(pop, before);
    }

    #[test]
    fn test_partial_decrease_uses_half_factors() {
        let (graph, pop) = chain();
        let result =
            simulate(&graph, &pop, &s("rabbit"), ShockSpec::AdjustByPercent(-50), 0.4).unwrap();

        assert_eq!(result.population.get(&s("rabbit")), 25);
        // 20 * 0.5
        assert_eq!(result.population.get(&s("snake")), 10);
        // 100 + 100 * 0.5
        assert_eq!(result.population.get(&s("grass")), 150);
        assert_eq!(
            result.effects[0],
            Effect::Decreased { species: s("rabbit"), before: 50, after: 25 }
        );
    }

    #[test]
    fn test_increase_does_not_propagate() {
        let (graph, pop) = chain();
        let result =
            simulate(&graph, &pop, &s("rabbit"), ShockSpec::AdjustByPercent(100), 0.4).unwrap();

        assert_eq!(result.population.get(&s("rabbit")), 100);
        assert_eq!(result.population.get(&s("snake")), 20);
        assert_eq!(result.population.get(&s("grass")), 100);
        assert_eq!(result.effects.len(), 1);
        assert!(matches!(result.effects[0], Effect::Increased { .. }));
    }

    #[test]
    fn test_minus_hundred_percent_matches_remove_on_target() {
        let (graph, pop) = chain();
        let removed = simulate(&graph, &pop, &s("rabbit"), ShockSpec::Remove, 0.4).unwrap();
        let adjusted =
            simulate(&graph, &pop, &s("rabbit"), ShockSpec::AdjustByPercent(-100), 0.4).unwrap();

        assert_eq!(removed.population, adjusted.population);
        assert_ne!(removed.effects[0], adjusted.effects[0]);
        assert_eq!(removed.effects[1..], adjusted.effects[1..]);
    }

    #[test]
    fn test_percent_change_truncates_toward_zero() {
        let graph = FoodWebGraph::try_new([s("frog")], []).unwrap();
        let pop: PopulationMap = [("frog", 33)].into_iter().collect();

        let down =
            simulate(&graph, &pop, &s("frog"), ShockSpec::AdjustByPercent(-10), 0.4).unwrap();
        // -3.3 truncates to -3
        assert_eq!(down.population.get(&s("frog")), 30);

        let up = simulate(&graph, &pop, &s("frog"), ShockSpec::AdjustByPercent(10), 0.4).unwrap();
        assert_eq!(up.population.get(&s("frog")), 36);
    }

    #[test]
    fn test_zero_percent_reports_no_change_and_stops() {
        let (graph, pop) = chain();
        let result =
            simulate(&graph, &pop, &s("rabbit"), ShockSpec::AdjustByPercent(0), 0.4).unwrap();
        assert_eq!(result.population, pop);
        assert_eq!(
            result.effects,
            vec![Effect::Decreased { species: s("rabbit"), before: 50, after: 50 }]
        );
    }

    #[test]
    fn test_already_extinct_short_circuits() {
        let (graph, mut pop) = chain();
        pop.set(s("rabbit"), 0);
        let result = simulate(&graph, &pop, &s("rabbit"), ShockSpec::Remove, 0.4).unwrap();

        assert_eq!(result.population, pop);
        assert_eq!(result.effects, vec![Effect::AlreadyExtinct { species: s("rabbit") }]);
    }

    #[test]
    fn test_missing_population_entry_counts_as_extinct() {
        let (graph, _) = chain();
        let pop: PopulationMap = [("grass", 100), ("snake", 20)].into_iter().collect();
        let result =
            simulate(&graph, &pop, &s("rabbit"), ShockSpec::AdjustByPercent(50), 0.4).unwrap();

        assert_eq!(result.population, pop);
        assert!(!result.population.contains(&s("rabbit")));
        assert_eq!(result.effects.len(), 1);
    }

    #[test]
    fn test_unknown_target_is_rejected() {
        let (graph, pop) = chain();
        let err = simulate(&graph, &pop, &s("hawk"), ShockSpec::Remove, 0.4).unwrap_err();
        assert!(matches!(err, LabError::InvalidTarget(t) if t == s("hawk")));
    }

    #[test]
    fn test_removal_factor_bounds() {
        assert!(ShockPropagator::new(0.0).is_err());
        assert!(ShockPropagator::new(1.01).is_err());
        assert!(ShockPropagator::new(f64::NAN).is_err());
        assert!(ShockPropagator::new(1.0).is_ok());
    }

    #[test]
    fn test_removal_with_default_factor() {
        let (graph, pop) = chain();
        let result = ShockPropagator::default()
            .apply(&graph, &pop, &s("rabbit"), ShockSpec::Remove)
            .unwrap();
        // 20 * 0.4 = 8; 100 * 0.6 = 60
        assert_eq!(result.population.get(&s("snake")), 12);
        assert_eq!(result.population.get(&s("grass")), 160);
    }

    #[test]
    fn test_custom_factors() {
        let (graph, pop) = chain();
        let factors = PropagationFactors {
            partial_scarcity: 0.25,
            partial_release: 0.1,
            release_multiplier: 1.5,
        };
        let result = ShockPropagator::new(0.4)
            .unwrap()
            .with_factors(factors)
            .unwrap()
            .apply(&graph, &pop, &s("rabbit"), ShockSpec::AdjustByPercent(-20))
            .unwrap();
        assert_eq!(result.population.get(&s("snake")), 15);
        assert_eq!(result.population.get(&s("grass")), 110);
    }

    #[test]
    fn test_only_direct_neighbours_change() {
        let graph = FoodWebGraph::try_new(
            [s("acorn"), s("squirrel"), s("weasel"), s("hawk"), s("frog")],
            [
                (s("acorn"), s("squirrel")),
                (s("squirrel"), s("weasel")),
                (s("weasel"), s("hawk")),
            ],
        )
        .unwrap();
        let pop: PopulationMap = [
            ("acorn", 80),
            ("squirrel", 40),
            ("weasel", 20),
            ("hawk", 10),
            ("frog", 30),
        ]
        .into_iter()
        .collect();

        let result = simulate(&graph, &pop, &s("acorn"), ShockSpec::Remove, 0.4).unwrap();
        assert_eq!(result.population.get(&s("squirrel")), 24);
        assert_eq!(result.population.get(&s("weasel")), 20);
        assert_eq!(result.population.get(&s("hawk")), 10);
        assert_eq!(result.population.get(&s("frog")), 30);
    }

    #[test]
    fn test_predator_effects_precede_prey_effects() {
        let graph = FoodWebGraph::try_new(
            [s("grass"), s("caterpillar"), s("rabbit"), s("snake"), s("hawk")],
            [
                (s("grass"), s("rabbit")),
                (s("rabbit"), s("snake")),
                (s("caterpillar"), s("rabbit")),
                (s("rabbit"), s("hawk")),
            ],
        )
        .unwrap();
        let pop: PopulationMap = [
            ("grass", 100),
            ("caterpillar", 60),
            ("rabbit", 50),
            ("snake", 20),
            ("hawk", 10),
        ]
        .into_iter()
        .collect();

        let result = simulate(&graph, &pop, &s("rabbit"), ShockSpec::Remove, 0.4).unwrap();
        let affected: Vec<&str> = result.effects.iter().map(|e| e.affected().as_str()).collect();
        assert_eq!(affected, vec!["rabbit", "snake", "hawk", "grass", "caterpillar"]);
    }

    #[test]
    fn test_repeated_runs_give_identical_results() {
        let (graph, pop) = chain();
        let propagator = ShockPropagator::new(0.4).unwrap();

        let shocks = [
            ShockSpec::Remove,
            ShockSpec::AdjustByPercent(-30),
            ShockSpec::AdjustByPercent(60),
        ];
        for shock in shocks {
            let first = propagator.apply(&graph, &pop, &s("rabbit"), shock).unwrap();
            let second = propagator.apply(&graph, &pop, &s("rabbit"), shock).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_mutual_predation_reads_reduced_value_for_prey_step() {
        // a eats b and b eats a: b is handled as a predator first, and the prey
        // step then grows the already-reduced count, as the classroom app does
        let graph =
            FoodWebGraph::try_new([s("a"), s("b")], [(s("a"), s("b")), (s("b"), s("a"))]).unwrap();
        let pop: PopulationMap = [("a", 50), ("b", 20)].into_iter().collect();

        let result = simulate(&graph, &pop, &s("a"), ShockSpec::Remove, 0.4).unwrap();

        // 20 - floor(20 * 0.4) = 12, then 12 + floor(12 * 0.6) = 19
        assert_eq!(result.population.get(&s("b")), 19);
        assert_eq!(
            result.log_lines(),
            vec![
                "a removed! (population: 50 -> 0)".to_string(),
                "a scarcity reduced b by 8".to_string(),
                "a predator loss increased b by 7".to_string(),
            ]
        );
    }

    #[test]
    fn test_with_factors_rejects_nan() {
        let factors = PropagationFactors {
            partial_scarcity: f64::NAN,
            ..PropagationFactors::default()
        };
        assert!(matches!(
            ShockPropagator::new(0.4).unwrap().with_factors(factors),
            Err(LabError::InvalidConfig(_))
        ));
    }
}
