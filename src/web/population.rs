//! Population counts per species

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Population, Species};

/// Direction a species' population moved relative to a baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increased,
    Decreased,
    Unchanged,
}

impl Trend {
    pub fn from_delta(delta: i64) -> Self {
        match delta {
            d if d > 0 => Trend::Increased,
            d if d < 0 => Trend::Decreased,
            _ => Trend::Unchanged,
        }
    }
}

/// Head counts keyed by species
///
/// A species with no entry reads as zero. Writes only ever create or
/// overwrite entries, so a map copied from user input keeps the same keys
/// apart from the ones a simulation explicitly touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopulationMap {
    counts: AHashMap<Species, Population>,
}

impl PopulationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count, zero if the species has no entry
    pub fn get(&self, species: &Species) -> Population {
        self.counts.get(species).copied().unwrap_or(0)
    }

    pub fn set(&mut self, species: Species, count: Population) {
        self.counts.insert(species, count);
    }

    pub fn contains(&self, species: &Species) -> bool {
        self.counts.contains_key(species)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Species, Population)> {
        self.counts.iter().map(|(s, c)| (s, *c))
    }

    /// Signed change of `species` relative to `baseline`
    pub fn delta_from(&self, baseline: &PopulationMap, species: &Species) -> i64 {
        self.get(species) as i64 - baseline.get(species) as i64
    }

    /// Trend of `species` relative to `baseline`
    ///
    /// Species missing from the baseline are reported as unchanged.
    pub fn trend_from(&self, baseline: &PopulationMap, species: &Species) -> Trend {
        if !baseline.contains(species) {
            return Trend::Unchanged;
        }
        Trend::from_delta(self.delta_from(baseline, species))
    }
}

impl FromIterator<(Species, Population)> for PopulationMap {
    fn from_iter<I: IntoIterator<Item = (Species, Population)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Population)> for PopulationMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, Population)>>(iter: I) -> Self {
        iter.into_iter().map(|(s, c)| (Species::from(s), c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_species_reads_zero() {
        let pop: PopulationMap = [("rabbit", 50)].into_iter().collect();
        assert_eq!(pop.get(&Species::from("rabbit")), 50);
        assert_eq!(pop.get(&Species::from("snake")), 0);
        assert!(!pop.contains(&Species::from("snake")));
    }

    #[test]
    fn test_delta_and_trend() {
        let before: PopulationMap = [("grass", 100), ("rabbit", 50), ("snake", 20)]
            .into_iter()
            .collect();
        let mut after = before.clone();
        after.set(Species::from("grass"), 175);
        after.set(Species::from("rabbit"), 0);

        assert_eq!(after.delta_from(&before, &Species::from("grass")), 75);
        assert_eq!(after.delta_from(&before, &Species::from("rabbit")), -50);
        assert_eq!(after.trend_from(&before, &Species::from("grass")), Trend::Increased);
        assert_eq!(after.trend_from(&before, &Species::from("rabbit")), Trend::Decreased);
        assert_eq!(after.trend_from(&before, &Species::from("snake")), Trend::Unchanged);
    }

    #[test]
    fn test_species_outside_baseline_is_unchanged() {
        let before = PopulationMap::new();
        let after: PopulationMap = [("hawk", 9)].into_iter().collect();
        assert_eq!(after.trend_from(&before, &Species::from("hawk")), Trend::Unchanged);
    }
}
