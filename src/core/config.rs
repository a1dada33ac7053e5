//! Lab configuration with documented constants
//!
//! The propagation factors are classroom-demo values, not an ecological
//! model. They are collected here so a preset or a test can override them.

use serde::{Deserialize, Serialize};

use crate::core::error::{LabError, Result};

/// Strength of the one-hop response to a shocked species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationFactors {
    /// Fraction of each predator lost when its prey shrank but survived
    ///
    /// Used instead of the removal factor whenever the target still has a
    /// non-zero population after the shock.
    pub partial_scarcity: f64,

    /// Fraction each prey grows by when its predator shrank but survived
    pub partial_release: f64,

    /// Multiplier on the removal factor for prey of an extinct predator
    ///
    /// At 1.5 with the default removal factor of 0.4, prey grow by 60%.
    pub release_multiplier: f64,
}

impl PropagationFactors {
    /// Every factor must be a finite, non-negative number
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("partial_scarcity", self.partial_scarcity),
            ("partial_release", self.partial_release),
            ("release_multiplier", self.release_multiplier),
        ];
        for (name, value) in named {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LabError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for PropagationFactors {
    fn default() -> Self {
        Self {
            partial_scarcity: 0.5,
            partial_release: 0.5,
            release_multiplier: 1.5,
        }
    }
}

/// Configuration for the classroom lab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    // === BUILDER ===
    /// Population given to every species added to the user's model
    pub initial_population: u32,

    // === EXPERIMENT ===
    /// Removal factor applied to the user's own model
    ///
    /// Built-in presets carry their own factor; this one is used only when
    /// the experiment runs against the model the user drew.
    pub user_removal_factor: f64,

    /// Neighbour response strengths shared by every ecosystem
    pub factors: PropagationFactors,

    /// Step of the percent slider (the REPL rejects other multiples)
    pub percent_step: i32,

    // === ASSESSMENT ===
    /// Edge/node ratio above which a model counts as a complex web
    pub complex_threshold: f64,

    /// Edge/node ratio below which a model counts as a simple chain
    pub simple_threshold: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            initial_population: 50,
            user_removal_factor: 0.4,
            factors: PropagationFactors::default(),
            percent_step: 10,
            complex_threshold: 1.5,
            simple_threshold: 1.0,
        }
    }
}

impl LabConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.user_removal_factor > 0.0 && self.user_removal_factor <= 1.0) {
            return Err(LabError::InvalidRemovalFactor(self.user_removal_factor));
        }

        self.factors.validate()?;

        if self.simple_threshold > self.complex_threshold {
            return Err(LabError::InvalidConfig(format!(
                "simple_threshold ({}) should be <= complex_threshold ({})",
                self.simple_threshold, self.complex_threshold
            )));
        }

        if self.percent_step <= 0 || 100 % self.percent_step != 0 {
            return Err(LabError::InvalidConfig(format!(
                "percent_step ({}) must evenly divide 100",
                self.percent_step
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<LabConfig> = OnceLock::new();

/// Get the global lab config (initializes with defaults if not set)
pub fn config() -> &'static LabConfig {
    CONFIG.get_or_init(LabConfig::default)
}

/// Set the global lab config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: LabConfig) -> std::result::Result<(), LabConfig> {
    CONFIG.set(config)
}
