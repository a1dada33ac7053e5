//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of one node in a food web
///
/// Species are opaque keys to the simulation. The classroom catalogue gives
/// some of them a glyph and a trophic level, but nothing requires it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Species(pub String);

impl Species {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Species {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Species {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Species {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Head count of one species
pub type Population = u32;

/// Feeding-order rank, used only to group species for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TrophicLevel {
    Producer = 1,
    Primary = 2,
    Secondary = 3,
    Tertiary = 4,
    Apex = 5,
}

impl TrophicLevel {
    /// Returns true if this level feeds above the other
    pub fn above(&self, other: &TrophicLevel) -> bool {
        (*self as u8) > (*other as u8)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrophicLevel::Producer => "producer",
            TrophicLevel::Primary => "primary consumer",
            TrophicLevel::Secondary => "secondary consumer",
            TrophicLevel::Tertiary => "tertiary consumer",
            TrophicLevel::Apex => "apex consumer",
        }
    }
}
