//! One-time perturbation applied to a single species

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LabError;

/// Lowest and highest accepted change percent
pub const PERCENT_RANGE: (i32, i32) = (-100, 100);

/// What happens to the target species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum ShockSpec {
    /// Drive the target to zero
    Remove,
    /// Change the target by a percentage of its current population
    AdjustByPercent(i32),
}

impl ShockSpec {
    /// Percentage shock with the value clamped into [-100, 100]
    pub fn adjust(percent: i32) -> Self {
        ShockSpec::AdjustByPercent(percent.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1))
    }

    /// Percentage shock, rejecting values outside [-100, 100]
    pub fn try_adjust(percent: i32) -> Result<Self, LabError> {
        if !(PERCENT_RANGE.0..=PERCENT_RANGE.1).contains(&percent) {
            return Err(LabError::InvalidPercent(percent));
        }
        Ok(ShockSpec::AdjustByPercent(percent))
    }
}

impl fmt::Display for ShockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShockSpec::Remove => f.write_str("remove"),
            ShockSpec::AdjustByPercent(p) => write!(f, "{:+}%", p),
        }
    }
}

/// Accepts `remove` / `extinct`, or a signed integer percent (`-50`, `+30`, `20%`)
impl FromStr for ShockSpec {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "remove" | "extinct" => return Ok(ShockSpec::Remove),
            _ => {}
        }

        let digits = s.strip_suffix('%').unwrap_or(s);
        let percent: i32 = digits
            .parse()
            .map_err(|_| LabError::InvalidShock(s.to_string()))?;
        ShockSpec::try_adjust(percent)
    }
}
