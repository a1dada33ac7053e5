pub mod config;
pub mod error;
pub mod types;

pub use config::{LabConfig, PropagationFactors};
pub use error::{LabError, Result};
pub use types::{Population, Species, TrophicLevel};
