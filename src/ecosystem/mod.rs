//! Ecosystem presets
//!
//! A preset bundles a food web with starting populations and the removal
//! factor its experiments use. Presets ship as TOML under `data/ecosystems/`.

pub mod loader;
pub mod preset;

pub use loader::{load_preset, load_presets, parse_preset};
pub use preset::{EcosystemPreset, PresetDef};
