//! Load ecosystem presets from TOML files

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::ecosystem::preset::{EcosystemPreset, PresetDef};

/// Parse one preset from TOML text
pub fn parse_preset(content: &str) -> Result<EcosystemPreset> {
    let def: PresetDef = toml::from_str(content)?;
    EcosystemPreset::try_from(def)
}

/// Load one preset file
pub fn load_preset(path: &Path) -> Result<EcosystemPreset> {
    let content = fs::read_to_string(path)?;
    let preset = parse_preset(&content)?;
    tracing::info!(
        "Loaded ecosystem '{}' from {} ({} species, {} links)",
        preset.name,
        path.display(),
        preset.graph.node_count(),
        preset.graph.edge_count()
    );
    Ok(preset)
}

/// Load every `.toml` preset in a directory, sorted by file name
pub fn load_presets(dir: &Path) -> Result<Vec<EcosystemPreset>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|p| load_preset(p)).collect()
}
