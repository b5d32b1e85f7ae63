//! Centralized session options with TOML preset support.
//!
//! Every tunable of the experience (camera construction, placement scatter,
//! growth pacing, marker tilt gate, scene dressing) is consolidated here.
//! Options serialize to/from TOML so presets can live next to the app.

mod camera;
mod growth;
mod marker;
mod placement;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use growth::GrowthOptions;
pub use marker::MarkerOptions;
pub use placement::PlacementOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::MarigoldError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[growth]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Fixed seed for the session's random source. `None` seeds from the OS.
    #[schemars(skip)]
    pub seed: Option<u64>,
    /// Primary camera construction.
    pub camera: CameraOptions,
    /// Per-tap spawn batch parameters.
    pub placement: PlacementOptions,
    /// Growth pacing.
    pub growth: GrowthOptions,
    /// Tilt marker parameters.
    pub marker: MarkerOptions,
    /// Ground, lights and template asset.
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MarigoldError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, MarigoldError> {
        toml::from_str(content)
            .map_err(|e| MarigoldError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MarigoldError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MarigoldError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(MarigoldError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
