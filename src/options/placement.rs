use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Batch size, scatter and size ceiling of each tap's spawn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Placement", inline)]
#[serde(default)]
pub struct PlacementOptions {
    /// Fewest flowers spawned per tap.
    #[schemars(title = "Min Per Tap", range(min = 1, max = 20))]
    pub min_count: u32,
    /// Most flowers spawned per tap (inclusive).
    #[schemars(title = "Max Per Tap", range(min = 1, max = 20))]
    pub max_count: u32,
    /// Radius of the ball each flower is scattered within around the hit.
    #[schemars(title = "Scatter Radius", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub jitter_radius: f32,
    /// Lower bound of the per-flower terminal scale.
    #[schemars(title = "Min Size", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub min_target_scale: f32,
    /// Upper bound of the per-flower terminal scale.
    #[schemars(title = "Max Size", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub max_target_scale: f32,
    /// Headings are drawn uniformly from `[0, heading_range)` degrees.
    #[schemars(skip)]
    pub heading_range: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            min_count: 1,
            max_count: 5,
            jitter_radius: 0.5,
            min_target_scale: 1.5,
            max_target_scale: 3.0,
            heading_range: 360.0,
        }
    }
}
