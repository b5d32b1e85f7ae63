use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-tick acceleration of each flower's growth rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Growth", inline)]
#[serde(default)]
pub struct GrowthOptions {
    /// Smallest per-tick increment of the growth rate.
    #[schemars(title = "Min Step", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub min_rate_step: f32,
    /// Largest per-tick increment of the growth rate.
    #[schemars(title = "Max Step", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub max_rate_step: f32,
    /// Fractional digits each drawn increment is rounded to.
    #[schemars(skip)]
    pub step_decimals: u32,
}

impl Default for GrowthOptions {
    fn default() -> Self {
        Self {
            min_rate_step: 0.02,
            max_rate_step: 0.03,
            step_decimals: 3,
        }
    }
}
