use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tilt marker ring shown while the device is pitched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Marker", inline)]
#[serde(default)]
pub struct MarkerOptions {
    /// Minimum `|rotation.x|` (quaternion component) at which the marker
    /// shows. Inclusive.
    #[schemars(title = "Tilt Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub tilt_threshold: f32,
    /// Ring inner radius.
    #[schemars(skip)]
    pub inner_radius: f32,
    /// Ring outer radius.
    #[schemars(skip)]
    pub outer_radius: f32,
    /// Ring tessellation.
    #[schemars(skip)]
    pub segments: u32,
    /// Distance in front of the marker camera.
    #[schemars(skip)]
    pub distance: f32,
    /// Draw the marker scene after the main scene each frame.
    #[schemars(title = "Show Overlay")]
    pub overlay: bool,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            tilt_threshold: 0.15,
            inner_radius: 0.4,
            outer_radius: 0.5,
            segments: 36,
            distance: 3.0,
            overlay: false,
        }
    }
}
