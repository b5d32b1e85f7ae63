use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Primary camera construction parameters.
///
/// These only shape the camera until the first tracking sample arrives; from
/// then on the host-supplied intrinsics own the projection.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial eye height above the ground plane, handed to the tracking
    /// engine as the recenter origin.
    #[schemars(title = "Eye Height", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub height: f32,
    /// Rebuild the projection from `fovy` and the new aspect ratio whenever
    /// the canvas is resized. Off by default: the tracking intrinsics
    /// overwrite the projection on the next frame anyway.
    #[schemars(title = "Recompute Aspect On Resize")]
    pub recompute_aspect_on_resize: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            height: 3.0,
            recompute_aspect_on_resize: false,
        }
    }
}
