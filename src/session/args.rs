use serde::{Deserialize, Serialize};

use crate::camera::ProcessCpuResult;
use crate::host::{CanvasHandle, GraphicsContext};

/// Everything `init` needs. The host only delivers this once the canvas and
/// graphics context both exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOptions {
    /// Output canvas.
    pub canvas: CanvasHandle,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Graphics context bound to `canvas`.
    pub graphics_context: GraphicsContext,
    /// Decorative particle budget. `None` or zero uses the configured
    /// default.
    pub count: Option<u32>,
}

/// Per-frame tracking payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateArgs {
    /// Tracking results for this frame.
    pub process_cpu_result: ProcessCpuResult,
}

/// New canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeArgs {
    /// Width in pixels.
    pub canvas_width: u32,
    /// Height in pixels.
    pub canvas_height: u32,
}

/// Per-frame render parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderArgs {
    /// Flush queued GPU work after clearing depth. Required on some iOS
    /// builds to avoid a stale first frame.
    pub needs_prerender_finish: bool,
}

/// Coarse session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Before `init`, or after `detach`. Every callback is a no-op.
    #[default]
    Idle,
    /// Running.
    Engaged,
}

/// The two gates every callback checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionFlags {
    /// Set by `init`, cleared by `detach`.
    pub engaged: bool,
    /// Set once the template has been delivered. Never cleared.
    pub asset_ready: bool,
}

impl SessionFlags {
    /// Lifecycle state implied by `engaged`.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        if self.engaged {
            Lifecycle::Engaged
        } else {
            Lifecycle::Idle
        }
    }
}

/// What a touch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Session idle, or a finger count with no action.
    Ignored,
    /// Two fingers: tracking was recentered.
    Recentered,
    /// The ray from the touch never reached the ground.
    Missed,
    /// Ground was hit but the template has not loaded.
    NotReady,
    /// This many flowers were planted.
    Spawned(usize),
}
