//! Per-frame tracking samples and their application to the render camera.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::core::ArCamera;
use crate::marker::MarkerGate;

/// One frame of tracking output from the host engine.
///
/// Read-only to the session and not retained past the update it arrives
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingSample {
    /// Device orientation, when the tracker produced one this frame.
    #[serde(default, with = "crate::camera::wire::optional_quat")]
    pub rotation: Option<Quat>,
    /// Absolute device position, when the tracker produced one this frame.
    #[serde(default, with = "crate::camera::wire::optional_vec3")]
    pub position: Option<Vec3>,
    /// Projection matrix in the same flat slot order as the camera's
    /// storage.
    pub intrinsics: [f32; 16],
}

impl TrackingSample {
    /// Sample carrying only a projection.
    #[must_use]
    pub fn from_intrinsics(intrinsics: [f32; 16]) -> Self {
        Self {
            rotation: None,
            position: None,
            intrinsics,
        }
    }

    /// Attach an orientation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Attach a position.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }
}

/// The tracker's per-frame CPU results. At most one source is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessCpuResult {
    /// World-tracking output. Preferred when present.
    pub reality: Option<TrackingSample>,
    /// Face-tracking output, used only when `reality` is absent.
    #[serde(alias = "facecontroller")]
    pub face_controller: Option<TrackingSample>,
}

impl ProcessCpuResult {
    /// The sample to apply this frame, preferring world tracking.
    #[must_use]
    pub fn source(&self) -> Option<&TrackingSample> {
        self.reality.as_ref().or(self.face_controller.as_ref())
    }
}

/// Copies tracking samples onto the render camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseSynchronizer {
    gate: MarkerGate,
}

impl PoseSynchronizer {
    /// Synchronizer re-evaluating the given marker gate on each rotation.
    #[must_use]
    pub fn new(gate: MarkerGate) -> Self {
        Self { gate }
    }

    /// Apply `sample` to `camera`.
    ///
    /// The projection and its inverse are rewritten unconditionally. Each of
    /// rotation and position is applied only if present; missing fields leave
    /// the camera's previous value untouched. Returns the new marker
    /// visibility when the sample carried a rotation, `None` otherwise.
    pub fn sync(
        &self,
        camera: &mut ArCamera,
        sample: &TrackingSample,
    ) -> Option<bool> {
        camera.set_projection_slots(&sample.intrinsics);

        let visible = sample.rotation.map(|rotation| {
            camera.rotation = rotation;
            self.gate.compute_visible(rotation)
        });

        if let Some(position) = sample.position {
            camera.position = position;
        }

        log::trace!(
            "pose sync: position={:?} rotation={:?}",
            camera.position,
            camera.rotation
        );
        visible
    }
}
