//! Tilt marker: a ring shown while the device is pitched.
//!
//! The marker lives in its own scene with a fixed secondary camera that is
//! never pose-synchronized; only its visibility follows tracking.

use glam::{Quat, Vec3};

use crate::camera::core::{aspect_ratio, ArCamera};
use crate::options::{CameraOptions, MarkerOptions};

/// Distance of the fixed marker camera from the marker scene origin.
const MARKER_CAMERA_Z: f32 = 2.5;

/// Decides marker visibility from the camera orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGate {
    /// Inclusive lower bound on `|rotation.x|`.
    pub threshold: f32,
}

impl Default for MarkerGate {
    fn default() -> Self {
        Self { threshold: 0.15 }
    }
}

impl MarkerGate {
    /// Gate with a custom threshold.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Visible iff the quaternion's x component magnitude reaches the
    /// threshold. Evaluated fresh every call, with no hysteresis.
    #[must_use]
    pub fn compute_visible(&self, rotation: Quat) -> bool {
        rotation.x.abs() >= self.threshold
    }
}

/// Ring geometry and visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Whether the ring is drawn.
    pub visible: bool,
    /// Ring inner radius.
    pub inner_radius: f32,
    /// Ring outer radius.
    pub outer_radius: f32,
    /// Ring tessellation.
    pub segments: u32,
    /// Ring placement in the marker scene.
    pub position: Vec3,
    /// Ring tilt so it reads as lying on the floor.
    pub rotation: Quat,
}

impl Marker {
    /// Hidden ring built from options.
    #[must_use]
    pub fn new(options: &MarkerOptions) -> Self {
        Self {
            visible: false,
            inner_radius: options.inner_radius,
            outer_radius: options.outer_radius,
            segments: options.segments,
            position: Vec3::new(0.0, 0.0, -options.distance),
            rotation: Quat::from_rotation_x(-std::f32::consts::PI / 1.4),
        }
    }
}

/// Secondary scene holding the marker and its fixed camera.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerScene {
    /// The ring.
    pub marker: Marker,
    /// Fixed overlay camera.
    pub camera: ArCamera,
}

impl MarkerScene {
    /// Build the overlay for a viewport of `width` x `height`.
    #[must_use]
    pub fn new(
        marker: &MarkerOptions,
        camera: &CameraOptions,
        width: u32,
        height: u32,
    ) -> Self {
        let mut overlay_camera = ArCamera::perspective(
            camera.fovy,
            aspect_ratio(width, height),
            camera.znear,
            camera.zfar,
        );
        overlay_camera.position = Vec3::new(0.0, 0.0, MARKER_CAMERA_Z);
        Self {
            marker: Marker::new(marker),
            camera: overlay_camera,
        }
    }
}
