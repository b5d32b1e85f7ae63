//! Tap-to-world hit-testing against the ground plane.
//!
//! Converts a touch position into a ray through the tracked camera and
//! intersects it with the scene's reference surface.

/// Rays and planes.
pub mod ray;

pub use hit_test::{camera_ray, hit_test, Viewport};
pub use ray::{Plane, Ray};
