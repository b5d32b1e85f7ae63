//! Rays and planes for hit-testing.

use glam::Vec3;

/// Denominators below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` through `through`. `None` if the points coincide.
    #[must_use]
    pub fn between(origin: Vec3, through: Vec3) -> Option<Self> {
        let direction = (through - origin).try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// An infinite hit-test surface, `normal · p + distance = 0`.
///
/// Only the side the normal points to is solid: rays arriving from behind
/// pass through, as for a single-sided mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal of the solid side.
    pub normal: Vec3,
    /// Offset along the normal; the plane holds the points `p` with
    /// `normal · p = -distance`.
    pub distance: f32,
}

impl Plane {
    /// The horizontal plane `y = 0`, solid from above.
    pub const GROUND: Self = Self {
        normal: Vec3::Y,
        distance: 0.0,
    };

    /// Height of `point` above the plane along its normal. Negative below.
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Ray parameter of the intersection, if the ray reaches the solid side.
    ///
    /// `None` when the ray runs parallel to the plane, points away from it,
    /// or approaches from behind. A ray starting on the plane hits at
    /// `t = 0`.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom > -PARALLEL_EPSILON {
            return None;
        }
        let t = -self.distance_to_point(ray.origin) / denom;
        (t >= 0.0).then_some(t)
    }
}
