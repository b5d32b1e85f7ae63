use glam::{Mat4, Quat, Vec3};

use crate::options::CameraOptions;

/// Perspective render camera whose projection and pose are driven by the
/// tracking engine.
///
/// The projection starts as a GL-style perspective (depth in `[-1, 1]`)
/// built from field of view and aspect, and is replaced wholesale by the
/// host's intrinsics every tracked frame. The inverse is kept in lockstep so
/// unprojection for hit-testing always sees the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ArCamera {
    projection: Mat4,
    projection_inverse: Mat4,
    /// World-space orientation.
    pub rotation: Quat,
    /// World-space position.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl ArCamera {
    /// Camera at the origin looking down -Z with a GL perspective
    /// projection.
    #[must_use]
    pub fn perspective(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let projection =
            Mat4::perspective_rh_gl(fovy.to_radians(), aspect, znear, zfar);
        Self {
            projection,
            projection_inverse: projection.inverse(),
            rotation: Quat::IDENTITY,
            position: Vec3::ZERO,
            fovy,
            aspect,
            znear,
            zfar,
        }
    }

    /// Primary session camera: configured projection, raised to the
    /// configured eye height.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        let mut camera =
            Self::perspective(options.fovy, aspect, options.znear, options.zfar);
        camera.position = Vec3::new(0.0, options.height, 0.0);
        camera
    }

    /// Current projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Inverse of [`Self::projection`], recomputed on every write.
    #[must_use]
    pub fn projection_inverse(&self) -> Mat4 {
        self.projection_inverse
    }

    /// Overwrite the projection with 16 host-supplied values copied
    /// slot-for-slot into the matrix storage, then refresh the inverse.
    pub fn set_projection_slots(&mut self, slots: &[f32; 16]) {
        self.projection = Mat4::from_cols_array(slots);
        self.projection_inverse = self.projection.inverse();
    }

    /// Rebuild the perspective projection for a new aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection = Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        );
        self.projection_inverse = self.projection.inverse();
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Map a normalized-device-coordinate point back into world space.
    #[must_use]
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        let view = self.projection_inverse.project_point3(ndc);
        self.world_matrix().transform_point3(view)
    }
}

/// Width over height, falling back to square for a degenerate height.
#[must_use]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        return 1.0;
    }
    width as f32 / height as f32
}
