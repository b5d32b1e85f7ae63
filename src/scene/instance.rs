use glam::{Mat4, Quat, Vec3};

/// Renderer-side mesh the flowers are cloned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshHandle(pub u32);

/// The loaded placeable model.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerTemplate {
    /// Mesh every clone shares.
    pub mesh: MeshHandle,
    /// Base scale clones inherit.
    pub scale: Vec3,
    /// Emissive strength applied over the base color map.
    pub emissive_intensity: f32,
}

impl FlowerTemplate {
    /// Template for `mesh` at unit scale with no glow.
    #[must_use]
    pub fn new(mesh: MeshHandle) -> Self {
        Self {
            mesh,
            scale: Vec3::ONE,
            emissive_intensity: 0.0,
        }
    }

    /// Collapse the template to zero scale so clones start invisible, and
    /// set the material glow.
    pub(crate) fn prepare(&mut self, emissive_intensity: f32) {
        self.scale *= 0.0;
        self.emissive_intensity = emissive_intensity;
    }
}

/// Stable identity of a placed flower. Assigned in creation order and never
/// reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

/// Placement of a flower on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World position after scatter.
    pub position: Vec3,
    /// Heading about the vertical axis, in degrees.
    pub rotation_y_degrees: f32,
}

impl Transform {
    /// Orientation as a quaternion.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_y_degrees.to_radians())
    }
}

/// One spawned flower and its growth state.
///
/// Scale is isotropic and only ever grows until it reaches `target_scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerInstance {
    id: InstanceId,
    mesh: MeshHandle,
    transform: Transform,
    current_scale: Vec3,
    growth_rate: f32,
    target_scale: f32,
}

impl FlowerInstance {
    pub(crate) fn sprout(
        id: InstanceId,
        mesh: MeshHandle,
        transform: Transform,
        target_scale: f32,
    ) -> Self {
        Self {
            id,
            mesh,
            transform,
            current_scale: Vec3::ZERO,
            growth_rate: 0.0,
            target_scale,
        }
    }

    /// Identity.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Mesh shared with the template.
    #[must_use]
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// Placement.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current per-axis scale; all three components are always equal.
    #[must_use]
    pub fn current_scale(&self) -> Vec3 {
        self.current_scale
    }

    /// Amount added to each scale component on the most recent tick.
    #[must_use]
    pub fn growth_rate(&self) -> f32 {
        self.growth_rate
    }

    /// Scale ceiling, fixed at spawn.
    #[must_use]
    pub fn target_scale(&self) -> f32 {
        self.target_scale
    }

    /// Whether the flower has reached its ceiling.
    #[must_use]
    pub fn is_fully_grown(&self) -> bool {
        self.current_scale.x >= self.target_scale
    }

    /// Model matrix for drawing.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.current_scale,
            self.transform.rotation(),
            self.transform.position,
        )
    }

    /// Accelerate by `step` and grow, capped at the ceiling.
    pub(crate) fn grow(&mut self, step: f32) {
        self.growth_rate += step.max(0.0);
        let grown = self.current_scale + Vec3::splat(self.growth_rate);
        self.current_scale = grown.min(Vec3::splat(self.target_scale));
    }
}
