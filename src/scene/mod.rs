//! Authoritative world scene: static dressing plus the placed flowers.
//!
//! The static nodes (ground, light, camera slot) are rebuilt on every init;
//! the flowers live in a [`GrowthRegistry`] for the whole session.

mod instance;
mod registry;
mod spawner;

use glam::Vec3;
pub use instance::{
    FlowerInstance, FlowerTemplate, InstanceId, MeshHandle, Transform,
};
pub use registry::{GrowthRegistry, KeepAll, RetentionPolicy};
pub use spawner::PlacementSpawner;

use crate::picking::Plane;

// ---------------------------------------------------------------------------
// Static nodes
// ---------------------------------------------------------------------------

/// Shadow-catching reference surface through the origin, facing up.
///
/// Never drawn to color; only receives shadows and serves as the hit-test
/// target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// The plane `y = 0`.
    pub plane: Plane,
    /// Side length of the square the surface is clipped to, centered on the
    /// origin. `None` for an unbounded surface.
    pub extent: Option<f32>,
    /// Opacity of cast shadows.
    pub shadow_opacity: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            plane: Plane::GROUND,
            extent: None,
            shadow_opacity: 0.5,
        }
    }
}

impl GroundPlane {
    /// Surface clipped to an `extent` x `extent` square.
    #[must_use]
    pub fn bounded(extent: f32) -> Self {
        Self {
            extent: Some(extent),
            ..Self::default()
        }
    }

    /// Whether a point on the plane lies within the surface bounds.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        self.extent.map_or(true, |extent| {
            let half = extent * 0.5;
            point.x.abs() <= half && point.z.abs() <= half
        })
    }
}

/// Uniform ambient light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// Color as `0xRRGGBB`.
    pub color: u32,
    /// Intensity.
    pub intensity: f32,
}

/// A static child of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneNode {
    /// The reference surface.
    Ground(GroundPlane),
    /// Ambient light.
    AmbientLight(AmbientLight),
    /// The primary camera's place in the graph.
    Camera,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The world scene. Owns static nodes and placed flowers.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    flowers: GrowthRegistry,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scene with a custom flower retention policy.
    #[must_use]
    pub fn with_retention(retention: Box<dyn RetentionPolicy>) -> Self {
        Self {
            flowers: GrowthRegistry::with_retention(retention),
            ..Self::default()
        }
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the renderer has consumed the current state.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Append a static node.
    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
        self.invalidate();
    }

    /// Drop all static nodes, keeping the flowers.
    pub fn clear_static(&mut self) {
        self.nodes.clear();
        self.invalidate();
    }

    /// Static nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// The reference surface, if the scene has been built.
    #[must_use]
    pub fn ground(&self) -> Option<&GroundPlane> {
        self.nodes.iter().find_map(|node| match node {
            SceneNode::Ground(ground) => Some(ground),
            _ => None,
        })
    }

    /// Number of camera nodes.
    #[must_use]
    pub fn camera_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, SceneNode::Camera))
            .count()
    }

    /// Static nodes plus flowers.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.nodes.len() + self.flowers.len()
    }

    /// Placed flowers.
    #[must_use]
    pub fn flowers(&self) -> &GrowthRegistry {
        &self.flowers
    }

    /// Mutable flowers; marks the scene dirty.
    pub fn flowers_mut(&mut self) -> &mut GrowthRegistry {
        self.invalidate();
        &mut self.flowers
    }
}
