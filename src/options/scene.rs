use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static scene dressing and the placeable asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Side length of the square the ground plane is clipped to. `None`
    /// means the plane extends forever.
    #[schemars(title = "Ground Extent")]
    pub ground_extent: Option<f32>,
    /// Opacity of the shadow-catching ground material.
    #[schemars(title = "Shadow Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub shadow_opacity: f32,
    /// Ambient light color as `0xRRGGBB`.
    #[schemars(skip)]
    pub ambient_color: u32,
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Decorative particle budget handed to the renderer when the host does
    /// not supply one.
    #[schemars(skip)]
    pub particle_budget: u32,
    /// Emissive intensity applied to the loaded template's materials.
    #[schemars(title = "Glow", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub emissive_intensity: f32,
    /// Asset path of the placeable template model.
    #[schemars(skip)]
    pub template_source: String,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            ground_extent: None,
            shadow_opacity: 0.5,
            ambient_color: 0x00ff_ffff,
            ambient_intensity: 0.8,
            particle_budget: 3000,
            emissive_intensity: 0.5,
            template_source: "assets/models/marigold.glb".into(),
        }
    }
}
