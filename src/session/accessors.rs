use super::{ArSession, Lifecycle, SessionFlags, XrScene};
use crate::camera::ArCamera;
use crate::marker::MarkerScene;
use crate::options::Options;
use crate::picking::Viewport;
use crate::scene::{FlowerTemplate, Scene};

impl<H, R> ArSession<H, R> {
    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> Lifecycle {
        self.flags.lifecycle()
    }

    /// Engaged and asset-ready gates.
    #[must_use]
    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    /// Options the session was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The world scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The tracked camera, once `init` has run.
    #[must_use]
    pub fn camera(&self) -> Option<&ArCamera> {
        self.camera.as_ref()
    }

    /// The marker overlay, once `init` has run.
    #[must_use]
    pub fn overlay(&self) -> Option<&MarkerScene> {
        self.overlay.as_ref()
    }

    /// The prepared template, once loaded.
    #[must_use]
    pub fn template(&self) -> Option<&FlowerTemplate> {
        self.template.as_ref()
    }

    /// Canvas dimensions used for hit-testing.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Particle budget handed to the renderer.
    #[must_use]
    pub fn particle_budget(&self) -> u32 {
        self.particle_budget
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Scene and camera for the host to render. `None` before `init`.
    #[must_use]
    pub fn xr_scene(&self) -> Option<XrScene<'_>> {
        self.camera.as_ref().map(|camera| XrScene {
            scene: &self.scene,
            camera,
        })
    }
}
