//! Capabilities the session borrows from its host.
//!
//! The tracking engine, the renderer and the asset loader are external
//! collaborators. The session sees them only through these traits, so it can
//! run against the real AR runtime, a headless replay, or a test double.

use glam::{Quat, Vec3};

use crate::camera::ArCamera;
use crate::marker::MarkerScene;
use crate::scene::Scene;

/// Opaque handle to the host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanvasHandle(pub u32);

/// Opaque handle to the host graphics context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphicsContext(pub u32);

/// How the renderer should be set up on init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RendererSettings {
    /// Multisample the output.
    pub antialias: bool,
    /// Keep an alpha channel so the camera feed shows through.
    pub alpha: bool,
    /// Clear color before each draw. Off: the camera feed is drawn first.
    pub auto_clear: bool,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Decorative particle budget for renderer-side effects.
    pub particle_budget: u32,
}

/// The AR tracking engine, narrowed to what the session calls.
pub trait TrackingEngine {
    /// Reset tracking to the origin last handed over.
    fn recenter(&mut self);

    /// Tell the tracker where the virtual camera starts.
    fn update_camera_projection_matrix(&mut self, origin: Vec3, facing: Quat);
}

/// The rendering engine.
pub trait RenderBackend {
    /// Create the output surface on `canvas`.
    fn configure(
        &mut self,
        canvas: CanvasHandle,
        context: GraphicsContext,
        settings: &RendererSettings,
    );

    /// Start delivering touch events for `canvas` to the session.
    fn register_touch_listener(&mut self, canvas: CanvasHandle);

    /// Resize the output.
    fn set_size(&mut self, width: u32, height: u32);

    /// Clear the depth buffer, keeping the camera feed.
    fn clear_depth(&mut self);

    /// Block until queued GPU work completes.
    fn finish(&mut self);

    /// Draw the world scene through the tracked camera.
    ///
    /// `scene.is_dirty()` reports whether nodes or flowers changed since the
    /// previous draw, so instance data only needs re-uploading then.
    fn draw(&mut self, scene: &Scene, camera: &ArCamera);

    /// Draw the marker overlay.
    fn draw_marker(&mut self, overlay: &MarkerScene);
}

/// The asynchronous model loader. Completion is delivered back through
/// [`ArSession::on_template_loaded`](crate::session::ArSession::on_template_loaded).
pub trait TemplateLoader {
    /// Begin loading the template at `source`.
    fn request_template(&mut self, source: &str);
}

/// Everything a session needs from its host.
pub trait Host: TrackingEngine + RenderBackend + TemplateLoader {}

impl<T: TrackingEngine + RenderBackend + TemplateLoader> Host for T {}

/// Host without a GPU that records every call.
///
/// Used by the replay binary and the test suite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessHost {
    /// Settings from the last `configure`.
    pub settings: Option<RendererSettings>,
    /// Canvases a touch listener was registered on.
    pub touch_listeners: Vec<CanvasHandle>,
    /// Template sources requested.
    pub template_requests: Vec<String>,
    /// Camera origins handed to the tracker.
    pub projection_handoffs: Vec<(Vec3, Quat)>,
    /// Recenter requests.
    pub recenters: usize,
    /// Current output size.
    pub size: (u32, u32),
    /// Depth clears.
    pub depth_clears: usize,
    /// `finish` calls.
    pub finishes: usize,
    /// World draws.
    pub draws: usize,
    /// Draws that found the scene changed and re-uploaded it.
    pub scene_uploads: usize,
    /// Overlay draws in which the ring was visible.
    pub marker_draws: usize,
    /// Flower count seen by the most recent draw.
    pub last_drawn_flowers: usize,
}

impl TrackingEngine for HeadlessHost {
    fn recenter(&mut self) {
        self.recenters += 1;
    }

    fn update_camera_projection_matrix(&mut self, origin: Vec3, facing: Quat) {
        self.projection_handoffs.push((origin, facing));
    }
}

impl RenderBackend for HeadlessHost {
    fn configure(
        &mut self,
        _canvas: CanvasHandle,
        _context: GraphicsContext,
        settings: &RendererSettings,
    ) {
        self.settings = Some(*settings);
        self.size = (settings.width, settings.height);
    }

    fn register_touch_listener(&mut self, canvas: CanvasHandle) {
        self.touch_listeners.push(canvas);
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn clear_depth(&mut self) {
        self.depth_clears += 1;
    }

    fn finish(&mut self) {
        self.finishes += 1;
    }

    fn draw(&mut self, scene: &Scene, _camera: &ArCamera) {
        self.draws += 1;
        if scene.is_dirty() {
            self.scene_uploads += 1;
        }
        self.last_drawn_flowers = scene.flowers().len();
        log::trace!(
            "headless draw #{}: {} nodes, {} flowers",
            self.draws,
            scene.nodes().len(),
            self.last_drawn_flowers
        );
    }

    fn draw_marker(&mut self, overlay: &MarkerScene) {
        if overlay.marker.visible {
            self.marker_draws += 1;
        }
    }
}

impl TemplateLoader for HeadlessHost {
    fn request_template(&mut self, source: &str) {
        self.template_requests.push(source.to_owned());
    }
}
