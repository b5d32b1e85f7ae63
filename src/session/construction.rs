use super::{ArSession, InitOptions};
use crate::camera::{aspect_ratio, ArCamera};
use crate::host::{CanvasHandle, GraphicsContext, Host, RendererSettings};
use crate::marker::MarkerScene;
use crate::picking::Viewport;
use crate::scene::{AmbientLight, GroundPlane, SceneNode};
use crate::util::random::RandomSource;

impl<H: Host, R: RandomSource> ArSession<H, R> {
    /// Build the scene and engage.
    ///
    /// `None` means the host has not got a canvas and context yet; that and
    /// a second call while engaged are silent no-ops. Steps run in a fixed
    /// order: ground, light, size capture, renderer setup and touch
    /// listener, template request, camera and tracker hand-off, marker.
    ///
    /// After a `detach` the static nodes are rebuilt and placed flowers are
    /// kept.
    pub fn init(&mut self, options: Option<InitOptions>) {
        let Some(init) = options else {
            return;
        };
        if self.flags.engaged {
            return;
        }

        self.scene.clear_static();
        self.build_ground();
        self.build_lights();

        self.viewport = Viewport::new(init.canvas_width, init.canvas_height);
        self.particle_budget = init
            .count
            .filter(|&count| count > 0)
            .unwrap_or(self.options.scene.particle_budget);
        self.configure_renderer(init.canvas, init.graphics_context);

        self.request_template();
        self.build_camera();
        self.build_marker();

        self.flags.engaged = true;
        log::info!(
            "session engaged: {}x{}, {} flowers carried over",
            init.canvas_width,
            init.canvas_height,
            self.scene.flowers().len()
        );
    }

    fn build_ground(&mut self) {
        let ground = GroundPlane {
            extent: self.options.scene.ground_extent,
            shadow_opacity: self.options.scene.shadow_opacity,
            ..GroundPlane::default()
        };
        self.scene.add(SceneNode::Ground(ground));
    }

    fn build_lights(&mut self) {
        self.scene.add(SceneNode::AmbientLight(AmbientLight {
            color: self.options.scene.ambient_color,
            intensity: self.options.scene.ambient_intensity,
        }));
    }

    fn configure_renderer(
        &mut self,
        canvas: CanvasHandle,
        context: GraphicsContext,
    ) {
        let settings = RendererSettings {
            antialias: true,
            alpha: true,
            auto_clear: false,
            width: self.viewport.width,
            height: self.viewport.height,
            particle_budget: self.particle_budget,
        };
        self.host.configure(canvas, context, &settings);
        self.host.register_touch_listener(canvas);
        log::debug!(
            "renderer configured: {}x{}, particle budget {}",
            settings.width,
            settings.height,
            settings.particle_budget
        );
    }

    fn request_template(&mut self) {
        if self.flags.asset_ready {
            return;
        }
        self.host.request_template(&self.options.scene.template_source);
    }

    fn build_camera(&mut self) {
        let camera = ArCamera::from_options(
            &self.options.camera,
            aspect_ratio(self.viewport.width, self.viewport.height),
        );
        self.host
            .update_camera_projection_matrix(camera.position, camera.rotation);
        self.scene.add(SceneNode::Camera);
        self.camera = Some(camera);
    }

    fn build_marker(&mut self) {
        self.overlay = Some(MarkerScene::new(
            &self.options.marker,
            &self.options.camera,
            self.viewport.width,
            self.viewport.height,
        ));
    }
}
