//! The lifecycle controller.
//!
//! [`ArSession`] owns the world scene, the tracked camera, the marker overlay
//! and the placement/growth state, and reacts to the host's callbacks. It is
//! a plain value: the host passes `&mut` to it from its single event loop.
//!
//! Every callback except `init` is a no-op while the session is idle, and
//! placement and growth additionally wait for the template to load.

mod accessors;
mod args;
mod construction;
mod frame;
mod touch;

use std::fmt;

pub use args::{
    InitOptions, Lifecycle, RenderArgs, ResizeArgs, SessionFlags,
    TouchOutcome, UpdateArgs,
};
use rand::rngs::StdRng;

use crate::camera::{ArCamera, PoseSynchronizer};
use crate::host::Host;
use crate::marker::{MarkerGate, MarkerScene};
use crate::options::Options;
use crate::picking::Viewport;
use crate::scene::{FlowerTemplate, PlacementSpawner, RetentionPolicy, Scene};
use crate::util::random::{RandomSource, RngSource};

/// What the host renders: the world scene seen through the tracked camera.
#[derive(Debug, Clone, Copy)]
pub struct XrScene<'a> {
    /// World scene.
    pub scene: &'a Scene,
    /// Primary camera.
    pub camera: &'a ArCamera,
}

/// AR scene controller for one canvas.
pub struct ArSession<H, R = RngSource<StdRng>> {
    host: H,
    rng: R,
    options: Options,
    flags: SessionFlags,
    scene: Scene,
    camera: Option<ArCamera>,
    overlay: Option<MarkerScene>,
    viewport: Viewport,
    particle_budget: u32,
    template: Option<FlowerTemplate>,
    pose: PoseSynchronizer,
    spawner: PlacementSpawner,
}

impl<H: fmt::Debug, R> fmt::Debug for ArSession<H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArSession")
            .field("host", &self.host)
            .field("flags", &self.flags)
            .field("scene", &self.scene)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl<H: Host> ArSession<H> {
    /// Idle session drawing randomness from the standard generator, seeded
    /// from `options.seed` when set.
    #[must_use]
    pub fn new(host: H, options: Options) -> Self {
        let rng = RngSource::seeded(options.seed);
        Self::with_random(host, rng, options)
    }
}

impl<H: Host, R: RandomSource> ArSession<H, R> {
    /// Idle session drawing randomness from `rng`.
    #[must_use]
    pub fn with_random(host: H, rng: R, options: Options) -> Self {
        let pose =
            PoseSynchronizer::new(MarkerGate::new(options.marker.tilt_threshold));
        let spawner = PlacementSpawner::new(options.placement.clone());
        Self {
            host,
            rng,
            particle_budget: options.scene.particle_budget,
            options,
            flags: SessionFlags::default(),
            scene: Scene::new(),
            camera: None,
            overlay: None,
            viewport: Viewport::default(),
            template: None,
            pose,
            spawner,
        }
    }

    /// Replace the flower retention policy.
    pub fn set_retention(&mut self, retention: Box<dyn RetentionPolicy>) {
        self.scene.flowers_mut().set_retention(retention);
    }

    /// Store the loaded template and open the placement and growth gates.
    ///
    /// The template is collapsed to zero scale so clones start invisible.
    /// A later delivery replaces the template for future spawns only.
    pub fn on_template_loaded(&mut self, mut template: FlowerTemplate) {
        template.prepare(self.options.scene.emissive_intensity);
        log::info!("flower template loaded (mesh {:?})", template.mesh);
        self.template = Some(template);
        self.flags.asset_ready = true;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_4;

    use glam::{Mat4, Quat, Vec3};

    use super::*;
    use crate::camera::{ProcessCpuResult, TrackingSample};
    use crate::host::{CanvasHandle, GraphicsContext, HeadlessHost};
    use crate::input::{TouchEvent, TouchPoint};
    use crate::scene::{AmbientLight, FlowerInstance, MeshHandle, SceneNode};
    use crate::util::random::SequenceSource;

    type TestSession = ArSession<HeadlessHost, SequenceSource>;

    fn session_with(options: Options, draws: &[f32]) -> TestSession {
        ArSession::with_random(
            HeadlessHost::default(),
            SequenceSource::new(draws.to_vec()),
            options,
        )
    }

    fn session(draws: &[f32]) -> TestSession {
        session_with(Options::default(), draws)
    }

    fn init_options(width: u32, height: u32) -> InitOptions {
        InitOptions {
            canvas: CanvasHandle(1),
            canvas_width: width,
            canvas_height: height,
            graphics_context: GraphicsContext(2),
            count: None,
        }
    }

    fn engaged(draws: &[f32]) -> TestSession {
        let mut s = session(draws);
        s.init(Some(init_options(800, 600)));
        s
    }

    fn intrinsics() -> [f32; 16] {
        Mat4::perspective_rh_gl(75_f32.to_radians(), 800.0 / 600.0, 0.1, 1000.0)
            .to_cols_array()
    }

    /// Sample that leaves the camera at y = 3 looking 45 degrees down.
    fn pitched_update() -> UpdateArgs {
        UpdateArgs {
            process_cpu_result: ProcessCpuResult {
                reality: Some(
                    TrackingSample::from_intrinsics(intrinsics())
                        .with_rotation(Quat::from_rotation_x(-FRAC_PI_4))
                        .with_position(Vec3::new(0.0, 3.0, 0.0)),
                ),
                face_controller: None,
            },
        }
    }

    fn loaded<R: RandomSource>(s: &mut ArSession<HeadlessHost, R>) {
        s.on_template_loaded(FlowerTemplate::new(MeshHandle(9)));
    }

    #[test]
    fn new_session_is_idle() {
        let s = session(&[]);
        assert_eq!(s.state(), Lifecycle::Idle);
        assert_eq!(s.flags(), SessionFlags::default());
        assert!(s.camera().is_none());
        assert!(s.xr_scene().is_none());
        assert_eq!(s.scene().child_count(), 0);
    }

    #[test]
    fn init_builds_scene_in_order() {
        let s = engaged(&[]);
        assert_eq!(s.state(), Lifecycle::Engaged);
        assert!(matches!(
            s.scene().nodes(),
            [
                SceneNode::Ground(_),
                SceneNode::AmbientLight(_),
                SceneNode::Camera
            ]
        ));
        let lights: Vec<AmbientLight> = s
            .scene()
            .nodes()
            .iter()
            .filter_map(|node| match node {
                SceneNode::AmbientLight(light) => Some(*light),
                _ => None,
            })
            .collect();
        assert_eq!(
            lights,
            vec![AmbientLight {
                color: 0x00ff_ffff,
                intensity: 0.8
            }]
        );

        let settings = s.host().settings.unwrap();
        assert!(settings.antialias);
        assert!(settings.alpha);
        assert!(!settings.auto_clear);
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.particle_budget, 3000);

        assert_eq!(s.host().touch_listeners, vec![CanvasHandle(1)]);
        assert_eq!(
            s.host().template_requests,
            vec!["assets/models/marigold.glb".to_owned()]
        );
        assert_eq!(
            s.host().projection_handoffs,
            vec![(Vec3::new(0.0, 3.0, 0.0), Quat::IDENTITY)]
        );

        let camera = s.camera().unwrap();
        assert_eq!(camera.fovy, 75.0);
        assert_eq!(camera.aspect, 800.0 / 600.0);
        assert_eq!(camera.znear, 0.1);
        assert_eq!(camera.zfar, 1000.0);
        assert_eq!(camera.position, Vec3::new(0.0, 3.0, 0.0));

        let overlay = s.overlay().unwrap();
        assert!(!overlay.marker.visible);
        assert_eq!(s.viewport(), Viewport::new(800, 600));
    }

    #[test]
    fn init_without_options_stays_idle() {
        let mut s = session(&[]);
        s.init(None);
        assert_eq!(s.state(), Lifecycle::Idle);
        assert_eq!(s.host(), &HeadlessHost::default());
    }

    #[test]
    fn second_init_is_a_no_op() {
        let mut s = engaged(&[]);
        let children = s.scene().child_count();
        let host = s.host().clone();

        s.init(Some(init_options(1024, 768)));

        assert_eq!(s.scene().child_count(), children);
        assert_eq!(s.scene().camera_count(), 1);
        assert_eq!(s.host(), &host);
        assert_eq!(s.viewport(), Viewport::new(800, 600));
    }

    #[test]
    fn particle_budget_falls_back_to_default() {
        let mut s = session(&[]);
        s.init(Some(InitOptions {
            count: Some(500),
            ..init_options(800, 600)
        }));
        assert_eq!(s.particle_budget(), 500);
        assert_eq!(s.host().settings.unwrap().particle_budget, 500);

        let mut s = session(&[]);
        s.init(Some(InitOptions {
            count: Some(0),
            ..init_options(800, 600)
        }));
        assert_eq!(s.particle_budget(), 3000);
    }

    #[test]
    fn callbacks_are_inert_while_idle() {
        let mut s = session(&[0.5]);
        loaded(&mut s);
        s.update(&pitched_update());
        s.render(RenderArgs {
            needs_prerender_finish: true,
        });
        s.resize(ResizeArgs {
            canvas_width: 10,
            canvas_height: 10,
        });
        assert_eq!(s.handle_touch(&TouchEvent::single(400.0, 300.0)), TouchOutcome::Ignored);
        assert_eq!(s.host(), &HeadlessHost::default());
        assert_eq!(s.viewport(), Viewport::default());
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut s = engaged(&[]);
        let before = s.camera().cloned();
        s.update(&UpdateArgs::default());
        assert_eq!(s.camera().cloned(), before);
        assert!(!s.overlay().unwrap().marker.visible);
    }

    #[test]
    fn update_syncs_camera_and_marker() {
        let mut s = engaged(&[]);
        s.update(&pitched_update());
        let camera = s.camera().unwrap();
        assert_eq!(camera.projection().to_cols_array(), intrinsics());
        assert_eq!(camera.rotation, Quat::from_rotation_x(-FRAC_PI_4));
        assert!(s.overlay().unwrap().marker.visible);

        // no rotation: visibility is left alone
        let mut args = pitched_update();
        if let Some(sample) = args.process_cpu_result.reality.as_mut() {
            sample.rotation = None;
        }
        s.update(&args);
        assert!(s.overlay().unwrap().marker.visible);

        let mut args = pitched_update();
        if let Some(sample) = args.process_cpu_result.reality.as_mut() {
            sample.rotation = Some(Quat::IDENTITY);
        }
        s.update(&args);
        assert!(!s.overlay().unwrap().marker.visible);
    }

    #[test]
    fn update_prefers_reality_then_face_controller() {
        let mut s = engaged(&[]);
        let reality =
            TrackingSample::from_intrinsics(intrinsics()).with_position(Vec3::X);
        let face =
            TrackingSample::from_intrinsics(intrinsics()).with_position(Vec3::Y);

        s.update(&UpdateArgs {
            process_cpu_result: ProcessCpuResult {
                reality: Some(reality),
                face_controller: Some(face),
            },
        });
        assert_eq!(s.camera().unwrap().position, Vec3::X);

        s.update(&UpdateArgs {
            process_cpu_result: ProcessCpuResult {
                reality: None,
                face_controller: Some(face),
            },
        });
        assert_eq!(s.camera().unwrap().position, Vec3::Y);
    }

    #[test]
    fn center_tap_plants_a_scripted_batch() {
        // heading 0.5 -> 180 deg; count 0.0 -> 1; scatter 0,0,0 -> radius 0;
        // ceiling 0.5 -> 2.25
        let mut s = engaged(&[0.5, 0.0, 0.0, 0.0, 0.0, 0.5]);
        loaded(&mut s);
        s.update(&pitched_update());
        let before = s.scene().child_count();

        let outcome = s.handle_touch(&TouchEvent::single(400.0, 300.0));

        assert_eq!(outcome, TouchOutcome::Spawned(1));
        assert_eq!(s.scene().child_count(), before + 1);
        let flower = &s.scene().flowers().as_slice()[0];
        let position = flower.transform().position;
        assert!((position - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-3, "{position}");
        assert_eq!(flower.transform().rotation_y_degrees, 180.0);
        assert_eq!(flower.target_scale(), 2.25);
        assert_eq!(flower.current_scale(), Vec3::ZERO);
        assert_eq!(flower.mesh(), MeshHandle(9));
    }

    #[test]
    fn hit_test_reports_ground_point() {
        let mut s = engaged(&[]);
        s.update(&pitched_update());
        let hit = s.hit_test(400.0, 300.0).unwrap();
        assert!((hit - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-3);
    }

    #[test]
    fn tap_above_horizon_misses() {
        let mut s = engaged(&[0.5]);
        loaded(&mut s);
        // level camera: the center ray runs parallel to the ground
        assert_eq!(
            s.handle_touch(&TouchEvent::single(400.0, 300.0)),
            TouchOutcome::Missed
        );
        assert!(s.scene().flowers().is_empty());
    }

    #[test]
    fn tap_before_template_is_not_ready() {
        let mut s = engaged(&[0.5]);
        s.update(&pitched_update());
        assert_eq!(
            s.handle_touch(&TouchEvent::single(400.0, 300.0)),
            TouchOutcome::NotReady
        );
        assert!(s.scene().flowers().is_empty());
    }

    #[test]
    fn two_fingers_recenter_without_planting() {
        let mut s = engaged(&[0.5]);
        loaded(&mut s);
        s.update(&pitched_update());
        let two = TouchEvent::with_touches(vec![
            TouchPoint::new(400.0, 300.0),
            TouchPoint::new(420.0, 310.0),
        ]);
        assert_eq!(s.handle_touch(&two), TouchOutcome::Recentered);
        assert_eq!(s.host().recenters, 1);
        assert!(s.scene().flowers().is_empty());
    }

    #[test]
    fn three_fingers_and_none_are_ignored() {
        let mut s = engaged(&[0.5]);
        loaded(&mut s);
        s.update(&pitched_update());
        let children = s.scene().child_count();
        let three = TouchEvent::with_touches(vec![TouchPoint::new(400.0, 300.0); 3]);
        assert_eq!(s.handle_touch(&three), TouchOutcome::Ignored);
        assert_eq!(
            s.handle_touch(&TouchEvent::with_touches(Vec::new())),
            TouchOutcome::Ignored
        );
        assert_eq!(s.scene().child_count(), children);
        assert_eq!(s.host().recenters, 0);
    }

    #[test]
    fn render_waits_for_template_before_growing() {
        let mut s = engaged(&[0.5]);
        s.update(&pitched_update());
        s.render(RenderArgs::default());
        assert_eq!(s.host().depth_clears, 1);
        assert_eq!(s.host().finishes, 0);
        assert_eq!(s.host().draws, 1);
        assert!(!s.scene().is_dirty());

        loaded(&mut s);
        assert_eq!(s.handle_touch(&TouchEvent::single(400.0, 300.0)), TouchOutcome::Spawned(3));
        s.render(RenderArgs {
            needs_prerender_finish: true,
        });
        assert_eq!(s.host().finishes, 1);
        assert_eq!(s.host().last_drawn_flowers, 3);
        assert!(s
            .scene()
            .flowers()
            .iter()
            .all(|f| (f.growth_rate() - 0.025).abs() < 1e-6));
    }

    #[test]
    fn unchanged_scene_is_not_reuploaded() {
        let mut s = engaged(&[0.5]);
        s.update(&pitched_update());
        s.render(RenderArgs::default());
        s.render(RenderArgs::default());
        assert_eq!(s.host().draws, 2);
        assert_eq!(s.host().scene_uploads, 1);

        loaded(&mut s);
        let _ = s.handle_touch(&TouchEvent::single(400.0, 300.0));
        s.render(RenderArgs::default());
        assert_eq!(s.host().scene_uploads, 2);
        // growing flowers change the scene every frame
        s.render(RenderArgs::default());
        assert_eq!(s.host().scene_uploads, 3);
    }

    #[test]
    fn growth_reaches_ceiling_and_stops() {
        let mut s = engaged(&[0.5]);
        loaded(&mut s);
        s.update(&pitched_update());
        let _ = s.handle_touch(&TouchEvent::single(400.0, 300.0));
        for _ in 0..100 {
            s.render(RenderArgs::default());
        }
        assert!(s.scene().flowers().iter().all(FlowerInstance::is_fully_grown));
        let scales: Vec<Vec3> =
            s.scene().flowers().iter().map(FlowerInstance::current_scale).collect();
        s.render(RenderArgs::default());
        let after: Vec<Vec3> =
            s.scene().flowers().iter().map(FlowerInstance::current_scale).collect();
        assert_eq!(scales, after);
    }

    #[test]
    fn marker_overlay_drawn_only_when_enabled() {
        let mut s = engaged(&[]);
        s.update(&pitched_update());
        s.render(RenderArgs::default());
        assert_eq!(s.host().marker_draws, 0);

        let mut options = Options::default();
        options.marker.overlay = true;
        let mut s = session_with(options, &[]);
        s.init(Some(init_options(800, 600)));
        s.update(&pitched_update());
        s.render(RenderArgs::default());
        assert_eq!(s.host().marker_draws, 1);
    }

    #[test]
    fn resize_keeps_aspect_by_default() {
        let mut s = engaged(&[]);
        s.resize(ResizeArgs {
            canvas_width: 600,
            canvas_height: 800,
        });
        assert_eq!(s.viewport(), Viewport::new(600, 800));
        assert_eq!(s.host().size, (600, 800));
        assert_eq!(s.camera().unwrap().aspect, 800.0 / 600.0);
    }

    #[test]
    fn resize_recomputes_aspect_when_enabled() {
        let mut options = Options::default();
        options.camera.recompute_aspect_on_resize = true;
        let mut s = session_with(options, &[]);
        s.init(Some(init_options(800, 600)));
        s.resize(ResizeArgs {
            canvas_width: 600,
            canvas_height: 800,
        });
        assert_eq!(s.camera().unwrap().aspect, 600.0 / 800.0);
        assert_eq!(s.overlay().unwrap().camera.aspect, 600.0 / 800.0);
    }

    #[test]
    fn detach_gates_callbacks_and_reinit_keeps_flowers() {
        let mut s = engaged(&[0.5]);
        loaded(&mut s);
        s.update(&pitched_update());
        let _ = s.handle_touch(&TouchEvent::single(400.0, 300.0));
        let flowers = s.scene().flowers().len();

        s.detach();
        assert_eq!(s.state(), Lifecycle::Idle);
        let draws = s.host().draws;
        s.render(RenderArgs::default());
        assert_eq!(s.host().draws, draws);
        assert_eq!(
            s.handle_touch(&TouchEvent::single(400.0, 300.0)),
            TouchOutcome::Ignored
        );

        s.init(Some(init_options(800, 600)));
        assert_eq!(s.state(), Lifecycle::Engaged);
        assert_eq!(s.scene().camera_count(), 1);
        assert_eq!(s.scene().nodes().len(), 3);
        assert_eq!(s.scene().flowers().len(), flowers);
        assert!(s.flags().asset_ready);
        // template already loaded: not requested again
        assert_eq!(s.host().template_requests.len(), 1);
    }

    #[test]
    fn retention_policy_applies_after_batches() {
        struct Cap;
        impl RetentionPolicy for Cap {
            fn retain(&mut self, flowers: &mut Vec<FlowerInstance>) {
                flowers.truncate(1);
            }
        }

        let mut s = engaged(&[0.5]);
        s.set_retention(Box::new(Cap));
        loaded(&mut s);
        s.update(&pitched_update());
        assert_eq!(
            s.handle_touch(&TouchEvent::single(400.0, 300.0)),
            TouchOutcome::Spawned(3)
        );
        assert_eq!(s.scene().flowers().len(), 1);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let mut options = Options::default();
        options.seed = Some(42);
        let run = || {
            let mut s = ArSession::new(HeadlessHost::default(), options.clone());
            s.init(Some(init_options(800, 600)));
            loaded(&mut s);
            s.update(&pitched_update());
            let _ = s.handle_touch(&TouchEvent::single(400.0, 300.0));
            s.render(RenderArgs::default());
            s.scene().flowers().as_slice().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn xr_scene_exposes_scene_and_camera() {
        let s = engaged(&[]);
        let xr = s.xr_scene().unwrap();
        assert_eq!(xr.scene.camera_count(), 1);
        assert_eq!(xr.camera.position, Vec3::new(0.0, 3.0, 0.0));
    }
}
