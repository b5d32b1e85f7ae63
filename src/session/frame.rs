use super::{ArSession, RenderArgs, ResizeArgs, UpdateArgs};
use crate::camera::aspect_ratio;
use crate::host::Host;
use crate::picking::Viewport;
use crate::util::random::RandomSource;

impl<H: Host, R: RandomSource> ArSession<H, R> {
    /// Apply this frame's tracking sample to the camera and marker.
    ///
    /// Uses `reality` when present, else `face_controller`; with neither,
    /// nothing changes.
    pub fn update(&mut self, args: &UpdateArgs) {
        if !self.flags.engaged {
            return;
        }
        let Some(sample) = args.process_cpu_result.source() else {
            return;
        };
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        if let Some(visible) = self.pose.sync(camera, sample) {
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.marker.visible = visible;
            }
        }
    }

    /// Draw one frame: clear depth over the camera feed, optionally flush,
    /// grow every flower by one tick, then draw.
    pub fn render(&mut self, args: RenderArgs) {
        if !self.flags.engaged {
            return;
        }
        let Some(camera) = self.camera.as_ref() else {
            return;
        };

        self.host.clear_depth();
        if args.needs_prerender_finish {
            self.host.finish();
        }

        if self.flags.asset_ready && !self.scene.flowers().is_empty() {
            self.scene
                .flowers_mut()
                .advance(&mut self.rng, &self.options.growth);
        }

        self.host.draw(&self.scene, camera);
        self.scene.mark_rendered();

        if self.options.marker.overlay {
            if let Some(overlay) = self.overlay.as_ref() {
                self.host.draw_marker(overlay);
            }
        }
    }

    /// Track new canvas dimensions.
    ///
    /// Camera aspect is only recomputed when
    /// `camera.recompute_aspect_on_resize` is set.
    pub fn resize(&mut self, args: ResizeArgs) {
        if !self.flags.engaged {
            return;
        }
        self.viewport = Viewport::new(args.canvas_width, args.canvas_height);
        self.host.set_size(args.canvas_width, args.canvas_height);

        if self.options.camera.recompute_aspect_on_resize {
            let aspect = aspect_ratio(args.canvas_width, args.canvas_height);
            if let Some(camera) = self.camera.as_mut() {
                camera.set_aspect(aspect);
            }
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.camera.set_aspect(aspect);
            }
        }
        log::debug!(
            "resized to {}x{}",
            args.canvas_width,
            args.canvas_height
        );
    }

    /// Disengage. Scene and flowers are kept for a later `init`.
    pub fn detach(&mut self) {
        if !self.flags.engaged {
            return;
        }
        self.flags.engaged = false;
        log::info!(
            "session detached with {} flowers",
            self.scene.flowers().len()
        );
    }
}
