use glam::Vec3;

use super::{ArSession, TouchOutcome};
use crate::host::Host;
use crate::input::{TouchEvent, TouchGesture};
use crate::picking::hit_test;
use crate::util::random::{uniform, RandomSource};

impl<H: Host, R: RandomSource> ArSession<H, R> {
    /// React to a touch-start.
    ///
    /// One finger plants a batch where its ray meets the ground, two fingers
    /// recenter tracking, anything else is ignored.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> TouchOutcome {
        if !self.flags.engaged {
            return TouchOutcome::Ignored;
        }
        match TouchGesture::classify(event) {
            TouchGesture::Ignored => TouchOutcome::Ignored,
            TouchGesture::Recenter => {
                self.host.recenter();
                log::debug!("tracking recentered");
                TouchOutcome::Recentered
            }
            TouchGesture::Place(point) => {
                self.place_at(point.client_x, point.client_y)
            }
        }
    }

    /// Ground point under the canvas pixel, through the tracked camera.
    #[must_use]
    pub fn hit_test(&self, screen_x: f32, screen_y: f32) -> Option<Vec3> {
        let camera = self.camera.as_ref()?;
        let ground = self.scene.ground()?;
        hit_test(camera, self.viewport, ground, screen_x, screen_y)
    }

    fn place_at(&mut self, screen_x: f32, screen_y: f32) -> TouchOutcome {
        let Some(hit) = self.hit_test(screen_x, screen_y) else {
            log::debug!("touch at ({screen_x}, {screen_y}) missed the ground");
            return TouchOutcome::Missed;
        };
        if !self.flags.asset_ready {
            log::debug!("touch ignored: template still loading");
            return TouchOutcome::NotReady;
        }

        let heading = uniform(
            &mut self.rng,
            0.0,
            self.spawner.options().heading_range,
        );
        let ids = self.spawner.spawn(
            self.scene.flowers_mut(),
            self.template.as_ref(),
            &mut self.rng,
            hit,
            heading,
        );
        TouchOutcome::Spawned(ids.len())
    }
}
