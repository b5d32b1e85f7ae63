//! Recorded or synthetic sessions driven through the pipeline hooks.
//!
//! A replay is a canvas size, the frame at which the template "finishes
//! loading", and a list of frames. Each frame carries the tracking results
//! and optionally a touch or a resize. Replays are JSON so captures from a
//! device can be fed straight back in.

use std::f32::consts::TAU;
use std::path::Path;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{ProcessCpuResult, TrackingSample};
use crate::error::MarigoldError;
use crate::host::{CanvasHandle, GraphicsContext, Host};
use crate::input::TouchEvent;
use crate::pipeline::{DeviceEstimate, PipelineModule};
use crate::scene::FlowerTemplate;
use crate::session::{InitOptions, ResizeArgs, TouchOutcome, UpdateArgs};
use crate::util::random::RandomSource;

const ORBIT_RADIUS: f32 = 2.0;
const ORBIT_HEIGHT: f32 = 1.5;
const ORBIT_FOVY_DEGREES: f32 = 60.0;
const ORBIT_TAP_EVERY: usize = 20;
const ORBIT_TEMPLATE_FRAME: usize = 3;

/// One recorded frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplayFrame {
    /// Tracking results delivered to `on_update`.
    pub process_cpu_result: ProcessCpuResult,
    /// Touch-start delivered after the update.
    pub touch: Option<TouchEvent>,
    /// Canvas resize delivered before the update.
    pub resize: Option<ResizeArgs>,
}

/// A whole recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replay {
    /// Initial canvas width.
    pub canvas_width: u32,
    /// Initial canvas height.
    pub canvas_height: u32,
    /// Device the capture came from.
    #[serde(default)]
    pub device: DeviceEstimate,
    /// Frame index at which the template is delivered. `None`: never.
    #[serde(default)]
    pub template_loaded_at: Option<usize>,
    /// Frames in order.
    #[serde(default)]
    pub frames: Vec<ReplayFrame>,
}

/// What a replay run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Frames rendered.
    pub frames: usize,
    /// Single-finger touches delivered.
    pub taps: usize,
    /// Taps whose ray missed the ground.
    pub misses: usize,
    /// Taps rejected because the template had not loaded.
    pub not_ready: usize,
    /// Recenter gestures.
    pub recenters: usize,
    /// Flowers planted in total.
    pub spawned: usize,
    /// Flowers in the scene at the end.
    pub flowers: usize,
    /// Of those, flowers at full size.
    pub fully_grown: usize,
}

impl Replay {
    /// Decode a JSON replay.
    pub fn from_json(content: &str) -> Result<Self, MarigoldError> {
        serde_json::from_str(content)
            .map_err(|e| MarigoldError::Replay(e.to_string()))
    }

    /// Read and decode a JSON replay file.
    pub fn load(path: &Path) -> Result<Self, MarigoldError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Encode as pretty JSON.
    pub fn to_json(&self) -> Result<String, MarigoldError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MarigoldError::Replay(e.to_string()))
    }

    /// A device circling the origin, tilted down at it, tapping the center
    /// of the screen every few frames.
    #[must_use]
    pub fn synthetic_orbit(frame_count: usize, width: u32, height: u32) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        let intrinsics = Mat4::perspective_rh_gl(
            ORBIT_FOVY_DEGREES.to_radians(),
            aspect,
            0.01,
            1000.0,
        )
        .to_cols_array();
        let pitch = -(ORBIT_HEIGHT / ORBIT_RADIUS).atan();

        let frames = (0..frame_count)
            .map(|i| {
                let angle = TAU * i as f32 / frame_count.max(1) as f32;
                let sample = TrackingSample::from_intrinsics(intrinsics)
                    .with_rotation(
                        Quat::from_rotation_y(angle) * Quat::from_rotation_x(pitch),
                    )
                    .with_position(Vec3::new(
                        ORBIT_RADIUS * angle.sin(),
                        ORBIT_HEIGHT,
                        ORBIT_RADIUS * angle.cos(),
                    ));
                let touch = (i % ORBIT_TAP_EVERY == ORBIT_TAP_EVERY - 1).then(|| {
                    TouchEvent::single(width as f32 * 0.5, height as f32 * 0.5)
                });
                ReplayFrame {
                    process_cpu_result: ProcessCpuResult {
                        reality: Some(sample),
                        face_controller: None,
                    },
                    touch,
                    resize: None,
                }
            })
            .collect();

        Self {
            canvas_width: width,
            canvas_height: height,
            device: DeviceEstimate::default(),
            template_loaded_at: Some(ORBIT_TEMPLATE_FRAME),
            frames,
        }
    }

    /// Init options matching the recorded canvas.
    #[must_use]
    pub fn init_options(&self) -> InitOptions {
        InitOptions {
            canvas: CanvasHandle::default(),
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            graphics_context: GraphicsContext::default(),
            count: None,
        }
    }

    /// Play every frame through `module`: start, then per frame resize,
    /// template delivery, update, touch, render.
    pub fn run<H: Host, R: RandomSource>(
        &self,
        module: &mut PipelineModule<H, R>,
        template: &FlowerTemplate,
    ) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        module.on_start(Some(self.init_options()));

        for (index, frame) in self.frames.iter().enumerate() {
            if let Some(resize) = frame.resize {
                module.on_canvas_size_change(resize);
            }
            if self.template_loaded_at == Some(index) {
                module.session_mut().on_template_loaded(template.clone());
            }
            module.on_update(&UpdateArgs {
                process_cpu_result: frame.process_cpu_result,
            });
            if let Some(touch) = &frame.touch {
                match module.session_mut().handle_touch(touch) {
                    TouchOutcome::Spawned(count) => {
                        summary.taps += 1;
                        summary.spawned += count;
                    }
                    TouchOutcome::Missed => {
                        summary.taps += 1;
                        summary.misses += 1;
                    }
                    TouchOutcome::NotReady => {
                        summary.taps += 1;
                        summary.not_ready += 1;
                    }
                    TouchOutcome::Recentered => summary.recenters += 1,
                    TouchOutcome::Ignored => {}
                }
            }
            module.on_render();
            summary.frames += 1;

            log::debug!(
                "frame {index}: {} flowers",
                module.session().scene().flowers().len()
            );
        }

        let flowers = module.session().scene().flowers();
        summary.flowers = flowers.len();
        summary.fully_grown =
            flowers.iter().filter(|flower| flower.is_fully_grown()).count();
        summary
    }
}
