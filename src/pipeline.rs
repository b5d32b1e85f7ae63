//! Adapter from the host's named-hook camera pipeline to [`ArSession`].
//!
//! The tracking engine drives modules through a fixed set of hooks. This
//! module maps each hook onto the session and resolves the device quirk that
//! decides whether a frame needs a GPU flush before drawing.

use serde::{Deserialize, Serialize};

use crate::host::Host;
use crate::session::{
    ArSession, InitOptions, RenderArgs, ResizeArgs, UpdateArgs, XrScene,
};
use crate::util::random::RandomSource;

/// Name the module registers under.
pub const MODULE_NAME: &str = "marigold-scene";

/// First iOS release whose WebGL path needs a flush after the depth clear.
const FINISH_SINCE: (u32, u32) = (15, 4);

/// The tracking engine's guess at the device.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceEstimate {
    /// Operating system name, e.g. `"iOS"`.
    pub os: String,
    /// Dotted version string, e.g. `"15.4.1"`.
    pub os_version: String,
}

impl DeviceEstimate {
    /// Estimate for `os` at `os_version`.
    #[must_use]
    pub fn new(os: impl Into<String>, os_version: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            os_version: os_version.into(),
        }
    }

    /// Whether frames on this device need `finish` before drawing.
    ///
    /// True on iOS 15.4 and later. Versions compare by major then minor;
    /// an unparseable version never needs the flush.
    #[must_use]
    pub fn needs_prerender_finish(&self) -> bool {
        self.os == "iOS"
            && parse_major_minor(&self.os_version)
                .is_some_and(|version| version >= FINISH_SINCE)
    }
}

/// Leading `major[.minor]` of a version string, ignoring anything after
/// the digits: `"15.4.1"` and `"15.4-beta"` both read as `(15, 4)`, and a
/// missing minor reads as zero.
///
/// The minor is an integer, not a decimal fraction, so `"15.10"` is newer
/// than `"15.4"`.
fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let (major, rest) = split_leading_digits(version.trim());
    let major = major.parse().ok()?;
    let minor = rest
        .strip_prefix('.')
        .and_then(|rest| split_leading_digits(rest).0.parse().ok())
        .unwrap_or(0);
    Some((major, minor))
}

fn split_leading_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// An [`ArSession`] behind the pipeline hooks.
#[derive(Debug)]
pub struct PipelineModule<H, R> {
    session: ArSession<H, R>,
    needs_prerender_finish: bool,
}

impl<H: Host, R: RandomSource> PipelineModule<H, R> {
    /// Wrap `session` for a device matching `device`.
    #[must_use]
    pub fn new(session: ArSession<H, R>, device: &DeviceEstimate) -> Self {
        let needs_prerender_finish = device.needs_prerender_finish();
        log::debug!(
            "{MODULE_NAME}: {} {} needs prerender finish: {needs_prerender_finish}",
            device.os,
            device.os_version
        );
        Self {
            session,
            needs_prerender_finish,
        }
    }

    /// Pipeline started.
    pub fn on_start(&mut self, options: Option<InitOptions>) {
        self.session.init(options);
    }

    /// Module attached to an already running pipeline.
    pub fn on_attach(&mut self, options: Option<InitOptions>) {
        self.session.init(options);
    }

    /// New tracking results.
    pub fn on_update(&mut self, args: &UpdateArgs) {
        self.session.update(args);
    }

    /// Canvas resized.
    pub fn on_canvas_size_change(&mut self, args: ResizeArgs) {
        self.session.resize(args);
    }

    /// Module detached.
    pub fn on_detach(&mut self) {
        self.session.detach();
    }

    /// Draw the frame.
    pub fn on_render(&mut self) {
        self.session.render(RenderArgs {
            needs_prerender_finish: self.needs_prerender_finish,
        });
    }

    /// Scene and camera for the host.
    #[must_use]
    pub fn xr_scene(&self) -> Option<XrScene<'_>> {
        self.session.xr_scene()
    }

    /// Whether renders flush before drawing.
    #[must_use]
    pub fn needs_prerender_finish(&self) -> bool {
        self.needs_prerender_finish
    }

    /// The wrapped session.
    #[must_use]
    pub fn session(&self) -> &ArSession<H, R> {
        &self.session
    }

    /// The wrapped session, mutably (touches and template delivery).
    pub fn session_mut(&mut self) -> &mut ArSession<H, R> {
        &mut self.session
    }

    /// Unwrap the session.
    #[must_use]
    pub fn into_session(self) -> ArSession<H, R> {
        self.session
    }
}
