//! Camera system for the tracked AR view.
//!
//! Provides the render camera whose projection and pose come from the host
//! tracking engine, and the synchronizer that applies each frame's sample.

/// Core camera struct and projection helpers.
pub mod core;
/// Tracking samples and the pose synchronizer.
pub mod pose;
mod wire;

pub use self::core::{aspect_ratio, ArCamera};
pub use pose::{PoseSynchronizer, ProcessCpuResult, TrackingSample};
