//! Touch input: event types and gesture classification.

/// Platform touch events.
pub mod event;
/// Finger-count gesture classification.
pub mod gesture;

pub use event::{TouchEvent, TouchPoint};
pub use gesture::TouchGesture;
