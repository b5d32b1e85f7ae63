//! Classifies raw touch events into the gestures the session acts on.

use super::event::{TouchEvent, TouchPoint};

/// What a touch-start asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    /// One finger: hit-test at this point and plant flowers.
    Place(TouchPoint),
    /// Two fingers: ask the tracker to recenter.
    ///
    /// Recenter only. The first finger is not hit-tested, so a two-finger
    /// touch never plants flowers, even when it lands on the ground.
    Recenter,
    /// No fingers, or more than two.
    Ignored,
}

impl TouchGesture {
    /// Map a touch event to its gesture by finger count.
    #[must_use]
    pub fn classify(event: &TouchEvent) -> Self {
        match event.touches.as_slice() {
            [point] => Self::Place(*point),
            [_, _] => Self::Recenter,
            _ => Self::Ignored,
        }
    }
}
