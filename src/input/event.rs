use serde::{Deserialize, Serialize};

/// One finger on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    /// Horizontal position in pixels from the canvas' left edge.
    pub client_x: f32,
    /// Vertical position in pixels from the canvas' top edge.
    pub client_y: f32,
}

impl TouchPoint {
    /// Finger at (`x`, `y`).
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            client_x: x,
            client_y: y,
        }
    }
}

/// A touch-start as delivered by the platform: every finger currently down.
///
/// ```ignore
/// let outcome = session.handle_touch(&TouchEvent::single(400.0, 300.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchEvent {
    /// Active touches, first finger first.
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// One finger at (`x`, `y`).
    #[must_use]
    pub fn single(x: f32, y: f32) -> Self {
        Self {
            touches: vec![TouchPoint::new(x, y)],
        }
    }

    /// Event with the given fingers.
    #[must_use]
    pub fn with_touches(touches: Vec<TouchPoint>) -> Self {
        Self { touches }
    }
}
