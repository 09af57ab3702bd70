//! Touch input and gesture building blocks for the swiper carousel.
//!
//! Nothing in this crate knows about pages or rendering. It turns raw contact
//! samples into displacements, classifies them by angle and keeps the
//! per-contact record the carousel state machine works from.

mod geometry;

pub mod gesture_constants;
pub mod gestures;
pub mod input;

pub use geometry::Point;
pub use gestures::{AxisLock, Direction, DragDirection, GestureRecord};
pub use input::{TouchDispatcher, TouchEvent, TouchId, TouchPhase, TouchPoint};

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::gestures::{AxisLock, Direction, DragDirection, GestureRecord};
    pub use crate::input::{TouchEvent, TouchPhase, TouchPoint};
}
