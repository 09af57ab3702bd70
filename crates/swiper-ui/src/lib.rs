//! Horizontally paged carousel driven by touch gestures.
//!
//! [`Carousel`] consumes raw [`TouchEvent`]s, decides per contact whether the
//! finger is scrolling vertically or paging horizontally, follows horizontal
//! drags with rubber-band resistance past either end, and on release either
//! commits to the neighbouring page or snaps back. Visual output goes through
//! a [`RenderSink`]; committed page changes are reported after the settle
//! transition through the runtime's task queue.

mod carousel;
mod damping;
mod geometry;
mod options;
mod render;

pub use carousel::{Carousel, GesturePhase};
pub use damping::damp;
pub use geometry::{GeometryError, PageSet, ViewportMetrics};
pub use options::{CarouselOptions, NotificationPolicy};
pub use render::RenderSink;

pub use swiper_animation::{Easing, Transition};
pub use swiper_core::{Clock, ManualClock, Runtime, RuntimeHandle, SystemClock};
pub use swiper_foundation::{
    gesture_constants, Direction, Point, TouchDispatcher, TouchEvent, TouchPhase, TouchPoint,
};

pub mod prelude {
    pub use crate::carousel::{Carousel, GesturePhase};
    pub use crate::options::{CarouselOptions, NotificationPolicy};
    pub use crate::render::RenderSink;
    pub use swiper_foundation::prelude::*;
}
