//! Runtime primitives for the swiper carousel.
//!
//! The carousel is single-threaded and event-driven. The only deferred work it
//! performs is the page-change notification that fires after the settle
//! transition, so the runtime is a clock plus a queue of delayed tasks that the
//! host drains from its own event loop.

mod clock;
mod runtime;

pub use clock::{Clock, ManualClock, SystemClock};
pub use runtime::{Runtime, RuntimeHandle, TaskId, TaskRegistration};

pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::runtime::{Runtime, RuntimeHandle, TaskRegistration};
}
