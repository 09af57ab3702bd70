//! Testing utilities and harness for the swiper carousel

pub mod recording_sink;
pub mod rule;

pub use recording_sink::{RecordingSink, SinkCall};
pub use rule::CarouselTestRule;

pub mod prelude {
    pub use crate::recording_sink::{RecordingSink, SinkCall};
    pub use crate::rule::CarouselTestRule;
}
