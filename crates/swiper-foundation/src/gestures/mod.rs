//! Single-contact gesture classification.

pub mod direction;
pub mod record;

pub use direction::Direction;
pub use record::{AxisLock, DragDirection, GestureRecord, Sample};
