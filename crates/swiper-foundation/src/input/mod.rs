pub mod dispatcher;
pub mod types;

pub use dispatcher::TouchDispatcher;
pub use types::{TouchEvent, TouchId, TouchPhase, TouchPoint, TouchPoints};
