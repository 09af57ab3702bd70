//! Transition descriptions handed to render sinks.
//!
//! The carousel never animates anything itself. When it settles on a page it
//! tells the sink which offset to reach and, optionally, the [`Transition`] to
//! reach it with. Sinks backed by a compositor forward the curve; sinks that
//! draw frames themselves sample it with [`Transition::value_at`].

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::Transition;

#[cfg(test)]
mod tests;
