//! Shared gesture constants for the carousel.
//!
//! Distances are in logical pixels and durations in milliseconds.

/// A horizontal drag released within this many milliseconds of contact start
/// commits to the neighbouring page no matter how far it travelled.
pub const FAST_SWIPE_MS: u64 = 300;

/// Duration of the settle transition. The page-change notification is
/// delivered once it has elapsed.
pub const TRANSITION_MS: u64 = 300;

/// Fraction of finger movement applied to the view once it is dragged past
/// the first or last page.
pub const EDGE_RESISTANCE: f32 = 0.4;
