//! Rubber-band resistance past the first and last page.

use swiper_foundation::gesture_constants::EDGE_RESISTANCE;

/// Maps a raw drag offset to the offset that is actually shown.
///
/// Offsets inside `[max_offset, 0]` pass through. Past either end only
/// [`EDGE_RESISTANCE`] of the overshoot is applied.
pub fn damp(raw_offset: f32, max_offset: f32) -> f32 {
    if raw_offset > 0.0 {
        raw_offset * EDGE_RESISTANCE
    } else if raw_offset < max_offset {
        max_offset + (raw_offset - max_offset) * EDGE_RESISTANCE
    } else {
        raw_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f32 = -600.0;

    #[test]
    fn in_range_offsets_pass_through() {
        for raw in [0.0, -0.5, -150.0, -300.0, -599.0, MAX] {
            assert_eq!(damp(raw, MAX), raw);
        }
    }

    #[test]
    fn overshoot_before_first_page_is_attenuated() {
        assert_eq!(damp(100.0, MAX), 40.0);
        assert_eq!(damp(250.0, MAX), 100.0);
    }

    #[test]
    fn overshoot_past_last_page_is_attenuated() {
        let shown = damp(-700.0, MAX);
        assert!((shown - MAX - 0.4 * (-100.0)).abs() < 1e-4, "got {shown}");
        assert!((damp(-850.0, MAX) - -700.0).abs() < 1e-4);
    }

    #[test]
    fn single_page_resists_both_ways() {
        assert_eq!(damp(50.0, 0.0), 20.0);
        assert_eq!(damp(-50.0, 0.0), -20.0);
    }
}
