//! Viewport and page geometry.
//!
//! These are the only validated inputs of the carousel. Everything downstream
//! assumes a positive finite width and at least one page.

use swiper_foundation::DragDirection;

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    InvalidWidth { width: f32 },
    NoPages,
    InitialIndexOutOfRange { index: usize, page_count: usize },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InvalidWidth { width } => {
                write!(f, "viewport width must be positive and finite, got {width}")
            }
            GeometryError::NoPages => write!(f, "carousel needs at least one page"),
            GeometryError::InitialIndexOutOfRange { index, page_count } => {
                write!(f, "initial index {index} out of range for {page_count} pages")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Viewport width and the thresholds derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    width: f32,
}

impl ViewportMetrics {
    pub fn new(width: f32) -> Result<Self, GeometryError> {
        if width.is_finite() && width > 0.0 {
            Ok(Self { width })
        } else {
            Err(GeometryError::InvalidWidth { width })
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// A slow drag must travel further than this to commit.
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Resting offset of page `index`.
    pub fn page_offset(&self, index: usize) -> f32 {
        -(index as f32) * self.width
    }
}

/// Ordered pages `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSet {
    len: usize,
}

impl PageSet {
    pub fn new(len: usize) -> Result<Self, GeometryError> {
        if len == 0 {
            Err(GeometryError::NoPages)
        } else {
            Ok(Self { len })
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    /// Most negative reachable resting offset: the last page.
    pub fn max_offset(&self, metrics: &ViewportMetrics) -> f32 {
        metrics.page_offset(self.last_index())
    }

    /// Neighbour of `index` in `direction`, staying on `index` at either end.
    pub fn step(&self, index: usize, direction: DragDirection) -> usize {
        match direction {
            DragDirection::TowardNext if index < self.last_index() => index + 1,
            DragDirection::TowardPrevious if index > 0 => index - 1,
            _ => index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_widths() {
        for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            assert!(ViewportMetrics::new(width).is_err(), "accepted {width}");
        }
        let metrics = ViewportMetrics::new(300.0).expect("valid width");
        assert_eq!(metrics.half_width(), 150.0);
        assert_eq!(metrics.page_offset(2), -600.0);
    }

    #[test]
    fn rejects_empty_page_set() {
        assert_eq!(PageSet::new(0), Err(GeometryError::NoPages));
    }

    #[test]
    fn max_offset_is_last_page() {
        let metrics = ViewportMetrics::new(300.0).expect("valid width");
        assert_eq!(PageSet::new(3).expect("pages").max_offset(&metrics), -600.0);
        assert_eq!(PageSet::new(1).expect("pages").max_offset(&metrics), 0.0);
    }

    #[test]
    fn step_clamps_at_both_ends() {
        let pages = PageSet::new(3).expect("pages");
        assert_eq!(pages.step(0, DragDirection::TowardNext), 1);
        assert_eq!(pages.step(2, DragDirection::TowardNext), 2);
        assert_eq!(pages.step(0, DragDirection::TowardPrevious), 0);
        assert_eq!(pages.step(2, DragDirection::TowardPrevious), 1);
    }

    #[test]
    fn errors_render_readably() {
        let error = GeometryError::InitialIndexOutOfRange {
            index: 4,
            page_count: 3,
        };
        assert_eq!(error.to_string(), "initial index 4 out of range for 3 pages");
    }
}
