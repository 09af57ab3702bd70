//! Per-contact gesture record.
//!
//! A record is created when a contact is accepted and dropped when it ends.
//! The axis is decided by the first move sample and never revisited.

use super::direction::Direction;
use crate::geometry::Point;
use crate::input::TouchId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLock {
    Undetermined,
    Horizontal,
    Vertical,
}

/// Which neighbour a horizontal drag is heading for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    /// Finger moved left (`dx <= 0`).
    TowardNext,
    /// Finger moved right (`dx > 0`).
    TowardPrevious,
}

impl DragDirection {
    pub fn from_dx(dx: f32) -> Self {
        if dx > 0.0 {
            DragDirection::TowardPrevious
        } else {
            DragDirection::TowardNext
        }
    }
}

/// What a move sample means for the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// Vertical gesture; forward the direction to the host.
    Vertical(Direction),
    /// Horizontal gesture; the view should follow to `raw_offset`.
    Horizontal { dx: f32, raw_offset: f32 },
    /// Sample disagrees with the locked axis.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct GestureRecord {
    touch_id: TouchId,
    start_point: Point,
    start_time_millis: u64,
    origin_offset: f32,
    current_delta: Point,
    lock_axis: AxisLock,
    has_moved_horizontally: bool,
    drag_direction: DragDirection,
    latest_dx: f32,
}

impl GestureRecord {
    pub fn begin(
        touch_id: TouchId,
        start_point: Point,
        start_time_millis: u64,
        origin_offset: f32,
    ) -> Self {
        Self {
            touch_id,
            start_point,
            start_time_millis,
            origin_offset,
            current_delta: Point::ZERO,
            lock_axis: AxisLock::Undetermined,
            has_moved_horizontally: false,
            drag_direction: DragDirection::TowardNext,
            latest_dx: 0.0,
        }
    }

    /// Feeds the primary contact's latest position.
    pub fn track(&mut self, position: Point) -> Sample {
        let delta = position - self.start_point;
        self.current_delta = delta;
        let direction = Direction::classify(delta);

        if self.lock_axis == AxisLock::Undetermined {
            self.lock_axis = if direction.is_vertical() {
                AxisLock::Vertical
            } else {
                AxisLock::Horizontal
            };
            log::debug!(
                "gesture locked {:?} on first sample ({:.1}, {:.1})",
                self.lock_axis,
                delta.x,
                delta.y
            );
        }

        match self.lock_axis {
            AxisLock::Vertical if direction.is_vertical() => Sample::Vertical(direction),
            AxisLock::Horizontal if direction.is_horizontal() => {
                self.has_moved_horizontally = true;
                self.latest_dx = delta.x;
                self.drag_direction = DragDirection::from_dx(delta.x);
                Sample::Horizontal {
                    dx: delta.x,
                    raw_offset: self.origin_offset + delta.x,
                }
            }
            _ => Sample::Ignored,
        }
    }

    /// Contact this record follows.
    pub fn touch_id(&self) -> TouchId {
        self.touch_id
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn start_time_millis(&self) -> u64 {
        self.start_time_millis
    }

    pub fn elapsed_millis(&self, now_millis: u64) -> u64 {
        now_millis.saturating_sub(self.start_time_millis)
    }

    pub fn origin_offset(&self) -> f32 {
        self.origin_offset
    }

    pub fn current_delta(&self) -> Point {
        self.current_delta
    }

    pub fn lock_axis(&self) -> AxisLock {
        self.lock_axis
    }

    pub fn has_moved_horizontally(&self) -> bool {
        self.has_moved_horizontally
    }

    pub fn drag_direction(&self) -> DragDirection {
        self.drag_direction
    }

    /// Horizontal displacement of the last applied sample.
    pub fn latest_dx(&self) -> f32 {
        self.latest_dx
    }
}
