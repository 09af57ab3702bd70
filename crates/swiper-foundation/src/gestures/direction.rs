//! Angle-based direction classification.
//!
//! A displacement is reduced to its angle in degrees, `atan2(dy, dx)`, in
//! `(-180, 180]`. Screen coordinates grow downwards, so a negative angle
//! points up.
//!
//! | sector                          | direction |
//! |---------------------------------|-----------|
//! | `[-135, -45]`                   | Up        |
//! | `(45, 135)`                     | Down      |
//! | `[135, 180]` and `[-180, -135)` | Left      |
//! | `[-45, 45]`                     | Right     |
//!
//! Sectors are tested in that order, so `-45` is Up and `45` is Right.

use crate::geometry::Point;
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Classifies an angle in degrees.
    pub fn from_angle(degrees: f64) -> Self {
        if (-135.0..=-45.0).contains(&degrees) {
            Direction::Up
        } else if degrees > 45.0 && degrees < 135.0 {
            Direction::Down
        } else if (135.0..=180.0).contains(&degrees) || (-180.0..-135.0).contains(&degrees) {
            Direction::Left
        } else if (-45.0..=45.0).contains(&degrees) {
            Direction::Right
        } else {
            // NaN lands here.
            Direction::Up
        }
    }

    /// Classifies a displacement from the gesture start. `(0, 0)` is Right.
    pub fn classify(delta: Point) -> Self {
        Self::from_angle(angle_degrees(delta))
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Numeric code used at the callback boundary: 1 up, 2 down, 3 left,
    /// 4 right.
    pub fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Direction::Up),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            4 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Angle of `delta` in degrees, `(-180, 180]`.
pub fn angle_degrees(delta: Point) -> f64 {
    f64::from(delta.y).atan2(f64::from(delta.x)) * 180.0 / PI
}
