use crate::geometry::Point;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

pub type TouchId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One contact on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    /// Position in page coordinates.
    pub page: Point,
}

impl TouchPoint {
    pub fn new(id: TouchId, page: Point) -> Self {
        Self { id, page }
    }
}

pub type TouchPoints = SmallVec<[TouchPoint; 2]>;

/// Touch event with consumption tracking.
///
/// `touches` lists every contact currently on the surface, primary contact
/// first. Consuming an event tells the host to suppress its default handling
/// (native scrolling) for it.
#[derive(Clone, Debug)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: TouchPoints,
    /// Shared via Rc<Cell> so consumption survives copies handed to the host.
    consumed: Rc<Cell<bool>>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            phase,
            touches: touches.into_iter().collect(),
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Single contact going down at `page`.
    pub fn start(page: Point) -> Self {
        Self::new(TouchPhase::Start, [TouchPoint::new(0, page)])
    }

    /// Primary contact moved to `page`.
    pub fn moved(page: Point) -> Self {
        Self::new(TouchPhase::Move, [TouchPoint::new(0, page)])
    }

    /// Contact lifted; `remaining` are the contacts still down.
    pub fn end(remaining: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::new(TouchPhase::End, remaining)
    }

    pub fn cancel() -> Self {
        Self::new(TouchPhase::Cancel, [])
    }

    pub fn primary(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }

    /// The contact with `id`, if it is listed in this event.
    pub fn touch(&self, id: TouchId) -> Option<&TouchPoint> {
        self.touches.iter().find(|touch| touch.id == id)
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = TouchEvent::moved(Point::new(10.0, 0.0));
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn primary_is_first_contact() {
        let event = TouchEvent::new(
            TouchPhase::Start,
            [
                TouchPoint::new(7, Point::new(1.0, 2.0)),
                TouchPoint::new(8, Point::new(3.0, 4.0)),
            ],
        );
        assert_eq!(event.touch_count(), 2);
        assert_eq!(event.primary().map(|touch| touch.id), Some(7));
        assert_eq!(event.touch(8).map(|touch| touch.page), Some(Point::new(3.0, 4.0)));
        assert!(event.touch(9).is_none());
        assert!(TouchEvent::cancel().primary().is_none());
    }
}
