//! Test rule driving a carousel with synthetic touches and a manual clock.
//!
//! # Example
//!
//! ```
//! use swiper_testing::CarouselTestRule;
//!
//! let mut rule = CarouselTestRule::new(300.0, 3);
//! rule.drag_horizontally(-200.0, 250);
//! assert_eq!(rule.carousel().current_index(), 1);
//!
//! // The page-change notification waits for the settle transition.
//! assert!(rule.page_changes().is_empty());
//! rule.advance_time(300);
//! assert_eq!(rule.page_changes(), vec![1]);
//! ```

use crate::recording_sink::RecordingSink;
use std::cell::RefCell;
use std::rc::Rc;
use swiper_core::{ManualClock, Runtime};
use swiper_foundation::{Point, TouchEvent, TouchPhase, TouchPoint};
use swiper_ui::{Carousel, CarouselOptions};

/// Number of move samples [`CarouselTestRule::swipe`] sends.
const SWIPE_STEPS: u64 = 5;

pub struct CarouselTestRule {
    runtime: Runtime,
    clock: ManualClock,
    carousel: Carousel<RecordingSink>,
    page_changes: Rc<RefCell<Vec<usize>>>,
    vertical_intents: Rc<RefCell<Vec<u8>>>,
}

impl CarouselTestRule {
    pub fn new(width: f32, page_count: usize) -> Self {
        Self::with_options(CarouselOptions::new(width, page_count))
    }

    /// Builds from `options`. Both callbacks are replaced by recorders.
    pub fn with_options(options: CarouselOptions) -> Self {
        let clock = ManualClock::new(0);
        let runtime = Runtime::new(clock.clone());
        let page_changes = Rc::new(RefCell::new(Vec::new()));
        let vertical_intents = Rc::new(RefCell::new(Vec::new()));

        let carousel = options
            .on_horizontal_change({
                let page_changes = Rc::clone(&page_changes);
                move |index| page_changes.borrow_mut().push(index)
            })
            .on_vertical_intent({
                let vertical_intents = Rc::clone(&vertical_intents);
                move |code| vertical_intents.borrow_mut().push(code)
            })
            .build(runtime.handle(), RecordingSink::new())
            .expect("test carousel geometry is valid");

        Self {
            runtime,
            clock,
            carousel,
            page_changes,
            vertical_intents,
        }
    }

    pub fn carousel(&self) -> &Carousel<RecordingSink> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<RecordingSink> {
        &mut self.carousel
    }

    pub fn sink(&self) -> &RecordingSink {
        self.carousel.sink()
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn now_millis(&self) -> u64 {
        self.runtime.now_millis()
    }

    /// Advances the clock and runs every task that became due.
    pub fn advance_time(&mut self, millis: u64) {
        self.clock.advance(millis);
        self.runtime.run_due_tasks();
    }

    /// Sends `event` and hands it back so callers can check consumption.
    pub fn send(&mut self, event: TouchEvent) -> TouchEvent {
        self.carousel.handle_event(&event);
        event
    }

    /// Single contact down at `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32) -> TouchEvent {
        self.send(TouchEvent::start(Point::new(x, y)))
    }

    /// Contact start reporting every point in `touches` as down.
    pub fn press_with(&mut self, touches: &[Point]) -> TouchEvent {
        let touches = touches
            .iter()
            .enumerate()
            .map(|(id, page)| TouchPoint::new(id as u64, *page));
        self.send(TouchEvent::new(TouchPhase::Start, touches))
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> TouchEvent {
        self.send(TouchEvent::moved(Point::new(x, y)))
    }

    /// Last contact lifted.
    pub fn release(&mut self) -> TouchEvent {
        self.send(TouchEvent::end([]))
    }

    pub fn cancel(&mut self) -> TouchEvent {
        self.send(TouchEvent::cancel())
    }

    /// Press at `from`, move in even steps to `to` over `duration_millis`,
    /// then release. Returns the release event.
    pub fn swipe(&mut self, from: Point, to: Point, duration_millis: u64) -> TouchEvent {
        self.press(from.x, from.y);
        let mut elapsed = 0;
        for step in 1..=SWIPE_STEPS {
            let target_time = duration_millis * step / SWIPE_STEPS;
            self.advance_time(target_time - elapsed);
            elapsed = target_time;
            let fraction = step as f32 / SWIPE_STEPS as f32;
            self.move_to(
                from.x + (to.x - from.x) * fraction,
                from.y + (to.y - from.y) * fraction,
            );
        }
        self.release()
    }

    /// Horizontal swipe of `dx` pixels starting mid-screen.
    pub fn drag_horizontally(&mut self, dx: f32, duration_millis: u64) -> TouchEvent {
        let start_x = self.carousel.metrics().width() / 2.0;
        self.swipe(
            Point::new(start_x, 200.0),
            Point::new(start_x + dx, 200.0),
            duration_millis,
        )
    }

    /// Indices delivered to the horizontal-change callback so far.
    pub fn page_changes(&self) -> Vec<usize> {
        self.page_changes.borrow().clone()
    }

    /// Direction codes delivered to the vertical-intent callback so far.
    pub fn vertical_intents(&self) -> Vec<u8> {
        self.vertical_intents.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_spans_requested_duration() {
        let mut rule = CarouselTestRule::new(300.0, 3);
        let start = rule.now_millis();
        rule.drag_horizontally(-100.0, 500);
        assert_eq!(rule.now_millis() - start, 500);
    }

    #[test]
    fn swipe_sends_evenly_spaced_samples() {
        let mut rule = CarouselTestRule::new(300.0, 3);
        rule.press(150.0, 200.0);
        rule.move_to(100.0, 200.0);
        assert_eq!(rule.sink().offsets(), vec![0.0, -50.0]);
        rule.release();

        let mut rule = CarouselTestRule::new(300.0, 3);
        rule.drag_horizontally(-100.0, 500);
        let offsets = rule.sink().offsets();
        let expected = [-20.0, -40.0, -60.0, -80.0, -100.0];
        for (offset, expected) in offsets[1..6].iter().zip(expected) {
            assert!((offset - expected).abs() < 1e-3, "{offset} vs {expected}");
        }
    }
}
