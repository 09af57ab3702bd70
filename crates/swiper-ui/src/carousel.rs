//! Carousel state machine.
//!
//! ```text
//! Idle --start--> Undetermined --first move--> HorizontalDrag | VerticalPassthrough
//!   ^                                                  |
//!   +-------------------- end / cancel ----------------+
//! ```
//!
//! A contact start is accepted when it is the only contact on the surface or
//! no gesture is in progress. Every gesture gets a fresh [`GestureRecord`]
//! bound to the contact that started it. End and cancel events that still
//! list that contact belong to some other finger and leave the gesture
//! alone. Once the tracked contact is gone the record is dropped, so stray
//! samples from leftover fingers fall on an idle carousel and are ignored.

use crate::damping::damp;
use crate::geometry::{GeometryError, PageSet, ViewportMetrics};
use crate::options::{CarouselOptions, NotificationPolicy};
use crate::render::RenderSink;
use std::cell::RefCell;
use std::rc::Rc;
use swiper_animation::Transition;
use swiper_core::{RuntimeHandle, TaskRegistration};
use swiper_foundation::gesture_constants::FAST_SWIPE_MS;
use swiper_foundation::gestures::Sample;
use swiper_foundation::{AxisLock, GestureRecord, TouchEvent, TouchPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Undetermined,
    HorizontalDrag,
    VerticalPassthrough,
}

pub struct Carousel<S: RenderSink> {
    runtime: RuntimeHandle,
    sink: S,
    metrics: ViewportMetrics,
    pages: PageSet,
    current_index: usize,
    /// Offset last handed to the sink. Only leaves `[max_offset, 0]` through
    /// damping while a finger is down.
    visual_offset: f32,
    gesture: Option<GestureRecord>,
    transition: Transition,
    notification_policy: NotificationPolicy,
    pending_notification: Option<TaskRegistration>,
    on_horizontal_change: Rc<RefCell<Box<dyn FnMut(usize)>>>,
    on_vertical_intent: Box<dyn FnMut(u8)>,
}

impl<S: RenderSink> Carousel<S> {
    pub(crate) fn new(
        runtime: RuntimeHandle,
        sink: S,
        metrics: ViewportMetrics,
        pages: PageSet,
        options: CarouselOptions,
    ) -> Self {
        let mut carousel = Self {
            runtime,
            sink,
            metrics,
            pages,
            current_index: options.initial_index,
            visual_offset: 0.0,
            gesture: None,
            transition: options.transition,
            notification_policy: options.notification_policy,
            pending_notification: None,
            on_horizontal_change: Rc::new(RefCell::new(options.on_horizontal_change)),
            on_vertical_intent: options.on_vertical_intent,
        };
        carousel.translate(metrics.page_offset(carousel.current_index), None);
        carousel
    }

    /// Feeds one raw touch event through the state machine.
    ///
    /// The event is consumed when the carousel handled it as part of a
    /// horizontal swipe; hosts should then suppress native scrolling.
    pub fn handle_event(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Start => self.on_touch_start(event),
            TouchPhase::Move => self.on_touch_move(event),
            TouchPhase::End => self.on_touch_end(event),
            TouchPhase::Cancel => self.on_touch_cancel(event),
        }
    }

    pub fn on_touch_start(&mut self, event: &TouchEvent) {
        if event.touch_count() != 1 && self.gesture.is_some() {
            log::trace!(
                "ignoring contact start with {} touches during a gesture",
                event.touch_count()
            );
            return;
        }
        let Some(primary) = event.primary() else {
            return;
        };

        if self.notification_policy == NotificationPolicy::CancelOnNewGesture {
            self.cancel_pending_notification();
        }
        self.sink.clear_transition();
        self.gesture = Some(GestureRecord::begin(
            primary.id,
            primary.page,
            self.runtime.now_millis(),
            self.visual_offset,
        ));
    }

    pub fn on_touch_move(&mut self, event: &TouchEvent) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let Some(touch) = event.touch(gesture.touch_id()).or_else(|| event.primary()) else {
            return;
        };
        match gesture.track(touch.page) {
            Sample::Vertical(direction) => (self.on_vertical_intent)(direction.code()),
            Sample::Horizontal { dx, raw_offset } => {
                event.consume();
                self.translate(raw_offset, None);
                log::trace!(
                    "drag dx={dx:.1} raw={raw_offset:.1} shown={:.1}",
                    self.visual_offset
                );
            }
            Sample::Ignored => {}
        }
    }

    pub fn on_touch_end(&mut self, event: &TouchEvent) {
        let Some(gesture) = self.take_ended_gesture(event) else {
            return;
        };
        if !gesture.has_moved_horizontally() {
            return;
        }

        let elapsed = gesture.elapsed_millis(self.runtime.now_millis());
        let distance = gesture.latest_dx().abs();
        let previous_index = self.current_index;
        if elapsed < FAST_SWIPE_MS || distance > self.metrics.half_width() {
            self.current_index = self
                .pages
                .step(previous_index, gesture.drag_direction());
        }
        log::debug!(
            "swipe released after {elapsed}ms over {distance:.1}px: page {previous_index} -> {}",
            self.current_index
        );

        event.consume();
        self.settle();
        if self.current_index != previous_index {
            self.schedule_notification(self.current_index);
        }
    }

    /// The platform took the contact away. A horizontal drag snaps back to
    /// the current page without committing.
    pub fn on_touch_cancel(&mut self, event: &TouchEvent) {
        let Some(gesture) = self.take_ended_gesture(event) else {
            return;
        };
        if gesture.has_moved_horizontally() {
            log::debug!("swipe cancelled, snapping back to page {}", self.current_index);
            event.consume();
            self.settle();
        }
    }

    /// Moves to `index` with the settle transition, bypassing gesture
    /// tracking. Does not notify.
    ///
    /// `index` is not validated; an index past the last page shows a damped
    /// offset beyond the end.
    pub fn jump_to_page(&mut self, index: usize) {
        if !self.pages.contains(index) {
            log::warn!(
                "jump to page {index} outside 0..{}; applying anyway",
                self.pages.len()
            );
        }
        if self.notification_policy == NotificationPolicy::CancelOnNewGesture {
            self.cancel_pending_notification();
        }
        self.current_index = index;
        self.settle();
    }

    /// Recomputes the viewport after a resize and re-applies the current page
    /// without a transition.
    pub fn on_resize(&mut self, width: f32) -> Result<(), GeometryError> {
        self.metrics = ViewportMetrics::new(width)?;
        log::debug!("viewport resized to {width}px");
        self.translate(self.metrics.page_offset(self.current_index), None);
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visual_offset(&self) -> f32 {
        self.visual_offset
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    pub fn max_offset(&self) -> f32 {
        self.pages.max_offset(&self.metrics)
    }

    pub fn gesture(&self) -> Option<&GestureRecord> {
        self.gesture.as_ref()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        match self.gesture.as_ref().map(GestureRecord::lock_axis) {
            None => GesturePhase::Idle,
            Some(AxisLock::Undetermined) => GesturePhase::Undetermined,
            Some(AxisLock::Horizontal) => GesturePhase::HorizontalDrag,
            Some(AxisLock::Vertical) => GesturePhase::VerticalPassthrough,
        }
    }

    /// True while a page-change notification is waiting for its transition.
    /// Only tracked under [`NotificationPolicy::CancelOnNewGesture`].
    pub fn has_pending_notification(&self) -> bool {
        self.pending_notification
            .as_ref()
            .is_some_and(TaskRegistration::is_pending)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Takes the record if `event` no longer lists its contact.
    fn take_ended_gesture(&mut self, event: &TouchEvent) -> Option<GestureRecord> {
        let touch_id = self.gesture.as_ref()?.touch_id();
        if event.touch(touch_id).is_some() {
            log::trace!("contact {touch_id} still down, ignoring {:?}", event.phase);
            return None;
        }
        self.gesture.take()
    }

    /// Animates to the resting offset of the current page. Always re-applied
    /// so a damped overshoot is pulled back even when the page is unchanged.
    fn settle(&mut self) {
        let target = self.metrics.page_offset(self.current_index);
        self.translate(target, Some(self.transition));
    }

    fn translate(&mut self, raw_offset: f32, transition: Option<Transition>) {
        let offset = damp(raw_offset, self.max_offset());
        self.visual_offset = offset;
        self.sink.apply_offset(offset, transition);
    }

    fn schedule_notification(&mut self, index: usize) {
        let callback = Rc::clone(&self.on_horizontal_change);
        let registration = self
            .runtime
            .schedule_after(self.transition.duration_millis, move || {
                (*callback.borrow_mut())(index);
            });
        log::debug!(
            "page change to {index} notifies in {}ms",
            self.transition.duration_millis
        );
        match self.notification_policy {
            NotificationPolicy::FireAndForget => {
                registration.detach();
            }
            NotificationPolicy::CancelOnNewGesture => {
                self.pending_notification = Some(registration);
            }
        }
    }

    fn cancel_pending_notification(&mut self) {
        if let Some(registration) = self.pending_notification.take() {
            if registration.is_pending() {
                log::debug!("cancelling stale page-change notification");
            }
            registration.cancel();
        }
    }
}

impl<S: RenderSink> std::fmt::Debug for Carousel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("metrics", &self.metrics)
            .field("pages", &self.pages)
            .field("current_index", &self.current_index)
            .field("visual_offset", &self.visual_offset)
            .field("phase", &self.gesture_phase())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiper_core::{ManualClock, Runtime};
    use swiper_foundation::{Point, TouchPoint};

    #[derive(Default)]
    struct LastOffset {
        offset: Option<f32>,
        animated: bool,
        clears: usize,
    }

    impl RenderSink for LastOffset {
        fn clear_transition(&mut self) {
            self.clears += 1;
        }

        fn apply_offset(&mut self, offset_px: f32, transition: Option<Transition>) {
            self.offset = Some(offset_px);
            self.animated = transition.is_some();
        }
    }

    fn carousel(runtime: &Runtime, pages: usize) -> Carousel<LastOffset> {
        CarouselOptions::new(300.0, pages)
            .build(runtime.handle(), LastOffset::default())
            .expect("valid geometry")
    }

    #[test]
    fn construction_positions_initial_page_without_transition() {
        let runtime = Runtime::new(ManualClock::new(0));
        let carousel = CarouselOptions::new(300.0, 3)
            .with_initial_index(2)
            .build(runtime.handle(), LastOffset::default())
            .expect("valid geometry");
        assert_eq!(carousel.visual_offset(), -600.0);
        assert_eq!(carousel.sink().offset, Some(-600.0));
        assert!(!carousel.sink().animated);
        assert_eq!(carousel.gesture_phase(), GesturePhase::Idle);
    }

    #[test]
    fn build_rejects_bad_geometry() {
        let runtime = Runtime::new(ManualClock::new(0));
        let error = CarouselOptions::new(300.0, 3)
            .with_initial_index(3)
            .build(runtime.handle(), LastOffset::default())
            .expect_err("index past the end");
        assert_eq!(
            error,
            GeometryError::InitialIndexOutOfRange {
                index: 3,
                page_count: 3
            }
        );
        assert!(CarouselOptions::new(0.0, 3)
            .build(runtime.handle(), LastOffset::default())
            .is_err());
        assert!(CarouselOptions::new(300.0, 0)
            .build(runtime.handle(), LastOffset::default())
            .is_err());
    }

    #[test]
    fn phases_follow_the_contact() {
        let runtime = Runtime::new(ManualClock::new(0));
        let mut carousel = carousel(&runtime, 3);

        carousel.handle_event(&TouchEvent::start(Point::new(100.0, 100.0)));
        assert_eq!(carousel.gesture_phase(), GesturePhase::Undetermined);
        assert_eq!(carousel.sink().clears, 1);

        carousel.handle_event(&TouchEvent::moved(Point::new(80.0, 102.0)));
        assert_eq!(carousel.gesture_phase(), GesturePhase::HorizontalDrag);

        carousel.handle_event(&TouchEvent::end([]));
        assert_eq!(carousel.gesture_phase(), GesturePhase::Idle);
        assert!(carousel.gesture().is_none());
    }

    #[test]
    fn second_finger_does_not_restart_gesture() {
        let runtime = Runtime::new(ManualClock::new(0));
        let mut carousel = carousel(&runtime, 3);

        carousel.handle_event(&TouchEvent::start(Point::new(200.0, 100.0)));
        carousel.handle_event(&TouchEvent::moved(Point::new(150.0, 100.0)));
        carousel.handle_event(&TouchEvent::new(
            TouchPhase::Start,
            [
                TouchPoint::new(0, Point::new(150.0, 100.0)),
                TouchPoint::new(1, Point::new(20.0, 20.0)),
            ],
        ));

        let gesture = carousel.gesture().expect("gesture still active");
        assert_eq!(gesture.start_point(), Point::new(200.0, 100.0));
        assert_eq!(carousel.visual_offset(), -50.0);
    }

    #[test]
    fn other_finger_lifting_keeps_gesture() {
        let runtime = Runtime::new(ManualClock::new(0));
        let mut carousel = carousel(&runtime, 3);

        carousel.handle_event(&TouchEvent::start(Point::new(200.0, 100.0)));
        let lift = TouchEvent::end([TouchPoint::new(0, Point::new(200.0, 100.0))]);
        carousel.handle_event(&lift);
        assert!(!lift.is_consumed());
        assert_eq!(carousel.gesture_phase(), GesturePhase::Undetermined);

        carousel.handle_event(&TouchEvent::cancel());
        assert_eq!(carousel.gesture_phase(), GesturePhase::Idle);
    }

    #[test]
    fn start_without_contacts_is_ignored() {
        let runtime = Runtime::new(ManualClock::new(0));
        let mut carousel = carousel(&runtime, 3);
        carousel.handle_event(&TouchEvent::new(TouchPhase::Start, []));
        assert_eq!(carousel.gesture_phase(), GesturePhase::Idle);
        assert_eq!(carousel.sink().clears, 0);
    }

    #[test]
    fn resize_reapplies_current_page() {
        let runtime = Runtime::new(ManualClock::new(0));
        let mut carousel = carousel(&runtime, 3);
        carousel.jump_to_page(1);
        carousel.on_resize(400.0).expect("valid width");
        assert_eq!(carousel.visual_offset(), -400.0);
        assert_eq!(carousel.max_offset(), -800.0);
        assert!(!carousel.sink().animated);
        assert!(carousel.on_resize(-1.0).is_err());
        assert_eq!(carousel.metrics().width(), 400.0);
    }
}
