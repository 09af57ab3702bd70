use crate::sink::FrameSink;
use swiper_ui::{Carousel, ManualClock, Point, Runtime, TouchDispatcher, TouchEvent, TouchPhase};

/// One scripted input. Durations are milliseconds since the previous step.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    Press(f32, f32),
    Move(f32, f32, u64),
    Release(u64),
    Jump(usize),
    Wait(u64),
}

const FRAME_MILLIS: u64 = 16;

pub struct Scenario {
    clock: ManualClock,
    runtime: Runtime,
    carousel: Carousel<FrameSink>,
    input: TouchDispatcher,
}

impl Scenario {
    pub fn new(clock: ManualClock, runtime: Runtime, carousel: Carousel<FrameSink>) -> Self {
        Self {
            clock,
            runtime,
            carousel,
            input: TouchDispatcher::new(),
        }
    }

    pub fn carousel(&self) -> &Carousel<FrameSink> {
        &self.carousel
    }

    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            match *step {
                Step::Press(x, y) => self.input.push(TouchEvent::start(Point::new(x, y))),
                Step::Move(x, y, after) => {
                    self.wait(after);
                    self.input.push(TouchEvent::moved(Point::new(x, y)));
                }
                Step::Release(after) => {
                    self.wait(after);
                    self.input.push(TouchEvent::end([]));
                }
                Step::Jump(index) => self.carousel.jump_to_page(index),
                Step::Wait(millis) => self.wait(millis),
            }
            self.flush_input();
        }
    }

    /// Hands queued touches to the carousel in arrival order.
    fn flush_input(&mut self) {
        let carousel = &mut self.carousel;
        self.input.drain(|event| {
            carousel.handle_event(&event);
            if event.phase == TouchPhase::Move && event.is_consumed() {
                log::debug!("native scroll suppressed");
            }
        });
    }

    /// Lets time pass frame by frame so transitions and the deferred
    /// notification progress.
    fn wait(&mut self, millis: u64) {
        let mut remaining = millis;
        while remaining > 0 {
            let step = remaining.min(FRAME_MILLIS);
            self.clock.advance(step);
            remaining -= step;
            if self.carousel.sink().is_animating() {
                self.carousel.sink_mut().frame();
            }
            self.runtime.run_due_tasks();
        }
    }
}
