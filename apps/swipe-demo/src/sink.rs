use swiper_ui::{Clock as _, ManualClock, RenderSink, Transition};

/// Render sink that draws nothing and logs the offset it would show on each
/// frame while a transition runs.
pub struct FrameSink {
    clock: ManualClock,
    shown: f32,
    animation: Option<Animation>,
}

struct Animation {
    from: f32,
    to: f32,
    started_millis: u64,
    transition: Transition,
}

impl FrameSink {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            shown: 0.0,
            animation: None,
        }
    }

    /// Advances a running transition to the clock's current time.
    pub fn frame(&mut self) {
        let Some(animation) = &self.animation else {
            return;
        };
        let elapsed = self
            .clock
            .now_millis()
            .saturating_sub(animation.started_millis);
        self.shown = animation
            .transition
            .value_at(animation.from, animation.to, elapsed);
        log::debug!("frame +{elapsed}ms offset {:.1}px", self.shown);
        if animation.transition.is_finished(elapsed) {
            log::info!("settled at {:.1}px", self.shown);
            self.animation = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

impl RenderSink for FrameSink {
    fn clear_transition(&mut self) {
        if self.animation.take().is_some() {
            log::debug!("transition interrupted at {:.1}px", self.shown);
        }
    }

    fn apply_offset(&mut self, offset_px: f32, transition: Option<Transition>) {
        match transition {
            Some(transition) => {
                log::info!(
                    "animate {:.1}px -> {offset_px:.1}px over {}ms {}",
                    self.shown,
                    transition.duration_millis,
                    transition.easing.css()
                );
                self.animation = Some(Animation {
                    from: self.shown,
                    to: offset_px,
                    started_millis: self.clock.now_millis(),
                    transition,
                });
            }
            None => {
                self.animation = None;
                self.shown = offset_px;
                log::info!("translate {offset_px:.1}px");
            }
        }
    }
}
