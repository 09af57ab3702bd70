use swiper_animation::Transition;

/// Visual layer the carousel drives.
///
/// Implementations translate the page container horizontally. When a
/// transition is given they animate towards the offset with it, otherwise the
/// offset applies at once.
pub trait RenderSink {
    /// Stops animating offset changes; the finger is back in control.
    fn clear_transition(&mut self);

    fn apply_offset(&mut self, offset_px: f32, transition: Option<Transition>);
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn clear_transition(&mut self) {
        (**self).clear_transition();
    }

    fn apply_offset(&mut self, offset_px: f32, transition: Option<Transition>) {
        (**self).apply_offset(offset_px, transition);
    }
}
