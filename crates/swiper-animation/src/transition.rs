use crate::easing::Easing;

/// Duration and curve of an animated offset change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    pub easing: Easing,
}

impl Transition {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn ease_out(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::EaseOut)
    }

    /// Eased progress after `elapsed_millis`, in [0, 1].
    pub fn fraction_at(&self, elapsed_millis: u64) -> f32 {
        if self.duration_millis == 0 || elapsed_millis >= self.duration_millis {
            return 1.0;
        }
        let linear = elapsed_millis as f32 / self.duration_millis as f32;
        self.easing.transform(linear)
    }

    /// Offset between `from` and `to` after `elapsed_millis`.
    pub fn value_at(&self, from: f32, to: f32, elapsed_millis: u64) -> f32 {
        from + (to - from) * self.fraction_at(elapsed_millis)
    }

    pub fn is_finished(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.duration_millis
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::ease_out(300)
    }
}
