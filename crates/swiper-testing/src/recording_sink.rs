//! Render sink that remembers every call.

use swiper_animation::Transition;
use swiper_ui::RenderSink;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SinkCall {
    ClearTransition,
    Apply {
        offset: f32,
        transition: Option<Transition>,
    },
}

#[derive(Default, Debug)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Offsets applied so far, oldest first.
    pub fn offsets(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Apply { offset, .. } => Some(*offset),
                SinkCall::ClearTransition => None,
            })
            .collect()
    }

    pub fn last_apply(&self) -> Option<(f32, Option<Transition>)> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::Apply { offset, transition } => Some((*offset, *transition)),
            SinkCall::ClearTransition => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSink for RecordingSink {
    fn clear_transition(&mut self) {
        self.calls.push(SinkCall::ClearTransition);
    }

    fn apply_offset(&mut self, offset_px: f32, transition: Option<Transition>) {
        self.calls.push(SinkCall::Apply {
            offset: offset_px,
            transition,
        });
    }
}
