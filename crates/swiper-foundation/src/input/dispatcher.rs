//! Touch event queue.
//!
//! Platform integrations that receive raw events outside the carousel's
//! handling context push them here and drain the queue in order later.

use super::types::TouchEvent;

#[derive(Default, Debug)]
pub struct TouchDispatcher {
    queue: Vec<TouchEvent>,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: TouchEvent) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(TouchEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }
}
