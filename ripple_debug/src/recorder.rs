// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! shared buffer. A ripple view takes ownership of its sink, so clone the
//! recorder before boxing it and read the events through the clone.

use std::cell::RefCell;
use std::rc::Rc;

use ripple_core::trace::{
    AnimationEvent, AppearEvent, DisappearEvent, IgnoredEvent, InteractionEvent,
    TapDeliveryEvent, TraceSink,
};

/// A decoded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_appear`].
    Appear(AppearEvent),
    /// See [`TraceSink::on_disappear`].
    Disappear(DisappearEvent),
    /// See [`TraceSink::on_animation`].
    Animation(AnimationEvent),
    /// See [`TraceSink::on_interaction`].
    Interaction(InteractionEvent),
    /// See [`TraceSink::on_tap`].
    Tap(TapDeliveryEvent),
    /// See [`TraceSink::on_ignored`].
    Ignored(IgnoredEvent),
}

/// A [`TraceSink`] that keeps every event in a shared buffer.
///
/// Clones share the buffer.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Removes and returns all recorded events.
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_appear(&mut self, e: &AppearEvent) {
        self.push(RecordedEvent::Appear(*e));
    }

    fn on_disappear(&mut self, e: &DisappearEvent) {
        self.push(RecordedEvent::Disappear(*e));
    }

    fn on_animation(&mut self, e: &AnimationEvent) {
        self.push(RecordedEvent::Animation(*e));
    }

    fn on_interaction(&mut self, e: &InteractionEvent) {
        self.push(RecordedEvent::Interaction(*e));
    }

    fn on_tap(&mut self, e: &TapDeliveryEvent) {
        self.push(RecordedEvent::Tap(*e));
    }

    fn on_ignored(&mut self, e: &IgnoredEvent) {
        self.push(RecordedEvent::Ignored(*e));
    }
}
