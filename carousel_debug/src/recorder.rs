// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! arrival order, as a [`RecordedEvent`]. Recordings feed
//! [`json::export`](crate::json::export) and assertions in tests.

use carousel_core::trace::{
    CursorMovedEvent, LayoutEvent, MountEvent, MountSkippedEvent, TimerEvent, TraceSink,
};

/// A single recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A carousel was mounted.
    Mount(MountEvent),
    /// A carousel root was left inert.
    MountSkipped(MountSkippedEvent),
    /// A cursor moved.
    CursorMoved(CursorMovedEvent),
    /// A layout pass ran.
    Layout(LayoutEvent),
    /// An autoplay timer was armed or disarmed.
    Timer(TimerEvent),
}

/// A [`TraceSink`] that stores events for later inspection.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of cursor moves recorded.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::CursorMoved(_)))
            .count()
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_mount(&mut self, e: &MountEvent) {
        self.events.push(RecordedEvent::Mount(*e));
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        self.events.push(RecordedEvent::MountSkipped(*e));
    }

    fn on_cursor_moved(&mut self, e: &CursorMovedEvent) {
        self.events.push(RecordedEvent::CursorMoved(*e));
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        self.events.push(RecordedEvent::Layout(*e));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.events.push(RecordedEvent::Timer(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::autoplay::AutoplayConfig;
    use carousel_core::backend::Presenter;
    use carousel_core::controller::{Controller, Input};
    use carousel_core::instance::InstanceId;
    use carousel_core::layout::{LayoutParams, Placement};
    use carousel_core::trace::{MoveCause, Tracer};

    struct Discard;

    impl Presenter for Discard {
        fn apply(&mut self, _: &[Placement]) {}
    }

    #[test]
    fn records_a_session_in_order() {
        let mut rec = RecorderSink::new();
        let mut c = Controller::new(
            InstanceId(0),
            7,
            LayoutParams::flyer(),
            AutoplayConfig::every(100),
        )
        .unwrap();
        {
            let mut t = Tracer::new(&mut rec);
            let _ = c.start(&mut t);
            c.present(&mut Discard, &mut t);
            let _ = c.handle(Input::SlideClicked(3), &mut t);
            c.present(&mut Discard, &mut t);
        }

        let events = rec.events();
        assert!(matches!(events[0], RecordedEvent::Mount(m) if m.slides == 7));
        assert!(matches!(events[1], RecordedEvent::Timer(_)));
        assert!(matches!(
            events[2],
            RecordedEvent::Layout(l) if l.visible == 5 && l.hidden == 2
        ));
        assert!(matches!(
            events[3],
            RecordedEvent::CursorMoved(m) if m.to == 3 && m.cause == MoveCause::SlideClick
        ));
        assert_eq!(rec.move_count(), 1);

        rec.clear();
        assert!(rec.events().is_empty());
    }
}
