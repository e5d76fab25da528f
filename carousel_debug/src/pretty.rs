// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use carousel_core::autoplay::TimerCommand;
use carousel_core::trace::{
    CursorMovedEvent, LayoutEvent, MountEvent, MountSkippedEvent, MoveCause, TimerEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn cause_name(cause: MoveCause) -> &'static str {
    match cause {
        MoveCause::Next => "next",
        MoveCause::Prev => "prev",
        MoveCause::SlideClick => "click",
        MoveCause::Key => "key",
        MoveCause::Autoplay => "autoplay",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_mount(&mut self, e: &MountEvent) {
        let _ = match e.autoplay_ms {
            Some(ms) => writeln!(
                self.writer,
                "[mount] carousel={} slides={} autoplay={ms}ms",
                e.instance.0, e.slides,
            ),
            None => writeln!(
                self.writer,
                "[mount] carousel={} slides={} autoplay=off",
                e.instance.0, e.slides,
            ),
        };
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        let _ = writeln!(
            self.writer,
            "[skip] carousel={} reason=\"{}\"",
            e.instance.0, e.reason,
        );
    }

    fn on_cursor_moved(&mut self, e: &CursorMovedEvent) {
        let _ = writeln!(
            self.writer,
            "[move] carousel={} {} -> {} ({})",
            e.instance.0,
            e.from,
            e.to,
            cause_name(e.cause),
        );
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] carousel={} cursor={} visible={} hidden={}",
            e.instance.0, e.cursor, e.visible, e.hidden,
        );
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        let _ = match e.command {
            TimerCommand::Arm(period) => writeln!(
                self.writer,
                "[timer] carousel={} arm every {period}ms",
                e.instance.0,
            ),
            TimerCommand::Disarm => {
                writeln!(self.writer, "[timer] carousel={} disarm", e.instance.0)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::instance::InstanceId;
    use carousel_core::trace::SkipReason;

    fn output(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn move_line() {
        let out = output(|s| {
            s.on_cursor_moved(&CursorMovedEvent {
                instance: InstanceId(1),
                from: 6,
                to: 0,
                cause: MoveCause::Autoplay,
            });
        });
        assert_eq!(out, "[move] carousel=1 6 -> 0 (autoplay)\n");
    }

    #[test]
    fn skip_and_mount_lines() {
        let out = output(|s| {
            s.on_mount_skipped(&MountSkippedEvent {
                instance: InstanceId(0),
                reason: SkipReason::TooFewSlides { found: 2 },
            });
            s.on_mount(&MountEvent {
                instance: InstanceId(1),
                slides: 5,
                autoplay_ms: None,
            });
        });
        assert_eq!(
            out,
            "[skip] carousel=0 reason=\"only 2 slide(s)\"\n\
             [mount] carousel=1 slides=5 autoplay=off\n"
        );
    }

    #[test]
    fn timer_line() {
        let out = output(|s| {
            s.on_timer(&TimerEvent {
                instance: InstanceId(0),
                command: TimerCommand::Disarm,
            });
        });
        assert_eq!(out, "[timer] carousel=0 disarm\n");
    }
}
