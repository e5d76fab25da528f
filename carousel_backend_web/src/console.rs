// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;
use alloc::string::String;

use carousel_core::autoplay::TimerCommand;
use carousel_core::trace::{
    CursorMovedEvent, LayoutEvent, MountEvent, MountSkippedEvent, TimerEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes one `console.debug` line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn emit(line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(line));
    }
}

impl TraceSink for ConsoleSink {
    fn on_mount(&mut self, e: &MountEvent) {
        Self::emit(&mount_line(e));
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        Self::emit(&format!("[carousel {}] inert: {}", e.instance, e.reason));
    }

    fn on_cursor_moved(&mut self, e: &CursorMovedEvent) {
        Self::emit(&format!(
            "[carousel {}] {:?} {} -> {}",
            e.instance, e.cause, e.from, e.to
        ));
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        Self::emit(&format!(
            "[carousel {}] layout at {}: {} shown, {} hidden",
            e.instance, e.cursor, e.visible, e.hidden
        ));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        Self::emit(&timer_line(e));
    }
}

fn mount_line(e: &MountEvent) -> String {
    match e.autoplay_ms {
        Some(ms) => format!(
            "[carousel {}] mounted {} slides, autoplay {ms}ms",
            e.instance, e.slides
        ),
        None => format!("[carousel {}] mounted {} slides", e.instance, e.slides),
    }
}

fn timer_line(e: &TimerEvent) -> String {
    match e.command {
        TimerCommand::Arm(period) => {
            format!("[carousel {}] autoplay armed ({period}ms)", e.instance)
        }
        TimerCommand::Disarm => format!("[carousel {}] autoplay paused", e.instance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::instance::InstanceId;
    use core::num::NonZeroU32;

    #[test]
    fn mount_line_mentions_autoplay() {
        let e = MountEvent {
            instance: InstanceId(2),
            slides: 6,
            autoplay_ms: Some(4000),
        };
        assert_eq!(
            mount_line(&e),
            "[carousel #2] mounted 6 slides, autoplay 4000ms"
        );
    }

    #[test]
    fn timer_lines() {
        let armed = TimerEvent {
            instance: InstanceId(0),
            command: TimerCommand::Arm(NonZeroU32::new(250).unwrap()),
        };
        assert_eq!(timer_line(&armed), "[carousel #0] autoplay armed (250ms)");
        let paused = TimerEvent {
            instance: InstanceId(0),
            command: TimerCommand::Disarm,
        };
        assert_eq!(timer_line(&paused), "[carousel #0] autoplay paused");
    }
}
