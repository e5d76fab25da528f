// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded traces.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array, one object per event, in recording order. Every object
//! carries a `"kind"` and the `"carousel"` it belongs to; the remaining keys
//! depend on the kind.

use std::io::{self, Write};

use serde_json::{Value, json};

use carousel_core::autoplay::TimerCommand;

use crate::recorder::RecordedEvent;

/// Converts one event to its JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Mount(e) => json!({
            "kind": "mount",
            "carousel": e.instance.0,
            "slides": e.slides,
            "autoplay_ms": e.autoplay_ms,
        }),
        RecordedEvent::MountSkipped(e) => json!({
            "kind": "skip",
            "carousel": e.instance.0,
            "reason": e.reason.to_string(),
        }),
        RecordedEvent::CursorMoved(e) => json!({
            "kind": "move",
            "carousel": e.instance.0,
            "from": e.from,
            "to": e.to,
            "cause": format!("{:?}", e.cause),
        }),
        RecordedEvent::Layout(e) => json!({
            "kind": "layout",
            "carousel": e.instance.0,
            "cursor": e.cursor,
            "visible": e.visible,
            "hidden": e.hidden,
        }),
        RecordedEvent::Timer(e) => match e.command {
            TimerCommand::Arm(period) => json!({
                "kind": "timer",
                "carousel": e.instance.0,
                "armed": true,
                "period_ms": period.get(),
            }),
            TimerCommand::Disarm => json!({
                "kind": "timer",
                "carousel": e.instance.0,
                "armed": false,
            }),
        },
    }
}

/// Writes `events` as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &Value::Array(values))?;
    writeln!(writer)
}
