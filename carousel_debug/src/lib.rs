// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for carousel diagnostics.
//!
//! This crate provides [`TraceSink`](carousel_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording of every event.
//! - [`json::export`]: writes a recording as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
