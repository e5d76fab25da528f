// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for carousel instances.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! controller and backends call as carousels mount, navigate, lay out and
//! arm or disarm their autoplay timer. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use core::fmt;

use crate::autoplay::TimerCommand;
use crate::instance::InstanceId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What moved the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveCause {
    /// The "next" control.
    Next,
    /// The "previous" control.
    Prev,
    /// A click on a non-centered slide.
    SlideClick,
    /// An arrow key while the root had focus.
    Key,
    /// An autoplay timer tick.
    Autoplay,
}

/// Why a carousel root was left inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The root has no slide track.
    MissingTrack,
    /// The track holds fewer slides than the widget needs.
    TooFewSlides {
        /// Slides actually found.
        found: usize,
    },
    /// A DOM call failed while wiring the instance.
    Dom,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTrack => f.write_str("no slide track"),
            Self::TooFewSlides { found } => write!(f, "only {found} slide(s)"),
            Self::Dom => f.write_str("DOM call failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a carousel is mounted and laid out for the first time.
#[derive(Clone, Copy, Debug)]
pub struct MountEvent {
    /// Which carousel.
    pub instance: InstanceId,
    /// Number of slides in the ring.
    pub slides: usize,
    /// Autoplay period in milliseconds, if enabled.
    pub autoplay_ms: Option<u32>,
}

/// Emitted when a carousel root is skipped.
#[derive(Clone, Copy, Debug)]
pub struct MountSkippedEvent {
    /// Which carousel root (in document order).
    pub instance: InstanceId,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Emitted when the cursor changes.
#[derive(Clone, Copy, Debug)]
pub struct CursorMovedEvent {
    /// Which carousel.
    pub instance: InstanceId,
    /// Previous centered slide.
    pub from: usize,
    /// New centered slide.
    pub to: usize,
    /// What triggered the move.
    pub cause: MoveCause,
}

/// Emitted after each full layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEvent {
    /// Which carousel.
    pub instance: InstanceId,
    /// Centered slide for this pass.
    pub cursor: usize,
    /// Slides drawn, center included.
    pub visible: usize,
    /// Slides hidden.
    pub hidden: usize,
}

/// Emitted when the autoplay timer is armed or disarmed.
#[derive(Clone, Copy, Debug)]
pub struct TimerEvent {
    /// Which carousel.
    pub instance: InstanceId,
    /// The command issued to the backend.
    pub command: TimerCommand,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from carousel instances.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a carousel is mounted.
    fn on_mount(&mut self, e: &MountEvent) {
        _ = e;
    }

    /// Called when a carousel root is left inert.
    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        _ = e;
    }

    /// Called when the cursor moves.
    fn on_cursor_moved(&mut self, e: &CursorMovedEvent) {
        _ = e;
    }

    /// Called after a layout pass.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called when the autoplay timer is armed or disarmed.
    fn on_timer(&mut self, e: &TimerEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`MountEvent`].
    #[inline]
    pub fn mount(&mut self, e: &MountEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mount(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MountSkippedEvent`].
    #[inline]
    pub fn mount_skipped(&mut self, e: &MountSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mount_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CursorMovedEvent`].
    #[inline]
    pub fn cursor_moved(&mut self, e: &CursorMovedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cursor_moved(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TimerEvent`].
    #[inline]
    pub fn timer(&mut self, e: &TimerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_timer(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
