// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance carousel state machine.
//!
//! A [`Controller`] owns the cursor, the layout tunables and the autoplay
//! state of one carousel. Backends translate platform events into
//! [`Input`]s, feed them to [`Controller::handle`], and act on the returned
//! [`Response`]: re-present the layout and run the timer command, if any.
//!
//! ```rust,ignore
//! let response = controller.handle(Input::Next, &mut tracer);
//! if response.relayout {
//!     controller.present(&mut presenter, &mut tracer);
//! }
//! if let Some(cmd) = response.timer {
//!     timer.execute(cmd);
//! }
//! ```

use alloc::vec::Vec;

use crate::autoplay::{Autoplay, AutoplayConfig, TimerCommand};
use crate::backend::Presenter;
use crate::cursor::Cursor;
use crate::instance::InstanceId;
use crate::layout::{LayoutParams, Placement};
use crate::trace::{CursorMovedEvent, LayoutEvent, MountEvent, MoveCause, TimerEvent, Tracer};

/// Keys the carousel reacts to while focused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Moves to the previous slide.
    ArrowLeft,
    /// Moves to the next slide.
    ArrowRight,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// An event delivered to a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// The "next" control was clicked.
    Next,
    /// The "previous" control was clicked.
    Prev,
    /// Slide `i` was clicked.
    SlideClicked(usize),
    /// A key was pressed while the root had focus.
    Key(Key),
    /// The pointer entered the root.
    PointerEnter,
    /// The pointer left the root.
    PointerLeave,
    /// The autoplay interval fired.
    TimerTick,
}

/// What the backend must do after an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Response {
    /// Whether the layout changed and must be presented again.
    pub relayout: bool,
    /// Timer command to execute, if any.
    pub timer: Option<TimerCommand>,
}

/// State of one mounted carousel.
#[derive(Clone, Copy, Debug)]
pub struct Controller {
    id: InstanceId,
    cursor: Cursor,
    params: LayoutParams,
    autoplay: Autoplay,
}

impl Controller {
    /// Creates a controller for `len` slides.
    ///
    /// Returns `None` when there are too few slides for the widget to be
    /// meaningful; the caller should leave the markup alone.
    #[must_use]
    pub fn new(
        id: InstanceId,
        len: usize,
        params: LayoutParams,
        autoplay: AutoplayConfig,
    ) -> Option<Self> {
        Some(Self {
            id,
            cursor: Cursor::new(len)?,
            params,
            autoplay: Autoplay::new(autoplay),
        })
    }

    /// Instance this controller belongs to.
    #[must_use]
    pub const fn id(&self) -> InstanceId {
        self.id
    }

    /// Current cursor.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Layout tunables.
    #[must_use]
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Autoplay state.
    #[must_use]
    pub const fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// Initial response after mounting: lay out and start autoplay.
    pub fn start(&mut self, tracer: &mut Tracer<'_>) -> Response {
        tracer.mount(&MountEvent {
            instance: self.id,
            slides: self.cursor.len(),
            autoplay_ms: self.autoplay.config().delay_ms.map(|d| d.get()),
        });
        let timer = self.autoplay.start();
        self.trace_timer(timer, tracer);
        Response {
            relayout: true,
            timer,
        }
    }

    /// Applies one input.
    pub fn handle(&mut self, input: Input, tracer: &mut Tracer<'_>) -> Response {
        let from = self.cursor.index();
        let cause = match input {
            Input::Next => {
                self.cursor.next();
                MoveCause::Next
            }
            Input::Prev => {
                self.cursor.prev();
                MoveCause::Prev
            }
            Input::Key(Key::ArrowRight) => {
                self.cursor.next();
                MoveCause::Key
            }
            Input::Key(Key::ArrowLeft) => {
                self.cursor.prev();
                MoveCause::Key
            }
            Input::Key(Key::Other) => return Response::default(),
            Input::SlideClicked(i) => {
                if self.cursor.activate(i).is_none() {
                    return Response::default();
                }
                MoveCause::SlideClick
            }
            Input::TimerTick => {
                // A tick queued before the timer was cleared.
                if !self.autoplay.is_armed() {
                    return Response::default();
                }
                self.cursor.next();
                MoveCause::Autoplay
            }
            Input::PointerEnter => {
                let timer = self.autoplay.stop();
                self.trace_timer(timer, tracer);
                return Response {
                    relayout: false,
                    timer,
                };
            }
            Input::PointerLeave => {
                let timer = self.autoplay.start();
                self.trace_timer(timer, tracer);
                return Response {
                    relayout: false,
                    timer,
                };
            }
        };
        tracer.cursor_moved(&CursorMovedEvent {
            instance: self.id,
            from,
            to: self.cursor.index(),
            cause,
        });
        Response {
            relayout: true,
            timer: None,
        }
    }

    /// Placements for every slide at the current cursor.
    #[must_use]
    pub fn layout(&self) -> Vec<Placement> {
        self.params.layout(self.cursor)
    }

    /// Lays out every slide and hands the result to `presenter`.
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P, tracer: &mut Tracer<'_>) {
        let placements = self.layout();
        let visible = placements.iter().filter(|p| p.slot.is_visible()).count();
        tracer.layout(&LayoutEvent {
            instance: self.id,
            cursor: self.cursor.index(),
            visible,
            hidden: placements.len() - visible,
        });
        presenter.apply(&placements);
    }

    fn trace_timer(&self, command: Option<TimerCommand>, tracer: &mut Tracer<'_>) {
        if let Some(command) = command {
            tracer.timer(&TimerEvent {
                instance: self.id,
                command,
            });
        }
    }
}
