// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` tick source for autoplay.
//!
//! [`IntervalTimer`] owns one JS closure and at most one live interval
//! handle. Starting a running timer or stopping a stopped one does nothing,
//! so a carousel can never stack two intervals.

use alloc::boxed::Box;
use core::cell::Cell;
use core::num::NonZeroU32;

use carousel_core::autoplay::TimerCommand;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods; avoids
// fetching (and unwrapping) the Window object on every start/stop.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, period_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// A repeating browser timer that calls back on every period.
pub struct IntervalTimer {
    /// The JS closure handed to `setInterval`. Lives as long as the timer.
    closure: Closure<dyn FnMut()>,

    /// Handle of the live interval, if running.
    handle: Cell<Option<i32>>,
}

impl IntervalTimer {
    /// Creates a timer that is **not yet running**.
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            closure: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
            handle: Cell::new(None),
        }
    }

    /// Starts firing every `period_ms`. No-op if already running.
    pub fn start(&self, period_ms: NonZeroU32) {
        if self.handle.get().is_some() {
            return;
        }
        let period = i32::try_from(period_ms.get()).unwrap_or(i32::MAX);
        let id = set_interval(self.closure.as_ref(), period);
        self.handle.set(Some(id));
    }

    /// Clears the interval. No-op if not running.
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            clear_interval(id);
        }
    }

    /// Runs a command issued by the controller.
    pub fn execute(&self, command: TimerCommand) {
        match command {
            TimerCommand::Arm(period) => self.start(period),
            TimerCommand::Disarm => self.stop(),
        }
    }

    /// Returns `true` if an interval is live.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl core::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("handle", &self.handle.get())
            .finish_non_exhaustive()
    }
}
