// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for the flyer carousel.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`mount_all`] / [`mount_page`]: discovery of carousel roots and event
//!   wiring, one independent [`FlyerCarousel`] per root
//! - [`DomPresenter`]: inline-style updates on slide elements
//! - [`IntervalTimer`]: `setInterval` autoplay tick source
//! - [`ConsoleSink`]: trace output to the browser console

#![no_std]

extern crate alloc;

mod console;
mod interval;
mod mount;
mod presenter;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

pub use carousel_core::backend::Presenter;
pub use console::ConsoleSink;
pub use interval::IntervalTimer;
pub use mount::{
    AUTOPLAY_ATTRIBUTE, FlyerCarousel, MountError, NEXT_SELECTOR, PREV_SELECTOR, ROOT_SELECTOR,
    SLIDE_SELECTOR, SharedSink, TRACK_SELECTOR, mount_all,
};
pub use presenter::DomPresenter;

use carousel_core::layout::LayoutParams;

/// Mounts every carousel on the current page with the flyer preset.
///
/// Traces go to the browser console. Returns an empty list when there is no
/// window or document, or no carousel roots.
#[must_use]
pub fn mount_page() -> Vec<FlyerCarousel> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let sink: SharedSink = Rc::new(RefCell::new(ConsoleSink));
    mount_all(&document, LayoutParams::flyer(), &sink)
}
