// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: mounts every `.flyer-cf` carousel once the module loads.
//!
//! Build with: `wasm-pack build --target web demos/web_flyers`
//!
//! Then serve `demos/web_flyers/` and open `index.html` in a browser. Trace
//! lines appear in the console at the "verbose" level.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use wasm_bindgen::prelude::*;

/// Entry point: called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() {
    let carousels = carousel_backend_web::mount_page();

    // Keep the carousels alive: the page owns them until it unloads.
    core::mem::forget(carousels);
}
