// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor, layout and autoplay model for the flyer carousel widget.
//!
//! `carousel_core` holds everything about a carousel that does not touch a
//! platform API. It is `no_std` compatible (with `alloc`) so the same state
//! machine runs in the browser backend, in native simulations and in tests.
//!
//! # Architecture
//!
//! Each mounted carousel owns one [`Controller`](controller::Controller).
//! Backends turn platform events into inputs and act on the responses:
//!
//! ```text
//!   platform event ──► Input ──► Controller::handle() ──► Response
//!                                                            │
//!                 ┌──────────────────────────┬───────────────┘
//!                 ▼                          ▼
//!   Controller::present() ──► Presenter::apply()   timer Arm / Disarm
//! ```
//!
//! **[`cursor`]**: Circular cursor with shortest-path activation.
//!
//! **[`layout`]**: Slot classification and the geometric placement series.
//! Layout is a pure function of cursor and slide count.
//!
//! **[`autoplay`]**: Idempotent timer arm/disarm state with hover pause,
//! plus parsing of the autoplay delay attribute.
//!
//! **[`controller`]**: Ties the above together per instance.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that
//! platform backends implement to write placements to native trees.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod autoplay;
pub mod backend;
pub mod controller;
pub mod cursor;
pub mod instance;
pub mod layout;
pub mod trace;
