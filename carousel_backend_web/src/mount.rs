// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel discovery and event wiring.
//!
//! [`mount_all`] turns every `.flyer-cf` root in a document into an
//! independent [`FlyerCarousel`]. Each instance keeps its own controller,
//! presenter and timer behind an `Rc<RefCell<_>>`; its DOM listeners hold
//! only weak references, so dropping the [`FlyerCarousel`] detaches
//! everything.
//!
//! Expected markup:
//!
//! ```html
//! <div class="flyer-cf" data-autoplay="5000">
//!   <button class="cf-prev"></button>
//!   <div class="flyer-cf-track">
//!     <div class="flyer-cf-slide">…</div>
//!     …
//!   </div>
//!   <button class="cf-next"></button>
//! </div>
//! ```

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use carousel_core::autoplay::AutoplayConfig;
use carousel_core::controller::{Controller, Input, Key, Response};
use carousel_core::instance::InstanceId;
use carousel_core::layout::LayoutParams;
use carousel_core::trace::{MountSkippedEvent, SkipReason, TraceSink, Tracer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent, NodeList};

use crate::interval::IntervalTimer;
use crate::presenter::DomPresenter;

/// Selector for carousel roots.
pub const ROOT_SELECTOR: &str = ".flyer-cf";
/// Selector for the slide track, relative to the root.
pub const TRACK_SELECTOR: &str = ".flyer-cf-track";
/// Selector for slides, relative to the track.
pub const SLIDE_SELECTOR: &str = ".flyer-cf-slide";
/// Selector for the optional "previous" control.
pub const PREV_SELECTOR: &str = ".cf-prev";
/// Selector for the optional "next" control.
pub const NEXT_SELECTOR: &str = ".cf-next";
/// Root attribute holding the autoplay period in milliseconds.
pub const AUTOPLAY_ATTRIBUTE: &str = "data-autoplay";

/// Trace sink shared by every carousel on a page.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Why a root could not host a carousel.
///
/// Never surfaced to the page; [`mount_all`] traces it and moves on.
#[derive(Debug)]
pub enum MountError {
    /// No `.flyer-cf-track` under the root.
    MissingTrack,
    /// Fewer slides than the widget needs.
    TooFewSlides(usize),
    /// A DOM call threw.
    Dom(JsValue),
}

impl MountError {
    /// Trace classification of this error.
    #[must_use]
    pub fn reason(&self) -> SkipReason {
        match self {
            Self::MissingTrack => SkipReason::MissingTrack,
            Self::TooFewSlides(found) => SkipReason::TooFewSlides { found: *found },
            Self::Dom(_) => SkipReason::Dom,
        }
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(err) => write!(f, "DOM call failed: {err:?}"),
            other => write!(f, "{}", other.reason()),
        }
    }
}

impl core::error::Error for MountError {}

impl From<JsValue> for MountError {
    fn from(err: JsValue) -> Self {
        Self::Dom(err)
    }
}

/// Mounts every carousel root in `document`.
///
/// Roots that cannot host a carousel are reported to `sink` and skipped.
/// The returned handles must be kept alive for the carousels to keep
/// working.
pub fn mount_all(
    document: &Document,
    params: LayoutParams,
    sink: &SharedSink,
) -> Vec<FlyerCarousel> {
    let Ok(roots) = document.query_selector_all(ROOT_SELECTOR) else {
        return Vec::new();
    };
    let mut mounted = Vec::new();
    for (i, root) in html_elements(&roots).into_iter().enumerate() {
        let id = InstanceId(u32::try_from(i).unwrap_or(u32::MAX));
        match FlyerCarousel::mount(id, &root, params, Rc::clone(sink)) {
            Ok(carousel) => mounted.push(carousel),
            Err(err) => {
                let mut guard = sink.borrow_mut();
                Tracer::new(&mut *guard).mount_skipped(&MountSkippedEvent {
                    instance: id,
                    reason: err.reason(),
                });
            }
        }
    }
    mounted
}

/// A live carousel bound to one root element.
pub struct FlyerCarousel {
    state: Rc<RefCell<Instance>>,
    /// Kept for their `Drop`, which detaches them.
    _listeners: Vec<Listener>,
}

impl fmt::Debug for FlyerCarousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlyerCarousel")
            .field("state", &self.state.try_borrow().ok())
            .field("listeners", &self._listeners.len())
            .finish()
    }
}

impl FlyerCarousel {
    /// Wires a single root, lays it out and starts autoplay.
    pub fn mount(
        id: InstanceId,
        root: &HtmlElement,
        params: LayoutParams,
        sink: SharedSink,
    ) -> Result<Self, MountError> {
        let track = root
            .query_selector(TRACK_SELECTOR)?
            .ok_or(MountError::MissingTrack)?;
        let slides = html_elements(&track.query_selector_all(SLIDE_SELECTOR)?);
        let autoplay =
            AutoplayConfig::from_attribute(root.get_attribute(AUTOPLAY_ATTRIBUTE).as_deref());
        let controller = Controller::new(id, slides.len(), params, autoplay)
            .ok_or(MountError::TooFewSlides(slides.len()))?;

        let state = Rc::new_cyclic(|weak: &Weak<RefCell<Instance>>| {
            let weak = weak.clone();
            RefCell::new(Instance {
                controller,
                presenter: DomPresenter::new(slides.clone()),
                timer: IntervalTimer::new(move || dispatch(&weak, Input::TimerTick)),
                sink,
            })
        });

        let mut listeners = Vec::new();
        if let Some(prev) = root.query_selector(PREV_SELECTOR)? {
            listeners.push(listen(&prev, "click", &state, |_| Some(Input::Prev))?);
        }
        if let Some(next) = root.query_selector(NEXT_SELECTOR)? {
            listeners.push(listen(&next, "click", &state, |_| Some(Input::Next))?);
        }
        for (i, slide) in slides.iter().enumerate() {
            listeners.push(listen(slide, "click", &state, move |_| {
                Some(Input::SlideClicked(i))
            })?);
        }
        listeners.push(listen(root, "mouseenter", &state, |_| Some(Input::PointerEnter))?);
        listeners.push(listen(root, "mouseleave", &state, |_| Some(Input::PointerLeave))?);
        listeners.push(listen(root, "keydown", &state, |event| {
            let key = event.dyn_ref::<KeyboardEvent>()?.key();
            Some(Input::Key(Key::from_name(&key)))
        })?);
        root.set_attribute("tabindex", "0")?;

        state.borrow_mut().start();
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    /// Index of the centered slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.state.borrow().controller.cursor().index()
    }

    /// Whether the autoplay interval is currently live.
    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.state.borrow().timer.is_running()
    }

    /// Feeds an input as if it came from the page.
    pub fn dispatch(&self, input: Input) {
        dispatch(&Rc::downgrade(&self.state), input);
    }
}

/// Per-root state shared by that root's listeners.
struct Instance {
    controller: Controller,
    presenter: DomPresenter,
    timer: IntervalTimer,
    sink: SharedSink,
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("controller", &self.controller)
            .field("presenter", &self.presenter)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl Instance {
    fn start(&mut self) {
        let sink = Rc::clone(&self.sink);
        let mut guard = sink.borrow_mut();
        let mut tracer = Tracer::new(&mut *guard);
        let response = self.controller.start(&mut tracer);
        self.respond(response, &mut tracer);
    }

    fn handle(&mut self, input: Input) {
        let sink = Rc::clone(&self.sink);
        let mut guard = sink.borrow_mut();
        let mut tracer = Tracer::new(&mut *guard);
        let response = self.controller.handle(input, &mut tracer);
        self.respond(response, &mut tracer);
    }

    fn respond(&mut self, response: Response, tracer: &mut Tracer<'_>) {
        if response.relayout {
            self.controller.present(&mut self.presenter, tracer);
        }
        if let Some(command) = response.timer {
            self.timer.execute(command);
        }
    }
}

/// Routes an input to a live instance.
///
/// Inputs for a dropped instance, or arriving while it is already handling
/// one, are discarded.
fn dispatch(state: &Weak<RefCell<Instance>>, input: Input) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let Ok(mut instance) = state.try_borrow_mut() else {
        return;
    };
    instance.handle(input);
}

/// An attached DOM event listener, removed again on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

fn listen(
    target: &EventTarget,
    kind: &'static str,
    state: &Rc<RefCell<Instance>>,
    to_input: impl Fn(&Event) -> Option<Input> + 'static,
) -> Result<Listener, JsValue> {
    let weak = Rc::downgrade(state);
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Some(input) = to_input(&event) {
            dispatch(&weak, input);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

/// Collects the `HtmlElement`s of a node list, skipping anything else.
fn html_elements(nodes: &NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
