// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM slide styling.
//!
//! Writes [`Placement`]s onto the server-rendered slide elements as inline
//! styles. Slides are never created, removed or reordered; stacking comes
//! from `z-index` alone.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use carousel_core::backend::Presenter;
use carousel_core::layout::Placement;
use kurbo::Affine;
use web_sys::HtmlElement;

/// Applies placements to a fixed list of slide elements.
///
/// `slides[i]` receives `placements[i]` on every pass.
pub struct DomPresenter {
    slides: Vec<HtmlElement>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("slides_len", &self.slides.len())
            .finish()
    }
}

impl DomPresenter {
    /// Creates a presenter over the given slides, in ring order.
    #[must_use]
    pub fn new(slides: Vec<HtmlElement>) -> Self {
        Self { slides }
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, placements: &[Placement]) {
        for (el, placement) in self.slides.iter().zip(placements) {
            let s = el.style();
            let _ = s.set_property("transform", &css_transform(placement.transform()));
            let _ = s.set_property("z-index", &format!("{}", placement.z_index));
            let _ = s.set_property("opacity", &format!("{}", placement.opacity));
            let _ = s.set_property("pointer-events", pointer_events(placement));
        }
    }
}

/// CSS `transform` value for a slide transform.
///
/// The leading `translateX(-50%)` centers the slide on the track's anchor
/// point; the matrix carries the offset and scale.
pub(crate) fn css_transform(xf: Affine) -> String {
    let [a, b, c, d, e, f] = xf.as_coeffs();
    format!("translateX(-50%) matrix({a},{b},{c},{d},{e},{f})")
}

fn pointer_events(placement: &Placement) -> &'static str {
    if placement.interactive { "auto" } else { "none" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::cursor::Side;
    use carousel_core::layout::{LayoutParams, Slot};

    #[test]
    fn center_transform_is_identity_matrix() {
        let p = LayoutParams::flyer().place(Slot::Center);
        assert_eq!(
            css_transform(p.transform()),
            "translateX(-50%) matrix(1,0,0,1,0,0)"
        );
    }

    #[test]
    fn neighbor_transform_carries_offset_and_scale() {
        let p = LayoutParams::flyer().place(Slot::Neighbor {
            side: Side::Left,
            rank: 1,
        });
        assert_eq!(
            css_transform(p.transform()),
            "translateX(-50%) matrix(0.88,0,0,0.88,-240,0)"
        );
    }

    #[test]
    fn hidden_slides_ignore_pointer() {
        let params = LayoutParams::flyer();
        assert_eq!(pointer_events(&params.place(Slot::Hidden)), "none");
        assert_eq!(pointer_events(&params.place(Slot::Center)), "auto");
    }
}
