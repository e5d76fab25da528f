// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide placement around the centered cursor.
//!
//! Each layout pass classifies every slide into a [`Slot`] by its circular
//! distance from the cursor and turns that slot into a [`Placement`]: a
//! horizontal offset, a scale, an opacity, a stacking order and whether the
//! slide accepts pointer input.
//!
//! Neighbor offsets follow a geometric series rather than linear spacing:
//!
//! ```text
//!   series_offset(k) = Σ_{j=1..k} base_offset · gap_shrink^(j−1)
//! ```
//!
//! so the second neighbor sits closer to the first than a plain doubling
//! would put it. Layout is always a pure function of the cursor and slide
//! count and is recomputed for every slide on each pass.

use alloc::vec::Vec;

use kurbo::Affine;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::cursor::{Cursor, Side};

/// Tunables for one carousel instance.
///
/// Fixed for the lifetime of the instance. [`LayoutParams::flyer`] is the
/// preset used for the flyer strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Upper bound on visible neighbors per side.
    pub side_cap: usize,
    /// Offset of the first neighbor, in CSS pixels.
    pub base_offset: f64,
    /// Factor applied to each successive gap between neighbors.
    pub gap_shrink: f64,
    /// Scale multiplier per rank away from center. Must be below 1.
    pub scale_step: f64,
    /// Opacity of the first neighbor.
    pub opacity_first: f64,
    /// Opacity lost per rank after the first.
    pub opacity_step: f64,
    /// Scale given to hidden slides.
    pub hidden_scale: f64,
    /// Stacking order of the centered slide.
    pub base_z: i32,
}

impl LayoutParams {
    /// Preset for the flyer strip.
    #[must_use]
    pub const fn flyer() -> Self {
        Self {
            side_cap: 2,
            base_offset: 240.0,
            gap_shrink: 0.86,
            scale_step: 0.88,
            opacity_first: 0.95,
            opacity_step: 0.15,
            hidden_scale: 0.7,
            base_z: 1000,
        }
    }

    /// Returns a copy with a different per-side cap.
    #[must_use]
    pub const fn with_side_cap(mut self, side_cap: usize) -> Self {
        self.side_cap = side_cap;
        self
    }

    /// Visible neighbors per side for a ring of `len` slides.
    ///
    /// Never more than `side_cap`, and never so many that the two sides
    /// would overlap.
    #[inline]
    #[must_use]
    pub const fn max_side(&self, len: usize) -> usize {
        let half = len.saturating_sub(1) / 2;
        if half < self.side_cap {
            half
        } else {
            self.side_cap
        }
    }

    /// Cumulative offset of the neighbor at `rank`.
    #[must_use]
    pub fn series_offset(&self, rank: usize) -> f64 {
        let mut x = 0.0;
        let mut gap = self.base_offset;
        for _ in 0..rank {
            x += gap;
            gap *= self.gap_shrink;
        }
        x
    }

    /// Classifies slide `i` relative to `cursor`.
    #[must_use]
    pub fn classify(&self, cursor: Cursor, i: usize) -> Slot {
        if i == cursor.index() {
            return Slot::Center;
        }
        let max_side = self.max_side(cursor.len());
        let right = cursor.right_distance(i);
        if right <= max_side {
            return Slot::Neighbor {
                side: Side::Right,
                rank: right,
            };
        }
        let left = cursor.left_distance(i);
        if left <= max_side {
            return Slot::Neighbor {
                side: Side::Left,
                rank: left,
            };
        }
        Slot::Hidden
    }

    /// Visual state for a slot.
    #[must_use]
    pub fn place(&self, slot: Slot) -> Placement {
        match slot {
            Slot::Center => Placement {
                slot,
                offset: 0.0,
                scale: 1.0,
                opacity: 1.0,
                z_index: self.base_z,
                interactive: true,
            },
            Slot::Neighbor { side, rank } => {
                let x = self.series_offset(rank);
                let faded = self.opacity_step * rank.saturating_sub(1) as f64;
                Placement {
                    slot,
                    offset: match side {
                        Side::Left => -x,
                        Side::Right => x,
                    },
                    scale: self
                        .scale_step
                        .powi(i32::try_from(rank).unwrap_or(i32::MAX)),
                    opacity: (self.opacity_first - faded).max(0.0),
                    z_index: self.base_z - i32::try_from(rank).unwrap_or(i32::MAX),
                    interactive: true,
                }
            }
            Slot::Hidden => Placement {
                slot,
                offset: 0.0,
                scale: self.hidden_scale,
                opacity: 0.0,
                z_index: 0,
                interactive: false,
            },
        }
    }

    /// Places every slide of the ring around `cursor`.
    #[must_use]
    pub fn layout(&self, cursor: Cursor) -> Vec<Placement> {
        (0..cursor.len())
            .map(|i| self.place(self.classify(cursor, i)))
            .collect()
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::flyer()
    }
}

/// Where a slide sits relative to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The centered slide.
    Center,
    /// A visible neighbor `rank` steps away on `side` (`rank >= 1`).
    Neighbor {
        /// Which side of the center.
        side: Side,
        /// 1-based distance from the center.
        rank: usize,
    },
    /// Out of view; kept in the tree so it can still be activated.
    Hidden,
}

impl Slot {
    /// Whether the slide is drawn.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Computed visual state of one slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Classification this placement was derived from.
    pub slot: Slot,
    /// Horizontal offset from the center, in CSS pixels.
    pub offset: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Stacking order.
    pub z_index: i32,
    /// Whether the slide receives pointer events.
    pub interactive: bool,
}

impl Placement {
    /// Offset then scale, as a 2-D affine.
    ///
    /// Equivalent to CSS `translateX(offset) scale(scale)`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate((self.offset, 0.0)) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    fn cursor_at(len: usize, idx: usize) -> Cursor {
        let mut c = Cursor::new(len).unwrap();
        for _ in 0..idx {
            c.next();
        }
        c
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn max_side_is_capped() {
        let p = LayoutParams::flyer();
        assert_eq!(p.max_side(3), 1);
        assert_eq!(p.max_side(4), 1);
        assert_eq!(p.max_side(5), 2);
        assert_eq!(p.max_side(40), 2);
        assert_eq!(p.with_side_cap(3).max_side(40), 3);
    }

    #[test]
    fn series_offset_decays() {
        let p = LayoutParams::flyer();
        assert!(close(p.series_offset(0), 0.0));
        assert!(close(p.series_offset(1), 240.0));
        assert!(close(p.series_offset(2), 240.0 + 240.0 * 0.86));
        assert!(
            p.series_offset(2) < 2.0 * p.series_offset(1),
            "second neighbor should sit closer than double spacing"
        );
    }

    #[test]
    fn five_slides_show_everything() {
        let p = LayoutParams::flyer();
        let c = cursor_at(5, 0);
        let slots: Vec<Slot> = (0..5).map(|i| p.classify(c, i)).collect();
        assert_eq!(
            slots,
            [
                Slot::Center,
                Slot::Neighbor {
                    side: Side::Right,
                    rank: 1
                },
                Slot::Neighbor {
                    side: Side::Right,
                    rank: 2
                },
                Slot::Neighbor {
                    side: Side::Left,
                    rank: 2
                },
                Slot::Neighbor {
                    side: Side::Left,
                    rank: 1
                },
            ]
        );
    }

    #[test]
    fn seven_slides_hide_the_far_pair() {
        let p = LayoutParams::flyer();
        let placements = p.layout(cursor_at(7, 0));
        for i in [1, 2, 5, 6] {
            assert!(placements[i].slot.is_visible(), "slide {i} should show");
        }
        for i in [3, 4] {
            let hidden = placements[i];
            assert_eq!(hidden.slot, Slot::Hidden);
            assert!(close(hidden.scale, 0.7));
            assert!(close(hidden.opacity, 0.0));
            assert_eq!(hidden.z_index, 0);
            assert!(!hidden.interactive);
        }
        assert!(placements[1].offset > 0.0);
        assert!(placements[6].offset < 0.0);
        assert!(close(placements[2].offset, -placements[5].offset));
    }

    #[test]
    fn exactly_one_center_and_capped_neighbors() {
        let p = LayoutParams::flyer();
        for len in 3..12 {
            for idx in 0..len {
                let placements = p.layout(cursor_at(len, idx));
                let centers = placements
                    .iter()
                    .filter(|pl| pl.slot == Slot::Center)
                    .count();
                assert_eq!(centers, 1, "len={len} idx={idx}");
                assert_eq!(placements[idx].slot, Slot::Center);
                let visible = placements.iter().filter(|pl| pl.slot.is_visible()).count();
                assert!(visible - 1 <= 2 * p.max_side(len), "len={len} idx={idx}");
            }
        }
    }

    #[test]
    fn center_is_full_and_topmost() {
        let p = LayoutParams::flyer();
        let placements = p.layout(cursor_at(6, 4));
        let center = placements[4];
        assert!(close(center.offset, 0.0));
        assert!(close(center.scale, 1.0));
        assert!(close(center.opacity, 1.0));
        assert!(center.interactive);
        assert!(
            placements
                .iter()
                .enumerate()
                .all(|(i, pl)| i == 4 || pl.z_index < center.z_index),
            "center should stack above everything"
        );
    }

    #[test]
    fn scale_and_opacity_fall_with_rank() {
        let p = LayoutParams::flyer();
        let rank1 = p.place(Slot::Neighbor {
            side: Side::Left,
            rank: 1,
        });
        let rank2 = p.place(Slot::Neighbor {
            side: Side::Left,
            rank: 2,
        });
        assert!(close(rank1.scale, 0.88));
        assert!(close(rank2.scale, 0.88 * 0.88));
        let rank3 = p.with_side_cap(3).place(Slot::Neighbor {
            side: Side::Right,
            rank: 3,
        });
        assert!(close(rank3.scale, 0.88 * 0.88 * 0.88));
        assert!(close(rank1.opacity, 0.95));
        assert!(close(rank2.opacity, 0.80));
        assert_eq!(rank1.z_index, 999);
        assert_eq!(rank2.z_index, 998);
    }

    #[test]
    fn opacity_never_negative() {
        let p = LayoutParams::flyer().with_side_cap(20);
        let far = p.place(Slot::Neighbor {
            side: Side::Right,
            rank: 12,
        });
        assert!(close(far.opacity, 0.0));
    }

    #[test]
    fn transform_is_translate_then_scale() {
        let p = LayoutParams::flyer();
        let pl = p.place(Slot::Neighbor {
            side: Side::Right,
            rank: 1,
        });
        let [a, b, c, d, e, f] = pl.transform().as_coeffs();
        assert!(close(a, 0.88) && close(d, 0.88));
        assert!(close(b, 0.0) && close(c, 0.0));
        assert!(close(e, 240.0) && close(f, 0.0));
    }
}
