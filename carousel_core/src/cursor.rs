// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular cursor over a fixed number of slides.
//!
//! The [`Cursor`] is the only mutable navigation state of a carousel. It
//! names the centered slide and wraps modulo the slide count in both
//! directions.

use core::fmt;

/// Fewest slides a carousel needs before it does anything.
///
/// With fewer slides there is no neighbor on at least one side, so the
/// widget stays inert and leaves the server-rendered markup untouched.
pub const MIN_SLIDES: usize = 3;

/// Direction of travel around the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Toward lower indices (wrapping to the end).
    Left,
    /// Toward higher indices (wrapping to the start).
    Right,
}

/// Index of the centered slide in a ring of `len` slides.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    idx: usize,
    len: usize,
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({}/{})", self.idx, self.len)
    }
}

impl Cursor {
    /// Creates a cursor at slide 0, or `None` if `len < MIN_SLIDES`.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len < MIN_SLIDES {
            return None;
        }
        Some(Self { idx: 0, len })
    }

    /// Index of the centered slide.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.idx
    }

    /// Number of slides in the ring.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Steps from the cursor to `i` going right, in `0..len`.
    #[inline]
    #[must_use]
    pub const fn right_distance(self, i: usize) -> usize {
        (i % self.len + self.len - self.idx) % self.len
    }

    /// Steps from the cursor to `i` going left, in `0..len`.
    #[inline]
    #[must_use]
    pub const fn left_distance(self, i: usize) -> usize {
        (self.idx + self.len - i % self.len) % self.len
    }

    /// Moves one slide to the right.
    pub fn next(&mut self) {
        self.idx = (self.idx + 1) % self.len;
    }

    /// Moves one slide to the left.
    pub fn prev(&mut self) {
        self.idx = (self.idx + self.len - 1) % self.len;
    }

    /// Brings slide `i` to the center along the shorter way round.
    ///
    /// Equal distances resolve to the right. Returns the side travelled, or
    /// `None` when `i` is already centered or out of range.
    pub fn activate(&mut self, i: usize) -> Option<Side> {
        if i >= self.len || i == self.idx {
            return None;
        }
        let right = self.right_distance(i);
        let left = self.left_distance(i);
        if left < right {
            self.idx = (self.idx + self.len - left) % self.len;
            Some(Side::Left)
        } else {
            self.idx = (self.idx + right) % self.len;
            Some(Side::Right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(len: usize, idx: usize) -> Cursor {
        let mut c = Cursor::new(len).unwrap();
        for _ in 0..idx {
            c.next();
        }
        c
    }

    #[test]
    fn too_few_slides_is_inert() {
        assert!(Cursor::new(0).is_none());
        assert!(Cursor::new(2).is_none());
        assert!(Cursor::new(3).is_some());
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = at(4, 3);
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn next_then_prev_is_identity() {
        for len in 3..9 {
            for idx in 0..len {
                let mut c = at(len, idx);
                c.next();
                c.prev();
                assert_eq!(c.index(), idx, "next/prev len={len} idx={idx}");
                c.prev();
                c.next();
                assert_eq!(c.index(), idx, "prev/next len={len} idx={idx}");
            }
        }
    }

    #[test]
    fn distances_are_complementary() {
        let c = at(7, 2);
        for i in 0..7 {
            let r = c.right_distance(i);
            let l = c.left_distance(i);
            assert!(r < 7 && l < 7, "distance out of range for {i}");
            if i == 2 {
                assert_eq!((r, l), (0, 0), "center has zero distance");
            } else {
                assert_eq!(r + l, 7, "distances for {i} should sum to len");
            }
        }
    }

    #[test]
    fn activate_takes_shorter_right_path() {
        // Slide 3 in a ring of 7: right 3, left 4.
        let mut c = at(7, 0);
        assert_eq!(c.activate(3), Some(Side::Right));
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn activate_takes_shorter_left_path() {
        let mut c = at(7, 0);
        assert_eq!(c.activate(5), Some(Side::Left));
        assert_eq!(c.index(), 5);
    }

    #[test]
    fn activate_tie_goes_right() {
        // Ring of 6, slide 3 is exactly opposite slide 0.
        let mut c = at(6, 0);
        assert_eq!(c.right_distance(3), c.left_distance(3));
        assert_eq!(c.activate(3), Some(Side::Right));
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn activate_center_or_out_of_range_is_noop() {
        let mut c = at(5, 1);
        assert_eq!(c.activate(1), None);
        assert_eq!(c.activate(5), None);
        assert_eq!(c.index(), 1);
    }
}
