// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Carousel splits platform-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Discovery**: Finds carousel roots and their slides in the platform
//!   tree and builds one [`Controller`] per root. Roots that cannot host a
//!   carousel are skipped without surfacing an error.
//!
//! - **Event wiring**: Translates platform events (clicks, key presses,
//!   pointer enter/leave) into [`Input`]s.
//!
//! - **Timer**: Executes [`TimerCommand`]s with a platform repeating timer
//!   whose ticks come back as [`Input::TimerTick`]. Not abstracted by a trait
//!   because timer lifetimes differ fundamentally across platforms.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to write placements
//!   onto platform-native slide elements.
//!
//! [`Controller`]: crate::controller::Controller
//! [`Input`]: crate::controller::Input
//! [`Input::TimerTick`]: crate::controller::Input::TimerTick
//! [`TimerCommand`]: crate::autoplay::TimerCommand

use crate::layout::Placement;

/// Applies computed placements to a platform-native slide tree.
///
/// `placements[i]` belongs to slide `i`. Every pass covers every slide.
pub trait Presenter {
    /// Writes one placement per slide.
    fn apply(&mut self, placements: &[Placement]);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::autoplay::AutoplayConfig;
    use crate::controller::{Controller, Input};
    use crate::instance::InstanceId;
    use crate::layout::{LayoutParams, Slot};
    use crate::trace::Tracer;

    #[derive(Default)]
    struct RecordingPresenter {
        passes: Vec<Vec<Placement>>,
    }

    impl Presenter for RecordingPresenter {
        fn apply(&mut self, placements: &[Placement]) {
            self.passes.push(placements.to_vec());
        }
    }

    #[test]
    fn every_pass_covers_every_slide() {
        let mut c = Controller::new(
            InstanceId(3),
            6,
            LayoutParams::flyer(),
            AutoplayConfig::DISABLED,
        )
        .unwrap();
        let mut presenter = RecordingPresenter::default();
        let mut tracer = Tracer::none();

        let r = c.start(&mut tracer);
        assert!(r.relayout);
        c.present(&mut presenter, &mut tracer);
        let r = c.handle(Input::Prev, &mut tracer);
        assert!(r.relayout);
        c.present(&mut presenter, &mut tracer);

        assert_eq!(presenter.passes.len(), 2);
        assert!(presenter.passes.iter().all(|p| p.len() == 6));
        assert_eq!(presenter.passes[0][0].slot, Slot::Center);
        assert_eq!(presenter.passes[1][5].slot, Slot::Center);
    }

    #[test]
    fn presenter_is_object_safe() {
        let c = Controller::new(
            InstanceId(0),
            3,
            LayoutParams::flyer(),
            AutoplayConfig::DISABLED,
        )
        .unwrap();
        let mut recording = RecordingPresenter::default();
        let presenter: &mut dyn Presenter = &mut recording;
        c.present(presenter, &mut Tracer::none());
        assert_eq!(recording.passes[0].len(), 3);
    }
}
