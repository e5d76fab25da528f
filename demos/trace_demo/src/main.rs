// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated carousel session that exercises the tracing pipeline.
//!
//! Mounts three carousels the way a page would (one too small to activate),
//! drives them through clicks, arrow keys, hover and a virtual autoplay
//! clock, draws each layout pass as a text strip, and records every event
//! to both a [`PrettyPrintSink`](carousel_debug::pretty::PrettyPrintSink)
//! and a [`RecorderSink`](carousel_debug::recorder::RecorderSink). The
//! recording is exported as `carousel_trace.json`.

use std::fs::File;
use std::io::BufWriter;

use carousel_core::autoplay::{AutoplayConfig, TimerCommand};
use carousel_core::backend::Presenter;
use carousel_core::controller::{Controller, Input, Key, Response};
use carousel_core::instance::InstanceId;
use carousel_core::layout::{LayoutParams, Placement, Slot};
use carousel_core::trace::{
    CursorMovedEvent, LayoutEvent, MountEvent, MountSkippedEvent, SkipReason, TimerEvent,
    TraceSink, Tracer,
};

use carousel_debug::json;
use carousel_debug::pretty::PrettyPrintSink;
use carousel_debug::recorder::RecorderSink;

/// Virtual time step of the simulated autoplay clock, in milliseconds.
const CLOCK_STEP_MS: u32 = 50;

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_mount(&mut self, e: &MountEvent) {
        self.pretty.on_mount(e);
        self.recorder.on_mount(e);
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        self.pretty.on_mount_skipped(e);
        self.recorder.on_mount_skipped(e);
    }

    fn on_cursor_moved(&mut self, e: &CursorMovedEvent) {
        self.pretty.on_cursor_moved(e);
        self.recorder.on_cursor_moved(e);
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        self.pretty.on_layout(e);
        self.recorder.on_layout(e);
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.pretty.on_timer(e);
        self.recorder.on_timer(e);
    }
}

/// Draws a layout pass as one line of text, left to right.
#[derive(Debug, Default)]
struct StripPresenter;

impl Presenter for StripPresenter {
    fn apply(&mut self, placements: &[Placement]) {
        let mut visible: Vec<(f64, String)> = placements
            .iter()
            .enumerate()
            .filter_map(|(i, p)| match p.slot {
                Slot::Center => Some((p.offset, format!("(({i}))"))),
                Slot::Neighbor { rank, .. } => {
                    Some((p.offset, format!("{}{i}{}", "[".repeat(rank), "]".repeat(rank))))
                }
                Slot::Hidden => None,
            })
            .collect();
        visible.sort_by(|a, b| a.0.total_cmp(&b.0));
        let strip: Vec<String> = visible.into_iter().map(|(_, s)| s).collect();
        let hidden = placements.iter().filter(|p| !p.slot.is_visible()).count();
        println!("    {}   (+{hidden} hidden)", strip.join(" "));
    }
}

/// One simulated carousel and its virtual timer.
struct Simulated {
    controller: Controller,
    presenter: StripPresenter,
    period_ms: Option<u32>,
    elapsed_ms: u32,
}

impl Simulated {
    fn respond(&mut self, response: Response, tracer: &mut Tracer<'_>) {
        if response.relayout {
            self.controller.present(&mut self.presenter, tracer);
        }
        match response.timer {
            Some(TimerCommand::Arm(period)) => {
                self.period_ms = Some(period.get());
                self.elapsed_ms = 0;
            }
            Some(TimerCommand::Disarm) => self.period_ms = None,
            None => {}
        }
    }

    fn input(&mut self, input: Input, tracer: &mut Tracer<'_>) {
        let response = self.controller.handle(input, tracer);
        self.respond(response, tracer);
    }

    /// Advances the virtual clock, firing the timer on each period.
    fn advance(&mut self, ms: u32, tracer: &mut Tracer<'_>) {
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(CLOCK_STEP_MS);
            remaining -= step;
            let Some(period) = self.period_ms else {
                continue;
            };
            self.elapsed_ms += step;
            while self.elapsed_ms >= period {
                self.elapsed_ms -= period;
                self.input(Input::TimerTick, tracer);
            }
        }
    }
}

fn mount(
    id: u32,
    slides: usize,
    autoplay: AutoplayConfig,
    tracer: &mut Tracer<'_>,
) -> Option<Simulated> {
    let instance = InstanceId(id);
    let Some(mut controller) = Controller::new(instance, slides, LayoutParams::flyer(), autoplay)
    else {
        tracer.mount_skipped(&MountSkippedEvent {
            instance,
            reason: SkipReason::TooFewSlides { found: slides },
        });
        return None;
    };
    let response = controller.start(tracer);
    let mut sim = Simulated {
        controller,
        presenter: StripPresenter,
        period_ms: None,
        elapsed_ms: 0,
    };
    sim.respond(response, tracer);
    Some(sim)
}

fn main() {
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    {
        let mut tee = Tee {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        // -- mount ---------------------------------------------------------
        let tiny = mount(0, 2, AutoplayConfig::DISABLED, &mut tracer);
        assert!(tiny.is_none(), "two slides never activate");

        let Some(mut manual) = mount(1, 5, AutoplayConfig::DISABLED, &mut tracer) else {
            return;
        };
        let autoplay = AutoplayConfig::from_attribute(Some("400"));
        let Some(mut auto) = mount(2, 7, autoplay, &mut tracer) else {
            return;
        };

        // -- manual navigation --------------------------------------------
        manual.input(Input::Next, &mut tracer);
        manual.input(Input::Key(Key::ArrowRight), &mut tracer);
        manual.input(Input::Key(Key::Other), &mut tracer);
        manual.input(Input::SlideClicked(0), &mut tracer);
        manual.input(Input::Prev, &mut tracer);

        // -- autoplay with hover pause ------------------------------------
        auto.advance(1_000, &mut tracer);
        auto.input(Input::PointerEnter, &mut tracer);
        auto.advance(2_000, &mut tracer);
        auto.input(Input::SlideClicked(5), &mut tracer);
        auto.input(Input::PointerLeave, &mut tracer);
        auto.advance(800, &mut tracer);
        println!("    autoplay carousel ended on slide {}", auto.controller.cursor().index());
    }

    // -- export ------------------------------------------------------------
    let path = "carousel_trace.json";
    match File::create(path) {
        Ok(file) => {
            let mut writer = BufWriter::new(file);
            if let Err(err) = json::export(recorder.events(), &mut writer) {
                eprintln!("failed to write {path}: {err}");
            } else {
                println!(
                    "wrote {} events ({} cursor moves) to {path}",
                    recorder.events().len(),
                    recorder.move_count()
                );
            }
        }
        Err(err) => eprintln!("failed to create {path}: {err}"),
    }
}
