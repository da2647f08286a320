// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless ripple walkthrough that exercises the tracing pipeline.
//!
//! Builds a small [`ViewTree`] (window, toolbar, one bar button), attaches a
//! ripple to the button, reconfigures it, delivers a tap, and detaches it.
//! Events go to both a [`PrettyPrintSink`] on stdout and a [`RecorderSink`];
//! a text presenter prints each evaluated change set and a few sampled ring
//! frames. The recording is exported as `ripple_trace.json`.

use std::fs::File;
use std::io::BufWriter;

use kurbo::{Point, Size, Vec2};

use ripple_core::backend::Presenter;
use ripple_core::color::Color;
use ripple_core::layer::{ImageId, LayerChanges, LayerSlot, ViewId};
use ripple_core::layout::centered_image_rect;
use ripple_core::trace::{
    AnimationEvent, AppearEvent, DisappearEvent, IgnoredEvent, InteractionEvent,
    TapDeliveryEvent, TraceSink,
};
use ripple_core::tree::ViewTree;
use ripple_core::view::{GestureState, RippleView, TapGesture};

use ripple_debug::pretty::PrettyPrintSink;
use ripple_debug::recorder::RecorderSink;

/// Natural size of the pretend icon image.
const ICON_SIZE: Size = Size::new(12.0, 12.0);

/// Forwards every event to two sinks.
struct Tee<A, B>(A, B);

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn on_appear(&mut self, e: &AppearEvent) {
        self.0.on_appear(e);
        self.1.on_appear(e);
    }

    fn on_disappear(&mut self, e: &DisappearEvent) {
        self.0.on_disappear(e);
        self.1.on_disappear(e);
    }

    fn on_animation(&mut self, e: &AnimationEvent) {
        self.0.on_animation(e);
        self.1.on_animation(e);
    }

    fn on_interaction(&mut self, e: &InteractionEvent) {
        self.0.on_interaction(e);
        self.1.on_interaction(e);
    }

    fn on_tap(&mut self, e: &TapDeliveryEvent) {
        self.0.on_tap(e);
        self.1.on_tap(e);
    }

    fn on_ignored(&mut self, e: &IgnoredEvent) {
        self.0.on_ignored(e);
        self.1.on_ignored(e);
    }
}

/// Prints what a layer-tree presenter would update.
#[derive(Debug, Default)]
struct TextPresenter {
    frames: u32,
}

impl Presenter for TextPresenter {
    fn apply(&mut self, view: &RippleView, changes: &LayerChanges) {
        self.frames += 1;
        println!("  -- present #{} --", self.frames);
        for &slot in &changes.geometry {
            match slot {
                LayerSlot::Ring => println!("  ring  frame={:?}", view.ring().frame()),
                LayerSlot::Core => println!("  core  frame={:?}", view.core().frame()),
                LayerSlot::Icon => {
                    let frame = view.icon().frame();
                    println!(
                        "  icon  frame={frame:?} image_rect={:?}",
                        centered_image_rect(frame, ICON_SIZE)
                    );
                }
            }
        }
        if !changes.style.is_empty() {
            println!(
                "  style {:?} tint={:?} ring_width={}",
                changes.style,
                view.tint().to_array(),
                view.ring().line_width()
            );
        }
        if !changes.visibility.is_empty() {
            println!(
                "  visibility {:?} core_hidden={} ring_hidden={}",
                changes.visibility,
                view.core().is_hidden(),
                view.ring().is_hidden()
            );
        }
        if !changes.content.is_empty() {
            println!("  content icon={:?}", view.icon().image());
        }
        if !changes.animations.is_empty() {
            match view.ring_timeline() {
                Some(t) => println!(
                    "  animation key={} serial={} period={}s",
                    t.key, t.serial, t.group.duration
                ),
                None => println!("  animation removed"),
            }
        }
    }
}

fn main() {
    // -- host hierarchy ----------------------------------------------------
    let mut tree = ViewTree::new();
    let window = tree.create_view();
    tree.set_bounds(window, Size::new(390.0, 844.0));
    tree.set_center(window, Point::new(195.0, 422.0));

    let toolbar = tree.create_view();
    tree.set_bounds(toolbar, Size::new(390.0, 49.0));
    tree.set_center(toolbar, Point::new(195.0, 795.5));
    tree.add_child(window, toolbar);

    let button = tree.create_view();
    tree.set_bounds(button, Size::new(44.0, 44.0));
    tree.set_center(button, Point::new(340.0, 24.5));
    tree.add_child(toolbar, button);

    // Bar items only know their backing view once the toolbar is laid out.
    let bar_items: [(&str, Option<ViewId>); 2] = [("share", None), ("compose", Some(button))];
    let resolver = |name: &str| {
        bar_items
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| *v)
    };

    // -- ripple ------------------------------------------------------------
    let recorder = RecorderSink::new();
    let mut presenter = TextPresenter::default();
    let mut ripple = RippleView::new(tree.create_view(), Color::ACCENT_BLUE);
    ripple.set_trace_sink(Box::new(Tee(
        PrettyPrintSink::new(Box::new(std::io::stdout())),
        recorder.clone(),
    )));
    ripple.set_icon(Some(ImageId(1)));

    println!("== appear at unresolved bar item ==");
    ripple.appear_at_bar_item(&mut tree, &resolver, "share", Vec2::ZERO);
    ripple.present(&mut presenter);

    println!("== appear at bar item ==");
    ripple.appear_at_bar_item(&mut tree, &resolver, "compose", Vec2::new(0.0, -8.0));
    ripple.present(&mut presenter);
    let window_point = tree.convert_point(Point::ZERO, ripple.id(), window);
    println!("  ripple origin in window: {window_point:?}");

    println!("== ring samples ==");
    for step in 0..=6 {
        let elapsed = f64::from(step) * 0.25;
        if let Some(p) = ripple.ring_presentation(elapsed) {
            let edge = p.transform.transform_point(Point::new(24.0, 12.0));
            println!(
                "  t={elapsed:.2}s edge.x={:.2} opacity={:.3}",
                edge.x, p.opacity
            );
        }
    }

    println!("== reconfigure ==");
    ripple.set_tint(Some(Color::rgb8(0xFF, 0x95, 0x00)));
    ripple.set_ring_scale(2.5);
    ripple.set_duration(-1.0);
    ripple.set_content_inset(4.0);
    ripple.present(&mut presenter);

    println!("== tap ==");
    ripple.set_interaction_enabled(&mut tree, true);
    ripple.set_interaction_enabled(&mut tree, true);
    if let Some(recognizer) = ripple.tap_recognizer() {
        let mut taps = 0_u32;
        let mut delegate = |_: &RippleView| taps += 1;
        let tap = TapGesture {
            recognizer,
            state: GestureState::Ended,
        };
        ripple.handle_tap(tap, Some(&mut delegate));
        ripple.handle_tap(tap, None);
        println!("  delegate saw {taps} tap(s)");
    }
    ripple.set_interaction_enabled(&mut tree, false);
    println!("  recognizers left: {}", tree.recognizers(ripple.id()).len());

    println!("== disappear ==");
    ripple.disappear(&mut tree);
    ripple.present(&mut presenter);

    // -- export JSON -------------------------------------------------------
    let path = "ripple_trace.json";
    let file = File::create(path).expect("failed to create ripple_trace.json");
    let mut writer = BufWriter::new(file);
    ripple_debug::json::export(&recorder.events(), &mut writer)
        .expect("failed to write ripple trace");

    println!("Wrote {path} ({} events)", recorder.len());
}
