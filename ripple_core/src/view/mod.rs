// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ripple indicator view.
//!
//! [`RippleView`] owns the configuration, the three sublayers, the ring
//! timeline, the attachment state, and the tap bridge. It is split across
//! submodules by concern:
//!
//! - `config`: [`RippleConfig`] and the validating setters.
//! - `animation`: `start` / `stop` / `restart` and timeline queries.
//! - `attach`: `appear_*` / `disappear`.
//! - `tap`: interaction toggle and tap delivery to a [`RippleDelegate`].
//!
//! Host state (the view hierarchy, gesture recognizers) is never owned; each
//! operation that needs it borrows a host trait object for the call.

mod animation;
mod attach;
mod config;
mod tap;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Size;
use understory_dirty::{Channel, CycleHandling, DirtyTracker};

pub use animation::{AnimationState, RingPresentation};
pub use attach::Attachment;
pub use config::RippleConfig;
pub use tap::{GestureState, RippleDelegate, TapGesture};

use crate::backend::Presenter;
use crate::color::Color;
use crate::dirty;
use crate::layer::{ImageLayer, LayerChanges, LayerSlot, RecognizerId, ShapeLayer, ViewId};
use crate::layout::RippleLayout;
use crate::trace::{ConfigField, IgnoredEvent, IgnoredReason, TraceSink, Tracer};

/// An animated ripple indicator.
///
/// Constructed detached and idle with the default configuration. The value
/// is owned by whoever holds it; nothing in the host keeps it alive.
#[derive(Debug)]
pub struct RippleView {
    id: ViewId,
    config: RippleConfig,
    default_tint: Color,
    bounds: Size,
    layout: RippleLayout,

    ring: ShapeLayer,
    core: ShapeLayer,
    icon: ImageLayer,

    attachment: Attachment,
    interaction_enabled: bool,
    tap_recognizer: Option<RecognizerId>,
    next_serial: u64,

    dirty: DirtyTracker<u32>,
    tracer: Tracer,
}

impl RippleView {
    /// Creates a detached, idle ripple backed by the host view `id`.
    ///
    /// `default_tint` is used whenever no explicit tint is configured.
    #[must_use]
    pub fn new(id: ViewId, default_tint: Color) -> Self {
        let config = RippleConfig::default();
        let mut view = Self {
            id,
            config,
            default_tint,
            bounds: Size::ZERO,
            layout: RippleLayout::compute(Size::ZERO, config.content_inset),
            ring: ShapeLayer::ring(default_tint, config.ring_width),
            core: ShapeLayer::disc(default_tint),
            icon: ImageLayer::new(),
            attachment: Attachment::Detached,
            interaction_enabled: false,
            tap_recognizer: None,
            next_serial: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            tracer: Tracer::none(),
        };
        view.apply_layout();
        // The first evaluation reports every layer in full.
        for slot in [LayerSlot::Ring, LayerSlot::Core] {
            view.dirty.mark(slot.index(), dirty::GEOMETRY);
            view.dirty.mark(slot.index(), dirty::STYLE);
            view.dirty.mark(slot.index(), dirty::VISIBILITY);
        }
        view.dirty.mark(LayerSlot::Icon.index(), dirty::GEOMETRY);
        view.dirty.mark(LayerSlot::Icon.index(), dirty::CONTENT);
        view
    }

    /// Creates a ripple and applies `config` through the setters.
    ///
    /// Out-of-range fields keep their defaults.
    #[must_use]
    pub fn with_config(id: ViewId, default_tint: Color, config: RippleConfig) -> Self {
        let mut view = Self::new(id, default_tint);
        view.set_size(config.size);
        view.set_content_inset(config.content_inset);
        view.set_ring_scale(config.ring_scale);
        view.set_duration(config.duration);
        view.set_ring_width(config.ring_width);
        view.set_tint(config.tint);
        view.set_core_hidden(config.core_hidden);
        view.set_ring_hidden(config.ring_hidden);
        view.set_icon(config.icon);
        view
    }

    /// Installs a trace sink. Events are only emitted with the `trace`
    /// feature enabled.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer = Tracer::new(sink);
    }

    /// The host view backing this ripple.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Current local bounds size.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Result of the last layout pass.
    #[must_use]
    pub fn layout(&self) -> &RippleLayout {
        &self.layout
    }

    /// The stroked ring layer.
    #[must_use]
    pub fn ring(&self) -> &ShapeLayer {
        &self.ring
    }

    /// The filled core layer.
    #[must_use]
    pub fn core(&self) -> &ShapeLayer {
        &self.core
    }

    /// The icon layer.
    #[must_use]
    pub fn icon(&self) -> &ImageLayer {
        &self.icon
    }

    /// Sets the local bounds size and runs a layout pass.
    ///
    /// Negative or non-finite sizes are ignored.
    pub fn set_bounds(&mut self, bounds: Size) {
        if !config::valid_size(bounds) {
            self.tracer.ignored(&IgnoredEvent {
                view: self.id,
                reason: IgnoredReason::InvalidConfig(ConfigField::Bounds),
            });
            return;
        }
        self.bounds = bounds;
        self.layout_subviews();
    }

    /// Runs a layout pass: recomputes the content frame and the inscribed
    /// oval, and applies them to all three sublayers.
    pub fn layout_subviews(&mut self) {
        let layout = RippleLayout::compute(self.bounds, self.config.content_inset);
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        self.apply_layout();
        for slot in LayerSlot::ALL {
            self.dirty.mark(slot.index(), dirty::GEOMETRY);
        }
    }

    fn apply_layout(&mut self) {
        let RippleLayout { content, oval } = self.layout;
        self.core.frame = content;
        self.core.path = oval;
        self.ring.frame = content;
        self.ring.path = oval;
        self.icon.frame = content;
    }

    // -- Evaluation --

    /// Drains all dirty channels and returns the changed layers.
    #[must_use]
    pub fn evaluate(&mut self) -> LayerChanges {
        let mut changes = LayerChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), reusing `changes`' allocations.
    pub fn evaluate_into(&mut self, changes: &mut LayerChanges) {
        changes.clear();
        self.drain_into(dirty::GEOMETRY, &mut changes.geometry);
        self.drain_into(dirty::STYLE, &mut changes.style);
        self.drain_into(dirty::VISIBILITY, &mut changes.visibility);
        self.drain_into(dirty::CONTENT, &mut changes.content);
        self.drain_into(dirty::ANIMATION, &mut changes.animations);
    }

    /// Evaluates and hands the changes to `presenter`, if there are any.
    ///
    /// Returns whether anything was presented.
    pub fn present<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> bool {
        let changes = self.evaluate();
        if changes.is_empty() {
            return false;
        }
        presenter.apply(self, &changes);
        true
    }

    fn drain_into(&mut self, channel: Channel, out: &mut Vec<LayerSlot>) {
        out.extend(
            self.dirty
                .drain(channel)
                .deterministic()
                .run()
                .filter_map(LayerSlot::from_index),
        );
        out.sort_unstable();
        out.dedup();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Point, Rect};

    use super::*;
    use crate::layer::ImageId;

    fn view() -> RippleView {
        RippleView::new(ViewId::from_raw(3, 0), Color::ACCENT_BLUE)
    }

    #[test]
    fn new_view_is_detached_idle_and_default() {
        let v = view();
        assert!(!v.is_appeared());
        assert_eq!(v.animation_state(), AnimationState::Idle);
        assert_eq!(*v.config(), RippleConfig::default());
        assert!(!v.is_interaction_enabled());
        assert_eq!(v.bounds(), Size::ZERO);
    }

    #[test]
    fn first_evaluate_reports_everything_then_nothing() {
        let mut v = view();
        let changes = v.evaluate();
        assert_eq!(changes.geometry, LayerSlot::ALL);
        assert_eq!(changes.style, [LayerSlot::Ring, LayerSlot::Core]);
        assert_eq!(changes.visibility, [LayerSlot::Ring, LayerSlot::Core]);
        assert_eq!(changes.content, [LayerSlot::Icon]);
        assert!(changes.animations.is_empty());

        assert!(v.evaluate().is_empty(), "drained");
    }

    #[test]
    fn evaluate_reports_each_category() {
        let mut v = view();
        let _ = v.evaluate();

        v.set_bounds(Size::new(30.0, 30.0));
        v.set_tint(Some(Color::TRANSPARENT));
        v.set_ring_hidden(true);
        v.set_icon(Some(ImageId(1)));
        v.start();

        let changes = v.evaluate();
        assert_eq!(changes.geometry, LayerSlot::ALL);
        assert_eq!(changes.style, [LayerSlot::Ring, LayerSlot::Core]);
        assert_eq!(changes.visibility, [LayerSlot::Ring]);
        assert_eq!(changes.content, [LayerSlot::Icon]);
        assert_eq!(changes.animations, [LayerSlot::Ring]);
    }

    #[test]
    fn unchanged_layout_marks_nothing() {
        let mut v = view();
        v.set_bounds(Size::new(24.0, 24.0));
        let _ = v.evaluate();
        v.set_bounds(Size::new(24.0, 24.0));
        assert!(v.evaluate().geometry.is_empty());
    }

    #[test]
    fn layers_share_content_frame_and_oval() {
        let mut v = view();
        v.set_content_inset(2.0);
        v.set_bounds(Size::new(24.0, 20.0));
        let expected = Rect::new(2.0, 2.0, 22.0, 18.0);
        assert_eq!(v.core().frame(), expected);
        assert_eq!(v.ring().frame(), expected);
        assert_eq!(v.icon().frame(), expected);
        assert_eq!(v.core().path(), v.ring().path());
        assert_eq!(v.core().path().center(), Point::new(10.0, 8.0));
    }

    #[test]
    fn oversized_inset_collapses_frames() {
        let mut v = view();
        v.set_bounds(Size::new(24.0, 10.0));
        v.set_content_inset(6.0);
        assert_eq!(v.core().frame().size(), Size::ZERO);
        assert_eq!(v.ring().frame().size(), Size::ZERO);
    }

    #[test]
    fn invalid_bounds_are_ignored() {
        let mut v = view();
        v.set_bounds(Size::new(10.0, 10.0));
        v.set_bounds(Size::new(-1.0, 10.0));
        assert_eq!(v.bounds(), Size::new(10.0, 10.0));
    }

    #[test]
    fn with_config_applies_valid_fields_only() {
        let config = RippleConfig {
            size: Size::new(40.0, 40.0),
            content_inset: -3.0,
            ring_scale: 3.0,
            duration: 0.0,
            icon: Some(ImageId(9)),
            ..RippleConfig::default()
        };
        let v = RippleView::with_config(ViewId::from_raw(0, 0), Color::ACCENT_BLUE, config);
        assert_eq!(v.config().size, Size::new(40.0, 40.0));
        assert_eq!(v.config().content_inset, 0.0);
        assert_eq!(v.config().ring_scale, 3.0);
        assert_eq!(v.config().duration, 1.5);
        assert_eq!(v.icon().image(), Some(ImageId(9)));
        assert_eq!(v.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn present_skips_empty_change_sets() {
        struct Counting(Vec<LayerChanges>);
        impl Presenter for Counting {
            fn apply(&mut self, _view: &RippleView, changes: &LayerChanges) {
                self.0.push(changes.clone());
            }
        }

        let mut v = view();
        let mut p = Counting(vec![]);
        assert!(v.present(&mut p));
        assert!(!v.present(&mut p));
        v.set_ring_width(2.0);
        assert!(v.present(&mut p));
        assert_eq!(p.0.len(), 2);
        assert_eq!(p.0[1].style, [LayerSlot::Ring]);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn lifecycle_is_traced() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        use kurbo::Vec2;

        use crate::trace::{
            AnimationEvent, AnimationEventKind, AppearEvent, IgnoredEvent, TraceSink,
        };
        use crate::tree::ViewTree;

        #[derive(Default)]
        struct Log {
            appears: Vec<AppearEvent>,
            animations: Vec<AnimationEventKind>,
            ignored: Vec<IgnoredReason>,
        }
        struct Sink(Rc<RefCell<Log>>);
        impl TraceSink for Sink {
            fn on_appear(&mut self, e: &AppearEvent) {
                self.0.borrow_mut().appears.push(*e);
            }
            fn on_animation(&mut self, e: &AnimationEvent) {
                self.0.borrow_mut().animations.push(e.kind);
            }
            fn on_ignored(&mut self, e: &IgnoredEvent) {
                self.0.borrow_mut().ignored.push(e.reason);
            }
        }

        let mut tree = ViewTree::new();
        let window = tree.create_view();
        let loose = tree.create_view();
        let mut v = RippleView::new(tree.create_view(), Color::ACCENT_BLUE);
        let log = Rc::new(RefCell::new(Log::default()));
        v.set_trace_sink(Box::new(Sink(Rc::clone(&log))));

        v.set_duration(0.0);
        v.appear_at_anchor_view(&mut tree, loose, Vec2::ZERO);
        v.appear_at(&mut tree, Point::new(4.0, 4.0), window);
        v.set_ring_scale(3.0);
        v.disappear(&mut tree);

        let log = log.borrow();
        assert_eq!(
            log.ignored,
            [
                IgnoredReason::InvalidConfig(ConfigField::Duration),
                IgnoredReason::AnchorDetached,
            ]
        );
        assert_eq!(log.appears.len(), 1);
        assert_eq!(log.appears[0].container, window);
        assert_eq!(
            log.animations,
            [
                AnimationEventKind::Started,
                AnimationEventKind::Restarted,
                AnimationEventKind::Discarded,
            ]
        );
    }
}
