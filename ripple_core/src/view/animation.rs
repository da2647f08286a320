// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring timeline state machine.
//!
//! ```text
//!            start()               restart() / start()
//!   Idle ───────────────► Running ◄──────────────┐
//!    ▲                       │  └────────────────┘
//!    └───── stop() ──────────┘
//! ```
//!
//! The state is not stored separately: the ripple is `Running` exactly when
//! the ring layer holds an animation under [`RING_ANIMATION_KEY`].

use super::RippleView;
use crate::animation::{AnimationGroup, KeyedAnimation, RING_ANIMATION_KEY};
use crate::dirty;
use crate::layer::LayerSlot;
use crate::trace::{AnimationEvent, AnimationEventKind};
use crate::transform::Transform3d;

/// Whether the ring timeline is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// No ring timeline.
    Idle,
    /// The ring timeline is attached and repeating.
    Running,
}

/// Ring transform and opacity at a point on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPresentation {
    /// Scale about the ring frame's center, in the view's local space.
    pub transform: Transform3d,
    /// Ring opacity.
    pub opacity: f64,
}

impl RippleView {
    /// Attaches a fresh ring timeline built from the current scale and
    /// duration, replacing any existing one. The phase starts at zero.
    pub fn start(&mut self) {
        let replaced = self.ring.remove_animation(RING_ANIMATION_KEY);
        self.next_serial += 1;
        let serial = self.next_serial;
        self.ring.add_animation(KeyedAnimation {
            key: RING_ANIMATION_KEY,
            group: AnimationGroup::ring(self.config.ring_scale, self.config.duration),
            serial,
        });
        self.dirty.mark(LayerSlot::Ring.index(), dirty::ANIMATION);
        self.tracer.animation(&AnimationEvent {
            view: self.id,
            kind: if replaced {
                AnimationEventKind::Restarted
            } else {
                AnimationEventKind::Started
            },
            serial,
        });
    }

    /// Replaces the ring timeline if one is running. Does nothing while idle.
    pub fn restart(&mut self) {
        if self.animation_state() == AnimationState::Running {
            self.start();
        }
    }

    /// Removes the ring timeline.
    pub fn stop(&mut self) {
        self.remove_ring_timeline(AnimationEventKind::Stopped);
    }

    pub(super) fn remove_ring_timeline(&mut self, kind: AnimationEventKind) {
        let Some(serial) = self.ring_timeline().map(|t| t.serial) else {
            return;
        };
        self.ring.remove_animation(RING_ANIMATION_KEY);
        self.dirty.mark(LayerSlot::Ring.index(), dirty::ANIMATION);
        self.tracer.animation(&AnimationEvent {
            view: self.id,
            kind,
            serial,
        });
    }

    /// Returns the current animation state.
    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        if self.ring_timeline().is_some() {
            AnimationState::Running
        } else {
            AnimationState::Idle
        }
    }

    /// Returns the attached ring timeline, if running.
    #[must_use]
    pub fn ring_timeline(&self) -> Option<&KeyedAnimation> {
        self.ring.animation(RING_ANIMATION_KEY)
    }

    /// Samples the ring timeline `elapsed` seconds after it was attached.
    ///
    /// Returns `None` while idle.
    #[must_use]
    pub fn ring_presentation(&self, elapsed: f64) -> Option<RingPresentation> {
        let sample = self.ring_timeline()?.group.sample(elapsed)?;
        Some(RingPresentation {
            transform: Transform3d::scale_about(self.ring.frame.center(), sample.scale),
            opacity: sample.opacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::*;
    use crate::animation::{KeyPath, RepeatCount};
    use crate::color::Color;
    use crate::layer::ViewId;

    fn view() -> RippleView {
        RippleView::new(ViewId::from_raw(0, 0), Color::ACCENT_BLUE)
    }

    #[test]
    fn start_then_stop() {
        let mut v = view();
        v.start();
        assert_eq!(v.animation_state(), AnimationState::Running);
        v.stop();
        assert_eq!(v.animation_state(), AnimationState::Idle);
        assert_eq!(v.ring().animation_keys().count(), 0);
    }

    #[test]
    fn restart_while_idle_creates_nothing() {
        let mut v = view();
        v.restart();
        assert_eq!(v.animation_state(), AnimationState::Idle);
        assert!(v.ring_timeline().is_none());
    }

    #[test]
    fn restart_while_running_replaces_timeline() {
        let mut v = view();
        v.start();
        let first = v.ring_timeline().map(|t| t.serial);
        v.restart();
        assert_eq!(v.animation_state(), AnimationState::Running);
        let second = v.ring_timeline().map(|t| t.serial);
        assert!(second > first, "fresh serial means phase reset");
        assert_eq!(v.ring().animation_keys().count(), 1, "one keyed timeline");
    }

    #[test]
    fn default_timeline_matches_configuration() {
        let mut v = view();
        v.start();
        let t = v.ring_timeline().expect("running");
        assert_eq!(t.key, "ring_animation");
        assert_eq!(t.group.duration, 1.5);
        assert_eq!(t.group.repeat, RepeatCount::Infinite);
        let scale = t.group.track(KeyPath::TransformScale).expect("scale");
        assert_eq!((scale.from, scale.to), (1.0, 2.0));
        let opacity = t.group.track(KeyPath::Opacity).expect("opacity");
        assert_eq!((opacity.from, opacity.to), (1.0, 0.0));
    }

    #[test]
    fn timeline_lives_on_ring_only() {
        let mut v = view();
        v.start();
        assert!(v.core().animation(RING_ANIMATION_KEY).is_none());
    }

    #[test]
    fn stop_while_idle_is_noop() {
        let mut v = view();
        let _ = v.evaluate();
        v.stop();
        assert!(v.evaluate().animations.is_empty());
    }

    #[test]
    fn presentation_scales_about_ring_center() {
        let mut v = view();
        v.set_bounds(Size::new(24.0, 24.0));
        assert!(v.ring_presentation(0.0).is_none(), "idle");

        v.start();
        let start = v.ring_presentation(0.0).expect("running");
        assert_eq!(start.opacity, 1.0);
        assert_eq!(start.transform.transform_point(Point::new(3.0, 5.0)), Point::new(3.0, 5.0));

        let late = v.ring_presentation(1.5 - 1e-6).expect("running");
        let center = Point::new(12.0, 12.0);
        let p = late.transform.transform_point(center);
        assert!((p - center).hypot() < 1e-9, "center is fixed");
        let edge = late.transform.transform_point(Point::new(24.0, 12.0));
        assert!((edge.x - 36.0).abs() < 1e-3, "edge at {}", edge.x);
        assert!(late.opacity < 1e-3);
    }
}
