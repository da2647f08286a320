// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative ring timeline.
//!
//! The ripple never steps its own animation. [`RippleView::start`] submits a
//! value description, an [`AnimationGroup`] of [`BasicAnimation`] tracks, to
//! the ring layer under [`RING_ANIMATION_KEY`], and the host compositor plays
//! it. For compositors without a native animator, [`AnimationGroup::sample`]
//! evaluates the same description at an elapsed time.
//!
//! The ring timeline has two tracks sharing one ease-out curve and one span:
//!
//! | key path          | from | to           |
//! |-------------------|------|--------------|
//! | `transform.scale` | 1.0  | `ring_scale` |
//! | `opacity`         | 1.0  | 0.0          |
//!
//! The group repeats forever with period `duration`. Each repetition snaps
//! back to the `from` values.
//!
//! [`RippleView::start`]: crate::view::RippleView::start

mod timing;

use alloc::vec;
use alloc::vec::Vec;

pub use timing::TimingFunction;

/// Key under which the ring timeline is attached to the ring layer.
pub const RING_ANIMATION_KEY: &str = "ring_animation";

/// The animated property of a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPath {
    /// Uniform scale about the layer's center.
    TransformScale,
    /// Layer opacity.
    Opacity,
}

impl KeyPath {
    /// Returns the conventional key-path string (`"transform.scale"`,
    /// `"opacity"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TransformScale => "transform.scale",
            Self::Opacity => "opacity",
        }
    }
}

/// How many times a group plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RepeatCount {
    /// Plays `n` times, then holds nothing (the layer's model values show).
    Times(u32),
    /// Repeats without bound.
    Infinite,
}

/// A single from→to track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicAnimation {
    /// Animated property.
    pub key_path: KeyPath,
    /// Value at the start of the track.
    pub from: f64,
    /// Value at the end of the track.
    pub to: f64,
    /// Track span in seconds.
    pub duration: f64,
    /// Easing curve.
    pub timing: TimingFunction,
}

impl BasicAnimation {
    /// Returns the track's value `local` seconds into its span.
    ///
    /// Times outside `[0, duration]` clamp to the end values. A zero-length
    /// track is already at `to`.
    #[must_use]
    pub fn value_at(&self, local: f64) -> f64 {
        let t = if self.duration > 0.0 {
            local / self.duration
        } else {
            1.0
        };
        let eased = self.timing.evaluate(t);
        self.from + (self.to - self.from) * eased
    }
}

/// A set of tracks played together with a shared period and repeat count.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationGroup {
    /// Tracks, each starting at the beginning of every period.
    pub animations: Vec<BasicAnimation>,
    /// Period in seconds.
    pub duration: f64,
    /// Repeat count.
    pub repeat: RepeatCount,
}

impl AnimationGroup {
    /// Builds the ring timeline: scale `1 → ring_scale` and opacity `1 → 0`,
    /// both ease-out over `duration`, repeating forever.
    #[must_use]
    pub fn ring(ring_scale: f64, duration: f64) -> Self {
        let track = |key_path, from, to| BasicAnimation {
            key_path,
            from,
            to,
            duration,
            timing: TimingFunction::EaseOut,
        };
        Self {
            animations: vec![
                track(KeyPath::TransformScale, 1.0, ring_scale),
                track(KeyPath::Opacity, 1.0, 0.0),
            ],
            duration,
            repeat: RepeatCount::Infinite,
        }
    }

    /// Returns the track animating `key_path`, if any.
    #[must_use]
    pub fn track(&self, key_path: KeyPath) -> Option<&BasicAnimation> {
        self.animations.iter().find(|a| a.key_path == key_path)
    }

    /// Evaluates the group `elapsed` seconds after it was attached.
    ///
    /// Returns `None` once a finite group has finished. Negative times are
    /// treated as zero. Properties without a track read as `1.0`, the
    /// identity for both scale and opacity.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> Option<TimelineSample> {
        let elapsed = elapsed.max(0.0);
        if self.duration <= 0.0 {
            return Some(self.sample_phase(self.duration.max(0.0)));
        }
        if let RepeatCount::Times(n) = self.repeat
            && elapsed >= self.duration * f64::from(n)
        {
            return None;
        }
        Some(self.sample_phase(elapsed % self.duration))
    }

    fn sample_phase(&self, phase: f64) -> TimelineSample {
        let value = |key_path| {
            self.track(key_path)
                .map_or(1.0, |track| track.value_at(phase))
        };
        TimelineSample {
            scale: value(KeyPath::TransformScale),
            opacity: value(KeyPath::Opacity),
        }
    }
}

/// Property values produced by [`AnimationGroup::sample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSample {
    /// Uniform scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]` for the ring timeline.
    pub opacity: f64,
}

/// An animation group attached to a layer under a key.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedAnimation {
    /// Attachment key.
    pub key: &'static str,
    /// The timeline description.
    pub group: AnimationGroup,
    /// Submission counter. Every attachment gets a fresh serial, so a
    /// replaced timeline (phase reset) is distinguishable from the old one.
    pub serial: u64,
}
