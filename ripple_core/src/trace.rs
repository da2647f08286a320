// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the ripple lifecycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that a
//! [`RippleView`](crate::view::RippleView) calls as it appears, animates,
//! toggles interaction, delivers taps, and quietly ignores requests it cannot
//! satisfy. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and the sink is dropped
//! on construction. When **on**, each method performs a single `Option`
//! branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use kurbo::Point;

use crate::layer::{RecognizerId, ViewId};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What happened to the ring timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationEventKind {
    /// A timeline was attached from `Idle`.
    Started,
    /// A running timeline was replaced, resetting its phase.
    Restarted,
    /// The timeline was removed by `stop()`.
    Stopped,
    /// The timeline was discarded because the view was detached.
    Discarded,
}

/// Why a request produced no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoredReason {
    /// The host refused to insert the view into the container.
    ContainerRejected,
    /// The anchor view has no container.
    AnchorDetached,
    /// The bar item has no backing view.
    BarItemUnresolved,
    /// The host could not register a tap recognizer.
    RecognizerUnavailable,
    /// A tap arrived while interaction was disabled or from a foreign
    /// recognizer.
    TapNotArmed,
    /// A configuration value was out of range; the previous value was kept.
    InvalidConfig(ConfigField),
}

/// A configuration field, for [`IgnoredReason::InvalidConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// `size`
    Size,
    /// `content_inset`
    ContentInset,
    /// `ring_scale`
    RingScale,
    /// `duration`
    Duration,
    /// `ring_width`
    RingWidth,
    /// Outer bounds passed to `set_bounds`.
    Bounds,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a ripple is inserted into a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppearEvent {
    /// The ripple's own view.
    pub view: ViewId,
    /// The container it now belongs to.
    pub container: ViewId,
    /// Its center in the container's space.
    pub center: Point,
    /// The container it was moved out of, if it was re-parented.
    pub previous: Option<ViewId>,
}

/// Emitted when a ripple leaves its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisappearEvent {
    /// The ripple's own view.
    pub view: ViewId,
    /// The container it left.
    pub container: ViewId,
}

/// Emitted when the ring timeline changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationEvent {
    /// The ripple's own view.
    pub view: ViewId,
    /// What happened.
    pub kind: AnimationEventKind,
    /// Serial of the timeline that was attached or removed.
    pub serial: u64,
}

/// Emitted when interaction is toggled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionEvent {
    /// The ripple's own view.
    pub view: ViewId,
    /// New state.
    pub enabled: bool,
    /// The recognizer registered by this toggle, if any.
    pub recognizer: Option<RecognizerId>,
}

/// Emitted for every completed tap the ripple accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapDeliveryEvent {
    /// The ripple's own view.
    pub view: ViewId,
    /// Whether a delegate received it. `false` means the delegate was gone
    /// and the notification was dropped.
    pub delivered: bool,
}

/// Emitted when a request degrades to a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IgnoredEvent {
    /// The ripple's own view.
    pub view: ViewId,
    /// Why nothing happened.
    pub reason: IgnoredReason,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a ripple view.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the ripple is inserted into a container.
    fn on_appear(&mut self, e: &AppearEvent) {
        _ = e;
    }

    /// Called after the ripple leaves its container.
    fn on_disappear(&mut self, e: &DisappearEvent) {
        _ = e;
    }

    /// Called when the ring timeline is attached, replaced, or removed.
    fn on_animation(&mut self, e: &AnimationEvent) {
        _ = e;
    }

    /// Called when interaction is enabled or disabled.
    fn on_interaction(&mut self, e: &InteractionEvent) {
        _ = e;
    }

    /// Called when a completed tap is accepted.
    fn on_tap(&mut self, e: &TapDeliveryEvent) {
        _ = e;
    }

    /// Called when a request is silently ignored.
    fn on_ignored(&mut self, e: &IgnoredEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owning wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::none()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            drop(sink);
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {}
        }
    }

    /// Emits an [`AppearEvent`].
    #[inline]
    pub fn appear(&mut self, e: &AppearEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_appear(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DisappearEvent`].
    #[inline]
    pub fn disappear(&mut self, e: &DisappearEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_disappear(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AnimationEvent`].
    #[inline]
    pub fn animation(&mut self, e: &AnimationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_animation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InteractionEvent`].
    #[inline]
    pub fn interaction(&mut self, e: &InteractionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_interaction(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TapDeliveryEvent`].
    #[inline]
    pub fn tap(&mut self, e: &TapDeliveryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tap(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IgnoredEvent`].
    #[inline]
    pub fn ignored(&mut self, e: &IgnoredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_ignored(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
