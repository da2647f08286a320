// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap bridge: one host tap recognizer, forwarded to a delegate.

use super::RippleView;
use crate::backend::GestureHost;
use crate::layer::RecognizerId;
use crate::trace::{IgnoredReason, InteractionEvent, TapDeliveryEvent};

/// Receives taps on a ripple.
///
/// The ripple never stores its delegate; the embedder owns it and lends it
/// to [`RippleView::handle_tap`] for each delivery. Closures taking
/// `&RippleView` implement this trait.
pub trait RippleDelegate {
    /// Called once per completed tap on `view`.
    fn ripple_view_tapped(&mut self, view: &RippleView);
}

impl<F: FnMut(&RippleView)> RippleDelegate for F {
    fn ripple_view_tapped(&mut self, view: &RippleView) {
        self(view);
    }
}

/// Phase of a host gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// The gesture was recognized but has not finished.
    Began,
    /// The gesture finished; for a tap, this is the tap.
    Ended,
    /// The gesture was interrupted.
    Cancelled,
    /// The recognizer gave up.
    Failed,
}

/// A tap notification from the host gesture system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TapGesture {
    /// The recognizer that fired.
    pub recognizer: RecognizerId,
    /// Its phase.
    pub state: GestureState,
}

impl RippleView {
    /// Enables or disables tap handling.
    ///
    /// Enabling registers exactly one tap recognizer; enabling again is a
    /// no-op. Disabling removes *every* recognizer on the view, including
    /// ones the ripple did not add.
    pub fn set_interaction_enabled<G: GestureHost + ?Sized>(&mut self, host: &mut G, enabled: bool) {
        if enabled {
            if self.interaction_enabled {
                return;
            }
            let Some(recognizer) = host.add_tap_recognizer(self.id) else {
                self.ignore(IgnoredReason::RecognizerUnavailable);
                return;
            };
            self.interaction_enabled = true;
            self.tap_recognizer = Some(recognizer);
        } else {
            host.remove_all_recognizers(self.id);
            self.interaction_enabled = false;
            self.tap_recognizer = None;
        }
        self.tracer.interaction(&InteractionEvent {
            view: self.id,
            enabled,
            recognizer: self.tap_recognizer,
        });
    }

    /// Whether tap handling is enabled.
    #[must_use]
    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// The recognizer registered by [`set_interaction_enabled`](Self::set_interaction_enabled).
    #[must_use]
    pub fn tap_recognizer(&self) -> Option<RecognizerId> {
        self.tap_recognizer
    }

    /// Forwards a host tap to `delegate`.
    ///
    /// Only completed taps from the ripple's own recognizer, while
    /// interaction is enabled, are forwarded. A `None` delegate drops the
    /// notification. Returns whether a delegate was called.
    pub fn handle_tap(
        &mut self,
        gesture: TapGesture,
        delegate: Option<&mut dyn RippleDelegate>,
    ) -> bool {
        if !self.interaction_enabled || self.tap_recognizer != Some(gesture.recognizer) {
            self.ignore(IgnoredReason::TapNotArmed);
            return false;
        }
        if gesture.state != GestureState::Ended {
            return false;
        }
        let delivered = match delegate {
            Some(delegate) => {
                delegate.ripple_view_tapped(self);
                true
            }
            None => false,
        };
        self.tracer.tap(&TapDeliveryEvent {
            view: self.id,
            delivered,
        });
        delivered
    }
}
