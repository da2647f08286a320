// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! A ripple view tracks changes to its three sublayers with multi-channel
//! dirty tracking (via [`understory_dirty`]). The key is the layer's slot
//! index ([`LayerSlot::index`](crate::layer::LayerSlot::index)); each channel
//! is an independent category of change. All channels are local-only: the
//! sublayers are siblings, so nothing propagates between them.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`RippleView::evaluate`](crate::view::RippleView::evaluate) call drains all
//! channels and surfaces the results as
//! [`LayerChanges`](crate::layer::LayerChanges), which presenters
//! [consume](crate::backend::Presenter::apply).

use understory_dirty::Channel;

/// Frame or path changed (layout pass).
pub const GEOMETRY: Channel = Channel::new(0);

/// Fill, stroke, or line width changed.
pub const STYLE: Channel = Channel::new(1);

/// Hidden flag changed.
pub const VISIBILITY: Channel = Channel::new(2);

/// Image content changed (icon layer only).
pub const CONTENT: Channel = Channel::new(3);

/// A keyed animation was added or removed (ring layer only).
pub const ANIMATION: Channel = Channel::new(4);
