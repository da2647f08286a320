// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ripple's sublayers and change reporting.
//!
//! A [`RippleView`](crate::view::RippleView) exclusively owns three layers,
//! addressed by [`LayerSlot`], stacked bottom to top:
//!
//! - **Ring** ([`ShapeLayer`]): stroked oval that carries the repeating
//!   timeline.
//! - **Core** ([`ShapeLayer`]): filled oval at the center.
//! - **Icon** ([`ImageLayer`]): optional image, centered and unscaled.
//!
//! All three share the layout's content frame. Mutations mark dirty channels
//! (see [`dirty`](crate::dirty)); evaluation reports them as
//! [`LayerChanges`] for presenters.

mod changes;
mod id;
mod shape;

pub use changes::LayerChanges;
pub use id::{ImageId, RecognizerId, ViewId};
pub use shape::{ContentMode, ImageLayer, ShapeLayer};

/// Identifies one of the view's three sublayers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerSlot {
    /// The animated ring (bottom-most).
    Ring,
    /// The filled core disc.
    Core,
    /// The icon (top-most).
    Icon,
}

impl LayerSlot {
    /// All slots in back-to-front order.
    pub const ALL: [Self; 3] = [Self::Ring, Self::Core, Self::Icon];

    /// Returns the slot's dirty-tracking key.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Ring => 0,
            Self::Core => 1,
            Self::Icon => 2,
        }
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    #[must_use]
    pub const fn from_index(idx: u32) -> Option<Self> {
        match idx {
            0 => Some(Self::Ring),
            1 => Some(Self::Core),
            2 => Some(Self::Icon),
            _ => None,
        }
    }
}
