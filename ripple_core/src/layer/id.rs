// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host handle types.

use core::fmt;

/// A handle to a view in the host hierarchy.
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a view is destroyed and its slot is reused. Hosts
/// other than [`ViewTree`](crate::tree::ViewTree) can build handles with
/// [`from_raw`](Self::from_raw) and treat both halves as opaque.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId {
    /// Slot index into the host's storage.
    pub(crate) idx: u32,
    /// Generation counter; must match the host's generation for this slot.
    pub(crate) generation: u32,
}

impl ViewId {
    /// Creates a handle from raw parts.
    #[inline]
    #[must_use]
    pub const fn from_raw(idx: u32, generation: u32) -> Self {
        Self { idx, generation }
    }

    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({}@gen{})", self.idx, self.generation)
    }
}

/// An opaque reference to an image owned by the host.
///
/// The icon layer presents the image centered and unscaled; loading and
/// decoding are the host's business.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({})", self.0)
    }
}

/// An opaque reference to a gesture recognizer registered with the host.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecognizerId(pub u32);

impl fmt::Debug for RecognizerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecognizerId({})", self.0)
    }
}
