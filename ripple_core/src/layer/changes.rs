// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change sets produced by evaluating a ripple view.

use alloc::vec::Vec;

use super::LayerSlot;

/// The set of changes produced by a single
/// [`RippleView::evaluate`](crate::view::RippleView::evaluate) call.
///
/// Each field lists the layers that changed in the corresponding category,
/// in slot order. Presenters read current values from the view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerChanges {
    /// Layers whose frame or path changed.
    pub geometry: Vec<LayerSlot>,
    /// Layers whose fill, stroke, or line width changed.
    pub style: Vec<LayerSlot>,
    /// Layers whose hidden flag changed.
    pub visibility: Vec<LayerSlot>,
    /// Layers whose image changed.
    pub content: Vec<LayerSlot>,
    /// Layers whose keyed animations changed.
    pub animations: Vec<LayerSlot>,
}

impl LayerChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.style.clear();
        self.visibility.clear();
        self.content.clear();
        self.animations.clear();
    }

    /// Returns whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
            && self.style.is_empty()
            && self.visibility.is_empty()
            && self.content.is_empty()
            && self.animations.is_empty()
    }
}
