// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability contract.
//!
//! The ripple owns its state; everything platform-specific is consumed
//! through the traits in this module:
//!
//! - **[`ViewHost`]**: the host view hierarchy. Parent lookup, center and
//!   bounds, and insertion as the top-most child of a container.
//!
//! - **[`Presenter`]**: applies [`LayerChanges`] to native layers (a filled
//!   disc, a stroked ring, a centered image) and hands the ring's keyed
//!   timeline to the native animator.
//!
//! - **[`GestureHost`]**: registers and unregisters tap recognizers. Tap
//!   notifications come back through
//!   [`RippleView::handle_tap`](crate::view::RippleView::handle_tap).
//!
//! - **[`BarItemResolver`]** (optional): maps a logical toolbar or navigation
//!   bar item to the concrete view backing it. This is inherently
//!   platform-specific, so it is injected rather than reimplemented.
//!
//! All calls happen synchronously on the host UI thread.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_frame() {
//!     // Layout, setters, and lifecycle calls have already run this turn.
//!     let changes = ripple.evaluate();
//!     presenter.apply(&ripple, &changes);
//! }
//! ```

use kurbo::{Point, Size};

use crate::layer::{LayerChanges, RecognizerId, ViewId};
use crate::view::RippleView;

/// The host view hierarchy as seen by a ripple.
///
/// Implementations must tolerate unknown or stale handles: lookups return
/// `None` and mutations do nothing.
pub trait ViewHost {
    /// Returns the container `view` is currently in.
    fn parent_of(&self, view: ViewId) -> Option<ViewId>;

    /// Returns `view`'s center in its container's coordinate space.
    fn center_of(&self, view: ViewId) -> Option<Point>;

    /// Sets `view`'s center (container space) and local bounds size.
    fn place(&mut self, view: ViewId, center: Point, bounds: Size);

    /// Inserts `child` as the top-most child of `container`, removing it from
    /// any previous container first.
    ///
    /// Returns `false`, leaving the hierarchy untouched, if the insertion is
    /// impossible (unknown container, or `child` is `container` or one of its
    /// ancestors).
    fn attach_top(&mut self, container: ViewId, child: ViewId) -> bool;

    /// Removes `view` from its container, if it has one.
    fn detach(&mut self, view: ViewId);
}

/// Gesture-recognizer registration.
pub trait GestureHost {
    /// Registers a single-tap recognizer on `view`.
    ///
    /// Returns `None` if the view is unknown.
    fn add_tap_recognizer(&mut self, view: ViewId) -> Option<RecognizerId>;

    /// Unregisters every recognizer on `view`, whoever added it.
    fn remove_all_recognizers(&mut self, view: ViewId);
}

/// Resolves the concrete view backing a logical bar item.
///
/// Returns `None` when the item has no backing view yet (for example, before
/// the bar has been laid out). Implemented for closures, so a host can pass
/// `|item: &MyItem| item.view()`.
pub trait BarItemResolver<Item: ?Sized> {
    /// Returns the view currently backing `item`.
    fn backing_view(&self, item: &Item) -> Option<ViewId>;
}

impl<Item: ?Sized, F> BarItemResolver<Item> for F
where
    F: Fn(&Item) -> Option<ViewId>,
{
    fn backing_view(&self, item: &Item) -> Option<ViewId> {
        self(item)
    }
}

/// Applies evaluated ripple changes to a platform-native layer tree.
///
/// Layer-based and software presenters both implement this trait, enabling
/// generic frame loops and test doubles.
pub trait Presenter {
    /// Applies `changes` to the native layers backing `view`, reading current
    /// property values from `view` as needed.
    fn apply(&mut self, view: &RippleView, changes: &LayerChanges);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        view: Option<ViewId>,
    }

    fn resolve<R: BarItemResolver<Item>>(r: &R, item: &Item) -> Option<ViewId> {
        r.backing_view(item)
    }

    #[test]
    fn closures_are_resolvers() {
        let laid_out = Item {
            view: Some(ViewId::from_raw(4, 0)),
        };
        let pending = Item { view: None };
        let by_field = |item: &Item| item.view;
        assert_eq!(resolve(&by_field, &laid_out), Some(ViewId::from_raw(4, 0)));
        assert_eq!(resolve(&by_field, &pending), None);
    }
}
