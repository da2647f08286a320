// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attaching the ripple to, and detaching it from, a host container.

use kurbo::{Point, Vec2};

use super::RippleView;
use crate::backend::{BarItemResolver, ViewHost};
use crate::layer::ViewId;
use crate::trace::{AnimationEventKind, AppearEvent, DisappearEvent, IgnoredEvent, IgnoredReason};

/// Where the ripple currently lives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Attachment {
    /// Not in any container.
    Detached,
    /// The top-most child of `container`, centered at `center` in the
    /// container's space.
    Attached {
        /// The container view.
        container: ViewId,
        /// Center in the container's space.
        center: Point,
    },
}

impl RippleView {
    /// Places the ripple at `point` in `container`'s space, on top of the
    /// container's other children, and starts the ring timeline.
    ///
    /// The bounds are reset to the configured size first. If the ripple was
    /// already in a container it moves. If the host refuses the insertion,
    /// nothing changes.
    pub fn appear_at<H: ViewHost + ?Sized>(&mut self, host: &mut H, point: Point, container: ViewId) {
        let previous = host.parent_of(self.id);
        if !host.attach_top(container, self.id) {
            self.ignore(IgnoredReason::ContainerRejected);
            return;
        }

        let size = self.config.size;
        self.set_bounds(size);
        host.place(self.id, point, size);
        self.attachment = Attachment::Attached {
            container,
            center: point,
        };
        self.tracer.appear(&AppearEvent {
            view: self.id,
            container,
            center: point,
            previous: previous.filter(|p| *p != container),
        });
        self.start();
    }

    /// Appears in `anchor`'s container at `anchor`'s center plus `offset`.
    ///
    /// Does nothing if `anchor` has no container.
    pub fn appear_at_anchor_view<H: ViewHost + ?Sized>(
        &mut self,
        host: &mut H,
        anchor: ViewId,
        offset: Vec2,
    ) {
        let (Some(container), Some(center)) = (host.parent_of(anchor), host.center_of(anchor))
        else {
            self.ignore(IgnoredReason::AnchorDetached);
            return;
        };
        self.appear_at(host, center + offset, container);
    }

    /// Appears next to the view backing a toolbar or navigation-bar item.
    ///
    /// Does nothing if `resolver` finds no backing view, or if that view has
    /// no container.
    pub fn appear_at_bar_item<H, R, Item>(
        &mut self,
        host: &mut H,
        resolver: &R,
        item: &Item,
        offset: Vec2,
    ) where
        H: ViewHost + ?Sized,
        R: BarItemResolver<Item> + ?Sized,
        Item: ?Sized,
    {
        let Some(anchor) = resolver.backing_view(item) else {
            self.ignore(IgnoredReason::BarItemUnresolved);
            return;
        };
        self.appear_at_anchor_view(host, anchor, offset);
    }

    /// Removes the ripple from its container and discards the ring
    /// timeline. Does nothing while detached.
    pub fn disappear<H: ViewHost + ?Sized>(&mut self, host: &mut H) {
        let Attachment::Attached { container, .. } = self.attachment else {
            return;
        };
        host.detach(self.id);
        self.attachment = Attachment::Detached;
        self.remove_ring_timeline(AnimationEventKind::Discarded);
        self.tracer.disappear(&DisappearEvent {
            view: self.id,
            container,
        });
    }

    /// Whether the ripple is in a container.
    #[must_use]
    pub fn is_appeared(&self) -> bool {
        matches!(self.attachment, Attachment::Attached { .. })
    }

    /// Current attachment.
    #[must_use]
    pub fn attachment(&self) -> Attachment {
        self.attachment
    }

    pub(super) fn ignore(&mut self, reason: IgnoredReason) {
        self.tracer.ignored(&IgnoredEvent {
            view: self.id,
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::color::Color;
    use crate::tree::ViewTree;
    use crate::view::AnimationState;

    struct Scene {
        tree: ViewTree,
        window: ViewId,
        toolbar: ViewId,
        button: ViewId,
        ripple: RippleView,
    }

    fn scene() -> Scene {
        let mut tree = ViewTree::new();
        let window = tree.create_view();
        tree.set_bounds(window, Size::new(320.0, 640.0));
        tree.set_center(window, Point::new(160.0, 320.0));

        let toolbar = tree.create_view();
        tree.set_bounds(toolbar, Size::new(320.0, 44.0));
        tree.set_center(toolbar, Point::new(160.0, 618.0));
        tree.add_child(window, toolbar);

        let button = tree.create_view();
        tree.set_bounds(button, Size::new(44.0, 44.0));
        tree.set_center(button, Point::new(40.0, 22.0));
        tree.add_child(toolbar, button);

        let id = tree.create_view();
        let ripple = RippleView::new(id, Color::ACCENT_BLUE);
        Scene {
            tree,
            window,
            toolbar,
            button,
            ripple,
        }
    }

    #[test]
    fn appear_at_places_on_top_and_runs() {
        let mut s = scene();
        let p = Point::new(100.0, 200.0);
        s.ripple.appear_at(&mut s.tree, p, s.window);

        let id = s.ripple.id();
        assert!(s.ripple.is_appeared());
        assert_eq!(s.ripple.animation_state(), AnimationState::Running);
        assert_eq!(s.tree.parent(id), Some(s.window));
        assert_eq!(s.tree.top_child(s.window), Some(id));
        assert_eq!(s.tree.center(id), p);
        assert_eq!(s.tree.bounds(id), Size::new(24.0, 24.0));
        assert_eq!(s.ripple.bounds(), Size::new(24.0, 24.0));
        assert_eq!(
            s.ripple.attachment(),
            Attachment::Attached {
                container: s.window,
                center: p
            }
        );
    }

    #[test]
    fn appear_uses_configured_size() {
        let mut s = scene();
        s.ripple.set_size(Size::new(40.0, 30.0));
        s.ripple.set_content_inset(5.0);
        s.ripple.appear_at(&mut s.tree, Point::ZERO, s.window);
        assert_eq!(s.tree.bounds(s.ripple.id()), Size::new(40.0, 30.0));
        assert_eq!(s.ripple.core().frame().size(), Size::new(30.0, 20.0));
    }

    #[test]
    fn disappear_detaches_and_discards_timeline() {
        let mut s = scene();
        s.ripple.appear_at(&mut s.tree, Point::ZERO, s.window);
        s.ripple.disappear(&mut s.tree);

        assert!(!s.ripple.is_appeared());
        assert_eq!(s.ripple.animation_state(), AnimationState::Idle);
        assert_eq!(s.tree.parent(s.ripple.id()), None);
    }

    #[test]
    fn disappear_while_detached_is_noop() {
        let mut s = scene();
        let _ = s.ripple.evaluate();
        s.ripple.disappear(&mut s.tree);
        assert!(!s.ripple.is_appeared());
        assert!(s.ripple.evaluate().is_empty());
    }

    #[test]
    fn appearing_elsewhere_reparents() {
        let mut s = scene();
        s.ripple.appear_at(&mut s.tree, Point::ZERO, s.window);
        let first = s.ripple.ring_timeline().map(|t| t.serial);
        s.ripple.appear_at(&mut s.tree, Point::new(5.0, 5.0), s.toolbar);

        let id = s.ripple.id();
        assert_eq!(s.tree.parent(id), Some(s.toolbar));
        assert!(s.tree.children(s.window).all(|c| c != id));
        assert!(s.ripple.ring_timeline().map(|t| t.serial) > first);
    }

    #[test]
    fn anchor_view_center_plus_offset() {
        let mut s = scene();
        s.ripple
            .appear_at_anchor_view(&mut s.tree, s.button, Vec2::new(10.0, -4.0));
        let id = s.ripple.id();
        assert_eq!(s.tree.parent(id), Some(s.toolbar));
        assert_eq!(s.tree.center(id), Point::new(50.0, 18.0));
    }

    #[test]
    fn detached_anchor_changes_nothing() {
        let mut s = scene();
        let loose = s.tree.create_view();
        s.ripple.appear_at_anchor_view(&mut s.tree, loose, Vec2::ZERO);
        assert!(!s.ripple.is_appeared());
        assert_eq!(s.ripple.animation_state(), AnimationState::Idle);
        assert_eq!(s.ripple.bounds(), Size::ZERO);
    }

    #[test]
    fn bar_item_resolves_through_closure() {
        struct BarItem {
            backing: Option<ViewId>,
        }

        let mut s = scene();
        let resolver = |item: &BarItem| item.backing;

        let pending = BarItem { backing: None };
        s.ripple
            .appear_at_bar_item(&mut s.tree, &resolver, &pending, Vec2::ZERO);
        assert!(!s.ripple.is_appeared());

        let laid_out = BarItem {
            backing: Some(s.button),
        };
        s.ripple
            .appear_at_bar_item(&mut s.tree, &resolver, &laid_out, Vec2::ZERO);
        assert!(s.ripple.is_appeared());
        assert_eq!(s.tree.center(s.ripple.id()), Point::new(40.0, 22.0));
    }

    #[test]
    fn rejected_container_changes_nothing() {
        let mut s = scene();
        let gone = s.tree.create_view();
        s.tree.destroy_view(gone);

        s.ripple.appear_at(&mut s.tree, Point::new(1.0, 1.0), gone);
        assert!(!s.ripple.is_appeared());
        assert_eq!(s.ripple.animation_state(), AnimationState::Idle);
        assert_eq!(s.ripple.bounds(), Size::ZERO);
        assert_eq!(s.tree.parent(s.ripple.id()), None);
    }
}
