// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays view storage with allocation, topology, geometry, and
//! gesture-recognizer bookkeeping.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use super::traverse::Children;
use crate::backend::{GestureHost, ViewHost};
use crate::layer::{RecognizerId, ViewId};

/// Sentinel value indicating "no view" in index fields.
pub(crate) const INVALID: u32 = u32::MAX;

/// Kind of a registered gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    /// Single tap.
    Tap,
    /// Long press.
    LongPress,
    /// Pan / drag.
    Pan,
}

/// Struct-of-arrays storage for a host view hierarchy.
///
/// Views are addressed by [`ViewId`] handles. Internally, each view occupies
/// a slot in parallel arrays. Destroyed views are recycled via a free list,
/// and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct ViewTree {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Geometry --
    pub(crate) center: Vec<Point>,
    pub(crate) bounds: Vec<Size>,

    // -- Gestures --
    pub(crate) recognizers: Vec<Vec<(RecognizerId, RecognizerKind)>>,
    pub(crate) next_recognizer: u32,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            center: Vec::new(),
            bounds: Vec::new(),
            recognizers: Vec::new(),
            next_recognizer: 0,
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    // -- Allocation API --

    /// Creates a new parentless view and returns its handle.
    ///
    /// The view starts centered at the origin with zero bounds and no
    /// recognizers.
    pub fn create_view(&mut self) -> ViewId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.parent[idx as usize] = INVALID;
            self.first_child[idx as usize] = INVALID;
            self.next_sibling[idx as usize] = INVALID;
            self.prev_sibling[idx as usize] = INVALID;
            self.center[idx as usize] = Point::ZERO;
            self.bounds[idx as usize] = Size::ZERO;
            self.recognizers[idx as usize].clear();
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.center.push(Point::ZERO);
            self.bounds.push(Size::ZERO);
            self.recognizers.push(Vec::new());
            self.generation.push(0);
            idx
        };

        ViewId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a view, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the view has children (remove them first) or if the handle
    /// is stale.
    pub fn destroy_view(&mut self, id: ViewId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == INVALID,
            "cannot destroy view with children"
        );

        if self.parent[idx as usize] != INVALID {
            self.unlink_from_parent(idx);
        }
        self.recognizers[idx as usize].clear();

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
    }

    /// Returns whether the given handle refers to a live view.
    #[must_use]
    pub fn is_alive(&self, id: ViewId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    // -- Topology API --

    /// Adds `child` as the top-most (last) child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `child` already has a parent.
    pub fn add_child(&mut self, parent: ViewId, child: ViewId) {
        self.validate(parent);
        self.validate(child);
        assert!(
            self.parent[child.idx as usize] == INVALID,
            "child already has a parent"
        );
        self.link_last(parent.idx, child.idx);
    }

    /// Removes `child` from its current parent.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the view has no parent.
    pub fn remove_from_parent(&mut self, child: ViewId) {
        self.validate(child);
        assert!(
            self.parent[child.idx as usize] != INVALID,
            "view has no parent"
        );
        self.unlink_from_parent(child.idx);
    }

    /// Moves `child` to be the top-most child of `new_parent`.
    ///
    /// If `child` already has a parent, it is removed first. Re-parenting
    /// under the same parent brings `child` to the top.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn reparent(&mut self, child: ViewId, new_parent: ViewId) {
        self.validate(child);
        self.validate(new_parent);
        if self.parent[child.idx as usize] != INVALID {
            self.unlink_from_parent(child.idx);
        }
        self.link_last(new_parent.idx, child.idx);
    }

    /// Returns the parent of a view, if any.
    #[must_use]
    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.validate(id);
        self.handle(self.parent[id.idx as usize])
    }

    /// Returns an iterator over the direct children of a view, bottom to top.
    #[must_use]
    pub fn children(&self, id: ViewId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the top-most child of a view, if any.
    #[must_use]
    pub fn top_child(&self, id: ViewId) -> Option<ViewId> {
        self.children(id).last()
    }

    /// Returns whether `ancestor` is `id` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: ViewId, id: ViewId) -> bool {
        self.validate(ancestor);
        self.validate(id);
        let mut cur = id.idx;
        while cur != INVALID {
            if cur == ancestor.idx {
                return true;
            }
            cur = self.parent[cur as usize];
        }
        false
    }

    // -- Geometry API --

    /// Returns the view's center in its parent's space.
    #[must_use]
    pub fn center(&self, id: ViewId) -> Point {
        self.validate(id);
        self.center[id.idx as usize]
    }

    /// Returns the view's local bounds size.
    #[must_use]
    pub fn bounds(&self, id: ViewId) -> Size {
        self.validate(id);
        self.bounds[id.idx as usize]
    }

    /// Returns the view's frame in its parent's space.
    #[must_use]
    pub fn frame(&self, id: ViewId) -> Rect {
        Rect::from_center_size(self.center(id), self.bounds(id))
    }

    /// Sets the view's center in its parent's space.
    pub fn set_center(&mut self, id: ViewId, center: Point) {
        self.validate(id);
        self.center[id.idx as usize] = center;
    }

    /// Sets the view's local bounds size. The center stays put.
    pub fn set_bounds(&mut self, id: ViewId, bounds: Size) {
        self.validate(id);
        self.bounds[id.idx as usize] = bounds;
    }

    /// Converts `point` from `from`'s local space to `to`'s local space.
    ///
    /// Root views are positioned in a shared window space by their own
    /// frames, so conversion works across separate roots too.
    #[must_use]
    pub fn convert_point(&self, point: Point, from: ViewId, to: ViewId) -> Point {
        self.validate(from);
        self.validate(to);
        point + self.window_offset(from.idx) - self.window_offset(to.idx)
    }

    // -- Gesture API --

    /// Registers a recognizer of `kind` on `view` and returns its handle.
    pub fn add_recognizer(&mut self, view: ViewId, kind: RecognizerKind) -> RecognizerId {
        self.validate(view);
        let id = RecognizerId(self.next_recognizer);
        self.next_recognizer += 1;
        self.recognizers[view.idx as usize].push((id, kind));
        id
    }

    /// Returns the recognizers registered on `view`, in registration order.
    #[must_use]
    pub fn recognizers(&self, view: ViewId) -> &[(RecognizerId, RecognizerKind)] {
        self.validate(view);
        &self.recognizers[view.idx as usize]
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    fn validate(&self, id: ViewId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale ViewId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    fn handle(&self, idx: u32) -> Option<ViewId> {
        (idx != INVALID).then(|| ViewId {
            idx,
            generation: self.generation[idx as usize],
        })
    }

    /// Appends `child` after the last child of `parent`.
    fn link_last(&mut self, parent: u32, child: u32) {
        self.parent[child as usize] = parent;
        self.prev_sibling[child as usize] = INVALID;
        self.next_sibling[child as usize] = INVALID;

        if self.first_child[parent as usize] == INVALID {
            self.first_child[parent as usize] = child;
        } else {
            // Walk to last child.
            let mut last = self.first_child[parent as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = child;
            self.prev_sibling[child as usize] = last;
        }
    }

    /// Removes `idx` from its parent's child list.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }

    /// Offset from `idx`'s local space to window space.
    fn window_offset(&self, mut idx: u32) -> Vec2 {
        let mut offset = Vec2::ZERO;
        while idx != INVALID {
            let center = self.center[idx as usize];
            let half = self.bounds[idx as usize].to_vec2() * 0.5;
            offset += center.to_vec2() - half;
            idx = self.parent[idx as usize];
        }
        offset
    }
}

impl ViewHost for ViewTree {
    fn parent_of(&self, view: ViewId) -> Option<ViewId> {
        if !self.is_alive(view) {
            return None;
        }
        self.parent(view)
    }

    fn center_of(&self, view: ViewId) -> Option<Point> {
        self.is_alive(view).then(|| self.center(view))
    }

    fn place(&mut self, view: ViewId, center: Point, bounds: Size) {
        if self.is_alive(view) {
            self.set_center(view, center);
            self.set_bounds(view, bounds);
        }
    }

    fn attach_top(&mut self, container: ViewId, child: ViewId) -> bool {
        if !self.is_alive(container)
            || !self.is_alive(child)
            || self.is_ancestor_or_self(child, container)
        {
            return false;
        }
        self.reparent(child, container);
        true
    }

    fn detach(&mut self, view: ViewId) {
        if self.is_alive(view) && self.parent[view.idx as usize] != INVALID {
            self.unlink_from_parent(view.idx);
        }
    }
}

impl GestureHost for ViewTree {
    fn add_tap_recognizer(&mut self, view: ViewId) -> Option<RecognizerId> {
        self.is_alive(view)
            .then(|| self.add_recognizer(view, RecognizerKind::Tap))
    }

    fn remove_all_recognizers(&mut self, view: ViewId) {
        if self.is_alive(view) {
            self.recognizers[view.idx as usize].clear();
        }
    }
}
