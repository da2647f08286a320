// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host view hierarchy.
//!
//! [`ViewTree`] is a complete [`ViewHost`](crate::backend::ViewHost) and
//! [`GestureHost`](crate::backend::GestureHost) for headless embedders, demos,
//! and tests. Each view has:
//!
//! - An identity ([`ViewId`](crate::layer::ViewId)): a generational handle
//!   that becomes stale when the view is destroyed.
//! - Topology: parent, first-child, and sibling links forming an ordered
//!   tree. The last child is the top-most.
//! - Geometry: `center` in the parent's space and local `bounds` size, so a
//!   view's frame origin in its parent is `center - bounds / 2`.
//! - Registered gesture recognizers.
//!
//! Views are stored in struct-of-arrays layout with index-based handles.
//!
//! The inherent API asserts on stale handles, treating them as programmer
//! errors. The host-trait implementations check liveness first and treat
//! stale handles as absent, which is what the ripple's no-fail policy needs.

mod store;
mod traverse;

pub use store::{RecognizerKind, ViewTree};
pub use traverse::Children;
