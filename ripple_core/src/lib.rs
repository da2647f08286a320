// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State core for an animated ripple indicator.
//!
//! A ripple is a small decorative view that draws transient attention to a UI
//! element: a filled core disc, a stroked ring that grows and fades forever,
//! and an optional centered icon. `ripple_core` owns the indicator's state and
//! leaves everything platform-specific to the host. It is `no_std` compatible
//! (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   setters ──► layout pass ──► RippleView::evaluate() ──► LayerChanges
//!      │                                                      │
//!      └─► conditional restart                                ▼
//!                                                    Presenter::apply()
//!   appear_* / disappear ──► ViewHost (add/remove child)
//!   set_interaction_enabled ──► GestureHost
//!   host tap ──► RippleView::handle_tap() ──► RippleDelegate
//! ```
//!
//! **[`layout`]**: Inset-based geometry shared by the three sublayers.
//!
//! **[`animation`]**: Declarative ring timeline (scale and opacity tracks in
//! an infinitely repeating group) plus sampling for software compositors.
//!
//! **[`layer`]**: The view's own shape and image layers, their handles, and
//! the [`LayerChanges`](layer::LayerChanges) set handed to presenters.
//!
//! **[`dirty`]**: Change channels via `understory_dirty`. Setters mark the
//! affected layers; [`evaluate`](view::RippleView::evaluate) drains them.
//!
//! **[`view`]**: [`RippleView`](view::RippleView), the component itself:
//! configuration setters, the animation state machine, the attachment
//! lifecycle, and the tap bridge.
//!
//! **[`backend`]**: Host capability traits ([`ViewHost`](backend::ViewHost),
//! [`GestureHost`](backend::GestureHost), [`Presenter`](backend::Presenter),
//! [`BarItemResolver`](backend::BarItemResolver)).
//!
//! **[`tree`]**: [`ViewTree`](tree::ViewTree), an in-memory host view
//! hierarchy for headless embedders and tests.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types with a
//! zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Error policy
//!
//! Nothing in the ripple itself panics or returns an error. A missing
//! container, an unresolved anchor, a dropped delegate, or an out-of-range
//! configuration value is a silent no-op, reported only to the trace sink.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animation;
pub mod backend;
pub mod color;
pub mod dirty;
pub mod layer;
pub mod layout;
pub mod trace;
pub mod transform;
pub mod tree;
pub mod view;
