// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inset-based geometry for the ripple's concentric layer stack.
//!
//! Every sublayer (core disc, ring, icon) occupies the same *content frame*:
//! the view's local bounds shrunk by `content_inset` on all four sides. Shape
//! layers draw an ellipse inscribed in their own local bounds; the icon layer
//! centers its image without scaling.
//!
//! Degenerate input is not an error. If shrinking would make either dimension
//! negative, the content frame collapses to zero width *and* zero height at
//! `(inset, inset)`.

use kurbo::{Ellipse, Point, Rect, Size};

/// Geometry produced by one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleLayout {
    /// Frame shared by all three sublayers, in the view's local space.
    pub content: Rect,
    /// Oval inscribed in the content frame's local bounds `(0, 0, w, h)`.
    ///
    /// Both the core and ring layers use this as their path.
    pub oval: Ellipse,
}

impl RippleLayout {
    /// Runs the layout for the given outer bounds and inset.
    #[must_use]
    pub fn compute(bounds: Size, content_inset: f64) -> Self {
        let content = content_frame(bounds, content_inset);
        Self {
            content,
            oval: inscribed_oval(content),
        }
    }
}

/// Returns `bounds` shrunk uniformly by `inset`.
///
/// The origin is always `(inset, inset)`. When either dimension would go
/// negative, both width and height are clamped to zero.
#[must_use]
pub fn content_frame(bounds: Size, inset: f64) -> Rect {
    let width = bounds.width - 2.0 * inset;
    let height = bounds.height - 2.0 * inset;
    let size = if width < 0.0 || height < 0.0 {
        Size::ZERO
    } else {
        Size::new(width, height)
    };
    Rect::from_origin_size(Point::new(inset, inset), size)
}

/// Returns the ellipse inscribed in `frame`'s local bounds.
#[must_use]
pub fn inscribed_oval(frame: Rect) -> Ellipse {
    Ellipse::from_rect(Rect::from_origin_size(Point::ZERO, frame.size()))
}

/// Places an image of `image_size` at the center of `frame`, unscaled.
///
/// Images larger than the frame overflow it evenly on both sides.
#[must_use]
pub fn centered_image_rect(frame: Rect, image_size: Size) -> Rect {
    let c = frame.center();
    Rect::from_center_size(c, image_size)
}
