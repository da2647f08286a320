// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape and image layers owned by a ripple view.

use alloc::vec::Vec;

use kurbo::{Ellipse, Rect};

use super::id::ImageId;
use crate::animation::KeyedAnimation;
use crate::color::Color;

/// A vector shape layer: the core disc or the ring.
///
/// Fields are read-only outside the crate; [`RippleView`] keeps frame, path,
/// and colors consistent with its configuration.
///
/// [`RippleView`]: crate::view::RippleView
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeLayer {
    pub(crate) frame: Rect,
    pub(crate) path: Ellipse,
    pub(crate) fill: Color,
    pub(crate) stroke: Option<Color>,
    pub(crate) line_width: f64,
    pub(crate) hidden: bool,
    pub(crate) animations: Vec<KeyedAnimation>,
}

impl ShapeLayer {
    /// A filled disc with no stroke.
    pub(crate) fn disc(fill: Color) -> Self {
        Self {
            frame: Rect::ZERO,
            path: Ellipse::from_rect(Rect::ZERO),
            fill,
            stroke: None,
            line_width: 0.0,
            hidden: false,
            animations: Vec::new(),
        }
    }

    /// An unfilled ring stroked with `stroke`.
    pub(crate) fn ring(stroke: Color, line_width: f64) -> Self {
        Self {
            stroke: Some(stroke),
            line_width,
            ..Self::disc(Color::TRANSPARENT)
        }
    }

    /// Frame in the view's local space.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Path in the layer's own space (origin at the frame's top-left).
    #[must_use]
    pub fn path(&self) -> Ellipse {
        self.path
    }

    /// Fill color. Transparent for the ring.
    #[must_use]
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Stroke color, if the layer is stroked.
    #[must_use]
    pub fn stroke(&self) -> Option<Color> {
        self.stroke
    }

    /// Stroke width in points.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Whether the layer is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns the animation attached under `key`, if any.
    #[must_use]
    pub fn animation(&self, key: &str) -> Option<&KeyedAnimation> {
        self.animations.iter().find(|a| a.key == key)
    }

    /// Returns the keys of all attached animations, in attachment order.
    pub fn animation_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.animations.iter().map(|a| a.key)
    }

    /// Attaches `animation`, replacing any animation with the same key.
    pub(crate) fn add_animation(&mut self, animation: KeyedAnimation) {
        self.remove_animation(animation.key);
        self.animations.push(animation);
    }

    /// Removes the animation under `key`. Returns whether one was attached.
    pub(crate) fn remove_animation(&mut self, key: &str) -> bool {
        let before = self.animations.len();
        self.animations.retain(|a| a.key != key);
        self.animations.len() != before
    }
}

/// How an image is placed inside its layer's frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentMode {
    /// Centered at natural size, never scaled.
    #[default]
    Center,
}

/// The icon layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageLayer {
    pub(crate) frame: Rect,
    pub(crate) image: Option<ImageId>,
    pub(crate) content_mode: ContentMode,
}

impl ImageLayer {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            image: None,
            content_mode: ContentMode::Center,
        }
    }

    /// Frame in the view's local space.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The presented image, if any.
    #[must_use]
    pub fn image(&self) -> Option<ImageId> {
        self.image
    }

    /// Placement of the image inside the frame.
    #[must_use]
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationGroup;

    fn keyed(key: &'static str, serial: u64) -> KeyedAnimation {
        KeyedAnimation {
            key,
            group: AnimationGroup::ring(2.0, 1.0),
            serial,
        }
    }

    #[test]
    fn ring_is_stroked_and_unfilled() {
        let ring = ShapeLayer::ring(Color::ACCENT_BLUE, 3.0);
        assert_eq!(ring.fill(), Color::TRANSPARENT);
        assert_eq!(ring.stroke(), Some(Color::ACCENT_BLUE));
        assert_eq!(ring.line_width(), 3.0);
    }

    #[test]
    fn same_key_replaces() {
        let mut layer = ShapeLayer::disc(Color::ACCENT_BLUE);
        layer.add_animation(keyed("a", 1));
        layer.add_animation(keyed("b", 2));
        layer.add_animation(keyed("a", 3));

        let keys: Vec<_> = layer.animation_keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(layer.animation("a").map(|a| a.serial), Some(3));
    }

    #[test]
    fn remove_reports_presence() {
        let mut layer = ShapeLayer::disc(Color::ACCENT_BLUE);
        assert!(!layer.remove_animation("a"));
        layer.add_animation(keyed("a", 1));
        assert!(layer.remove_animation("a"));
        assert!(layer.animation("a").is_none());
    }
}
