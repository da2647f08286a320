// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripple configuration and its setters.

use kurbo::Size;

use super::RippleView;
use crate::color::Color;
use crate::dirty;
use crate::layer::{ImageId, LayerSlot};
use crate::trace::{ConfigField, IgnoredEvent, IgnoredReason};

/// Embedder-facing ripple configuration.
///
/// Fields are public for construction; [`RippleView::with_config`] applies
/// them through the validating setters, so out-of-range values fall back to
/// the defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleConfig {
    /// Outer size applied when the ripple appears.
    pub size: Size,
    /// Inset from the outer bounds to the shared content frame. `>= 0`.
    pub content_inset: f64,
    /// Final ring scale of each period. `> 0`.
    pub ring_scale: f64,
    /// Period of the ring timeline in seconds. `> 0`.
    pub duration: f64,
    /// Ring stroke width in points. `> 0`.
    pub ring_width: f64,
    /// Core fill and ring stroke color. `None` uses the view's default tint.
    pub tint: Option<Color>,
    /// Hides the core disc.
    pub core_hidden: bool,
    /// Hides the ring.
    pub ring_hidden: bool,
    /// Image centered on top of the core.
    pub icon: Option<ImageId>,
}

impl RippleConfig {
    /// Default outer size.
    pub const DEFAULT_SIZE: Size = Size::new(24.0, 24.0);
    /// Default content inset.
    pub const DEFAULT_CONTENT_INSET: f64 = 0.0;
    /// Default ring scale.
    pub const DEFAULT_RING_SCALE: f64 = 2.0;
    /// Default period in seconds.
    pub const DEFAULT_DURATION: f64 = 1.5;
    /// Default ring stroke width.
    pub const DEFAULT_RING_WIDTH: f64 = 3.0;
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            content_inset: Self::DEFAULT_CONTENT_INSET,
            ring_scale: Self::DEFAULT_RING_SCALE,
            duration: Self::DEFAULT_DURATION,
            ring_width: Self::DEFAULT_RING_WIDTH,
            tint: None,
            core_hidden: false,
            ring_hidden: false,
            icon: None,
        }
    }
}

pub(crate) fn valid_size(size: Size) -> bool {
    size.is_finite() && size.width >= 0.0 && size.height >= 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl RippleView {
    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Sets the size applied on the next `appear_*` call.
    ///
    /// Negative or non-finite sizes are ignored.
    pub fn set_size(&mut self, size: Size) {
        if !valid_size(size) {
            self.reject(ConfigField::Size);
            return;
        }
        self.config.size = size;
    }

    /// Sets the content inset and runs a layout pass.
    ///
    /// Negative or non-finite insets are ignored.
    pub fn set_content_inset(&mut self, inset: f64) {
        if !non_negative(inset) {
            self.reject(ConfigField::ContentInset);
            return;
        }
        self.config.content_inset = inset;
        self.layout_subviews();
    }

    /// Sets the final ring scale. Restarts the timeline if it is running.
    pub fn set_ring_scale(&mut self, ring_scale: f64) {
        if !positive(ring_scale) {
            self.reject(ConfigField::RingScale);
            return;
        }
        self.config.ring_scale = ring_scale;
        self.restart();
    }

    /// Sets the timeline period. Restarts the timeline if it is running.
    pub fn set_duration(&mut self, duration: f64) {
        if !positive(duration) {
            self.reject(ConfigField::Duration);
            return;
        }
        self.config.duration = duration;
        self.restart();
    }

    /// Sets the ring stroke width.
    pub fn set_ring_width(&mut self, ring_width: f64) {
        if !positive(ring_width) {
            self.reject(ConfigField::RingWidth);
            return;
        }
        self.config.ring_width = ring_width;
        self.ring.line_width = ring_width;
        self.dirty.mark(LayerSlot::Ring.index(), dirty::STYLE);
    }

    /// Sets the tint. `None` falls back to the default tint given at
    /// construction.
    pub fn set_tint(&mut self, tint: Option<Color>) {
        self.config.tint = tint;
        let color = self.tint();
        self.core.fill = color;
        self.ring.stroke = Some(color);
        self.dirty.mark(LayerSlot::Core.index(), dirty::STYLE);
        self.dirty.mark(LayerSlot::Ring.index(), dirty::STYLE);
    }

    /// Returns the effective tint used by the core fill and ring stroke.
    #[must_use]
    pub fn tint(&self) -> Color {
        self.config.tint.unwrap_or(self.default_tint)
    }

    /// Shows or hides the core disc.
    pub fn set_core_hidden(&mut self, hidden: bool) {
        self.config.core_hidden = hidden;
        if self.core.hidden != hidden {
            self.core.hidden = hidden;
            self.dirty.mark(LayerSlot::Core.index(), dirty::VISIBILITY);
        }
    }

    /// Shows or hides the ring.
    pub fn set_ring_hidden(&mut self, hidden: bool) {
        self.config.ring_hidden = hidden;
        if self.ring.hidden != hidden {
            self.ring.hidden = hidden;
            self.dirty.mark(LayerSlot::Ring.index(), dirty::VISIBILITY);
        }
    }

    /// Sets or clears the icon image.
    pub fn set_icon(&mut self, icon: Option<ImageId>) {
        self.config.icon = icon;
        if self.icon.image != icon {
            self.icon.image = icon;
            self.dirty.mark(LayerSlot::Icon.index(), dirty::CONTENT);
        }
    }

    fn reject(&mut self, field: ConfigField) {
        self.tracer.ignored(&IgnoredEvent {
            view: self.id,
            reason: IgnoredReason::InvalidConfig(field),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RING_ANIMATION_KEY;
    use crate::layer::ViewId;
    use crate::view::AnimationState;

    const RED: Color = Color::rgb8(0xFF, 0x3B, 0x30);

    fn view() -> RippleView {
        RippleView::new(ViewId::from_raw(0, 0), Color::ACCENT_BLUE)
    }

    #[test]
    fn defaults() {
        let c = RippleConfig::default();
        assert_eq!(c.size, Size::new(24.0, 24.0));
        assert_eq!(c.content_inset, 0.0);
        assert_eq!(c.ring_scale, 2.0);
        assert_eq!(c.duration, 1.5);
        assert_eq!(c.ring_width, 3.0);
        assert_eq!(c.tint, None);
        assert!(!c.core_hidden && !c.ring_hidden);
        assert_eq!(c.icon, None);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let mut v = view();
        v.set_size(Size::new(-1.0, 10.0));
        v.set_size(Size::new(f64::NAN, 10.0));
        v.set_content_inset(-2.0);
        v.set_ring_scale(0.0);
        v.set_duration(-1.0);
        v.set_duration(f64::INFINITY);
        v.set_ring_width(0.0);
        assert_eq!(*v.config(), RippleConfig::default());
        assert_eq!(v.ring().line_width(), 3.0);
    }

    #[test]
    fn idle_scale_and_duration_changes_do_not_start() {
        let mut v = view();
        v.set_ring_scale(3.0);
        v.set_duration(0.5);
        assert_eq!(v.animation_state(), AnimationState::Idle);
        assert_eq!(v.config().ring_scale, 3.0);
        assert_eq!(v.config().duration, 0.5);
    }

    #[test]
    fn running_scale_change_restarts_with_new_value() {
        let mut v = view();
        v.start();
        let before = v.ring_timeline().map(|t| t.serial);
        v.set_ring_scale(4.0);
        let timeline = v.ring_timeline().expect("still running");
        assert_ne!(Some(timeline.serial), before, "timeline replaced");
        assert_eq!(timeline.key, RING_ANIMATION_KEY);
        assert_eq!(timeline.group.animations[0].to, 4.0);
    }

    #[test]
    fn running_duration_change_restarts_with_new_period() {
        let mut v = view();
        v.start();
        v.set_duration(0.75);
        assert_eq!(v.ring_timeline().map(|t| t.group.duration), Some(0.75));
    }

    #[test]
    fn tint_drives_core_fill_and_ring_stroke() {
        let mut v = view();
        assert_eq!(v.core().fill(), Color::ACCENT_BLUE);
        assert_eq!(v.ring().stroke(), Some(Color::ACCENT_BLUE));
        assert_eq!(v.ring().fill(), Color::TRANSPARENT);

        v.set_tint(Some(RED));
        assert_eq!(v.tint(), RED);
        assert_eq!(v.core().fill(), RED);
        assert_eq!(v.ring().stroke(), Some(RED));

        v.set_tint(None);
        assert_eq!(v.tint(), Color::ACCENT_BLUE, "falls back to default");
        assert_eq!(v.core().fill(), Color::ACCENT_BLUE);
    }

    #[test]
    fn ring_width_applies_to_ring_stroke() {
        let mut v = view();
        v.set_ring_width(1.5);
        assert_eq!(v.ring().line_width(), 1.5);
    }

    #[test]
    fn hidden_flags_and_icon() {
        let mut v = view();
        v.set_core_hidden(true);
        v.set_ring_hidden(true);
        v.set_icon(Some(ImageId(7)));
        assert!(v.core().is_hidden());
        assert!(v.ring().is_hidden());
        assert_eq!(v.icon().image(), Some(ImageId(7)));
    }

    #[test]
    fn inset_change_relayouts() {
        let mut v = view();
        v.set_bounds(Size::new(24.0, 24.0));
        v.set_content_inset(4.0);
        assert_eq!(v.core().frame().size(), Size::new(16.0, 16.0));
        assert_eq!(v.ring().frame(), v.core().frame());
        assert_eq!(v.icon().frame(), v.core().frame());
    }
}
