//! Shared types for the carousel module

use std::fmt;
use std::time::Duration;

use crate::constants::{carousel, gesture, timing};
use crate::viewport::DeviceClass;

/// Identifier of a carousel on its page (the element id, e.g. `"firepro"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselKey(String);

impl CarouselKey {
    /// Create an empty instance.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The element id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CarouselKey {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the width of one item is derived for a device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemExtent {
    /// Split the container evenly across `visible_count` items, minus gaps.
    EvenSplit,
    /// Fixed width in px.
    Fixed(f32),
    /// The host-measured width of the first item, or `fallback` when the
    /// host cannot measure one.
    Natural {
        /// Width in px used when nothing was measured.
        fallback: f32,
    },
}

/// Layout for one device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRule {
    /// Items in view; may be fractional.
    pub visible_count: f32,
    /// How one item's width is derived.
    pub extent: ItemExtent,
}

impl LayoutRule {
    /// Rule showing `visible_count` items sized by `extent`.
    pub const fn new(visible_count: f32, extent: ItemExtent) -> Self {
        Self {
            visible_count,
            extent,
        }
    }
}

/// Per-page carousel configuration: one layout rule per device class plus
/// the timing and gesture tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Layout at 1024 px and wider.
    pub desktop: LayoutRule,
    /// Layout from 768 px up to desktop.
    pub tablet: LayoutRule,
    /// Layout below 768 px.
    pub mobile: LayoutRule,
    /// Space between items in px.
    pub gap: f32,
    /// Time between automatic advances.
    pub auto_play_interval: Duration,
    /// Navigation lock after each render.
    pub settle: Duration,
    /// Horizontal travel, in px, a swipe must exceed.
    pub swipe_threshold: f32,
    /// Delay before auto-play restarts after a gesture.
    pub gesture_resume_grace: Duration,
}

impl CarouselConfig {
    /// Product catalog rows: five cards on desktop, a card and a peek on
    /// mobile.
    pub const fn product_defaults() -> Self {
        Self {
            desktop: LayoutRule::new(
                carousel::DESKTOP_VISIBLE,
                ItemExtent::EvenSplit,
            ),
            tablet: LayoutRule::new(
                carousel::TABLET_VISIBLE,
                ItemExtent::Fixed(carousel::TABLET_ITEM_WIDTH),
            ),
            mobile: LayoutRule::new(
                carousel::MOBILE_VISIBLE_PRODUCTS,
                ItemExtent::Natural {
                    fallback: carousel::MOBILE_FALLBACK_ITEM_WIDTH,
                },
            ),
            gap: carousel::GAP,
            auto_play_interval: Duration::from_millis(
                timing::AUTO_PLAY_INTERVAL_MS,
            ),
            settle: Duration::from_millis(timing::SETTLE_MS),
            swipe_threshold: gesture::SWIPE_THRESHOLD_PX,
            gesture_resume_grace: Duration::from_millis(
                timing::GESTURE_RESUME_GRACE_MS,
            ),
        }
    }

    /// Services page variant; shows half of the next card on mobile.
    pub const fn services_defaults() -> Self {
        let mut cfg = Self::product_defaults();
        cfg.mobile.visible_count = carousel::MOBILE_VISIBLE_SERVICES;
        cfg
    }

    /// Layout rule for a device class.
    pub fn rule_for(&self, class: DeviceClass) -> LayoutRule {
        match class {
            DeviceClass::Desktop => self.desktop,
            DeviceClass::Tablet => self.tablet,
            DeviceClass::Mobile => self.mobile,
        }
    }

    /// Same configuration with a different mobile visible count.
    pub fn with_mobile_visible_count(mut self, visible_count: f32) -> Self {
        self.mobile.visible_count = visible_count;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::product_defaults()
    }
}

/// Navigation buttons a carousel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavControl {
    /// Previous button.
    Prev,
    /// Next button.
    Next,
}

/// Enabled state of both navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    /// Previous button enabled.
    pub prev_enabled: bool,
    /// Next button enabled.
    pub next_enabled: bool,
}

impl NavControls {
    /// Opacity the host applies to a button in the given state.
    pub fn opacity(enabled: bool) -> f32 {
        if enabled { 1.0 } else { 0.3 }
    }
}

/// How the host moves the track. Desktop translates the track; tablet and
/// mobile scroll the container natively so momentum scrolling still works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMode {
    /// CSS transform on the track.
    Transform,
    /// Native `scrollLeft` on the container.
    Scroll,
}

impl OffsetMode {
    /// Offset mode used on a device class.
    pub fn for_class(class: DeviceClass) -> Self {
        if class.is_desktop() {
            Self::Transform
        } else {
            Self::Scroll
        }
    }
}

/// Whether an offset change should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Play the CSS transition.
    Animated,
    /// Jump without a transition.
    Immediate,
}

/// Vertical placement of a carousel within the viewport, in client px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    /// Top edge in px.
    pub top: f32,
    /// Bottom edge in px.
    pub bottom: f32,
}

impl SurfaceBounds {
    /// True when any part lies inside a viewport of the given height.
    pub fn intersects_viewport(&self, viewport_height: f32) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_on_mobile_peek() {
        let products = CarouselConfig::product_defaults();
        let services = CarouselConfig::services_defaults();
        assert_eq!(products.desktop, services.desktop);
        assert_eq!(products.tablet, services.tablet);
        assert_eq!(products.mobile.visible_count, 1.2);
        assert_eq!(services.mobile.visible_count, 1.5);
    }

    #[test]
    fn offset_mode_follows_device_class() {
        assert_eq!(
            OffsetMode::for_class(DeviceClass::Desktop),
            OffsetMode::Transform
        );
        assert_eq!(
            OffsetMode::for_class(DeviceClass::Tablet),
            OffsetMode::Scroll
        );
        assert_eq!(
            OffsetMode::for_class(DeviceClass::Mobile),
            OffsetMode::Scroll
        );
    }

    #[test]
    fn bounds_intersection_is_strict() {
        let vh = 800.0;
        assert!(SurfaceBounds { top: 10.0, bottom: 300.0 }.intersects_viewport(vh));
        assert!(!SurfaceBounds { top: 800.0, bottom: 1100.0 }.intersects_viewport(vh));
        assert!(!SurfaceBounds { top: -300.0, bottom: 0.0 }.intersects_viewport(vh));
    }
}
