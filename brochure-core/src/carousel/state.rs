//! CarouselState: index and layout metrics for one track

use super::types::{CarouselConfig, ItemExtent, LayoutRule, NavControls};
use crate::viewport::DeviceClass;

/// Which way a single step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Toward higher indices.
    Forward,
    /// Toward lower indices.
    Backward,
}

/// Index and layout metrics of one track.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    // Content
    /// Items in the track.
    pub item_count: usize,

    // Layout
    /// Items visible at once. A fractional part is a deliberate peek at the
    /// next item.
    pub visible_count: f32,
    /// Width of one item in px.
    pub item_extent: f32,
    /// Space between items in px.
    pub gap: f32,

    // Position
    current_index: usize,
}

impl CarouselState {
    /// Empty metrics at index 0; call `recompute_metrics` before use.
    pub fn new(item_count: usize, gap: f32) -> Self {
        Self {
            item_count,
            visible_count: 0.0,
            item_extent: 0.0,
            gap: gap.max(0.0),
            current_index: 0,
        }
    }

    /// Index of the first visible item.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Re-derive visible count and item width for a device class.
    ///
    /// The index is left alone; callers re-clamp it on the next navigation
    /// or render.
    pub fn recompute_metrics(
        &mut self,
        config: &CarouselConfig,
        class: DeviceClass,
        container_width: f32,
        natural_width: Option<f32>,
    ) {
        let LayoutRule {
            visible_count,
            extent,
        } = config.rule_for(class);
        let visible = visible_count.max(0.0);
        let width = match extent {
            ItemExtent::EvenSplit if visible > 0.0 => {
                (container_width - self.gap * (visible - 1.0)) / visible
            }
            ItemExtent::EvenSplit => 0.0,
            ItemExtent::Fixed(width) => width,
            ItemExtent::Natural { fallback } => {
                natural_width.unwrap_or(fallback)
            }
        };
        self.visible_count = visible;
        self.item_extent = width.max(0.0);
    }

    /// Largest start index that still fills the viewport with whole items.
    /// Never negative: an empty or short track pins to zero.
    pub fn max_index(&self) -> usize {
        let whole = self.visible_count.floor() as usize;
        self.item_count.saturating_sub(whole)
    }

    /// Pull the index back into range after a layout change.
    pub fn clamp_index(&mut self) {
        self.current_index = self.current_index.min(self.max_index());
    }

    /// Cyclic step: past either end wraps to the opposite end.
    pub fn step(&mut self, step: Step) {
        let max = self.max_index();
        self.current_index = match step {
            Step::Forward if self.current_index >= max => 0,
            Step::Forward => self.current_index + 1,
            Step::Backward if self.current_index == 0 => max,
            Step::Backward => (self.current_index - 1).min(max),
        };
    }

    /// Saturating jump.
    pub fn go_to(&mut self, index: isize) {
        let max = self.max_index();
        self.current_index = if index <= 0 {
            0
        } else {
            (index as usize).min(max)
        };
    }

    /// Distance between the starts of two neighbouring items.
    pub fn stride(&self) -> f32 {
        self.item_extent + self.gap
    }

    /// Horizontal offset for the current index.
    pub fn offset(&self) -> f32 {
        self.current_index as f32 * self.stride()
    }

    /// Prev is enabled past the first item, next before the last start position.
    pub fn controls(&self) -> NavControls {
        NavControls {
            prev_enabled: self.current_index > 0,
            next_enabled: self.current_index < self.max_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(items: usize, class: DeviceClass, width: f32) -> CarouselState {
        let cfg = CarouselConfig::product_defaults();
        let mut s = CarouselState::new(items, cfg.gap);
        s.recompute_metrics(&cfg, class, width, Some(300.0));
        s
    }

    #[test]
    fn desktop_splits_container_evenly() {
        let s = state(6, DeviceClass::Desktop, 1264.0);
        assert_eq!(s.visible_count, 5.0);
        // (1264 - 16 * 4) / 5
        assert_eq!(s.item_extent, 240.0);
        assert_eq!(s.max_index(), 1);
    }

    #[test]
    fn tablet_uses_fixed_width_and_mobile_measures() {
        let tablet = state(6, DeviceClass::Tablet, 900.0);
        assert_eq!(tablet.visible_count, 3.0);
        assert_eq!(tablet.item_extent, 260.0);
        assert_eq!(tablet.max_index(), 3);

        let mobile = state(6, DeviceClass::Mobile, 375.0);
        assert_eq!(mobile.visible_count, 1.2);
        assert_eq!(mobile.item_extent, 300.0);
        assert_eq!(mobile.max_index(), 5);
    }

    #[test]
    fn mobile_falls_back_when_unmeasured() {
        let cfg = CarouselConfig::product_defaults();
        let mut s = CarouselState::new(3, cfg.gap);
        s.recompute_metrics(&cfg, DeviceClass::Mobile, 375.0, None);
        assert_eq!(s.item_extent, 280.0);
    }

    #[test]
    fn empty_and_short_tracks_pin_to_zero() {
        let empty = state(0, DeviceClass::Desktop, 1264.0);
        assert_eq!(empty.max_index(), 0);
        assert_eq!(
            empty.controls(),
            NavControls {
                prev_enabled: false,
                next_enabled: false
            }
        );

        let short = state(3, DeviceClass::Desktop, 1264.0);
        assert_eq!(short.max_index(), 0);
    }

    #[test]
    fn step_wraps_and_go_to_clamps() {
        let mut s = state(6, DeviceClass::Mobile, 375.0);
        s.step(Step::Backward);
        assert_eq!(s.current_index(), 5);
        s.step(Step::Forward);
        assert_eq!(s.current_index(), 0);

        s.go_to(-5);
        assert_eq!(s.current_index(), 0);
        s.go_to(10);
        assert_eq!(s.current_index(), 5);
    }

    #[test]
    fn layout_change_keeps_index_until_clamped() {
        let cfg = CarouselConfig::product_defaults();
        let mut s = state(6, DeviceClass::Mobile, 375.0);
        s.go_to(4);
        s.recompute_metrics(&cfg, DeviceClass::Desktop, 1264.0, None);
        assert_eq!(s.current_index(), 4);
        assert!(!s.controls().next_enabled);

        s.clamp_index();
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn offset_uses_item_plus_gap() {
        let mut s = state(6, DeviceClass::Tablet, 900.0);
        s.go_to(2);
        assert_eq!(s.offset(), 2.0 * (260.0 + 16.0));
    }
}
