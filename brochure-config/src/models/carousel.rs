//! Carousel tunables and per-page carousel layouts

use std::time::Duration;

use brochure_core::CarouselConfig;
use brochure_core::carousel::ItemExtent;
use brochure_core::constants::{carousel, gesture, timing};
use serde::{Deserialize, Serialize};

/// Which built-in layout a page's carousels start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselPreset {
    /// Product catalog rows: one card plus a peek on mobile.
    #[default]
    Products,
    /// Service rows: one and a half cards on mobile.
    Services,
}

impl CarouselPreset {
    /// Cards visible on mobile, including the peek of the next card.
    pub fn mobile_visible_count(self) -> f32 {
        match self {
            Self::Products => carousel::MOBILE_VISIBLE_PRODUCTS,
            Self::Services => carousel::MOBILE_VISIBLE_SERVICES,
        }
    }
}

/// Carousel tunables shared by every page. Widths are px, durations ms.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Space between cards.
    pub gap_px: f32,
    /// Cards per view on desktop; the card width is derived from it.
    pub desktop_visible: f32,
    /// Cards per view on tablet.
    pub tablet_visible: f32,
    /// Fixed card width on tablet.
    pub tablet_item_width_px: f32,
    /// Card width on mobile when the host cannot measure the first card.
    pub mobile_fallback_item_width_px: f32,
    /// Delay between automatic advances (desktop only).
    pub auto_play_interval_ms: u64,
    /// How long navigation stays locked after a move while the transition
    /// plays out.
    pub settle_ms: u64,
    /// Minimum horizontal travel for a swipe to count as navigation.
    pub swipe_threshold_px: f32,
    /// Quiet period after a swipe before auto-play picks up again.
    pub gesture_resume_grace_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            gap_px: carousel::GAP,
            desktop_visible: carousel::DESKTOP_VISIBLE,
            tablet_visible: carousel::TABLET_VISIBLE,
            tablet_item_width_px: carousel::TABLET_ITEM_WIDTH,
            mobile_fallback_item_width_px: carousel::MOBILE_FALLBACK_ITEM_WIDTH,
            auto_play_interval_ms: timing::AUTO_PLAY_INTERVAL_MS,
            settle_ms: timing::SETTLE_MS,
            swipe_threshold_px: gesture::SWIPE_THRESHOLD_PX,
            gesture_resume_grace_ms: timing::GESTURE_RESUME_GRACE_MS,
        }
    }
}

impl CarouselSettings {
    /// Resolve into the controller's runtime configuration.
    pub fn to_carousel_config(&self, mobile_visible: f32) -> CarouselConfig {
        let mut config = CarouselConfig::product_defaults();
        config.desktop.visible_count = self.desktop_visible;
        config.tablet.visible_count = self.tablet_visible;
        config.tablet.extent = ItemExtent::Fixed(self.tablet_item_width_px);
        config.mobile.visible_count = mobile_visible;
        config.mobile.extent = ItemExtent::Natural {
            fallback: self.mobile_fallback_item_width_px,
        };
        config.gap = self.gap_px;
        config.auto_play_interval =
            Duration::from_millis(self.auto_play_interval_ms);
        config.settle = Duration::from_millis(self.settle_ms);
        config.swipe_threshold = self.swipe_threshold_px;
        config.gesture_resume_grace =
            Duration::from_millis(self.gesture_resume_grace_ms);
        config
    }
}

/// One page and the carousels it registers at load, in page order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageLayout {
    /// Page name used for lookup, e.g. `"products"`.
    pub name: String,
    /// Built-in layout the page starts from.
    pub preset: CarouselPreset,
    /// Overrides the preset's mobile visible count.
    pub mobile_visible: Option<f32>,
    /// Carousel element ids, registered in this order.
    pub carousels: Vec<String>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            name: String::new(),
            preset: CarouselPreset::Products,
            mobile_visible: None,
            carousels: Vec::new(),
        }
    }
}

impl PageLayout {
    /// Mobile visible count after applying the override.
    pub fn mobile_visible_count(&self) -> f32 {
        self.mobile_visible
            .unwrap_or_else(|| self.preset.mobile_visible_count())
    }
}

pub(crate) fn default_pages() -> Vec<PageLayout> {
    let ids = |ids: &[&str]| ids.iter().map(|id| (*id).to_owned()).collect();
    vec![
        PageLayout {
            name: "products".into(),
            preset: CarouselPreset::Products,
            mobile_visible: None,
            carousels: ids(&[
                "asian-paints",
                "superon",
                "ion-exchange",
                "firepro",
                "stanvac",
                "jasic",
            ]),
        },
        PageLayout {
            name: "services".into(),
            preset: CarouselPreset::Services,
            mobile_visible: None,
            carousels: ids(&["coatings", "welding", "water", "fire"]),
        },
    ]
}
