//! Sticky header and scroll-to-top button state

use crate::constants::chrome;
use crate::viewport::DeviceClass;

/// What the host should show for the header and the scroll-to-top button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderView {
    /// Drop shadow once the page has scrolled a little.
    pub shadow: bool,
    /// Slid out of view (desktop only, while scrolling down).
    pub hidden: bool,
    /// Scroll-to-top button shown past 500 px.
    pub scroll_top_visible: bool,
}

/// Tracks the last scroll position so direction can be derived.
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    last_scroll: f32,
    view: HeaderView,
}

impl HeaderState {
    /// Create an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view.
    pub fn view(&self) -> HeaderView {
        self.view
    }

    /// Recompute the view for a new scroll position.
    pub fn on_scroll(&mut self, scroll_y: f32, class: DeviceClass) -> HeaderView {
        let scrolling_down = scroll_y > self.last_scroll;
        self.view = HeaderView {
            shadow: scroll_y > chrome::HEADER_SHADOW_AFTER,
            hidden: class.is_desktop()
                && scrolling_down
                && scroll_y > chrome::HEADER_HIDE_AFTER,
            scroll_top_visible: scroll_y > chrome::SCROLL_TOP_AFTER,
        };
        self.last_scroll = scroll_y;
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_and_scroll_top_follow_thresholds() {
        let mut h = HeaderState::new();
        let v = h.on_scroll(100.0, DeviceClass::Mobile);
        assert!(!v.shadow);
        let v = h.on_scroll(101.0, DeviceClass::Mobile);
        assert!(v.shadow);
        assert!(!v.scroll_top_visible);
        let v = h.on_scroll(501.0, DeviceClass::Mobile);
        assert!(v.scroll_top_visible);
    }

    #[test]
    fn desktop_hides_on_scroll_down_and_shows_on_scroll_up() {
        let mut h = HeaderState::new();
        assert!(!h.on_scroll(150.0, DeviceClass::Desktop).hidden);
        assert!(h.on_scroll(250.0, DeviceClass::Desktop).hidden);
        assert!(!h.on_scroll(240.0, DeviceClass::Desktop).hidden);
    }

    #[test]
    fn compact_devices_never_hide_the_header() {
        let mut h = HeaderState::new();
        h.on_scroll(250.0, DeviceClass::Tablet);
        assert!(!h.on_scroll(900.0, DeviceClass::Tablet).hidden);
    }
}
