//! Compiled defaults
//!
//! Every tunable the pages rely on lives here so all carousels and chrome
//! update consistently. `brochure-config` can override the carousel and
//! timing values per deployment; breakpoints and chrome thresholds are fixed.

/// Viewport width breakpoints (CSS px) used to classify devices.
pub mod breakpoints {
    /// Widths strictly below this are mobile.
    pub const TABLET_MIN_WIDTH: f32 = 768.0;
    /// Widths at or above this are desktop.
    pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;
}

/// Carousel layout and motion defaults.
pub mod carousel {
    /// Spacing between items (px), matches the 1rem track gap.
    pub const GAP: f32 = 16.0;
    /// Items visible at once on desktop.
    pub const DESKTOP_VISIBLE: f32 = 5.0;
    /// Items visible at once on tablet.
    pub const TABLET_VISIBLE: f32 = 3.0;
    /// Fixed item width on tablet (px).
    pub const TABLET_ITEM_WIDTH: f32 = 260.0;
    /// Mobile visible count on product pages. The fractional part leaves a
    /// sliver of the next card on screen.
    pub const MOBILE_VISIBLE_PRODUCTS: f32 = 1.2;
    /// Mobile visible count on the services variant.
    pub const MOBILE_VISIBLE_SERVICES: f32 = 1.5;
    /// Item width used on mobile when the host cannot measure one (px).
    pub const MOBILE_FALLBACK_ITEM_WIDTH: f32 = 280.0;
}

/// Timer durations in milliseconds.
pub mod timing {
    /// Interval between automatic advances.
    pub const AUTO_PLAY_INTERVAL_MS: u64 = 4_000;
    /// Navigation lock after a render; matches the 0.5s CSS transition.
    pub const SETTLE_MS: u64 = 500;
    /// Delay before auto-play resumes after a gesture ends.
    pub const GESTURE_RESUME_GRACE_MS: u64 = 1_000;
    /// Resize events are coalesced over this window.
    pub const RESIZE_DEBOUNCE_MS: u64 = 250;
}

/// Gesture classification.
pub mod gesture {
    /// Horizontal travel (px) a swipe must exceed to count as navigation.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
}

/// Header, scroll-to-top and section tracking thresholds (px of page scroll).
pub mod chrome {
    /// Header gains its shadow past this scroll position.
    pub const HEADER_SHADOW_AFTER: f32 = 100.0;
    /// On desktop the header may hide once scrolled past this position.
    pub const HEADER_HIDE_AFTER: f32 = 200.0;
    /// Scroll-to-top button shows past this scroll position.
    pub const SCROLL_TOP_AFTER: f32 = 500.0;
    /// Section probe offset below the top edge on desktop.
    pub const SECTION_PROBE_DESKTOP: f32 = 100.0;
    /// Section probe offset on tablet and mobile.
    pub const SECTION_PROBE_COMPACT: f32 = 80.0;
    /// Extra breathing room above an anchor target on mobile.
    pub const ANCHOR_MARGIN_MOBILE: f32 = 10.0;
    /// Extra breathing room above an anchor target elsewhere.
    pub const ANCHOR_MARGIN_DEFAULT: f32 = 20.0;
    /// Header height assumed before the header has been measured.
    pub const HEADER_HEIGHT_FALLBACK: f32 = 64.0;
}

/// Contact form behavior.
pub mod form {
    /// Minimum trimmed length of the name field.
    pub const NAME_MIN_CHARS: usize = 2;
    /// Minimum trimmed length of the message field.
    pub const MESSAGE_MIN_CHARS: usize = 10;
    /// Simulated submission latency.
    pub const SUBMIT_LATENCY_MS: u64 = 1_500;
    /// Feedback banner auto-hides after this long.
    pub const FEEDBACK_VISIBLE_MS: u64 = 5_000;
}

/// Deferred image loading.
pub mod lazy {
    /// Vertical root margin (px) on mobile.
    pub const ROOT_MARGIN_MOBILE: f32 = 50.0;
    /// Vertical root margin (px) on tablet and desktop.
    pub const ROOT_MARGIN_DEFAULT: f32 = 100.0;
}
