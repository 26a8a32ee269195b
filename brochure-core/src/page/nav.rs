//! Section tracking and in-page anchor offsets

use crate::constants::chrome;
use crate::viewport::DeviceClass;

/// A page section as laid out by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Element id, matched against `#id` links.
    pub id: String,
    /// Document offset of the section's top edge.
    pub top: f32,
    /// Height in px.
    pub height: f32,
}

impl Section {
    /// Create an empty instance.
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section the nav should highlight. When sections overlap the
/// probe, the one laid out last wins.
pub fn active_section(
    sections: &[Section],
    scroll_y: f32,
    class: DeviceClass,
) -> Option<&str> {
    let probe = scroll_y
        + if class.is_desktop() {
            chrome::SECTION_PROBE_DESKTOP
        } else {
            chrome::SECTION_PROBE_COMPACT
        };
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Whether a nav link's href points at the section.
pub fn link_matches(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Anchor hrefs that are placeholders rather than targets.
pub fn is_placeholder_anchor(href: &str) -> bool {
    matches!(href, "#" | "#!")
}

/// Page scroll position that brings an anchor target just below the sticky
/// header. `rect_top` is the target's current client-space top. Returns
/// `None` for placeholder anchors.
pub fn anchor_scroll_target(
    href: &str,
    rect_top: f32,
    scroll_y: f32,
    header_height: Option<f32>,
    class: DeviceClass,
) -> Option<f32> {
    if is_placeholder_anchor(href) {
        return None;
    }
    let margin = if class.is_mobile() {
        chrome::ANCHOR_MARGIN_MOBILE
    } else {
        chrome::ANCHOR_MARGIN_DEFAULT
    };
    Some(rect_top + scroll_y - header_height.unwrap_or(0.0) - margin)
}

/// Value for the `--header-height` custom property.
pub fn header_height_css(measured: Option<f32>) -> String {
    format!("{}px", measured.unwrap_or(chrome::HEADER_HEIGHT_FALLBACK))
}
