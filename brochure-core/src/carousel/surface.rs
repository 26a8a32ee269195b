//! Host-side rendering seam
//!
//! The controller never touches elements directly. It queries a
//! [`RenderSurface`] for measurements and sends it offset and button-state
//! commands; the host decides how those map onto the page.

#[cfg(test)]
use mockall::automock;

use super::types::{NavControl, OffsetMode, SurfaceBounds, Transition};

/// One carousel track as seen by the host.
#[cfg_attr(test, automock)]
pub trait RenderSurface {
    /// Number of items in the track.
    fn item_count(&self) -> usize;

    /// Current width of the scrolling container (px).
    fn container_width(&self) -> f32;

    /// Rendered width of a single item, when the host can measure one.
    fn item_natural_width(&self) -> Option<f32>;

    /// Placement in the viewport, when the carousel is laid out.
    fn bounds(&self) -> Option<SurfaceBounds>;

    /// Move the track so it starts `offset` px into the content.
    fn apply_offset(
        &mut self,
        offset: f32,
        mode: OffsetMode,
        transition: Transition,
    );

    /// Enable or disable one navigation button.
    fn set_control_enabled(&mut self, control: NavControl, enabled: bool);
}

/// In-memory surface that records what it was told.
///
/// Used by tooling that needs layout numbers without a page, and by tests.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    /// Items in the track.
    pub items: usize,
    /// Container width in px.
    pub container_width: f32,
    /// Measured item width, if any.
    pub natural_width: Option<f32>,
    /// Placement reported to the controller.
    pub bounds: Option<SurfaceBounds>,
    /// Last offset applied.
    pub offset: f32,
    /// Mode of the last `apply_offset`.
    pub last_mode: Option<OffsetMode>,
    /// Transition of the last `apply_offset`.
    pub last_transition: Option<Transition>,
    /// Number of `apply_offset` calls so far.
    pub offsets_applied: usize,
    /// Previous button state last pushed.
    pub prev_enabled: bool,
    /// Next button state last pushed.
    pub next_enabled: bool,
}

impl HeadlessSurface {
    /// Surface with `items` items in a container `container_width` px wide.
    pub fn new(items: usize, container_width: f32) -> Self {
        Self {
            items,
            container_width,
            natural_width: None,
            bounds: None,
            offset: 0.0,
            last_mode: None,
            last_transition: None,
            offsets_applied: 0,
            prev_enabled: true,
            next_enabled: true,
        }
    }

    /// Report `width` as the measured item width.
    pub fn with_natural_width(mut self, width: f32) -> Self {
        self.natural_width = Some(width);
        self
    }

    /// Place the surface at `top..bottom` in the viewport.
    pub fn with_bounds(mut self, top: f32, bottom: f32) -> Self {
        self.bounds = Some(SurfaceBounds { top, bottom });
        self
    }
}

impl RenderSurface for HeadlessSurface {
    fn item_count(&self) -> usize {
        self.items
    }

    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn item_natural_width(&self) -> Option<f32> {
        self.natural_width
    }

    fn bounds(&self) -> Option<SurfaceBounds> {
        self.bounds
    }

    fn apply_offset(
        &mut self,
        offset: f32,
        mode: OffsetMode,
        transition: Transition,
    ) {
        self.offset = offset;
        self.last_mode = Some(mode);
        self.last_transition = Some(transition);
        self.offsets_applied += 1;
    }

    fn set_control_enabled(&mut self, control: NavControl, enabled: bool) {
        match control {
            NavControl::Prev => self.prev_enabled = enabled,
            NavControl::Next => self.next_enabled = enabled,
        }
    }
}
