//! Keyboard target selection
//!
//! Arrow keys pressed anywhere on the page go to the carousel closest to the
//! middle of the viewport. Only carousels that intersect the viewport are
//! candidates; ties keep the earlier registration.

use super::types::SurfaceBounds;
use crate::input::KeyTarget;
use crate::viewport::Viewport;

/// Index of the candidate whose top edge is nearest the viewport's vertical
/// center, or `None` when no candidate is on screen.
pub fn nearest_to_center<I>(candidates: I, viewport: Viewport) -> Option<usize>
where
    I: IntoIterator<Item = Option<SurfaceBounds>>,
{
    let center = viewport.center_y();
    let mut best: Option<(usize, f32)> = None;
    for (index, bounds) in candidates.into_iter().enumerate() {
        let Some(bounds) = bounds else { continue };
        if !bounds.intersects_viewport(viewport.height) {
            continue;
        }
        let distance = (bounds.top - center).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Global arrow-key routing is suppressed while the visitor is typing.
pub fn accepts_global_keys(target: KeyTarget) -> bool {
    !target.is_text_entry()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(top: f32, bottom: f32) -> Option<SurfaceBounds> {
        Some(SurfaceBounds { top, bottom })
    }

    #[test]
    fn picks_top_edge_nearest_center() {
        let vp = Viewport::new(1280.0, 800.0);
        let picked = nearest_to_center([b(-200.0, 150.0), b(350.0, 700.0), b(700.0, 1050.0)], vp);
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn ignores_offscreen_and_unlaid_out_carousels() {
        let vp = Viewport::new(1280.0, 800.0);
        assert_eq!(nearest_to_center([None, b(900.0, 1200.0), b(-500.0, -10.0)], vp), None);
        assert_eq!(nearest_to_center([None, b(900.0, 1200.0), b(600.0, 900.0)], vp), Some(2));
    }

    #[test]
    fn ties_keep_registration_order() {
        let vp = Viewport::new(1280.0, 800.0);
        assert_eq!(nearest_to_center([b(300.0, 600.0), b(500.0, 800.0)], vp), Some(0));
    }

    #[test]
    fn typing_blocks_global_routing() {
        assert!(accepts_global_keys(KeyTarget::Document));
        assert!(!accepts_global_keys(KeyTarget::TextInput));
        assert!(!accepts_global_keys(KeyTarget::TextArea));
    }
}
