//! Swipe and drag interpretation

use crate::input::GestureSource;

use super::state::Step;

/// Tracks one touch or pointer interaction from press to release.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: Option<ActiveGesture>,
}

#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    source: GestureSource,
    start_x: f32,
    last_x: f32,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn source(&self) -> Option<GestureSource> {
        self.active.map(|g| g.source)
    }

    /// Begin tracking. A press while another gesture is live restarts from
    /// the new coordinate.
    pub fn begin(&mut self, source: GestureSource, x: f32) {
        self.active = Some(ActiveGesture {
            source,
            start_x: x,
            last_x: x,
        });
    }

    pub fn update(&mut self, source: GestureSource, x: f32) {
        if let Some(g) = self.active.as_mut()
            && g.source == source
        {
            g.last_x = x;
        }
    }

    /// Finish the gesture and classify it. Returns `None` when nothing was
    /// being tracked for `source`; `Some(None)` for a tap.
    pub fn finish(
        &mut self,
        source: GestureSource,
        x: f32,
        threshold: f32,
    ) -> Option<Option<Step>> {
        let g = self.active.filter(|g| g.source == source)?;
        self.active = None;
        Some(classify_swipe(g.start_x, x, threshold))
    }

    /// Drop the gesture without navigating.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Net travel so far; positive when moving left.
    pub fn displacement(&self) -> Option<f32> {
        self.active.map(|g| g.start_x - g.last_x)
    }
}

/// Leftward travel beyond `threshold` advances, rightward retreats, anything
/// shorter is a tap.
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: f32) -> Option<Step> {
    let distance = start_x - end_x;
    if distance.abs() <= threshold {
        None
    } else if distance > 0.0 {
        Some(Step::Forward)
    } else {
        Some(Step::Backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 50.0;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify_swipe(300.0, 251.0, THRESHOLD), None);
        assert_eq!(classify_swipe(300.0, 250.0, THRESHOLD), None);
        assert_eq!(classify_swipe(300.0, 249.0, THRESHOLD), Some(Step::Forward));
        assert_eq!(classify_swipe(300.0, 351.0, THRESHOLD), Some(Step::Backward));
    }

    #[test]
    fn leftward_swipe_advances() {
        assert_eq!(classify_swipe(300.0, 240.0, THRESHOLD), Some(Step::Forward));
    }

    #[test]
    fn tracker_matches_release_to_its_source() {
        let mut g = GestureTracker::new();
        assert_eq!(g.finish(GestureSource::Touch, 10.0, THRESHOLD), None);

        g.begin(GestureSource::Pointer, 500.0);
        g.update(GestureSource::Pointer, 420.0);
        assert_eq!(g.displacement(), Some(80.0));

        // A touch release does not end a pointer drag.
        assert_eq!(g.finish(GestureSource::Touch, 0.0, THRESHOLD), None);
        assert!(g.is_active());

        assert_eq!(
            g.finish(GestureSource::Pointer, 420.0, THRESHOLD),
            Some(Some(Step::Forward))
        );
        assert!(!g.is_active());
    }

    #[test]
    fn short_release_is_a_tap() {
        let mut g = GestureTracker::new();
        g.begin(GestureSource::Touch, 200.0);
        assert_eq!(g.finish(GestureSource::Touch, 180.0, THRESHOLD), Some(None));
    }
}
