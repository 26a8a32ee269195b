//! Deferred and device-specific image sources

use std::collections::BTreeMap;

use tracing::debug;

use crate::constants::lazy;
use crate::viewport::DeviceClass;

/// Vertical root margin for the intersection test, in px.
pub fn root_margin(class: DeviceClass) -> f32 {
    if class.is_mobile() {
        lazy::ROOT_MARGIN_MOBILE
    } else {
        lazy::ROOT_MARGIN_DEFAULT
    }
}

/// Whether an element spanning `top..bottom` (client space) falls inside the
/// viewport grown by the root margin.
pub fn within_root(top: f32, bottom: f32, viewport_height: f32, margin: f32) -> bool {
    bottom >= -margin && top <= viewport_height + margin
}

/// Per-device image variants. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsiveSources {
    /// Source below 768 px.
    pub mobile: Option<String>,
    /// Source from 768 px up to desktop.
    pub tablet: Option<String>,
    /// Source at 1024 px and wider.
    pub desktop: Option<String>,
}

impl ResponsiveSources {
    /// Variant for the device class, if one was provided. No fallback to
    /// other classes: the element keeps whatever source it already has.
    pub fn for_class(&self, class: DeviceClass) -> Option<&str> {
        match class {
            DeviceClass::Mobile => self.mobile.as_deref(),
            DeviceClass::Tablet => self.tablet.as_deref(),
            DeviceClass::Desktop => self.desktop.as_deref(),
        }
    }
}

/// Images still waiting for their deferred source, keyed by host id.
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    pending: BTreeMap<String, String>,
}

impl LazyImages {
    /// Create an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an image until its deferred source is loaded.
    pub fn observe(&mut self, id: impl Into<String>, deferred_src: impl Into<String>) {
        self.pending.insert(id.into(), deferred_src.into());
    }

    /// Number of images not loaded yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// An observed image entered the root. Returns the source to load; each
    /// image loads at most once.
    pub fn on_intersect(&mut self, id: &str) -> Option<String> {
        let src = self.pending.remove(id)?;
        debug!("lazy image {id} loading");
        Some(src)
    }

    /// Hosts without intersection support load everything immediately.
    pub fn load_all(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_depends_on_device() {
        assert_eq!(root_margin(DeviceClass::Mobile), 50.0);
        assert_eq!(root_margin(DeviceClass::Tablet), 100.0);
        assert!(within_root(840.0, 1000.0, 800.0, 50.0));
        assert!(!within_root(851.0, 1000.0, 800.0, 50.0));
        assert!(within_root(-300.0, -60.0, 800.0, 100.0));
    }

    #[test]
    fn images_load_once() {
        let mut images = LazyImages::new();
        images.observe("hero", "img/hero.webp");
        images.observe("team", "img/team.webp");
        assert_eq!(images.on_intersect("hero").as_deref(), Some("img/hero.webp"));
        assert_eq!(images.on_intersect("hero"), None);
        assert_eq!(images.pending(), 1);
    }

    #[test]
    fn fallback_loads_everything() {
        let mut images = LazyImages::new();
        images.observe("a", "a.png");
        images.observe("b", "b.png");
        let loaded = images.load_all();
        assert_eq!(loaded.len(), 2);
        assert_eq!(images.pending(), 0);
    }

    #[test]
    fn responsive_source_has_no_cross_class_fallback() {
        let sources = ResponsiveSources {
            mobile: Some("m.jpg".into()),
            tablet: None,
            desktop: Some("d.jpg".into()),
        };
        assert_eq!(sources.for_class(DeviceClass::Mobile), Some("m.jpg"));
        assert_eq!(sources.for_class(DeviceClass::Tablet), None);
        assert_eq!(sources.for_class(DeviceClass::Desktop), Some("d.jpg"));
    }
}
