//! Registry of the carousels on one page, keyed by CarouselKey
//!
//! Owned by the page initializer. Iteration follows registration order so
//! broadcast handlers fire in the order carousels were set up.

use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use super::controller::CarouselController;
use super::focus;
use super::surface::RenderSurface;
use super::types::{CarouselConfig, CarouselKey};
use crate::input::{Key, KeyTarget};
use crate::viewport::Viewport;

/// Every carousel on a page, in registration order.
#[derive(Debug)]
pub struct CarouselRegistry<S> {
    carousels: Vec<CarouselController<S>>,
    index: HashMap<CarouselKey, usize>,
    page_visible: bool,
}

impl<S> Default for CarouselRegistry<S> {
    fn default() -> Self {
        Self {
            carousels: Vec::new(),
            index: HashMap::new(),
            page_visible: true,
        }
    }
}

impl<S: RenderSurface> CarouselRegistry<S> {
    /// Create an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register a controller. A key registered twice replaces the
    /// earlier controller in place, after shutting it down. A carousel
    /// registered while the page is hidden starts paused.
    pub fn register(
        &mut self,
        key: CarouselKey,
        surface: Option<S>,
        config: CarouselConfig,
        viewport: Viewport,
        now: Instant,
    ) -> &mut CarouselController<S> {
        let controller =
            CarouselController::new(key, surface, config, viewport, now);
        self.insert(controller, now)
    }

    /// Register an already built controller, applying the page's visibility.
    pub fn insert(
        &mut self,
        mut controller: CarouselController<S>,
        now: Instant,
    ) -> &mut CarouselController<S> {
        controller.set_page_visible(self.page_visible, now);
        let key = controller.key().clone();
        let slot = match self.index.get(&key) {
            Some(&slot) => {
                debug!("carousel {key}: replacing existing registration");
                self.carousels[slot].shutdown();
                self.carousels[slot] = controller;
                slot
            }
            None => {
                self.carousels.push(controller);
                let slot = self.carousels.len() - 1;
                self.index.insert(key, slot);
                slot
            }
        };
        &mut self.carousels[slot]
    }

    /// Controller registered under `key`.
    pub fn get(&self, key: &CarouselKey) -> Option<&CarouselController<S>> {
        self.index.get(key).map(|&slot| &self.carousels[slot])
    }

    /// Mutable controller registered under `key`.
    pub fn get_mut(
        &mut self,
        key: &CarouselKey,
    ) -> Option<&mut CarouselController<S>> {
        let slot = *self.index.get(key)?;
        Some(&mut self.carousels[slot])
    }

    /// Unregister and shut down a carousel.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<CarouselController<S>> {
        let slot = self.index.remove(key)?;
        let mut removed = self.carousels.remove(slot);
        removed.shutdown();
        for other in self.index.values_mut() {
            if *other > slot {
                *other -= 1;
            }
        }
        Some(removed)
    }

    /// Number of registered carousels.
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    /// True when nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Keys in registration order.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.carousels.iter().map(|c| c.key().clone()).collect()
    }

    /// Controllers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CarouselController<S>> {
        self.carousels.iter()
    }

    /// Carousel that page-level arrow keys should drive.
    pub fn keyboard_target(&self, viewport: Viewport) -> Option<&CarouselKey> {
        let slot = focus::nearest_to_center(
            self.carousels.iter().map(|c| c.bounds()),
            viewport,
        )?;
        Some(self.carousels[slot].key())
    }

    /// Route a page-level key press. Returns true when a carousel consumed
    /// it.
    pub fn route_key(
        &mut self,
        key: Key,
        target: KeyTarget,
        viewport: Viewport,
        now: Instant,
    ) -> bool {
        if !matches!(key, Key::ArrowLeft | Key::ArrowRight)
            || !focus::accepts_global_keys(target)
        {
            return false;
        }
        let Some(slot) = focus::nearest_to_center(
            self.carousels.iter().map(|c| c.bounds()),
            viewport,
        ) else {
            return false;
        };
        self.carousels[slot].handle_key(key, now)
    }

    /// Forward a settled viewport to every carousel.
    pub fn apply_viewport(&mut self, viewport: Viewport, now: Instant) {
        for carousel in &mut self.carousels {
            carousel.apply_viewport(viewport, now);
        }
    }

    /// Pause or resume every carousel, and remember the state for later registrations.
    pub fn set_page_visible(&mut self, visible: bool, now: Instant) {
        self.page_visible = visible;
        for carousel in &mut self.carousels {
            carousel.set_page_visible(visible, now);
        }
    }

    /// Whether the page was visible at the last visibility change.
    pub fn is_page_visible(&self) -> bool {
        self.page_visible
    }

    /// Run every carousel timer due by `now`.
    pub fn tick(&mut self, now: Instant) {
        for carousel in &mut self.carousels {
            carousel.tick(now);
        }
    }

    /// Earliest deadline across all carousels.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.carousels.iter().filter_map(|c| c.next_deadline()).min()
    }

    /// Shut down every carousel and clear the registry.
    pub fn shutdown(&mut self) {
        for carousel in &mut self.carousels {
            carousel.shutdown();
        }
        self.carousels.clear();
        self.index.clear();
    }
}
