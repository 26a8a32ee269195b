//! Page-level wiring shared by every brochure page
//!
//! [`Page`] is what the host builds at load: it owns the carousel registry
//! and the chrome state, debounces resizes, fans visibility and keyboard
//! events out, and exposes a single `tick` for every timer on the page.

pub mod form;
pub mod header;
pub mod lazy;
pub mod menu;
pub mod nav;

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::carousel::{
    CarouselConfig, CarouselController, CarouselKey, CarouselRegistry,
    RenderSurface,
};
use crate::constants::timing;
use crate::error::FormResult;
use crate::input::{Key, KeyTarget};
use crate::schedule::Debouncer;
use crate::viewport::Viewport;

pub use form::{ContactForm, ContactSubmission, Feedback, FeedbackKind, FieldKind};
pub use header::{HeaderState, HeaderView};
pub use lazy::{LazyImages, ResponsiveSources};
pub use menu::{CloseReason, MobileMenu};
pub use nav::Section;

/// Something the host has to act on after a `tick`.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// A resize burst settled. Carousels and the menu have already been
    /// updated; the host refreshes responsive images and `--header-height`.
    ViewportSettled(Viewport),
    /// The contact form finished sending; the host resets its inputs.
    FormDelivered(ContactSubmission),
}

/// Everything a brochure page wires up at load.
#[derive(Debug)]
pub struct Page<S> {
    viewport: Viewport,
    resize: Debouncer<Viewport>,
    carousels: CarouselRegistry<S>,
    header: HeaderState,
    header_height: Option<f32>,
    sections: Vec<Section>,
    active_section: Option<String>,
    menu: MobileMenu,
    form: ContactForm,
    images: LazyImages,
}

impl<S: RenderSurface> Page<S> {
    /// Page with the default 250 ms resize debounce.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_resize_debounce(
            viewport,
            Duration::from_millis(timing::RESIZE_DEBOUNCE_MS),
        )
    }

    /// Page with a custom resize quiet window.
    pub fn with_resize_debounce(viewport: Viewport, wait: Duration) -> Self {
        info!(
            "page initialized: {}x{} ({})",
            viewport.width,
            viewport.height,
            viewport.device_class()
        );
        Self {
            viewport,
            resize: Debouncer::new(wait),
            carousels: CarouselRegistry::new(),
            header: HeaderState::new(),
            header_height: None,
            sections: Vec::new(),
            active_section: None,
            menu: MobileMenu::new(),
            form: ContactForm::default(),
            images: LazyImages::new(),
        }
    }

    /// Replace the default contact form.
    pub fn with_contact_form(mut self, form: ContactForm) -> Self {
        self.form = form;
        self
    }

    /// Build a carousel for the current viewport. Registered while the page
    /// is hidden, it starts paused.
    pub fn register_carousel(
        &mut self,
        key: impl Into<CarouselKey>,
        surface: Option<S>,
        config: CarouselConfig,
        now: Instant,
    ) -> &mut CarouselController<S> {
        self.carousels
            .register(key.into(), surface, config, self.viewport, now)
    }

    /// Last settled viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Registered carousels.
    pub fn carousels(&self) -> &CarouselRegistry<S> {
        &self.carousels
    }

    /// Mutable access to the carousels.
    pub fn carousels_mut(&mut self) -> &mut CarouselRegistry<S> {
        &mut self.carousels
    }

    /// Current header view.
    pub fn header(&self) -> HeaderView {
        self.header.view()
    }

    /// Mobile menu state.
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Mutable mobile menu state.
    pub fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    /// Contact form state.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Mutable contact form state.
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Lazy image tracker.
    pub fn images_mut(&mut self) -> &mut LazyImages {
        &mut self.images
    }

    /// Root margin to use when observing lazy images.
    pub fn image_root_margin(&self) -> f32 {
        lazy::root_margin(self.viewport.device_class())
    }

    /// Section layout, in page order.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Section highlighted in the navigation, if any yet.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Measured header height in px, or `None` before layout.
    pub fn set_header_height(&mut self, measured: Option<f32>) {
        self.header_height = measured;
    }

    /// Value for the `--header-height` custom property.
    pub fn header_height_css(&self) -> String {
        nav::header_height_css(self.header_height)
    }

    /// Scroll event: update the header and the highlighted section.
    pub fn on_scroll(&mut self, scroll_y: f32) -> HeaderView {
        let class = self.viewport.device_class();
        let view = self.header.on_scroll(scroll_y, class);
        let active = nav::active_section(&self.sections, scroll_y, class);
        // Between sections the previous highlight stays.
        if let Some(id) = active {
            if self.active_section.as_deref() != Some(id) {
                debug!("active section: {id}");
                self.active_section = Some(id.to_owned());
            }
        }
        view
    }

    /// Raw resize event. Work happens once the burst settles.
    pub fn on_resize(&mut self, viewport: Viewport, now: Instant) {
        self.resize.push(viewport, now);
    }

    /// Closes the menu and re-runs layout when the orientation actually
    /// changed.
    pub fn on_orientation_change(&mut self, orientation: i32, now: Instant) {
        if self.menu.on_orientation_change(orientation) {
            self.resize.push(self.viewport, now);
        }
    }

    /// Page shown or hidden. Hidden pages run no auto-play.
    pub fn on_visibility(&mut self, visible: bool, now: Instant) {
        debug!("page visible: {visible}");
        self.carousels.set_page_visible(visible, now);
    }

    /// Document-level keydown. Returns true when the key was consumed.
    pub fn on_key(&mut self, key: Key, target: KeyTarget, now: Instant) -> bool {
        match key {
            Key::Escape => self.menu.close(CloseReason::Escape),
            Key::ArrowLeft | Key::ArrowRight => {
                self.carousels.route_key(key, target, self.viewport, now)
            }
            _ => false,
        }
    }

    /// In-page link click. Closes the menu on compact layouts and returns
    /// the scroll position to animate to, if the link has a real target.
    pub fn on_anchor_click(
        &mut self,
        href: &str,
        target_rect_top: Option<f32>,
        scroll_y: f32,
    ) -> Option<f32> {
        let class = self.viewport.device_class();
        self.menu.on_link_click(class);
        nav::anchor_scroll_target(
            href,
            target_rect_top?,
            scroll_y,
            self.header_height,
            class,
        )
    }

    /// Submit the contact form for the current device class.
    pub fn submit_contact(
        &mut self,
        submission: &ContactSubmission,
        now: Instant,
    ) -> FormResult<()> {
        self.form
            .submit(submission, self.viewport.device_class(), now)
    }

    /// Run every timer on the page that is due by `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<PageEvent> {
        let mut events = Vec::new();
        if let Some(viewport) = self.resize.poll(now) {
            self.apply_viewport(viewport, now);
            events.push(PageEvent::ViewportSettled(viewport));
        }
        self.carousels.tick(now);
        if let Some(form::FormOutcome::Delivered(submission)) =
            self.form.tick(now, self.viewport.device_class())
        {
            events.push(PageEvent::FormDelivered(submission));
        }
        events
    }

    /// Earliest deadline across every timer on the page.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.resize.due(),
            self.carousels.next_deadline(),
            self.form.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Cancel every timer and drop the carousels.
    pub fn shutdown(&mut self) {
        self.resize.cancel();
        self.carousels.shutdown();
        self.form.shutdown();
    }

    fn apply_viewport(&mut self, viewport: Viewport, now: Instant) {
        let class = viewport.device_class();
        debug!(
            "viewport settled: {}x{} ({class})",
            viewport.width, viewport.height
        );
        self.viewport = viewport;
        self.menu.on_resize(class);
        self.carousels.apply_viewport(viewport, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::HeadlessSurface;

    const DESKTOP: Viewport = Viewport::new(1280.0, 800.0);
    const PHONE: Viewport = Viewport::new(390.0, 844.0);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn resize_bursts_apply_once_after_quiet_window() {
        let t0 = Instant::now();
        let mut page: Page<HeadlessSurface> = Page::new(DESKTOP);
        page.register_carousel(
            "superon",
            Some(HeadlessSurface::new(6, 1264.0)),
            CarouselConfig::product_defaults(),
            t0,
        );
        page.on_resize(Viewport::new(900.0, 800.0), t0);
        page.on_resize(PHONE, t0 + ms(100));
        assert!(page.tick(t0 + ms(300)).is_empty());
        assert_eq!(page.viewport(), DESKTOP);

        let events = page.tick(t0 + ms(350));
        assert_eq!(events, vec![PageEvent::ViewportSettled(PHONE)]);
        let carousel = page.carousels().get(&CarouselKey::new("superon")).unwrap();
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.max_index(), 5);
    }

    #[test]
    fn settling_on_desktop_closes_the_menu() {
        let t0 = Instant::now();
        let mut page: Page<HeadlessSurface> = Page::new(PHONE);
        page.menu_mut().open();
        page.on_resize(DESKTOP, t0);
        page.tick(t0 + ms(250));
        assert!(!page.menu().is_open());
    }

    #[test]
    fn escape_closes_menu_and_arrows_go_to_carousels() {
        let t0 = Instant::now();
        let mut page: Page<HeadlessSurface> = Page::new(DESKTOP);
        page.register_carousel(
            "asian-paints",
            Some(HeadlessSurface::new(8, 1264.0).with_bounds(200.0, 560.0)),
            CarouselConfig::product_defaults(),
            t0,
        );
        assert!(!page.on_key(Key::Escape, KeyTarget::Document, t0));
        page.menu_mut().open();
        assert!(page.on_key(Key::Escape, KeyTarget::Document, t0));

        assert!(!page.on_key(Key::ArrowRight, KeyTarget::TextInput, t0));
        assert!(page.on_key(Key::ArrowRight, KeyTarget::Document, t0));
        let key = CarouselKey::new("asian-paints");
        assert_eq!(page.carousels().get(&key).unwrap().current_index(), 1);
    }

    #[test]
    fn scroll_updates_header_and_active_section() {
        let mut page: Page<HeadlessSurface> = Page::new(DESKTOP);
        page.set_sections(vec![
            Section::new("home", 0.0, 700.0),
            Section::new("products", 700.0, 1200.0),
        ]);
        let view = page.on_scroll(650.0);
        assert!(view.shadow && view.hidden && view.scroll_top_visible);
        assert_eq!(page.active_section(), Some("products"));
        page.on_scroll(5000.0);
        assert_eq!(page.active_section(), Some("products"));
    }

    #[test]
    fn anchor_click_on_mobile_closes_menu_and_offsets_target() {
        let mut page: Page<HeadlessSurface> = Page::new(PHONE);
        page.set_header_height(Some(60.0));
        page.menu_mut().open();
        assert_eq!(page.on_anchor_click("#contact", Some(900.0), 100.0), Some(930.0));
        assert!(!page.menu().is_open());
        assert_eq!(page.on_anchor_click("#", Some(900.0), 100.0), None);
        assert_eq!(page.on_anchor_click("#missing", None, 100.0), None);
    }

    #[test]
    fn form_delivery_surfaces_as_an_event() {
        let t0 = Instant::now();
        let mut page: Page<HeadlessSurface> = Page::new(DESKTOP);
        let submission = ContactSubmission {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: "0141 2345678".into(),
            company: "Acme".into(),
            message: "Please call me back tomorrow.".into(),
        };
        page.submit_contact(&submission, t0).unwrap();
        assert_eq!(page.next_deadline(), Some(t0 + ms(1500)));
        let events = page.tick(t0 + ms(1500));
        assert!(matches!(events.as_slice(), [PageEvent::FormDelivered(s)] if s.company == "Acme"));
    }

    #[test]
    fn late_carousel_on_hidden_page_waits_for_visibility() {
        let t0 = Instant::now();
        let mut page: Page<HeadlessSurface> = Page::new(DESKTOP);
        page.on_visibility(false, t0);
        let late = page.register_carousel(
            "late",
            Some(HeadlessSurface::new(8, 1264.0)),
            CarouselConfig::product_defaults(),
            t0 + ms(50),
        );
        assert!(!late.is_auto_playing());
        assert_eq!(page.next_deadline(), None);

        page.on_visibility(true, t0 + ms(1_000));
        let key = CarouselKey::new("late");
        assert!(page.carousels().get(&key).unwrap().is_auto_playing());
    }

    #[test]
    fn shutdown_clears_every_deadline() {
        let t0 = Instant::now();
        let mut page: Page<HeadlessSurface> = Page::new(DESKTOP);
        page.register_carousel(
            "superon",
            Some(HeadlessSurface::new(8, 1264.0)),
            CarouselConfig::product_defaults(),
            t0,
        );
        page.on_resize(PHONE, t0);
        assert!(page.next_deadline().is_some());
        page.shutdown();
        assert_eq!(page.next_deadline(), None);
        assert!(page.carousels().is_empty());
    }
}
