#[cfg(test)]
mod carousel_properties {
    use std::time::{Duration, Instant};

    use brochure_core::carousel::OffsetMode;
    use brochure_core::{
        CarouselConfig, CarouselController, CarouselKey, HeadlessSurface,
        InputEvent, Viewport,
    };

    const DESKTOP: Viewport = Viewport::new(1440.0, 900.0);
    const TABLET: Viewport = Viewport::new(820.0, 1180.0);
    const MOBILE: Viewport = Viewport::new(390.0, 844.0);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller(
        items: usize,
        viewport: Viewport,
        now: Instant,
    ) -> CarouselController<HeadlessSurface> {
        CarouselController::new(
            CarouselKey::new("ion-exchange"),
            Some(HeadlessSurface::new(items, viewport.width - 32.0)),
            CarouselConfig::product_defaults(),
            viewport,
            now,
        )
    }

    /// Let the settle lock run out so the next navigation is accepted.
    fn settle(c: &mut CarouselController<HeadlessSurface>, now: &mut Instant) {
        *now += ms(500);
        c.tick(*now);
        assert!(!c.is_animating());
    }

    #[test]
    fn test_index_stays_in_bounds_across_operations() {
        for (items, viewport) in [(0, DESKTOP), (3, DESKTOP), (6, DESKTOP), (9, TABLET), (6, MOBILE)] {
            let mut now = Instant::now();
            let mut c = controller(items, viewport, now);
            for target in [-5isize, 2, 40, 0, 7] {
                c.go_to(target, now);
                assert!(c.current_index() <= c.max_index());
                settle_if_animating(&mut c, &mut now);
                c.advance(now);
                assert!(c.current_index() <= c.max_index());
                settle_if_animating(&mut c, &mut now);
                c.retreat(now);
                assert!(c.current_index() <= c.max_index());
                settle_if_animating(&mut c, &mut now);
            }
        }
    }

    fn settle_if_animating(c: &mut CarouselController<HeadlessSurface>, now: &mut Instant) {
        if c.is_animating() {
            settle(c, now);
        }
    }

    #[test]
    fn test_six_items_on_desktop_wrap_after_one_step() {
        let mut now = Instant::now();
        let mut c = controller(6, DESKTOP, now);
        assert_eq!(c.max_index(), 1);

        assert!(c.advance(now));
        assert_eq!(c.current_index(), 1);
        settle(&mut c, &mut now);
        assert!(c.advance(now));
        assert_eq!(c.current_index(), 0);
        settle(&mut c, &mut now);
        assert!(c.retreat(now));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_go_to_clamps_both_ends() {
        let mut now = Instant::now();
        let mut c = controller(10, DESKTOP, now);
        c.go_to(-5, now);
        assert_eq!(c.current_index(), 0);
        settle(&mut c, &mut now);
        c.go_to(c.max_index() as isize + 5, now);
        assert_eq!(c.current_index(), c.max_index());
    }

    #[test]
    fn test_mobile_partial_cards_allow_stepping_to_the_last_item() {
        let mut now = Instant::now();
        let mut c = controller(6, MOBILE, now);
        assert_eq!(c.max_index(), 5);
        c.go_to(10, now);
        assert_eq!(c.current_index(), 5);
        assert_eq!(c.surface().unwrap().last_mode, Some(OffsetMode::Scroll));
        settle(&mut c, &mut now);
        c.advance(now);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_requests_during_transition_are_dropped() {
        let now = Instant::now();
        let mut c = controller(12, DESKTOP, now);
        assert!(c.advance(now));
        assert!(!c.advance(now + ms(100)));
        assert!(!c.retreat(now + ms(200)));
        assert!(!c.go_to(4, now + ms(499)));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.surface().unwrap().offsets_applied, 1);
    }

    #[test]
    fn test_auto_play_is_desktop_only() {
        let now = Instant::now();
        let mut tablet = controller(12, TABLET, now);
        assert!(!tablet.start_auto_play(now));
        assert_eq!(tablet.next_deadline(), None);

        let mut desktop = controller(12, DESKTOP, now);
        assert!(desktop.is_auto_playing());
        desktop.apply_viewport(MOBILE, now + ms(10));
        assert!(!desktop.is_auto_playing());
    }

    #[test]
    fn test_auto_play_advances_every_interval() {
        let t0 = Instant::now();
        let mut c = controller(12, DESKTOP, t0);
        c.tick(t0 + ms(3999));
        assert_eq!(c.current_index(), 0);
        c.tick(t0 + ms(4000));
        assert_eq!(c.current_index(), 1);
        c.tick(t0 + ms(12_000));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_swipe_threshold() {
        let now = Instant::now();
        let mut c = controller(8, MOBILE, now);

        c.handle_input(InputEvent::TouchStart { x: 300.0 }, now);
        c.handle_input(InputEvent::TouchEnd { x: 251.0 }, now);
        assert_eq!(c.current_index(), 0);

        c.handle_input(InputEvent::TouchStart { x: 300.0 }, now);
        c.handle_input(InputEvent::TouchEnd { x: 240.0 }, now);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_backward_swipe_from_start_wraps_to_end() {
        let now = Instant::now();
        let mut c = controller(8, MOBILE, now);
        c.handle_input(InputEvent::TouchStart { x: 100.0 }, now);
        c.handle_input(InputEvent::TouchEnd { x: 151.0 }, now);
        assert_eq!(c.current_index(), c.max_index());
    }

    #[test]
    fn test_empty_track_is_inert() {
        let now = Instant::now();
        let mut c = controller(0, DESKTOP, now);
        assert!(c.is_inert());
        assert!(!c.advance(now));
        assert_eq!(c.next_deadline(), None);
        let surface = c.surface().unwrap();
        assert!(!surface.prev_enabled && !surface.next_enabled);
    }
}
