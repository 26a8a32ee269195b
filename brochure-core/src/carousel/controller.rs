//! Carousel controller
//!
//! Owns one track's index, layout metrics and timers, and drives its
//! [`RenderSurface`] to the position the index implies.
//!
//! Two orthogonal state machines live here:
//!
//! - navigation: `Idle -> Navigating -> Idle`. A render locks navigation for
//!   the settle duration; requests arriving while locked are dropped, not
//!   queued.
//! - auto-play: `Off <-> On`, only ever `On` while the device class is
//!   desktop. At most one auto-play deadline exists per controller.
//!
//! A controller built without a surface, or over an empty track, is inert:
//! every operation is safe and nothing is scheduled or rendered.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use super::gesture::GestureTracker;
use super::state::{CarouselState, Step};
use super::surface::RenderSurface;
use super::types::{
    CarouselConfig, CarouselKey, NavControl, NavControls, OffsetMode,
    SurfaceBounds, Transition,
};
use crate::input::{GestureSource, InputEvent, Key};
use crate::schedule::ScheduledTask;
use crate::viewport::{DeviceClass, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    AutoPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Navigation {
    Step(Step),
    Jump(isize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Settle,
    GestureResume,
    AutoPlay,
}

/// Behavior of one carousel track over a host [`RenderSurface`].
#[derive(Debug)]
pub struct CarouselController<S> {
    key: CarouselKey,
    surface: Option<S>,
    config: CarouselConfig,
    device: DeviceClass,
    state: CarouselState,
    controls: NavControls,

    // Navigation lock
    animating: bool,
    settle: ScheduledTask,

    // Auto-play
    auto_play: ScheduledTask,
    gesture_resume: ScheduledTask,
    resume_after_gesture: bool,
    resume_on_visible: bool,
    page_visible: bool,
    hovered: bool,

    gesture: GestureTracker,
}

impl<S: RenderSurface> CarouselController<S> {
    /// Build a controller for one track and start auto-play when the
    /// viewport is desktop-sized.
    pub fn new(
        key: CarouselKey,
        surface: Option<S>,
        config: CarouselConfig,
        viewport: Viewport,
        now: Instant,
    ) -> Self {
        let item_count = surface.as_ref().map_or(0, |s| s.item_count());
        if surface.is_none() {
            warn!("carousel {key}: no render surface, running inert");
        }

        let mut controller = Self {
            key,
            surface,
            config,
            device: viewport.device_class(),
            state: CarouselState::new(item_count, config.gap),
            controls: NavControls {
                prev_enabled: false,
                next_enabled: false,
            },
            animating: false,
            settle: ScheduledTask::idle(),
            auto_play: ScheduledTask::idle(),
            gesture_resume: ScheduledTask::idle(),
            resume_after_gesture: false,
            resume_on_visible: false,
            page_visible: true,
            hovered: false,
            gesture: GestureTracker::new(),
        };
        controller.recompute_layout();
        if controller.device.is_desktop() {
            controller.start_auto_play(now);
        }
        debug!(
            "carousel {}: {} items, {} visible on {}",
            controller.key,
            item_count,
            controller.state.visible_count,
            controller.device
        );
        controller
    }

    /// Re-derive visible count and item width from the current device class
    /// and container size. The index is re-clamped on the next navigation or
    /// render.
    pub fn recompute_layout(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let container_width = surface.container_width();
        let natural_width = surface.item_natural_width();
        self.state.recompute_metrics(
            &self.config,
            self.device,
            container_width,
            natural_width,
        );
        self.update_controls();
    }

    /// Step forward; wraps to the first item after the last.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.navigate(Navigation::Step(Step::Forward), Origin::User, now)
    }

    /// Step backward; wraps to the last start position before the first.
    pub fn retreat(&mut self, now: Instant) -> bool {
        self.navigate(Navigation::Step(Step::Backward), Origin::User, now)
    }

    /// Jump to `index`, clamped into `[0, max_index]`.
    pub fn go_to(&mut self, index: isize, now: Instant) -> bool {
        self.navigate(Navigation::Jump(index), Origin::User, now)
    }

    fn navigate(
        &mut self,
        navigation: Navigation,
        origin: Origin,
        now: Instant,
    ) -> bool {
        if self.is_inert() {
            return false;
        }
        if self.animating {
            trace!("carousel {}: {navigation:?} dropped mid-transition", self.key);
            return false;
        }

        self.state.clamp_index();
        match navigation {
            Navigation::Step(step) => self.state.step(step),
            Navigation::Jump(index) => self.state.go_to(index),
        }
        self.render(true, now);
        self.update_controls();

        // Manual stepping pushes the next automatic advance a full interval out.
        if origin == Origin::User
            && matches!(navigation, Navigation::Step(_))
            && self.auto_play.is_armed()
        {
            self.auto_play
                .schedule_repeating(now, self.config.auto_play_interval);
        }

        debug!(
            "carousel {}: {origin:?} {navigation:?} -> index {}",
            self.key,
            self.state.current_index()
        );
        true
    }

    /// Move the surface to the offset implied by the current index and lock
    /// navigation for the settle duration.
    pub fn render(&mut self, animate: bool, now: Instant) {
        if self.is_inert() {
            return;
        }
        self.state.clamp_index();
        let offset = self.state.offset();
        let mode = OffsetMode::for_class(self.device);
        let transition = if animate {
            Transition::Animated
        } else {
            Transition::Immediate
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.apply_offset(offset, mode, transition);
        }
        self.animating = true;
        self.settle.schedule_once(now, self.config.settle);
    }

    /// Recompute and push the enabled state of both navigation buttons.
    pub fn update_controls(&mut self) -> NavControls {
        let controls = self.state.controls();
        self.controls = controls;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_control_enabled(NavControl::Prev, controls.prev_enabled);
            surface.set_control_enabled(NavControl::Next, controls.next_enabled);
        }
        controls
    }

    /// Start auto-play at the configured interval.
    pub fn start_auto_play(&mut self, now: Instant) -> bool {
        self.start_auto_play_every(self.config.auto_play_interval, now)
    }

    /// Start auto-play at `interval`, replacing any live timer. Desktop only.
    pub fn start_auto_play_every(
        &mut self,
        interval: Duration,
        now: Instant,
    ) -> bool {
        if self.is_inert() || !self.device.is_desktop() {
            return false;
        }
        self.auto_play.schedule_repeating(now, interval);
        trace!("carousel {}: auto-play every {interval:?}", self.key);
        true
    }

    /// Cancel auto-play, including a pending post-gesture resume.
    pub fn stop_auto_play(&mut self) -> bool {
        let resume_pending = self.gesture_resume.cancel();
        let stopped = self.auto_play.cancel();
        self.resume_after_gesture = false;
        if stopped {
            trace!("carousel {}: auto-play stopped", self.key);
        }
        stopped || resume_pending
    }

    /// Restart auto-play when the context allows it: desktop, page visible,
    /// not hovered, no gesture in progress.
    fn resume_auto_play(&mut self, now: Instant) -> bool {
        if !self.page_visible || self.hovered || self.gesture.is_active() {
            return false;
        }
        self.start_auto_play(now)
    }

    /// Apply a settled viewport size: reclassify, re-layout, jump without
    /// animation, and re-evaluate auto-play for the new device class.
    pub fn apply_viewport(&mut self, viewport: Viewport, now: Instant) {
        let class = viewport.device_class();
        if class != self.device {
            debug!("carousel {}: {} -> {}", self.key, self.device, class);
        }
        self.device = class;
        if !class.is_desktop() {
            self.hovered = false;
        }

        self.recompute_layout();
        self.render(false, now);
        self.update_controls();

        if !class.is_desktop() {
            self.stop_auto_play();
        } else if !self.auto_play.is_armed() {
            self.resume_auto_play(now);
        }
    }

    /// Pause while the page is hidden; resume on return only if auto-play
    /// was running, or suspended by a gesture, when the page was hidden.
    pub fn set_page_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.page_visible {
            return;
        }
        self.page_visible = visible;
        if !visible {
            self.resume_on_visible = self.auto_play.is_armed()
                || self.gesture_resume.is_armed()
                || self.resume_after_gesture;
            self.stop_auto_play();
        } else if std::mem::take(&mut self.resume_on_visible) {
            if self.gesture.is_active() {
                // Hand the resume back to the gesture still in progress.
                self.resume_after_gesture = true;
            } else {
                self.resume_auto_play(now);
            }
        }
    }

    /// Whether the page was visible at the last visibility change.
    pub fn is_page_visible(&self) -> bool {
        self.page_visible
    }

    /// Route one input event. Returns true when the event was consumed and
    /// the host should suppress its default handling.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::TouchStart { x } => {
                self.begin_gesture(GestureSource::Touch, x)
            }
            InputEvent::TouchMove { x } => {
                self.gesture.update(GestureSource::Touch, x);
                false
            }
            InputEvent::TouchEnd { x } => {
                self.end_gesture(GestureSource::Touch, x, now)
            }
            InputEvent::TouchCancel => {
                self.cancel_gesture(now);
                false
            }
            InputEvent::PointerDown { x } => {
                self.begin_gesture(GestureSource::Pointer, x)
            }
            InputEvent::PointerMove { x } => {
                self.gesture.update(GestureSource::Pointer, x);
                false
            }
            InputEvent::PointerUp { x } => {
                self.end_gesture(GestureSource::Pointer, x, now)
            }
            InputEvent::PointerEnter => {
                if self.device.is_desktop() {
                    self.hovered = true;
                    self.stop_auto_play();
                }
                false
            }
            InputEvent::PointerLeave => {
                if self.gesture.source() == Some(GestureSource::Pointer) {
                    self.cancel_gesture(now);
                }
                if self.device.is_desktop() {
                    self.hovered = false;
                    self.resume_auto_play(now);
                }
                false
            }
            InputEvent::KeyDown(key) => self.handle_key(key, now),
        }
    }

    /// Arrow keys step the carousel. Returns true for keys the carousel owns,
    /// even when the step itself was dropped mid-transition.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> bool {
        match key {
            Key::ArrowLeft => {
                self.retreat(now);
                true
            }
            Key::ArrowRight => {
                self.advance(now);
                true
            }
            _ => false,
        }
    }

    fn begin_gesture(&mut self, source: GestureSource, x: f32) -> bool {
        if self.is_inert() {
            return false;
        }
        self.gesture.begin(source, x);
        self.gesture_resume.cancel();
        if self.auto_play.cancel() {
            self.resume_after_gesture = true;
        }
        false
    }

    fn end_gesture(
        &mut self,
        source: GestureSource,
        x: f32,
        now: Instant,
    ) -> bool {
        let Some(intent) =
            self.gesture.finish(source, x, self.config.swipe_threshold)
        else {
            return false;
        };
        let navigated = intent.is_some_and(|step| {
            self.navigate(Navigation::Step(step), Origin::User, now)
        });
        self.schedule_gesture_resume(now);
        navigated
    }

    fn cancel_gesture(&mut self, now: Instant) {
        if self.gesture.cancel() {
            self.schedule_gesture_resume(now);
        }
    }

    fn schedule_gesture_resume(&mut self, now: Instant) {
        if self.resume_after_gesture {
            self.gesture_resume
                .schedule_once(now, self.config.gesture_resume_grace);
        }
    }

    /// Fire every task due by `now`, earliest first. Each task observes the
    /// instant it was due at, so a late tick replays the same sequence an
    /// on-time host would have seen.
    pub fn tick(&mut self, now: Instant) {
        while let Some((timer, at)) = self.next_due(now) {
            match timer {
                Timer::Settle => {
                    self.settle.fire(now);
                    self.animating = false;
                    self.update_controls();
                }
                Timer::GestureResume => {
                    self.gesture_resume.fire(now);
                    self.resume_after_gesture = false;
                    self.resume_auto_play(at);
                }
                Timer::AutoPlay => {
                    self.auto_play.fire(now);
                    self.navigate(
                        Navigation::Step(Step::Forward),
                        Origin::AutoPlay,
                        at,
                    );
                }
            }
        }
    }

    fn next_due(&self, now: Instant) -> Option<(Timer, Instant)> {
        let candidates = [
            (Timer::Settle, self.settle.due_by(now)),
            (Timer::GestureResume, self.gesture_resume.due_by(now)),
            (Timer::AutoPlay, self.auto_play.due_by(now)),
        ];
        let mut next: Option<(Timer, Instant)> = None;
        for (timer, due) in candidates {
            let Some(due) = due else { continue };
            if next.is_none_or(|(_, best)| due < best) {
                next = Some((timer, due));
            }
        }
        next
    }

    /// Earliest pending deadline, so the host can sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.settle.due(),
            self.gesture_resume.due(),
            self.auto_play.due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Cancel every scheduled task. Call when the page tears the carousel
    /// down.
    pub fn shutdown(&mut self) {
        self.settle.cancel();
        self.auto_play.cancel();
        self.gesture_resume.cancel();
        self.gesture.cancel();
        self.resume_after_gesture = false;
        self.resume_on_visible = false;
        self.animating = false;
    }

    /// True when there is nothing to navigate.
    pub fn is_inert(&self) -> bool {
        self.surface.is_none() || self.state.item_count == 0
    }

    /// Identifier of this carousel.
    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    /// Index of the first visible item.
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// Last index the track can start at.
    pub fn max_index(&self) -> usize {
        self.state.max_index()
    }

    /// Items in view for the current device class.
    pub fn visible_count(&self) -> f32 {
        self.state.visible_count
    }

    /// Width of one item in px.
    pub fn item_extent(&self) -> f32 {
        self.state.item_extent
    }

    /// Device class for this width.
    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Net travel of the gesture in progress, positive when moving left.
    /// Hosts can use it to drag the track under the finger.
    pub fn drag_distance(&self) -> Option<f32> {
        self.gesture.displacement()
    }

    /// True while navigation is locked by a transition.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether an auto-play deadline is armed.
    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_armed()
    }

    /// Button state last pushed to the surface.
    pub fn controls(&self) -> NavControls {
        self.controls
    }

    /// Configuration the controller was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Index and layout metrics.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Where the surface sits in the viewport, if the host reports it.
    pub fn bounds(&self) -> Option<SurfaceBounds> {
        self.surface.as_ref().and_then(|s| s.bounds())
    }

    /// The host surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the host surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}
