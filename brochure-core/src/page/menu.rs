//! Off-canvas mobile menu

use tracing::debug;

use crate::input::Key;
use crate::viewport::DeviceClass;

/// Why the menu closed. Only used for logging by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The menu toggle was pressed again.
    CloseButton,
    /// A menu link was followed.
    LinkClicked,
    /// Click outside the open menu.
    Backdrop,
    /// Viewport grew to desktop width.
    ResizedToDesktop,
    /// Screen rotated.
    OrientationChanged,
    /// Closes the mobile menu.
    Escape,
}

/// Open/closed state plus the body scroll lock that goes with it.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
    orientation: i32,
}

impl MobileMenu {
    /// Create an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed menu that starts from a known screen orientation, in degrees.
    pub fn with_orientation(orientation: i32) -> Self {
        Self {
            open: false,
            orientation,
        }
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Body scrolling is locked exactly while the menu is open.
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    /// Open the menu and lock body scrolling.
    pub fn open(&mut self) {
        if !self.open {
            debug!("mobile menu opened");
        }
        self.open = true;
    }

    /// Returns true when the menu was open.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let was_open = std::mem::take(&mut self.open);
        if was_open {
            debug!("mobile menu closed: {reason:?}");
        }
        was_open
    }

    /// Nav links close the menu on compact layouts only.
    pub fn on_link_click(&mut self, class: DeviceClass) -> bool {
        if class.is_desktop() {
            return false;
        }
        self.close(CloseReason::LinkClicked)
    }

    /// Clicks that land on the menu's own backdrop close it; clicks on its
    /// content do not.
    pub fn on_click(&mut self, on_backdrop: bool) -> bool {
        on_backdrop && self.close(CloseReason::Backdrop)
    }

    /// Called with the settled viewport after a debounced resize.
    pub fn on_resize(&mut self, class: DeviceClass) -> bool {
        class.is_desktop() && self.close(CloseReason::ResizedToDesktop)
    }

    /// Returns true when the orientation actually changed, in which case the
    /// host should re-run its layout pass.
    pub fn on_orientation_change(&mut self, orientation: i32) -> bool {
        if orientation == self.orientation {
            return false;
        }
        self.orientation = orientation;
        self.close(CloseReason::OrientationChanged);
        true
    }

    /// Key handling while focus is inside the menu. `focused` is the index
    /// of the focused element among `focusable` candidates. Returns the
    /// index focus should move to when the key was consumed.
    pub fn on_key(
        &mut self,
        key: Key,
        shift: bool,
        focusable: usize,
        focused: Option<usize>,
    ) -> Option<usize> {
        match key {
            Key::Escape => {
                self.close(CloseReason::Escape);
                None
            }
            Key::Tab => trap_tab(focusable, focused?, shift),
            _ => None,
        }
    }
}

/// Wrap Tab focus at the edges of a focus trap. `None` means the default
/// tab order applies.
pub fn trap_tab(len: usize, current: usize, shift: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (shift, current) {
        (true, 0) => Some(last),
        (false, c) if c == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_locks_body_scroll_until_closed() {
        let mut menu = MobileMenu::new();
        menu.open();
        assert!(menu.body_scroll_locked());
        assert!(menu.close(CloseReason::CloseButton));
        assert!(!menu.body_scroll_locked());
        assert!(!menu.close(CloseReason::CloseButton));
    }

    #[test]
    fn link_clicks_close_only_on_compact_layouts() {
        let mut menu = MobileMenu::new();
        menu.open();
        assert!(!menu.on_link_click(DeviceClass::Desktop));
        assert!(menu.is_open());
        assert!(menu.on_link_click(DeviceClass::Tablet));
        assert!(!menu.is_open());
    }

    #[test]
    fn backdrop_and_resize() {
        let mut menu = MobileMenu::new();
        menu.open();
        assert!(!menu.on_click(false));
        assert!(!menu.on_resize(DeviceClass::Mobile));
        assert!(menu.is_open());
        assert!(menu.on_resize(DeviceClass::Desktop));

        menu.open();
        assert!(menu.on_click(true));
    }

    #[test]
    fn orientation_change_closes_once() {
        let mut menu = MobileMenu::with_orientation(0);
        menu.open();
        assert!(!menu.on_orientation_change(0));
        assert!(menu.is_open());
        assert!(menu.on_orientation_change(90));
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_closes_and_tab_wraps() {
        let mut menu = MobileMenu::new();
        menu.open();
        assert_eq!(menu.on_key(Key::Tab, false, 4, Some(3)), Some(0));
        assert_eq!(menu.on_key(Key::Tab, true, 4, Some(0)), Some(3));
        assert_eq!(menu.on_key(Key::Tab, false, 4, Some(1)), None);
        assert_eq!(menu.on_key(Key::Escape, false, 4, Some(1)), None);
        assert!(!menu.is_open());
    }

    #[test]
    fn empty_trap_never_wraps() {
        assert_eq!(trap_tab(0, 0, false), None);
        assert_eq!(trap_tab(1, 0, false), Some(0));
        assert_eq!(trap_tab(1, 0, true), Some(0));
    }
}
