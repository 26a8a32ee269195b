//! Input events forwarded by the host

/// Keys the behavior layer reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Step back.
    ArrowLeft,
    /// Step forward.
    ArrowRight,
    /// Moves focus; trapped inside the open menu.
    Tab,
    /// Closes the mobile menu.
    Escape,
    /// Any key not listed above.
    Other,
}

/// Where a key event originated. Arrow keys typed into form fields must not
/// move carousels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTarget {
    /// Anywhere outside a text field.
    #[default]
    Document,
    /// Single-line text input.
    TextInput,
    /// Multi-line text area.
    TextArea,
}

impl KeyTarget {
    /// True for text fields, where arrows move the caret.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }
}

/// Which device produced a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    /// Finger on a touch screen.
    Touch,
    /// Mouse or pen drag.
    Pointer,
}

/// Events a carousel consumes. Coordinates are client-space x in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Finger down.
    TouchStart {
        /// Client-space x in px.
        x: f32,
    },
    /// Finger moved.
    TouchMove {
        /// Client-space x in px.
        x: f32,
    },
    /// Finger lifted.
    TouchEnd {
        /// Client-space x in px.
        x: f32,
    },
    /// The browser took the touch over, e.g. for a scroll.
    TouchCancel,
    /// Mouse button pressed.
    PointerDown {
        /// Client-space x in px.
        x: f32,
    },
    /// Pointer moved while pressed.
    PointerMove {
        /// Client-space x in px.
        x: f32,
    },
    /// Mouse button released.
    PointerUp {
        /// Client-space x in px.
        x: f32,
    },
    /// Pointer moved over the carousel.
    PointerEnter,
    /// Pointer left the carousel; also ends a drag.
    PointerLeave,
    /// Key pressed while the carousel has focus.
    KeyDown(Key),
}
