//! Viewport classification

use std::fmt;

use crate::constants::breakpoints::{DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};

/// Coarse device class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// Narrower than 768px.
    Mobile,
    /// 768px up to (not including) 1024px.
    Tablet,
    /// 1024px and wider.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width in px.
    pub fn from_width(width: f32) -> Self {
        if width < TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// True for desktop widths.
    pub fn is_desktop(self) -> bool {
        self == Self::Desktop
    }

    /// True for mobile widths.
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    /// Every class, narrowest first.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => write!(f, "Mobile"),
            Self::Tablet => write!(f, "Tablet"),
            Self::Desktop => write!(f, "Desktop"),
        }
    }
}

/// Inner window size as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in px.
    pub width: f32,
    /// Height in px.
    pub height: f32,
}

impl Viewport {
    /// Viewport of the given size in px.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Device class for this width.
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_width(self.width)
    }

    /// Vertical center line, used to pick the carousel keyboard events go to.
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}
