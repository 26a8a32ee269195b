//! Headless behavior layer for brochure pages.
//!
//! The host (a browser shim, a test harness, a native shell) owns the actual
//! elements and forwards events here; this crate decides what those elements
//! should show. The carousel controller is the centerpiece; the `page`
//! module carries the shared header, navigation, menu, contact form and
//! image-loading state that every page wires up at load.
//!
//! Nothing in here blocks or spawns. Timed behavior (auto-play, settle
//! locks, debounced resize, form feedback) is modeled as
//! [`schedule::ScheduledTask`] values that the host drives by calling
//! `tick(now)` from its frame or timer callback.

pub mod carousel;
pub mod constants;
/// Form error types.
pub mod error;
pub mod input;
pub mod page;
pub mod schedule;
pub mod viewport;

pub use carousel::{
    CarouselConfig, CarouselController, CarouselKey, CarouselRegistry,
    HeadlessSurface, RenderSurface,
};
pub use error::{FieldError, FormError};
pub use input::{InputEvent, Key, KeyTarget};
pub use page::Page;
pub use schedule::{Debouncer, ScheduledTask};
pub use viewport::{DeviceClass, Viewport};
