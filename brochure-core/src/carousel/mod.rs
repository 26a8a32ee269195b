//! Responsive product carousel
//!
//! One parametrized controller serves every carousel on every page; the
//! per-page differences (how many cards show on each device class, how wide a
//! card is) live in [`CarouselConfig`]. State, gesture interpretation,
//! keyboard targeting and the page-level registry are split into their own
//! modules so each can be tested without a host.

pub mod controller;
mod focus;
mod gesture;
pub mod registry;
mod state;
pub mod surface;
pub mod types;

pub use controller::CarouselController;
pub use registry::CarouselRegistry;
pub use state::{CarouselState, Step};
pub use surface::{HeadlessSurface, RenderSurface};
pub use types::*;
