//! Serde models for the site configuration

pub mod carousel;
pub mod site;

pub use carousel::{CarouselPreset, CarouselSettings, PageLayout};
pub use site::{ConfigSource, ContactSettings, SiteConfig};
