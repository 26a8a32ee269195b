//! Site configuration for brochure pages.
//!
//! Compiled defaults live in `brochure_core::constants`; this crate layers a
//! TOML or JSON document over them, checks the result against guard rails,
//! and turns it into the runtime values the page initializer consumes. The
//! `brochure-layout` binary uses it to preview carousel layouts.

pub mod models;
pub mod validation;

pub use models::{
    CarouselPreset, CarouselSettings, ConfigSource, ContactSettings,
    PageLayout, SiteConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings, validate};

/// Load from the environment and validate in one step. Warnings are logged.
pub fn load_validated() -> anyhow::Result<(SiteConfig, ConfigSource)> {
    let (config, source) = SiteConfig::load_from_env()?;
    let warnings = validate(&config)?;
    warnings.emit();
    tracing::info!("site config loaded from {source:?}");
    Ok((config, source))
}
