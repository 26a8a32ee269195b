//! Guard rails applied after loading
//!
//! Values that would make a controller misbehave (divide by zero, spin a
//! timer, never lock) are hard errors. Values that merely look odd are
//! reported as warnings and left alone.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::models::SiteConfig;

/// Configuration values that would break a controller.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    /// A carousel tunable is zero, negative or NaN.
    #[error("carousel.{field} is out of range (got {value})")]
    NonPositive {
        /// Name of the offending `carousel` key.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A page's mobile visible count is zero, negative or NaN.
    #[error("page '{page}' has mobile_visible {value}; it must be greater than zero")]
    MobileVisible {
        /// Page name.
        page: String,
        /// The rejected count.
        value: f32,
    },
    /// The same carousel id appears twice on one page.
    #[error("page '{page}' lists carousel '{id}' more than once")]
    DuplicateCarousel {
        /// Page name.
        page: String,
        /// The repeated carousel id.
        id: String,
    },
    /// Two pages share a name.
    #[error("page name '{0}' is used more than once")]
    DuplicatePage(String),
}

/// Non-fatal observations about a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Auto-play fires before the previous move has settled, so every
    /// other tick is dropped.
    AutoPlayFasterThanSettle {
        /// Configured auto-play interval.
        interval_ms: u64,
        /// Configured settle duration.
        settle_ms: u64,
    },
    /// A page registers no carousels.
    EmptyPage(String),
}

/// Warnings collected by [`validate`], in the order found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(pub Vec<ConfigWarning>);

impl ConfigWarnings {
    /// True when nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Log every warning at `warn` level.
    pub fn emit(&self) {
        for warning in &self.0 {
            warn!("site config: {warning:?}");
        }
    }
}

/// Check a loaded configuration. Errors reject it; warnings are returned for the caller to log.
pub fn validate(
    config: &SiteConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let c = &config.carousel;
    let positive: [(&'static str, f64); 7] = [
        ("desktop_visible", f64::from(c.desktop_visible)),
        ("tablet_visible", f64::from(c.tablet_visible)),
        ("tablet_item_width_px", f64::from(c.tablet_item_width_px)),
        (
            "mobile_fallback_item_width_px",
            f64::from(c.mobile_fallback_item_width_px),
        ),
        ("auto_play_interval_ms", c.auto_play_interval_ms as f64),
        ("settle_ms", c.settle_ms as f64),
        ("swipe_threshold_px", f64::from(c.swipe_threshold_px)),
    ];
    for (field, value) in positive {
        if value.is_nan() || value <= 0.0 {
            return Err(ConfigGuardRailError::NonPositive { field, value });
        }
    }
    if c.gap_px.is_nan() || c.gap_px < 0.0 {
        return Err(ConfigGuardRailError::NonPositive {
            field: "gap_px",
            value: f64::from(c.gap_px),
        });
    }

    let mut warnings = Vec::new();
    if c.auto_play_interval_ms <= c.settle_ms {
        warnings.push(ConfigWarning::AutoPlayFasterThanSettle {
            interval_ms: c.auto_play_interval_ms,
            settle_ms: c.settle_ms,
        });
    }

    let mut names = HashSet::new();
    for page in &config.pages {
        if !names.insert(page.name.as_str()) {
            return Err(ConfigGuardRailError::DuplicatePage(page.name.clone()));
        }
        let visible = page.mobile_visible_count();
        if visible.is_nan() || visible <= 0.0 {
            return Err(ConfigGuardRailError::MobileVisible {
                page: page.name.clone(),
                value: visible,
            });
        }
        let mut ids = HashSet::new();
        for id in &page.carousels {
            if !ids.insert(id.as_str()) {
                return Err(ConfigGuardRailError::DuplicateCarousel {
                    page: page.name.clone(),
                    id: id.clone(),
                });
            }
        }
        if page.carousels.is_empty() {
            warnings.push(ConfigWarning::EmptyPage(page.name.clone()));
        }
    }

    Ok(ConfigWarnings(warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarouselSettings, PageLayout};

    #[test]
    fn defaults_pass_cleanly() {
        let warnings = validate(&SiteConfig::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_visible_count_is_rejected() {
        let config = SiteConfig {
            carousel: CarouselSettings {
                desktop_visible: 0.0,
                ..CarouselSettings::default()
            },
            ..SiteConfig::default()
        };
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::NonPositive {
                field: "desktop_visible",
                value: 0.0
            })
        );
    }

    #[test]
    fn nan_gap_is_rejected() {
        let mut config = SiteConfig::default();
        config.carousel.gap_px = f32::NAN;
        assert!(matches!(
            validate(&config),
            Err(ConfigGuardRailError::NonPositive { field: "gap_px", .. })
        ));
    }

    #[test]
    fn duplicate_carousels_and_pages() {
        let mut config = SiteConfig::default();
        config.pages[0].carousels.push("superon".into());
        assert!(matches!(
            validate(&config),
            Err(ConfigGuardRailError::DuplicateCarousel { .. })
        ));

        let mut config = SiteConfig::default();
        config.pages.push(PageLayout {
            name: "products".into(),
            ..PageLayout::default()
        });
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::DuplicatePage("products".into()))
        );
    }

    #[test]
    fn fast_auto_play_and_empty_pages_warn() {
        let mut config = SiteConfig::default();
        config.carousel.auto_play_interval_ms = 400;
        config.pages.push(PageLayout {
            name: "about".into(),
            ..PageLayout::default()
        });
        let warnings = validate(&config).unwrap();
        assert_eq!(
            warnings.0,
            vec![
                ConfigWarning::AutoPlayFasterThanSettle {
                    interval_ms: 400,
                    settle_ms: 500
                },
                ConfigWarning::EmptyPage("about".into()),
            ]
        );
    }
}
