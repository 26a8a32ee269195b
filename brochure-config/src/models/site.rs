//! Top-level site configuration and its load order

use anyhow::{Context, anyhow};
use brochure_core::CarouselConfig;
use brochure_core::constants::{form, timing};
use brochure_core::page::ContactForm;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use super::carousel::{CarouselSettings, PageLayout, default_pages};

/// Variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "BROCHURE_CONFIG_PATH";
/// Variable holding an inline JSON document.
pub const CONFIG_JSON_VAR: &str = "BROCHURE_CONFIG_JSON";

/// Source that produced the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Nothing found; compiled defaults.
    #[default]
    Default,
    /// File named by `BROCHURE_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `BROCHURE_CONFIG_JSON`.
    EnvInline,
    /// File found on disk or passed explicitly.
    File(PathBuf),
}

/// Contact form behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Banner text after a successful submission.
    pub success_message: String,
    /// Simulated send latency.
    pub submit_latency_ms: u64,
    /// How long the result banner stays up.
    pub feedback_visible_ms: u64,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            success_message: brochure_core::page::form::DEFAULT_SUCCESS_MESSAGE
                .to_owned(),
            submit_latency_ms: form::SUBMIT_LATENCY_MS,
            feedback_visible_ms: form::FEEDBACK_VISIBLE_MS,
        }
    }
}

/// Everything a page needs at load. Missing keys take the compiled
/// defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Quiet window before a burst of resize events is acted on.
    pub resize_debounce_ms: u64,
    /// Carousel tunables shared by every page.
    pub carousel: CarouselSettings,
    /// Contact form behavior.
    pub contact: ContactSettings,
    /// Pages and the carousels each one registers.
    pub pages: Vec<PageLayout>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: timing::RESIZE_DEBOUNCE_MS,
            carousel: CarouselSettings::default(),
            contact: ContactSettings::default(),
            pages: default_pages(),
        }
    }
}

impl SiteConfig {
    /// Page layout by name.
    pub fn page(&self, name: &str) -> Option<&PageLayout> {
        self.pages.iter().find(|page| page.name == name)
    }

    /// Runtime carousel configuration for every carousel on `page`.
    pub fn carousel_config(&self, page: &PageLayout) -> CarouselConfig {
        self.carousel.to_carousel_config(page.mobile_visible_count())
    }

    /// Contact form state machine with the configured timings.
    pub fn contact_form(&self) -> ContactForm {
        ContactForm::new(self.contact.success_message.clone()).with_timings(
            Duration::from_millis(self.contact.submit_latency_ms),
            Duration::from_millis(self.contact.feedback_visible_ms),
        )
    }

    /// Quiet window for resize bursts.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Load from the environment: `BROCHURE_CONFIG_PATH`, then inline
    /// `BROCHURE_CONFIG_JSON`, then a `brochure.toml`/`brochure.json` in the
    /// working directory, then defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same precedence as [`SiteConfig::load_from_env`] with an injected
    /// variable lookup and search directory.
    pub fn load_with<F>(
        lookup: F,
        search_root: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Read one file. The extension picks the parser; anything else tries TOML, then JSON.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read site config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid site config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid site config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse a document of unknown format: TOML first, then JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse site config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    /// Parse an inline JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid site config json: {err}"))
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "brochure.toml",
            "brochure.json",
            "config/brochure.toml",
            "config/brochure.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let parsed = SiteConfig::parse_from_str("", "test").unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn json_falls_back_after_toml() {
        let parsed = SiteConfig::parse_from_str(
            r#"{ "carousel": { "gap_px": 24.0 } }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(parsed.carousel.gap_px, 24.0);
        assert_eq!(parsed.carousel.settle_ms, 500);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = SiteConfig::parse_from_str("[[[", "bad.cfg").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bad.cfg"));
        assert!(message.contains("toml error"));
        assert!(message.contains("json error"));
    }

    #[test]
    fn default_pages_are_listed() {
        let config = SiteConfig::default();
        assert_eq!(config.page("products").map(|p| p.carousels.len()), Some(6));
        assert!(config.page("services").is_some());
        assert!(config.page("about").is_none());
    }
}
