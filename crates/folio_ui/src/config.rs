//! Chrome tuning, loaded from its own TOML document.

use std::path::Path;

use folio_fx::{FxError, FxResult};
use serde::Deserialize;

/// Offsets, timings and the hero title list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChromeConfig {
    /// Scroll offset (px) past which the header switches to its solid style.
    pub header_offset: f64,
    /// Scroll offset (px) past which the scroll-to-top button shows.
    pub scroll_top_offset: f64,
    /// Hero title period (ms).
    pub rotation_ms: u64,
    /// Hero titles, shown in order.
    pub titles: Vec<String>,
    /// Stagger step for skill chips (ms).
    pub skill_stagger_ms: u32,
    /// Stagger step for project and service cards (ms).
    pub card_stagger_ms: u32,
}

impl ChromeConfig {
    /// Default header offset.
    pub const DEFAULT_HEADER_OFFSET: f64 = 10.0;
    /// Default scroll-to-top offset.
    pub const DEFAULT_SCROLL_TOP_OFFSET: f64 = 300.0;
    /// Default hero title period.
    pub const DEFAULT_ROTATION_MS: u64 = 2500;
    /// Default hero titles.
    pub const DEFAULT_TITLES: [&'static str; 6] = [
        "Frontend Dev",
        "Backend Dev",
        "Full-Stack Dev",
        "Machine Learning",
        "AI Enthusiast",
        "Tech Enthusiast",
    ];

    /// Parses a TOML document holding only chrome keys.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidConfig`] on syntax errors, unknown keys, or values
    /// that fail [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> FxResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| FxError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// [`FxError::ConfigIo`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FxError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), titles = config.titles.len(), "chrome config loaded");
        Ok(config)
    }

    /// Checks offsets are finite and non-negative and the period is non-zero.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidConfig`] naming the offending key.
    pub fn validate(&self) -> FxResult<()> {
        for (key, value) in [
            ("header_offset", self.header_offset),
            ("scroll_top_offset", self.scroll_top_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FxError::InvalidConfig(format!(
                    "{key} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.rotation_ms == 0 {
            return Err(FxError::InvalidConfig("rotation_ms must be > 0".to_owned()));
        }
        Ok(())
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            header_offset: Self::DEFAULT_HEADER_OFFSET,
            scroll_top_offset: Self::DEFAULT_SCROLL_TOP_OFFSET,
            rotation_ms: Self::DEFAULT_ROTATION_MS,
            titles: Self::DEFAULT_TITLES.iter().map(|&t| t.to_owned()).collect(),
            skill_stagger_ms: 50,
            card_stagger_ms: 150,
        }
    }
}
