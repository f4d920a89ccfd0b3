//! Configuration for the animation core, loaded once at startup.
//!
//! Every section and field is optional in the TOML document; missing values
//! fall back to the defaults below.
//!
//! ```toml
//! [particles]
//! area_per_particle = 9000.0
//! max_speed = 0.25
//! max_radius = 1.5
//! color = "#818cf880"
//!
//! [reveal]
//! threshold = 0.1
//!
//! [frame]
//! fallback_interval_ms = 16
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FxError, FxResult};
use crate::reveal::Threshold;
use crate::style::Color;

/// Particle field tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    /// Surface area (px²) per particle. Count is `floor(w * h / area)`.
    pub area_per_particle: f32,
    /// Upper bound of each velocity component's magnitude (px / frame).
    pub max_speed: f32,
    /// Radii are drawn from `[0, max_radius)`.
    pub max_radius: f32,
    /// Fill colour for every particle.
    pub color: Color,
}

impl ParticleConfig {
    /// Default surface area per particle.
    pub const DEFAULT_AREA_PER_PARTICLE: f32 = 9000.0;
    /// Default velocity bound.
    pub const DEFAULT_MAX_SPEED: f32 = 0.25;
    /// Default radius bound.
    pub const DEFAULT_MAX_RADIUS: f32 = 1.5;
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            area_per_particle: Self::DEFAULT_AREA_PER_PARTICLE,
            max_speed: Self::DEFAULT_MAX_SPEED,
            max_radius: Self::DEFAULT_MAX_RADIUS,
            color: Color::ACCENT,
        }
    }
}

/// Scroll reveal tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Default visible fraction that triggers a reveal.
    pub threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT.value(),
        }
    }
}

/// Frame driver tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Tick interval when no display refresh callback exists.
    pub fallback_interval_ms: u64,
}

impl FrameConfig {
    /// The fallback interval as a [`Duration`].
    #[must_use]
    pub fn fallback_interval(&self) -> Duration {
        Duration::from_millis(self.fallback_interval_ms)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fallback_interval_ms: 16,
        }
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FxConfig {
    /// `[particles]` section.
    pub particles: ParticleConfig,
    /// `[reveal]` section.
    pub reveal: RevealConfig,
    /// `[frame]` section.
    pub frame: FrameConfig,
}

impl FxConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidConfig`] on a parse or validation failure.
    pub fn from_toml_str(text: &str) -> FxResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| FxError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`FxError::ConfigIo`] if the file cannot be read, otherwise as
    /// [`FxConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FxError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded fx configuration");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> FxResult<()> {
        let p = &self.particles;
        if !(p.area_per_particle.is_finite() && p.area_per_particle > 0.0) {
            return Err(FxError::InvalidConfig(format!(
                "particles.area_per_particle must be > 0, got {}",
                p.area_per_particle
            )));
        }
        if !(p.max_speed.is_finite() && p.max_speed >= 0.0) {
            return Err(FxError::InvalidConfig(format!(
                "particles.max_speed must be >= 0, got {}",
                p.max_speed
            )));
        }
        if !(p.max_radius.is_finite() && p.max_radius > 0.0) {
            return Err(FxError::InvalidConfig(format!(
                "particles.max_radius must be > 0, got {}",
                p.max_radius
            )));
        }
        Threshold::new(self.reveal.threshold)
            .map_err(|e| FxError::InvalidConfig(format!("reveal.threshold: {e}")))?;
        if self.frame.fallback_interval_ms == 0 {
            return Err(FxError::InvalidConfig(
                "frame.fallback_interval_ms must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// The configured default reveal threshold.
    #[must_use]
    pub fn reveal_threshold(&self) -> Threshold {
        Threshold::new(self.reveal.threshold).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = FxConfig::from_toml_str("").unwrap();
        assert_eq!(config, FxConfig::default());
        assert!((config.particles.area_per_particle - 9000.0).abs() < f32::EPSILON);
        assert_eq!(config.frame.fallback_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_partial_override() {
        let config = FxConfig::from_toml_str(
            r##"
            [particles]
            max_speed = 0.5
            color = "#ff000080"

            [reveal]
            threshold = 0.3
            "##,
        )
        .unwrap();

        assert!((config.particles.max_speed - 0.5).abs() < f32::EPSILON);
        assert!((config.particles.max_radius - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.particles.color, Color::hex(0xFF00_0080));
        assert!((config.reveal_threshold().value() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = FxConfig::from_toml_str("[reveal]\nthreshold = 1.5").unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));

        let err = FxConfig::from_toml_str("[particles]\narea_per_particle = 0.0").unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));

        let err = FxConfig::from_toml_str("[frame]\nfallback_interval_ms = 0").unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_colour_and_unknown_keys() {
        assert!(FxConfig::from_toml_str("[particles]\ncolor = \"blue\"").is_err());
        assert!(FxConfig::from_toml_str("[particles]\ndensity = 3").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = FxConfig::load("/definitely/not/here/folio.toml").unwrap_err();
        assert!(matches!(err, FxError::ConfigIo { .. }));
    }
}
