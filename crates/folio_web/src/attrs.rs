//! `data-*` attribute parsing.
//!
//! The page describes what to mount through attributes:
//!
//! | Attribute               | Meaning                                      |
//! |-------------------------|----------------------------------------------|
//! | `data-particle-field`   | canvas to run the particle field on          |
//! | `data-reveal`           | element to reveal on scroll                  |
//! | `data-reveal-threshold` | visible fraction in `(0, 1]`                 |
//! | `data-reveal-style`     | `slide-up` (default) or `scale`              |
//! | `data-reveal-stagger`   | per-child transition delay step, see below   |
//!
//! `data-reveal-stagger` takes `skill` or `card` for the configured step of
//! that grid, a number of milliseconds, or no value at all for the card step.
//!
//! Bad values never abort a mount; they fall back to the default and log.

use folio_fx::Threshold;
use folio_ui::{ChromeConfig, RevealStyle};

/// Particle field canvas marker.
pub const PARTICLE_FIELD: &str = "data-particle-field";
/// Reveal marker.
pub const REVEAL: &str = "data-reveal";
/// Reveal threshold override.
pub const REVEAL_THRESHOLD: &str = "data-reveal-threshold";
/// Reveal animation style.
pub const REVEAL_STYLE: &str = "data-reveal-style";
/// Stagger step for the element's children.
pub const REVEAL_STAGGER: &str = "data-reveal-stagger";

/// Threshold from `data-reveal-threshold`, or `default`.
#[must_use]
pub fn threshold(value: Option<&str>, default: Threshold) -> Threshold {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return default;
    };
    match raw.parse::<f32>().map(Threshold::new) {
        Ok(Ok(threshold)) => threshold,
        _ => {
            tracing::warn!(value = raw, "ignoring invalid {REVEAL_THRESHOLD}");
            default
        }
    }
}

/// Style from `data-reveal-style`, defaulting to slide-up.
#[must_use]
pub fn style(value: Option<&str>) -> RevealStyle {
    let Some(raw) = value else {
        return RevealStyle::default();
    };
    RevealStyle::from_name(raw).unwrap_or_else(|| {
        tracing::warn!(value = raw, "unknown {REVEAL_STYLE}, using slide-up");
        RevealStyle::default()
    })
}

/// Stagger step from `data-reveal-stagger`. Missing or invalid means none.
#[must_use]
pub fn stagger_step(value: Option<&str>, config: &ChromeConfig) -> Option<u32> {
    let raw = value?.trim();
    match raw {
        "" | "card" => Some(config.card_stagger_ms),
        "skill" => Some(config.skill_stagger_ms),
        _ => match raw.parse() {
            Ok(step) => Some(step),
            Err(_) => {
                tracing::warn!(value = raw, "ignoring invalid {REVEAL_STAGGER}");
                None
            }
        },
    }
}

/// Individual class tokens of a space-separated class string.
pub fn class_tokens(classes: &str) -> impl Iterator<Item = &str> {
    classes.split_ascii_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_fallbacks() {
        let default = Threshold::DEFAULT;
        assert_eq!(threshold(None, default), default);
        assert_eq!(threshold(Some("  "), default), default);
        assert_eq!(threshold(Some("abc"), default), default);
        assert_eq!(threshold(Some("0"), default), default);
        assert_eq!(threshold(Some("1.5"), default), default);
        assert!((threshold(Some(" 0.3 "), default).value() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_style_fallbacks() {
        assert_eq!(style(None), RevealStyle::SlideUp);
        assert_eq!(style(Some("scale")), RevealStyle::Scale);
        assert_eq!(style(Some("wobble")), RevealStyle::SlideUp);

    }

    #[test]
    fn test_stagger_resolves_against_config() {
        let config = ChromeConfig {
            skill_stagger_ms: 40,
            card_stagger_ms: 120,
            ..ChromeConfig::default()
        };

        assert_eq!(stagger_step(None, &config), None);
        assert_eq!(stagger_step(Some("skill"), &config), Some(40));
        assert_eq!(stagger_step(Some(" card "), &config), Some(120));
        assert_eq!(stagger_step(Some(""), &config), Some(120));
        assert_eq!(stagger_step(Some("75"), &config), Some(75));
        assert_eq!(stagger_step(Some("-1"), &config), None);
        assert_eq!(stagger_step(Some("fast"), &config), None);
    }

    #[test]
    fn test_class_tokens() {
        let tokens: Vec<_> = class_tokens(" opacity-0  translate-y-10 ").collect();
        assert_eq!(tokens, ["opacity-0", "translate-y-10"]);
    }
}
