//! The configuration shipped inside the wasm build parses and matches the
//! library defaults.
//!
//! Run with: cargo test -p folio_web --test embedded_config

use folio_fx::FxConfig;
use folio_ui::ChromeConfig;
use folio_web::attrs;

#[test]
fn embedded_fx_config_is_the_default() {
    let config = FxConfig::from_toml_str(include_str!("../folio.toml")).unwrap();
    assert_eq!(config, FxConfig::default());
}

#[test]
fn embedded_chrome_config_is_the_default() {
    let config = ChromeConfig::from_toml_str(include_str!("../chrome.toml")).unwrap();
    assert_eq!(config, ChromeConfig::default());
}

#[test]
fn reveal_attributes_fall_back_to_config() {
    let config = FxConfig::from_toml_str("[reveal]\nthreshold = 0.25").unwrap();
    let threshold = attrs::threshold(Some("not-a-number"), config.reveal_threshold());
    assert!((threshold.value() - 0.25).abs() < f32::EPSILON);
}

#[test]
fn stagger_names_use_the_embedded_steps() {
    let config = ChromeConfig::from_toml_str(include_str!("../chrome.toml")).unwrap();
    assert_eq!(attrs::stagger_step(Some("skill"), &config), Some(50));
    assert_eq!(attrs::stagger_step(Some("card"), &config), Some(150));
}
