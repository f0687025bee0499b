// Host-side tests for page configuration loading.

mod common;

use common::config::*;
use common::constants::*;

#[test]
fn defaults_match_built_in_page() {
    let config = PageConfig::default();
    assert_eq!(config.threshold, DEFAULT_THRESHOLD);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.ready_delay_ms, 1000);
    assert_eq!(config.effects.len(), 2);
    assert_eq!(config.effects[0].selector, "#text03");
    assert_eq!(config.effects[0].style, "blur-in");
    assert!(!config.effects[0].options.replay);
    assert_eq!(config.effects[1].style, "focus-image");
    assert!(config.effects[1].options.replay);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let config = PageConfig::from_json(
        r#"{ "effects": [ { "selector": ".card", "style": "blur-in", "intensity": 3 } ] }"#,
    )
    .unwrap();
    assert_eq!(config.effects.len(), 1);
    let rule = &config.effects[0];
    assert_eq!(rule.options.intensity, 3.0);
    assert_eq!(rule.options.speed, DEFAULT_SPEED_MS);
    assert!(!rule.options.replay);
    assert_eq!(config.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
}

#[test]
fn unknown_style_is_accepted_at_load_time() {
    // resolved (and skipped) by the effect registry instead
    let json = r#"{ "effects": [ { "selector": "p", "style": "wobble" } ] }"#;
    let config = PageConfig::from_json(json).unwrap();
    assert_eq!(config.effects[0].style, "wobble");
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(matches!(
        PageConfig::from_json(r#"{ "threshold": 0.9 }"#),
        Err(ConfigError::Threshold(_))
    ));
    assert!(matches!(
        PageConfig::from_json(
            r#"{ "effects": [ { "selector": "p", "style": "blur-in", "intensity": 0 } ] }"#
        ),
        Err(ConfigError::Intensity { .. })
    ));
    assert!(matches!(
        PageConfig::from_json(r#"{ "effects": [ { "selector": " ", "style": "blur-in" } ] }"#),
        Err(ConfigError::EmptySelector)
    ));
}

#[test]
fn load_or_default_falls_back() {
    assert_eq!(PageConfig::load_or_default(None), PageConfig::default());
    assert_eq!(PageConfig::load_or_default(Some("   ")), PageConfig::default());
    assert_eq!(PageConfig::load_or_default(Some("{ not json")), PageConfig::default());

    let custom = PageConfig::load_or_default(Some(r#"{ "ready_delay_ms": 10, "effects": [] }"#));
    assert_eq!(custom.ready_delay_ms, 10);
    assert!(custom.effects.is_empty());
}
