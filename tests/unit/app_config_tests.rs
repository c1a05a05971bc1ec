/*!
 * Tests for application configuration
 */

use std::str::FromStr;
use granthika::app_config::{Config, RenderMode};

/// Test the default configuration values
#[test]
fn test_default_config_should_have_expected_values() {
    let config = Config::default();
    assert_eq!(config.input_dir, "vtt_all");
    assert_eq!(config.corpus_title, "Narayaneeyam");
    assert_eq!(config.mode, RenderMode::Text);
    assert!(config.output_file.is_none());
    assert!(config.validate().is_ok());
}

/// Test output file derivation per mode
#[test]
fn test_resolved_output_file_should_follow_mode() {
    let mut config = Config::default();
    assert_eq!(config.resolved_output_file(), "narayaneeyam_text.html");

    config.mode = RenderMode::Transliteration;
    assert_eq!(
        config.resolved_output_file(),
        "narayaneeyam_transliteration.html"
    );

    config.output_file = Some("custom.html".to_string());
    assert_eq!(config.resolved_output_file(), "custom.html");
}

/// Test page title derivation per mode
#[test]
fn test_page_title_should_follow_mode() {
    let mut config = Config::default();
    assert_eq!(config.page_title(), "Narayaneeyam Text Compilation");

    config.mode = RenderMode::Transliteration;
    assert_eq!(config.page_title(), "Narayaneeyam Transliteration Compilation");
}

/// Test validation failures
#[test]
fn test_validate_with_empty_fields_should_fail() {
    let mut config = Config::default();
    config.input_dir = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.corpus_title = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.output_file = Some(String::new());
    assert!(config.validate().is_err());
}

/// Test JSON round trip
#[test]
fn test_config_serde_round_trip_should_preserve_fields() {
    let mut config = Config::default();
    config.mode = RenderMode::Transliteration;
    config.output_file = Some("out.html".to_string());

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"transliteration\""));

    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.mode, RenderMode::Transliteration);
    assert_eq!(parsed.output_file.as_deref(), Some("out.html"));
}

/// Test that missing fields fall back to defaults
#[test]
fn test_config_from_partial_json_should_use_defaults() {
    let parsed: Config = serde_json::from_str("{\"input_dir\": \"captions\"}").unwrap();
    assert_eq!(parsed.input_dir, "captions");
    assert_eq!(parsed.mode, RenderMode::Text);
    assert_eq!(parsed.corpus_title, "Narayaneeyam");
}

/// Test RenderMode parsing and display
#[test]
fn test_render_mode_from_str_should_accept_known_values() {
    assert_eq!(RenderMode::from_str("text").unwrap(), RenderMode::Text);
    assert_eq!(
        RenderMode::from_str("Transliteration").unwrap(),
        RenderMode::Transliteration
    );
    assert_eq!(
        RenderMode::from_str("translit").unwrap(),
        RenderMode::Transliteration
    );
    assert!(RenderMode::from_str("verse").is_err());

    assert_eq!(RenderMode::Text.to_string(), "text");
    assert_eq!(RenderMode::Transliteration.display_name(), "Transliteration");
}
