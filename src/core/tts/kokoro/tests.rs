//! Tests for the kokoro TTS configuration.
//!
//! These tests cover:
//! - Required paths and defaults
//! - Lexicon list handling
//! - Option registration
//! - Display output

use super::*;
use crate::core::error::ValidationError;
use crate::options::OptionRegistrar;

// =============================================================================
// Test Helpers
// =============================================================================

fn english_model() -> KokoroTTSConfig {
    KokoroTTSConfig::new(
        "kokoro-en-v0_19/model.onnx",
        "kokoro-en-v0_19/voices.bin",
        "kokoro-en-v0_19/tokens.txt",
        "",
        "kokoro-en-v0_19/espeak-ng-data",
        "",
        1.0,
        "",
    )
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_defaults() {
    let config = KokoroTTSConfig::default();
    assert_eq!(config.length_scale, 1.0);
    assert!(config.lexicon.is_empty());
    assert!(config.lang.is_empty());
    assert!(!config.validate());
}

#[test]
fn test_full_config_is_valid() {
    assert!(english_model().validate());
}

#[test]
fn test_required_paths() {
    for field in ["model", "voices", "tokens", "data_dir"] {
        let mut config = english_model();
        match field {
            "model" => config.model.clear(),
            "voices" => config.voices.clear(),
            "tokens" => config.tokens.clear(),
            _ => config.data_dir.clear(),
        }
        assert_eq!(
            config.check(),
            Err(ValidationError::invalid(field, "must not be empty")),
            "{field} should be required"
        );
    }
}

#[test]
fn test_dict_dir_and_lang_are_optional() {
    let mut config = english_model();
    config.dict_dir = "dict".to_string();
    config.lang = "en-us".to_string();
    assert!(config.validate());
}

#[test]
fn test_length_scale_must_be_positive() {
    let mut config = english_model();
    config.length_scale = 0.0;
    assert!(!config.validate());

    config.length_scale = -1.0;
    assert!(!config.validate());

    config.length_scale = 0.8;
    assert!(config.validate());
}

// =============================================================================
// Lexicon
// =============================================================================

#[test]
fn test_lexicon_files() {
    let mut config = english_model();
    assert!(config.lexicon_files().is_empty());

    config.lexicon = "lexicon-us-en.txt,lexicon-zh.txt".to_string();
    assert_eq!(
        config.lexicon_files(),
        vec!["lexicon-us-en.txt", "lexicon-zh.txt"]
    );
    assert!(config.validate());
}

#[test]
fn test_lexicon_rejects_empty_entries() {
    let mut config = english_model();
    for lexicon in ["a.txt,", ",a.txt", "a.txt,,b.txt", " , "] {
        config.lexicon = lexicon.to_string();
        assert!(!config.validate(), "lexicon {lexicon:?} should be invalid");
    }
}

// =============================================================================
// Registration and display
// =============================================================================

#[test]
fn test_register_options() {
    let mut config = KokoroTTSConfig::default();
    let mut po = OptionRegistrar::new("test");
    config.register(&mut po, "kokoro").unwrap();

    assert_eq!(
        po.names(),
        vec![
            "kokoro.model",
            "kokoro.voices",
            "kokoro.tokens",
            "kokoro.lexicon",
            "kokoro.data-dir",
            "kokoro.dict-dir",
            "kokoro.length-scale",
            "kokoro.lang",
        ]
    );
}

#[test]
fn test_register_applies_command_line() {
    let mut config = english_model();
    let mut po = OptionRegistrar::new("test");
    config.register(&mut po, "kokoro").unwrap();

    let written = po
        .parse_from(["test", "--kokoro.length-scale", "1.25", "--kokoro.lang=zh"])
        .unwrap();
    assert_eq!(written, 2);
    assert_eq!(config.length_scale, 1.25);
    assert_eq!(config.lang, "zh");
    assert_eq!(config.model, "kokoro-en-v0_19/model.onnx");
}

#[test]
fn test_display() {
    let config = english_model();
    assert_eq!(
        config.to_string(),
        "KokoroTTSConfig(model=\"kokoro-en-v0_19/model.onnx\", voices=\"kokoro-en-v0_19/voices.bin\", tokens=\"kokoro-en-v0_19/tokens.txt\", lexicon=\"\", data_dir=\"kokoro-en-v0_19/espeak-ng-data\", dict_dir=\"\", length_scale=1, lang=\"\")"
    );
}
