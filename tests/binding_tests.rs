//! Integration tests for the JSON binding surface

use serde_json::{Map, Value, json};

use speech_model_config::binding::{BindingError, ConfigRecord, FieldKind};
use speech_model_config::core::tts::{KokoroTTSConfig, TTSModelConfig};
use speech_model_config::core::vad::{SileroVADConfig, TenVADConfig, VADModelConfig};

fn kwargs(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_type_names_and_fields() {
    assert_eq!(SileroVADConfig::TYPE_NAME, "SileroVADConfig");
    assert_eq!(TenVADConfig::TYPE_NAME, "TenVADConfig");
    assert_eq!(VADModelConfig::TYPE_NAME, "VADModelConfig");
    assert_eq!(TTSModelConfig::TYPE_NAME, "TTSModelConfig");

    let names: Vec<&str> = VADModelConfig::fields().iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec![
            "silero_vad",
            "ten_vad",
            "sample_rate",
            "num_threads",
            "provider",
            "debug",
            "backend"
        ]
    );
    assert_eq!(
        VADModelConfig::field("silero_vad").map(|f| f.kind),
        Some(FieldKind::Record("SileroVADConfig"))
    );
    assert_eq!(
        SileroVADConfig::field("window_size").map(|f| f.kind),
        Some(FieldKind::Int)
    );
}

#[test]
fn test_from_kwargs_uses_defaults() {
    let config = VADModelConfig::from_kwargs(&kwargs(json!({
        "ten_vad": {"model": "ten-vad.onnx"},
        "num_threads": 2,
    })))
    .unwrap();

    assert_eq!(config.ten_vad.model, "ten-vad.onnx");
    assert_eq!(config.ten_vad.window_size, 256);
    assert_eq!(config.num_threads, 2);
    assert_eq!(config.sample_rate, 16000);
    assert!(ConfigRecord::validate(&config));
}

#[test]
fn test_from_kwargs_preserves_literals() {
    let config = SileroVADConfig::from_kwargs(&kwargs(json!({
        "model": "m.onnx",
        "threshold": 0.125,
        "min_silence_duration": 2,
        "min_speech_duration": 0.5,
        "max_speech_duration": 7.5,
        "window_size": 1536,
    })))
    .unwrap();

    assert_eq!(config.get("model").unwrap(), json!("m.onnx"));
    assert_eq!(config.get("threshold").unwrap(), json!(0.125));
    assert_eq!(config.min_silence_duration, 2.0);
    assert_eq!(config.get("max_speech_duration").unwrap(), json!(7.5));
    assert_eq!(config.get("window_size").unwrap(), json!(1536));
}

#[test]
fn test_required_arguments() {
    let err = KokoroTTSConfig::from_kwargs(&kwargs(json!({
        "model": "model.onnx",
        "voices": "voices.bin",
        "data_dir": "espeak-ng-data",
    })))
    .unwrap_err();
    assert!(matches!(
        err,
        BindingError::MissingArgument { type_name: "KokoroTTSConfig", field: "tokens" }
    ));

    let config = KokoroTTSConfig::from_kwargs(&kwargs(json!({
        "model": "model.onnx",
        "voices": "voices.bin",
        "tokens": "tokens.txt",
        "data_dir": "espeak-ng-data",
    })))
    .unwrap();
    assert_eq!(config.length_scale, 1.0);
    assert!(ConfigRecord::validate(&config));
}

#[test]
fn test_unknown_keyword() {
    let err = VADModelConfig::from_kwargs(&kwargs(json!({"sample_rte": 8000}))).unwrap_err();
    assert_eq!(err.to_string(), "VADModelConfig has no field 'sample_rte'");
}

#[test]
fn test_type_mismatch() {
    let mut config = VADModelConfig::default();
    assert!(matches!(
        config.set("num_threads", &json!("two")),
        Err(BindingError::TypeMismatch { .. })
    ));
    assert!(config.set("debug", &json!(1)).is_err());
    assert!(config.set("silero_vad", &json!("silero.onnx")).is_err());

    config.set("sample_rate", &json!(8000)).unwrap();
    assert_eq!(config.sample_rate, 8000);
    assert!(config.set("sample_rate", &json!(8000.5)).is_err());

    // integers widen to float fields
    let mut silero = SileroVADConfig::default();
    silero.set("threshold", &json!(0)).unwrap();
    assert_eq!(silero.threshold, 0.0);
}

#[test]
fn test_nested_errors_name_inner_type() {
    let err = VADModelConfig::from_kwargs(&kwargs(json!({
        "silero_vad": {"window": 512},
    })))
    .unwrap_err();
    assert!(matches!(
        err,
        BindingError::UnknownField { type_name: "SileroVADConfig", .. }
    ));
}

#[test]
fn test_validate_forwards_to_native() {
    let mut config = VADModelConfig::with_silero("s.onnx");
    assert_eq!(ConfigRecord::validate(&config), config.validate());

    config.set("ten_vad", &json!({"model": "t.onnx"})).unwrap();
    assert!(!ConfigRecord::validate(&config));
    assert_eq!(ConfigRecord::validate(&config), config.validate());

    let silero = SileroVADConfig::default();
    assert!(!ConfigRecord::validate(&silero));
}

#[test]
fn test_display_matches_native() {
    let config = TTSModelConfig::default();
    assert_eq!(config.display(), config.to_string());
}

#[test]
fn test_to_json_nests_records() {
    let config = VADModelConfig::with_ten_vad("t.onnx");
    let value = config.to_json();

    assert_eq!(value["ten_vad"]["model"], json!("t.onnx"));
    assert_eq!(value["silero_vad"]["window_size"], json!(512));
    assert_eq!(value["provider"], json!("cpu"));

    let rebuilt = VADModelConfig::from_json_str(&value.to_string()).unwrap();
    assert_eq!(rebuilt, config);
}

#[test]
fn test_from_json_str_errors() {
    assert!(matches!(
        VADModelConfig::from_json_str("{not json"),
        Err(BindingError::InvalidJson(_))
    ));
    assert!(matches!(
        VADModelConfig::from_json_str("[1, 2]"),
        Err(BindingError::NotAnObject("list"))
    ));
}

#[test]
fn test_out_of_range_float_rejected() {
    let mut config = KokoroTTSConfig::default();
    let err = config.set("length_scale", &json!(1e300)).unwrap_err();
    assert!(matches!(err, BindingError::TypeMismatch { .. }));
    assert_eq!(config.length_scale, 1.0);
    assert_eq!(config.get("length_scale").unwrap(), json!(1.0));
}
