//! Integration tests for the speech-model-config binary

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_speech-model-config");
    Command::new(bin)
        .args(args)
        .env_remove("VAD_SILERO_VAD_MODEL")
        .env_remove("VAD_TEN_VAD_MODEL")
        .env_remove("VAD_NUM_THREADS")
        .env_remove("VAD_BACKEND")
        .env_remove("TTS_KOKORO_MODEL")
        .output()
        .expect("run speech-model-config")
}

#[test]
fn main_accepts_valid_vad_config() {
    let output = run(&["vad", "--silero-vad.model=silero_vad.onnx", "--num-threads=2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("VADModelConfig(silero_vad=SileroVADConfig(model=\"silero_vad.onnx\""));
    assert!(stdout.contains("num_threads=2"));
}

#[test]
fn main_rejects_ambiguous_vad_config() {
    let output = run(&[
        "vad",
        "--silero-vad.model=silero_vad.onnx",
        "--ten-vad.model=ten-vad.onnx",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ambiguous backend selection"));
}

#[test]
fn main_rejects_default_vad_config() {
    let output = run(&["vad"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn main_prints_json() {
    let output = run(&["--format", "json", "vad", "--ten-vad.model=ten-vad.onnx"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ten_vad"]["model"], "ten-vad.onnx");
    assert_eq!(value["ten_vad"]["window_size"], 256);
    assert_eq!(value["sample_rate"], 16000);
}

#[test]
fn main_layers_command_line_over_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("models.yaml");
    fs::write(
        &config_path,
        "tts:\n  kokoro:\n    model: model.onnx\n    voices: voices.bin\n    tokens: tokens.txt\n    data_dir: espeak-ng-data\n  num_threads: 4\n",
    )
    .unwrap();
    let config_arg = config_path.to_string_lossy().to_string();

    let output = run(&["-c", &config_arg, "tts", "--kokoro.length-scale", "1.5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("length_scale=1.5"));
    assert!(stdout.contains("num_threads=4"));
    assert!(stdout.contains("model=\"model.onnx\""));
}

#[test]
fn main_reports_missing_config_file() {
    let output = run(&["-c", "/nonexistent/models.yaml", "vad"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn main_requires_subcommand() {
    let output = run(&[]);
    assert!(!output.status.success());
}
