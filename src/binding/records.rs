//! Binding surface of every configuration type

use crate::config_record;
use crate::core::tts::{KokoroTTSConfig, TTSModelConfig};
use crate::core::vad::{SileroVADConfig, TenVADConfig, VADBackendConfig, VADModelConfig};

config_record! {
    SileroVADConfig => "SileroVADConfig" {
        validate: VADBackendConfig::validate;
        model: String,
        threshold: f32,
        min_silence_duration: f32,
        min_speech_duration: f32,
        max_speech_duration: f32,
        window_size: i32,
    }
}

config_record! {
    TenVADConfig => "TenVADConfig" {
        validate: VADBackendConfig::validate;
        model: String,
        threshold: f32,
        min_silence_duration: f32,
        min_speech_duration: f32,
        max_speech_duration: f32,
        window_size: i32,
    }
}

config_record! {
    VADModelConfig => "VADModelConfig" {
        validate: VADModelConfig::validate;
        silero_vad: SileroVADConfig,
        ten_vad: TenVADConfig,
        sample_rate: i32,
        num_threads: i32,
        provider: String,
        debug: bool,
        backend: String,
    }
}

config_record! {
    KokoroTTSConfig => "KokoroTTSConfig" {
        validate: KokoroTTSConfig::validate;
        model: String [required],
        voices: String [required],
        tokens: String [required],
        lexicon: String,
        data_dir: String [required],
        dict_dir: String,
        length_scale: f32,
        lang: String,
    }
}

config_record! {
    TTSModelConfig => "TTSModelConfig" {
        validate: TTSModelConfig::validate;
        kokoro: KokoroTTSConfig,
        num_threads: i32,
        debug: bool,
        provider: String,
    }
}
