//! Silero VAD parameters

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{VADBackend, VADBackendConfig, check_segment_parameters};
use crate::core::error::ValidationResult;
use crate::options::{OptionRegistrar, RegistrarError, option_key};

/// Configuration for the Silero VAD backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SileroVADConfig {
    /// Path to the Silero VAD ONNX model
    pub model: String,

    /// Speech probability threshold (0.01 to 1.0, exclusive)
    ///
    /// Chunks whose probability is above this value count as speech.
    /// Higher values mean fewer false positives.
    pub threshold: f32,

    /// Silence (seconds) required at the end of a segment before splitting
    pub min_silence_duration: f32,

    /// Segments shorter than this many seconds are discarded
    pub min_speech_duration: f32,

    /// Segments longer than this many seconds are split
    pub max_speech_duration: f32,

    /// Number of samples fed to the model per step
    pub window_size: i32,
}

impl Default for SileroVADConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            threshold: 0.5,
            min_silence_duration: 0.5,
            min_speech_duration: 0.25,
            max_speech_duration: 20.0,
            window_size: 512,
        }
    }
}

impl SileroVADConfig {
    /// Default parameters with the given model path
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

impl VADBackendConfig for SileroVADConfig {
    fn kind(&self) -> VADBackend {
        VADBackend::Silero
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn register<'a>(
        &'a mut self,
        po: &mut OptionRegistrar<'a>,
        prefix: &str,
    ) -> Result<(), RegistrarError> {
        po.register(
            &option_key(prefix, "model"),
            &mut self.model,
            "Path to the silero VAD model",
        )?;
        po.register(
            &option_key(prefix, "threshold"),
            &mut self.threshold,
            "Speech threshold. Chunks with a speech probability above this value are speech",
        )?;
        po.register(
            &option_key(prefix, "min-silence-duration"),
            &mut self.min_silence_duration,
            "Seconds of silence that end a speech segment",
        )?;
        po.register(
            &option_key(prefix, "min-speech-duration"),
            &mut self.min_speech_duration,
            "Speech segments shorter than this many seconds are dropped",
        )?;
        po.register(
            &option_key(prefix, "max-speech-duration"),
            &mut self.max_speech_duration,
            "Speech segments longer than this many seconds are split",
        )?;
        po.register(
            &option_key(prefix, "window-size"),
            &mut self.window_size,
            "Number of samples in each window passed to the model",
        )?;
        Ok(())
    }

    fn check_parameters(&self) -> ValidationResult {
        check_segment_parameters(
            self.threshold,
            self.min_silence_duration,
            self.min_speech_duration,
            self.max_speech_duration,
            self.window_size,
        )
    }
}

impl fmt::Display for SileroVADConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SileroVADConfig(model={:?}, threshold={}, min_silence_duration={}, min_speech_duration={}, max_speech_duration={}, window_size={})",
            self.model,
            self.threshold,
            self.min_silence_duration,
            self.min_speech_duration,
            self.max_speech_duration,
            self.window_size
        )
    }
}
