//! TEN VAD parameters

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{VADBackend, VADBackendConfig, check_segment_parameters};
use crate::core::error::ValidationResult;
use crate::options::{OptionRegistrar, RegistrarError, option_key};

/// Configuration for the TEN VAD backend
///
/// Same parameter set as Silero; only the window size default differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenVADConfig {
    /// Path to the TEN VAD model
    pub model: String,
    /// Speech probability threshold (0.01 to 1.0, exclusive)
    pub threshold: f32,
    /// Seconds of trailing silence that end a segment
    pub min_silence_duration: f32,
    /// Minimum segment length in seconds
    pub min_speech_duration: f32,
    /// Maximum segment length in seconds
    pub max_speech_duration: f32,
    /// Samples per model step
    pub window_size: i32,
}

impl Default for TenVADConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            threshold: 0.5,
            min_silence_duration: 0.5,
            min_speech_duration: 0.25,
            max_speech_duration: 20.0,
            window_size: 256,
        }
    }
}

impl TenVADConfig {
    /// Default parameters with the given model path
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

impl VADBackendConfig for TenVADConfig {
    fn kind(&self) -> VADBackend {
        VADBackend::TenVAD
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
            "Path to the ten-vad model",
        )?;
        po.register(
            &option_key(prefix, "threshold"),
            &mut self.threshold,
            "Speech threshold. A higher value means fewer false positives",
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

impl fmt::Display for TenVADConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TenVADConfig(model={:?}, threshold={}, min_silence_duration={}, min_speech_duration={}, max_speech_duration={}, window_size={})",
            self.model,
            self.threshold,
            self.min_silence_duration,
            self.min_speech_duration,
            self.max_speech_duration,
            self.window_size
        )
    }
}
