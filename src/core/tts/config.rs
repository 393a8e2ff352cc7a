//! TTS model configuration
//!
//! [`TTSModelConfig`] wraps the kokoro voice configuration together with the
//! runtime settings shared by every TTS model.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::kokoro::KokoroTTSConfig;
use crate::core::error::{ValidationError, ValidationResult, require_non_empty, require_positive_i32};
use crate::options::{OptionRegistrar, RegistrarError};

/// Option prefix of the kokoro fields
pub const KOKORO_PREFIX: &str = "kokoro";

/// Configuration for Text-to-Speech model loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TTSModelConfig {
    /// Kokoro model files and voice settings
    pub kokoro: KokoroTTSConfig,

    /// Number of threads for inference
    pub num_threads: i32,

    /// Show debug information when loading models
    pub debug: bool,

    /// Execution provider, e.g. "cpu", "cuda", "coreml"
    pub provider: String,
}

impl Default for TTSModelConfig {
    fn default() -> Self {
        Self {
            kokoro: KokoroTTSConfig::default(),
            num_threads: 1,
            debug: false,
            provider: "cpu".to_string(),
        }
    }
}

impl TTSModelConfig {
    /// Create a TTSModelConfig from explicit values
    pub fn new(
        kokoro: KokoroTTSConfig,
        num_threads: i32,
        debug: bool,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            kokoro,
            num_threads,
            debug,
            provider: provider.into(),
        }
    }

    /// Register every field with `po`
    pub fn register<'a>(&'a mut self, po: &mut OptionRegistrar<'a>) -> Result<(), RegistrarError> {
        self.kokoro.register(po, KOKORO_PREFIX)?;
        po.register(
            "num-threads",
            &mut self.num_threads,
            "Number of threads to run the TTS model",
        )?;
        po.register(
            "provider",
            &mut self.provider,
            "Execution provider: cpu, cuda, coreml",
        )?;
        po.register(
            "debug",
            &mut self.debug,
            "Print debug information when loading the model",
        )?;
        Ok(())
    }

    /// Validate the configuration
    pub fn check(&self) -> ValidationResult {
        require_positive_i32("num_threads", self.num_threads)?;
        require_non_empty("provider", &self.provider)?;

        if self.kokoro.model.trim().is_empty() {
            return Err(ValidationError::NoBackendSelected {
                candidates: KOKORO_PREFIX.to_string(),
            });
        }
        self.kokoro
            .check()
            .map_err(|e| ValidationError::in_backend(KOKORO_PREFIX, e))
    }

    /// Boolean form of [`check`](Self::check); the reason is logged
    pub fn validate(&self) -> bool {
        if self.debug {
            info!(config = %self, "validating TTS model config");
        }
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "TTS model config validation failed");
                false
            }
        }
    }
}

impl fmt::Display for TTSModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TTSModelConfig(kokoro={}, num_threads={}, debug={}, provider={:?})",
            self.kokoro, self.num_threads, self.debug, self.provider
        )
    }
}
