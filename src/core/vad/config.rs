//! VAD configuration types
//!
//! [`VADModelConfig`] aggregates one parameter set per VAD backend together
//! with the backend-independent settings (sample rate, threads, execution
//! provider). Every backend is always present; which one the loader uses is
//! decided by [`VADModelConfig::selected_backend`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::silero::SileroVADConfig;
use super::ten_vad::TenVADConfig;
use crate::core::error::{
    ValidationError, ValidationResult, require_non_empty, require_positive_f32,
    require_positive_i32,
};
use crate::options::{OptionRegistrar, RegistrarError};

/// VAD backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VADBackend {
    /// Silero VAD
    #[serde(rename = "silero-vad")]
    Silero,
    /// TEN VAD
    #[serde(rename = "ten-vad")]
    TenVAD,
}

impl VADBackend {
    /// Every known backend, in selection-report order
    pub const ALL: [VADBackend; 2] = [VADBackend::Silero, VADBackend::TenVAD];

    /// Canonical name, also used as the command-line option prefix
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silero => "silero-vad",
            Self::TenVAD => "ten-vad",
        }
    }

    fn candidates() -> String {
        Self::ALL
            .iter()
            .map(|b| b.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for VADBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VADBackend {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silero-vad" | "silero_vad" | "silero" => Ok(Self::Silero),
            "ten-vad" | "ten_vad" | "tenvad" | "ten" => Ok(Self::TenVAD),
            _ => Err(ValidationError::UnknownBackend(s.to_string())),
        }
    }
}

/// Capability interface shared by every VAD backend parameter set
pub trait VADBackendConfig: fmt::Display + fmt::Debug {
    /// Which backend this parameter set belongs to
    fn kind(&self) -> VADBackend;

    /// Path of the backend's model file
    fn model(&self) -> &str;

    /// Declare every field as `<prefix>.<field>`
    fn register<'a>(
        &'a mut self,
        po: &mut OptionRegistrar<'a>,
        prefix: &str,
    ) -> Result<(), RegistrarError>;

    /// Check every field except the model path
    fn check_parameters(&self) -> ValidationResult;

    /// Whether the model path is populated
    fn is_configured(&self) -> bool {
        !self.model().trim().is_empty()
    }

    /// Check the model path and every other field
    fn check(&self) -> ValidationResult {
        require_non_empty("model", self.model())?;
        self.check_parameters()
    }

    /// Boolean form of [`check`](Self::check); the reason is logged
    fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                warn!(backend = %self.kind(), error = %e, "invalid VAD backend parameters");
                false
            }
        }
    }
}

/// Checks shared by backends that segment speech with a probability threshold
pub(crate) fn check_segment_parameters(
    threshold: f32,
    min_silence_duration: f32,
    min_speech_duration: f32,
    max_speech_duration: f32,
    window_size: i32,
) -> ValidationResult {
    if !(0.01..1.0).contains(&threshold) {
        return Err(ValidationError::invalid(
            "threshold",
            format!("must be in [0.01, 1.0), got {threshold}"),
        ));
    }
    require_positive_f32("min_silence_duration", min_silence_duration)?;
    require_positive_f32("min_speech_duration", min_speech_duration)?;
    require_positive_f32("max_speech_duration", max_speech_duration)?;
    if max_speech_duration <= min_speech_duration {
        return Err(ValidationError::invalid(
            "max_speech_duration",
            format!(
                "must be greater than min_speech_duration ({min_speech_duration}), got {max_speech_duration}"
            ),
        ));
    }
    require_positive_i32("window_size", window_size)?;
    Ok(())
}

/// Configuration for Voice Activity Detection model loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VADModelConfig {
    /// Silero VAD parameters
    pub silero_vad: SileroVADConfig,

    /// TEN VAD parameters
    pub ten_vad: TenVADConfig,

    /// Sample rate of the input audio (Hz)
    pub sample_rate: i32,

    /// Number of threads for inference
    pub num_threads: i32,

    /// Execution provider, e.g. "cpu", "cuda", "coreml"
    pub provider: String,

    /// Show debug information when loading models
    pub debug: bool,

    /// Explicit backend selection
    ///
    /// Empty means "infer from which model path is set". Naming a backend
    /// selects it even when its model path is empty, for loaders that ship
    /// an embedded default model.
    pub backend: String,
}

impl Default for VADModelConfig {
    fn default() -> Self {
        Self {
            silero_vad: SileroVADConfig::default(),
            ten_vad: TenVADConfig::default(),
            sample_rate: 16000,
            num_threads: 1,
            provider: "cpu".to_string(),
            debug: false,
            backend: String::new(),
        }
    }
}

impl VADModelConfig {
    /// Create a VADModelConfig from explicit values
    pub fn new(
        silero_vad: SileroVADConfig,
        ten_vad: TenVADConfig,
        sample_rate: i32,
        num_threads: i32,
        provider: impl Into<String>,
        debug: bool,
    ) -> Self {
        Self {
            silero_vad,
            ten_vad,
            sample_rate,
            num_threads,
            provider: provider.into(),
            debug,
            backend: String::new(),
        }
    }

    /// Default configuration with only the Silero model path set
    pub fn with_silero(model: impl Into<String>) -> Self {
        Self {
            silero_vad: SileroVADConfig::with_model(model),
            ..Default::default()
        }
    }

    /// Default configuration with only the TEN VAD model path set
    pub fn with_ten_vad(model: impl Into<String>) -> Self {
        Self {
            ten_vad: TenVADConfig::with_model(model),
            ..Default::default()
        }
    }

    /// Register every field with `po`
    ///
    /// Backend fields are prefixed with the backend name (`silero-vad.*`,
    /// `ten-vad.*`); shared fields are registered unprefixed.
    pub fn register<'a>(&'a mut self, po: &mut OptionRegistrar<'a>) -> Result<(), RegistrarError> {
        self.silero_vad.register(po, VADBackend::Silero.as_str())?;
        self.ten_vad.register(po, VADBackend::TenVAD.as_str())?;

        po.register(
            "sample-rate",
            &mut self.sample_rate,
            "Sample rate of the input audio in Hz",
        )?;
        po.register(
            "num-threads",
            &mut self.num_threads,
            "Number of threads to run the VAD model",
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
        po.register(
            "backend",
            &mut self.backend,
            "Force a backend (silero-vad, ten-vad). Empty selects the one with a model path",
        )?;
        Ok(())
    }

    /// Parameter set of `backend`
    pub fn backend_config(&self, backend: VADBackend) -> &dyn VADBackendConfig {
        match backend {
            VADBackend::Silero => &self.silero_vad,
            VADBackend::TenVAD => &self.ten_vad,
        }
    }

    /// Backends whose model path is populated
    pub fn configured_backends(&self) -> Vec<VADBackend> {
        VADBackend::ALL
            .into_iter()
            .filter(|b| self.backend_config(*b).is_configured())
            .collect()
    }

    /// Resolve which backend the loader should use
    ///
    /// Without an explicit `backend`, exactly one backend must have a model
    /// path. With one, no *other* backend may have a model path.
    pub fn selected_backend(&self) -> Result<VADBackend, ValidationError> {
        let configured = self.configured_backends();

        if self.backend.trim().is_empty() {
            return match configured.as_slice() {
                [] => Err(ValidationError::NoBackendSelected {
                    candidates: VADBackend::candidates(),
                }),
                [only] => Ok(*only),
                many => Err(ValidationError::AmbiguousSelection(
                    many.iter().map(|b| b.as_str().to_string()).collect(),
                )),
            };
        }

        let explicit: VADBackend = self.backend.parse()?;
        let conflicting: Vec<VADBackend> = configured
            .into_iter()
            .filter(|b| *b != explicit)
            .collect();
        if !conflicting.is_empty() {
            let mut names = vec![explicit.as_str().to_string()];
            names.extend(conflicting.iter().map(|b| b.as_str().to_string()));
            return Err(ValidationError::AmbiguousSelection(names));
        }
        Ok(explicit)
    }

    /// Validate the configuration
    pub fn check(&self) -> ValidationResult {
        require_positive_i32("sample_rate", self.sample_rate)?;
        require_positive_i32("num_threads", self.num_threads)?;
        require_non_empty("provider", &self.provider)?;

        let selected = self.selected_backend()?;
        let backend = self.backend_config(selected);
        let result = if backend.is_configured() {
            backend.check()
        } else {
            // explicitly selected with an empty model path
            backend.check_parameters()
        };
        result.map_err(|e| ValidationError::in_backend(selected.as_str(), e))
    }

    /// Boolean form of [`check`](Self::check); the reason is logged
    pub fn validate(&self) -> bool {
        if self.debug {
            info!(config = %self, "validating VAD model config");
        }
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "VAD model config validation failed");
                false
            }
        }
    }
}

impl fmt::Display for VADModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VADModelConfig(silero_vad={}, ten_vad={}, sample_rate={}, num_threads={}, provider={:?}, debug={}, backend={:?})",
            self.silero_vad,
            self.ten_vad,
            self.sample_rate,
            self.num_threads,
            self.provider,
            self.debug,
            self.backend
        )
    }
}
