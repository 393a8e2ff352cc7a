use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::tts::TTSModelConfig;
use crate::core::vad::VADModelConfig;

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// YAML configuration file structure
///
/// Both sections are optional; a missing section means "compiled defaults".
/// Inside a section, omitted fields keep their defaults and unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Voice activity detection model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vad: Option<VADModelConfig>,

    /// Text-to-speech model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<TTSModelConfig>,
}

impl ConfigFile {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The YAML is malformed
    /// - A field has the wrong type or is not recognized
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigFileError> {
        // empty and `~` documents both mean "no sections"
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: Option<Self> = serde_yaml::from_str(contents)?;
        Ok(file.unwrap_or_default())
    }

    /// VAD section, or compiled defaults when absent
    pub fn vad_or_default(&self) -> VADModelConfig {
        self.vad.clone().unwrap_or_default()
    }

    /// TTS section, or compiled defaults when absent
    pub fn tts_or_default(&self) -> TTSModelConfig {
        self.tts.clone().unwrap_or_default()
    }
}
