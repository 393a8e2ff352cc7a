//! Kokoro TTS Configuration

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::{
    ValidationError, ValidationResult, require_non_empty, require_positive_f32,
};
use crate::options::{OptionRegistrar, RegistrarError, option_key};

/// Kokoro voice model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KokoroTTSConfig {
    /// Path to the kokoro ONNX model
    pub model: String,

    /// Path to voices.bin
    pub voices: String,

    /// Path to tokens.txt
    pub tokens: String,

    /// Comma-separated lexicon files, e.g. "lexicon-us-en.txt,lexicon-zh.txt"
    pub lexicon: String,

    /// Path to the espeak-ng data directory
    pub data_dir: String,

    /// Path to the jieba dictionary directory (Chinese only)
    pub dict_dir: String,

    /// Speech speed; larger is slower
    pub length_scale: f32,

    /// Language hint for multi-lingual models
    pub lang: String,
}

impl Default for KokoroTTSConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            voices: String::new(),
            tokens: String::new(),
            lexicon: String::new(),
            data_dir: String::new(),
            dict_dir: String::new(),
            length_scale: 1.0,
            lang: String::new(),
        }
    }
}

impl KokoroTTSConfig {
    /// Create a KokoroTTSConfig from explicit values
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        model: impl Into<String>,
        voices: impl Into<String>,
        tokens: impl Into<String>,
        lexicon: impl Into<String>,
        data_dir: impl Into<String>,
        dict_dir: impl Into<String>,
        length_scale: f32,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            voices: voices.into(),
            tokens: tokens.into(),
            lexicon: lexicon.into(),
            data_dir: data_dir.into(),
            dict_dir: dict_dir.into(),
            length_scale,
            lang: lang.into(),
        }
    }

    /// Register every field as `<prefix>.<field>`
    pub fn register<'a>(
        &'a mut self,
        po: &mut OptionRegistrar<'a>,
        prefix: &str,
    ) -> Result<(), RegistrarError> {
        po.register(
            &option_key(prefix, "model"),
            &mut self.model,
            "Path to the kokoro model",
        )?;
        po.register(
            &option_key(prefix, "voices"),
            &mut self.voices,
            "Path to voices.bin for kokoro",
        )?;
        po.register(
            &option_key(prefix, "tokens"),
            &mut self.tokens,
            "Path to tokens.txt for kokoro",
        )?;
        po.register(
            &option_key(prefix, "lexicon"),
            &mut self.lexicon,
            "Comma-separated lexicon files for kokoro (multi-lingual models)",
        )?;
        po.register(
            &option_key(prefix, "data-dir"),
            &mut self.data_dir,
            "Path to the espeak-ng data directory",
        )?;
        po.register(
            &option_key(prefix, "dict-dir"),
            &mut self.dict_dir,
            "Path to the jieba dictionary directory",
        )?;
        po.register(
            &option_key(prefix, "length-scale"),
            &mut self.length_scale,
            "Speech speed. Larger means slower",
        )?;
        po.register(
            &option_key(prefix, "lang"),
            &mut self.lang,
            "Language hint for multi-lingual kokoro models",
        )?;
        Ok(())
    }

    /// Lexicon files in declaration order
    pub fn lexicon_files(&self) -> Vec<&str> {
        if self.lexicon.is_empty() {
            return Vec::new();
        }
        self.lexicon.split(',').map(str::trim).collect()
    }

    /// Validate the configuration
    pub fn check(&self) -> ValidationResult {
        require_non_empty("model", &self.model)?;
        require_non_empty("voices", &self.voices)?;
        require_non_empty("tokens", &self.tokens)?;
        require_non_empty("data_dir", &self.data_dir)?;

        if self.lexicon_files().iter().any(|f| f.is_empty()) {
            return Err(ValidationError::invalid(
                "lexicon",
                format!("contains an empty entry: {:?}", self.lexicon),
            ));
        }

        require_positive_f32("length_scale", self.length_scale)
    }

    /// Boolean form of [`check`](Self::check); the reason is logged
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "invalid kokoro TTS config");
                false
            }
        }
    }
}

impl fmt::Display for KokoroTTSConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KokoroTTSConfig(model={:?}, voices={:?}, tokens={:?}, lexicon={:?}, data_dir={:?}, dict_dir={:?}, length_scale={}, lang={:?})",
            self.model,
            self.voices,
            self.tokens,
            self.lexicon,
            self.data_dir,
            self.dict_dir,
            self.length_scale,
            self.lang
        )
    }
}
