//! Kokoro Text-to-Speech model configuration
//!
//! ## Required files
//!
//! - `model`: the ONNX model
//! - `voices`: speaker embeddings (`voices.bin`)
//! - `tokens`: token table (`tokens.txt`)
//! - `data_dir`: espeak-ng data
//!
//! Multi-lingual models additionally take a comma-separated `lexicon` list,
//! a jieba `dict_dir` and a `lang` hint.
//!
//! ## Usage
//!
//! ```rust
//! use speech_model_config::core::tts::KokoroTTSConfig;
//!
//! let config = KokoroTTSConfig::new(
//!     "kokoro-en-v0_19/model.onnx",
//!     "kokoro-en-v0_19/voices.bin",
//!     "kokoro-en-v0_19/tokens.txt",
//!     "",
//!     "kokoro-en-v0_19/espeak-ng-data",
//!     "",
//!     1.0,
//!     "",
//! );
//! assert!(config.validate());
//! ```

mod config;

pub use config::KokoroTTSConfig;

#[cfg(test)]
mod tests;
