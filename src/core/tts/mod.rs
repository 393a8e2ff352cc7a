//! Text-to-Speech (TTS) model configuration
//!
//! Mirrors the VAD layout with a single voice backend, kokoro.

pub mod config;
pub mod kokoro;

pub use config::{KOKORO_PREFIX, TTSModelConfig};
pub use kokoro::KokoroTTSConfig;
