pub mod error;
pub mod tts;
pub mod vad;

// Re-export commonly used types for convenience
pub use error::{ValidationError, ValidationResult};

pub use tts::{KokoroTTSConfig, TTSModelConfig};

pub use vad::{SileroVADConfig, TenVADConfig, VADBackend, VADBackendConfig, VADModelConfig};
