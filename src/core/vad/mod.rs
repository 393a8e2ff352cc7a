//! Voice Activity Detection (VAD) model configuration
//!
//! Holds the configuration a VAD loader needs before it can open a model:
//!
//! - One parameter set per backend ([`SileroVADConfig`], [`TenVADConfig`])
//! - Shared runtime settings (sample rate, threads, execution provider)
//! - Backend selection, inferred from which model path is set or forced
//!   through [`VADModelConfig::backend`]
//!
//! # Example
//!
//! ```rust
//! use speech_model_config::core::vad::{VADBackend, VADModelConfig};
//!
//! let config = VADModelConfig::with_silero("/models/silero_vad.onnx");
//! assert_eq!(config.selected_backend().unwrap(), VADBackend::Silero);
//! assert!(config.validate());
//! ```

pub mod config;
pub mod silero;
pub mod ten_vad;

pub use config::{VADBackend, VADBackendConfig, VADModelConfig};
pub use silero::SileroVADConfig;
pub use ten_vad::TenVADConfig;
