//! Host-environment binding layer
//!
//! Exposes every configuration type as a named record whose fields can be
//! read and written by name with JSON values. Records are constructed the
//! same way plugin configuration crosses the FFI boundary: a JSON object
//! string holding keyword arguments.
//!
//! # Example
//!
//! ```rust
//! use speech_model_config::binding::ConfigRecord;
//! use speech_model_config::core::vad::VADModelConfig;
//!
//! let config = VADModelConfig::from_json_str(
//!     r#"{"silero_vad": {"model": "silero_vad.onnx"}, "num_threads": 2}"#,
//! )
//! .unwrap();
//! assert_eq!(config.num_threads, 2);
//! assert!(ConfigRecord::validate(&config));
//! ```

mod macros;
mod record;
mod records;

pub use record::{BindingError, BindingField, ConfigRecord, FieldKind, FieldSpec};
pub use serde_json::{Map, Value};
