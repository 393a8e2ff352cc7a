//! Speech model configuration
//!
//! Typed, validated configuration for loading voice activity detection and
//! text-to-speech models, with command-line/environment option binding, a
//! YAML file layer and a JSON binding surface for host environments.

pub mod binding;
pub mod config;
pub mod core;
pub mod options;

// Re-export commonly used items for convenience
pub use binding::{BindingError, ConfigRecord};
pub use config::{ConfigFile, ConfigFileError};
pub use self::core::*;
pub use options::{OptionRegistrar, RegistrarError};
