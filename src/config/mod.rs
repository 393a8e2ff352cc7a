//! Configuration file loading
//!
//! Model configurations come from several sources. Priority, highest first:
//! command-line options > environment variables > YAML file > defaults.
//! This module covers the YAML layer; the other two are applied through
//! [`OptionRegistrar`](crate::options::OptionRegistrar).
//!
//! # Example
//! ```rust,no_run
//! use speech_model_config::config::ConfigFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = ConfigFile::from_file("models.yaml")?;
//! let vad = file.vad_or_default();
//! println!("{vad}");
//! # Ok(())
//! # }
//! ```

mod yaml;

pub use yaml::{ConfigFile, ConfigFileError};
