//! Option Registrar
//!
//! The registrar is the single place where a configuration field is turned
//! into a named, typed, documented command-line option. Configuration types
//! call [`OptionRegistrar::register`] for each of their fields; the registrar
//! keeps a mutable borrow of every field so that parsed values can be written
//! back once the command line has been matched.
//!
//! # Naming
//!
//! Backend parameter sets register their fields as `<prefix>.<field>` (see
//! [`option_key`]) so that two backends sharing a field name never collide.
//! Registering the same name twice is rejected with
//! [`RegistrarError::DuplicateOption`].
//!
//! # Example
//!
//! ```rust
//! use speech_model_config::options::OptionRegistrar;
//!
//! let mut threads = 1i32;
//! let mut provider = "cpu".to_string();
//!
//! let mut po = OptionRegistrar::new("demo");
//! po.register("num-threads", &mut threads, "Number of threads").unwrap();
//! po.register("provider", &mut provider, "Execution provider").unwrap();
//! po.parse_from(["demo", "--num-threads", "4"]).unwrap();
//!
//! assert_eq!(threads, 4);
//! assert_eq!(provider, "cpu");
//! ```

use std::collections::HashSet;
use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches, Command};
use thiserror::Error;
use tracing::debug;

use super::value::{Binding, OptionValue};

/// Names clap reserves for its own flags
const RESERVED_NAMES: &[&str] = &["help", "version"];

/// Errors raised while registering or applying options
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// The same option name was registered twice
    #[error("option '--{0}' is already registered")]
    DuplicateOption(String),

    /// The option name cannot be used as a long flag
    #[error("invalid option name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The command line could not be parsed (unknown flag, malformed value, ...)
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// A matched value could not be read back with the registered type
    #[error("failed to read option '--{name}': {reason}")]
    Matches { name: String, reason: String },
}

/// Join a prefix and a field name into an option name
///
/// An empty prefix yields the bare field name.
pub fn option_key(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Environment variable consulted for `name` under `prefix`
///
/// `("VAD", "silero-vad.model")` maps to `VAD_SILERO_VAD_MODEL`.
pub fn env_var_name(prefix: &str, name: &str) -> String {
    format!("{prefix}_{name}")
        .to_uppercase()
        .replace(['.', '-'], "_")
}

struct RegisteredOption<'a> {
    name: String,
    help: String,
    default: String,
    binding: Binding<'a>,
}

/// Registry of command-line options bound to configuration fields
pub struct OptionRegistrar<'a> {
    name: String,
    about: Option<String>,
    env_prefix: Option<String>,
    options: Vec<RegisteredOption<'a>>,
    seen: HashSet<String>,
}

impl<'a> OptionRegistrar<'a> {
    /// Create an empty registrar for a command called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: None,
            env_prefix: None,
            options: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Set the description shown in `--help`
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Also read every option from `<PREFIX>_<NAME>` environment variables
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Bind `field` to the long option `--name`
    ///
    /// The field's current value becomes the option default. The field stays
    /// borrowed until the registrar is applied or dropped.
    ///
    /// Boolean fields accept `--name` or `--name=<bool>`; a value separated
    /// by a space (`--name true`) is rejected.
    pub fn register<T>(
        &mut self,
        name: &str,
        field: &'a mut T,
        help: &str,
    ) -> Result<(), RegistrarError>
    where
        T: OptionValue + ?Sized,
    {
        check_name(name)?;
        if !self.seen.insert(name.to_string()) {
            return Err(RegistrarError::DuplicateOption(name.to_string()));
        }

        let binding = field.bind();
        let default = binding.current();
        debug!(option = name, default = %default, "registered option");

        self.options.push(RegisteredOption {
            name: name.to_string(),
            help: help.to_string(),
            default,
            binding,
        });
        Ok(())
    }

    /// Registered option names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name.as_str()).collect()
    }

    /// Number of registered options
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Build the clap command describing every registered option
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.name.clone());
        if let Some(about) = &self.about {
            command = command.about(about.clone());
        }

        for option in &self.options {
            // flags only take an attached value: `--debug` or `--debug=false`
            let help = match option.binding {
                Binding::Flag(_) => format!(
                    "{} (--{name} or --{name}=false)",
                    option.help,
                    name = option.name
                ),
                _ => option.help.clone(),
            };
            let mut arg = Arg::new(option.name.clone())
                .long(option.name.clone())
                .help(help);
            arg = option.binding.configure(arg);
            if !option.default.is_empty() {
                arg = arg.default_value(option.default.clone());
            }
            if let Some(prefix) = &self.env_prefix {
                arg = arg.env(env_var_name(prefix, &option.name));
            }
            command = command.arg(arg);
        }

        command
    }

    /// Write values supplied on the command line or through the environment
    /// back into the bound fields
    ///
    /// Options left unset keep whatever value the field held when it was
    /// registered. Returns how many fields were written.
    pub fn apply(self, matches: &ArgMatches) -> Result<usize, RegistrarError> {
        let mut written = 0;
        for mut option in self.options {
            let source = matches.value_source(&option.name);
            if !matches!(
                source,
                Some(ValueSource::CommandLine) | Some(ValueSource::EnvVariable)
            ) {
                continue;
            }

            if option.binding.write(matches, &option.name)? {
                debug!(
                    option = %option.name,
                    source = ?source,
                    value = %option.binding.current(),
                    "applied option"
                );
                written += 1;
            }
        }
        Ok(written)
    }

    /// Parse `args` (binary name first) and apply the result
    pub fn parse_from<I, T>(self, args: I) -> Result<usize, RegistrarError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(args)?;
        self.apply(&matches)
    }
}

fn check_name(name: &str) -> Result<(), RegistrarError> {
    let invalid = |reason| {
        Err(RegistrarError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("name is empty");
    }
    if name.starts_with('-') {
        return invalid("name must not start with '-'");
    }
    if name.chars().any(|c| c.is_whitespace() || c == '=') {
        return invalid("name must not contain whitespace or '='");
    }
    if RESERVED_NAMES.contains(&name) {
        return invalid("name is reserved");
    }
    Ok(())
}
