//! Command-line option registration
//!
//! Configuration types expose their fields as command-line options through an
//! explicit [`OptionRegistrar`] passed into their `register` method. Nothing
//! here is process-global: two registrars never share a namespace, so
//! configurations can be built and parsed independently (and in tests).

mod registrar;
mod value;

pub use registrar::{OptionRegistrar, RegistrarError, env_var_name, option_key};
pub use value::{Binding, OptionValue};
