//! Typed field bindings
//!
//! An [`OptionValue`] is any field type the registrar knows how to expose on
//! the command line. Binding a field borrows it mutably for the lifetime of the
//! registrar, so values parsed later are written straight back into the
//! configuration that declared them.

use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, ArgMatches};

use super::registrar::RegistrarError;

/// A mutable reference to a typed configuration field
#[derive(Debug)]
pub enum Binding<'a> {
    Int(&'a mut i32),
    Float(&'a mut f32),
    Text(&'a mut String),
    Flag(&'a mut bool),
}

/// Field types that can be registered as command-line options
pub trait OptionValue {
    fn bind(&mut self) -> Binding<'_>;
}

impl OptionValue for i32 {
    fn bind(&mut self) -> Binding<'_> {
        Binding::Int(self)
    }
}

impl OptionValue for f32 {
    fn bind(&mut self) -> Binding<'_> {
        Binding::Float(self)
    }
}

impl OptionValue for String {
    fn bind(&mut self) -> Binding<'_> {
        Binding::Text(self)
    }
}

impl OptionValue for bool {
    fn bind(&mut self) -> Binding<'_> {
        Binding::Flag(self)
    }
}

impl Binding<'_> {
    /// Placeholder shown in `--help` output
    pub fn value_name(&self) -> &'static str {
        match self {
            Binding::Int(_) => "INT",
            Binding::Float(_) => "FLOAT",
            Binding::Text(_) => "STRING",
            Binding::Flag(_) => "BOOL",
        }
    }

    /// Current field value rendered the way it would be typed on the command line
    pub fn current(&self) -> String {
        match self {
            Binding::Int(v) => v.to_string(),
            Binding::Float(v) => v.to_string(),
            Binding::Text(v) => v.to_string(),
            Binding::Flag(v) => v.to_string(),
        }
    }

    /// Attach the value parser and arity matching this field type
    pub(crate) fn configure(&self, arg: Arg) -> Arg {
        let arg = arg.value_name(self.value_name());
        match self {
            Binding::Int(_) => arg
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(i32))
                .allow_negative_numbers(true),
            Binding::Float(_) => arg
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(f32))
                .allow_negative_numbers(true),
            Binding::Text(_) => arg.action(ArgAction::Set),
            // `--debug` alone means true; `--debug=false` spells it out
            Binding::Flag(_) => arg
                .action(ArgAction::Set)
                .value_parser(BoolishValueParser::new())
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
        }
    }

    /// Copy the parsed value for `id` into the bound field
    ///
    /// Returns `Ok(false)` when the matches carry no value for `id`.
    pub(crate) fn write(&mut self, matches: &ArgMatches, id: &str) -> Result<bool, RegistrarError> {
        let matches_error = |e: clap::parser::MatchesError| RegistrarError::Matches {
            name: id.to_string(),
            reason: e.to_string(),
        };

        match self {
            Binding::Int(field) => match matches.try_get_one::<i32>(id).map_err(matches_error)? {
                Some(value) => **field = *value,
                None => return Ok(false),
            },
            Binding::Float(field) => match matches.try_get_one::<f32>(id).map_err(matches_error)? {
                Some(value) => **field = *value,
                None => return Ok(false),
            },
            Binding::Text(field) => {
                match matches.try_get_one::<String>(id).map_err(matches_error)? {
                    Some(value) => **field = value.clone(),
                    None => return Ok(false),
                }
            }
            Binding::Flag(field) => match matches.try_get_one::<bool>(id).map_err(matches_error)? {
                Some(value) => **field = *value,
                None => return Ok(false),
            },
        }
        Ok(true)
    }
}
