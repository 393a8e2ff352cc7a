//! Dynamic record interface
//!
//! Lets a host environment (FFI, scripting bindings) construct, inspect and
//! mutate configuration types by field name, with values exchanged as JSON.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// Value type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Text,
    Bool,
    /// A nested record, by type name
    Record(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Int => write!(f, "int"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Text => write!(f, "str"),
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::Record(name) => write!(f, "{name}"),
        }
    }
}

/// Static description of one record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be passed to [`ConfigRecord::from_kwargs`]
    pub required: bool,
}

/// Errors raised by the binding layer
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("{type_name} has no field '{field}'")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    #[error("{type_name}.{field}: expected {expected}, got {found}")]
    TypeMismatch {
        type_name: &'static str,
        field: String,
        expected: FieldKind,
        found: String,
    },

    #[error("{type_name}() missing required argument '{field}'")]
    MissingArgument {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl BindingError {
    #[doc(hidden)]
    pub fn type_mismatch(
        type_name: &'static str,
        field: &str,
        expected: FieldKind,
        found: &Value,
    ) -> Self {
        Self::TypeMismatch {
            type_name,
            field: field.to_string(),
            expected,
            found: format!("{} {}", json_kind(found), found),
        }
    }
}

/// Short name of a JSON value's type
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// A type that can be stored in a record field
pub trait BindingField: Sized {
    const KIND: FieldKind;

    fn to_value(&self) -> Value;

    /// Convert `value`, reporting mismatches against `type_name.field`
    fn from_value(type_name: &'static str, field: &str, value: &Value) -> Result<Self, BindingError>;
}

impl BindingField for i32 {
    const KIND: FieldKind = FieldKind::Int;

    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn from_value(type_name: &'static str, field: &str, value: &Value) -> Result<Self, BindingError> {
        value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| BindingError::type_mismatch(type_name, field, Self::KIND, value))
    }
}

impl BindingField for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn to_value(&self) -> Value {
        // widen through the shortest decimal form so 0.1f32 stays 0.1
        self.to_string()
            .parse::<f64>()
            .map(Value::from)
            .unwrap_or(Value::Null)
    }

    fn from_value(type_name: &'static str, field: &str, value: &Value) -> Result<Self, BindingError> {
        value
            .as_f64()
            .map(|v| v as f32)
            .filter(|v| v.is_finite())
            .ok_or_else(|| BindingError::type_mismatch(type_name, field, Self::KIND, value))
    }
}

impl BindingField for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(type_name: &'static str, field: &str, value: &Value) -> Result<Self, BindingError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| BindingError::type_mismatch(type_name, field, Self::KIND, value))
    }
}

impl BindingField for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(type_name: &'static str, field: &str, value: &Value) -> Result<Self, BindingError> {
        value
            .as_bool()
            .ok_or_else(|| BindingError::type_mismatch(type_name, field, Self::KIND, value))
    }
}

/// Field-level access to a configuration type
///
/// Implementations are generated by [`config_record!`](crate::config_record);
/// validation always forwards to the type's own `validate`.
pub trait ConfigRecord: Sized + Default + fmt::Display {
    /// Name exposed to the host environment
    const TYPE_NAME: &'static str;

    /// Every field in declaration order
    fn fields() -> &'static [FieldSpec];

    /// Read a field
    fn get(&self, name: &str) -> Result<Value, BindingError>;

    /// Write a field; the value must match the field kind
    fn set(&mut self, name: &str, value: &Value) -> Result<(), BindingError>;

    /// The type's own validation
    fn validate(&self) -> bool;

    /// Look up a field description
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.name == name)
    }

    /// Keyword constructor
    ///
    /// Required fields must be present; every other field starts from the
    /// type's default.
    fn from_kwargs(kwargs: &Map<String, Value>) -> Result<Self, BindingError> {
        if let Some(unknown) = kwargs.keys().find(|k| Self::field(k).is_none()) {
            return Err(BindingError::UnknownField {
                type_name: Self::TYPE_NAME,
                field: unknown.clone(),
            });
        }
        if let Some(missing) = Self::fields()
            .iter()
            .find(|f| f.required && !kwargs.contains_key(f.name))
        {
            return Err(BindingError::MissingArgument {
                type_name: Self::TYPE_NAME,
                field: missing.name,
            });
        }

        let mut record = Self::default();
        for (name, value) in kwargs {
            record.set(name, value)?;
        }
        Ok(record)
    }

    /// Keyword constructor from a JSON object string
    fn from_json_str(json: &str) -> Result<Self, BindingError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(kwargs) => Self::from_kwargs(&kwargs),
            other => Err(BindingError::NotAnObject(json_kind(&other))),
        }
    }

    /// Every field as a JSON object
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        for spec in Self::fields() {
            if let Ok(value) = self.get(spec.name) {
                map.insert(spec.name.to_string(), value);
            }
        }
        Value::Object(map)
    }

    /// Human-readable summary, identical to `Display`
    fn display(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_field() {
        assert_eq!(i32::from_value("T", "n", &json!(4)).unwrap(), 4);
        assert!(i32::from_value("T", "n", &json!(4.5)).is_err());
        assert!(i32::from_value("T", "n", &json!("4")).is_err());

        let err = i32::from_value("T", "n", &json!(5_000_000_000i64)).unwrap_err();
        assert!(matches!(err, BindingError::TypeMismatch { .. }));
    }

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(f32::from_value("T", "x", &json!(2)).unwrap(), 2.0);
        assert_eq!(f32::from_value("T", "x", &json!(0.25)).unwrap(), 0.25);
        assert!(f32::from_value("T", "x", &json!(true)).is_err());
    }

    #[test]
    fn test_float_rejects_out_of_range() {
        assert!(f32::from_value("T", "x", &json!(1e300)).is_err());
        assert!(f32::from_value("T", "x", &json!(-1e300)).is_err());
        assert!(f32::from_value("T", "x", &json!(3.0e38)).unwrap().is_finite());
    }

    #[test]
    fn test_float_to_value_keeps_short_form() {
        assert_eq!(0.1f32.to_value(), json!(0.1));
        assert_eq!(20.0f32.to_value(), json!(20.0));
    }

    #[test]
    fn test_no_string_coercion() {
        assert!(String::from_value("T", "s", &json!(1)).is_err());
        assert!(bool::from_value("T", "b", &json!(1)).is_err());
        assert!(bool::from_value("T", "b", &json!("true")).is_err());
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = i32::from_value("VADModelConfig", "sample_rate", &json!("fast")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "VADModelConfig.sample_rate: expected int, got str \"fast\""
        );
    }
}
