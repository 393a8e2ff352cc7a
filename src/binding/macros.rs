//! Record Declaration Macro
//!
//! `config_record!` turns one field list into the [`ConfigRecord`] and
//! [`BindingField`] impls for a configuration type, so the binding surface
//! can never drift from the native struct.
//!
//! [`ConfigRecord`]: crate::binding::ConfigRecord
//! [`BindingField`]: crate::binding::BindingField

/// Declare the binding surface of a configuration type.
///
/// # Arguments
///
/// * `$ty => $name` - The native type and the name exposed to the host
/// * `validate: $expr;` - The native validation function (`fn(&$ty) -> bool`)
/// * `field: Type` - Every exposed field, in order
///
/// # Optional Arguments
///
/// * `[required]` after a field type - The field must be passed to `from_kwargs`
///
/// # Example
///
/// ```ignore
/// config_record! {
///     KokoroTTSConfig => "KokoroTTSConfig" {
///         validate: KokoroTTSConfig::validate;
///         model: String [required],
///         length_scale: f32,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_record {
    (@required required) => { true };
    (@required) => { false };

    (
        $ty:ident => $name:literal {
            validate: $validate:expr;
            $( $field:ident : $fty:ty $([$req:ident])? ),* $(,)?
        }
    ) => {
        impl $crate::binding::ConfigRecord for $ty {
            const TYPE_NAME: &'static str = $name;

            fn fields() -> &'static [$crate::binding::FieldSpec] {
                const FIELDS: &[$crate::binding::FieldSpec] = &[
                    $(
                        $crate::binding::FieldSpec {
                            name: stringify!($field),
                            kind: <$fty as $crate::binding::BindingField>::KIND,
                            required: $crate::config_record!(@required $($req)?),
                        },
                    )*
                ];
                FIELDS
            }

            fn get(&self, name: &str) -> Result<$crate::binding::Value, $crate::binding::BindingError> {
                match name {
                    $(
                        stringify!($field) => Ok($crate::binding::BindingField::to_value(&self.$field)),
                    )*
                    _ => Err($crate::binding::BindingError::UnknownField {
                        type_name: $name,
                        field: name.to_string(),
                    }),
                }
            }

            fn set(
                &mut self,
                name: &str,
                value: &$crate::binding::Value,
            ) -> Result<(), $crate::binding::BindingError> {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field = <$fty as $crate::binding::BindingField>::from_value(
                                $name, name, value,
                            )?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::binding::BindingError::UnknownField {
                        type_name: $name,
                        field: name.to_string(),
                    }),
                }
            }

            fn validate(&self) -> bool {
                ($validate)(self)
            }
        }

        impl $crate::binding::BindingField for $ty {
            const KIND: $crate::binding::FieldKind = $crate::binding::FieldKind::Record($name);

            fn to_value(&self) -> $crate::binding::Value {
                $crate::binding::ConfigRecord::to_json(self)
            }

            fn from_value(
                type_name: &'static str,
                field: &str,
                value: &$crate::binding::Value,
            ) -> Result<Self, $crate::binding::BindingError> {
                match value {
                    $crate::binding::Value::Object(kwargs) => {
                        <Self as $crate::binding::ConfigRecord>::from_kwargs(kwargs)
                    }
                    other => Err($crate::binding::BindingError::type_mismatch(
                        type_name,
                        field,
                        <Self as $crate::binding::BindingField>::KIND,
                        other,
                    )),
                }
            }
        }
    };
}
