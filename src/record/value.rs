use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::type_descriptor::ModelEnum;

/// The supplied arguments of one record construction, keyed by field name.
///
/// Fields not present in the map are treated as absent, the same as an
/// explicit [`Value::Null`] entry.
pub type FieldMap = BTreeMap<String, Value>;

/// Runtime value of a single record field, as seen by the validator.
///
/// Typed constructor arguments are encoded into this shape via [`ToValue`]
/// so the whole bound-argument set can be checked in one pass; untyped
/// callers (deserializers, document loaders) build it directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    EnumVariant { kind: String, variant: String },
    Record { kind: String, fields: FieldMap },
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Encode an enumeration member together with its enumeration name,
    /// so membership can be checked against the declared descriptor.
    pub fn from_enum<E: ModelEnum>(value: E) -> Self {
        Value::EnumVariant {
            kind: E::descriptor().name.to_string(),
            variant: value.variant_name().to_string(),
        }
    }

    /// Short description of this value's runtime shape, used in type errors.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Integer(_) => "integer".to_string(),
            Value::Boolean(_) => "boolean".to_string(),
            Value::DateTime(_) => "datetime".to_string(),
            Value::EnumVariant { kind, .. } => format!("enum {}", kind),
            Value::Record { kind, .. } => format!("record {}", kind),
            Value::List(_) => "list".to_string(),
            Value::Map(_) => "map".to_string(),
        }
    }
}

/// Encoding of a typed model value into its validator [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

/// `None` encodes as [`Value::Null`], which the validator accepts only for
/// fields not marked required.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}
