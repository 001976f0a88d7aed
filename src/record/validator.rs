//! The field validator: checks one record construction's full argument set
//! against the record kind's declared field specifications.
//!
//! Validation is a pure, synchronous pass. Every supplied value is checked
//! into a local buffer before anything is committed, so a failed
//! construction never leaves a partially initialized instance behind.

use crate::shared::{ModelError, Result};

use super::field_spec::FieldSpec;
use super::type_descriptor::TypeDescriptor;
use super::value::{FieldMap, Value};

/// A fully validated record: the kind tag plus every declared field's value.
///
/// Absent optional fields are stored as [`Value::Null`] so the full declared
/// shape is always readable back.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInstance {
    kind: String,
    fields: FieldMap,
}

impl RecordInstance {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Value of a declared field; `None` for names the kind does not declare.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether a declared field holds a non-null value.
    pub fn is_set(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|value| !value.is_null())
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

struct Mismatch {
    expected: String,
    actual: String,
}

impl Mismatch {
    fn new(expected: &TypeDescriptor, actual: &Value) -> Self {
        Self {
            expected: expected.to_string(),
            actual: actual.type_name(),
        }
    }
}

/// Validate every supplied value against the field specifications and
/// return the committed instance.
///
/// Fields are checked in declaration order, fail-fast. A field with no
/// entry in `supplied` is treated as absent; absence is an error only for
/// required fields.
pub fn validate_fields(
    record_kind: &str,
    specs: &[FieldSpec],
    supplied: &FieldMap,
) -> Result<RecordInstance> {
    let mut validated = FieldMap::new();
    for spec in specs {
        let value = supplied.get(spec.name).cloned().unwrap_or(Value::Null);
        if value.is_null() {
            if spec.required {
                return Err(ModelError::missing_required(record_kind, spec.name));
            }
            validated.insert(spec.name.to_string(), Value::Null);
            continue;
        }
        if let Err(mismatch) = check_value(&spec.ty, &value) {
            return Err(ModelError::FieldType {
                record_kind: record_kind.to_string(),
                field: spec.name.to_string(),
                expected: mismatch.expected,
                actual: mismatch.actual,
            });
        }
        validated.insert(spec.name.to_string(), value);
    }
    Ok(RecordInstance {
        kind: record_kind.to_string(),
        fields: validated,
    })
}

/// Recursive shape check of one value against one declared type.
fn check_value(ty: &TypeDescriptor, value: &Value) -> std::result::Result<(), Mismatch> {
    match ty {
        TypeDescriptor::String => match value {
            Value::String(_) => Ok(()),
            _ => Err(Mismatch::new(ty, value)),
        },
        TypeDescriptor::Integer => match value {
            Value::Integer(_) => Ok(()),
            _ => Err(Mismatch::new(ty, value)),
        },
        TypeDescriptor::Boolean => match value {
            Value::Boolean(_) => Ok(()),
            _ => Err(Mismatch::new(ty, value)),
        },
        TypeDescriptor::DateTime => match value {
            Value::DateTime(_) => Ok(()),
            _ => Err(Mismatch::new(ty, value)),
        },
        TypeDescriptor::Enum(descriptor) => match value {
            Value::EnumVariant { kind, variant }
                if kind == descriptor.name && descriptor.contains(variant) =>
            {
                Ok(())
            }
            _ => Err(Mismatch::new(ty, value)),
        },
        TypeDescriptor::Record(expected_kind) => match value {
            Value::Record { kind, .. } if kind == expected_kind => Ok(()),
            _ => Err(Mismatch::new(ty, value)),
        },
        TypeDescriptor::Optional(inner) => match value {
            Value::Null => Ok(()),
            _ => check_value(inner, value),
        },
        TypeDescriptor::List(element) => match value {
            Value::List(items) => {
                for item in items {
                    if let Err(mismatch) = check_value(element, item) {
                        return Err(Mismatch {
                            expected: ty.to_string(),
                            actual: format!("list containing {}", mismatch.actual),
                        });
                    }
                }
                Ok(())
            }
            _ => Err(Mismatch::new(ty, value)),
        },
        TypeDescriptor::Map {
            key: key_ty,
            value: value_ty,
        } => match value {
            Value::Map(entries) => {
                for (entry_key, entry_value) in entries {
                    // Map keys are stored as plain strings; re-wrap for the
                    // declared key type so non-string key declarations fail.
                    let key_value = Value::String(entry_key.clone());
                    if check_value(key_ty, &key_value).is_err() {
                        return Err(Mismatch {
                            expected: ty.to_string(),
                            actual: format!("map keyed by {}", key_value.type_name()),
                        });
                    }
                    if let Err(mismatch) = check_value(value_ty, entry_value) {
                        return Err(Mismatch {
                            expected: ty.to_string(),
                            actual: format!("map containing {}", mismatch.actual),
                        });
                    }
                }
                Ok(())
            }
            _ => Err(Mismatch::new(ty, value)),
        },
    }
}

/// Extract a required builder argument after validation has passed.
///
/// Validation already rejected absent required fields, so this only turns
/// the remaining `Option` plumbing back into a value without panicking.
pub(crate) fn require<T>(record_kind: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ModelError::missing_required(record_kind, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::field_spec::FieldSpec;
    use crate::record::type_descriptor::EnumDescriptor;
    use std::collections::BTreeMap;

    static COLOR: EnumDescriptor = EnumDescriptor {
        name: "Color",
        variants: &["red", "green", "blue"],
    };

    static TEST_FIELDS: &[FieldSpec] = &[
        FieldSpec::required("spdx_id", TypeDescriptor::String),
        FieldSpec::optional("count", TypeDescriptor::Integer),
        FieldSpec::optional("color", TypeDescriptor::Enum(&COLOR)),
        FieldSpec::optional("tags", TypeDescriptor::List(&TypeDescriptor::String)),
        FieldSpec::optional(
            "sensor",
            TypeDescriptor::Map {
                key: &TypeDescriptor::String,
                value: &TypeDescriptor::Optional(&TypeDescriptor::String),
            },
        ),
        FieldSpec::optional("origin", TypeDescriptor::Record("CreationInfo")),
    ];

    fn create_test_map() -> FieldMap {
        let mut supplied = FieldMap::new();
        supplied.insert("spdx_id".to_string(), Value::String("pkg1".to_string()));
        supplied
    }

    #[test]
    fn test_validate_minimal_supplied_set() {
        let instance = validate_fields("TestKind", TEST_FIELDS, &create_test_map()).unwrap();
        assert_eq!(instance.kind(), "TestKind");
        assert_eq!(
            instance.get("spdx_id"),
            Some(&Value::String("pkg1".to_string()))
        );
        // Absent optional fields read back as null, never as missing keys.
        assert_eq!(instance.get("count"), Some(&Value::Null));
        assert!(!instance.is_set("count"));
        assert!(instance.is_set("spdx_id"));
        // Undeclared names are not part of the instance.
        assert_eq!(instance.get("unknown"), None);
    }

    #[test]
    fn test_validate_missing_required_field() {
        let error = validate_fields("TestKind", TEST_FIELDS, &FieldMap::new()).unwrap_err();
        match error {
            ModelError::MissingRequiredField { record_kind, field } => {
                assert_eq!(record_kind, "TestKind");
                assert_eq!(field, "spdx_id");
            }
            other => panic!("expected missing required field error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_explicit_null_required_field() {
        let mut supplied = FieldMap::new();
        supplied.insert("spdx_id".to_string(), Value::Null);
        let error = validate_fields("TestKind", TEST_FIELDS, &supplied).unwrap_err();
        assert!(matches!(error, ModelError::MissingRequiredField { .. }));
    }

    #[test]
    fn test_validate_scalar_mismatch() {
        let mut supplied = create_test_map();
        supplied.insert("count".to_string(), Value::String("ten".to_string()));
        let error = validate_fields("TestKind", TEST_FIELDS, &supplied).unwrap_err();
        match error {
            ModelError::FieldType {
                field,
                expected,
                actual,
                ..
            } => {
                assert_eq!(field, "count");
                assert_eq!(expected, "integer");
                assert_eq!(actual, "string");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_enum_member_passes() {
        let mut supplied = create_test_map();
        supplied.insert(
            "color".to_string(),
            Value::EnumVariant {
                kind: "Color".to_string(),
                variant: "green".to_string(),
            },
        );
        assert!(validate_fields("TestKind", TEST_FIELDS, &supplied).is_ok());
    }

    #[test]
    fn test_validate_enum_non_member_fails() {
        let mut supplied = create_test_map();
        supplied.insert(
            "color".to_string(),
            Value::EnumVariant {
                kind: "Color".to_string(),
                variant: "yellow".to_string(),
            },
        );
        let error = validate_fields("TestKind", TEST_FIELDS, &supplied).unwrap_err();
        assert!(matches!(error, ModelError::FieldType { .. }));
    }

    #[test]
    fn test_validate_plain_string_in_enum_field_fails() {
        let mut supplied = create_test_map();
        supplied.insert("color".to_string(), Value::String("red".to_string()));
        let error = validate_fields("TestKind", TEST_FIELDS, &supplied).unwrap_err();
        match error {
            ModelError::FieldType {
                expected, actual, ..
            } => {
                assert_eq!(expected, "enum Color");
                assert_eq!(actual, "string");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_list_passes() {
        let mut supplied = create_test_map();
        supplied.insert("tags".to_string(), Value::List(vec![]));
        assert!(validate_fields("TestKind", TEST_FIELDS, &supplied).is_ok());
    }

    #[test]
    fn test_validate_list_with_wrong_element_fails() {
        let mut supplied = create_test_map();
        supplied.insert(
            "tags".to_string(),
            Value::List(vec![
                Value::String("resize".to_string()),
                Value::Integer(3),
            ]),
        );
        let error = validate_fields("TestKind", TEST_FIELDS, &supplied).unwrap_err();
        match error {
            ModelError::FieldType {
                expected, actual, ..
            } => {
                assert_eq!(expected, "list of string");
                assert_eq!(actual, "list containing integer");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_map_with_optional_values() {
        let mut entries = BTreeMap::new();
        entries.insert("lidar".to_string(), Value::String("roof".to_string()));
        entries.insert("radar".to_string(), Value::Null);
        let mut supplied = create_test_map();
        supplied.insert("sensor".to_string(), Value::Map(entries));
        assert!(validate_fields("TestKind", TEST_FIELDS, &supplied).is_ok());
    }

    #[test]
    fn test_validate_map_with_wrong_value_fails() {
        let mut entries = BTreeMap::new();
        entries.insert("lidar".to_string(), Value::Integer(7));
        let mut supplied = create_test_map();
        supplied.insert("sensor".to_string(), Value::Map(entries));
        let error = validate_fields("TestKind", TEST_FIELDS, &supplied).unwrap_err();
        match error {
            ModelError::FieldType {
                expected, actual, ..
            } => {
                assert_eq!(expected, "map of string to optional string");
                assert_eq!(actual, "map containing integer");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_record_kind_tag() {
        let mut supplied = create_test_map();
        supplied.insert(
            "origin".to_string(),
            Value::Record {
                kind: "CreationInfo".to_string(),
                fields: FieldMap::new(),
            },
        );
        assert!(validate_fields("TestKind", TEST_FIELDS, &supplied).is_ok());

        supplied.insert(
            "origin".to_string(),
            Value::Record {
                kind: "Hash".to_string(),
                fields: FieldMap::new(),
            },
        );
        let error = validate_fields("TestKind", TEST_FIELDS, &supplied).unwrap_err();
        match error {
            ModelError::FieldType {
                expected, actual, ..
            } => {
                assert_eq!(expected, "record CreationInfo");
                assert_eq!(actual, "record Hash");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_require_present() {
        let value = require("TestKind", "spdx_id", Some("pkg1")).unwrap();
        assert_eq!(value, "pkg1");
    }

    #[test]
    fn test_require_absent() {
        let error = require::<&str>("TestKind", "spdx_id", None).unwrap_err();
        assert!(matches!(error, ModelError::MissingRequiredField { .. }));
    }
}
