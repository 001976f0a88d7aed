use std::collections::BTreeSet;

use crate::shared::{ModelError, Result};

use super::type_descriptor::TypeDescriptor;
use super::validator::{validate_fields, RecordInstance};
use super::value::FieldMap;

/// Declared name, type, and requiredness of one field of a record kind.
///
/// Field tables are declared as `static` slices per record family and
/// composed per concrete kind with [`compose_field_specs`].
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: TypeDescriptor,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, ty: TypeDescriptor) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, ty: TypeDescriptor) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }
}

/// Flatten a concrete record kind's field tables, base kinds first.
///
/// A field name declared twice anywhere across the hierarchy is a
/// definition-time error; derived kinds may only add fields, never
/// redeclare inherited ones.
pub fn compose_field_specs(
    record_kind: &str,
    tables: &[&'static [FieldSpec]],
) -> Result<Vec<FieldSpec>> {
    let mut seen = BTreeSet::new();
    let mut composed = Vec::new();
    for table in tables {
        for spec in *table {
            if !seen.insert(spec.name) {
                return Err(ModelError::DuplicateFieldDeclaration {
                    record_kind: record_kind.to_string(),
                    field: spec.name.to_string(),
                });
            }
            composed.push(*spec);
        }
    }
    Ok(composed)
}

/// A concrete record kind: a name plus its composed field specifications.
///
/// `validate` is the untyped construction entry point; the typed builders
/// delegate to it with their encoded argument set.
pub trait RecordKind {
    const KIND: &'static str;

    /// Composed field specifications, own and inherited, in declaration order.
    fn field_specs() -> &'static [FieldSpec];

    fn validate(supplied: &FieldMap) -> Result<RecordInstance> {
        validate_fields(Self::KIND, Self::field_specs(), supplied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BASE_FIELDS: &[FieldSpec] = &[
        FieldSpec::required("spdx_id", TypeDescriptor::String),
        FieldSpec::optional("comment", TypeDescriptor::String),
    ];

    static OWN_FIELDS: &[FieldSpec] = &[FieldSpec::optional("scope", TypeDescriptor::String)];

    static CLASHING_FIELDS: &[FieldSpec] = &[FieldSpec::optional("comment", TypeDescriptor::String)];

    #[test]
    fn test_compose_preserves_declaration_order() {
        let composed = compose_field_specs("TestKind", &[BASE_FIELDS, OWN_FIELDS]).unwrap();
        let names: Vec<&str> = composed.iter().map(|spec| spec.name).collect();
        assert_eq!(names, vec!["spdx_id", "comment", "scope"]);
    }

    #[test]
    fn test_compose_rejects_duplicate_declaration() {
        let result = compose_field_specs("TestKind", &[BASE_FIELDS, CLASHING_FIELDS]);
        match result {
            Err(ModelError::DuplicateFieldDeclaration { record_kind, field }) => {
                assert_eq!(record_kind, "TestKind");
                assert_eq!(field, "comment");
            }
            other => panic!("expected duplicate declaration error, got {:?}", other),
        }
    }

    #[test]
    fn test_field_spec_constructors() {
        let required = FieldSpec::required("spdx_id", TypeDescriptor::String);
        assert!(required.required);
        let optional = FieldSpec::optional("comment", TypeDescriptor::String);
        assert!(!optional.required);
    }
}
