use crate::model::core::creation_info::CreationInfo;
use crate::model::core::external_identifier::ExternalIdentifier;
use crate::model::core::external_reference::ExternalReference;
use crate::model::core::integrity_method::Hash;
use crate::record::{FieldSpec, TypeDescriptor};

/// Field specifications shared by every element kind.
///
/// `name` is deliberately not declared here: the package family requires it
/// while the relationship family leaves it optional, so each family table
/// declares it with its own requiredness and the hierarchy stays free of
/// duplicate declarations.
pub static ELEMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("spdx_id", TypeDescriptor::String),
    FieldSpec::optional("creation_info", TypeDescriptor::Record(CreationInfo::KIND)),
    FieldSpec::optional("summary", TypeDescriptor::String),
    FieldSpec::optional("description", TypeDescriptor::String),
    FieldSpec::optional("comment", TypeDescriptor::String),
    FieldSpec::optional(
        "verified_using",
        TypeDescriptor::List(&TypeDescriptor::Record(Hash::KIND)),
    ),
    FieldSpec::optional(
        "external_reference",
        TypeDescriptor::List(&TypeDescriptor::Record(ExternalReference::KIND)),
    ),
    FieldSpec::optional(
        "external_identifier",
        TypeDescriptor::List(&TypeDescriptor::Record(ExternalIdentifier::KIND)),
    ),
    FieldSpec::optional("extension", TypeDescriptor::String),
];
