//! Element-level building blocks shared by every record kind: creation
//! provenance, integrity methods, external references and identifiers, and
//! the relationship base kinds.

pub mod creation_info;
pub mod element;
pub mod external_identifier;
pub mod external_reference;
pub mod integrity_method;
pub mod relationship;

pub use creation_info::CreationInfo;
pub use element::ELEMENT_FIELDS;
pub use external_identifier::{ExternalIdentifier, ExternalIdentifierType};
pub use external_reference::{ExternalReference, ExternalReferenceType};
pub use integrity_method::{Hash, HashAlgorithm};
pub use relationship::{
    LifecycleScopeType, RelationshipCompleteness, RelationshipType,
    LIFECYCLE_SCOPED_RELATIONSHIP_FIELDS, RELATIONSHIP_FIELDS,
};
