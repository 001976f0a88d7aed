//! Software-profile record kinds: packages and dependency relationships.

pub mod package;
pub mod software_dependency_relationship;
pub mod software_purpose;

pub use package::{Package, PackageBuilder, PACKAGE_FIELDS};
pub use software_dependency_relationship::{
    DependencyConditionalityType, SoftwareDependencyLinkType, SoftwareDependencyRelationship,
    SoftwareDependencyRelationshipBuilder, SOFTWARE_DEPENDENCY_RELATIONSHIP_FIELDS,
};
pub use software_purpose::SoftwarePurpose;
