use serde::{Deserialize, Serialize};

use crate::record::{model_enum, FieldSpec, TypeDescriptor};

/// How one element relates to another.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::VariantNames,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RelationshipType {
    Affects,
    AmendedBy,
    AncestorOf,
    AvailableFrom,
    Configures,
    Contains,
    CoordinatedBy,
    CopiedTo,
    DelegatedTo,
    DependsOn,
    DescendantOf,
    Describes,
    DoesNotAffect,
    ExpandsTo,
    ExploitCreatedBy,
    FixedBy,
    FixedIn,
    FoundBy,
    Generates,
    HasAddedFile,
    HasAssessmentFor,
    HasAssociatedVulnerability,
    HasConcludedLicense,
    HasDataFile,
    HasDeclaredLicense,
    HasDeletedFile,
    HasDependencyManifest,
    HasDistributionArtifact,
    HasDocumentation,
    HasDynamicLink,
    HasEvidence,
    HasExample,
    HasHost,
    HasInput,
    HasMetadata,
    HasOptionalComponent,
    HasOptionalDependency,
    HasOutput,
    HasPrerequisite,
    HasProvidedDependency,
    HasRequirement,
    HasSpecification,
    HasStaticLink,
    HasTest,
    HasTestCase,
    HasVariant,
    InvokedBy,
    ModifiedBy,
    Other,
    PackagedBy,
    PatchedBy,
    PublishedBy,
    ReportedBy,
    RepublishedBy,
    SerializedInArtifact,
    TestedOn,
    TrainedOn,
    UnderInvestigationFor,
    UsesTool,
}

model_enum!(RelationshipType, RELATIONSHIP_TYPE);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::VariantNames,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RelationshipCompleteness {
    Complete,
    Incomplete,
    NoAssertion,
}

model_enum!(RelationshipCompleteness, RELATIONSHIP_COMPLETENESS);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::VariantNames,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum LifecycleScopeType {
    Build,
    Design,
    Development,
    Other,
    Runtime,
    Test,
}

model_enum!(LifecycleScopeType, LIFECYCLE_SCOPE_TYPE);

/// Field specifications of the relationship base kind.
///
/// `name` is optional here, unlike in the package family.
pub static RELATIONSHIP_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("name", TypeDescriptor::String),
    FieldSpec::required("from_element", TypeDescriptor::String),
    FieldSpec::optional("to", TypeDescriptor::List(&TypeDescriptor::String)),
    FieldSpec::required("relationship_type", TypeDescriptor::Enum(&RELATIONSHIP_TYPE)),
    FieldSpec::optional(
        "completeness",
        TypeDescriptor::Enum(&RELATIONSHIP_COMPLETENESS),
    ),
    FieldSpec::optional("start_time", TypeDescriptor::DateTime),
    FieldSpec::optional("end_time", TypeDescriptor::DateTime),
];

/// Additional fields of relationships scoped to a lifecycle phase.
pub static LIFECYCLE_SCOPED_RELATIONSHIP_FIELDS: &[FieldSpec] = &[FieldSpec::optional(
    "scope",
    TypeDescriptor::Enum(&LIFECYCLE_SCOPE_TYPE),
)];
