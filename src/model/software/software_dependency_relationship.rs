use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::core::{
    CreationInfo, ExternalIdentifier, ExternalReference, Hash, LifecycleScopeType,
    RelationshipCompleteness, RelationshipType, ELEMENT_FIELDS,
    LIFECYCLE_SCOPED_RELATIONSHIP_FIELDS, RELATIONSHIP_FIELDS,
};
use crate::record::{
    compose_field_specs, model_enum, validate_fields, validator::require, FieldMap, FieldSpec,
    RecordKind, ToValue, TypeDescriptor,
};
use crate::shared::Result;

/// How a dependency is linked into the depending artifact.
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
pub enum SoftwareDependencyLinkType {
    Static,
    Dynamic,
    Tool,
    Other,
}

model_enum!(SoftwareDependencyLinkType, SOFTWARE_DEPENDENCY_LINK_TYPE);

/// Under what condition the dependency applies.
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
pub enum DependencyConditionalityType {
    Optional,
    Required,
    Provided,
    Prerequisite,
    Other,
}

model_enum!(DependencyConditionalityType, DEPENDENCY_CONDITIONALITY_TYPE);

/// Fields this kind adds to the lifecycle-scoped relationship base.
pub static SOFTWARE_DEPENDENCY_RELATIONSHIP_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(
        "software_linkage",
        TypeDescriptor::Enum(&SOFTWARE_DEPENDENCY_LINK_TYPE),
    ),
    FieldSpec::optional(
        "conditionality",
        TypeDescriptor::Enum(&DEPENDENCY_CONDITIONALITY_TYPE),
    ),
];

static COMPOSED_FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    compose_field_specs(
        SoftwareDependencyRelationship::KIND,
        &[
            ELEMENT_FIELDS,
            RELATIONSHIP_FIELDS,
            LIFECYCLE_SCOPED_RELATIONSHIP_FIELDS,
            SOFTWARE_DEPENDENCY_RELATIONSHIP_FIELDS,
        ],
    )
    .unwrap_or_else(|err| panic!("{err}"))
});

/// A dependency edge between software elements, scoped to a lifecycle
/// phase and qualified by linkage and conditionality.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareDependencyRelationship {
    spdx_id: String,
    creation_info: Option<CreationInfo>,
    summary: Option<String>,
    description: Option<String>,
    comment: Option<String>,
    verified_using: Vec<Hash>,
    external_reference: Vec<ExternalReference>,
    external_identifier: Vec<ExternalIdentifier>,
    extension: Option<String>,
    name: Option<String>,
    from_element: String,
    to: Vec<String>,
    relationship_type: RelationshipType,
    completeness: Option<RelationshipCompleteness>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    scope: Option<LifecycleScopeType>,
    software_linkage: Option<SoftwareDependencyLinkType>,
    conditionality: Option<DependencyConditionalityType>,
}

impl RecordKind for SoftwareDependencyRelationship {
    const KIND: &'static str = "SoftwareDependencyRelationship";

    fn field_specs() -> &'static [FieldSpec] {
        COMPOSED_FIELDS.as_slice()
    }
}

impl SoftwareDependencyRelationship {
    pub fn builder() -> SoftwareDependencyRelationshipBuilder {
        SoftwareDependencyRelationshipBuilder::default()
    }

    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    pub fn creation_info(&self) -> Option<&CreationInfo> {
        self.creation_info.as_ref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn verified_using(&self) -> &[Hash] {
        &self.verified_using
    }

    pub fn external_reference(&self) -> &[ExternalReference] {
        &self.external_reference
    }

    pub fn external_identifier(&self) -> &[ExternalIdentifier] {
        &self.external_identifier
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn from_element(&self) -> &str {
        &self.from_element
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship_type
    }

    pub fn completeness(&self) -> Option<RelationshipCompleteness> {
        self.completeness
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn scope(&self) -> Option<LifecycleScopeType> {
        self.scope
    }

    pub fn software_linkage(&self) -> Option<SoftwareDependencyLinkType> {
        self.software_linkage
    }

    pub fn conditionality(&self) -> Option<DependencyConditionalityType> {
        self.conditionality
    }
}

/// Builder for [`SoftwareDependencyRelationship`].
#[derive(Debug, Default)]
pub struct SoftwareDependencyRelationshipBuilder {
    spdx_id: Option<String>,
    creation_info: Option<CreationInfo>,
    summary: Option<String>,
    description: Option<String>,
    comment: Option<String>,
    verified_using: Option<Vec<Hash>>,
    external_reference: Option<Vec<ExternalReference>>,
    external_identifier: Option<Vec<ExternalIdentifier>>,
    extension: Option<String>,
    name: Option<String>,
    from_element: Option<String>,
    to: Option<Vec<String>>,
    relationship_type: Option<RelationshipType>,
    completeness: Option<RelationshipCompleteness>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    scope: Option<LifecycleScopeType>,
    software_linkage: Option<SoftwareDependencyLinkType>,
    conditionality: Option<DependencyConditionalityType>,
}

impl SoftwareDependencyRelationshipBuilder {
    pub fn spdx_id(mut self, spdx_id: impl Into<String>) -> Self {
        self.spdx_id = Some(spdx_id.into());
        self
    }

    pub fn creation_info(mut self, creation_info: CreationInfo) -> Self {
        self.creation_info = Some(creation_info);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn verified_using(mut self, verified_using: Vec<Hash>) -> Self {
        self.verified_using = Some(verified_using);
        self
    }

    pub fn external_reference(mut self, external_reference: Vec<ExternalReference>) -> Self {
        self.external_reference = Some(external_reference);
        self
    }

    pub fn external_identifier(mut self, external_identifier: Vec<ExternalIdentifier>) -> Self {
        self.external_identifier = Some(external_identifier);
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn from_element(mut self, from_element: impl Into<String>) -> Self {
        self.from_element = Some(from_element.into());
        self
    }

    pub fn to(mut self, to: Vec<String>) -> Self {
        self.to = Some(to);
        self
    }

    pub fn relationship_type(mut self, relationship_type: RelationshipType) -> Self {
        self.relationship_type = Some(relationship_type);
        self
    }

    pub fn completeness(mut self, completeness: RelationshipCompleteness) -> Self {
        self.completeness = Some(completeness);
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn scope(mut self, scope: LifecycleScopeType) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn software_linkage(mut self, software_linkage: SoftwareDependencyLinkType) -> Self {
        self.software_linkage = Some(software_linkage);
        self
    }

    pub fn conditionality(mut self, conditionality: DependencyConditionalityType) -> Self {
        self.conditionality = Some(conditionality);
        self
    }

    fn to_field_map(&self) -> FieldMap {
        let mut supplied = FieldMap::new();
        supplied.insert("spdx_id".to_string(), self.spdx_id.to_value());
        supplied.insert("creation_info".to_string(), self.creation_info.to_value());
        supplied.insert("summary".to_string(), self.summary.to_value());
        supplied.insert("description".to_string(), self.description.to_value());
        supplied.insert("comment".to_string(), self.comment.to_value());
        supplied.insert("verified_using".to_string(), self.verified_using.to_value());
        supplied.insert(
            "external_reference".to_string(),
            self.external_reference.to_value(),
        );
        supplied.insert(
            "external_identifier".to_string(),
            self.external_identifier.to_value(),
        );
        supplied.insert("extension".to_string(), self.extension.to_value());
        supplied.insert("name".to_string(), self.name.to_value());
        supplied.insert("from_element".to_string(), self.from_element.to_value());
        supplied.insert("to".to_string(), self.to.to_value());
        supplied.insert(
            "relationship_type".to_string(),
            self.relationship_type.to_value(),
        );
        supplied.insert("completeness".to_string(), self.completeness.to_value());
        supplied.insert("start_time".to_string(), self.start_time.to_value());
        supplied.insert("end_time".to_string(), self.end_time.to_value());
        supplied.insert("scope".to_string(), self.scope.to_value());
        supplied.insert(
            "software_linkage".to_string(),
            self.software_linkage.to_value(),
        );
        supplied.insert("conditionality".to_string(), self.conditionality.to_value());
        supplied
    }

    pub fn build(self) -> Result<SoftwareDependencyRelationship> {
        let mut builder = self;
        // Absent optional collection arguments become fresh containers owned
        // by this instance, never a default shared across calls.
        builder.verified_using.get_or_insert_with(Vec::new);
        builder.external_reference.get_or_insert_with(Vec::new);
        builder.external_identifier.get_or_insert_with(Vec::new);
        builder.to.get_or_insert_with(Vec::new);

        let supplied = builder.to_field_map();
        validate_fields(
            SoftwareDependencyRelationship::KIND,
            SoftwareDependencyRelationship::field_specs(),
            &supplied,
        )?;

        let kind = SoftwareDependencyRelationship::KIND;
        Ok(SoftwareDependencyRelationship {
            spdx_id: require(kind, "spdx_id", builder.spdx_id)?,
            creation_info: builder.creation_info,
            summary: builder.summary,
            description: builder.description,
            comment: builder.comment,
            verified_using: builder.verified_using.unwrap_or_default(),
            external_reference: builder.external_reference.unwrap_or_default(),
            external_identifier: builder.external_identifier.unwrap_or_default(),
            extension: builder.extension,
            name: builder.name,
            from_element: require(kind, "from_element", builder.from_element)?,
            to: builder.to.unwrap_or_default(),
            relationship_type: require(kind, "relationship_type", builder.relationship_type)?,
            completeness: builder.completeness,
            start_time: builder.start_time,
            end_time: builder.end_time,
            scope: builder.scope,
            software_linkage: builder.software_linkage,
            conditionality: builder.conditionality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use crate::shared::ModelError;

    fn create_test_builder() -> SoftwareDependencyRelationshipBuilder {
        SoftwareDependencyRelationship::builder()
            .spdx_id("rel1")
            .from_element("pkg1")
            .relationship_type(RelationshipType::DependsOn)
    }

    #[test]
    fn test_dependency_relationship_minimal() {
        let relationship = create_test_builder()
            .software_linkage(SoftwareDependencyLinkType::Static)
            .build()
            .unwrap();
        assert_eq!(relationship.spdx_id(), "rel1");
        assert_eq!(relationship.from_element(), "pkg1");
        assert_eq!(
            relationship.relationship_type(),
            RelationshipType::DependsOn
        );
        assert_eq!(
            relationship.software_linkage(),
            Some(SoftwareDependencyLinkType::Static)
        );
        assert!(relationship.conditionality().is_none());
        assert!(relationship.name().is_none());
    }

    #[test]
    fn test_dependency_relationship_to_defaults_empty() {
        let first = create_test_builder().build().unwrap();
        let second = create_test_builder().build().unwrap();
        assert!(first.to().is_empty());
        assert!(second.to().is_empty());
    }

    #[test]
    fn test_dependency_relationship_missing_from_element() {
        let error = SoftwareDependencyRelationship::builder()
            .spdx_id("rel1")
            .relationship_type(RelationshipType::DependsOn)
            .build()
            .unwrap_err();
        match error {
            ModelError::MissingRequiredField { field, .. } => assert_eq!(field, "from_element"),
            other => panic!("expected missing required field error, got {:?}", other),
        }
    }

    #[test]
    fn test_dependency_relationship_rejects_wrong_enum_kind() {
        let mut supplied = create_test_builder().to_field_map();
        // A lifecycle scope is not a valid conditionality, even though both
        // are enum variants.
        supplied.insert(
            "conditionality".to_string(),
            Value::from_enum(LifecycleScopeType::Runtime),
        );
        let error = SoftwareDependencyRelationship::validate(&supplied).unwrap_err();
        match error {
            ModelError::FieldType {
                field, expected, ..
            } => {
                assert_eq!(field, "conditionality");
                assert_eq!(expected, "enum DependencyConditionalityType");
            }
            other => panic!("expected field type error, got {:?}", other),
        }
    }

    #[test]
    fn test_dependency_relationship_validate_raw_map() {
        let supplied = create_test_builder()
            .conditionality(DependencyConditionalityType::Prerequisite)
            .to_field_map();
        let instance = SoftwareDependencyRelationship::validate(&supplied).unwrap();
        assert_eq!(instance.kind(), SoftwareDependencyRelationship::KIND);
        assert!(instance.is_set("conditionality"));
        assert!(!instance.is_set("scope"));
    }

    #[test]
    fn test_dependency_relationship_field_specs_compose() {
        let specs = SoftwareDependencyRelationship::field_specs();
        let names: Vec<&str> = specs.iter().map(|spec| spec.name).collect();
        assert!(names.contains(&"spdx_id"));
        assert!(names.contains(&"scope"));
        assert!(names.contains(&"software_linkage"));
        // Own fields come after the inherited ones.
        assert_eq!(names.last(), Some(&"conditionality"));
    }
}
