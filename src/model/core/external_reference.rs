use serde::{Deserialize, Serialize};

use crate::record::{model_enum, FieldMap, ToValue, Value};

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
pub enum ExternalReferenceType {
    AltDownloadLocation,
    AltWebPage,
    BinaryArtifact,
    Bom,
    BuildMeta,
    BuildSystem,
    Certification,
    Documentation,
    Funding,
    IssueTracker,
    License,
    MailingList,
    Metrics,
    Other,
    ReleaseHistory,
    ReleaseNotes,
    SecurityAdvisory,
    SecurityFix,
    SecurityOther,
    SourceArtifact,
    Support,
    Vcs,
}

model_enum!(ExternalReferenceType, EXTERNAL_REFERENCE_TYPE);

/// A pointer to a resource outside the SBOM document, such as a project
/// home page or a security advisory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalReference {
    external_reference_type: ExternalReferenceType,
    locator: Vec<String>,
    content_type: Option<String>,
    comment: Option<String>,
}

impl ExternalReference {
    pub const KIND: &'static str = "ExternalReference";

    pub fn new(
        external_reference_type: ExternalReferenceType,
        locator: Vec<String>,
        content_type: Option<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            external_reference_type,
            locator,
            content_type,
            comment,
        }
    }

    pub fn external_reference_type(&self) -> ExternalReferenceType {
        self.external_reference_type
    }

    pub fn locator(&self) -> &[String] {
        &self.locator
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl ToValue for ExternalReference {
    fn to_value(&self) -> Value {
        let mut fields = FieldMap::new();
        fields.insert(
            "external_reference_type".to_string(),
            self.external_reference_type.to_value(),
        );
        fields.insert("locator".to_string(), self.locator.to_value());
        fields.insert("content_type".to_string(), self.content_type.to_value());
        fields.insert("comment".to_string(), self.comment.to_value());
        Value::Record {
            kind: Self::KIND.to_string(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_reference_new() {
        let reference = ExternalReference::new(
            ExternalReferenceType::SecurityAdvisory,
            vec!["https://example.org/advisory".to_string()],
            Some("text/html".to_string()),
            None,
        );
        assert_eq!(
            reference.external_reference_type(),
            ExternalReferenceType::SecurityAdvisory
        );
        assert_eq!(reference.locator().len(), 1);
        assert_eq!(reference.content_type(), Some("text/html"));
    }

    #[test]
    fn test_external_reference_to_value_kind_tag() {
        let reference =
            ExternalReference::new(ExternalReferenceType::Vcs, vec![], None, None);
        match reference.to_value() {
            Value::Record { kind, .. } => assert_eq!(kind, ExternalReference::KIND),
            other => panic!("expected record value, got {}", other.type_name()),
        }
    }
}
