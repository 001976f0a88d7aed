use serde::{Deserialize, Serialize};

use crate::record::{model_enum, FieldMap, ToValue, Value};
use crate::shared::{ModelError, Result};

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
pub enum ExternalIdentifierType {
    Cpe22,
    Cpe23,
    Cve,
    Email,
    Gitoid,
    Other,
    PackageUrl,
    SecurityOther,
    Swhid,
    Swid,
    UrlScheme,
}

model_enum!(ExternalIdentifierType, EXTERNAL_IDENTIFIER_TYPE);

/// An identifier for an element in some external naming scheme (purl, CPE,
/// CVE id, and so on).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalIdentifier {
    external_identifier_type: ExternalIdentifierType,
    identifier: String,
    comment: Option<String>,
    identifier_locator: Vec<String>,
    issuing_authority: Option<String>,
}

impl ExternalIdentifier {
    pub const KIND: &'static str = "ExternalIdentifier";

    pub fn new(
        external_identifier_type: ExternalIdentifierType,
        identifier: impl Into<String>,
        comment: Option<String>,
        identifier_locator: Vec<String>,
        issuing_authority: Option<String>,
    ) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(ModelError::validation(
                Self::KIND,
                "identifier",
                "must not be empty",
            ));
        }
        Ok(Self {
            external_identifier_type,
            identifier,
            comment,
            identifier_locator,
            issuing_authority,
        })
    }

    pub fn external_identifier_type(&self) -> ExternalIdentifierType {
        self.external_identifier_type
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn identifier_locator(&self) -> &[String] {
        &self.identifier_locator
    }

    pub fn issuing_authority(&self) -> Option<&str> {
        self.issuing_authority.as_deref()
    }
}

impl ToValue for ExternalIdentifier {
    fn to_value(&self) -> Value {
        let mut fields = FieldMap::new();
        fields.insert(
            "external_identifier_type".to_string(),
            self.external_identifier_type.to_value(),
        );
        fields.insert("identifier".to_string(), self.identifier.to_value());
        fields.insert("comment".to_string(), self.comment.to_value());
        fields.insert(
            "identifier_locator".to_string(),
            self.identifier_locator.to_value(),
        );
        fields.insert(
            "issuing_authority".to_string(),
            self.issuing_authority.to_value(),
        );
        Value::Record {
            kind: Self::KIND.to_string(),
            fields,
        }
    }
}
