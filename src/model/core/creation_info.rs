use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::{FieldMap, ToValue, Value};
use crate::shared::{ModelError, Result};

/// Provenance of an element: who created it, when, and against which
/// version of the specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationInfo {
    spec_version: String,
    created: DateTime<Utc>,
    created_by: Vec<String>,
    comment: Option<String>,
}

impl CreationInfo {
    pub const KIND: &'static str = "CreationInfo";

    pub fn new(
        spec_version: impl Into<String>,
        created: DateTime<Utc>,
        created_by: Vec<String>,
        comment: Option<String>,
    ) -> Result<Self> {
        let spec_version = spec_version.into();
        if spec_version.is_empty() {
            return Err(ModelError::validation(
                Self::KIND,
                "spec_version",
                "must not be empty",
            ));
        }
        if created_by.is_empty() {
            return Err(ModelError::validation(
                Self::KIND,
                "created_by",
                "at least one creating agent is required",
            ));
        }
        Ok(Self {
            spec_version,
            created,
            created_by,
            comment,
        })
    }

    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn created_by(&self) -> &[String] {
        &self.created_by
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl ToValue for CreationInfo {
    fn to_value(&self) -> Value {
        let mut fields = FieldMap::new();
        fields.insert("spec_version".to_string(), self.spec_version.to_value());
        fields.insert("created".to_string(), self.created.to_value());
        fields.insert("created_by".to_string(), self.created_by.to_value());
        fields.insert("comment".to_string(), self.comment.to_value());
        Value::Record {
            kind: Self::KIND.to_string(),
            fields,
        }
    }
}
