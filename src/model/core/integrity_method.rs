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
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
    Other,
}

model_enum!(HashAlgorithm, HASH_ALGORITHM);

/// Integrity method: a hash over an element's content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hash {
    algorithm: HashAlgorithm,
    hash_value: String,
    comment: Option<String>,
}

impl Hash {
    pub const KIND: &'static str = "Hash";

    pub fn new(
        algorithm: HashAlgorithm,
        hash_value: impl Into<String>,
        comment: Option<String>,
    ) -> Result<Self> {
        let hash_value = hash_value.into();
        if hash_value.is_empty() {
            return Err(ModelError::validation(
                Self::KIND,
                "hash_value",
                "must not be empty",
            ));
        }
        if !hash_value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ModelError::validation(
                Self::KIND,
                "hash_value",
                "must contain only hexadecimal digits",
            ));
        }
        Ok(Self {
            algorithm,
            hash_value,
            comment,
        })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn hash_value(&self) -> &str {
        &self.hash_value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl ToValue for Hash {
    fn to_value(&self) -> Value {
        let mut fields = FieldMap::new();
        fields.insert("algorithm".to_string(), self.algorithm.to_value());
        fields.insert("hash_value".to_string(), self.hash_value.to_value());
        fields.insert("comment".to_string(), self.comment.to_value());
        Value::Record {
            kind: Self::KIND.to_string(),
            fields,
        }
    }
}
