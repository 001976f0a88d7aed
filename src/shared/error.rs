use thiserror::Error;

/// Errors raised while defining record kinds or constructing record instances.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
/// Every message names the record kind and field so a caller can correct
/// the call site without source inspection.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("missing required field \"{field}\" of {record_kind}")]
    MissingRequiredField { record_kind: String, field: String },

    #[error("field \"{field}\" of {record_kind} expects {expected}, got {actual}")]
    FieldType {
        record_kind: String,
        field: String,
        expected: String,
        actual: String,
    },

    #[error("field \"{field}\" is declared more than once across the {record_kind} hierarchy")]
    DuplicateFieldDeclaration { record_kind: String, field: String },

    /// Business-rule violation layered above the generic type check.
    #[error("invalid value for field \"{field}\" of {record_kind}: {message}")]
    Validation {
        record_kind: String,
        field: String,
        message: String,
    },
}

impl ModelError {
    pub(crate) fn missing_required(record_kind: &str, field: &str) -> Self {
        ModelError::MissingRequiredField {
            record_kind: record_kind.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn validation(record_kind: &str, field: &str, message: impl Into<String>) -> Self {
        ModelError::Validation {
            record_kind: record_kind.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_display() {
        let error = ModelError::missing_required("DatasetPackage", "dataset_type");
        let display = format!("{}", error);
        assert!(display.contains("missing required field"));
        assert!(display.contains("dataset_type"));
        assert!(display.contains("DatasetPackage"));
    }

    #[test]
    fn test_field_type_display() {
        let error = ModelError::FieldType {
            record_kind: "DatasetPackage".to_string(),
            field: "confidentiality_level".to_string(),
            expected: "enum ConfidentialityLevelType".to_string(),
            actual: "string".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("confidentiality_level"));
        assert!(display.contains("DatasetPackage"));
        assert!(display.contains("expects enum ConfidentialityLevelType"));
        assert!(display.contains("got string"));
    }

    #[test]
    fn test_duplicate_field_declaration_display() {
        let error = ModelError::DuplicateFieldDeclaration {
            record_kind: "DatasetPackage".to_string(),
            field: "name".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("declared more than once"));
        assert!(display.contains("\"name\""));
        assert!(display.contains("DatasetPackage"));
    }

    #[test]
    fn test_validation_display() {
        let error = ModelError::validation("DatasetPackage", "dataset_size", "must not be negative");
        let display = format!("{}", error);
        assert!(display.contains("dataset_size"));
        assert!(display.contains("must not be negative"));
    }
}
