use serde::Serialize;

use crate::record::{ToValue, Value};
use crate::shared::{ModelError, Result};

/// NewType wrapper for an SPDX license expression with validation.
///
/// Only the expression syntax's character set is checked here; resolving
/// license ids against a license list is a concern of the surrounding
/// tooling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LicenseExpression(String);

impl LicenseExpression {
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        if expression.is_empty() {
            return Err(ModelError::validation(
                "LicenseExpression",
                "expression",
                "must not be empty",
            ));
        }
        if !expression
            .chars()
            .all(|c| c.is_alphanumeric() || " .-+()".contains(c))
        {
            return Err(ModelError::validation(
                "LicenseExpression",
                "expression",
                "contains characters outside the SPDX expression syntax",
            ));
        }
        Ok(Self(expression))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToValue for LicenseExpression {
    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_expression_new_valid() {
        let expression = LicenseExpression::new("MIT OR Apache-2.0").unwrap();
        assert_eq!(expression.as_str(), "MIT OR Apache-2.0");
    }

    #[test]
    fn test_license_expression_new_empty() {
        let result = LicenseExpression::new("");
        assert!(result.is_err());
    }

    #[test]
    fn test_license_expression_new_invalid_characters() {
        let result = LicenseExpression::new("MIT; rm -rf /");
        assert!(result.is_err());
    }

    #[test]
    fn test_license_expression_display() {
        let expression = LicenseExpression::new("CC-BY-4.0").unwrap();
        assert_eq!(format!("{}", expression), "CC-BY-4.0");
    }

    #[test]
    fn test_license_expression_to_value() {
        let expression = LicenseExpression::new("MIT").unwrap();
        assert_eq!(expression.to_value(), Value::String("MIT".to_string()));
    }
}
