//! # String Rule
//!
//! Checks a JSON string against a `string` schema node: character-count
//! bounds only (`format` and `pattern` are not supported).

use crate::path::InstancePath;
use crate::report::ValidationReport;
use crate::schema::SchemaNode;
use crate::validators::{SchemaRule, ValueValidator};
use serde_json::Value;

/// Validation rule for `type: string` schemas.
pub struct StringRule;

impl SchemaRule for StringRule {
    fn can_validate(&self, schema: &SchemaNode) -> bool {
        schema.schema_type.as_deref() == Some("string")
    }

    fn validate(
        &self,
        schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
        _validator: &dyn ValueValidator,
    ) -> ValidationReport {
        let Value::String(text) = instance else {
            return ValidationReport::from_errors(vec![format!(
                "Path: {}. Instance is not of type 'string'",
                path
            )]);
        };

        // Character count, not byte count
        let length = text.chars().count() as u64;
        let mut errors = Vec::new();

        if let Some(max) = schema.max_length {
            if length > max {
                errors.push(format!(
                    "Path: {}. Number of characters is greater than maxLength",
                    path
                ));
            }
        }

        if let Some(min) = schema.min_length {
            if length < min {
                errors.push(format!(
                    "Path: {}. Number of characters is less than minLength",
                    path
                ));
            }
        }

        ValidationReport::from_errors(errors)
    }
}
