//! # Null Rule
//!
//! Type check only: a `null` schema node accepts exactly the null value.

use crate::path::InstancePath;
use crate::report::ValidationReport;
use crate::schema::SchemaNode;
use crate::validators::{SchemaRule, ValueValidator};
use serde_json::Value;

/// Validation rule for `type: null` schemas.
pub struct NullRule;

impl SchemaRule for NullRule {
    fn can_validate(&self, schema: &SchemaNode) -> bool {
        schema.schema_type.as_deref() == Some("null")
    }

    fn validate(
        &self,
        _schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
        _validator: &dyn ValueValidator,
    ) -> ValidationReport {
        if instance.is_null() {
            return ValidationReport::new();
        }

        ValidationReport::from_errors(vec![format!(
            "Path: {}. Instance is not of type 'null'",
            path
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::SchemaValidator;
    use serde_json::json;

    #[test]
    fn test_null_type_check() {
        let schema = SchemaNode::of_type("null");
        let validator = SchemaValidator::new();

        assert!(validator.validate(&schema, &json!(null)).passed());
        assert_eq!(
            validator.validate(&schema, &json!(false)).errors(),
            ["Path: $. Instance is not of type 'null'"]
        );
    }
}
