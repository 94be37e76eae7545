//! # Boolean Rule
//!
//! Type check only: a `boolean` schema node carries no further keywords.

use crate::path::InstancePath;
use crate::report::ValidationReport;
use crate::schema::SchemaNode;
use crate::validators::{SchemaRule, ValueValidator};
use serde_json::Value;

/// Validation rule for `type: boolean` schemas.
pub struct BooleanRule;

impl SchemaRule for BooleanRule {
    fn can_validate(&self, schema: &SchemaNode) -> bool {
        schema.schema_type.as_deref() == Some("boolean")
    }

    fn validate(
        &self,
        _schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
        _validator: &dyn ValueValidator,
    ) -> ValidationReport {
        if instance.is_boolean() {
            return ValidationReport::new();
        }

        ValidationReport::from_errors(vec![format!(
            "Path: {}. Instance is not of type 'boolean'",
            path
        )])
    }
}
