//! # Array Rule
//!
//! Checks a JSON array against an `array` schema node: element-count
//! bounds, uniqueness, and per-element `items` recursion.

use crate::path::InstancePath;
use crate::report::ValidationReport;
use crate::schema::SchemaNode;
use crate::validators::{SchemaRule, ValueValidator};
use serde_json::Value;

/// Validation rule for `type: array` schemas.
pub struct ArrayRule;

impl SchemaRule for ArrayRule {
    fn can_validate(&self, schema: &SchemaNode) -> bool {
        schema.schema_type.as_deref() == Some("array")
    }

    fn validate(
        &self,
        schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
        validator: &dyn ValueValidator,
    ) -> ValidationReport {
        let Value::Array(elements) = instance else {
            return ValidationReport::from_errors(vec![format!(
                "Path: {}. Instance is not of type 'array'",
                path
            )]);
        };

        let mut errors = Vec::new();

        // maxItems
        if let Some(max) = schema.max_items {
            if elements.len() as u64 > max {
                errors.push(format!(
                    "Path: {}. Number of items is greater than maxItems",
                    path
                ));
            }
        }

        // minItems
        if let Some(min) = schema.min_items {
            if (elements.len() as u64) < min {
                errors.push(format!(
                    "Path: {}. Number of items is less than minItems",
                    path
                ));
            }
        }

        // uniqueItems: one finding on the first duplicate
        if schema.unique_items
            && elements
                .iter()
                .enumerate()
                .any(|(i, element)| elements[..i].contains(element))
        {
            errors.push(format!("Path: {}. Array items are not unique", path));
        }

        // items
        if let Some(item_schema) = &schema.items {
            for (index, element) in elements.iter().enumerate() {
                errors.extend(
                    validator
                        .validate_value(item_schema, element, &path.index(index))
                        .into_errors(),
                );
            }
        }

        ValidationReport::from_errors(errors)
    }
}
