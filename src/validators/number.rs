//! # Number Rule
//!
//! Checks JSON numbers against `number` and `integer` schema nodes: range
//! bounds and `multipleOf`. The `integer` type additionally requires the
//! instance to be an integral token (a float such as `3.0` does not
//! qualify, mirroring the distinct integer/float token kinds of JSON
//! parsers).

use crate::path::InstancePath;
use crate::report::ValidationReport;
use crate::schema::SchemaNode;
use crate::validators::{SchemaRule, ValueValidator};
use serde_json::Value;

/// Validation rule for `type: number` and `type: integer` schemas.
pub struct NumberRule;

impl SchemaRule for NumberRule {
    fn can_validate(&self, schema: &SchemaNode) -> bool {
        matches!(
            schema.schema_type.as_deref(),
            Some("number") | Some("integer")
        )
    }

    fn validate(
        &self,
        schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
        _validator: &dyn ValueValidator,
    ) -> ValidationReport {
        let type_name = schema.schema_type.as_deref().unwrap_or("number");

        let Value::Number(number) = instance else {
            return ValidationReport::from_errors(vec![format!(
                "Path: {}. Instance is not of type '{}'",
                path, type_name
            )]);
        };

        if type_name == "integer" && number.as_i64().is_none() && number.as_u64().is_none() {
            return ValidationReport::from_errors(vec![format!(
                "Path: {}. Instance is not of type 'integer'",
                path
            )]);
        }

        let value = number.as_f64().unwrap_or(f64::NAN);
        let mut errors = Vec::new();

        if let Some(max) = schema.maximum {
            if value > max {
                errors.push(format!("Path: {}. Number is greater than maximum", path));
            }
        }

        if let Some(min) = schema.minimum {
            if value < min {
                errors.push(format!("Path: {}. Number is less than minimum", path));
            }
        }

        if let Some(divisor) = schema.multiple_of {
            if value % divisor != 0.0 {
                errors.push(format!(
                    "Path: {}. Number is not a multiple of multipleOf",
                    path
                ));
            }
        }

        ValidationReport::from_errors(errors)
    }
}
