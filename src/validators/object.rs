//! # Object Rule
//!
//! Checks a JSON object against an `object` schema node: property-count
//! bounds, required keys, per-property dispatch, and the
//! additional-properties policy.

use crate::path::InstancePath;
use crate::report::ValidationReport;
use crate::schema::SchemaNode;
use crate::validators::{SchemaRule, ValueValidator};
use serde_json::Value;

/// Validation rule for `type: object` schemas.
pub struct ObjectRule;

impl SchemaRule for ObjectRule {
    fn can_validate(&self, schema: &SchemaNode) -> bool {
        schema.schema_type.as_deref() == Some("object")
    }

    fn validate(
        &self,
        schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
        validator: &dyn ValueValidator,
    ) -> ValidationReport {
        let Value::Object(members) = instance else {
            return ValidationReport::from_errors(vec![format!(
                "Path: {}. Instance is not of type 'object'",
                path
            )]);
        };

        let mut errors = Vec::new();

        // maxProperties
        if let Some(max) = schema.max_properties {
            if members.len() as u64 > max {
                errors.push(format!(
                    "Path: {}. Number of properties is greater than maxProperties",
                    path
                ));
            }
        }

        // minProperties
        if let Some(min) = schema.min_properties {
            if (members.len() as u64) < min {
                errors.push(format!(
                    "Path: {}. Number of properties is less than minProperties",
                    path
                ));
            }
        }

        // required: one finding no matter how many names are absent
        if schema
            .required
            .iter()
            .any(|name| !members.contains_key(name))
        {
            errors.push(format!("Path: {}. Required property(s) not present", path));
        }

        for (name, value) in members {
            let property_path = path.child(name);

            // properties
            if let Some(property_schema) = schema.properties.get(name) {
                errors.extend(
                    validator
                        .validate_value(property_schema, value, &property_path)
                        .into_errors(),
                );
                continue;
            }

            if !schema.additional_properties_allowed {
                errors.push(format!("Path: {}. Additional properties not allowed", path));
            }

            // additionalProperties
            if let Some(additional_schema) = &schema.additional_properties {
                errors.extend(
                    validator
                        .validate_value(additional_schema, value, &property_path)
                        .into_errors(),
                );
            }
        }

        ValidationReport::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::SchemaValidator;
    use serde_json::json;

    /// Seam stub that rejects every value with one canned finding.
    struct RejectEverything;

    impl ValueValidator for RejectEverything {
        fn validate_value(
            &self,
            _schema: &SchemaNode,
            _instance: &Value,
            path: &InstancePath,
        ) -> ValidationReport {
            ValidationReport::from_errors(vec![format!("Path: {}. rejected", path)])
        }
    }

    fn object_schema() -> SchemaNode {
        SchemaNode::of_type("object")
    }

    #[test]
    fn test_non_object_short_circuits() {
        let mut schema = object_schema();
        schema.min_properties = Some(3);
        schema.required = vec!["id".to_string()];

        let report =
            ObjectRule.validate(&schema, &json!("text"), &InstancePath::root(), &RejectEverything);

        // The type finding is the only one; no cardinality or required checks ran.
        assert_eq!(
            report.errors(),
            ["Path: $. Instance is not of type 'object'"]
        );
    }

    #[test]
    fn test_max_properties_fires_once() {
        let mut schema = object_schema();
        schema.max_properties = Some(1);

        let report = SchemaValidator::new().validate(&schema, &json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(
            report.errors(),
            ["Path: $. Number of properties is greater than maxProperties"]
        );
    }

    #[test]
    fn test_min_properties_fires_once() {
        let mut schema = object_schema();
        schema.min_properties = Some(4);

        let report = SchemaValidator::new().validate(&schema, &json!({"a": 1}));
        assert_eq!(
            report.errors(),
            ["Path: $. Number of properties is less than minProperties"]
        );
    }

    #[test]
    fn test_required_reports_single_finding_for_many_missing() {
        let mut schema = object_schema();
        schema.required = vec!["id".to_string(), "name".to_string(), "tag".to_string()];

        let report = SchemaValidator::new().validate(&schema, &json!({}));
        assert_eq!(report.errors(), ["Path: $. Required property(s) not present"]);
    }

    #[test]
    fn test_declared_property_skips_additional_checks() {
        let mut schema = object_schema();
        schema
            .properties
            .insert("id".to_string(), SchemaNode::of_type("integer"));
        schema.additional_properties_allowed = false;

        let report = SchemaValidator::new().validate(&schema, &json!({"id": 7}));
        assert!(report.passed());
    }

    #[test]
    fn test_undeclared_key_not_allowed() {
        let mut schema = object_schema();
        schema.additional_properties_allowed = false;

        let report = SchemaValidator::new().validate(&schema, &json!({"extra": 1}));
        assert_eq!(report.errors(), ["Path: $. Additional properties not allowed"]);
    }

    #[test]
    fn test_not_allowed_and_additional_schema_both_fire() {
        // allowed = false AND a nested schema present: the flag finding and
        // the nested findings are both reported for the same key.
        let mut schema = object_schema();
        schema.additional_properties_allowed = false;
        schema.additional_properties = Some(Box::new(SchemaNode::of_type("string")));

        let report = SchemaValidator::new().validate(&schema, &json!({"extra": 1}));
        assert_eq!(
            report.errors(),
            [
                "Path: $. Additional properties not allowed",
                "Path: $.extra. Instance is not of type 'string'",
            ]
        );
    }

    #[test]
    fn test_nested_findings_flatten_in_instance_key_order() {
        let mut schema = object_schema();
        schema
            .properties
            .insert("b".to_string(), SchemaNode::of_type("string"));
        schema
            .properties
            .insert("a".to_string(), SchemaNode::of_type("string"));

        // Instance order (b then a) wins over schema declaration order.
        let instance = json!({"b": 1, "a": 2});
        let report = ObjectRule.validate(
            &schema,
            &instance,
            &InstancePath::root(),
            &RejectEverything,
        );
        assert_eq!(report.errors(), ["Path: $.b. rejected", "Path: $.a. rejected"]);
    }

    #[test]
    fn test_additional_schema_alone_validates_unmatched_keys() {
        let mut schema = object_schema();
        schema.additional_properties = Some(Box::new(SchemaNode::of_type("integer")));

        let validator = SchemaValidator::new();
        assert!(validator.validate(&schema, &json!({"x": 1, "y": 2})).passed());

        let report = validator.validate(&schema, &json!({"x": "nope"}));
        assert_eq!(
            report.errors(),
            ["Path: $.x. Instance is not of type 'integer'"]
        );
    }
}
