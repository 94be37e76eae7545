//! # Schema Rules
//!
//! One rule per JSON type, each exposing a capability predicate, plus the
//! `SchemaValidator` dispatcher that owns the rule set.
//!
//! Rules recurse into nested schemas through the `ValueValidator` seam
//! rather than calling each other directly, so a rule never knows the
//! concrete logic of the types nested under it.

pub mod array;
pub mod boolean;
pub mod null;
pub mod number;
pub mod object;
pub mod string;

use crate::path::InstancePath;
use crate::report::ValidationReport;
use crate::schema::SchemaNode;
use serde_json::Value;

/// The recursion seam: validates a value against a schema of any type.
///
/// Rules receive an implementation by reference and delegate nested
/// property/element values to it.
pub trait ValueValidator {
    /// Validates `instance` (located at `path`) against `schema`.
    fn validate_value(
        &self,
        schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
    ) -> ValidationReport;
}

/// A validation rule for one schema type.
pub trait SchemaRule {
    /// True iff this rule applies to `schema` (its declared type matches).
    fn can_validate(&self, schema: &SchemaNode) -> bool;

    /// Checks `instance` against `schema`, recursing through `validator`
    /// for nested values. Never fails; findings go into the report.
    fn validate(
        &self,
        schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
        validator: &dyn ValueValidator,
    ) -> ValidationReport;
}

/// Dispatcher over the full rule set.
///
/// Runs every rule whose predicate accepts the schema and flattens their
/// findings into one report. A schema whose type matches no rule yields a
/// pass.
pub struct SchemaValidator {
    rules: Vec<Box<dyn SchemaRule>>,
}

impl SchemaValidator {
    /// Builds a validator with the standard rule set.
    pub fn new() -> Self {
        SchemaValidator {
            rules: vec![
                Box::new(null::NullRule),
                Box::new(boolean::BooleanRule),
                Box::new(object::ObjectRule),
                Box::new(array::ArrayRule),
                Box::new(string::StringRule),
                Box::new(number::NumberRule),
            ],
        }
    }

    /// Validates a whole document: `instance` against `schema`, rooted at `$`.
    pub fn validate(&self, schema: &SchemaNode, instance: &Value) -> ValidationReport {
        self.validate_value(schema, instance, &InstancePath::root())
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        SchemaValidator::new()
    }
}

impl ValueValidator for SchemaValidator {
    fn validate_value(
        &self,
        schema: &SchemaNode,
        instance: &Value,
        path: &InstancePath,
    ) -> ValidationReport {
        let mut errors = Vec::new();
        for rule in &self.rules {
            if rule.can_validate(schema) {
                errors.extend(rule.validate(schema, instance, path, self).into_errors());
            }
        }
        ValidationReport::from_errors(errors)
    }
}
