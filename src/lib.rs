#![deny(missing_docs)]

//! # OAS Check
//!
//! Validates parsed JSON instances against OpenAPI-style schema nodes and
//! reports human-readable diagnostics.
//!
//! The entry point is [`SchemaValidator`], which dispatches over one rule
//! per JSON type; rules recurse into nested schemas through the
//! [`ValueValidator`] seam. Validation never fails: findings accumulate in
//! a [`ValidationReport`], and a report passes iff it is empty.

/// Shared error types.
pub mod error;

/// Schema and instance loading.
pub mod loader;

/// Instance locations for diagnostics.
pub mod path;

/// Validation outcomes.
pub mod report;

/// The schema data model.
pub mod schema;

/// Per-type validation rules and the dispatcher.
pub mod validators;

pub use error::{AppError, AppResult};
pub use loader::{load_instance_file, load_schema_file, parse_schema_json, parse_schema_yaml};
pub use path::InstancePath;
pub use report::ValidationReport;
pub use schema::SchemaNode;
pub use validators::{SchemaRule, SchemaValidator, ValueValidator};
