//! # Instance Paths
//!
//! JSONPath-style locations for instance values (`$`, `$.items[0].name`).
//!
//! A path is carried alongside the value during validation and is only used
//! to prefix diagnostic messages. Property names that do not look like plain
//! identifiers are rendered in bracket form (`$['odd key']`).

use regex::Regex;
use std::fmt::Display;

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// One step from a JSON value to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    /// Descent into an object property.
    Key(String),
    /// Descent into an array element.
    Index(usize),
}

/// The location of an instance value within the document being validated.
///
/// Starts at the document root (`$`) and grows as validation descends into
/// object properties and array elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    /// The path of the document root, rendered as `$`.
    pub fn root() -> Self {
        InstancePath::default()
    }

    /// The path of the property `name` under this path.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(name.to_string()));
        InstancePath { segments }
    }

    /// The path of the array element `index` under this path.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        InstancePath { segments }
    }
}

impl Display for InstancePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let identifier = Regex::new(IDENTIFIER_PATTERN).expect("Invalid regex constant");
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(name) if identifier.is_match(name) => write!(f, ".{}", name)?,
                PathSegment::Key(name) => write!(f, "['{}']", name)?,
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_dollar() {
        assert_eq!(InstancePath::root().to_string(), "$");
    }

    #[test]
    fn test_nested_properties_and_indices() {
        let path = InstancePath::root().child("items").index(0).child("name");
        assert_eq!(path.to_string(), "$.items[0].name");
    }

    #[test]
    fn test_non_identifier_keys_use_brackets() {
        let path = InstancePath::root().child("odd key").child("ok");
        assert_eq!(path.to_string(), "$['odd key'].ok");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = InstancePath::root().child("a");
        let _ = parent.child("b");
        assert_eq!(parent.to_string(), "$.a");
    }
}
