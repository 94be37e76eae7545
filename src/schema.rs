//! # Schema Model
//!
//! The in-memory representation of an OpenAPI-style schema node, plus the
//! shim structs that reshape the wire form during deserialization.
//!
//! On the wire `additionalProperties` is either a boolean or a nested schema
//! object. The working model keeps the allowed-flag and the nested schema as
//! two independent fields (matching the OpenAPI object model), so a shim
//! captures the raw union and the conversion splits it.

use indexmap::IndexMap;
use serde::Deserialize;

/// A single schema node describing the allowed shape of a JSON value.
///
/// Every constraint is optional; a node with no `type` matches no rule and
/// any instance passes against it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ShimSchemaNode")]
pub struct SchemaNode {
    /// The declared JSON type (`"object"`, `"string"`, ...), if any.
    pub schema_type: Option<String>,

    /// Upper bound on an object's property count.
    pub max_properties: Option<u64>,
    /// Lower bound on an object's property count.
    pub min_properties: Option<u64>,
    /// Property names that must be present on a conforming object.
    pub required: Vec<String>,
    /// Declared properties, in schema declaration order.
    pub properties: IndexMap<String, SchemaNode>,
    /// Whether keys outside `properties` are allowed at all. Defaults true.
    pub additional_properties_allowed: bool,
    /// Schema applied to keys outside `properties`, if declared.
    pub additional_properties: Option<Box<SchemaNode>>,

    /// Upper bound on a string's character count.
    pub max_length: Option<u64>,
    /// Lower bound on a string's character count.
    pub min_length: Option<u64>,

    /// Upper bound on a numeric value.
    pub maximum: Option<f64>,
    /// Lower bound on a numeric value.
    pub minimum: Option<f64>,
    /// Required divisor of a numeric value.
    pub multiple_of: Option<f64>,

    /// Upper bound on an array's element count.
    pub max_items: Option<u64>,
    /// Lower bound on an array's element count.
    pub min_items: Option<u64>,
    /// Whether array elements must be pairwise distinct. Defaults false.
    pub unique_items: bool,
    /// Schema applied to every array element, if declared.
    pub items: Option<Box<SchemaNode>>,
}

impl Default for SchemaNode {
    fn default() -> Self {
        SchemaNode {
            schema_type: None,
            max_properties: None,
            min_properties: None,
            required: Vec::new(),
            properties: IndexMap::new(),
            additional_properties_allowed: true,
            additional_properties: None,
            max_length: None,
            min_length: None,
            maximum: None,
            minimum: None,
            multiple_of: None,
            max_items: None,
            min_items: None,
            unique_items: false,
            items: None,
        }
    }
}

impl SchemaNode {
    /// A node with only `type` set and every constraint at its default.
    pub fn of_type(schema_type: &str) -> Self {
        SchemaNode {
            schema_type: Some(schema_type.to_string()),
            ..SchemaNode::default()
        }
    }
}

/// Shim matching the wire shape of a schema node.
///
/// We use this instead of deserializing `SchemaNode` directly so the
/// bool-or-object form of `additionalProperties` can be captured before
/// being split into the two working-model fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShimSchemaNode {
    #[serde(rename = "type")]
    schema_type: Option<String>,
    max_properties: Option<u64>,
    min_properties: Option<u64>,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    properties: IndexMap<String, SchemaNode>,
    additional_properties: Option<ShimAdditionalProperties>,
    max_length: Option<u64>,
    min_length: Option<u64>,
    maximum: Option<f64>,
    minimum: Option<f64>,
    multiple_of: Option<f64>,
    max_items: Option<u64>,
    min_items: Option<u64>,
    #[serde(default)]
    unique_items: bool,
    items: Option<Box<SchemaNode>>,
}

/// The raw `additionalProperties` union: a policy flag or a nested schema.
#[derive(Deserialize)]
#[serde(untagged)]
enum ShimAdditionalProperties {
    Allowed(bool),
    Schema(Box<SchemaNode>),
}

impl From<ShimSchemaNode> for SchemaNode {
    fn from(shim: ShimSchemaNode) -> Self {
        let (additional_properties_allowed, additional_properties) =
            match shim.additional_properties {
                Some(ShimAdditionalProperties::Allowed(allowed)) => (allowed, None),
                Some(ShimAdditionalProperties::Schema(schema)) => (true, Some(schema)),
                None => (true, None),
            };

        SchemaNode {
            schema_type: shim.schema_type,
            max_properties: shim.max_properties,
            min_properties: shim.min_properties,
            required: shim.required,
            properties: shim.properties,
            additional_properties_allowed,
            additional_properties,
            max_length: shim.max_length,
            min_length: shim.min_length,
            maximum: shim.maximum,
            minimum: shim.minimum,
            multiple_of: shim.multiple_of,
            max_items: shim.max_items,
            min_items: shim.min_items,
            unique_items: shim.unique_items,
            items: shim.items,
        }
    }
}
