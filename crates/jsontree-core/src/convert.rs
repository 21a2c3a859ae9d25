//! Tree conversion: projects a [`JsonNode`] into [`ConvertedValue`]s.
//!
//! Object and array entry points check the node's shape first and fail with
//! [`TreeError::ShapeMismatch`] when it does not match. The general rule,
//! [`convert`], is total:
//!
//! | node shape        | result                                   |
//! |-------------------|------------------------------------------|
//! | absent / null     | `Null`                                   |
//! | object            | `Mapping`, fields in document order      |
//! | array             | `Sequence`, same length and order        |
//! | string            | the raw string, unquoted                 |
//! | number / boolean  | its printed form (`42`, `true`)          |
//!
//! Empty arrays are valid everywhere and yield empty results.
//!
//! # Example
//! ```
//! use jsontree_core::{convert, keys, parse_bytes, ConvertedValue};
//!
//! let node = parse_bytes(br#"{"id":7,"tags":["a","b"]}"#);
//! assert_eq!(keys(&node).unwrap(), ["id", "tags"]);
//!
//! let value = convert(Some(&node));
//! let map = value.as_mapping().unwrap();
//! assert_eq!(map["id"], ConvertedValue::from("7"));
//! ```

use crate::error::{Result, TreeError};
use crate::node::JsonNode;
use crate::value::{ConvertedValue, Mapping};
use indexmap::IndexMap;
use std::slice;

/// Convert an object node into an ordered mapping of converted children.
///
/// # Errors
///
/// [`TreeError::ShapeMismatch`] if `node` is not an object.
pub fn to_mapping(node: &JsonNode) -> Result<Mapping> {
    object_fields(node).map(project_fields)
}

/// Convert an array node into a sequence of converted elements.
///
/// # Errors
///
/// [`TreeError::ShapeMismatch`] if `node` is not an array.
pub fn to_sequence(node: &JsonNode) -> Result<Vec<ConvertedValue>> {
    match node {
        JsonNode::Array(items) => Ok(project_items(items)),
        other => Err(TreeError::not_an_array(other.shape())),
    }
}

/// Field names of an object node, in the order the parser reported them.
///
/// # Errors
///
/// [`TreeError::ShapeMismatch`] if `node` is not an object.
pub fn keys(node: &JsonNode) -> Result<Vec<String>> {
    Ok(object_fields(node)?.keys().cloned().collect())
}

/// Converted field values of an object node, in the same order as [`keys`].
///
/// # Errors
///
/// [`TreeError::ShapeMismatch`] if `node` is not an object.
pub fn values(node: &JsonNode) -> Result<Vec<ConvertedValue>> {
    Ok(object_fields(node)?
        .values()
        .map(|child| convert(Some(child)))
        .collect())
}

/// Borrowing iterator over the elements of an array node.
///
/// # Errors
///
/// [`TreeError::ShapeMismatch`] if `node` is not an array.
pub fn array_elements(node: &JsonNode) -> Result<slice::Iter<'_, JsonNode>> {
    match node {
        JsonNode::Array(items) => Ok(items.iter()),
        other => Err(TreeError::not_an_array(other.shape())),
    }
}

/// General conversion rule. Never fails.
pub fn convert(node: Option<&JsonNode>) -> ConvertedValue {
    let Some(node) = node else {
        return ConvertedValue::Null;
    };
    match node {
        JsonNode::Null => ConvertedValue::Null,
        JsonNode::Object(fields) => ConvertedValue::Mapping(project_fields(fields)),
        JsonNode::Array(items) => ConvertedValue::Sequence(project_items(items)),
        JsonNode::Textual(s) => ConvertedValue::String(s.clone()),
        JsonNode::Scalar(scalar) => ConvertedValue::String(scalar.to_string()),
    }
}

/// String form of a node for display in flat contexts.
///
/// Absent and null nodes become `"null"`, strings are returned raw, and
/// everything else is rendered as compact JSON (`{"a":1}`, `[1,2]`, `3.5`).
pub fn stringify_leaf(node: Option<&JsonNode>) -> String {
    match node {
        None | Some(JsonNode::Null) => "null".to_owned(),
        Some(JsonNode::Textual(s)) => s.clone(),
        Some(other) => other.to_json_string(),
    }
}

// Shared by the checked entry points and `convert`.
fn project_fields(fields: &IndexMap<String, JsonNode>) -> Mapping {
    fields
        .iter()
        .map(|(key, child)| (key.clone(), convert(Some(child))))
        .collect()
}

fn project_items(items: &[JsonNode]) -> Vec<ConvertedValue> {
    items.iter().map(|item| convert(Some(item))).collect()
}

fn object_fields(node: &JsonNode) -> Result<&IndexMap<String, JsonNode>> {
    match node {
        JsonNode::Object(fields) => Ok(fields),
        other => Err(TreeError::not_an_object(other.shape())),
    }
}

impl From<&JsonNode> for ConvertedValue {
    fn from(node: &JsonNode) -> Self {
        convert(Some(node))
    }
}
