//! The parsed JSON tree that the converter walks.
//!
//! [`JsonNode`] is a closed sum type over the five shapes a JSON value can
//! take. It is produced once, by the parser adapter (`From<serde_json::Value>`
//! or [`crate::parse_bytes`]), and is never mutated afterwards. Objects keep
//! their fields in document order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// A non-textual, non-container JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
}

impl fmt::Display for Scalar {
    /// Canonical printed form: `true`, `false`, `42`, `-1.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

/// An immutable node of a parsed JSON tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonNode {
    Null,
    /// Fields in the order the parser reported them.
    Object(IndexMap<String, JsonNode>),
    Array(Vec<JsonNode>),
    Textual(String),
    Scalar(Scalar),
}

/// The structural kind of a [`JsonNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Object,
    Array,
    Textual,
    Scalar,
    Null,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Object => "object",
            Shape::Array => "array",
            Shape::Textual => "string",
            Shape::Scalar => "scalar",
            Shape::Null => "null",
        };
        f.write_str(name)
    }
}

impl JsonNode {
    pub fn shape(&self) -> Shape {
        match self {
            JsonNode::Null => Shape::Null,
            JsonNode::Object(_) => Shape::Object,
            JsonNode::Array(_) => Shape::Array,
            JsonNode::Textual(_) => Shape::Textual,
            JsonNode::Scalar(_) => Shape::Scalar,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonNode::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonNode::Array(_))
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, JsonNode::Textual(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonNode::Null)
    }

    /// Look up an object field. Returns `None` for missing keys and for
    /// nodes that are not objects.
    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        match self {
            JsonNode::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Number of fields or elements for containers, `0` for everything else.
    pub fn len(&self) -> usize {
        match self {
            JsonNode::Object(fields) => fields.len(),
            JsonNode::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compact JSON text of this node, e.g. `{"a":1}` or `"abc"`.
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for JsonNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Value> for JsonNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonNode::Null,
            Value::Bool(b) => JsonNode::Scalar(Scalar::Bool(b)),
            Value::Number(n) => JsonNode::Scalar(Scalar::Number(n)),
            Value::String(s) => JsonNode::Textual(s),
            Value::Array(items) => JsonNode::Array(items.into_iter().map(JsonNode::from).collect()),
            Value::Object(map) => JsonNode::Object(
                map.into_iter()
                    .map(|(key, child)| (key, JsonNode::from(child)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonNode> for Value {
    fn from(node: JsonNode) -> Self {
        match node {
            JsonNode::Null => Value::Null,
            JsonNode::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            JsonNode::Scalar(Scalar::Number(n)) => Value::Number(n),
            JsonNode::Textual(s) => Value::String(s),
            JsonNode::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonNode::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
        }
    }
}
