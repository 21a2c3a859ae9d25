//! The native-value projection of a [`JsonNode`](crate::JsonNode).

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping produced from an object node.
pub type Mapping = IndexMap<String, ConvertedValue>;

/// Result of converting a tree node.
///
/// Non-textual scalars (numbers, booleans) have already been degraded to
/// their printed form, so only four variants exist. Callers narrow with
/// `match` or the `as_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConvertedValue {
    Null,
    String(String),
    Sequence(Vec<ConvertedValue>),
    Mapping(Mapping),
}

impl ConvertedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConvertedValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConvertedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConvertedValue]> {
        match self {
            ConvertedValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConvertedValue::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<String> for ConvertedValue {
    fn from(s: String) -> Self {
        ConvertedValue::String(s)
    }
}

impl From<&str> for ConvertedValue {
    fn from(s: &str) -> Self {
        ConvertedValue::String(s.to_owned())
    }
}
