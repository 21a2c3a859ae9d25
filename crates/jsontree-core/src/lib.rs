//! # jsontree-core
//!
//! Projects a parsed JSON tree into ordered native values and exposes the
//! tree's structure (keys, values, elements) for iteration.
//!
//! Parsing is delegated to `serde_json`; the converter only reads the tree it
//! is given. Numbers and booleans are degraded to their printed form, so a
//! converted value is always one of null, string, sequence or mapping.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree_core::{parse_bytes, to_mapping, stringify_leaf, ConvertedValue};
//!
//! let node = parse_bytes(br#"{"name":"Alice","age":30,"tags":["a"]}"#);
//! let map = to_mapping(&node).unwrap();
//! assert_eq!(map["name"], ConvertedValue::from("Alice"));
//! assert_eq!(map["age"], ConvertedValue::from("30"));
//!
//! assert_eq!(stringify_leaf(node.get("tags")), r#"["a"]"#);
//! assert_eq!(stringify_leaf(node.get("missing")), "null");
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `JsonNode` tree and its `Shape`
//! - [`convert`](mod@convert): mapping/sequence/keys/values projection and stringification
//! - [`parse`]: bytes → `JsonNode` with textual fallback
//! - [`value`]: `ConvertedValue` output type
//! - [`error`]: `TreeError::ShapeMismatch`

pub mod convert;
pub mod error;
pub mod node;
pub mod parse;
pub mod value;

pub use convert::{
    array_elements, convert, keys, stringify_leaf, to_mapping, to_sequence, values,
};
pub use error::TreeError;
pub use node::{JsonNode, Scalar, Shape};
pub use parse::parse_bytes;
pub use value::{ConvertedValue, Mapping};
