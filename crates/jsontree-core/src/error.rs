//! Error types for tree conversion operations.

use crate::node::Shape;
use thiserror::Error;

/// Errors that can occur while projecting a [`JsonNode`](crate::JsonNode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An operation that needs an object or an array was handed a node of
    /// another shape. `expected` is always [`Shape::Object`] or [`Shape::Array`].
    ///
    /// Callers usually surface this as an "unprocessable input" response.
    #[error("JSON node is not an {expected} (found {found})")]
    ShapeMismatch { expected: Shape, found: Shape },
}

impl TreeError {
    pub(crate) fn not_an_object(found: Shape) -> Self {
        TreeError::ShapeMismatch {
            expected: Shape::Object,
            found,
        }
    }

    pub(crate) fn not_an_array(found: Shape) -> Self {
        TreeError::ShapeMismatch {
            expected: Shape::Array,
            found,
        }
    }
}

/// Convenience alias used throughout jsontree-core.
pub type Result<T> = std::result::Result<T, TreeError>;
