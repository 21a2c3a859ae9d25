//! Raw bytes → [`JsonNode`], with a lenient fallback.

use crate::node::JsonNode;
use serde_json::Value;

/// Parse `raw` as JSON.
///
/// Malformed input is not an error here: it becomes a textual node holding
/// the bytes decoded as UTF-8 (invalid sequences replaced with U+FFFD). The
/// parse failure is only reported as a `debug` tracing event, so callers that
/// need to reject bad JSON must parse it themselves.
///
/// ```
/// use jsontree_core::{parse_bytes, JsonNode};
///
/// assert!(parse_bytes(br#"{"a":1}"#).is_object());
/// assert_eq!(parse_bytes(b"not-json"), JsonNode::Textual("not-json".into()));
/// ```
pub fn parse_bytes(raw: &[u8]) -> JsonNode {
    match serde_json::from_slice::<Value>(raw) {
        Ok(value) => JsonNode::from(value),
        Err(err) => {
            tracing::debug!(
                error = %err,
                len = raw.len(),
                "input is not valid JSON, treating it as a plain string"
            );
            JsonNode::Textual(String::from_utf8_lossy(raw).into_owned())
        }
    }
}
