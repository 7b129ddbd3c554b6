//! Decoding of scene nodes exported as JSON by a design-tool plugin.

use serde_json::Value;
use tagstyle_core::{Result, SceneNode, StyleError};

/// Decode a node tree from its JSON form.
///
/// Nodes use the plugin API shape: a `type` tag such as `"FRAME"` and
/// camelCase fields. Node types without a dedicated variant decode to
/// [`SceneNode::Other`]. A node lacking a field its type requires is
/// reported as [`StyleError::MalformedNode`].
pub fn decode_node(value: Value) -> Result<SceneNode> {
    let node_type = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    serde_json::from_value(value).map_err(|e| StyleError::malformed(node_type, e.to_string()))
}

/// Decode a node tree from JSON text.
pub fn decode_node_str(json: &str) -> Result<SceneNode> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| StyleError::malformed("unknown", e.to_string()))?;
    decode_node(value)
}
