//! Error types for style extraction.

use thiserror::Error;

/// Result type alias for style extraction.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors raised while translating a scene node into style declarations.
///
/// Missing optional data (no fills, zero rotation, no font family) is not an
/// error; the property is simply omitted.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A keyword from the scene graph has no entry in a CSS keyword table.
    #[error("No {table} keyword for scene value {value:?}")]
    Lookup { table: &'static str, value: String },

    /// A node lacks a field its variant guarantees, or carries an unusable value.
    #[error("Malformed {node} node: {reason}")]
    MalformedNode { node: String, reason: String },

    /// Extraction settings could not be read.
    #[error("Invalid extract options: {0}")]
    InvalidOptions(String),
}

impl StyleError {
    pub fn lookup(table: &'static str, value: impl Into<String>) -> Self {
        Self::Lookup {
            table,
            value: value.into(),
        }
    }

    pub fn malformed(node: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            node: node.into(),
            reason: reason.into(),
        }
    }
}
