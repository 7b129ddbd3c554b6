//! The style record produced for each node.

use serde::{Deserialize, Serialize};
use std::fmt;
use tagstyle_core::format_number;

/// A declaration value: either preformatted text or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One `name: value` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssProperty {
    pub name: String,
    pub value: CssValue,
}

/// Class name and ordered declarations for a node.
///
/// Order follows emission order and may repeat a property name; a later
/// declaration overrides an earlier one when rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssData {
    pub class_name: String,
    pub properties: Vec<CssProperty>,
}

impl CssData {
    /// The result for a node that needs no generated style.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The last value declared for `name`.
    pub fn get(&self, name: &str) -> Option<&CssValue> {
        self.properties.iter().rev().find(|p| p.name == name).map(|p| &p.value)
    }

    /// Property names in emission order.
    pub fn names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }
}
