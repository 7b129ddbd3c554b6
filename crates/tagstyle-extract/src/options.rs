//! Extraction settings.

use serde::{Deserialize, Serialize};
use tagstyle_core::{Result, StyleError, UnitType};

/// Name markers that signal a node's role.
///
/// A designer names a layer `img_Logo` to say "render this as an image" or
/// `pressable_Submit` to say "wrap this in a pressable". Suffixes are appended
/// to the generated class name unless the layer name already ends with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamingMarkers {
    pub image_prefix: String,
    pub image_suffix: String,
    pub text_suffix: String,
    pub pressable_prefix: String,
    pub pressable_suffix: String,
}

impl Default for NamingMarkers {
    fn default() -> Self {
        Self {
            image_prefix: "img_".to_string(),
            image_suffix: "Image".to_string(),
            text_suffix: "Text".to_string(),
            pressable_prefix: "pressable_".to_string(),
            pressable_suffix: "Pressable".to_string(),
        }
    }
}

impl NamingMarkers {
    /// Whether the name carries the image prefix. An empty prefix never matches.
    pub fn has_image_prefix(&self, name: &str) -> bool {
        !self.image_prefix.is_empty() && name.starts_with(&self.image_prefix)
    }

    /// Whether the name carries the pressable prefix. An empty prefix never matches.
    pub fn has_pressable_prefix(&self, name: &str) -> bool {
        !self.pressable_prefix.is_empty() && name.starts_with(&self.pressable_prefix)
    }

    pub fn has_text_suffix(&self, name: &str) -> bool {
        name.ends_with(&self.text_suffix)
    }
}

/// Output flavor of a rendered stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CssStyle {
    /// Plain class rules.
    #[default]
    #[serde(rename = "css")]
    Css,
    /// `styled-components` definitions for React Native.
    #[serde(rename = "styled-components")]
    StyledComponents,
}

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Unit used for sizes routed through the formatter.
    pub unit_type: UnitType,
    /// Stylesheet flavor.
    pub css_style: CssStyle,
    /// Role markers recognized in layer names.
    pub markers: NamingMarkers,
}

impl ExtractOptions {
    /// Read settings shipped as JSON by a host. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| StyleError::InvalidOptions(e.to_string()))
    }

    pub fn with_unit(mut self, unit_type: UnitType) -> Self {
        self.unit_type = unit_type;
        self
    }

    pub fn with_style(mut self, css_style: CssStyle) -> Self {
        self.css_style = css_style;
        self
    }
}
