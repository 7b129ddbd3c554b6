//! Translation of design scene nodes into CSS-like style declarations.
//!
//! Given a node from a design document (frame, text, rectangle, group, ...),
//! this crate decides which of its visual attributes become which style
//! properties and derives the class name the generated component uses.
//!
//! # Architecture
//!
//! 1. **Classification**: [`is_image_node`] and [`item_spacing`]
//! 2. **Attribute mapping**: [`StyleExtractor::css_data_for_tag`] produces a
//!    [`CssData`] for one node
//! 3. **Naming**: [`resolve_class_name`] applies the role markers
//! 4. **Traversal**: [`StyleExtractor::build_tag_tree`] walks a document with
//!    one shared [`TextCount`]
//! 5. **Rendering**: [`render_stylesheet`] prints CSS or styled-components
//!
//! # Example
//!
//! ```
//! use tagstyle_extract::{decode_node_str, extract_stylesheet, ExtractOptions};
//!
//! let node = decode_node_str(r#"{
//!     "type": "RECTANGLE",
//!     "name": "Divider",
//!     "width": 320,
//!     "height": 1,
//!     "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }]
//! }"#).unwrap();
//!
//! let css = extract_stylesheet(&node, &ExtractOptions::default()).unwrap();
//! assert!(css.contains("background-color: rgb(0, 0, 0);"));
//! ```

mod classify;
mod counter;
mod css_data;
mod decode;
mod mapper;
mod naming;
mod options;
mod stylesheet;
mod tables;
mod tree;

pub use classify::{is_image_node, item_spacing};
pub use counter::TextCount;
pub use css_data::{CssData, CssProperty, CssValue};
pub use decode::{decode_node, decode_node_str};
pub use mapper::{css_data_for_tag, StyleExtractor};
pub use naming::resolve_class_name;
pub use options::{CssStyle, ExtractOptions, NamingMarkers};
pub use stylesheet::render_stylesheet;
pub use tree::Tag;

pub use tagstyle_core::{Result, SceneNode, StyleError, UnitType};

/// Run one extraction over a document tree.
///
/// A fresh [`TextCount`] is created for the run and dropped when it ends.
pub fn extract(root: &SceneNode, options: &ExtractOptions) -> Result<Option<Tag>> {
    let extractor = StyleExtractor::from_options(options);
    let mut text_count = TextCount::new();
    extractor.build_tag_tree(root, options.unit_type, &mut text_count)
}

/// Run one extraction and render the result as a stylesheet.
///
/// An invisible root renders as an empty string.
pub fn extract_stylesheet(root: &SceneNode, options: &ExtractOptions) -> Result<String> {
    Ok(extract(root, options)?
        .map(|tag| render_stylesheet(&tag, options.css_style))
        .unwrap_or_default())
}
