//! Document traversal producing a tree of styled tags.

use crate::classify::{is_image_node, item_spacing};
use crate::counter::TextCount;
use crate::css_data::CssData;
use crate::mapper::StyleExtractor;
use tagstyle_core::{Result, SceneNode, UnitType, ValueFormatter};

/// A visible node with its generated style.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// Tag name. Text nodes without the text suffix get a numbered fallback.
    pub name: String,
    pub node_type: String,
    pub css: CssData,
    pub is_text: bool,
    pub is_image: bool,
    /// Explicit spacing to place between children.
    pub item_spacing: f64,
    pub children: Vec<Tag>,
}

impl Tag {
    /// Visit this tag and its descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Tag)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Number of tags in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Tag::count).sum::<usize>()
    }
}

impl<F: ValueFormatter> StyleExtractor<F> {
    /// Build the tag tree rooted at `node`, parent before children.
    ///
    /// Invisible nodes are dropped with their subtrees, and image nodes are
    /// not descended into. Returns `None` when the root itself is invisible.
    pub fn build_tag_tree(
        &self,
        node: &SceneNode,
        unit: UnitType,
        text_count: &mut TextCount,
    ) -> Result<Option<Tag>> {
        if !node.is_visible() {
            tracing::trace!(layer = node.name(), "skipping invisible node");
            return Ok(None);
        }

        let css = self.css_data_for_tag(node, unit, text_count)?;
        let is_image = is_image_node(node);
        let is_text = node.is_text();

        let name = if is_text && !self.markers().has_text_suffix(node.name()) {
            let name = format!("{}{}", self.markers().text_suffix, text_count.get());
            text_count.increment();
            name
        } else {
            node.name().to_string()
        };

        let mut children = Vec::new();
        if !is_image {
            for child in node.children().unwrap_or_default() {
                if let Some(tag) = self.build_tag_tree(child, unit, text_count)? {
                    children.push(tag);
                }
            }
        }

        Ok(Some(Tag {
            name,
            node_type: node.node_type().to_string(),
            css,
            is_text,
            is_image,
            item_spacing: item_spacing(node),
            children,
        }))
    }
}
