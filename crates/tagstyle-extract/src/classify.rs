//! Node classification helpers.

use tagstyle_core::{PrimaryAxisAlign, SceneNode};

/// Whether the node should be treated as an image.
///
/// A container made only of vectors is a flattened image, as is a bare
/// vector and a frame or rectangle with an image fill. The node name plays no
/// part here.
pub fn is_image_node(node: &SceneNode) -> bool {
    match node.children() {
        Some(children) if !children.is_empty() => {
            if children.iter().all(SceneNode::is_vector) {
                return true;
            }
        }
        _ => {
            if node.is_vector() {
                return true;
            }
        }
    }

    match node {
        SceneNode::Frame(_) | SceneNode::Rectangle(_) => node.fills().iter().any(|p| p.is_image()),
        _ => false,
    }
}

/// Explicit spacing between auto-layout children.
///
/// Zero unless the node is an auto-layout frame, instance, or component whose
/// children are not distributed with space-between, and the spacing is positive.
pub fn item_spacing(node: &SceneNode) -> f64 {
    let Some(frame) = node.as_frame() else {
        return 0.0;
    };

    if frame.is_auto_layout()
        && frame.primary_axis_align_items != PrimaryAxisAlign::SpaceBetween
        && frame.item_spacing > 0.0
    {
        frame.item_spacing
    } else {
        0.0
    }
}
