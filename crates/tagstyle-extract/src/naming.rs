//! Class names derived from layer names and role markers.
//!
//! Role markers embedded in layer names are the only channel a designer has
//! for tagging a layer as an image or a pressable. All marker handling lives
//! in [`resolve_class_name`] so replacing the convention touches one function.

use crate::options::NamingMarkers;
use tagstyle_core::SceneNode;

/// Derive the output class name of a node.
///
/// Applied in order, each reading the declared name:
/// 1. Image nodes drop the image prefix and gain the image suffix.
/// 2. Text nodes without the text suffix become `<name><text suffix>`.
/// 3. Names with the pressable prefix drop it and gain the pressable suffix.
///
/// A name carrying both the image and pressable markers is unsupported. The
/// steps still run in this order and a warning is logged.
pub fn resolve_class_name(node: &SceneNode, is_image: bool, markers: &NamingMarkers) -> String {
    let name = node.name();
    let mut class_name = name.to_string();

    if has_both_markers(name, markers) {
        tracing::warn!(
            layer = name,
            "layer name carries both image and pressable markers"
        );
    }

    if is_image {
        if markers.has_image_prefix(name) {
            class_name = name[markers.image_prefix.len()..].to_string();
        }
        if !name.ends_with(&markers.image_suffix) {
            class_name.push_str(&markers.image_suffix);
        }
    }

    if node.is_text() && !markers.has_text_suffix(name) {
        class_name = format!("{}{}", name, markers.text_suffix);
    }

    if markers.has_pressable_prefix(name) {
        class_name = name[markers.pressable_prefix.len()..].to_string();
        if !name.ends_with(&markers.pressable_suffix) {
            class_name.push_str(&markers.pressable_suffix);
        }
    }

    class_name
}

fn has_both_markers(name: &str, markers: &NamingMarkers) -> bool {
    let contains = |marker: &str| !marker.is_empty() && name.contains(marker);
    (markers.has_image_prefix(name) && contains(markers.pressable_prefix.as_str()))
        || (markers.has_pressable_prefix(name) && contains(markers.image_prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagstyle_core::{FrameNode, Paint, RectangleNode, ShapeNode, TextNode};

    fn markers() -> NamingMarkers {
        NamingMarkers::default()
    }

    #[test]
    fn test_image_prefix_is_replaced_by_suffix() {
        let node = SceneNode::Rectangle(RectangleNode::new("img_Logo", 10.0, 10.0));
        assert_eq!(resolve_class_name(&node, true, &markers()), "LogoImage");
    }

    #[test]
    fn test_image_suffix_not_duplicated() {
        let node = SceneNode::Vector(ShapeNode::new("HeroImage", 10.0, 10.0));
        assert_eq!(resolve_class_name(&node, true, &markers()), "HeroImage");

        let prefixed = SceneNode::Vector(ShapeNode::new("img_HeroImage", 10.0, 10.0));
        assert_eq!(resolve_class_name(&prefixed, true, &markers()), "HeroImage");
    }

    #[test]
    fn test_image_prefix_ignored_when_not_an_image() {
        let node = SceneNode::Rectangle(RectangleNode::new("img_Logo", 10.0, 10.0));
        assert_eq!(resolve_class_name(&node, false, &markers()), "img_Logo");
    }

    #[test]
    fn test_text_suffix_is_a_full_override() {
        let node = SceneNode::Text(TextNode::new("Submit", 10.0, 10.0, 12.0));
        assert_eq!(resolve_class_name(&node, false, &markers()), "SubmitText");

        let suffixed = SceneNode::Text(TextNode::new("TitleText", 10.0, 10.0, 12.0));
        assert_eq!(resolve_class_name(&suffixed, false, &markers()), "TitleText");
    }

    #[test]
    fn test_pressable_prefix() {
        let node = SceneNode::Frame(FrameNode::new("pressable_Submit", 10.0, 10.0));
        assert_eq!(resolve_class_name(&node, false, &markers()), "SubmitPressable");

        let suffixed = SceneNode::Frame(FrameNode::new("pressable_SubmitPressable", 10.0, 10.0));
        assert_eq!(resolve_class_name(&suffixed, false, &markers()), "SubmitPressable");
    }

    #[test]
    fn test_pressable_rewrite_runs_last() {
        let node = SceneNode::Frame(
            FrameNode::new("pressable_img_Icon", 10.0, 10.0).with_fill(Paint::image()),
        );
        assert_eq!(resolve_class_name(&node, true, &markers()), "img_IconPressable");
    }

    #[test]
    fn test_both_markers_detected() {
        assert!(has_both_markers("pressable_img_Icon", &markers()));
        assert!(has_both_markers("img_pressable_Icon", &markers()));
        assert!(!has_both_markers("pressable_Icon", &markers()));
    }

    #[test]
    fn test_plain_name_is_kept() {
        let node = SceneNode::Frame(FrameNode::new("Card", 10.0, 10.0));
        assert_eq!(resolve_class_name(&node, false, &markers()), "Card");
    }
}
