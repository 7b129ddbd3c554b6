//! Property tests for declaration shapes that hold for any input.

use proptest::prelude::*;
use tagstyle_core::{format_number, FrameNode, LayoutAlign, LayoutMode, ShapeNode, TextNode};
use tagstyle_extract::{
    extract, CssData, CssValue, ExtractOptions, SceneNode, StyleExtractor, TextCount, UnitType,
};

fn padded(top: f64, right: f64, bottom: f64, left: f64) -> CssData {
    let mut frame = FrameNode::new("Box", 100.0, 100.0)
        .with_layout(LayoutMode::Horizontal)
        .with_padding(top, right, bottom, left);
    frame.layout_align = LayoutAlign::Min;
    StyleExtractor::new()
        .css_data_for_tag(&SceneNode::Frame(frame), UnitType::Px, &mut TextCount::new())
        .unwrap()
}

fn padding(css: &CssData) -> Option<String> {
    css.get("padding").map(CssValue::to_string)
}

fn side() -> impl Strategy<Value = f64> {
    (0u32..64).prop_map(f64::from)
}

proptest! {
    #[test]
    fn prop_uniform_padding_collapses(p in side()) {
        let css = padded(p, p, p, p);
        if p == 0.0 {
            prop_assert_eq!(padding(&css), None);
        } else {
            prop_assert_eq!(padding(&css), Some(format!("{}px", p)));
        }
    }

    #[test]
    fn prop_symmetric_padding_has_two_values(vertical in side(), horizontal in side()) {
        prop_assume!(vertical != horizontal);
        let css = padded(vertical, horizontal, vertical, horizontal);
        prop_assert_eq!(
            padding(&css),
            Some(format!("{}px {}px", vertical, horizontal))
        );
    }

    #[test]
    fn prop_asymmetric_padding_lists_all_sides(
        top in side(),
        right in side(),
        bottom in side(),
        left in side(),
    ) {
        prop_assume!(top != bottom || left != right);
        let css = padded(top, right, bottom, left);
        prop_assert_eq!(
            padding(&css),
            Some(format!("{}px {}px {}px {}px", top, right, bottom, left))
        );
    }

    #[test]
    fn prop_rotation_rounds_down(rotation in -360.0f64..360.0) {
        prop_assume!(rotation != 0.0);
        let mut shape = ShapeNode::new("Dot", 4.0, 4.0);
        shape.base.rotation = Some(rotation);
        let css = StyleExtractor::new()
            .css_data_for_tag(&SceneNode::Ellipse(shape), UnitType::Px, &mut TextCount::new())
            .unwrap();
        let expected = format!("rotate({}deg)", format_number(rotation.floor()));
        prop_assert_eq!(css.get("transform").map(CssValue::to_string), Some(expected));
    }

    #[test]
    fn prop_only_unsuffixed_text_is_numbered(suffixed in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut root = FrameNode::new("Screen", 375.0, 812.0);
        for (i, has_suffix) in suffixed.iter().enumerate() {
            let name = if *has_suffix { format!("Label{i}Text") } else { format!("Label{i}") };
            root = root.with_child(SceneNode::Text(TextNode::new(name, 100.0, 20.0, 14.0)));
        }

        let tag = extract(&SceneNode::Frame(root), &ExtractOptions::default())
            .unwrap()
            .unwrap();

        let mut next = 1;
        for (child, has_suffix) in tag.children.iter().zip(&suffixed) {
            if *has_suffix {
                prop_assert!(child.name.ends_with("Text"));
                prop_assert!(child.name.starts_with("Label"));
            } else {
                prop_assert_eq!(&child.name, &format!("Text{next}"));
                next += 1;
            }
        }
    }
}
