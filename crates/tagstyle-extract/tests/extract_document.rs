//! End-to-end extraction over a decoded document.

use tagstyle_extract::{
    decode_node_str, extract, extract_stylesheet, CssData, CssStyle, CssValue, ExtractOptions,
    StyleError, Tag, UnitType,
};

const PROFILE_CARD: &str = include_str!("fixtures/profile_card.json");

fn profile_card() -> Tag {
    let node = decode_node_str(PROFILE_CARD).unwrap();
    extract(&node, &ExtractOptions::default()).unwrap().unwrap()
}

fn value(css: &CssData, name: &str) -> String {
    css.get(name)
        .map(CssValue::to_string)
        .unwrap_or_else(|| panic!("{} has no {name}", css.class_name))
}

#[test]
fn test_root_container() {
    let root = profile_card();
    assert_eq!(root.css.class_name, "ProfileCard");
    assert_eq!(
        root.css.names(),
        vec![
            "border-radius",
            "box-shadow",
            "flex-direction",
            "justify-content",
            "align-items",
            "align-self",
            "padding",
            "background-color",
        ]
    );
    assert_eq!(value(&root.css, "box-shadow"), "0px 2px 6px 0px rgba(0, 0, 0, 0.1)");
    assert_eq!(value(&root.css, "padding"), "16px");
    assert_eq!(root.item_spacing, 12.0);
    assert_eq!(root.children.len(), 4);
}

#[test]
fn test_image_fill_frame() {
    let root = profile_card();
    let avatar = &root.children[0];
    assert!(avatar.is_image);
    assert_eq!(avatar.css.class_name, "AvatarImage");
    assert_eq!(
        avatar.css.names(),
        vec!["border-radius", "height", "width", "background-color"]
    );
    assert_eq!(value(&avatar.css, "background-color"), "gray");
}

#[test]
fn test_text_nodes_and_counter() {
    let root = profile_card();
    let details = &root.children[1];
    assert_eq!(value(&details.css, "flex"), "1");
    assert!(details.css.get("padding").is_none());

    // The invisible note is dropped.
    assert_eq!(details.children.len(), 2);

    let name = &details.children[0];
    assert_eq!(name.name, "Text1");
    assert_eq!(name.css.class_name, "Jane DoeText");
    assert_eq!(value(&name.css, "vertical-align"), "middle");
    assert_eq!(value(&name.css, "font-weight"), "bold");
    assert_eq!(value(&name.css, "line-height"), "24px");
    assert_eq!(value(&name.css, "color"), "rgb(26, 26, 26)");

    let role = &details.children[1];
    assert_eq!(role.name, "RoleText");
    assert_eq!(role.css.properties[0].name, "opacity");
    assert_eq!(role.css.properties[0].value, CssValue::Number(0.6));
    assert_eq!(value(&role.css, "letter-spacing"), "2%");
    assert_eq!(value(&role.css, "line-height"), "140%");
    assert_eq!(value(&role.css, "text-decoration"), "underline");

    let label = &root.children[2].children[0];
    assert_eq!(label.name, "Text2");
    assert_eq!(label.css.class_name, "FollowText");
    assert!(label.css.get("max-width").is_none());
    assert_eq!(value(&label.css, "letter-spacing"), "0.5px");
}

#[test]
fn test_pressable_instance() {
    let root = profile_card();
    let button = &root.children[2];
    assert_eq!(button.css.class_name, "FollowPressable");
    assert_eq!(
        button.css.names(),
        vec![
            "flex-direction",
            "justify-content",
            "align-items",
            "padding",
            "border",
            "width",
        ]
    );
    assert_eq!(value(&button.css, "padding"), "6px 12px");
    assert_eq!(value(&button.css, "border"), "1px solid rgb(0, 102, 255)");
    assert_eq!(value(&button.css, "width"), "72px");
}

#[test]
fn test_vector_group_is_flattened() {
    let root = profile_card();
    let badge = &root.children[3];
    assert!(badge.is_image);
    assert!(badge.children.is_empty());
    assert_eq!(badge.css.class_name, "BadgeImage");
    assert_eq!(value(&badge.css, "transform"), "rotate(12deg)");
}

#[test]
fn test_rem_units_apply_to_formatted_sizes_only() {
    let node = decode_node_str(PROFILE_CARD).unwrap();
    let options = ExtractOptions::default().with_unit(UnitType::Rem);
    let root = extract(&node, &options).unwrap().unwrap();
    assert_eq!(value(&root.css, "padding"), "1rem");
    assert_eq!(value(&root.css, "border-radius"), "0.5rem");
    // Fixed sizes are always pixels.
    assert_eq!(value(&root.children[0].css, "width"), "64px");
}

#[test]
fn test_stylesheet_css() {
    let node = decode_node_str(PROFILE_CARD).unwrap();
    let css = extract_stylesheet(&node, &ExtractOptions::default()).unwrap();

    assert!(css.starts_with(".ProfileCard {\n  border-radius: 8px;\n"));
    assert!(css.contains(".JaneDoeText {\n"));
    assert!(css.contains(
        ".BadgeImage {\n  transform: rotate(12deg);\n  height: 16px;\n  width: 16px;\n}\n"
    ));
    assert_eq!(css.matches(" {\n").count(), 8);
}

#[test]
fn test_stylesheet_styled_components() {
    let node = decode_node_str(PROFILE_CARD).unwrap();
    let options = ExtractOptions::default().with_style(CssStyle::StyledComponents);
    let css = extract_stylesheet(&node, &options).unwrap();

    assert!(css.contains("const ProfileCard = styled.View`\n"));
    assert!(css.contains("const AvatarImage = styled.Image`\n"));
    assert!(css.contains("const RoleText = styled.Text`\n  opacity: 0.6;\n"));
}

#[test]
fn test_unknown_alignment_fails_the_run() {
    let json = r#"{
        "type": "FRAME",
        "name": "Grid",
        "width": 100,
        "height": 100,
        "layoutMode": "HORIZONTAL",
        "counterAxisAlignItems": "STRETCH"
    }"#;
    let node = decode_node_str(json).unwrap();
    let err = extract(&node, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, StyleError::Lookup { table: "align-items", .. }));
    assert_eq!(
        err.to_string(),
        "No align-items keyword for scene value \"STRETCH\""
    );
}

#[test]
fn test_options_from_host_json() {
    let node = decode_node_str(PROFILE_CARD).unwrap();
    let options = ExtractOptions::from_json(r#"{"unitType":"remAs10px"}"#).unwrap();
    let root = extract(&node, &options).unwrap().unwrap();
    assert_eq!(value(&root.css, "padding"), "1.6rem");
}

#[test]
fn test_non_ascii_text_names_keep_separate_rules() {
    let json = r#"{
        "type": "FRAME",
        "name": "Dialog",
        "width": 300,
        "height": 120,
        "layoutMode": "NONE",
        "children": [
            {
                "type": "TEXT", "name": "送信", "width": 100, "height": 20,
                "textAlignHorizontal": "LEFT", "textAlignVertical": "TOP",
                "fontSize": 16,
                "letterSpacing": { "value": 0, "unit": "PIXELS" },
                "lineHeight": { "unit": "AUTO" }
            },
            {
                "type": "TEXT", "name": "取消", "width": 100, "height": 20,
                "textAlignHorizontal": "LEFT", "textAlignVertical": "TOP",
                "fontSize": 12,
                "letterSpacing": { "value": 0, "unit": "PIXELS" },
                "lineHeight": { "unit": "AUTO" }
            }
        ]
    }"#;
    let node = decode_node_str(json).unwrap();

    let tag = extract(&node, &ExtractOptions::default()).unwrap().unwrap();
    assert_eq!(tag.children[0].css.class_name, "送信Text");
    assert_eq!(tag.children[1].css.class_name, "取消Text");

    let css = extract_stylesheet(&node, &ExtractOptions::default()).unwrap();
    assert!(css.contains(
        ".Text {\n  max-width: 100px;\n  text-align: left;\n  vertical-align: top;\n  font-size: 16px;\n"
    ));
    assert!(css.contains(
        ".Text_2 {\n  max-width: 100px;\n  text-align: left;\n  vertical-align: top;\n  font-size: 12px;\n"
    ));
}

#[test]
fn test_unknown_node_type_gets_universal_and_marker_rules() {
    let json = r#"{
        "type": "FRAME",
        "name": "Library",
        "width": 400,
        "height": 200,
        "layoutMode": "NONE",
        "children": [
            {
                "type": "COMPONENT_SET",
                "name": "pressable_Variants",
                "width": 240.6,
                "height": 96,
                "opacity": 0.5,
                "children": [
                    {
                        "type": "COMPONENT", "name": "Primary", "width": 120, "height": 48,
                        "layoutMode": "NONE"
                    }
                ]
            },
            { "type": "SECTION", "name": "Notes", "width": 100, "height": 100 }
        ]
    }"#;
    let node = decode_node_str(json).unwrap();
    let tag = extract(&node, &ExtractOptions::default()).unwrap().unwrap();

    let set = &tag.children[0];
    assert_eq!(set.node_type, "COMPONENT_SET");
    assert_eq!(set.css.class_name, "VariantsPressable");
    assert_eq!(set.css.names(), vec!["opacity", "width"]);
    assert_eq!(value(&set.css, "width"), "240px");
    assert_eq!(set.children[0].css.class_name, "Primary");

    let section = &tag.children[1];
    assert_eq!(section.node_type, "SECTION");
    assert!(section.css.is_empty());
}
