//! Scene-graph node types.
//!
//! A design document is a tree of [`SceneNode`]s. Each variant carries only
//! the fields that exist for that node type, so a styling rule can never read
//! a field that does not apply.

use crate::paint::{Effect, Paint};
use crate::types::{
    CornerRadius, CounterAxisAlign, FontName, LayoutAlign, LayoutMode, LetterSpacing, LineHeight,
    PrimaryAxisAlign, TextAlignHorizontal, TextAlignVertical, TextAutoResize, TextDecoration,
};

/// Fields shared by every node type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NodeBase {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "crate::types::yes"))]
    pub visible: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub opacity: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Option<f64>,
    pub width: f64,
    pub height: f64,
}

impl NodeBase {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            visible: true,
            opacity: None,
            rotation: None,
            width,
            height,
        }
    }
}

/// Frames, component instances, and component definitions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FrameNode {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: NodeBase,
    pub layout_mode: LayoutMode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_axis_align_items: PrimaryAxisAlign,
    #[cfg_attr(feature = "serde", serde(default))]
    pub counter_axis_align_items: CounterAxisAlign,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout_align: LayoutAlign,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout_grow: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding_top: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding_right: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding_bottom: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding_left: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_spacing: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fills: Vec<Paint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strokes: Vec<Paint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroke_weight: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub corner_radius: CornerRadius,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<SceneNode>,
}

impl FrameNode {
    /// A frame without auto-layout, paint, or children.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            base: NodeBase::new(name, width, height),
            layout_mode: LayoutMode::None,
            primary_axis_align_items: PrimaryAxisAlign::Min,
            counter_axis_align_items: CounterAxisAlign::Min,
            layout_align: LayoutAlign::Inherit,
            layout_grow: 0.0,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
            item_spacing: 0.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            corner_radius: CornerRadius::default(),
            effects: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Enable auto-layout in the given direction.
    pub fn with_layout(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Set padding clockwise from the top.
    pub fn with_padding(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.padding_top = top;
        self.padding_right = right;
        self.padding_bottom = bottom;
        self.padding_left = left;
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = weight;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_auto_layout(&self) -> bool {
        self.layout_mode != LayoutMode::None
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RectangleNode {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: NodeBase,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fills: Vec<Paint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strokes: Vec<Paint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroke_weight: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub corner_radius: CornerRadius,
}

impl RectangleNode {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            base: NodeBase::new(name, width, height),
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            corner_radius: CornerRadius::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextNode {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: NodeBase,
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_auto_resize: TextAutoResize,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_name: Option<FontName>,
    pub font_size: f64,
    pub letter_spacing: LetterSpacing,
    pub line_height: LineHeight,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_decoration: TextDecoration,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fills: Vec<Paint>,
}

impl TextNode {
    /// Left/top aligned text with auto line height and no tracking.
    pub fn new(name: impl Into<String>, width: f64, height: f64, font_size: f64) -> Self {
        Self {
            base: NodeBase::new(name, width, height),
            characters: String::new(),
            text_auto_resize: TextAutoResize::None,
            text_align_horizontal: TextAlignHorizontal::Left,
            text_align_vertical: TextAlignVertical::Top,
            font_name: None,
            font_size,
            letter_spacing: LetterSpacing::default(),
            line_height: LineHeight::Auto,
            text_decoration: TextDecoration::None,
            fills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineNode {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: NodeBase,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strokes: Vec<Paint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroke_weight: f64,
}

/// Groups and boolean operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupNode {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: NodeBase,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<SceneNode>,
}

/// Ellipses, polygons, stars, and vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeNode {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: NodeBase,
}

impl ShapeNode {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            base: NodeBase::new(name, width, height),
        }
    }
}

/// A node type without a dedicated variant, such as `COMPONENT_SET` or
/// `SECTION`. Only the universal and name-driven rules apply to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OtherNode {
    /// Wire name of the node type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: NodeBase,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<SceneNode>,
}

impl OtherNode {
    pub fn new(
        node_type: impl Into<String>,
        name: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            base: NodeBase::new(name, width, height),
            children: Vec::new(),
        }
    }
}

/// One element of a design document tree.
///
/// With the `serde` feature, nodes use the plugin JSON shape: a `type` tag
/// such as `"FRAME"` next to camelCase fields. Unrecognized `type` values
/// decode to [`SceneNode::Other`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Frame(FrameNode),
    Instance(FrameNode),
    Component(FrameNode),
    Rectangle(RectangleNode),
    Text(TextNode),
    Line(LineNode),
    Group(GroupNode),
    BooleanOperation(GroupNode),
    Ellipse(ShapeNode),
    Polygon(ShapeNode),
    Star(ShapeNode),
    Vector(ShapeNode),
    Other(OtherNode),
}

impl SceneNode {
    /// The node type as spelled in the document, e.g. `FRAME`.
    pub fn node_type(&self) -> &str {
        match self {
            Self::Frame(_) => "FRAME",
            Self::Instance(_) => "INSTANCE",
            Self::Component(_) => "COMPONENT",
            Self::Rectangle(_) => "RECTANGLE",
            Self::Text(_) => "TEXT",
            Self::Line(_) => "LINE",
            Self::Group(_) => "GROUP",
            Self::BooleanOperation(_) => "BOOLEAN_OPERATION",
            Self::Ellipse(_) => "ELLIPSE",
            Self::Polygon(_) => "POLYGON",
            Self::Star(_) => "STAR",
            Self::Vector(_) => "VECTOR",
            Self::Other(n) => &n.node_type,
        }
    }

    pub fn base(&self) -> &NodeBase {
        match self {
            Self::Frame(n) | Self::Instance(n) | Self::Component(n) => &n.base,
            Self::Rectangle(n) => &n.base,
            Self::Text(n) => &n.base,
            Self::Line(n) => &n.base,
            Self::Group(n) | Self::BooleanOperation(n) => &n.base,
            Self::Ellipse(n) | Self::Polygon(n) | Self::Star(n) | Self::Vector(n) => &n.base,
            Self::Other(n) => &n.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn is_visible(&self) -> bool {
        self.base().visible
    }

    /// Children of container nodes; `None` for leaf node types.
    pub fn children(&self) -> Option<&[SceneNode]> {
        match self {
            Self::Frame(n) | Self::Instance(n) | Self::Component(n) => Some(&n.children),
            Self::Group(n) | Self::BooleanOperation(n) => Some(&n.children),
            Self::Other(n) => Some(&n.children),
            _ => None,
        }
    }

    /// Fill paints of node types that carry them.
    pub fn fills(&self) -> &[Paint] {
        match self {
            Self::Frame(n) | Self::Instance(n) | Self::Component(n) => &n.fills,
            Self::Rectangle(n) => &n.fills,
            Self::Text(n) => &n.fills,
            _ => &[],
        }
    }

    /// The frame payload of frames, instances, and components.
    pub fn as_frame(&self) -> Option<&FrameNode> {
        match self {
            Self::Frame(n) | Self::Instance(n) | Self::Component(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

#[cfg(feature = "serde")]
mod wire {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    const KNOWN_TYPES: [&str; 12] = [
        "FRAME",
        "INSTANCE",
        "COMPONENT",
        "RECTANGLE",
        "TEXT",
        "LINE",
        "GROUP",
        "BOOLEAN_OPERATION",
        "ELLIPSE",
        "POLYGON",
        "STAR",
        "VECTOR",
    ];

    #[derive(Deserialize)]
    #[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
    enum Tagged {
        Frame(FrameNode),
        Instance(FrameNode),
        Component(FrameNode),
        Rectangle(RectangleNode),
        Text(TextNode),
        Line(LineNode),
        Group(GroupNode),
        BooleanOperation(GroupNode),
        Ellipse(ShapeNode),
        Polygon(ShapeNode),
        Star(ShapeNode),
        Vector(ShapeNode),
    }

    #[derive(Serialize)]
    #[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
    enum TaggedRef<'a> {
        Frame(&'a FrameNode),
        Instance(&'a FrameNode),
        Component(&'a FrameNode),
        Rectangle(&'a RectangleNode),
        Text(&'a TextNode),
        Line(&'a LineNode),
        Group(&'a GroupNode),
        BooleanOperation(&'a GroupNode),
        Ellipse(&'a ShapeNode),
        Polygon(&'a ShapeNode),
        Star(&'a ShapeNode),
        Vector(&'a ShapeNode),
    }

    impl From<Tagged> for SceneNode {
        fn from(tagged: Tagged) -> Self {
            match tagged {
                Tagged::Frame(n) => Self::Frame(n),
                Tagged::Instance(n) => Self::Instance(n),
                Tagged::Component(n) => Self::Component(n),
                Tagged::Rectangle(n) => Self::Rectangle(n),
                Tagged::Text(n) => Self::Text(n),
                Tagged::Line(n) => Self::Line(n),
                Tagged::Group(n) => Self::Group(n),
                Tagged::BooleanOperation(n) => Self::BooleanOperation(n),
                Tagged::Ellipse(n) => Self::Ellipse(n),
                Tagged::Polygon(n) => Self::Polygon(n),
                Tagged::Star(n) => Self::Star(n),
                Tagged::Vector(n) => Self::Vector(n),
            }
        }
    }

    impl<'de> Deserialize<'de> for SceneNode {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let value = Value::deserialize(deserializer)?;
            let known = value
                .get("type")
                .and_then(Value::as_str)
                .is_some_and(|t| KNOWN_TYPES.contains(&t));

            if known {
                Tagged::deserialize(value)
                    .map(SceneNode::from)
                    .map_err(D::Error::custom)
            } else {
                OtherNode::deserialize(value)
                    .map(SceneNode::Other)
                    .map_err(D::Error::custom)
            }
        }
    }

    impl Serialize for SceneNode {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let tagged = match self {
                Self::Frame(n) => TaggedRef::Frame(n),
                Self::Instance(n) => TaggedRef::Instance(n),
                Self::Component(n) => TaggedRef::Component(n),
                Self::Rectangle(n) => TaggedRef::Rectangle(n),
                Self::Text(n) => TaggedRef::Text(n),
                Self::Line(n) => TaggedRef::Line(n),
                Self::Group(n) => TaggedRef::Group(n),
                Self::BooleanOperation(n) => TaggedRef::BooleanOperation(n),
                Self::Ellipse(n) => TaggedRef::Ellipse(n),
                Self::Polygon(n) => TaggedRef::Polygon(n),
                Self::Star(n) => TaggedRef::Star(n),
                Self::Vector(n) => TaggedRef::Vector(n),
                Self::Other(n) => return n.serialize(serializer),
            };
            tagged.serialize(serializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_children_only_on_containers() {
        let frame = SceneNode::Frame(
            FrameNode::new("Card", 100.0, 50.0)
                .with_child(SceneNode::Vector(ShapeNode::new("Path", 10.0, 10.0))),
        );
        assert_eq!(frame.children().map(<[SceneNode]>::len), Some(1));

        let vector = SceneNode::Vector(ShapeNode::new("Path", 10.0, 10.0));
        assert!(vector.children().is_none());
    }

    #[test]
    fn test_fills_by_variant() {
        let mut rect = RectangleNode::new("Box", 10.0, 10.0);
        rect.fills.push(Paint::solid(Color::WHITE));
        assert_eq!(SceneNode::Rectangle(rect).fills().len(), 1);

        let star = SceneNode::Star(ShapeNode::new("Star", 10.0, 10.0));
        assert!(star.fills().is_empty());
    }

    #[test]
    fn test_node_type_names() {
        let node = SceneNode::BooleanOperation(GroupNode {
            base: NodeBase::new("Union", 4.0, 4.0),
            children: Vec::new(),
        });
        assert_eq!(node.node_type(), "BOOLEAN_OPERATION");
        assert_eq!(node.name(), "Union");
        assert!(node.is_visible());
    }

    #[test]
    fn test_other_node_keeps_type_and_children() {
        let mut set = OtherNode::new("COMPONENT_SET", "Buttons", 200.0, 80.0);
        set.children.push(SceneNode::Component(FrameNode::new("Primary", 100.0, 40.0)));
        let node = SceneNode::Other(set);

        assert_eq!(node.node_type(), "COMPONENT_SET");
        assert_eq!(node.name(), "Buttons");
        assert_eq!(node.children().map(<[SceneNode]>::len), Some(1));
        assert!(node.fills().is_empty());
        assert!(node.as_frame().is_none());
    }
}
