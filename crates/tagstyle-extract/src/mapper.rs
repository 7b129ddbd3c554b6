//! Translation of a single scene node into style declarations.

use crate::classify::is_image_node;
use crate::counter::TextCount;
use crate::css_data::{CssData, CssProperty, CssValue};
use crate::naming::resolve_class_name;
use crate::options::{ExtractOptions, NamingMarkers};
use crate::tables;
use smallvec::{smallvec, SmallVec};
use tagstyle_core::{
    format_number, CssValueFormatter, FrameNode, LayoutAlign, LayoutMode, LineHeight, NodeBase,
    Paint, RectangleNode, Result, SceneNode, StyleError, TextAutoResize, TextDecoration, TextNode,
    UnitType, ValueFormatter,
};

/// Maps scene nodes to [`CssData`].
///
/// The extractor holds no per-run state; the [`TextCount`] passed to each
/// call carries the only state shared across a traversal.
#[derive(Debug, Clone, Default)]
pub struct StyleExtractor<F = CssValueFormatter> {
    formatter: F,
    markers: NamingMarkers,
}

impl StyleExtractor {
    /// Create an extractor with the stock formatter and default markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor using the markers from `options`.
    pub fn from_options(options: &ExtractOptions) -> Self {
        Self::new().with_markers(options.markers.clone())
    }
}

impl<F: ValueFormatter> StyleExtractor<F> {
    /// Create an extractor with a custom value formatter.
    pub fn with_formatter(formatter: F) -> Self {
        Self {
            formatter,
            markers: NamingMarkers::default(),
        }
    }

    pub fn with_markers(mut self, markers: NamingMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn markers(&self) -> &NamingMarkers {
        &self.markers
    }

    /// Compute the class name and declarations of one node.
    ///
    /// Invisible nodes and vectors get no declarations, which yields the
    /// empty result. Children are not visited. `text_count` is threaded
    /// through for callers that name text nodes; this call does not advance it.
    pub fn css_data_for_tag(
        &self,
        node: &SceneNode,
        unit: UnitType,
        text_count: &mut TextCount,
    ) -> Result<CssData> {
        let base = node.base();
        let mut props = Declarations::default();

        if base.visible && !node.is_vector() {
            validate_geometry(node)?;
            self.push_universal(base, &mut props);

            match node {
                SceneNode::Frame(frame) | SceneNode::Instance(frame) | SceneNode::Component(frame) => {
                    self.push_frame(node, frame, unit, &mut props)?;
                }
                SceneNode::Rectangle(rect) => self.push_rectangle(node, rect, unit, &mut props),
                SceneNode::Text(text) => self.push_text(text, unit, &mut props)?,
                SceneNode::Line(line) => {
                    push_size(base, &mut props);
                    if let Some(stroke) = line.strokes.first() {
                        props.push("border", self.border(stroke, line.stroke_weight, unit));
                    }
                }
                SceneNode::Group(_)
                | SceneNode::Ellipse(_)
                | SceneNode::Polygon(_)
                | SceneNode::Star(_) => push_size(base, &mut props),
                SceneNode::BooleanOperation(_) | SceneNode::Vector(_) | SceneNode::Other(_) => {}
            }

            if self.markers.has_image_prefix(&base.name) {
                props.push("background-color", "gray");
            }
            if self.markers.has_pressable_prefix(&base.name) {
                props.push("width", floor_px(base.width));
            }
        }

        if props.is_empty() {
            tracing::trace!(
                node_type = node.node_type(),
                layer = %base.name,
                "node needs no generated style"
            );
            return Ok(CssData::empty());
        }

        let class_name = resolve_class_name(node, is_image_node(node), &self.markers);
        tracing::debug!(
            node_type = node.node_type(),
            class_name = %class_name,
            properties = props.len(),
            text_count = text_count.get(),
            "extracted node style"
        );

        Ok(CssData {
            class_name,
            properties: props.into_inner(),
        })
    }

    fn push_universal(&self, base: &NodeBase, props: &mut Declarations) {
        if let Some(opacity) = base.opacity {
            let opacity = if opacity == 0.0 { 1.0 } else { opacity };
            if opacity < 1.0 {
                props.push("opacity", opacity);
            }
        }
        if let Some(rotation) = base.rotation {
            if rotation != 0.0 {
                props.push(
                    "transform",
                    format!("rotate({}deg)", format_number(rotation.floor())),
                );
            }
        }
    }

    fn push_frame(
        &self,
        node: &SceneNode,
        frame: &FrameNode,
        unit: UnitType,
        props: &mut Declarations,
    ) -> Result<()> {
        self.push_radius(node, unit, props);

        let shadow = self.formatter.box_shadow(node, unit);
        if !shadow.is_empty() {
            props.push("box-shadow", shadow);
        }

        if frame.is_auto_layout() {
            let direction = if frame.layout_mode == LayoutMode::Horizontal {
                "row"
            } else {
                "column"
            };
            props.push("flex-direction", direction);
            props.push(
                "justify-content",
                tables::justify_content(&frame.primary_axis_align_items)?,
            );
            props.push(
                "align-items",
                tables::align_items(&frame.counter_axis_align_items)?,
            );

            if frame.layout_align == LayoutAlign::Stretch {
                props.push("align-self", "stretch");
            }

            // Pressable wrappers get an explicit width instead of flexing.
            if !self.markers.has_pressable_prefix(&frame.base.name)
                && (frame.layout_grow > 0.0 || frame.layout_align == LayoutAlign::Inherit)
            {
                let grow = if frame.layout_grow == 0.0 { 1.0 } else { frame.layout_grow };
                props.push("flex", grow);
            }

            if let Some(padding) = self.padding(frame, unit) {
                props.push("padding", padding);
            }

            // No `gap`: the target style format does not support it.
        } else {
            push_size(&frame.base, props);
        }

        self.push_background(&frame.fills, props);
        if let Some(stroke) = frame.strokes.first() {
            props.push("border", self.border(stroke, frame.stroke_weight, unit));
        }

        Ok(())
    }

    fn push_rectangle(
        &self,
        node: &SceneNode,
        rect: &RectangleNode,
        unit: UnitType,
        props: &mut Declarations,
    ) {
        self.push_radius(node, unit, props);
        push_size(&rect.base, props);
        self.push_background(&rect.fills, props);
        if let Some(stroke) = rect.strokes.first() {
            props.push("border", self.border(stroke, rect.stroke_weight, unit));
        }
    }

    fn push_text(&self, text: &TextNode, unit: UnitType, props: &mut Declarations) -> Result<()> {
        if text.text_auto_resize != TextAutoResize::WidthAndHeight {
            props.push("max-width", format!("{}px", format_number(text.base.width)));
        }

        props.push("text-align", tables::text_align(&text.text_align_horizontal)?);
        props.push(
            "vertical-align",
            tables::vertical_align(&text.text_align_vertical)?,
        );

        if let Some(font) = &text.font_name {
            if !font.family.is_empty() {
                props.push("font-family", font.family.as_str());
            }
            if !font.style.is_empty() {
                props.push("font-weight", font.style.to_lowercase());
            }
        }

        props.push("font-size", format!("{}px", format_number(text.font_size)));

        let spacing = &text.letter_spacing;
        if spacing.value != 0.0 {
            let value = if spacing.is_pixels() {
                self.formatter.size(round2(spacing.value), unit)
            } else {
                format!("{}%", format_number(spacing.value))
            };
            props.push("letter-spacing", value);
        }

        // The pixel/percent choice follows the letter-spacing unit, not the
        // line-height unit.
        let line_height = match text.line_height {
            LineHeight::Auto => "auto".to_string(),
            LineHeight::Pixels { value } | LineHeight::Percent { value } => {
                if spacing.is_pixels() {
                    self.formatter.size(value, unit)
                } else {
                    format!("{}%", format_number(value))
                }
            }
        };
        props.push("line-height", line_height);

        if matches!(
            text.text_decoration,
            TextDecoration::Underline | TextDecoration::Strikethrough
        ) {
            props.push(
                "text-decoration",
                tables::text_decoration(&text.text_decoration)?,
            );
        }

        if let Some(fill) = text.fills.first() {
            props.push("color", self.formatter.color(fill));
        }

        Ok(())
    }

    fn push_radius(&self, node: &SceneNode, unit: UnitType, props: &mut Declarations) {
        let radius = self.formatter.border_radius(node, unit);
        if !radius.is_empty() {
            props.push("border-radius", radius);
        }
    }

    /// Image fills are rendered through the image placeholder, not a background.
    fn push_background(&self, fills: &[Paint], props: &mut Declarations) {
        if let Some(fill) = fills.first() {
            if !fill.is_image() {
                props.push("background-color", self.formatter.color(fill));
            }
        }
    }

    fn border(&self, stroke: &Paint, weight: f64, unit: UnitType) -> String {
        format!(
            "{} solid {}",
            self.formatter.size(weight, unit),
            self.formatter.color(stroke)
        )
    }

    /// Padding shorthand, collapsed to one, two, or four values.
    ///
    /// Uniform zero padding yields `None`; the two- and four-value forms are
    /// emitted even when some sides are zero.
    fn padding(&self, frame: &FrameNode, unit: UnitType) -> Option<String> {
        let (top, right, bottom, left) = (
            frame.padding_top,
            frame.padding_right,
            frame.padding_bottom,
            frame.padding_left,
        );

        let sides: SmallVec<[f64; 4]> = if top == bottom && top == left && top == right {
            if top > 0.0 {
                smallvec![top]
            } else {
                return None;
            }
        } else if top == bottom && left == right {
            smallvec![top, left]
        } else {
            smallvec![top, right, bottom, left]
        };

        Some(
            sides
                .iter()
                .map(|&side| self.formatter.size(side, unit))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Compute the style of one node with the stock extractor.
pub fn css_data_for_tag(
    node: &SceneNode,
    unit: UnitType,
    text_count: &mut TextCount,
) -> Result<CssData> {
    StyleExtractor::new().css_data_for_tag(node, unit, text_count)
}

/// Ordered declarations collected for one node.
#[derive(Debug, Default)]
struct Declarations(Vec<CssProperty>);

impl Declarations {
    fn push(&mut self, name: &str, value: impl Into<CssValue>) {
        self.0.push(CssProperty {
            name: name.to_string(),
            value: value.into(),
        });
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_inner(self) -> Vec<CssProperty> {
        self.0
    }
}

fn push_size(base: &NodeBase, props: &mut Declarations) {
    props.push("height", floor_px(base.height));
    props.push("width", floor_px(base.width));
}

fn floor_px(value: f64) -> String {
    format!("{}px", format_number(value.floor()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reject geometry a renderer cannot use.
fn validate_geometry(node: &SceneNode) -> Result<()> {
    let base = node.base();
    let fields = [
        ("width", Some(base.width)),
        ("height", Some(base.height)),
        ("opacity", base.opacity),
        ("rotation", base.rotation),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(StyleError::malformed(
                    node.node_type(),
                    format!("`{}` of {:?} is not a finite number", field, base.name),
                ));
            }
        }
    }
    if base.width < 0.0 || base.height < 0.0 {
        return Err(StyleError::malformed(
            node.node_type(),
            format!("{:?} has a negative size", base.name),
        ));
    }
    if let SceneNode::Text(text) = node {
        if !text.font_size.is_finite() {
            return Err(StyleError::malformed(
                "TEXT",
                format!("`fontSize` of {:?} is not a finite number", base.name),
            ));
        }
    }
    Ok(())
}
