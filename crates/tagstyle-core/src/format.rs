//! Rendering of raw scene values into style value strings.
//!
//! The extractor only decides *which* properties a node gets; how a size,
//! color, radius, or shadow is spelled is delegated to a [`ValueFormatter`].

use crate::node::SceneNode;
use crate::paint::{Effect, Paint, Shadow};
use crate::types::{format_number, Color, UnitType};

/// Formats scene values into style value strings.
///
/// Implementations must be deterministic and free of side effects.
pub trait ValueFormatter {
    /// Format a pixel size in the given unit.
    fn size(&self, value: f64, unit: UnitType) -> String;

    /// Format a paint as a color.
    fn color(&self, paint: &Paint) -> String;

    /// Border radius of the node, or an empty string when it has none.
    fn border_radius(&self, node: &SceneNode, unit: UnitType) -> String;

    /// Box shadow of the node, or an empty string when it has none.
    fn box_shadow(&self, node: &SceneNode, unit: UnitType) -> String;
}

/// The stock formatter producing plain CSS values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssValueFormatter;

impl CssValueFormatter {
    pub fn new() -> Self {
        Self
    }

    fn color_value(&self, color: Color, opacity: f64) -> String {
        let (r, g, b) = color.to_rgb8();
        let alpha = ((color.a * opacity).clamp(0.0, 1.0) * 100.0).round() / 100.0;
        if alpha >= 1.0 {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, format_number(alpha))
        }
    }

    fn shadow_value(&self, shadow: &Shadow, inset: bool, unit: UnitType) -> String {
        format!(
            "{}{} {} {} {} {}",
            if inset { "inset " } else { "" },
            self.size(shadow.offset.x, unit),
            self.size(shadow.offset.y, unit),
            self.size(shadow.radius, unit),
            self.size(shadow.spread, unit),
            self.color_value(shadow.color, 1.0),
        )
    }
}

impl ValueFormatter for CssValueFormatter {
    fn size(&self, value: f64, unit: UnitType) -> String {
        format!("{}{}", format_number(value / unit.divisor()), unit.suffix())
    }

    fn color(&self, paint: &Paint) -> String {
        match paint {
            Paint::Solid { color, opacity } => self.color_value(*color, *opacity),
            Paint::Image { .. } => "transparent".to_string(),
            gradient => match gradient.stops().first() {
                Some(stop) => self.color_value(stop.color, 1.0),
                None => "transparent".to_string(),
            },
        }
    }

    fn border_radius(&self, node: &SceneNode, unit: UnitType) -> String {
        let radius = match node {
            SceneNode::Frame(n) | SceneNode::Instance(n) | SceneNode::Component(n) => {
                n.corner_radius
            }
            SceneNode::Rectangle(n) => n.corner_radius,
            _ => return String::new(),
        };

        let corners = radius.corners();
        if corners.iter().all(|&r| r == corners[0]) {
            if corners[0] == 0.0 {
                String::new()
            } else {
                self.size(corners[0], unit)
            }
        } else {
            corners
                .iter()
                .map(|&r| self.size(r, unit))
                .collect::<Vec<_>>()
                .join(" ")
        }
    }

    fn box_shadow(&self, node: &SceneNode, unit: UnitType) -> String {
        let Some(frame) = node.as_frame() else {
            return String::new();
        };

        frame
            .effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::DropShadow(s) if s.visible => Some(self.shadow_value(s, false, unit)),
                Effect::InnerShadow(s) if s.visible => Some(self.shadow_value(s, true, unit)),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
