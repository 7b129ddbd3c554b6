//! Fills, strokes, and effects.

use crate::types::{Color, Vector};
use smallvec::SmallVec;

/// A fill or stroke definition.
///
/// Only the first paint of a fills/strokes list is consulted when styling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Paint {
    Solid {
        color: Color,
        #[cfg_attr(feature = "serde", serde(default = "crate::types::one"))]
        opacity: f64,
    },
    GradientLinear {
        #[cfg_attr(feature = "serde", serde(rename = "gradientStops"))]
        stops: SmallVec<[ColorStop; 4]>,
    },
    GradientRadial {
        #[cfg_attr(feature = "serde", serde(rename = "gradientStops"))]
        stops: SmallVec<[ColorStop; 4]>,
    },
    GradientAngular {
        #[cfg_attr(feature = "serde", serde(rename = "gradientStops"))]
        stops: SmallVec<[ColorStop; 4]>,
    },
    GradientDiamond {
        #[cfg_attr(feature = "serde", serde(rename = "gradientStops"))]
        stops: SmallVec<[ColorStop; 4]>,
    },
    Image {
        #[cfg_attr(feature = "serde", serde(default, rename = "imageHash"))]
        image_hash: Option<String>,
        #[cfg_attr(feature = "serde", serde(default, rename = "scaleMode"))]
        scale_mode: Option<String>,
    },
}

impl Paint {
    /// A fully opaque solid paint.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color, opacity: 1.0 }
    }

    pub fn image() -> Self {
        Self::Image {
            image_hash: None,
            scale_mode: None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// Stops of a gradient paint; empty for other paints.
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Self::GradientLinear { stops }
            | Self::GradientRadial { stops }
            | Self::GradientAngular { stops }
            | Self::GradientDiamond { stops } => stops,
            Self::Solid { .. } | Self::Image { .. } => &[],
        }
    }
}

/// One stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

/// A shadow cast by or into a node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    pub color: Color,
    pub offset: Vector,
    pub radius: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spread: f64,
    #[cfg_attr(feature = "serde", serde(default = "crate::types::yes"))]
    pub visible: bool,
}

/// A visual effect applied to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur {
        radius: f64,
        #[cfg_attr(feature = "serde", serde(default = "crate::types::yes"))]
        visible: bool,
    },
    BackgroundBlur {
        radius: f64,
        #[cfg_attr(feature = "serde", serde(default = "crate::types::yes"))]
        visible: bool,
    },
}
