//! Value types read from the scene graph.

use std::fmt;

/// Render a number the way a style sheet expects it: integral values have no
/// fractional part and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(feature = "serde")]
pub(crate) fn one() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
pub(crate) fn yes() -> bool {
    true
}

/// An RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit RGB channels.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Unit used when rendering sizes into style values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitType {
    /// Plain pixels
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "px"))]
    Px,
    /// Root-relative units with a 16px root
    #[cfg_attr(feature = "serde", serde(rename = "rem"))]
    Rem,
    /// Root-relative units with a 10px root
    #[cfg_attr(feature = "serde", serde(rename = "remAs10px"))]
    RemAs10px,
}

impl UnitType {
    /// Pixels per unit.
    pub fn divisor(&self) -> f64 {
        match self {
            Self::Px => 1.0,
            Self::Rem => 16.0,
            Self::RemAs10px => 10.0,
        }
    }

    /// CSS suffix for this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem | Self::RemAs10px => "rem",
        }
    }
}

/// Declares a keyword enum mirroring a string-valued scene-graph field.
///
/// Unrecognized wire values are kept in `Other` so lookups can report them.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the known set, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The scene-graph spelling of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Auto-layout direction of a container.
    pub enum LayoutMode {
        None => "NONE",
        Horizontal => "HORIZONTAL",
        Vertical => "VERTICAL",
    }
}

keyword_enum! {
    /// Distribution of children along the primary axis.
    pub enum PrimaryAxisAlign {
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
        SpaceBetween => "SPACE_BETWEEN",
    }
}

keyword_enum! {
    /// Alignment of children on the counter axis.
    pub enum CounterAxisAlign {
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
        Baseline => "BASELINE",
    }
}

keyword_enum! {
    /// How a child aligns itself inside its auto-layout parent.
    pub enum LayoutAlign {
        Inherit => "INHERIT",
        Stretch => "STRETCH",
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
    }
}

keyword_enum! {
    pub enum TextAlignHorizontal {
        Left => "LEFT",
        Center => "CENTER",
        Right => "RIGHT",
        Justified => "JUSTIFIED",
    }
}

keyword_enum! {
    pub enum TextAlignVertical {
        Top => "TOP",
        Center => "CENTER",
        Bottom => "BOTTOM",
    }
}

keyword_enum! {
    /// How a text box resizes to fit its content.
    pub enum TextAutoResize {
        None => "NONE",
        WidthAndHeight => "WIDTH_AND_HEIGHT",
        Height => "HEIGHT",
        Truncate => "TRUNCATE",
    }
}

keyword_enum! {
    pub enum TextDecoration {
        None => "NONE",
        Underline => "UNDERLINE",
        Strikethrough => "STRIKETHROUGH",
    }
}

keyword_enum! {
    pub enum LetterSpacingUnit {
        Pixels => "PIXELS",
        Percent => "PERCENT",
    }
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::None
    }
}

impl Default for PrimaryAxisAlign {
    fn default() -> Self {
        Self::Min
    }
}

impl Default for CounterAxisAlign {
    fn default() -> Self {
        Self::Min
    }
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Inherit
    }
}

impl Default for TextAutoResize {
    fn default() -> Self {
        Self::None
    }
}

impl Default for TextDecoration {
    fn default() -> Self {
        Self::None
    }
}

/// Font family and style, e.g. `Inter` / `Semi Bold`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontName {
    #[cfg_attr(feature = "serde", serde(default))]
    pub family: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

/// Tracking between glyphs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterSpacing {
    pub value: f64,
    pub unit: LetterSpacingUnit,
}

impl LetterSpacing {
    pub fn pixels(value: f64) -> Self {
        Self { value, unit: LetterSpacingUnit::Pixels }
    }

    pub fn percent(value: f64) -> Self {
        Self { value, unit: LetterSpacingUnit::Percent }
    }

    pub fn is_pixels(&self) -> bool {
        self.unit == LetterSpacingUnit::Pixels
    }
}

impl Default for LetterSpacing {
    fn default() -> Self {
        Self::pixels(0.0)
    }
}

/// Distance between baselines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels { value: f64 },
    Percent { value: f64 },
}

/// Corner rounding of a frame or rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CornerRadius {
    Uniform(f64),
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    PerCorner {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

impl CornerRadius {
    /// Radii in CSS order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [f64; 4] {
        match *self {
            Self::Uniform(r) => [r, r, r, r],
            Self::PerCorner {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            } => [top_left, top_right, bottom_right, bottom_left],
        }
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(120.25), "120.25");
    }

    #[test]
    fn test_keyword_round_trip_keeps_unknown_values() {
        assert_eq!(PrimaryAxisAlign::from("SPACE_BETWEEN"), PrimaryAxisAlign::SpaceBetween);
        let odd = PrimaryAxisAlign::from("SPACE_AROUND");
        assert_eq!(odd, PrimaryAxisAlign::Other("SPACE_AROUND".to_string()));
        assert_eq!(odd.as_str(), "SPACE_AROUND");
        assert_eq!(String::from(TextAutoResize::WidthAndHeight), "WIDTH_AND_HEIGHT");
    }

    #[test]
    fn test_color_to_rgb8_rounds_and_clamps() {
        assert_eq!(Color::rgb(1.0, 0.5, 0.0).to_rgb8(), (255, 128, 0));
        assert_eq!(Color::rgb(1.2, -0.1, 0.2).to_rgb8(), (255, 0, 51));
    }

    #[test]
    fn test_corner_order() {
        let radius = CornerRadius::PerCorner {
            top_left: 1.0,
            top_right: 2.0,
            bottom_right: 3.0,
            bottom_left: 4.0,
        };
        assert_eq!(radius.corners(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(CornerRadius::Uniform(8.0).corners(), [8.0; 4]);
    }

    #[test]
    fn test_unit_divisors() {
        assert_eq!(UnitType::Px.divisor(), 1.0);
        assert_eq!(UnitType::Rem.divisor(), 16.0);
        assert_eq!(UnitType::RemAs10px.suffix(), "rem");
    }
}
