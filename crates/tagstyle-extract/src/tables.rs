//! Scene keyword to CSS keyword tables.
//!
//! Every documented scene value has an entry. Values outside the known set
//! fail with [`StyleError::Lookup`] instead of falling back to a guess.

use tagstyle_core::{
    CounterAxisAlign, PrimaryAxisAlign, Result, StyleError, TextAlignHorizontal, TextAlignVertical,
    TextDecoration,
};

pub fn justify_content(value: &PrimaryAxisAlign) -> Result<&'static str> {
    match value {
        PrimaryAxisAlign::Min => Ok("flex-start"),
        PrimaryAxisAlign::Center => Ok("center"),
        PrimaryAxisAlign::Max => Ok("flex-end"),
        PrimaryAxisAlign::SpaceBetween => Ok("space-between"),
        PrimaryAxisAlign::Other(v) => Err(StyleError::lookup("justify-content", v.as_str())),
    }
}

pub fn align_items(value: &CounterAxisAlign) -> Result<&'static str> {
    match value {
        CounterAxisAlign::Min => Ok("flex-start"),
        CounterAxisAlign::Center => Ok("center"),
        CounterAxisAlign::Max => Ok("flex-end"),
        CounterAxisAlign::Baseline => Ok("baseline"),
        CounterAxisAlign::Other(v) => Err(StyleError::lookup("align-items", v.as_str())),
    }
}

pub fn text_align(value: &TextAlignHorizontal) -> Result<&'static str> {
    match value {
        TextAlignHorizontal::Left => Ok("left"),
        TextAlignHorizontal::Center => Ok("center"),
        TextAlignHorizontal::Right => Ok("right"),
        TextAlignHorizontal::Justified => Ok("justify"),
        TextAlignHorizontal::Other(v) => Err(StyleError::lookup("text-align", v.as_str())),
    }
}

pub fn vertical_align(value: &TextAlignVertical) -> Result<&'static str> {
    match value {
        TextAlignVertical::Top => Ok("top"),
        TextAlignVertical::Center => Ok("middle"),
        TextAlignVertical::Bottom => Ok("bottom"),
        TextAlignVertical::Other(v) => Err(StyleError::lookup("vertical-align", v.as_str())),
    }
}

/// `NONE` has no keyword: the caller emits nothing for it.
pub fn text_decoration(value: &TextDecoration) -> Result<&'static str> {
    match value {
        TextDecoration::Underline => Ok("underline"),
        TextDecoration::Strikethrough => Ok("line-through"),
        TextDecoration::None | TextDecoration::Other(_) => {
            Err(StyleError::lookup("text-decoration", value.as_str()))
        }
    }
}
