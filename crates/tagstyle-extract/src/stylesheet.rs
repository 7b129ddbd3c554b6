//! Rendering of a tag tree into stylesheet source.

use crate::css_data::CssData;
use crate::options::CssStyle;
use crate::tree::Tag;
use indexmap::{IndexMap, IndexSet};

/// Component kind used for `styled-components` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Primitive {
    View,
    Text,
    Image,
}

impl Primitive {
    fn of(tag: &Tag) -> Self {
        if tag.is_text {
            Self::Text
        } else if tag.is_image {
            Self::Image
        } else {
            Self::View
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Text => "Text",
            Self::Image => "Image",
        }
    }
}

/// Render every styled tag under `root` as one stylesheet.
///
/// Tags without declarations are skipped. When two tags share a class name
/// only the first, in document order, is rendered. Distinct class names that
/// reduce to the same identifier keep their own rules; later ones get a
/// numeric suffix (`Text`, `Text_2`, ...).
pub fn render_stylesheet(root: &Tag, style: CssStyle) -> String {
    let mut rules: IndexMap<&str, (Primitive, &CssData)> = IndexMap::new();
    root.walk(&mut |tag| {
        if tag.css.is_empty() {
            return;
        }
        rules
            .entry(tag.css.class_name.as_str())
            .or_insert((Primitive::of(tag), &tag.css));
    });

    let mut taken = IndexSet::new();
    rules
        .values()
        .map(|(primitive, css)| {
            let class_name = unique_identifier(&css.class_name, &mut taken);
            match style {
                CssStyle::Css => css_rule(&class_name, css),
                CssStyle::StyledComponents => styled_component(&class_name, *primitive, css),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn declarations(css: &CssData) -> String {
    css.properties
        .iter()
        .map(|p| format!("  {}: {};\n", p.name, p.value))
        .collect()
}

fn css_rule(class_name: &str, css: &CssData) -> String {
    format!(".{} {{\n{}}}\n", class_name, declarations(css))
}

fn styled_component(class_name: &str, primitive: Primitive, css: &CssData) -> String {
    format!(
        "const {} = styled.{}`\n{}`\n",
        class_name,
        primitive.as_str(),
        declarations(css)
    )
}

/// Strip characters that cannot appear in a class or component name.
fn identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Identifier for `name` not yet present in `taken`.
fn unique_identifier(name: &str, taken: &mut IndexSet<String>) -> String {
    let base = identifier(name);
    if taken.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", base, n);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
