//! A single flattened `<meta>` tag and its string form.

use std::fmt;

use metatag_core::AttributeValue;

use crate::config::TagStyle;

/// Attribute name that gets collapsed into one normalized tag.
pub const KEYWORDS: &str = "keywords";

/// One `(name, content)` pair produced by flattening.
///
/// `content` is `None` only for a null value; it renders as `content=""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: Option<String>,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: Option<String>) -> Self {
        MetaTag { name: name.into(), content }
    }

    /// Build the single `keywords` tag from whatever value the caller supplied.
    ///
    /// Null passes through untouched. Anything else is joined with `", "`,
    /// stripped of markup and lower-cased.
    pub fn keywords(content: &AttributeValue) -> Self {
        let content = match content {
            AttributeValue::Scalar(None) => None,
            other => Some(strip_markup(&keyword_text(other)).to_lowercase()),
        };
        MetaTag::new(KEYWORDS, content)
    }

    /// Serialize without escaping `name` or `content`.
    pub fn render(&self, style: TagStyle) -> String {
        let close = match style {
            TagStyle::Html5 => ">",
            TagStyle::Xhtml => "/>",
        };
        format!(
            "<meta name=\"{}\" content=\"{}\"{close}",
            self.name,
            self.content.as_deref().unwrap_or_default()
        )
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(TagStyle::default()))
    }
}

fn keyword_text(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Scalar(s) => s.clone().unwrap_or_default(),
        AttributeValue::List(items) => items.iter().map(keyword_text).collect::<Vec<_>>().join(", "),
        AttributeValue::Map(tree) => tree.values().map(keyword_text).collect::<Vec<_>>().join(", "),
    }
}

/// Drop everything from each `<` through the next `>`.
///
/// An unterminated `<` swallows the rest of the input.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
