//! Renderer configuration.

use serde::{Deserialize, Serialize};

/// How a `<meta>` tag is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagStyle {
    /// `<meta ...>`, the HTML5 void element.
    #[default]
    Html5,
    /// `<meta .../>`, the XHTML self-closed element.
    Xhtml,
}

/// Construction-time options for [`MetaRenderer`](crate::MetaRenderer).
///
/// Deserializes from `{ "selfClosingTags": bool }`; missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
    /// `true` (the default) emits HTML5 tags with no trailing slash;
    /// `false` emits XHTML-style `/>` endings.
    pub self_closing_tags: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig { self_closing_tags: true }
    }
}

impl RendererConfig {
    pub fn html5() -> Self {
        Self::default()
    }

    pub fn xhtml() -> Self {
        RendererConfig { self_closing_tags: false }
    }

    pub fn tag_style(&self) -> TagStyle {
        if self.self_closing_tags {
            TagStyle::Html5
        } else {
            TagStyle::Xhtml
        }
    }
}
