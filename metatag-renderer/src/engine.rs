//! [`MetaRenderer`] — stored attributes plus the flattening pass.
//!
//! # Flattening
//!
//! | Value                 | Tags emitted                                        |
//! |-----------------------|-----------------------------------------------------|
//! | `keywords` (top level)| one tag, joined with `", "`, markup stripped, lower |
//! | null (top level)      | none; a stored null hides the default for `name`    |
//! | scalar / nested null  | one tag `(name, value)`                             |
//! | list                  | each element flattened under the same `name`        |
//! | mapping               | each entry flattened under `name:key`               |

use metatag_core::{merge_trees, AttributeTree, AttributeValue};

use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::tag::{MetaTag, KEYWORDS};

// ---------------------------------------------------------------------------
// Flattening
// ---------------------------------------------------------------------------

/// Flatten `value` under `name`, appending tags depth-first, left to right.
fn flatten_into(name: &str, value: AttributeValue, out: &mut Vec<MetaTag>) {
    match value {
        AttributeValue::Scalar(content) => out.push(MetaTag::new(name, content)),
        AttributeValue::List(items) => {
            for item in items {
                flatten_into(name, item, out);
            }
        }
        AttributeValue::Map(tree) => {
            tracing::trace!("flattening nested attributes under {name}");
            for (key, child) in tree {
                flatten_into(&format!("{name}:{key}"), child, out);
            }
        }
    }
}

/// Flatten a fully merged tree.
///
/// Only the top level is special: `keywords` always yields one tag, and any
/// other null entry yields none. Nulls nested in lists still emit a tag.
pub fn flatten(merged: AttributeTree) -> Vec<MetaTag> {
    let mut tags = Vec::with_capacity(merged.len());
    for (name, content) in merged {
        if name == KEYWORDS {
            tags.push(MetaTag::keywords(&content));
        } else if content.is_null() {
            tracing::trace!("skipping null attribute {name}");
        } else {
            flatten_into(&name, content, &mut tags);
        }
    }
    tags
}

// ---------------------------------------------------------------------------
// MetaRenderer
// ---------------------------------------------------------------------------

/// Holds the attributes set so far and renders them over per-call defaults.
///
/// Each instance owns its state; share one across threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct MetaRenderer {
    config: RendererConfig,
    attributes: AttributeTree,
}

impl MetaRenderer {
    /// Renderer with default configuration (HTML5 tags).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RendererConfig) -> Self {
        MetaRenderer { config, attributes: AttributeTree::new() }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Deep-merge `attributes` into the stored state and return the result.
    ///
    /// Incoming values win; nested mappings merge key by key.
    pub fn set(&mut self, attributes: AttributeTree) -> &AttributeTree {
        let current = std::mem::take(&mut self.attributes);
        self.attributes = merge_trees(current, attributes);
        tracing::debug!("meta attributes set: {} top-level entries", self.attributes.len());
        &self.attributes
    }

    /// Drop every stored attribute.
    pub fn clear(&mut self) -> &AttributeTree {
        self.attributes = AttributeTree::new();
        tracing::debug!("meta attributes cleared");
        &self.attributes
    }

    /// Current stored attributes.
    pub fn attributes(&self) -> &AttributeTree {
        &self.attributes
    }

    /// Flattened tags for `defaults` overlaid with the stored attributes.
    ///
    /// Stored values win over defaults. The stored state is not modified.
    pub fn tags(&self, defaults: &AttributeTree) -> Vec<MetaTag> {
        let merged = merge_trees(defaults.clone(), self.attributes.clone());
        flatten(merged)
    }

    /// Render every tag, newline-separated. Empty input yields `""`.
    pub fn display(&self, defaults: &AttributeTree) -> String {
        let style = self.config.tag_style();
        let tags = self.tags(defaults);
        tracing::debug!("rendering {} meta tags ({:?})", tags.len(), style);
        tags.iter()
            .map(|tag| tag.render(style))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// [`display`](Self::display) with defaults given as a YAML document.
    pub fn display_yaml(&self, defaults: &str) -> Result<String, RenderError> {
        let defaults = AttributeTree::from_yaml_str(defaults)?;
        Ok(self.display(&defaults))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(doc: &str) -> AttributeTree {
        AttributeTree::from_yaml_str(doc).expect("fixture")
    }

    #[test]
    fn renderer_new_is_empty_html5() {
        let renderer = MetaRenderer::new();
        assert!(renderer.attributes().is_empty());
        assert!(renderer.config().self_closing_tags);
        assert_eq!(renderer.display(&AttributeTree::new()), "");
    }

    #[test]
    fn set_returns_merged_state() {
        let mut renderer = MetaRenderer::new();
        renderer.set(tree("og:\n  title: T"));
        let state = renderer.set(tree("og:\n  desc: D"));
        assert_eq!(state, &tree("og:\n  title: T\n  desc: D"));
    }

    #[test]
    fn clear_returns_empty_state() {
        let mut renderer = MetaRenderer::new();
        renderer.set(tree("a: '1'"));
        assert!(renderer.clear().is_empty());
        assert!(renderer.attributes().is_empty());
    }

    #[test]
    fn flatten_namespaces_nested_maps() {
        let tags = flatten(tree("og:\n  image:\n    url: a.png\n    width: '10'"));
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["og:image:url", "og:image:width"]);
    }

    #[test]
    fn flatten_list_of_maps_keeps_prefix() {
        let tags = flatten(tree("og:\n  image:\n    - url: a.png\n    - url: b.png"));
        assert_eq!(
            tags,
            vec![
                MetaTag::new("og:image:url", Some("a.png".to_string())),
                MetaTag::new("og:image:url", Some("b.png".to_string())),
            ]
        );
    }

    #[test]
    fn flatten_nested_lists_share_name() {
        let tags = flatten(tree("tag: [a, [b, c]]"));
        let contents: Vec<_> = tags.iter().filter_map(|t| t.content.as_deref()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
        assert!(tags.iter().all(|t| t.name == "tag"));
    }

    #[test]
    fn nested_keywords_are_not_special() {
        let tags = flatten(tree("og:\n  keywords: [<b>A</b>, B]"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].content.as_deref(), Some("<b>A</b>"));
    }

    #[test]
    fn flatten_skips_top_level_null_but_not_keywords() {
        let tags = flatten(tree("keywords: ~\nrobots: ~"));
        assert_eq!(tags, vec![MetaTag::new("keywords", None)]);
    }

    #[test]
    fn flatten_keeps_null_list_elements() {
        let tags = flatten(tree("tag: [a, ~]"));
        assert_eq!(
            tags,
            vec![
                MetaTag::new("tag", Some("a".to_string())),
                MetaTag::new("tag", None),
            ]
        );
    }

    #[test]
    fn display_yaml_reports_bad_defaults() {
        let renderer = MetaRenderer::new();
        let err = renderer.display_yaml("- not\n- a mapping").unwrap_err();
        assert!(err.to_string().contains("invalid defaults"), "got: {err}");
    }
}
