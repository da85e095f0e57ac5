//! Error types for metatag-core.

use thiserror::Error;

/// Errors raised while building an [`AttributeTree`](crate::AttributeTree) from text.
///
/// Merging and lookups never fail; only the parsing helpers return this.
#[derive(Debug, Error)]
pub enum AttributeError {
    /// The YAML document could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its root was a list or scalar instead of a mapping.
    #[error("attribute document root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}
