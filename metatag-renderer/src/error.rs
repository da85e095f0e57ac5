//! Error types for metatag-renderer.

use thiserror::Error;

use metatag_core::AttributeError;

/// Errors from the renderer's text-input conveniences.
///
/// Rendering an already-built [`AttributeTree`](metatag_core::AttributeTree)
/// cannot fail.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The defaults document could not be turned into an attribute tree.
    #[error("invalid defaults: {0}")]
    Attributes(#[from] AttributeError),
}
