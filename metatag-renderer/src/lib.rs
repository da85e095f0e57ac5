//! # metatag-renderer
//!
//! Renders `<meta>` tags from nested attribute trees, Open Graph style
//! namespacing included.
//!
//! ## Usage
//!
//! ```rust
//! use metatag_renderer::{AttributeTree, MetaRenderer};
//!
//! let mut meta = MetaRenderer::new();
//! meta.set(AttributeTree::new().with("og", AttributeTree::new().with("title", "Home")));
//!
//! let defaults = AttributeTree::new().with("description", "A site");
//! assert_eq!(
//!     meta.display(&defaults),
//!     "<meta name=\"description\" content=\"A site\">\n<meta name=\"og:title\" content=\"Home\">"
//! );
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod tag;

pub use config::{RendererConfig, TagStyle};
pub use engine::MetaRenderer;
pub use error::RenderError;
pub use metatag_core::{AttributeError, AttributeTree, AttributeValue};
pub use tag::MetaTag;
