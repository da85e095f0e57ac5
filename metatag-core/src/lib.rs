//! metatag core library — attribute data model, deep merge, errors.
//!
//! - [`types`] — [`AttributeValue`] and the ordered [`AttributeTree`]
//! - [`merge`] — recursive deep merge used by `set` and `display`
//! - [`codec`] — serde support and YAML/JSON parsing helpers
//! - [`error`] — [`AttributeError`]

pub mod codec;
pub mod error;
pub mod merge;
pub mod types;

pub use error::AttributeError;
pub use merge::{merge_trees, merge_values};
pub use types::{AttributeTree, AttributeValue};
