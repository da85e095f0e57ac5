//! Attribute data model.
//!
//! An [`AttributeTree`] is an insertion-ordered mapping of names to
//! [`AttributeValue`]s. Whether a node is a mapping or a list is carried by the
//! variant, so nothing downstream has to guess from key shapes.

// ---------------------------------------------------------------------------
// AttributeValue
// ---------------------------------------------------------------------------

/// A single node in an attribute tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A string, or `None` for an explicit null.
    Scalar(Option<String>),
    /// An ordered sequence; elements may themselves be lists or mappings.
    List(Vec<AttributeValue>),
    /// A nested mapping (e.g. the `og` group of Open Graph properties).
    Map(AttributeTree),
}

impl Default for AttributeValue {
    fn default() -> Self {
        AttributeValue::Scalar(None)
    }
}

impl AttributeValue {
    /// The null scalar.
    pub fn null() -> Self {
        AttributeValue::Scalar(None)
    }

    /// Returns true for the null scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Scalar(None))
    }

    /// Returns true if this is a nested mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, AttributeValue::Map(_))
    }

    /// Borrow the string of a non-null scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Scalar(Some(s)) => Some(s),
            _ => None,
        }
    }

    /// Borrow the nested mapping, if any.
    pub fn as_map(&self) -> Option<&AttributeTree> {
        match self {
            AttributeValue::Map(tree) => Some(tree),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Scalar(None) => "null",
            AttributeValue::Scalar(Some(_)) => "string",
            AttributeValue::List(_) => "list",
            AttributeValue::Map(_) => "mapping",
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Scalar(Some(s.to_owned()))
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Scalar(Some(s))
    }
}

impl<S: Into<String>> From<Option<S>> for AttributeValue {
    fn from(s: Option<S>) -> Self {
        AttributeValue::Scalar(s.map(Into::into))
    }
}

impl<V: Into<AttributeValue>> From<Vec<V>> for AttributeValue {
    fn from(items: Vec<V>) -> Self {
        AttributeValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<AttributeTree> for AttributeValue {
    fn from(tree: AttributeTree) -> Self {
        AttributeValue::Map(tree)
    }
}

// ---------------------------------------------------------------------------
// AttributeTree
// ---------------------------------------------------------------------------

/// Insertion-ordered mapping from attribute names to values.
///
/// Re-inserting an existing key replaces the value where it stands; new keys
/// go to the end. Iteration order is the order tags are rendered in.
///
/// Lookups scan the entries linearly, so merging trees is O(n·m) in their
/// sizes. Meta attribute sets are small enough that this stays cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTree {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AttributeValue> {
        self.position(key).map(move |i| &mut self.entries[i].1)
    }

    /// Insert or replace `key`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove `key`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Chainable [`insert`](Self::insert) for building trees inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &AttributeValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeTree
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = AttributeTree::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

impl IntoIterator for AttributeTree {
    type Item = (String, AttributeValue);
    type IntoIter = std::vec::IntoIter<(String, AttributeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
