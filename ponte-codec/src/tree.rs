//! The ordered field tree the codec renders and parses.
//!
//! Keys are unique within a tree and keep declaration order, so encoded
//! documents list fields in the order they were inserted.

use indexmap::IndexMap;

/// A field value: a scalar, a nested tree, or an ordered list of values.
///
/// The encoder accepts all three. The decoder only ever produces `List`
/// children (the singleton-wrapping convention); [`Value::first`] and
/// friends unwrap that.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Scalar text content.
    Text(String),
    /// A nested element with child fields.
    Tree(FieldTree),
    /// Repeated elements sharing one tag, or a decoded singleton wrapper.
    List(Vec<Value>),
}

impl Value {
    /// Unwraps one level of list wrapping, yielding the first element.
    ///
    /// Non-list values return themselves, so this is safe to call on trees
    /// produced by either the builder API or the decoder.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        match self {
            Value::List(items) => items.first(),
            other => Some(other),
        }
    }

    /// The scalar text of this value after singleton unwrapping.
    #[must_use]
    pub fn scalar(&self) -> Option<&str> {
        match self.first()? {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The nested tree of this value after singleton unwrapping.
    #[must_use]
    pub fn tree(&self) -> Option<&FieldTree> {
        match self.first()? {
            Value::Tree(t) => Some(t),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<FieldTree> for Value {
    fn from(t: FieldTree) -> Self {
        Value::Tree(t)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// An insertion-ordered mapping from field name to [`Value`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldTree(IndexMap<String, Value>);

impl FieldTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`FieldTree::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends a value under `name`, accumulating repeated names into a
    /// list. This is how the decoder builds every child entry.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        match self.0.entry(name.into()) {
            indexmap::map::Entry::Occupied(mut entry) => match entry.get_mut() {
                Value::List(items) => items.push(value),
                other => {
                    let prev = std::mem::replace(other, Value::List(Vec::new()));
                    *other = Value::List(vec![prev, value]);
                }
            },
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(Value::List(vec![value]));
            }
        }
    }

    /// Returns the raw value under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the scalar under `name` after singleton unwrapping.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.get(name)?.scalar()
    }

    /// Returns the nested tree under `name` after singleton unwrapping.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&FieldTree> {
        self.get(name)?.tree()
    }

    /// Number of fields in this tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this tree has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a FieldTree {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
