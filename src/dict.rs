//! Ordered dictionary type for PDF objects.
//!
//! [`Dict`] wraps an [`IndexMap`] so entries render in the order they were
//! inserted, which keeps both string forms deterministic without sorting.
//!
//! ## Examples
//!
//! ```rust
//! use pdfobj::{Dict, Object};
//!
//! let mut dict = Dict::new();
//! dict.insert("Type", Object::name("Page"));
//! dict.insert("Parent", Object::reference(2, 0));
//!
//! assert_eq!(dict.canonical_string(), "<</Type/Page/Parent 2 0 R>>");
//! ```

use crate::fault::FaultReporter;
use crate::{render, Object};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// An insertion-ordered map of names to objects.
///
/// Keys are stored decoded, without the leading slash.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dict(IndexMap<String, Object>);

impl Dict {
    /// Creates an empty `Dict`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::Dict;
    ///
    /// let dict = Dict::new();
    /// assert!(dict.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Dict(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dict(IndexMap::with_capacity(capacity))
    }

    /// Inserts an entry, returning the previous value stored under `key`.
    ///
    /// Replacing a value keeps the key at its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Object) -> Option<Object> {
        self.0.insert(key.into(), value)
    }

    /// Removes an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Object> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Object> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Object> {
        self.0.iter()
    }

    /// Renders the debug form with entries indented `level` tab stops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::{Dict, Object};
    ///
    /// let mut dict = Dict::new();
    /// dict.insert("Count", Object::Integer(3));
    /// assert_eq!(dict.indented_string(1), "<<\n\t<Count, 3>\n>>");
    /// ```
    #[must_use]
    pub fn indented_string(&self, level: usize) -> String {
        let mut out = String::new();
        render::write_dict(&render::DebugForm, &mut out, self, level);
        out
    }

    #[must_use]
    pub fn debug_string(&self) -> String {
        self.indented_string(1)
    }

    /// Renders the exact on-disk form, aborting the process on values that
    /// have no valid syntax.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        self.canonical_string_with(&crate::FaultPolicy::Abort)
    }

    /// Renders the exact on-disk form, handing unrenderable values to `reporter`.
    #[must_use]
    pub fn canonical_string_with(&self, reporter: &dyn FaultReporter) -> String {
        let mut out = String::new();
        render::write_dict(&render::CanonicalForm::new(reporter), &mut out, self, 0);
        out
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

impl Serialize for Dict {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl IntoIterator for Dict {
    type Item = (String, Object);
    type IntoIter = indexmap::map::IntoIter<String, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Object);
    type IntoIter = indexmap::map::Iter<'a, String, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Object)> for Dict {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        Dict(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Array;

    fn page() -> Dict {
        let mut dict = Dict::new();
        dict.insert("Type", Object::name("Page"));
        dict.insert("Rotate", Object::Integer(90));
        dict
    }

    #[test]
    fn test_insert_keeps_position_on_replace() {
        let mut dict = page();
        dict.insert("Type", Object::name("Pages"));
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec!["Type", "Rotate"]);
        assert_eq!(dict.get("Type"), Some(&Object::name("Pages")));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut dict = page();
        dict.insert("Parent", Object::reference(1, 0));
        assert_eq!(dict.remove("Rotate"), Some(Object::Integer(90)));
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec!["Type", "Parent"]);
    }

    #[test]
    fn test_canonical_separators() {
        let mut dict = page();
        dict.insert("Title", Object::literal("x"));
        dict.insert("ID", Object::hex("00FF"));
        dict.insert("Kids", Object::Array(Array::from_integers([1, 2])));
        dict.insert("Missing", Object::Null);
        dict.insert("Open", Object::Boolean(true));
        assert_eq!(
            dict.canonical_string(),
            "<</Type/Page/Rotate 90/Title(x)/ID<00FF>/Kids[1 2]/Missing null/Open true>>"
        );
    }

    #[test]
    fn test_empty_dict_forms() {
        let dict = Dict::new();
        assert_eq!(dict.canonical_string(), "<<>>");
        assert_eq!(dict.indented_string(1), "<<\n>>");
    }

    #[test]
    fn test_nested_debug_form() {
        let mut inner = Dict::new();
        inner.insert("Size", Object::Integer(4));
        let mut outer = Dict::new();
        outer.insert("Inner", Object::Dict(inner));
        outer.insert("Box", Object::Array(Array::from_integers([0, 1])));
        assert_eq!(
            outer.debug_string(),
            "<<\n\t<Inner, <<\n\t\t<Size, 4>\n\t>>>\n\t<Box, [0 1]>\n>>"
        );
    }

    #[test]
    fn test_key_encoding() {
        let mut dict = Dict::new();
        dict.insert("A B", Object::Integer(1));
        assert_eq!(dict.canonical_string(), "<</A#20B 1>>");
    }
}
