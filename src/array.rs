//! The array object: an ordered collection of PDF objects.
//!
//! Order is data here (coordinates, matrix entries, page kids), so every
//! operation preserves it. Duplicates and empty arrays are legal.
//!
//! ## Examples
//!
//! ```rust
//! use pdfobj::{Array, IndirectRef, Object, XRefTable};
//!
//! let kinds = Array::from_names(["Text", "ImageB"]);
//! assert_eq!(kinds.canonical_string(), "[/Text /ImageB]");
//!
//! let mut table = XRefTable::new();
//! table.insert(IndirectRef::new(3, 0), Object::Integer(5));
//! let values = Array::from(vec![Object::reference(3, 0)]);
//! assert!(values.contains(&Object::Integer(5), &table).unwrap());
//! ```

use crate::fault::FaultReporter;
use crate::{equal_objects, render, Object, Resolver, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered sequence of objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array(Vec<Object>);

impl Array {
    /// Creates an empty `Array`.
    #[must_use]
    pub fn new() -> Self {
        Array(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    /// Builds an array of string literals.
    ///
    /// Each input is taken as literal content as-is, escapes included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::Array;
    ///
    /// let array = Array::from_strings(["Hello", "a \\(b\\)"]);
    /// assert_eq!(array.canonical_string(), "[(Hello) (a \\(b\\))]");
    /// ```
    #[must_use]
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        strings.into_iter().map(|s| Object::StringLiteral(s.into())).collect()
    }

    /// Builds an array of names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::Array;
    ///
    /// assert_eq!(Array::from_names(["A", "B"]).canonical_string(), "[/A /B]");
    /// assert_eq!(Array::from_names(Vec::<String>::new()).canonical_string(), "[]");
    /// ```
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|s| Object::Name(s.into())).collect()
    }

    /// Builds an array of reals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::Array;
    ///
    /// assert_eq!(Array::from_reals([0.5, 2.0]).canonical_string(), "[0.5 2.0]");
    /// ```
    #[must_use]
    pub fn from_reals<I>(reals: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        reals.into_iter().map(Object::Real).collect()
    }

    /// Builds an array of integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::Array;
    ///
    /// assert_eq!(Array::from_integers([0, 0, 612, 792]).canonical_string(), "[0 0 612 792]");
    /// ```
    #[must_use]
    pub fn from_integers<I>(integers: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        integers.into_iter().map(Object::Integer).collect()
    }

    pub fn push(&mut self, object: impl Into<Object>) {
        self.0.push(object.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Object> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Object] {
        &self.0
    }

    /// Returns `true` if any element equals `object` once references are
    /// resolved through `table`.
    ///
    /// Elements are tested in order and the scan stops at the first match.
    ///
    /// # Errors
    ///
    /// Returns the first comparison error, such as a dangling reference.
    /// Elements after the failing one are not examined.
    pub fn contains<R: Resolver + ?Sized>(&self, object: &Object, table: &R) -> Result<bool> {
        for (index, entry) in self.0.iter().enumerate() {
            match equal_objects(entry, object, table) {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(err) => {
                    tracing::debug!(index, error = %err, "array membership test aborted");
                    return Err(err);
                }
            }
        }
        Ok(false)
    }

    /// Renders the debug form, with nested blocks indented from `level`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::{Array, Dict, Object};
    ///
    /// let mut font = Dict::new();
    /// font.insert("Size", Object::Integer(9));
    ///
    /// let mut array = Array::from_integers([1]);
    /// array.push(font);
    /// array.push(Object::Integer(2));
    /// assert_eq!(array.indented_string(1), "[1\n\t<<\n\t\t<Size, 9>\n\t>>\n\t2]");
    /// ```
    #[must_use]
    pub fn indented_string(&self, level: usize) -> String {
        let mut out = String::new();
        render::write_array(&render::DebugForm, &mut out, self, level);
        out
    }

    /// Renders the debug form at the top level.
    #[must_use]
    pub fn debug_string(&self) -> String {
        self.indented_string(1)
    }

    /// Renders the exact on-disk form.
    ///
    /// # Panics
    ///
    /// Never returns a malformed string: an element with no valid syntax,
    /// such as an infinite real, logs the fault and aborts the process. Use
    /// [`Array::canonical_string_with`] to choose another policy.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        self.canonical_string_with(&crate::FaultPolicy::Abort)
    }

    /// Renders the exact on-disk form, handing unrenderable elements to `reporter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::{Array, FaultPolicy, Object};
    ///
    /// let inner = Object::Array(Array::from_integers([1, 2]));
    /// let nested = Array::from(vec![inner, Object::Integer(3)]);
    /// assert_eq!(nested.canonical_string_with(&FaultPolicy::Panic), "[[1 2] 3]");
    /// ```
    #[must_use]
    pub fn canonical_string_with(&self, reporter: &dyn FaultReporter) -> String {
        let mut out = String::with_capacity(2 + self.0.len() * 4);
        render::write_array(&render::CanonicalForm::new(reporter), &mut out, self, 0);
        out
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

impl Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl From<Vec<Object>> for Array {
    fn from(value: Vec<Object>) -> Self {
        Array(value)
    }
}

impl From<Array> for Vec<Object> {
    fn from(value: Array) -> Self {
        value.0
    }
}

impl FromIterator<Object> for Array {
    fn from_iter<T: IntoIterator<Item = Object>>(iter: T) -> Self {
        Array(Vec::from_iter(iter))
    }
}

impl Extend<Object> for Array {
    fn extend<T: IntoIterator<Item = Object>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Array {
    type Item = Object;
    type IntoIter = std::vec::IntoIter<Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dict, Error, FaultPolicy, IndirectRef, XRefTable};

    fn canonical(array: &Array) -> String {
        array.canonical_string_with(&FaultPolicy::Panic)
    }

    #[test]
    fn test_builders_keep_order_and_kind() {
        let names = Array::from_names(["B", "A", "B"]);
        assert_eq!(names.len(), 3);
        assert_eq!(names.get(2), Some(&Object::name("B")));

        let strings = Array::from_strings(vec!["x".to_string()]);
        assert_eq!(strings.get(0), Some(&Object::literal("x")));

        let reals = Array::from_reals([1.0]);
        assert_eq!(reals.get(0), Some(&Object::Real(1.0)));

        let ints = Array::from_integers(Vec::new());
        assert!(ints.is_empty());
        assert_eq!(canonical(&ints), "[]");
        assert_eq!(ints.debug_string(), "[]");
    }

    #[test]
    fn test_canonical_separators() {
        let mut array = Array::new();
        array.push(Object::Null);
        array.push(Object::reference(4, 0));
        array.push(Object::name("N"));
        array.push(Object::literal("s"));
        array.push(Object::hex("0A"));
        array.push(Object::Boolean(true));
        array.push(Object::Real(1.25));
        assert_eq!(canonical(&array), "[null 4 0 R /N (s) <0A> true 1.25]");
    }

    #[test]
    fn test_canonical_nested_containers_take_no_separator() {
        let mut dict = Dict::new();
        dict.insert("K", Object::Integer(1));
        let mut array = Array::from_integers([1]);
        array.push(Array::from_integers([2, 3]));
        array.push(dict);
        array.push(Object::Integer(4));
        assert_eq!(canonical(&array), "[1[2 3]<</K 1>> 4]");

        let leading = Array::from(vec![
            Object::Array(Array::from_integers([1, 2])),
            Object::Integer(3),
        ]);
        assert_eq!(canonical(&leading), "[[1 2] 3]");
    }

    #[test]
    fn test_debug_nested_array_is_inline() {
        let mut array = Array::from_integers([1]);
        array.push(Array::from_names(["A"]));
        array.push(Object::Integer(2));
        assert_eq!(array.debug_string(), "[1 [A] 2]");
    }

    #[test]
    fn test_debug_nested_array_renders_one_level_deeper() {
        let mut dict = Dict::new();
        dict.insert("K", Object::Integer(1));
        let inner = Array::from(vec![Object::Dict(dict)]);
        let outer = Array::from(vec![Object::Array(inner)]);
        assert_eq!(outer.debug_string(), "[[\n\t\t<<\n\t\t\t<K, 1>\n\t\t>>\n\t\t]]");
    }

    #[test]
    fn test_debug_separator_restarts_after_dict() {
        let mut dict = Dict::new();
        dict.insert("K", Object::name("V"));
        let mut array = Array::from_integers([1]);
        array.push(dict.clone());
        array.push(Object::Integer(2));
        array.push(Object::Integer(3));
        array.push(dict);
        assert_eq!(
            array.debug_string(),
            "[1\n\t<<\n\t\t<K, V>\n\t>>\n\t2 3\n\t<<\n\t\t<K, V>\n\t>>\n\t]"
        );
    }

    #[test]
    fn test_display_matches_debug_string() {
        let array = Array::from_reals([0.5]);
        assert_eq!(array.to_string(), "[0.50]");
        assert_eq!(array.to_string(), array.debug_string());
    }

    #[test]
    fn test_contains_scans_every_position() {
        let table = XRefTable::new();
        let array = Array::from_integers([3, 1, 4]);
        for value in [3, 1, 4] {
            assert!(array.contains(&Object::Integer(value), &table).unwrap());
        }
        assert!(!array.contains(&Object::Integer(5), &table).unwrap());
        assert!(!Array::new().contains(&Object::Null, &table).unwrap());
    }

    #[test]
    fn test_contains_resolves_references() {
        let mut table = XRefTable::new();
        table.insert(IndirectRef::new(10, 0), Object::Integer(5));
        let array = Array::from(vec![Object::name("X"), Object::reference(10, 0)]);
        assert!(array.contains(&Object::Integer(5), &table).unwrap());
    }

    #[test]
    fn test_contains_stops_on_error() {
        let table = XRefTable::new();
        let array = Array::from(vec![Object::reference(1, 0), Object::Integer(5)]);
        assert_eq!(
            array.contains(&Object::Integer(5), &table),
            Err(Error::DanglingReference(IndirectRef::new(1, 0)))
        );
    }

    #[test]
    fn test_contains_returns_before_reaching_bad_entry() {
        let table = XRefTable::new();
        let array = Array::from(vec![Object::Integer(5), Object::reference(1, 0)]);
        assert!(array.contains(&Object::Integer(5), &table).unwrap());
    }

    #[test]
    fn test_contains_nested_array() {
        let table = XRefTable::new();
        let mut array = Array::from_integers([1]);
        array.push(Array::from_integers([2, 3]));
        let needle = Object::Array(Array::from_integers([2, 3]));
        assert!(array.contains(&needle, &table).unwrap());
        let reversed = Object::Array(Array::from_integers([3, 2]));
        assert!(!array.contains(&reversed, &table).unwrap());
    }

    #[test]
    fn test_iteration_and_conversion() {
        let array: Array = vec![Object::Integer(1), Object::Integer(2)].into_iter().collect();
        let doubled: Vec<i64> = array.iter().filter_map(Object::as_i64).map(|i| i * 2).collect();
        assert_eq!(doubled, vec![2, 4]);

        let mut extended = array.clone();
        extended.extend([Object::Null]);
        assert_eq!(extended.as_slice().len(), 3);

        let back: Vec<Object> = array.into();
        assert_eq!(back.len(), 2);
    }
}
