//! The closed set of PDF object variants.
//!
//! This module provides the [`Object`] enum, one variant per kind of value a
//! document can hold, and [`IndirectRef`], the token that stands for an object
//! stored elsewhere in the document.
//!
//! ## Core Types
//!
//! - [`Object`]: null, boolean, integer, real, string literal, hex string,
//!   name, indirect reference, dictionary or array
//! - [`IndirectRef`]: object number plus generation, written `12 0 R`
//!
//! ## Usage Patterns
//!
//! ### Creating Objects
//!
//! ```rust
//! use pdfobj::{Object, pdf};
//!
//! let count = Object::from(3);
//! let title = Object::from("Annual Report");
//! let kind = Object::name("Page");
//! let parent = Object::reference(2, 0);
//!
//! let media_box = pdf!([0, 0, 612, 792]);
//! assert_eq!(media_box.canonical_string(), "[0 0 612 792]");
//! ```
//!
//! ### Two String Forms
//!
//! ```rust
//! use pdfobj::Object;
//!
//! let kind = Object::name("Page");
//! assert_eq!(kind.canonical_string(), "/Page");
//! assert_eq!(kind.debug_string(), "Page");
//! ```

use crate::{date, equal, render, Array, Dict};
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use std::fmt;

/// A reference to an object stored elsewhere in the document.
///
/// # Examples
///
/// ```rust
/// use pdfobj::IndirectRef;
///
/// let reference = IndirectRef::new(12, 0);
/// assert_eq!(reference.to_string(), "12 0 R");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndirectRef {
    pub object_number: u32,
    pub generation: u16,
}

impl IndirectRef {
    #[must_use]
    pub const fn new(object_number: u32, generation: u16) -> Self {
        IndirectRef {
            object_number,
            generation,
        }
    }
}

impl fmt::Display for IndirectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.object_number, self.generation)
    }
}

/// A single PDF value.
///
/// The variant set is closed: every renderer and the comparator match it
/// exhaustively, so a new variant cannot be added without teaching each of
/// them how to handle it.
///
/// String content is kept in lexical form. `StringLiteral` holds what sits
/// between the parentheses with escapes undecoded, `HexString` holds the hex
/// digits between the angle brackets. `Name` holds the decoded name without
/// its leading slash.
///
/// Derived `PartialEq` compares lexical forms and never follows references;
/// use [`equal_objects`](crate::equal_objects) for document-level equality.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Object {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    StringLiteral(String),
    HexString(String),
    Name(String),
    IndirectRef(IndirectRef),
    Dict(Dict),
    Array(Array),
}

impl Object {
    /// Creates a name object.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    /// Creates a string literal from its lexical content.
    #[must_use]
    pub fn literal(content: impl Into<String>) -> Self {
        Object::StringLiteral(content.into())
    }

    /// Creates a hex string from its hex digits.
    #[must_use]
    pub fn hex(digits: impl Into<String>) -> Self {
        Object::HexString(digits.into())
    }

    /// Creates an indirect reference.
    #[must_use]
    pub const fn reference(object_number: u32, generation: u16) -> Self {
        Object::IndirectRef(IndirectRef::new(object_number, generation))
    }

    /// Creates a date string literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{FixedOffset, TimeZone};
    /// use pdfobj::Object;
    ///
    /// let offset = FixedOffset::east_opt(3600).unwrap();
    /// let when = offset.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    /// let object = Object::date(&when);
    /// assert_eq!(object.canonical_string(), "(D:20240115103000+01'00')");
    /// assert_eq!(object.as_date(), Some(when));
    /// ```
    #[must_use]
    pub fn date(when: &DateTime<FixedOffset>) -> Self {
        Object::StringLiteral(date::format_date(when))
    }

    /// Name of the active variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Object::Null => "Null",
            Object::Boolean(_) => "Boolean",
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::StringLiteral(_) => "StringLiteral",
            Object::HexString(_) => "HexString",
            Object::Name(_) => "Name",
            Object::IndirectRef(_) => "IndirectRef",
            Object::Dict(_) => "Dict",
            Object::Array(_) => "Array",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Object::IndirectRef(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Object::Dict(_) | Object::Array(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value of an integer or real.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::Object;
    ///
    /// assert_eq!(Object::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Object::Real(0.5).as_f64(), Some(0.5));
    /// assert_eq!(Object::name("Two").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Object::Integer(i) => Some(*i as f64),
            Object::Real(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_reference(&self) -> Option<IndirectRef> {
        match self {
            Object::IndirectRef(r) => Some(*r),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Object::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Object::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Decoded bytes of a string literal or hex string.
    ///
    /// Returns `None` for other variants and for hex strings that do not decode.
    #[must_use]
    pub fn string_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Object::StringLiteral(raw) => Some(equal::decode_literal(raw)),
            Object::HexString(raw) => equal::decode_hex(raw).ok(),
            _ => None,
        }
    }

    /// Interprets a string object as a PDF date.
    #[must_use]
    pub fn as_date(&self) -> Option<DateTime<FixedOffset>> {
        let bytes = self.string_bytes()?;
        let text = std::str::from_utf8(&bytes).ok()?;
        date::parse_date(text).ok()
    }

    /// Renders the human-oriented debug form.
    #[must_use]
    pub fn debug_string(&self) -> String {
        render::debug_form(self, 1)
    }

    /// Renders the exact on-disk form, aborting the process on values that
    /// have no valid syntax.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        render::canonical_form(self, &crate::FaultPolicy::Abort)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Integer(i) => write!(f, "{}", i),
            Object::Real(r) => write!(f, "{:.2}", r),
            Object::StringLiteral(s) => write!(f, "({})", s),
            Object::HexString(s) => write!(f, "<{}>", s),
            Object::Name(name) => write!(f, "{}", name),
            Object::IndirectRef(r) => write!(f, "({})", r),
            Object::Dict(dict) => write!(f, "{}", dict),
            Object::Array(array) => write!(f, "{}", array),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Object::Null => serializer.serialize_unit(),
            Object::Boolean(b) => serializer.serialize_bool(*b),
            Object::Integer(i) => serializer.serialize_i64(*i),
            Object::Real(r) => serializer.serialize_f64(*r),
            Object::StringLiteral(raw) => {
                let bytes = equal::decode_literal(raw);
                serializer.serialize_str(&String::from_utf8_lossy(&bytes))
            }
            Object::HexString(raw) => {
                let bytes =
                    equal::decode_hex(raw).map_err(<S::Error as serde::ser::Error>::custom)?;
                serializer.serialize_bytes(&bytes)
            }
            Object::Name(name) => serializer.serialize_str(name),
            Object::IndirectRef(r) => serializer.collect_str(r),
            Object::Dict(dict) => dict.serialize(serializer),
            Object::Array(array) => array.serialize(serializer),
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Integer(value as i64)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<u32> for Object {
    fn from(value: u32) -> Self {
        Object::Integer(value as i64)
    }
}

impl From<f32> for Object {
    fn from(value: f32) -> Self {
        Object::Real(value as f64)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Real(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::StringLiteral(value.to_string())
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::StringLiteral(value)
    }
}

impl From<IndirectRef> for Object {
    fn from(value: IndirectRef) -> Self {
        Object::IndirectRef(value)
    }
}

impl From<Dict> for Object {
    fn from(value: Dict) -> Self {
        Object::Dict(value)
    }
}

impl From<Array> for Object {
    fn from(value: Array) -> Self {
        Object::Array(value)
    }
}

impl From<Vec<Object>> for Object {
    fn from(value: Vec<Object>) -> Self {
        Object::Array(Array::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Object::from(true), Object::Boolean(true));
        assert_eq!(Object::from(42i32), Object::Integer(42));
        assert_eq!(Object::from(42u32), Object::Integer(42));
        assert_eq!(Object::from(0.5f64), Object::Real(0.5));
        assert_eq!(Object::from("x"), Object::StringLiteral("x".to_string()));
        assert_eq!(
            Object::from(IndirectRef::new(1, 0)),
            Object::reference(1, 0)
        );
    }

    #[test]
    fn test_debug_forms_of_scalars() {
        assert_eq!(Object::Null.to_string(), "null");
        assert_eq!(Object::Boolean(false).to_string(), "false");
        assert_eq!(Object::Integer(-7).to_string(), "-7");
        assert_eq!(Object::Real(1.0).to_string(), "1.00");
        assert_eq!(Object::literal("hi").to_string(), "(hi)");
        assert_eq!(Object::hex("4142").to_string(), "<4142>");
        assert_eq!(Object::name("Type").to_string(), "Type");
        assert_eq!(Object::reference(4, 0).to_string(), "(4 0 R)");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Object::Null.kind(), "Null");
        assert_eq!(Object::Real(f64::NAN).kind(), "Real");
        assert_eq!(Object::Array(Array::new()).kind(), "Array");
    }

    #[test]
    fn test_string_bytes_decodes_both_string_kinds() {
        assert_eq!(Object::literal("a\\(b").string_bytes(), Some(b"a(b".to_vec()));
        assert_eq!(Object::hex("4142").string_bytes(), Some(b"AB".to_vec()));
        assert_eq!(Object::hex("zz").string_bytes(), None);
        assert_eq!(Object::Integer(1).string_bytes(), None);
    }

    #[test]
    fn test_as_date_rejects_non_dates() {
        assert_eq!(Object::literal("hello").as_date(), None);
        assert_eq!(Object::Integer(2024).as_date(), None);
    }
}
