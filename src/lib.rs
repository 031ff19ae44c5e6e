//! # pdfobj
//!
//! An in-memory object model for PDF documents, with two ways to turn it into
//! text: the exact syntax a PDF reader parses, and an indented debug form for
//! logs.
//!
//! ## Object Model
//!
//! [`Object`] is a closed enum: null, boolean, integer, real, string literal,
//! hex string, name, indirect reference, [`Dict`] and [`Array`]. Arrays and
//! dictionaries nest freely.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdfobj::{Array, Object};
//!
//! let mut array = Array::from_names(["PDF", "Text"]);
//! array.push(Object::Array(Array::from_integers([1, 2])));
//!
//! assert_eq!(array.canonical_string(), "[/PDF /Text[1 2]]");
//! assert_eq!(array.debug_string(), "[PDF Text [1 2]]");
//! ```
//!
//! ### Comparing Through References
//!
//! Two objects are equal when a reader of the document would see the same
//! value, so references are followed through a [`Resolver`]:
//!
//! ```rust
//! use pdfobj::{Array, IndirectRef, Object, XRefTable};
//!
//! let mut table = XRefTable::new();
//! table.insert(IndirectRef::new(12, 0), Object::Integer(5));
//!
//! let array = Array::from(vec![Object::reference(12, 0)]);
//! assert!(array.contains(&Object::Integer(5), &table).unwrap());
//! ```
//!
//! ### Building Graphs with pdf!
//!
//! ```rust
//! use pdfobj::pdf;
//!
//! let catalog = pdf!({
//!     "Type": /Catalog,
//!     "Names": [/A, /B]
//! });
//! assert_eq!(catalog.canonical_string(), "<</Type/Catalog/Names[/A /B]>>");
//! ```
//!
//! ## Failure Model
//!
//! - Comparison returns [`Error`] when a reference is dangling or cyclic.
//! - Debug rendering never fails.
//! - Canonical rendering of a value with no valid syntax (an infinite real,
//!   say) is a [`Fault`]. It goes to a [`FaultReporter`] that never returns;
//!   by default the fault is logged through `tracing` and the process aborts.
//!
//! ## Logging
//!
//! The crate emits `tracing` events and installs no subscriber:
//! faults at `error`, aborted membership tests at `debug`, reference
//! resolution steps at `trace`.

pub mod array;
pub mod date;
pub mod dict;
pub mod equal;
pub mod error;
pub mod fault;
pub mod macros;
pub mod object;
pub mod options;
mod render;
pub mod xref;

pub use array::Array;
pub use dict::Dict;
pub use equal::{decode_hex, decode_literal, equal_objects};
pub use error::{Error, Result};
pub use fault::{Fault, FaultReporter};
pub use object::{IndirectRef, Object};
pub use options::{FaultPolicy, RenderOptions};
pub use xref::{Resolver, XRefTable};

use std::io;

/// Renders the debug form of any object.
///
/// # Examples
///
/// ```rust
/// use pdfobj::{to_debug_string, Object};
///
/// assert_eq!(to_debug_string(&Object::reference(3, 0)), "(3 0 R)");
/// ```
#[must_use]
pub fn to_debug_string(object: &Object) -> String {
    to_debug_string_with_options(object, &RenderOptions::default())
}

/// Renders the debug form starting at `options.indent_level`.
#[must_use]
pub fn to_debug_string_with_options(object: &Object, options: &RenderOptions) -> String {
    render::debug_form(object, options.indent_level)
}

/// Renders the canonical form of any object.
///
/// Aborts the process if the graph holds a value with no valid syntax.
///
/// # Examples
///
/// ```rust
/// use pdfobj::{to_canonical_string, Object};
///
/// assert_eq!(to_canonical_string(&Object::Real(0.25)), "0.25");
/// ```
#[must_use]
pub fn to_canonical_string(object: &Object) -> String {
    to_canonical_string_with_options(object, &RenderOptions::default())
}

/// Renders the canonical form, reporting faults per `options.fault_policy`.
#[must_use]
pub fn to_canonical_string_with_options(object: &Object, options: &RenderOptions) -> String {
    render::canonical_form(object, &options.fault_policy)
}

/// Writes the canonical form of an object to `writer`.
///
/// # Examples
///
/// ```rust
/// use pdfobj::{to_writer, Array, Object};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Object::Array(Array::from_integers([1, 2]))).unwrap();
/// assert_eq!(buffer, b"[1 2]");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, object: &Object) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(to_canonical_string(object).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}
