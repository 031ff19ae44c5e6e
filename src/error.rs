//! Error types for object comparison and conversion.
//!
//! Only recoverable conditions live here. A value that cannot be written in
//! canonical form is not an error but a [`Fault`](crate::Fault), handed to a
//! [`FaultReporter`](crate::FaultReporter) that never returns.
//!
//! ## Error Categories
//!
//! - **Resolution errors**: a reference points nowhere, or references loop
//! - **Content errors**: a hex string holds characters that are not hex digits
//! - **Date errors**: a string does not follow the `D:YYYYMMDDHHmmSSOHH'mm'` layout
//! - **I/O errors**: writing rendered output failed
//!
//! ## Examples
//!
//! ```rust
//! use pdfobj::{Array, Error, IndirectRef, Object, XRefTable};
//!
//! let array = Array::from(vec![Object::reference(7, 0)]);
//! let table = XRefTable::new();
//!
//! let result = array.contains(&Object::Integer(1), &table);
//! assert!(matches!(result, Err(Error::DanglingReference(r)) if r == IndirectRef::new(7, 0)));
//! ```

use crate::IndirectRef;
use thiserror::Error;

/// Represents all recoverable errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A reference has no entry in the resolution table.
    #[error("dangling reference: no object stored for {0}")]
    DanglingReference(IndirectRef),

    /// Following references led back to one already visited.
    #[error("reference cycle detected at {0}")]
    ReferenceCycle(IndirectRef),

    /// Hex string content that cannot be decoded.
    #[error("invalid hex string <{content}>: unexpected character {found:?}")]
    InvalidHexString { content: String, found: char },

    /// Malformed date string.
    #[error("invalid date string {input:?}: {msg}")]
    InvalidDate { input: String, msg: String },

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an invalid hex string error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdfobj::Error;
    ///
    /// let err = Error::invalid_hex("4G", 'G');
    /// assert!(err.to_string().contains("<4G>"));
    /// ```
    pub fn invalid_hex(content: &str, found: char) -> Self {
        Error::InvalidHexString {
            content: content.to_string(),
            found,
        }
    }

    /// Creates a date parsing error.
    pub fn invalid_date(input: &str, msg: &str) -> Self {
        Error::InvalidDate {
            input: input.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
